//! Checked extraction of sub-sequences.

use slicekit_common::{Result, result};

/// Returns a fresh vector holding the elements at indices `[begin, end)`,
/// preserving their order.
///
/// The result never aliases the input's storage, and `begin == end` yields an
/// empty vector: an empty range is not an error condition.
///
/// # Errors
///
/// Fails with `InvalidRange` when `begin > end` or `end > seq.len()`. The
/// input is not modified in any case.
pub fn get_range<T>(seq: &[T], begin: usize, end: usize) -> Result<Vec<T>>
where
    T: Clone,
{
    if begin > end || end > seq.len() {
        return result::invalid_range(begin, end, seq.len());
    }
    Ok(seq[begin..end].to_vec())
}
