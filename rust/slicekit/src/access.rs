//! Basic accessors: emptiness, ends of the sequence, clearing, concatenation.

use slicekit_common::{Result, result};

/// Returns `true` when the sequence contains no elements.
pub fn is_empty<T>(seq: &[T]) -> bool {
    seq.is_empty()
}

/// Returns a reference to the first element.
///
/// # Errors
///
/// Fails with `EmptySequence` on an empty sequence.
pub fn first<T>(seq: &[T]) -> Result<&T> {
    match seq.first() {
        Some(element) => Ok(element),
        None => result::empty_sequence("read the first element of"),
    }
}

/// Returns a reference to the last element.
///
/// # Errors
///
/// Fails with `EmptySequence` on an empty sequence.
pub fn last<T>(seq: &[T]) -> Result<&T> {
    match seq.last() {
        Some(element) => Ok(element),
        None => result::empty_sequence("read the last element of"),
    }
}

/// Removes and returns the last element.
///
/// # Errors
///
/// Fails with `EmptySequence` on an empty sequence.
pub fn pop<T>(vec: &mut Vec<T>) -> Result<T> {
    match vec.pop() {
        Some(element) => {
            log::trace!("popped last element, new len {}", vec.len());
            Ok(element)
        }
        None => result::empty_sequence("pop"),
    }
}

/// Drops all elements, leaving the sequence empty.
pub fn clear<T>(vec: &mut Vec<T>) {
    vec.clear();
}

/// Appends all of `elements` at the end of `vec`, preserving the order of
/// both parts.
pub fn append_all<T>(vec: &mut Vec<T>, elements: Vec<T>) {
    vec.extend(elements);
}
