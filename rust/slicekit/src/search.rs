//! Predicate and equality search over sequences.

/// Returns the lowest index of an element satisfying `predicate`, or `None`
/// when no element does.
///
/// The scan runs front to back and stops at the first match, so ties always
/// resolve to the index nearest the front. The sequence is not modified.
pub fn position<T>(seq: &[T], mut predicate: impl FnMut(&T) -> bool) -> Option<usize> {
    seq.iter().position(|e| predicate(e))
}

/// Returns the highest index of an element satisfying `predicate`, or `None`
/// when no element does.
///
/// The scan runs back to front and stops at the first match, so ties always
/// resolve to the index nearest the back.
pub fn rposition<T>(seq: &[T], mut predicate: impl FnMut(&T) -> bool) -> Option<usize> {
    seq.iter().rposition(|e| predicate(e))
}

/// Returns the index of the first element equal to `target`, or `None` when
/// the value is absent.
pub fn index_of<T>(seq: &[T], target: &T) -> Option<usize>
where
    T: PartialEq,
{
    position(seq, |e| e == target)
}

/// Returns the index of the last element equal to `target`, or `None` when
/// the value is absent.
pub fn last_index_of<T>(seq: &[T], target: &T) -> Option<usize>
where
    T: PartialEq,
{
    rposition(seq, |e| e == target)
}
