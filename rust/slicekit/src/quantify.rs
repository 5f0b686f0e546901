//! Membership tests and quantifiers.

/// Returns `true` when at least one element equals `target`.
pub fn contains<T>(seq: &[T], target: &T) -> bool
where
    T: PartialEq,
{
    seq.iter().any(|e| e == target)
}

/// Returns `true` when at least one element satisfies `predicate`.
///
/// Vacuously `false` on an empty sequence.
pub fn any<T>(seq: &[T], mut predicate: impl FnMut(&T) -> bool) -> bool {
    seq.iter().any(|e| predicate(e))
}

/// Returns `true` when every element satisfies `predicate`.
///
/// Vacuously `true` on an empty sequence.
pub fn all<T>(seq: &[T], mut predicate: impl FnMut(&T) -> bool) -> bool {
    seq.iter().all(|e| predicate(e))
}

/// Returns the number of elements satisfying `predicate`.
pub fn count_where<T>(seq: &[T], mut predicate: impl FnMut(&T) -> bool) -> usize {
    seq.iter().filter(|&e| predicate(e)).count()
}
