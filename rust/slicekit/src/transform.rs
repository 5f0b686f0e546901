//! Element-wise transformation, filtering and iteration.

/// Produces a fresh vector with one output element per input element, in the
/// same order, each computed by applying `transform` independently.
pub fn map<T, U>(seq: &[T], mut transform: impl FnMut(&T) -> U) -> Vec<U> {
    seq.iter().map(|e| transform(e)).collect()
}

/// Produces a fresh vector containing, in original order, exactly the
/// elements for which `predicate` is true. The result never aliases the
/// input's storage.
pub fn filter<T>(seq: &[T], mut predicate: impl FnMut(&T) -> bool) -> Vec<T>
where
    T: Clone,
{
    seq.iter().filter(|&e| predicate(e)).cloned().collect()
}

/// Invokes `action` once per element, front to back, for side effects only.
/// The sequence itself is left unmodified.
pub fn for_each<T>(seq: &[T], mut action: impl FnMut(&T)) {
    seq.iter().for_each(|e| action(e));
}
