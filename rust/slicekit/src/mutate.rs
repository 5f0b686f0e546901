//! Checked insertion and the removal family.
//!
//! All operations here take the sequence by `&mut Vec<T>`, check their
//! preconditions before touching the buffer, and preserve the relative order
//! of every element they do not remove or shift. A failed precondition check
//! leaves the sequence exactly as it was.

use slicekit_common::{Result, result};

use crate::search;

/// Inserts `element` at `index`, shifting every element at or after `index`
/// one position to the right. Inserting at `index == vec.len()` appends.
///
/// # Errors
///
/// Fails with `IndexOutOfBounds` when `index > vec.len()`.
pub fn insert<T>(vec: &mut Vec<T>, index: usize, element: T) -> Result<()> {
    if index > vec.len() {
        return result::index_out_of_bounds(index, vec.len());
    }
    vec.insert(index, element);
    log::trace!("inserted element at index {index}, new len {}", vec.len());
    Ok(())
}

/// Removes and returns the element at `index`, shifting every subsequent
/// element one position to the left.
///
/// # Errors
///
/// Fails with `IndexOutOfBounds` when `index >= vec.len()`, which includes
/// every index on an empty sequence.
pub fn remove_at<T>(vec: &mut Vec<T>, index: usize) -> Result<T> {
    if index >= vec.len() {
        return result::index_out_of_bounds(index, vec.len());
    }
    let element = vec.remove(index);
    log::trace!("removed element at index {index}, new len {}", vec.len());
    Ok(element)
}

/// Removes the first element equal to `target`, shifting the tail left.
///
/// Returns whether an element was removed; an absent value is a no-op, not
/// an error.
pub fn remove<T>(vec: &mut Vec<T>, target: &T) -> bool
where
    T: PartialEq,
{
    match search::index_of(vec, target) {
        Some(index) => {
            vec.remove(index);
            true
        }
        None => false,
    }
}

/// Removes every element satisfying `predicate`, preserving the relative
/// order of the survivors, and returns the number of elements removed.
///
/// Zero matches is fine; applying the same predicate a second time removes
/// nothing.
pub fn remove_where<T>(vec: &mut Vec<T>, mut predicate: impl FnMut(&T) -> bool) -> usize {
    let len_before = vec.len();
    vec.retain(|e| !predicate(e));
    let removed = len_before - vec.len();
    if removed > 0 {
        log::trace!("removed {removed} elements, new len {}", vec.len());
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use slicekit_common::error::ErrorKind;

    #[test]
    fn test_insert() {
        let mut vec = vec![4, 5, 6];
        insert(&mut vec, 1, 99).unwrap();
        assert_eq!(vec, vec![4, 99, 5, 6]);
    }

    #[test]
    fn test_insert_at_front_and_back() {
        let mut vec = vec![5];
        insert(&mut vec, 0, 4).unwrap();
        insert(&mut vec, 2, 6).unwrap();
        assert_eq!(vec, vec![4, 5, 6]);
    }

    #[test]
    fn test_insert_into_empty() {
        let mut vec = Vec::new();
        insert(&mut vec, 0, 1).unwrap();
        assert_eq!(vec, vec![1]);
    }

    #[test]
    fn test_insert_out_of_bounds() {
        let mut vec = vec![4, 5, 6];
        let err = insert(&mut vec, 4, 99).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::IndexOutOfBounds { index: 4, len: 3 }
        ));
        // Failed check must not leave a partial mutation behind.
        assert_eq!(vec, vec![4, 5, 6]);
    }

    #[test]
    fn test_insert_shifts_preserve_order() {
        let mut vec: Vec<i32> = (0..10).collect();
        insert(&mut vec, 4, 100).unwrap();
        assert_eq!(vec.len(), 11);
        assert_eq!(&vec[..4], &[0, 1, 2, 3]);
        assert_eq!(vec[4], 100);
        assert_eq!(&vec[5..], &[4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_remove_at() {
        let mut vec = vec![4, 99, 5, 6];
        assert_eq!(remove_at(&mut vec, 0).unwrap(), 4);
        assert_eq!(vec, vec![99, 5, 6]);
    }

    #[test]
    fn test_remove_at_shifts_left() {
        let mut vec: Vec<i32> = (0..10).collect();
        assert_eq!(remove_at(&mut vec, 3).unwrap(), 3);
        assert_eq!(vec.len(), 9);
        assert_eq!(vec[3], 4);
        assert_eq!(vec, vec![0, 1, 2, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_remove_at_out_of_bounds() {
        let mut vec = vec![4, 5, 6];
        assert!(remove_at(&mut vec, 3).is_err());
        assert_eq!(vec, vec![4, 5, 6]);

        let mut empty: Vec<i32> = Vec::new();
        let err = remove_at(&mut empty, 0).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::IndexOutOfBounds { index: 0, len: 0 }
        ));
    }

    #[test]
    fn test_remove_first_occurrence() {
        let mut vec = vec![1, 2, 2, 2, 3];
        assert!(remove(&mut vec, &2));
        assert_eq!(vec, vec![1, 2, 2, 3]);
    }

    #[test]
    fn test_remove_absent_value_is_noop() {
        let mut vec = vec![4, 5, 6];
        assert!(!remove(&mut vec, &7));
        assert_eq!(vec, vec![4, 5, 6]);

        let mut empty: Vec<i32> = Vec::new();
        assert!(!remove(&mut empty, &7));
        assert!(empty.is_empty());
    }

    #[test]
    fn test_remove_where() {
        let mut vec = vec![1, 2, 3, 4, 5, 6];
        assert_eq!(remove_where(&mut vec, |&e| e % 2 == 0), 3);
        assert_eq!(vec, vec![1, 3, 5]);
    }

    #[test]
    fn test_remove_where_no_matches() {
        let mut vec = vec![4, 5, 6];
        assert_eq!(remove_where(&mut vec, |&e| e > 100), 0);
        assert_eq!(vec, vec![4, 5, 6]);
    }

    #[test]
    fn test_remove_where_idempotent() {
        let mut vec = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let removed = remove_where(&mut vec, |&e| e % 2 == 0);
        assert_eq!(removed, 4);
        let after_first = vec.clone();
        assert_eq!(remove_where(&mut vec, |&e| e % 2 == 0), 0);
        assert_eq!(vec, after_first);
    }

    #[test]
    fn test_remove_where_all() {
        let mut vec = vec![4, 4, 4];
        assert_eq!(remove_where(&mut vec, |&e| e == 4), 3);
        assert!(vec.is_empty());
    }

    // remove_where must be equivalent to repeated single-element removal,
    // whatever the internal batching strategy.
    #[test]
    fn test_remove_where_matches_repeated_remove_at() {
        for _ in 0..100 {
            let len = fastrand::usize(0..50);
            let original: Vec<u32> = (0..len).map(|_| fastrand::u32(0..10)).collect();
            let threshold = fastrand::u32(0..10);

            let mut batched = original.clone();
            let removed = remove_where(&mut batched, |&e| e < threshold);

            let mut one_by_one = original.clone();
            let mut removed_single = 0;
            while let Some(index) = crate::search::position(&one_by_one, |&e| e < threshold) {
                remove_at(&mut one_by_one, index).unwrap();
                removed_single += 1;
            }

            assert_eq!(batched, one_by_one);
            assert_eq!(removed, removed_single);
        }
    }

    #[test]
    fn test_insert_then_remove_at_scenario() {
        let mut vec = vec![4, 5, 6];
        insert(&mut vec, 1, 99).unwrap();
        assert_eq!(vec, vec![4, 99, 5, 6]);
        remove_at(&mut vec, 0).unwrap();
        assert_eq!(vec, vec![99, 5, 6]);
    }
}
