//! Extension traits exposing the sequence operations in method form.
//!
//! [`SequenceExt`] covers the read-only family and is implemented for `[T]`
//! (and therefore usable on `Vec<T>` through deref). [`SequenceEditExt`]
//! covers the mutating family and is implemented for `Vec<T>`. Both are thin
//! delegations to the free functions in this crate.

use slicekit_common::Result;

use crate::{access, mutate, quantify, range, search, transform};

/// Read-only sequence operations in method form.
pub trait SequenceExt<T> {
    /// See [`search::position`].
    fn position_where(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize>;

    /// See [`search::rposition`].
    fn rposition_where(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize>;

    /// See [`search::index_of`].
    fn index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq;

    /// See [`search::last_index_of`].
    fn last_index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq;

    /// See [`quantify::any`].
    fn any_where(&self, predicate: impl FnMut(&T) -> bool) -> bool;

    /// See [`quantify::all`].
    fn all_where(&self, predicate: impl FnMut(&T) -> bool) -> bool;

    /// See [`quantify::count_where`].
    fn count_where(&self, predicate: impl FnMut(&T) -> bool) -> usize;

    /// See [`range::get_range`].
    fn get_range(&self, begin: usize, end: usize) -> Result<Vec<T>>
    where
        T: Clone;

    /// See [`transform::map`].
    fn map_each<U>(&self, transform: impl FnMut(&T) -> U) -> Vec<U>;

    /// See [`transform::filter`].
    fn filter_where(&self, predicate: impl FnMut(&T) -> bool) -> Vec<T>
    where
        T: Clone;

    /// See [`access::first`].
    fn try_first(&self) -> Result<&T>;

    /// See [`access::last`].
    fn try_last(&self) -> Result<&T>;
}

/// Mutating sequence operations in method form.
pub trait SequenceEditExt<T> {
    /// See [`mutate::insert`].
    fn insert_at(&mut self, index: usize, element: T) -> Result<()>;

    /// See [`mutate::remove_at`].
    fn remove_at(&mut self, index: usize) -> Result<T>;

    /// See [`mutate::remove`].
    fn remove_value(&mut self, target: &T) -> bool
    where
        T: PartialEq;

    /// See [`mutate::remove_where`].
    fn remove_where(&mut self, predicate: impl FnMut(&T) -> bool) -> usize;

    /// See [`access::pop`].
    fn try_pop(&mut self) -> Result<T>;

    /// See [`access::append_all`].
    fn append_all(&mut self, elements: Vec<T>);
}

impl<T> SequenceExt<T> for [T] {
    fn position_where(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        search::position(self, predicate)
    }

    fn rposition_where(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        search::rposition(self, predicate)
    }

    fn index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        search::index_of(self, target)
    }

    fn last_index_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        search::last_index_of(self, target)
    }

    fn any_where(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        quantify::any(self, predicate)
    }

    fn all_where(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        quantify::all(self, predicate)
    }

    fn count_where(&self, predicate: impl FnMut(&T) -> bool) -> usize {
        quantify::count_where(self, predicate)
    }

    fn get_range(&self, begin: usize, end: usize) -> Result<Vec<T>>
    where
        T: Clone,
    {
        range::get_range(self, begin, end)
    }

    fn map_each<U>(&self, transform: impl FnMut(&T) -> U) -> Vec<U> {
        transform::map(self, transform)
    }

    fn filter_where(&self, predicate: impl FnMut(&T) -> bool) -> Vec<T>
    where
        T: Clone,
    {
        transform::filter(self, predicate)
    }

    fn try_first(&self) -> Result<&T> {
        access::first(self)
    }

    fn try_last(&self) -> Result<&T> {
        access::last(self)
    }
}

impl<T> SequenceEditExt<T> for Vec<T> {
    fn insert_at(&mut self, index: usize, element: T) -> Result<()> {
        mutate::insert(self, index, element)
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        mutate::remove_at(self, index)
    }

    fn remove_value(&mut self, target: &T) -> bool
    where
        T: PartialEq,
    {
        mutate::remove(self, target)
    }

    fn remove_where(&mut self, predicate: impl FnMut(&T) -> bool) -> usize {
        mutate::remove_where(self, predicate)
    }

    fn try_pop(&mut self) -> Result<T> {
        access::pop(self)
    }

    fn append_all(&mut self, elements: Vec<T>) {
        access::append_all(self, elements)
    }
}
