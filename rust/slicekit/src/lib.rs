//! Generic sequence operations over slices and vectors.
//!
//! This crate is a convenience layer over `Vec<T>` and `&[T]` for application
//! code that would otherwise hand-roll the same traversals repeatedly. It
//! offers:
//!
//! - **Search**: first/last index by predicate or by value
//! - **Quantifiers**: membership, any/all, match counting
//! - **Range extraction**: checked sub-sequence copies
//! - **Mutation**: checked insertion and the removal family
//! - **Transformation**: map, filter and per-element iteration
//!
//! Every operation is a single linear pass or a constant-size mutation. The
//! inspection family takes `&[T]` and never modifies its input; the mutation
//! family takes `&mut Vec<T>` and preserves the relative order of all
//! untouched elements. Index and range preconditions are checked up front and
//! reported through [`slicekit_common::Result`] before any mutation becomes
//! observable; "not found" outcomes are plain values (`None`, `false`, a zero
//! count), never errors.
//!
//! The same operations are available in method form through the
//! [`SequenceExt`] and [`SequenceEditExt`] extension traits.

pub mod access;
pub mod ext;
pub mod mutate;
pub mod quantify;
pub mod range;
pub mod search;
pub mod transform;

pub use ext::{SequenceEditExt, SequenceExt};
