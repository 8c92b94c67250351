//! Translate trait - Re-expressing subsets for foreign datasets

use linkview_core::{Dataset, Subset, ValueMap};

/// Trait for pluggable cross-dataset subset translation
///
/// A hub holds at most one translator. During
/// [`crate::Hub::translate_subset`], the hub calls `translate` once per
/// distinct client dataset and attaches whatever comes back.
///
/// Contract for implementations:
/// - Return `None` when the subset cannot be expressed for `target`.
///   This is the expected outcome for unrelated datasets and is skipped
///   silently, never an error.
/// - Construct the translated subset against `target` but do NOT attach
///   it; attachment is the hub's job. Construction fires the creation
///   notice for the new subset.
/// - The hub passes every client dataset, including the subset's own;
///   tolerate it (returning `None` is typical).
/// - Do not mutate the source subset or the hub.
pub trait Translate: Send {
    /// Re-express `subset` for `target`, or `None` if not translatable
    ///
    /// `params` carries caller-supplied arguments forwarded unchanged
    /// from [`crate::Hub::translate_subset_with`].
    fn translate(&self, subset: &Subset, target: &Dataset, params: &ValueMap) -> Option<Subset>;
}
