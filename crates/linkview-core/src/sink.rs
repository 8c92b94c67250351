//! SubsetSink trait - The seam between subsets and whatever routes their changes
//!
//! Datasets hold a weak reference to at most one sink; subsets resolve it
//! through their dataset when reporting a change. The hub crate provides
//! the canonical implementation, so this crate never has to know it.

use crate::subset::Subset;
use std::fmt;

/// One change to a subset's state, as delivered to observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubsetUpdate {
    /// The subset was just constructed
    Created,
    /// One attribute changed; `attr` names it (see [`crate::attr`])
    Updated {
        /// Name of the changed attribute
        attr: &'static str,
    },
    /// The subset is being discarded
    Deleted,
}

impl SubsetUpdate {
    /// Check if this is a creation notice
    pub fn is_created(&self) -> bool {
        matches!(self, SubsetUpdate::Created)
    }

    /// Check if this is a deletion notice
    pub fn is_deleted(&self) -> bool {
        matches!(self, SubsetUpdate::Deleted)
    }

    /// The changed attribute name, for attribute updates
    pub fn attr(&self) -> Option<&'static str> {
        match self {
            SubsetUpdate::Updated { attr } => Some(attr),
            _ => None,
        }
    }
}

impl fmt::Display for SubsetUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubsetUpdate::Created => write!(f, "created"),
            SubsetUpdate::Updated { attr } => write!(f, "updated {}", attr),
            SubsetUpdate::Deleted => write!(f, "deleted"),
        }
    }
}

/// Receiver of subset change reports
///
/// Implementations route each report to every interested observer,
/// synchronously, on the reporting thread.
pub trait SubsetSink: Send + Sync {
    /// Deliver one subset change
    fn broadcast_subset_update(&self, subset: &Subset, update: SubsetUpdate);
}
