//! Client trait - The abstraction layer between Hub and viewers
//!
//! The hub only interacts with Client, never with concrete viewer types.
//! This keeps widgets, plots, and headless observers interchangeable.

use linkview_core::{Dataset, Subset, SubsetUpdate};
use std::sync::{Arc, Mutex};

/// A shared, lockable client handle, as stored in hub registries
///
/// The hub never owns clients; applications keep their own handle and
/// register a clone. Removal compares handles by identity, so keep the
/// handle you registered with.
pub type SharedClient = Arc<Mutex<dyn Client>>;

/// Trait for components that display a dataset and react to subset changes
///
/// Implementations receive every broadcast the hub routes, including
/// updates for subsets of datasets they do not display; filtering is the
/// client's job. Hooks run synchronously on the mutating thread, in
/// registration order.
///
/// Calling back into the hub or mutating subsets from `update_subset` is
/// not supported; the hook runs while its own client lock is held.
pub trait Client: Send {
    /// The dataset this client displays
    fn data(&self) -> Dataset;

    /// React to one subset change
    fn update_subset(&mut self, subset: &Subset, update: SubsetUpdate);
}

/// Wrap a client into the shared handle form hubs register
pub fn shared(client: impl Client + 'static) -> SharedClient {
    Arc::new(Mutex::new(client))
}
