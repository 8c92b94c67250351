//! Hub - Central broadcast router for linked views
//!
//! The hub owns the client registry and routes every subset change to all
//! registered clients, in registration order. It never talks to concrete
//! viewer types, only to the Client trait, and it reaches datasets only
//! through the handles clients expose.
//!
//! ## Lock discipline
//!
//! The registry lock is never held while client hooks run; broadcasts
//! iterate over a snapshot. The translator slot lock is held for the
//! whole of a translation pass, so translators must not install
//! translators.

use crate::client::{Client, SharedClient};
use crate::config::HubConfig;
use crate::error::{Error, Result};
use crate::translate::Translate;
use linkview_core::{Dataset, Subset, SubsetSink, SubsetUpdate, ValueMap};
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::{debug, trace};

/// Central registry that keeps linked views consistent
///
/// A hub holds references to 0 or more clients and 0 or 1 translator.
/// When a subset of a registered client's dataset changes, the change is
/// broadcast to every client in the hub, synchronously and in
/// registration order; clients filter for themselves. On request, the
/// translator re-expresses a subset for every distinct client dataset.
///
/// `Hub` is a cheap-to-clone shared handle. Registering a client binds
/// the client's dataset to this hub (weakly), so subsets of that dataset
/// start reporting here.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use linkview_core::{Dataset, Selection, Subset, SubsetUpdate, TreeSelection};
/// use linkview_hub::{shared, Client, Hub};
///
/// struct Viewer {
///     data: Dataset,
///     seen: Arc<AtomicUsize>,
/// }
///
/// impl Client for Viewer {
///     fn data(&self) -> Dataset {
///         self.data.clone()
///     }
///     fn update_subset(&mut self, _subset: &Subset, _update: SubsetUpdate) {
///         self.seen.fetch_add(1, Ordering::SeqCst);
///     }
/// }
///
/// let hub = Hub::new();
/// let stars = Dataset::new("stars");
/// let seen = Arc::new(AtomicUsize::new(0));
/// hub.add_client(shared(Viewer { data: stars.clone(), seen: seen.clone() })).unwrap();
///
/// // Creating a subset notifies every registered client ...
/// let subset = stars.create_subset(Selection::Tree(TreeSelection::from_nodes([1, 2])));
/// assert_eq!(seen.load(Ordering::SeqCst), 1);
///
/// // ... and so does every later mutation.
/// subset.set_label("bright stars");
/// assert_eq!(seen.load(Ordering::SeqCst), 2);
/// ```
#[derive(Clone)]
pub struct Hub {
    inner: Arc<HubInner>,
}

struct HubInner {
    /// Registered clients, in registration order
    clients: Mutex<Vec<SharedClient>>,
    /// Optional cross-dataset translator
    translator: Mutex<Option<Box<dyn Translate>>>,
    /// Capacity configuration, fixed at construction
    config: HubConfig,
}

impl Hub {
    /// Create an empty hub with the default configuration
    pub fn new() -> Self {
        Self::with_config(HubConfig::default())
    }

    /// Create an empty hub with a specific configuration
    pub fn with_config(config: HubConfig) -> Self {
        Self {
            inner: Arc::new(HubInner {
                clients: Mutex::new(Vec::new()),
                translator: Mutex::new(None),
                config,
            }),
        }
    }

    /// This hub as the sink datasets report through
    ///
    /// [`Hub::add_client`] binds datasets automatically; this accessor is
    /// for attaching a dataset that has no client yet.
    pub fn sink(&self) -> Arc<dyn SubsetSink> {
        self.inner.clone()
    }

    // ========================================================================
    // Client Registry API
    // ========================================================================

    /// Register a new client with the hub
    ///
    /// Also binds the client's dataset to this hub, so the dataset's
    /// subsets start reporting here. A dataset can only be attached to
    /// one hub: registering a client whose dataset is bound to a
    /// different live hub is rejected, while re-registering against the
    /// same hub is an idempotent rebind.
    ///
    /// # Errors
    ///
    /// - [`Error::ClientLimitReached`] if the registry is at capacity
    ///   (checked first; the registry is left unchanged)
    /// - [`Error::DatasetAlreadyAttached`] if the client's dataset is
    ///   bound to a different live hub
    ///
    /// # Example
    ///
    /// ```
    /// use linkview_core::{Dataset, Subset, SubsetUpdate};
    /// use linkview_hub::{shared, Client, Error, Hub, HubConfig};
    ///
    /// struct Viewer { data: Dataset }
    /// impl Client for Viewer {
    ///     fn data(&self) -> Dataset { self.data.clone() }
    ///     fn update_subset(&mut self, _: &Subset, _: SubsetUpdate) {}
    /// }
    ///
    /// let hub = Hub::with_config(HubConfig::with_max_clients(1));
    /// let stars = Dataset::new("stars");
    /// hub.add_client(shared(Viewer { data: stars.clone() })).unwrap();
    ///
    /// let spill = hub.add_client(shared(Viewer { data: stars.clone() }));
    /// assert!(matches!(spill, Err(Error::ClientLimitReached { limit: 1 })));
    /// ```
    pub fn add_client(&self, client: SharedClient) -> Result<()> {
        let limit = self.inner.config.max_clients();
        if self.client_count() >= limit {
            return Err(Error::ClientLimitReached { limit });
        }

        let data = client.lock().unwrap().data();
        if let Some(existing) = data.hub() {
            if !self.is_own_sink(&existing) {
                return Err(Error::DatasetAlreadyAttached {
                    label: data.label().to_string(),
                });
            }
        }

        self.inner.clients.lock().unwrap().push(client);
        data.bind_hub(&self.sink());
        debug!(
            dataset = data.label(),
            clients = self.client_count(),
            "client registered"
        );
        Ok(())
    }

    /// Remove a client from the hub
    ///
    /// Removes exactly one registry entry matching the handle (by
    /// identity). The client's dataset stays bound to this hub; detach
    /// it with [`Dataset::unbind_hub`] if that is wanted too.
    ///
    /// # Errors
    ///
    /// [`Error::ClientNotFound`] if the handle is not currently
    /// registered.
    pub fn remove_client(&self, client: &SharedClient) -> Result<()> {
        let mut clients = self.inner.clients.lock().unwrap();
        match clients.iter().position(|c| Arc::ptr_eq(c, client)) {
            Some(idx) => {
                clients.remove(idx);
                debug!(clients = clients.len(), "client removed");
                Ok(())
            }
            None => Err(Error::ClientNotFound),
        }
    }

    /// Number of registered clients
    pub fn client_count(&self) -> usize {
        self.inner.clients.lock().unwrap().len()
    }

    /// The configured client capacity
    pub fn max_clients(&self) -> usize {
        self.inner.config.max_clients()
    }

    /// Get a reference to the hub configuration
    pub fn config(&self) -> &HubConfig {
        &self.inner.config
    }

    /// Communicate one subset change to every registered client
    ///
    /// Subset mutators call this through the dataset's sink binding;
    /// calling it directly re-announces a subset, e.g. to refresh a
    /// freshly added client. No dataset filtering happens here.
    pub fn broadcast_subset_update(&self, subset: &Subset, update: SubsetUpdate) {
        self.inner.broadcast_subset_update(subset, update);
    }

    // ========================================================================
    // Translation API
    // ========================================================================

    /// Install the translator, replacing any previous one
    pub fn set_translator(&self, translator: impl Translate + 'static) {
        *self.inner.translator.lock().unwrap() = Some(Box::new(translator));
    }

    /// Remove the translator, if any
    pub fn clear_translator(&self) {
        *self.inner.translator.lock().unwrap() = None;
    }

    /// Check if a translator is installed
    pub fn has_translator(&self) -> bool {
        self.inner.translator.lock().unwrap().is_some()
    }

    /// Translate a subset toward every client dataset
    ///
    /// Equivalent to [`Hub::translate_subset_with`] with empty
    /// parameters.
    pub fn translate_subset(&self, subset: &Subset) -> usize {
        self.translate_subset_with(subset, &ValueMap::new())
    }

    /// Translate a subset toward every client dataset, with parameters
    ///
    /// The translator is offered each distinct dataset used by the
    /// registered clients (identity-deduplicated, first-seen order,
    /// including the subset's own dataset). Every subset it produces is
    /// attached to its target dataset; untranslatable datasets are
    /// skipped quietly. Without a translator this is a no-op.
    ///
    /// Returns the number of subsets attached. Attached subsets announce
    /// themselves during construction inside the translator, so clients
    /// hear about them before this method returns.
    pub fn translate_subset_with(&self, subset: &Subset, params: &ValueMap) -> usize {
        if !self.has_translator() {
            return 0;
        }

        let clients = self.inner.clients.lock().unwrap().clone();
        let mut datasets: Vec<Dataset> = Vec::new();
        for client in &clients {
            let data = client.lock().unwrap().data();
            if !datasets.contains(&data) {
                datasets.push(data);
            }
        }

        // The slot can be cleared between the check above and here.
        let slot = self.inner.translator.lock().unwrap();
        let translator = match slot.as_ref() {
            Some(translator) => translator,
            None => return 0,
        };

        let mut attached = 0;
        for dataset in &datasets {
            if let Some(translated) = translator.translate(subset, dataset, params) {
                dataset.add_subset(translated);
                attached += 1;
            }
        }
        debug!(
            subset = %subset.label(),
            datasets = datasets.len(),
            attached,
            "translation pass complete"
        );
        attached
    }

    /// Compares allocation addresses only; a hub and its sink coercion
    /// share one allocation.
    fn is_own_sink(&self, sink: &Arc<dyn SubsetSink>) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(sink), Arc::as_ptr(&self.inner))
    }
}

impl SubsetSink for HubInner {
    fn broadcast_subset_update(&self, subset: &Subset, update: SubsetUpdate) {
        // Snapshot so hooks never run under the registry lock; clients
        // added or removed by a hook see the next broadcast.
        let clients = self.clients.lock().unwrap().clone();
        trace!(
            subset = %subset.label(),
            update = %update,
            clients = clients.len(),
            "broadcast"
        );
        for client in &clients {
            client.lock().unwrap().update_subset(subset, update);
        }
    }
}

impl Default for Hub {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Hub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hub")
            .field("clients", &self.client_count())
            .field("max_clients", &self.max_clients())
            .field("translator", &self.has_translator())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::shared;
    use crate::config::DEFAULT_MAX_CLIENTS;
    use linkview_core::{attr, Selection, SubsetStyle, TreeSelection, Value};

    type EventLog = Arc<Mutex<Vec<(&'static str, String, SubsetUpdate)>>>;

    struct RecordingClient {
        name: &'static str,
        data: Dataset,
        log: EventLog,
    }

    impl Client for RecordingClient {
        fn data(&self) -> Dataset {
            self.data.clone()
        }

        fn update_subset(&mut self, subset: &Subset, update: SubsetUpdate) {
            self.log
                .lock()
                .unwrap()
                .push((self.name, subset.label(), update));
        }
    }

    fn recording(name: &'static str, data: &Dataset, log: &EventLog) -> SharedClient {
        shared(RecordingClient {
            name,
            data: data.clone(),
            log: log.clone(),
        })
    }

    fn new_log() -> EventLog {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn logged_names(log: &EventLog) -> Vec<&'static str> {
        log.lock().unwrap().iter().map(|(n, _, _)| *n).collect()
    }

    fn tree() -> Selection {
        TreeSelection::from_nodes([1, 2]).into()
    }

    /// Copies the selection to any dataset except the subset's own
    struct CopyTranslator;

    impl Translate for CopyTranslator {
        fn translate(
            &self,
            subset: &Subset,
            target: &Dataset,
            _params: &ValueMap,
        ) -> Option<Subset> {
            if subset.data().as_ref() == Some(target) {
                return None;
            }
            Some(Subset::with_label(
                target,
                format!("{} (translated)", subset.label()),
                subset.selection(),
            ))
        }
    }

    struct NoneTranslator;

    impl Translate for NoneTranslator {
        fn translate(
            &self,
            _subset: &Subset,
            _target: &Dataset,
            _params: &ValueMap,
        ) -> Option<Subset> {
            None
        }
    }

    /// Records every offered target and the params, translates nothing
    struct ProbeTranslator {
        calls: Arc<Mutex<Vec<(String, ValueMap)>>>,
    }

    impl Translate for ProbeTranslator {
        fn translate(
            &self,
            _subset: &Subset,
            target: &Dataset,
            params: &ValueMap,
        ) -> Option<Subset> {
            self.calls
                .lock()
                .unwrap()
                .push((target.label().to_string(), params.clone()));
            None
        }
    }

    // ========================================================================
    // Registry Tests
    // ========================================================================

    #[test]
    fn test_hub_creation() {
        let hub = Hub::new();
        assert_eq!(hub.client_count(), 0);
        assert_eq!(hub.max_clients(), DEFAULT_MAX_CLIENTS);
        assert!(!hub.has_translator());
    }

    #[test]
    fn test_with_config() {
        let hub = Hub::with_config(HubConfig::with_max_clients(2));
        assert_eq!(hub.max_clients(), 2);
        assert_eq!(hub.config().max_clients(), 2);
    }

    #[test]
    fn test_add_client_binds_dataset() {
        let hub = Hub::new();
        let stars = Dataset::new("stars");
        let log = new_log();

        assert!(!stars.has_hub());
        hub.add_client(recording("c1", &stars, &log)).unwrap();
        assert_eq!(hub.client_count(), 1);
        assert!(stars.has_hub());
    }

    #[test]
    fn test_client_limit() {
        let hub = Hub::with_config(HubConfig::with_max_clients(2));
        let stars = Dataset::new("stars");
        let log = new_log();
        hub.add_client(recording("c1", &stars, &log)).unwrap();
        hub.add_client(recording("c2", &stars, &log)).unwrap();

        let err = hub.add_client(recording("c3", &stars, &log)).unwrap_err();
        assert!(matches!(err, Error::ClientLimitReached { limit: 2 }));
        assert_eq!(hub.client_count(), 2);
    }

    #[test]
    fn test_capacity_checked_before_conflict() {
        // The capacity error wins even when the client would also be
        // rejected for its dataset.
        let hub = Hub::with_config(HubConfig::with_max_clients(1));
        let other_hub = Hub::new();
        let stars = Dataset::new("stars");
        let galaxies = Dataset::new("galaxies");
        let log = new_log();
        hub.add_client(recording("c1", &stars, &log)).unwrap();
        other_hub
            .add_client(recording("c2", &galaxies, &log))
            .unwrap();

        let err = hub.add_client(recording("c3", &galaxies, &log)).unwrap_err();
        assert!(matches!(err, Error::ClientLimitReached { limit: 1 }));
    }

    #[test]
    fn test_remove_client_not_found() {
        let hub = Hub::new();
        let stars = Dataset::new("stars");
        let log = new_log();
        let never_added = recording("c1", &stars, &log);

        let err = hub.remove_client(&never_added).unwrap_err();
        assert!(matches!(err, Error::ClientNotFound));
        assert_eq!(hub.client_count(), 0);
    }

    #[test]
    fn test_add_then_remove_restores() {
        let hub = Hub::new();
        let stars = Dataset::new("stars");
        let log = new_log();
        let c1 = recording("c1", &stars, &log);
        let c2 = recording("c2", &stars, &log);
        hub.add_client(c1.clone()).unwrap();
        hub.add_client(c2.clone()).unwrap();

        hub.remove_client(&c1).unwrap();
        assert_eq!(hub.client_count(), 1);

        stars.create_subset(tree());
        assert_eq!(logged_names(&log), ["c2"]);
    }

    #[test]
    fn test_duplicate_registration_removes_one() {
        let hub = Hub::new();
        let stars = Dataset::new("stars");
        let log = new_log();
        let c1 = recording("c1", &stars, &log);
        hub.add_client(c1.clone()).unwrap();
        hub.add_client(c1.clone()).unwrap();
        assert_eq!(hub.client_count(), 2);

        stars.create_subset(tree());
        assert_eq!(logged_names(&log), ["c1", "c1"]);

        hub.remove_client(&c1).unwrap();
        assert_eq!(hub.client_count(), 1);
    }

    #[test]
    fn test_remove_client_keeps_binding() {
        let hub = Hub::new();
        let stars = Dataset::new("stars");
        let log = new_log();
        let c1 = recording("c1", &stars, &log);
        hub.add_client(c1.clone()).unwrap();
        hub.remove_client(&c1).unwrap();

        assert_eq!(hub.client_count(), 0);
        assert!(stars.has_hub());
    }

    #[test]
    fn test_dataset_on_other_hub_rejected() {
        let hub1 = Hub::new();
        let hub2 = Hub::new();
        let stars = Dataset::new("stars");
        let log = new_log();
        hub1.add_client(recording("c1", &stars, &log)).unwrap();

        let err = hub2.add_client(recording("c2", &stars, &log)).unwrap_err();
        assert!(matches!(
            err,
            Error::DatasetAlreadyAttached { label } if label == "stars"
        ));
        assert_eq!(hub2.client_count(), 0);

        // stars still reports to hub1 only
        stars.create_subset(tree());
        assert_eq!(logged_names(&log), ["c1"]);
    }

    #[test]
    fn test_dead_hub_frees_dataset() {
        let stars = Dataset::new("stars");
        let log = new_log();
        {
            let hub1 = Hub::new();
            hub1.add_client(recording("c1", &stars, &log)).unwrap();
            assert!(stars.has_hub());
        }
        assert!(!stars.has_hub());

        let hub2 = Hub::new();
        hub2.add_client(recording("c2", &stars, &log)).unwrap();
        assert!(stars.has_hub());
    }

    // ========================================================================
    // Broadcast Tests
    // ========================================================================

    #[test]
    fn test_created_fanout_in_registration_order() {
        let hub = Hub::new();
        let stars = Dataset::new("stars");
        let log = new_log();
        for name in ["c1", "c2", "c3"] {
            hub.add_client(recording(name, &stars, &log)).unwrap();
        }

        stars.create_subset(tree());

        let entries = log.lock().unwrap().clone();
        assert_eq!(logged_names(&log), ["c1", "c2", "c3"]);
        assert!(entries.iter().all(|(_, _, u)| u.is_created()));
    }

    #[test]
    fn test_broadcast_reaches_clients_of_other_datasets() {
        let hub = Hub::new();
        let stars = Dataset::new("stars");
        let galaxies = Dataset::new("galaxies");
        let log = new_log();
        hub.add_client(recording("c1", &stars, &log)).unwrap();
        hub.add_client(recording("c2", &galaxies, &log)).unwrap();

        let subset = stars.create_subset(tree());
        log.lock().unwrap().clear();

        subset.set_style(SubsetStyle::with_color("#1f78b4"));

        let entries = log.lock().unwrap().clone();
        assert_eq!(logged_names(&log), ["c1", "c2"]);
        assert!(entries
            .iter()
            .all(|(_, _, u)| u.attr() == Some(attr::STYLE)));
    }

    #[test]
    fn test_broadcasting_toggle_suppresses() {
        let hub = Hub::new();
        let stars = Dataset::new("stars");
        let log = new_log();
        hub.add_client(recording("c1", &stars, &log)).unwrap();

        let subset = stars.create_subset(tree());
        log.lock().unwrap().clear();

        subset.set_broadcasting(false);
        subset.set_label("a");
        subset.set_label("b");
        assert!(log.lock().unwrap().is_empty());

        subset.set_broadcasting(true);
        subset.set_label("c");
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_through_hub() {
        let hub = Hub::new();
        let stars = Dataset::new("stars");
        let log = new_log();
        hub.add_client(recording("c1", &stars, &log)).unwrap();
        let subset = stars.create_subset(tree());
        log.lock().unwrap().clear();

        subset.delete();

        let entries = log.lock().unwrap().clone();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].2.is_deleted());
        assert_eq!(stars.subset_count(), 0);
    }

    #[test]
    fn test_sink_attaches_dataset_without_client() {
        let hub = Hub::new();
        let stars = Dataset::new("stars");
        let galaxies = Dataset::new("galaxies");
        let log = new_log();
        hub.add_client(recording("c1", &stars, &log)).unwrap();

        // No client displays galaxies, but its subsets should still
        // report through the hub once it is attached by hand.
        galaxies.bind_hub(&hub.sink());
        galaxies.create_subset(tree());

        assert_eq!(logged_names(&log), ["c1"]);
    }

    #[test]
    fn test_manual_broadcast() {
        let hub = Hub::new();
        let stars = Dataset::new("stars");
        let log = new_log();
        hub.add_client(recording("c1", &stars, &log)).unwrap();
        let subset = stars.create_subset(tree());
        log.lock().unwrap().clear();

        hub.broadcast_subset_update(&subset, SubsetUpdate::Created);

        let entries = log.lock().unwrap().clone();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].2.is_created());
    }

    // ========================================================================
    // Translation Tests
    // ========================================================================

    #[test]
    fn test_translate_without_translator() {
        let hub = Hub::new();
        let stars = Dataset::new("stars");
        let galaxies = Dataset::new("galaxies");
        let log = new_log();
        hub.add_client(recording("c1", &stars, &log)).unwrap();
        hub.add_client(recording("c2", &galaxies, &log)).unwrap();
        let subset = stars.create_subset(tree());

        assert_eq!(hub.translate_subset(&subset), 0);
        assert_eq!(galaxies.subset_count(), 0);
    }

    #[test]
    fn test_translate_all_none() {
        let hub = Hub::new();
        let stars = Dataset::new("stars");
        let galaxies = Dataset::new("galaxies");
        let log = new_log();
        hub.add_client(recording("c1", &stars, &log)).unwrap();
        hub.add_client(recording("c2", &galaxies, &log)).unwrap();
        hub.set_translator(NoneTranslator);
        let subset = stars.create_subset(tree());

        assert_eq!(hub.translate_subset(&subset), 0);
        assert_eq!(stars.subset_count(), 1);
        assert_eq!(galaxies.subset_count(), 0);
    }

    #[test]
    fn test_translate_attaches_once() {
        let hub = Hub::new();
        let stars = Dataset::new("stars");
        let galaxies = Dataset::new("galaxies");
        let log = new_log();
        hub.add_client(recording("c1", &stars, &log)).unwrap();
        hub.add_client(recording("c2", &galaxies, &log)).unwrap();
        hub.set_translator(CopyTranslator);

        let subset = stars.create_subset(tree());
        log.lock().unwrap().clear();

        assert_eq!(hub.translate_subset(&subset), 1);

        // Exactly one new subset lands on the other dataset; the source
        // collection is untouched.
        assert_eq!(stars.subset_count(), 1);
        assert_eq!(stars.subsets()[0], subset);
        assert_eq!(galaxies.subset_count(), 1);
        assert_eq!(galaxies.subsets()[0].label(), "Subset 1 (translated)");

        // The translated subset announced itself to every client during
        // construction.
        let entries = log.lock().unwrap().clone();
        assert_eq!(logged_names(&log), ["c1", "c2"]);
        assert!(entries.iter().all(|(_, _, u)| u.is_created()));
    }

    #[test]
    fn test_translate_dedups_shared_datasets() {
        let hub = Hub::new();
        let stars = Dataset::new("stars");
        let galaxies = Dataset::new("galaxies");
        let log = new_log();
        hub.add_client(recording("c1", &stars, &log)).unwrap();
        hub.add_client(recording("c2", &stars, &log)).unwrap();
        hub.add_client(recording("c3", &galaxies, &log)).unwrap();

        let calls = Arc::new(Mutex::new(Vec::new()));
        hub.set_translator(ProbeTranslator {
            calls: calls.clone(),
        });

        let subset = stars.create_subset(tree());
        hub.translate_subset(&subset);

        // Each distinct dataset is offered once, in first-seen order,
        // the subset's own dataset included.
        let targets: Vec<String> = calls.lock().unwrap().iter().map(|(t, _)| t.clone()).collect();
        assert_eq!(targets, ["stars", "galaxies"]);
    }

    #[test]
    fn test_translate_forwards_params() {
        let hub = Hub::new();
        let stars = Dataset::new("stars");
        let log = new_log();
        hub.add_client(recording("c1", &stars, &log)).unwrap();

        let calls = Arc::new(Mutex::new(Vec::new()));
        hub.set_translator(ProbeTranslator {
            calls: calls.clone(),
        });

        let subset = stars.create_subset(tree());
        let mut params = ValueMap::new();
        params.insert("threshold".to_string(), Value::Float(0.25));
        hub.translate_subset_with(&subset, &params);

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].1.get("threshold").and_then(Value::as_float),
            Some(0.25)
        );
    }

    #[test]
    fn test_translator_slot() {
        let hub = Hub::new();
        assert!(!hub.has_translator());
        hub.set_translator(NoneTranslator);
        assert!(hub.has_translator());
        hub.set_translator(CopyTranslator);
        assert!(hub.has_translator());
        hub.clear_translator();
        assert!(!hub.has_translator());
    }

    #[test]
    fn test_hub_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Hub>();
    }
}
