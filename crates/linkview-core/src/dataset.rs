//! Dataset handles and their subset collections

use crate::selection::Selection;
use crate::sink::SubsetSink;
use crate::subset::Subset;
use std::fmt;
use std::sync::{Arc, Mutex, Weak};

/// A labeled dataset observed by linked views
///
/// `Dataset` is a cheap-to-clone shared handle; clones refer to the same
/// underlying dataset and equality is identity, never content. A dataset
/// owns its subsets (in creation order) and holds a weak reference to at
/// most one sink, set when a client for this dataset is registered with a
/// hub. Hub and dataset lifetimes stay independent: once the sink is
/// dropped, the dataset behaves as unattached.
#[derive(Clone)]
pub struct Dataset {
    inner: Arc<DatasetInner>,
}

struct DatasetInner {
    /// Immutable display label
    label: String,
    /// Back-reference to the routing sink, if attached
    hub: Mutex<Option<Weak<dyn SubsetSink>>>,
    /// Subsets of this dataset, in creation order
    subsets: Mutex<Vec<Subset>>,
}

impl Dataset {
    /// Create a dataset with no subsets and no hub attachment
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(DatasetInner {
                label: label.into(),
                hub: Mutex::new(None),
                subsets: Mutex::new(Vec::new()),
            }),
        }
    }

    /// The dataset's display label
    pub fn label(&self) -> &str {
        &self.inner.label
    }

    /// The sink this dataset reports through, if it is attached and alive
    pub fn hub(&self) -> Option<Arc<dyn SubsetSink>> {
        self.inner.hub.lock().unwrap().as_ref().and_then(Weak::upgrade)
    }

    /// Check if the dataset is attached to a live sink
    pub fn has_hub(&self) -> bool {
        self.hub().is_some()
    }

    /// Point this dataset's change reports at `sink`
    ///
    /// Only a weak reference is kept; dropping the sink detaches the
    /// dataset without further bookkeeping.
    pub fn bind_hub(&self, sink: &Arc<dyn SubsetSink>) {
        *self.inner.hub.lock().unwrap() = Some(Arc::downgrade(sink));
    }

    /// Detach this dataset from its sink, if any
    pub fn unbind_hub(&self) {
        *self.inner.hub.lock().unwrap() = None;
    }

    /// Create a subset of this dataset and add it to the collection
    ///
    /// The subset is auto-labeled `Subset N` from the collection size. Its
    /// construction broadcasts a creation notice when the dataset is
    /// attached, before the subset appears in [`Dataset::subsets`].
    pub fn create_subset(&self, selection: Selection) -> Subset {
        let label = format!("Subset {}", self.subset_count() + 1);
        let subset = Subset::with_label(self, label, selection);
        self.add_subset(subset.clone());
        subset
    }

    /// Add an existing subset to this dataset's collection
    ///
    /// Pure attachment: nothing is broadcast. Construction is where
    /// creation notices come from, so translated subsets announce
    /// themselves exactly once.
    pub fn add_subset(&self, subset: Subset) {
        self.inner.subsets.lock().unwrap().push(subset);
    }

    /// Remove one subset (by identity) from the collection
    ///
    /// Returns false if the subset is not in the collection.
    pub fn remove_subset(&self, subset: &Subset) -> bool {
        let mut subsets = self.inner.subsets.lock().unwrap();
        match subsets.iter().position(|s| s == subset) {
            Some(idx) => {
                subsets.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Snapshot of the subset collection, in creation order
    pub fn subsets(&self) -> Vec<Subset> {
        self.inner.subsets.lock().unwrap().clone()
    }

    /// Number of subsets in the collection
    pub fn subset_count(&self) -> usize {
        self.inner.subsets.lock().unwrap().len()
    }

    pub(crate) fn downgrade(&self) -> WeakDataset {
        WeakDataset(Arc::downgrade(&self.inner))
    }
}

impl PartialEq for Dataset {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Dataset {}

impl fmt::Debug for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dataset")
            .field("label", &self.inner.label)
            .field("attached", &self.has_hub())
            .field("subsets", &self.subset_count())
            .finish()
    }
}

/// Weak counterpart of [`Dataset`], held by subsets to break the
/// Dataset -> Subset -> Dataset cycle
#[derive(Clone)]
pub(crate) struct WeakDataset(Weak<DatasetInner>);

impl WeakDataset {
    pub(crate) fn upgrade(&self) -> Option<Dataset> {
        self.0.upgrade().map(|inner| Dataset { inner })
    }
}
