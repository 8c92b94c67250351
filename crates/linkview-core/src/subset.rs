//! Subsets - self-reporting selections over one dataset
//!
//! A subset both describes a selection of a dataset's records and relays
//! its own state changes to the sink the dataset is attached to. Every
//! mutator funnels into one report-change call naming the changed
//! attribute, so the notification point is a single auditable site rather
//! than interception magic.

use crate::dataset::{Dataset, WeakDataset};
use crate::selection::Selection;
use crate::sink::SubsetUpdate;
use crate::style::SubsetStyle;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Attribute names carried by [`SubsetUpdate::Updated`]
pub mod attr {
    /// The subset's display label changed
    pub const LABEL: &str = "label";
    /// The subset's display style changed
    pub const STYLE: &str = "style";
    /// The subset's selection geometry changed
    pub const SELECTION: &str = "selection";
}

/// A named, styled selection over one dataset
///
/// `Subset` is a cheap-to-clone shared handle; clones refer to the same
/// underlying subset and equality is identity. The owning dataset is held
/// weakly: a subset outliving its dataset mutates silently.
///
/// Construction broadcasts a creation notice once (when the dataset is
/// attached to a sink); each mutator then broadcasts one attribute update,
/// unless broadcasting has been suspended with
/// [`Subset::set_broadcasting`].
#[derive(Clone)]
pub struct Subset {
    inner: Arc<SubsetInner>,
}

struct SubsetInner {
    /// Back-reference to the dataset this subset describes
    data: WeakDataset,
    /// Whether mutations are relayed to the dataset's sink
    broadcasting: AtomicBool,
    state: Mutex<SubsetState>,
}

struct SubsetState {
    label: String,
    style: SubsetStyle,
    selection: Selection,
}

impl Subset {
    /// Create a subset of `data` with a default label
    ///
    /// Broadcasts [`SubsetUpdate::Created`] if the dataset is attached to
    /// a sink. The subset leaves the constructor with broadcasting
    /// enabled; the creation notice itself is fired while broadcasting is
    /// still off, so field setup can never double-report.
    pub fn new(data: &Dataset, selection: Selection) -> Self {
        Self::with_label(data, "Subset", selection)
    }

    /// Create a subset of `data` with an explicit label
    pub fn with_label(data: &Dataset, label: impl Into<String>, selection: Selection) -> Self {
        let subset = Self {
            inner: Arc::new(SubsetInner {
                data: data.downgrade(),
                broadcasting: AtomicBool::new(false),
                state: Mutex::new(SubsetState {
                    label: label.into(),
                    style: SubsetStyle::default(),
                    selection,
                }),
            }),
        };
        if let Some(hub) = data.hub() {
            hub.broadcast_subset_update(&subset, SubsetUpdate::Created);
        }
        subset.inner.broadcasting.store(true, Ordering::Release);
        subset
    }

    /// The dataset this subset describes, if it is still alive
    pub fn data(&self) -> Option<Dataset> {
        self.inner.data.upgrade()
    }

    /// The subset's display label
    pub fn label(&self) -> String {
        self.inner.state.lock().unwrap().label.clone()
    }

    /// The subset's display style
    pub fn style(&self) -> SubsetStyle {
        self.inner.state.lock().unwrap().style.clone()
    }

    /// The subset's selection geometry
    pub fn selection(&self) -> Selection {
        self.inner.state.lock().unwrap().selection.clone()
    }

    /// Check if mutations are currently relayed to the dataset's sink
    pub fn is_broadcasting(&self) -> bool {
        self.inner.broadcasting.load(Ordering::Acquire)
    }

    /// Set whether state changes to the subset are relayed to the sink
    ///
    /// Turning broadcasting off is useful while making a series of edits
    /// that clients should not repaint for. The toggle itself never
    /// broadcasts.
    pub fn set_broadcasting(&self, enabled: bool) {
        self.inner.broadcasting.store(enabled, Ordering::Release);
    }

    /// Rename the subset
    pub fn set_label(&self, label: impl Into<String>) {
        self.inner.state.lock().unwrap().label = label.into();
        self.report_change(attr::LABEL);
    }

    /// Restyle the subset
    pub fn set_style(&self, style: SubsetStyle) {
        self.inner.state.lock().unwrap().style = style;
        self.report_change(attr::STYLE);
    }

    /// Replace the subset's selection geometry
    pub fn set_selection(&self, selection: Selection) {
        self.inner.state.lock().unwrap().selection = selection;
        self.report_change(attr::SELECTION);
    }

    /// Broadcast removal and detach this subset from its dataset
    ///
    /// The deletion notice is gated like any mutation (broadcasting flag,
    /// live dataset, live sink). Dropping the last handle never notifies
    /// anyone; deletion is always explicit.
    pub fn delete(&self) {
        if self.is_broadcasting() {
            if let Some(hub) = self.data().and_then(|data| data.hub()) {
                hub.broadcast_subset_update(self, SubsetUpdate::Deleted);
            }
        }
        if let Some(data) = self.data() {
            data.remove_subset(self);
        }
    }

    /// Relay one attribute change, state already applied
    ///
    /// The state lock must not be held here: the sink runs client code
    /// that may read this subset back.
    fn report_change(&self, attr: &'static str) {
        if !self.is_broadcasting() {
            return;
        }
        if let Some(hub) = self.data().and_then(|data| data.hub()) {
            hub.broadcast_subset_update(self, SubsetUpdate::Updated { attr });
        }
    }
}

impl PartialEq for Subset {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Subset {}

impl fmt::Debug for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock().unwrap();
        f.debug_struct("Subset")
            .field("label", &state.label)
            .field("selection", &state.selection.kind())
            .field("broadcasting", &self.is_broadcasting())
            .finish()
    }
}
