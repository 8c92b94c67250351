//! Linkview Core - Datasets, subsets, and selections for linked views
//!
//! This crate provides the data model for the linkview synchronization
//! engine:
//! - Shared dataset handles (`Dataset`) with ordered subset collections
//! - Self-reporting subsets (`Subset`) carrying label, style, and selection
//! - Selection payloads (`Selection`, `TreeSelection`, `PixelMask`)
//! - The `SubsetSink` capability that receives change reports
//! - Dynamic values (`Value`, `ValueMap`) for translator parameters
//!
//! ## Architecture
//!
//! ```text
//! Dataset (label, subsets)
//!  │
//!  ├── hub: Weak<dyn SubsetSink> ← change reports leave through this
//!  │
//!  └── Subset[] (label, style, selection)
//!       └── data ← weak backref to the owning Dataset
//! ```
//!
//! ## Design Principles
//!
//! 1. **linkview-core is standalone** - it does NOT know about linkview-hub;
//!    subsets report through the `SubsetSink` capability only
//! 2. **Mutate, then report** - every subset mutator applies its change and
//!    funnels into one report-change call naming the changed attribute
//! 3. **Handles are identities** - `Dataset` and `Subset` clones share state
//!    and compare by identity, never by content

mod dataset;
mod selection;
mod sink;
mod style;
mod subset;
mod value;

pub use dataset::Dataset;
pub use selection::{PixelMask, Selection, TreeSelection};
pub use sink::{SubsetSink, SubsetUpdate};
pub use style::SubsetStyle;
pub use subset::{attr, Subset};
pub use value::{Value, ValueMap};
