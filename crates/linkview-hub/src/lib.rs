//! Linkview Hub - Broadcast coordination for linked views
//!
//! This crate provides the coordination layer that keeps multiple viewers
//! of shared datasets consistent: a central hub routes every subset change
//! to all registered clients and, on request, translates subsets across
//! datasets.
//!
//! ## Architecture
//!
//! ```text
//! Hub (owns the client registry)
//!  │
//!  ├── Client (trait) ← Hub only interacts with this
//!  │    │
//!  │    └── Viewer widgets ← Hidden from Hub
//!  │         └── data(): Dataset handle
//!  │
//!  └── Translate (trait) ← optional cross-dataset translation
//!
//! Dataset ── Weak<dyn SubsetSink> ──→ Hub (the seam into linkview-core)
//! ```
//!
//! ## Key Components
//!
//! - [`Hub`]: Central registry that routes subset updates to clients
//! - [`Client`]: Trait for registrable viewers
//! - [`Translate`]: Trait for cross-dataset subset translation
//! - [`HubConfig`]: Client capacity configuration
//!
//! ## Design Principles
//!
//! 1. **Hub never touches viewers directly** - only through the Client trait
//! 2. **linkview-core is standalone** - it does NOT know about linkview-hub;
//!    datasets reach back through the `SubsetSink` capability the hub
//!    implements
//! 3. **Broadcasts are unfiltered** - every client hears every update, in
//!    registration order, and filters for itself

mod client;
mod config;
mod error;
mod hub;
mod translate;

pub use client::{shared, Client, SharedClient};
pub use config::{HubConfig, DEFAULT_MAX_CLIENTS};
pub use error::{Error, Result};
pub use hub::Hub;
pub use translate::Translate;
