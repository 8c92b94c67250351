//! Hub Configuration - Client capacity settings
//!
//! This module provides configuration for the Hub's client registry,
//! particularly the maximum number of registered clients. The bound is a
//! sanity limit on registry growth, not a performance knob; broadcasts
//! stay linear in the number of clients.

use serde::{Deserialize, Serialize};

/// Default client capacity for a hub
pub const DEFAULT_MAX_CLIENTS: usize = 50;

/// Configuration for a Hub's client registry
///
/// # Example
///
/// ```
/// use linkview_hub::{HubConfig, DEFAULT_MAX_CLIENTS};
///
/// // Default capacity
/// let config = HubConfig::default();
/// assert_eq!(config.max_clients(), DEFAULT_MAX_CLIENTS);
///
/// // Small capacity, e.g. for tests
/// let config = HubConfig::with_max_clients(2);
/// assert_eq!(config.max_clients(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubConfig {
    /// Maximum number of registered clients
    ///
    /// This value is clamped to at least 1.
    max_clients: usize,
}

impl HubConfig {
    /// Create a configuration with the specified client capacity
    ///
    /// The capacity is clamped to at least 1.
    ///
    /// # Example
    ///
    /// ```
    /// use linkview_hub::HubConfig;
    ///
    /// let config = HubConfig::with_max_clients(0);
    /// assert_eq!(config.max_clients(), 1);
    /// ```
    pub fn with_max_clients(max_clients: usize) -> Self {
        Self {
            max_clients: max_clients.max(1),
        }
    }

    /// Get the configured client capacity
    pub fn max_clients(&self) -> usize {
        self.max_clients
    }

    /// Set the client capacity
    ///
    /// The value is clamped to at least 1. Changing a configuration does
    /// not affect hubs already constructed from it.
    pub fn set_max_clients(&mut self, n: usize) {
        self.max_clients = n.max(1);
    }
}

impl Default for HubConfig {
    /// Create a default configuration with [`DEFAULT_MAX_CLIENTS`] capacity
    fn default() -> Self {
        Self {
            max_clients: DEFAULT_MAX_CLIENTS,
        }
    }
}
