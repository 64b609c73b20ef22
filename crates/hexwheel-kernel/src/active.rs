//! The process-wide active configuration slot.
//!
//! Single-writer replace-by-swap: a reconfiguration builds a fully
//! validated [`SequenceConfiguration`] and then swaps the shared `Arc`.
//! Readers take a snapshot `Arc` once per batch; an in-flight batch
//! that captured the prior reference completes against it unchanged.
//! The slot offers no atomicity across multiple reads; a session that
//! needs a stable view for several queries must hold its own snapshot
//! rather than re-reading the slot.

use std::sync::{Arc, LazyLock, RwLock};

use crate::error::WheelError;
use crate::preset::DEFAULT_PRESET_NAME;
use crate::sequence::SequenceConfiguration;

static GLOBAL: LazyLock<ActiveConfiguration> = LazyLock::new(ActiveConfiguration::new);

/// A swap-on-write holder for the active [`SequenceConfiguration`].
#[derive(Debug)]
pub struct ActiveConfiguration {
    slot: RwLock<Option<Arc<SequenceConfiguration>>>,
}

impl ActiveConfiguration {
    /// An empty slot. The first `current()` call lazily installs the
    /// default preset.
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// The process-wide slot.
    pub fn global() -> &'static ActiveConfiguration {
        &GLOBAL
    }

    /// Snapshot of the active configuration, installing the registry
    /// default on first use.
    pub fn current(&self) -> Result<Arc<SequenceConfiguration>, WheelError> {
        if let Some(cfg) = self.read_slot() {
            return Ok(cfg);
        }
        self.reset()
    }

    /// Swaps in a new configuration wholesale, returning the snapshot.
    pub fn replace(&self, config: SequenceConfiguration) -> Arc<SequenceConfiguration> {
        let config = Arc::new(config);
        let mut guard = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(Arc::clone(&config));
        config
    }

    /// Restores the built-in default preset.
    pub fn reset(&self) -> Result<Arc<SequenceConfiguration>, WheelError> {
        let config = SequenceConfiguration::from_preset(DEFAULT_PRESET_NAME)?;
        Ok(self.replace(config))
    }

    fn read_slot(&self) -> Option<Arc<SequenceConfiguration>> {
        let guard = self.slot.read().unwrap_or_else(|e| e.into_inner());
        guard.as_ref().map(Arc::clone)
    }
}

impl Default for ActiveConfiguration {
    fn default() -> Self {
        Self::new()
    }
}
