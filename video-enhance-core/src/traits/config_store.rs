use parking_lot::Mutex;

use crate::models::config::EnhanceConfiguration;

/// Read access to the host-owned enhancement configuration.
///
/// The session reads exactly one snapshot per tick, so a settings change can
/// never apply a torn mix of old and new values to a frame that is already
/// mid-pipeline. Changes take effect at the next tick boundary.
pub trait ConfigStore: Send + Sync {
    fn snapshot(&self) -> EnhanceConfiguration;
}

/// Mutex-backed store for hosts that update settings from another thread
/// (UI input) while the loop runs.
#[derive(Debug, Default)]
pub struct SharedConfigStore {
    current: Mutex<EnhanceConfiguration>,
}

impl SharedConfigStore {
    pub fn new(config: EnhanceConfiguration) -> Self {
        Self {
            current: Mutex::new(config),
        }
    }

    /// Replace the configuration; the session sees it on its next tick.
    pub fn set(&self, config: EnhanceConfiguration) {
        *self.current.lock() = config;
    }

    /// Modify the configuration in place under the lock.
    pub fn update(&self, f: impl FnOnce(&mut EnhanceConfiguration)) {
        f(&mut self.current.lock());
    }
}

impl ConfigStore for SharedConfigStore {
    fn snapshot(&self) -> EnhanceConfiguration {
        self.current.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshots_reflect_set_and_update() {
        let store = SharedConfigStore::new(EnhanceConfiguration::default());
        assert!(!store.snapshot().enhancement_active());

        store.set(EnhanceConfiguration::low_light());
        assert!(store.snapshot().low_light_enabled);

        store.update(|config| config.night_mode_enabled = true);
        let snapshot = store.snapshot();
        assert!(snapshot.low_light_enabled);
        assert!(snapshot.night_mode_enabled);
    }
}
