// In memory implementation of the RegistryStore and ActivityQueries ports.
//
// - One lock guards the folded state and the journal of accepted events.
// - The version is the journal length.

use crate::modules::activities::adapters::outbound::registry_store::{
    RegistrySnapshot, RegistryStore, RegistryStoreError,
};
use crate::modules::activities::core::events::EnrollmentEvent;
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::core::state::RegistryState;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::list_activities::view::{
    ActivityCatalog, EnrollmentEventView, catalog,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
struct Journal {
    state: RegistryState,
    events: Vec<EnrollmentEvent>,
}

#[derive(Default)]
pub struct InMemoryRegistryStore {
    inner: RwLock<Journal>,
    is_offline: bool,
    delay_append_ms: AtomicU64,
}

impl InMemoryRegistryStore {
    pub fn seeded(state: RegistryState) -> Self {
        Self {
            inner: RwLock::new(Journal {
                state,
                events: Vec::new(),
            }),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Sleeps before taking the write lock so tests can interleave writers.
    pub fn set_delay_append_ms(&self, ms: u64) {
        self.delay_append_ms.store(ms, Ordering::Relaxed);
    }
}

#[async_trait::async_trait]
impl RegistryStore for InMemoryRegistryStore {
    async fn load(&self) -> Result<RegistrySnapshot, RegistryStoreError> {
        if self.is_offline {
            return Err(RegistryStoreError::Backend("Registry store offline".into()));
        }
        let guard = self.inner.read().await;
        Ok(RegistrySnapshot {
            state: guard.state.clone(),
            version: guard.events.len() as i64,
        })
    }

    async fn append(
        &self,
        expected_version: i64,
        new_events: &[EnrollmentEvent],
    ) -> Result<i64, RegistryStoreError> {
        if self.is_offline {
            return Err(RegistryStoreError::Backend("Registry store offline".into()));
        }
        let delay = self.delay_append_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.inner.write().await;
        let actual = guard.events.len() as i64;
        if actual != expected_version {
            return Err(RegistryStoreError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }
        let state = std::mem::take(&mut guard.state);
        guard.state = new_events.iter().cloned().fold(state, evolve);
        guard.events.extend_from_slice(new_events);
        Ok(guard.events.len() as i64)
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryRegistryStore {
    async fn list_activities(&self) -> anyhow::Result<ActivityCatalog> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Registry store offline"));
        }
        Ok(catalog(&self.inner.read().await.state))
    }

    async fn list_enrollment_events(
        &self,
        activity_name: Option<&str>,
    ) -> anyhow::Result<Vec<EnrollmentEventView>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Registry store offline"));
        }
        let guard = self.inner.read().await;
        Ok(guard
            .events
            .iter()
            .filter(|e| activity_name.is_none_or(|name| e.activity_name() == name))
            .map(EnrollmentEventView::from)
            .collect())
    }
}
