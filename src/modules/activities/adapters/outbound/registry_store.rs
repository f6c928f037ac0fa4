// Port for the registry the use case handlers write through.
//
// - `load` hands out a snapshot of the state together with the version it was read at.
// - `append` commits events only if nobody appended since that version.

use crate::modules::activities::core::events::EnrollmentEvent;
use crate::modules::activities::core::state::RegistryState;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryStoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone)]
pub struct RegistrySnapshot {
    pub state: RegistryState,
    pub version: i64,
}

#[async_trait]
pub trait RegistryStore: Send + Sync {
    async fn load(&self) -> Result<RegistrySnapshot, RegistryStoreError>;

    /// Returns the version after the append.
    async fn append(
        &self,
        expected_version: i64,
        new_events: &[EnrollmentEvent],
    ) -> Result<i64, RegistryStoreError>;
}
