use crate::modules::activities::adapters::outbound::registry_store::{
    RegistryStore, RegistryStoreError,
};
use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::events::EnrollmentEvent;
use crate::modules::activities::core::state::RegistryState;
use crate::modules::activities::use_cases::errors::ApplicationError;

/// Load, decide, append. A version conflict means another writer committed
/// first, so the decision is retaken against the fresh state until it either
/// commits or is rejected. Every commit is decided against exactly the state
/// it lands on.
pub async fn decide_and_append<TStore, F>(
    store: &TStore,
    decide: F,
) -> Result<Vec<EnrollmentEvent>, ApplicationError>
where
    TStore: RegistryStore + ?Sized,
    F: Fn(&RegistryState) -> Decision,
{
    let mut attempt: u32 = 1;
    loop {
        let snapshot = store.load().await?;
        let events = match decide(&snapshot.state) {
            Decision::Accepted { events } => events,
            Decision::Rejected { reason } => return Err(reason.into()),
        };
        match store.append(snapshot.version, &events).await {
            Ok(_) => return Ok(events),
            Err(RegistryStoreError::VersionMismatch { expected, actual }) => {
                tracing::debug!(expected, actual, attempt, "registry version conflict, retrying");
                attempt += 1;
                tokio::task::yield_now().await;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
