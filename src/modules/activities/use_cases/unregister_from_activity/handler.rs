use crate::modules::activities::adapters::outbound::registry_store::RegistryStore;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::execute::decide_and_append;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::modules::activities::use_cases::unregister_from_activity::decide::decide_unregister;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unregistered {
    pub activity_name: String,
    pub student_id: String,
}

pub struct UnregisterFromActivityHandler<TStore>
where
    TStore: RegistryStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UnregisterFromActivityHandler<TStore>
where
    TStore: RegistryStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: UnregisterFromActivity,
    ) -> Result<Unregistered, ApplicationError> {
        let confirmation = Unregistered {
            activity_name: command.activity_name.clone(),
            student_id: command.student_id.clone(),
        };
        match decide_and_append(&*self.store, |state| {
            decide_unregister(state, command.clone())
        })
        .await
        {
            Ok(_) => {
                tracing::info!(
                    activity = %confirmation.activity_name,
                    student = %confirmation.student_id,
                    "student unregistered"
                );
                Ok(confirmation)
            }
            Err(ApplicationError::Rejected(reason)) => {
                tracing::warn!(
                    activity = %confirmation.activity_name,
                    student = %confirmation.student_id,
                    code = reason.code(),
                    "unregister rejected"
                );
                Err(reason.into())
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod unregister_from_activity_handler_tests {
    use super::*;
    use crate::modules::activities::adapters::outbound::registry_in_memory::InMemoryRegistryStore;
    use crate::modules::activities::adapters::outbound::registry_store::RegistryStoreError;
    use crate::modules::activities::core::errors::EnrollmentError;
    use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
    use crate::modules::activities::use_cases::sign_up_for_activity::handler::SignUpForActivityHandler;
    use crate::tests::fixtures::commands::{SignUpForActivityBuilder, UnregisterFromActivityBuilder};
    use crate::tests::fixtures::registry::chess_club_registry;
    use rstest::{fixture, rstest};

    type BeforeEachReturn = (
        Arc<InMemoryRegistryStore>,
        SignUpForActivityHandler<InMemoryRegistryStore>,
        UnregisterFromActivityHandler<InMemoryRegistryStore>,
    );

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let store = Arc::new(InMemoryRegistryStore::seeded(chess_club_registry()));
        let sign_up = SignUpForActivityHandler::new(store.clone());
        let unregister = UnregisterFromActivityHandler::new(store.clone());
        (store, sign_up, unregister)
    }

    #[rstest]
    #[tokio::test]
    async fn handle_unregister_restores_the_seeded_roster(before_each: BeforeEachReturn) {
        let (store, sign_up, unregister) = before_each;
        sign_up
            .handle(SignUpForActivityBuilder::new().build())
            .await
            .expect("signup failed");
        let confirmation = unregister
            .handle(UnregisterFromActivityBuilder::new().build())
            .await
            .expect("unregister failed");
        assert_eq!(confirmation.student_id, "test@mergington.edu");
        assert_eq!(confirmation.activity_name, "Chess Club");

        let listing = store.list_activities().await.unwrap();
        assert_eq!(listing["Chess Club"].participants, vec!["michael@mergington.edu"]);
    }

    #[rstest]
    #[tokio::test]
    async fn sign_up_unregister_sign_up_leaves_the_student_enrolled(
        before_each: BeforeEachReturn,
    ) {
        let (store, sign_up, unregister) = before_each;
        sign_up
            .handle(SignUpForActivityBuilder::new().build())
            .await
            .expect("first signup failed");
        unregister
            .handle(UnregisterFromActivityBuilder::new().build())
            .await
            .expect("unregister failed");
        sign_up
            .handle(SignUpForActivityBuilder::new().build())
            .await
            .expect("second signup failed");

        let listing = store.list_activities().await.unwrap();
        assert_eq!(
            listing["Chess Club"].participants,
            vec!["michael@mergington.edu", "test@mergington.edu"]
        );
        assert_eq!(store.list_enrollment_events(None).await.unwrap().len(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn journal_records_the_requested_times(before_each: BeforeEachReturn) {
        let (store, sign_up, unregister) = before_each;
        sign_up
            .handle(SignUpForActivityBuilder::new().requested_at(1_700_000_000_500).build())
            .await
            .expect("signup failed");
        unregister
            .handle(
                UnregisterFromActivityBuilder::new()
                    .requested_at(1_700_000_009_000)
                    .build(),
            )
            .await
            .expect("unregister failed");

        let times: Vec<i64> = store
            .list_enrollment_events(Some("Chess Club"))
            .await
            .unwrap()
            .iter()
            .map(|e| e.occurred_at)
            .collect();
        assert_eq!(times, vec![1_700_000_000_500, 1_700_000_009_000]);
    }

    #[rstest]
    #[tokio::test]
    async fn unregistering_frees_the_student_for_another_activity(before_each: BeforeEachReturn) {
        let (store, sign_up, unregister) = before_each;
        unregister
            .handle(
                UnregisterFromActivityBuilder::new()
                    .student_id("michael@mergington.edu")
                    .build(),
            )
            .await
            .expect("unregister failed");
        sign_up
            .handle(
                SignUpForActivityBuilder::new()
                    .activity_name("Programming Class")
                    .student_id("michael@mergington.edu")
                    .build(),
            )
            .await
            .expect("signup elsewhere failed");
        let listing = store.list_activities().await.unwrap();
        assert!(listing["Chess Club"].participants.is_empty());
        assert!(
            listing["Programming Class"]
                .participants
                .contains(&"michael@mergington.edu".to_string())
        );
    }

    #[rstest]
    #[tokio::test]
    async fn handle_unregister_fails_for_an_absent_participant(before_each: BeforeEachReturn) {
        let (store, _, unregister) = before_each;
        let before = store.list_activities().await.unwrap();
        let result = unregister
            .handle(
                UnregisterFromActivityBuilder::new()
                    .student_id("ghost@mergington.edu")
                    .build(),
            )
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Rejected(
                EnrollmentError::ParticipantNotFound { .. }
            ))
        ));
        assert_eq!(store.list_activities().await.unwrap(), before);
    }

    #[rstest]
    #[tokio::test]
    async fn handle_unregister_fails_for_an_unknown_activity(before_each: BeforeEachReturn) {
        let (_, _, unregister) = before_each;
        let result = unregister
            .handle(
                UnregisterFromActivityBuilder::new()
                    .activity_name("NonExistent Activity")
                    .build(),
            )
            .await;
        assert_eq!(result.unwrap_err().to_string(), "Activity not found");
    }

    #[rstest]
    #[tokio::test]
    async fn handle_unregister_fails_if_the_store_is_offline() {
        let mut store = InMemoryRegistryStore::seeded(chess_club_registry());
        store.toggle_offline();
        let handler = UnregisterFromActivityHandler::new(Arc::new(store));
        let result = handler
            .handle(
                UnregisterFromActivityBuilder::new()
                    .student_id("michael@mergington.edu")
                    .build(),
            )
            .await;
        assert!(matches!(
            result,
            Err(ApplicationError::Store(RegistryStoreError::Backend(_)))
        ));
    }
}
