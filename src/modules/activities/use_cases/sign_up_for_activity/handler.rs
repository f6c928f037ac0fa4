use crate::modules::activities::adapters::outbound::registry_store::RegistryStore;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::execute::decide_and_append;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decide::decide_sign_up;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedUp {
    pub activity_name: String,
    pub student_id: String,
}

pub struct SignUpForActivityHandler<TStore>
where
    TStore: RegistryStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SignUpForActivityHandler<TStore>
where
    TStore: RegistryStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SignUpForActivity) -> Result<SignedUp, ApplicationError> {
        let confirmation = SignedUp {
            activity_name: command.activity_name.clone(),
            student_id: command.student_id.clone(),
        };
        let result = decide_and_append(&*self.store, |state| {
            decide_sign_up(state, command.clone())
        })
        .await;

        match result {
            Ok(_) => {
                tracing::info!(
                    activity = %confirmation.activity_name,
                    student = %confirmation.student_id,
                    "student signed up"
                );
                Ok(confirmation)
            }
            Err(ApplicationError::Rejected(reason)) => {
                tracing::warn!(
                    activity = %confirmation.activity_name,
                    student = %confirmation.student_id,
                    code = reason.code(),
                    "signup rejected"
                );
                Err(reason.into())
            }
            Err(e) => Err(e),
        }
    }
}
