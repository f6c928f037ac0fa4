use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shared::core::primitives::StudentEmail;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlUnregistered {
    pub activity_name: String,
    pub student_id: String,
    pub message: String,
}

#[derive(Default)]
pub struct UnregisterMutation;

#[Object]
impl UnregisterMutation {
    async fn unregister(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<GqlUnregistered> {
        let state = context.data_unchecked::<AppState>();
        let student = StudentEmail::parse(&email).map_err(|e| {
            async_graphql::Error::new(e.to_string())
                .extend_with(|_, ext| ext.set("code", "INVALID_EMAIL".to_string()))
        })?;

        let command = UnregisterFromActivity {
            activity_name,
            student_id: student.into_inner(),
            requested_at: Utc::now().timestamp_millis(),
        };

        let unregistered = state
            .unregister_handler
            .handle(command)
            .await
            .map_err(|e| e.into_graphql())?;

        Ok(GqlUnregistered {
            message: format!(
                "Unregistered {} from {}",
                unregistered.student_id, unregistered.activity_name
            ),
            activity_name: unregistered.activity_name,
            student_id: unregistered.student_id,
        })
    }
}
