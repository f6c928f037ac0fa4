use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::shared::core::primitives::StudentEmail;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlSignedUp {
    pub activity_name: String,
    pub student_id: String,
    pub message: String,
}

#[derive(Default)]
pub struct SignUpMutation;

#[Object]
impl SignUpMutation {
    async fn sign_up(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<GqlSignedUp> {
        let state = context.data_unchecked::<AppState>();
        let student = StudentEmail::parse(&email).map_err(|e| {
            async_graphql::Error::new(e.to_string())
                .extend_with(|_, ext| ext.set("code", "INVALID_EMAIL".to_string()))
        })?;

        let command = SignUpForActivity {
            activity_name,
            student_id: student.into_inner(),
            requested_at: Utc::now().timestamp_millis(),
        };

        let signed_up = state
            .sign_up_handler
            .handle(command)
            .await
            .map_err(|e| e.into_graphql())?;

        Ok(GqlSignedUp {
            message: format!(
                "Signed up {} for {}",
                signed_up.student_id, signed_up.activity_name
            ),
            activity_name: signed_up.activity_name,
            student_id: signed_up.student_id,
        })
    }
}
