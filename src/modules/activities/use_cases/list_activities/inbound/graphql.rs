use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::use_cases::list_activities::view::{
    ActivityView, EnrollmentEventKind, EnrollmentEventView,
};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
    pub spots_left: u32,
}

impl From<(String, ActivityView)> for GqlActivity {
    fn from((name, v): (String, ActivityView)) -> Self {
        let taken = u32::try_from(v.participants.len()).unwrap_or(u32::MAX);
        Self {
            name,
            spots_left: v.max_participants.saturating_sub(taken),
            description: v.description,
            schedule: v.schedule,
            max_participants: v.max_participants,
            participants: v.participants,
        }
    }
}

#[derive(async_graphql::Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlEnrollmentEventKind {
    SignedUp,
    Unregistered,
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlEnrollmentEvent {
    pub kind: GqlEnrollmentEventKind,
    pub activity_name: String,
    pub student_id: String,
    pub occurred_at: i64,
}

impl From<EnrollmentEventView> for GqlEnrollmentEvent {
    fn from(v: EnrollmentEventView) -> Self {
        Self {
            kind: match v.kind {
                EnrollmentEventKind::SignedUp => GqlEnrollmentEventKind::SignedUp,
                EnrollmentEventKind::Unregistered => GqlEnrollmentEventKind::Unregistered,
            },
            activity_name: v.activity_name,
            student_id: v.student_id,
            occurred_at: v.occurred_at,
        }
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn activities(&self, context: &Context<'_>) -> GqlResult<Vec<GqlActivity>> {
        let state = context.data_unchecked::<AppState>();
        let listing = state.queries.list_activities().await?;
        Ok(listing.into_iter().map(Into::into).collect())
    }

    async fn enrollment_history(
        &self,
        context: &Context<'_>,
        activity_name: Option<String>,
    ) -> GqlResult<Vec<GqlEnrollmentEvent>> {
        let state = context.data_unchecked::<AppState>();
        let events = state
            .queries
            .list_enrollment_events(activity_name.as_deref())
            .await?;
        Ok(events.into_iter().map(Into::into).collect())
    }
}
