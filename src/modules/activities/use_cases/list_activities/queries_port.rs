use crate::modules::activities::use_cases::list_activities::view::{
    ActivityCatalog, EnrollmentEventView,
};
use async_trait::async_trait;

#[async_trait]
pub trait ActivityQueries {
    async fn list_activities(&self) -> anyhow::Result<ActivityCatalog>;

    /// Accepted signups and unregistrations in the order they were applied.
    async fn list_enrollment_events(
        &self,
        activity_name: Option<&str>,
    ) -> anyhow::Result<Vec<EnrollmentEventView>>;
}
