use crate::modules::activities::core::events::EnrollmentEvent;
use crate::modules::activities::core::state::{Activity, RegistryState};
use serde::Serialize;
use std::collections::BTreeMap;

/// Public fields of one activity, as listed to clients.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<&Activity> for ActivityView {
    fn from(a: &Activity) -> Self {
        Self {
            description: a.description.clone(),
            schedule: a.schedule.clone(),
            max_participants: a.max_participants,
            participants: a.participants().to_vec(),
        }
    }
}

/// Activity name to its public fields.
pub type ActivityCatalog = BTreeMap<String, ActivityView>;

pub fn catalog(state: &RegistryState) -> ActivityCatalog {
    state
        .activities()
        .map(|(name, activity)| (name.to_string(), ActivityView::from(activity)))
        .collect()
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentEventKind {
    SignedUp,
    Unregistered,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EnrollmentEventView {
    pub kind: EnrollmentEventKind,
    pub activity_name: String,
    pub student_id: String,
    pub occurred_at: i64,
}

impl From<&EnrollmentEvent> for EnrollmentEventView {
    fn from(e: &EnrollmentEvent) -> Self {
        let kind = match e {
            EnrollmentEvent::StudentSignedUpV1(_) => EnrollmentEventKind::SignedUp,
            EnrollmentEvent::StudentUnregisteredV1(_) => EnrollmentEventKind::Unregistered,
        };
        Self {
            kind,
            activity_name: e.activity_name().to_string(),
            student_id: e.student_id().to_string(),
            occurred_at: e.occurred_at(),
        }
    }
}
