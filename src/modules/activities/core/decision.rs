use crate::modules::activities::core::errors::EnrollmentError;
use crate::modules::activities::core::events::EnrollmentEvent;

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { events: Vec<EnrollmentEvent> },
    Rejected { reason: EnrollmentError },
}
