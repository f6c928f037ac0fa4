pub mod v1 {
    pub mod student_signed_up;
    pub mod student_unregistered;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum EnrollmentEvent {
    StudentSignedUpV1(v1::student_signed_up::StudentSignedUpV1),
    StudentUnregisteredV1(v1::student_unregistered::StudentUnregisteredV1),
}

impl EnrollmentEvent {
    pub fn activity_name(&self) -> &str {
        match self {
            EnrollmentEvent::StudentSignedUpV1(e) => &e.activity_name,
            EnrollmentEvent::StudentUnregisteredV1(e) => &e.activity_name,
        }
    }

    pub fn student_id(&self) -> &str {
        match self {
            EnrollmentEvent::StudentSignedUpV1(e) => &e.student_id,
            EnrollmentEvent::StudentUnregisteredV1(e) => &e.student_id,
        }
    }

    pub fn occurred_at(&self) -> i64 {
        match self {
            EnrollmentEvent::StudentSignedUpV1(e) => e.occurred_at,
            EnrollmentEvent::StudentUnregisteredV1(e) => e.occurred_at,
        }
    }
}
