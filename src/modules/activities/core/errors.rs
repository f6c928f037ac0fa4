/// Reasons the registry refuses a signup or unregister request.
///
/// The `Display` text is what clients see, so it stays short and stable.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum EnrollmentError {
    #[error("Activity not found")]
    ActivityNotFound { activity_name: String },

    #[error("Participant not found")]
    ParticipantNotFound {
        activity_name: String,
        student_id: String,
    },

    /// `activity_name` is the activity the student currently belongs to,
    /// which is not necessarily the one they asked for.
    #[error("Student is already signed up for {activity_name}")]
    AlreadyEnrolled {
        student_id: String,
        activity_name: String,
    },

    #[error("Activity is full")]
    ActivityFull {
        activity_name: String,
        max_participants: u32,
    },
}

impl EnrollmentError {
    pub fn code(&self) -> &'static str {
        match self {
            EnrollmentError::ActivityNotFound { .. } => "ACTIVITY_NOT_FOUND",
            EnrollmentError::ParticipantNotFound { .. } => "PARTICIPANT_NOT_FOUND",
            EnrollmentError::AlreadyEnrolled { .. } => "ALREADY_ENROLLED",
            EnrollmentError::ActivityFull { .. } => "ACTIVITY_FULL",
        }
    }
}
