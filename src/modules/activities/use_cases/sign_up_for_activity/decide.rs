// Pure decision for signing a student up.
//
// - Unknown activity, then enrollment anywhere, then capacity, checked in that order.
// - Never performs input or output.

use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::errors::EnrollmentError;
use crate::modules::activities::core::events::EnrollmentEvent;
use crate::modules::activities::core::events::v1::student_signed_up::StudentSignedUpV1;
use crate::modules::activities::core::state::RegistryState;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;

pub fn decide_sign_up(state: &RegistryState, command: SignUpForActivity) -> Decision {
    let Some(activity) = state.activity(&command.activity_name) else {
        return Decision::Rejected {
            reason: EnrollmentError::ActivityNotFound {
                activity_name: command.activity_name,
            },
        };
    };
    if let Some(current) = state.enrolled_in(&command.student_id) {
        return Decision::Rejected {
            reason: EnrollmentError::AlreadyEnrolled {
                student_id: command.student_id,
                activity_name: current.to_string(),
            },
        };
    }
    if activity.is_full() {
        return Decision::Rejected {
            reason: EnrollmentError::ActivityFull {
                max_participants: activity.max_participants,
                activity_name: command.activity_name,
            },
        };
    }
    Decision::Accepted {
        events: vec![EnrollmentEvent::StudentSignedUpV1(StudentSignedUpV1 {
            activity_name: command.activity_name,
            student_id: command.student_id,
            occurred_at: command.requested_at,
        })],
    }
}
