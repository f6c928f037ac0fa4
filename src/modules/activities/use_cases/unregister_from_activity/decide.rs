use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::errors::EnrollmentError;
use crate::modules::activities::core::events::EnrollmentEvent;
use crate::modules::activities::core::events::v1::student_unregistered::StudentUnregisteredV1;
use crate::modules::activities::core::state::RegistryState;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;

pub fn decide_unregister(state: &RegistryState, command: UnregisterFromActivity) -> Decision {
    let Some(activity) = state.activity(&command.activity_name) else {
        return Decision::Rejected {
            reason: EnrollmentError::ActivityNotFound {
                activity_name: command.activity_name,
            },
        };
    };
    if !activity.has_participant(&command.student_id) {
        return Decision::Rejected {
            reason: EnrollmentError::ParticipantNotFound {
                activity_name: command.activity_name,
                student_id: command.student_id,
            },
        };
    }
    Decision::Accepted {
        events: vec![EnrollmentEvent::StudentUnregisteredV1(
            StudentUnregisteredV1 {
                activity_name: command.activity_name,
                student_id: command.student_id,
                occurred_at: command.requested_at,
            },
        )],
    }
}
