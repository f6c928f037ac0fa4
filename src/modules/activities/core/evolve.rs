use crate::modules::activities::core::events::EnrollmentEvent;
use crate::modules::activities::core::state::RegistryState;

/// Applies an event that `decide` already accepted. Events that no longer fit
/// the state leave it unchanged.
pub fn evolve(mut state: RegistryState, event: EnrollmentEvent) -> RegistryState {
    match event {
        EnrollmentEvent::StudentSignedUpV1(e) => {
            state.enroll(&e.activity_name, &e.student_id);
        }
        EnrollmentEvent::StudentUnregisteredV1(e) => {
            state.withdraw(&e.activity_name, &e.student_id);
        }
    }
    state
}
