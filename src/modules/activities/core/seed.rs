use crate::modules::activities::core::state::{Activity, RegistryState};
use serde::Deserialize;

/// Activities shipped with the binary, used when no seed file is configured.
pub const DEFAULT_SEED: &str = include_str!("../../../../config/activities.json");

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ActivitySeed {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("seed is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("activity {0:?} is seeded more than once")]
    DuplicateActivity(String),

    #[error("activity {0:?} must allow at least one participant")]
    ZeroCapacity(String),

    #[error("activity {activity_name:?} seeds {seeded} participants but allows {max_participants}")]
    OverCapacity {
        activity_name: String,
        seeded: usize,
        max_participants: u32,
    },

    #[error("student {student_id:?} is seeded into both {first:?} and {second:?}")]
    AlreadyEnrolled {
        student_id: String,
        first: String,
        second: String,
    },
}

pub fn parse_seed(json: &str) -> Result<Vec<ActivitySeed>, SeedError> {
    Ok(serde_json::from_str(json)?)
}

impl RegistryState {
    /// Builds the registry from seed records, rejecting any seed that would
    /// break the enrollment rules.
    pub fn seeded(seeds: Vec<ActivitySeed>) -> Result<Self, SeedError> {
        let mut state = RegistryState::default();
        for seed in seeds {
            if seed.max_participants == 0 {
                return Err(SeedError::ZeroCapacity(seed.name));
            }
            if seed.participants.len() > seed.max_participants as usize {
                return Err(SeedError::OverCapacity {
                    activity_name: seed.name,
                    seeded: seed.participants.len(),
                    max_participants: seed.max_participants,
                });
            }
            let activity = Activity::new(seed.description, seed.schedule, seed.max_participants);
            if !state.insert_activity(seed.name.clone(), activity) {
                return Err(SeedError::DuplicateActivity(seed.name));
            }
            for student_id in seed.participants {
                if let Some(first) = state.enrolled_in(&student_id) {
                    return Err(SeedError::AlreadyEnrolled {
                        first: first.to_string(),
                        second: seed.name,
                        student_id,
                    });
                }
                state.enroll(&seed.name, &student_id);
            }
        }
        Ok(state)
    }
}
