use crate::modules::activities::core::seed::ActivitySeed;
use crate::modules::activities::core::state::RegistryState;

pub fn activity_seed(name: &str, max_participants: u32, participants: &[&str]) -> ActivitySeed {
    ActivitySeed {
        name: name.to_string(),
        description: format!("{name} description"),
        schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// Chess Club (capacity 12, michael), Programming Class (20, emma) and
/// Gym Class (30, john).
pub fn chess_club_registry() -> RegistryState {
    RegistryState::seeded(vec![
        activity_seed("Chess Club", 12, &["michael@mergington.edu"]),
        activity_seed("Programming Class", 20, &["emma@mergington.edu"]),
        activity_seed("Gym Class", 30, &["john@mergington.edu"]),
    ])
    .expect("fixture seed is valid")
}

/// A single activity with one free seat left.
pub fn nearly_full_registry() -> RegistryState {
    RegistryState::seeded(vec![activity_seed(
        "Math Club",
        2,
        &["james@mergington.edu"],
    )])
    .expect("fixture seed is valid")
}
