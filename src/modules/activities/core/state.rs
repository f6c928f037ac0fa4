use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Roster in signup order.
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn has_participant(&self, student_id: &str) -> bool {
        self.participants.iter().any(|p| p == student_id)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }
}

/// All activities plus a student -> activity index.
///
/// Rosters and index only change together through `enroll` and `withdraw`,
/// so a student is listed in at most one roster, at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryState {
    activities: BTreeMap<String, Activity>,
    enrollments: HashMap<String, String>,
}

impl RegistryState {
    pub fn activity(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    /// Activities ordered by name.
    pub fn activities(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.activities.iter().map(|(name, a)| (name.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn enrolled_in(&self, student_id: &str) -> Option<&str> {
        self.enrollments.get(student_id).map(String::as_str)
    }

    /// Returns false and leaves the state untouched if the name is taken.
    pub(crate) fn insert_activity(&mut self, name: impl Into<String>, activity: Activity) -> bool {
        let name = name.into();
        if self.activities.contains_key(&name) {
            return false;
        }
        self.activities.insert(name, activity);
        true
    }

    /// Returns false and leaves the state untouched if the activity is unknown
    /// or the student is already enrolled anywhere.
    pub(crate) fn enroll(&mut self, activity_name: &str, student_id: &str) -> bool {
        if self.enrollments.contains_key(student_id) {
            return false;
        }
        let Some(activity) = self.activities.get_mut(activity_name) else {
            return false;
        };
        activity.participants.push(student_id.to_string());
        self.enrollments
            .insert(student_id.to_string(), activity_name.to_string());
        true
    }

    /// Returns false and leaves the state untouched if the student is not in
    /// that activity's roster.
    pub(crate) fn withdraw(&mut self, activity_name: &str, student_id: &str) -> bool {
        let Some(activity) = self.activities.get_mut(activity_name) else {
            return false;
        };
        let Some(position) = activity.participants.iter().position(|p| p == student_id) else {
            return false;
        };
        activity.participants.remove(position);
        self.enrollments.remove(student_id);
        true
    }
}
