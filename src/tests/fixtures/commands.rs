use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;

pub struct SignUpForActivityBuilder {
    inner: SignUpForActivity,
}

impl Default for SignUpForActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SignUpForActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: SignUpForActivity {
                activity_name: "Chess Club".to_string(),
                student_id: "test@mergington.edu".to_string(),
                requested_at: 1_700_000_000_000,
            },
        }
    }

    pub fn activity_name(mut self, v: impl Into<String>) -> Self {
        self.inner.activity_name = v.into();
        self
    }

    pub fn student_id(mut self, v: impl Into<String>) -> Self {
        self.inner.student_id = v.into();
        self
    }

    pub fn requested_at(mut self, v: i64) -> Self {
        self.inner.requested_at = v;
        self
    }

    pub fn build(self) -> SignUpForActivity {
        self.inner
    }
}

pub struct UnregisterFromActivityBuilder {
    inner: UnregisterFromActivity,
}

impl Default for UnregisterFromActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UnregisterFromActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: UnregisterFromActivity {
                activity_name: "Chess Club".to_string(),
                student_id: "test@mergington.edu".to_string(),
                requested_at: 1_700_000_000_000,
            },
        }
    }

    pub fn activity_name(mut self, v: impl Into<String>) -> Self {
        self.inner.activity_name = v.into();
        self
    }

    pub fn student_id(mut self, v: impl Into<String>) -> Self {
        self.inner.student_id = v.into();
        self
    }

    pub fn requested_at(mut self, v: i64) -> Self {
        self.inner.requested_at = v;
        self
    }

    pub fn build(self) -> UnregisterFromActivity {
        self.inner
    }
}
