#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisterFromActivity {
    pub activity_name: String,
    pub student_id: String,
    pub requested_at: i64,
}
