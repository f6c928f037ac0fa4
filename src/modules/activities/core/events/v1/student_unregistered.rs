use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentUnregisteredV1 {
    pub activity_name: String,
    pub student_id: String,
    pub occurred_at: i64,
}
