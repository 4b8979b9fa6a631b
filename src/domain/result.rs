//! Exam result domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A published student result (toppers wall).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResultEntry {
    /// Unique identifier.
    pub id: Uuid,
    /// Student name.
    pub student_name: String,
    /// Exam the result belongs to, e.g. "JEE Main".
    pub exam: String,
    /// Displayed score or rank, kept as free text.
    pub score: String,
    /// Exam year.
    pub year: i64,
    /// Optional student photo URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
    /// When the entry was last updated.
    pub updated_at: DateTime<Utc>,
}

impl ResultEntry {
    /// Create a new result entry.
    pub fn new(
        student_name: String,
        exam: String,
        score: String,
        year: i64,
        photo: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            student_name,
            exam,
            score,
            year,
            photo,
            created_at: now,
            updated_at: now,
        }
    }
}
