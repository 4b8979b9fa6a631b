//! Course domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::slugify;

/// A course offered by the institute.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Course {
    /// Unique identifier.
    pub id: Uuid,
    /// Course name.
    pub name: String,
    /// URL-friendly slug, unique across courses.
    pub slug: String,
    /// Course description (rendered HTML from the editor).
    pub description: String,
    /// Human-readable duration, e.g. "6 months".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Displayed fee, kept as free text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<String>,
    /// Banner image URL on the external image host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Whether the course is visible on the public site.
    pub published: bool,
    /// When the course was created.
    pub created_at: DateTime<Utc>,
    /// When the course was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Create a new course. Slug is derived from the name.
    pub fn new(
        name: String,
        description: String,
        duration: Option<String>,
        fee: Option<String>,
        image: Option<String>,
        published: bool,
    ) -> Self {
        let now = Utc::now();
        let slug = slugify(&name);
        Self {
            id: Uuid::new_v4(),
            name,
            slug,
            description,
            duration,
            fee,
            image,
            published,
            created_at: now,
            updated_at: now,
        }
    }
}
