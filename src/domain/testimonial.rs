//! Testimonial domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A student or parent testimonial shown on the site.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Testimonial {
    /// Unique identifier.
    pub id: Uuid,
    /// Who said it.
    pub author: String,
    /// The quote itself.
    pub quote: String,
    /// Optional author photo URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// When the testimonial was created.
    pub created_at: DateTime<Utc>,
    /// When the testimonial was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Testimonial {
    /// Create a new testimonial.
    pub fn new(author: String, quote: String, photo: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author,
            quote,
            photo,
            created_at: now,
            updated_at: now,
        }
    }
}
