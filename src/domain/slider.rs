//! Homepage slider domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A homepage slider banner.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Slider {
    /// Unique identifier.
    pub id: Uuid,
    /// Optional headline over the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Banner image URL on the external image host.
    pub image: String,
    /// Optional click-through link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Sort position in the carousel, lowest first.
    pub position: i64,
    /// When the slider was created.
    pub created_at: DateTime<Utc>,
    /// When the slider was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Slider {
    /// Create a new slider.
    pub fn new(title: Option<String>, image: String, link: Option<String>, position: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            image,
            link,
            position,
            created_at: now,
            updated_at: now,
        }
    }
}
