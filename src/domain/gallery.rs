//! Gallery image domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A photo in the site gallery.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GalleryImage {
    /// Unique identifier.
    pub id: Uuid,
    /// Optional caption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Image URL on the external image host.
    pub image: String,
    /// When the image was added.
    pub created_at: DateTime<Utc>,
}

impl GalleryImage {
    /// Create a new gallery image.
    pub fn new(caption: Option<String>, image: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            caption,
            image,
            created_at: Utc::now(),
        }
    }
}
