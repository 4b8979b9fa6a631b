//! Site-wide settings domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Site-wide settings. A single row, keyed implicitly.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SiteSettings {
    /// Displayed site name.
    pub site_name: String,
    /// Optional tagline under the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Contact email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    /// Street address shown in the footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Facebook page URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_url: Option<String>,
    /// Instagram profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    /// YouTube channel URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    /// When the settings were last updated.
    pub updated_at: DateTime<Utc>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "Academy".to_string(),
            tagline: None,
            phone: None,
            contact_email: None,
            address: None,
            facebook_url: None,
            instagram_url: None,
            youtube_url: None,
            updated_at: Utc::now(),
        }
    }
}
