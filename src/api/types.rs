//! API request and response types.
//!
//! Every request body is decoded into one of these typed commands before any
//! handler logic runs; handlers never read raw string keys.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    Category, Course, GalleryImage, Post, ResultEntry, Slider, Testimonial,
};

/// Query parameters for paginated listings.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PageQuery {
    /// Maximum number of results.
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Offset for pagination.
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    20
}

// ==================== Authentication ====================

/// Login request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Admin email.
    pub email: String,
    /// Admin password.
    pub password: String,
}

/// Login response. The token also rides in the Set-Cookie header.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Signed access token.
    pub token: String,
    /// Authenticated admin.
    pub user: AdminInfo,
    /// Token expiration in seconds.
    pub expires_in: i64,
}

/// Admin identity as seen by the client.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminInfo {
    /// Admin email.
    pub email: String,
    /// Display name, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Role claim.
    pub role: String,
}

// ==================== Health ====================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Database connectivity.
    pub database: String,
    /// Timestamp.
    pub timestamp: String,
}

// ==================== Categories ====================

/// Request to create a category.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    /// Category name.
    pub name: String,
}

/// Request to update a category.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCategoryRequest {
    /// New name (slug follows).
    #[serde(default)]
    pub name: Option<String>,
}

/// Response for listing categories.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListCategoriesResponse {
    pub categories: Vec<Category>,
    pub limit: i64,
    pub offset: i64,
}

// ==================== Posts ====================

/// Request to create a blog post.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    /// Post title (slug is derived from it).
    pub title: String,
    /// Owning category.
    #[serde(default)]
    pub category_id: Option<Uuid>,
    /// Short teaser.
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Full body.
    pub body: String,
    /// Cover image URL.
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Publish immediately.
    #[serde(default)]
    pub published: bool,
}

/// Request to update a blog post.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub published: Option<bool>,
}

/// Response for listing posts.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListPostsResponse {
    pub posts: Vec<Post>,
    pub limit: i64,
    pub offset: i64,
}

// ==================== Courses ====================

/// Request to create a course.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCourseRequest {
    /// Course name (slug is derived from it).
    pub name: String,
    /// Course description.
    pub description: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub fee: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Publish immediately.
    #[serde(default)]
    pub published: bool,
}

/// Request to update a course.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCourseRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub fee: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub published: Option<bool>,
}

/// Response for listing courses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListCoursesResponse {
    pub courses: Vec<Course>,
    pub limit: i64,
    pub offset: i64,
}

// ==================== Testimonials ====================

/// Request to create a testimonial.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTestimonialRequest {
    pub author: String,
    pub quote: String,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Request to update a testimonial.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTestimonialRequest {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Response for listing testimonials.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListTestimonialsResponse {
    pub testimonials: Vec<Testimonial>,
    pub limit: i64,
    pub offset: i64,
}

// ==================== Sliders ====================

/// Request to create a slider.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSliderRequest {
    #[serde(default)]
    pub title: Option<String>,
    /// Banner image URL.
    pub image: String,
    #[serde(default)]
    pub link: Option<String>,
    /// Sort position, lowest first.
    #[serde(default)]
    pub position: i64,
}

/// Request to update a slider.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSliderRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub position: Option<i64>,
}

/// Response for listing sliders.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListSlidersResponse {
    pub sliders: Vec<Slider>,
    pub limit: i64,
    pub offset: i64,
}

// ==================== Gallery ====================

/// Request to add a gallery image.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateGalleryImageRequest {
    #[serde(default)]
    pub caption: Option<String>,
    /// Image URL on the external image host.
    pub image: String,
}

/// Response for listing gallery images.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListGalleryResponse {
    pub images: Vec<GalleryImage>,
    pub limit: i64,
    pub offset: i64,
}

// ==================== Results ====================

/// Request to create a result entry.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateResultEntryRequest {
    pub student_name: String,
    pub exam: String,
    pub score: String,
    pub year: i64,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Request to update a result entry.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateResultEntryRequest {
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub exam: Option<String>,
    #[serde(default)]
    pub score: Option<String>,
    #[serde(default)]
    pub year: Option<i64>,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Response for listing result entries.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListResultsResponse {
    pub results: Vec<ResultEntry>,
    pub limit: i64,
    pub offset: i64,
}

// ==================== Site Settings ====================

/// Request to update site settings. Absent fields are left untouched.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSettingsRequest {
    #[serde(default)]
    pub site_name: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub facebook_url: Option<String>,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub youtube_url: Option<String>,
}
