//! Blog post and category domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A blog category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Unique identifier.
    pub id: Uuid,
    /// Category name.
    pub name: String,
    /// URL-friendly slug.
    pub slug: String,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
    /// When the category was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category.
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        let slug = slugify(&name);
        Self {
            id: Uuid::new_v4(),
            name,
            slug,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A blog post.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Post {
    /// Unique identifier.
    pub id: Uuid,
    /// Post title.
    pub title: String,
    /// URL-friendly slug, unique across posts.
    pub slug: String,
    /// Owning category, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    /// Short teaser shown in listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Full post body (rendered HTML from the editor).
    pub body: String,
    /// Cover image URL on the external image host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// Whether the post is visible on the public site.
    pub published: bool,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post. Slug is derived from the title.
    pub fn new(
        title: String,
        category_id: Option<Uuid>,
        excerpt: Option<String>,
        body: String,
        cover_image: Option<String>,
        published: bool,
    ) -> Self {
        let now = Utc::now();
        let slug = slugify(&title);
        Self {
            id: Uuid::new_v4(),
            title,
            slug,
            category_id,
            excerpt,
            body,
            cover_image,
            published,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Generate a URL-friendly slug from free text.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("JEE Advanced 2026 Tips"), "jee-advanced-2026-tips");
        assert_eq!(slugify("Results  are   out!"), "results-are-out");
        assert_eq!(slugify("Crash Course: Physics"), "crash-course-physics");
    }

    #[test]
    fn test_post_slug_from_title() {
        let post = Post::new(
            "How To Crack NEET".to_string(),
            None,
            None,
            "<p>body</p>".to_string(),
            None,
            true,
        );
        assert_eq!(post.slug, "how-to-crack-neet");
    }
}
