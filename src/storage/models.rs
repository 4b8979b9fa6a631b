//! Database models for Academy CMS.
//!
//! These are the row types returned by SQLx queries.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::{
    Category, Course, GalleryImage, Post, Principal, ResultEntry, SiteSettings, Slider,
    Testimonial,
};
use crate::error::CmsError;

fn parse_id(raw: &str) -> Result<Uuid, CmsError> {
    Uuid::parse_str(raw).map_err(|e| CmsError::Internal(e.to_string()))
}

fn parse_ts(raw: &str) -> Result<DateTime<Utc>, CmsError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CmsError::Internal(e.to_string()))
}

/// Database row for principals table.
#[derive(Debug, Clone, FromRow)]
pub struct PrincipalRow {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<PrincipalRow> for Principal {
    type Error = CmsError;

    fn try_from(row: PrincipalRow) -> Result<Self, Self::Error> {
        Ok(Principal {
            id: parse_id(&row.id)?,
            email: row.email,
            display_name: row.display_name,
            password_hash: row.password_hash,
            created_at: parse_ts(&row.created_at)?,
            updated_at: parse_ts(&row.updated_at)?,
        })
    }
}

/// Database row for categories table.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = CmsError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: parse_id(&row.id)?,
            name: row.name,
            slug: row.slug,
            created_at: parse_ts(&row.created_at)?,
            updated_at: parse_ts(&row.updated_at)?,
        })
    }
}

/// Database row for posts table.
#[derive(Debug, Clone, FromRow)]
pub struct PostRow {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub category_id: Option<String>,
    pub excerpt: Option<String>,
    pub body: String,
    pub cover_image: Option<String>,
    pub published: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<PostRow> for Post {
    type Error = CmsError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: parse_id(&row.id)?,
            title: row.title,
            slug: row.slug,
            category_id: row.category_id.as_deref().map(parse_id).transpose()?,
            excerpt: row.excerpt,
            body: row.body,
            cover_image: row.cover_image,
            published: row.published != 0,
            created_at: parse_ts(&row.created_at)?,
            updated_at: parse_ts(&row.updated_at)?,
        })
    }
}

/// Database row for courses table.
#[derive(Debug, Clone, FromRow)]
pub struct CourseRow {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub duration: Option<String>,
    pub fee: Option<String>,
    pub image: Option<String>,
    pub published: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<CourseRow> for Course {
    type Error = CmsError;

    fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
        Ok(Course {
            id: parse_id(&row.id)?,
            name: row.name,
            slug: row.slug,
            description: row.description,
            duration: row.duration,
            fee: row.fee,
            image: row.image,
            published: row.published != 0,
            created_at: parse_ts(&row.created_at)?,
            updated_at: parse_ts(&row.updated_at)?,
        })
    }
}

/// Database row for testimonials table.
#[derive(Debug, Clone, FromRow)]
pub struct TestimonialRow {
    pub id: String,
    pub author: String,
    pub quote: String,
    pub photo: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<TestimonialRow> for Testimonial {
    type Error = CmsError;

    fn try_from(row: TestimonialRow) -> Result<Self, Self::Error> {
        Ok(Testimonial {
            id: parse_id(&row.id)?,
            author: row.author,
            quote: row.quote,
            photo: row.photo,
            created_at: parse_ts(&row.created_at)?,
            updated_at: parse_ts(&row.updated_at)?,
        })
    }
}

/// Database row for sliders table.
#[derive(Debug, Clone, FromRow)]
pub struct SliderRow {
    pub id: String,
    pub title: Option<String>,
    pub image: String,
    pub link: Option<String>,
    pub position: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<SliderRow> for Slider {
    type Error = CmsError;

    fn try_from(row: SliderRow) -> Result<Self, Self::Error> {
        Ok(Slider {
            id: parse_id(&row.id)?,
            title: row.title,
            image: row.image,
            link: row.link,
            position: row.position,
            created_at: parse_ts(&row.created_at)?,
            updated_at: parse_ts(&row.updated_at)?,
        })
    }
}

/// Database row for gallery_images table.
#[derive(Debug, Clone, FromRow)]
pub struct GalleryImageRow {
    pub id: String,
    pub caption: Option<String>,
    pub image: String,
    pub created_at: String,
}

impl TryFrom<GalleryImageRow> for GalleryImage {
    type Error = CmsError;

    fn try_from(row: GalleryImageRow) -> Result<Self, Self::Error> {
        Ok(GalleryImage {
            id: parse_id(&row.id)?,
            caption: row.caption,
            image: row.image,
            created_at: parse_ts(&row.created_at)?,
        })
    }
}

/// Database row for result_entries table.
#[derive(Debug, Clone, FromRow)]
pub struct ResultEntryRow {
    pub id: String,
    pub student_name: String,
    pub exam: String,
    pub score: String,
    pub year: i64,
    pub photo: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<ResultEntryRow> for ResultEntry {
    type Error = CmsError;

    fn try_from(row: ResultEntryRow) -> Result<Self, Self::Error> {
        Ok(ResultEntry {
            id: parse_id(&row.id)?,
            student_name: row.student_name,
            exam: row.exam,
            score: row.score,
            year: row.year,
            photo: row.photo,
            created_at: parse_ts(&row.created_at)?,
            updated_at: parse_ts(&row.updated_at)?,
        })
    }
}

/// Database row for site_settings table (single row, fixed key).
#[derive(Debug, Clone, FromRow)]
pub struct SiteSettingsRow {
    pub site_name: String,
    pub tagline: Option<String>,
    pub phone: Option<String>,
    pub contact_email: Option<String>,
    pub address: Option<String>,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub youtube_url: Option<String>,
    pub updated_at: String,
}

impl TryFrom<SiteSettingsRow> for SiteSettings {
    type Error = CmsError;

    fn try_from(row: SiteSettingsRow) -> Result<Self, Self::Error> {
        Ok(SiteSettings {
            site_name: row.site_name,
            tagline: row.tagline,
            phone: row.phone,
            contact_email: row.contact_email,
            address: row.address,
            facebook_url: row.facebook_url,
            instagram_url: row.instagram_url,
            youtube_url: row.youtube_url,
            updated_at: parse_ts(&row.updated_at)?,
        })
    }
}
