//! Repository layer for database operations.

use sqlx::sqlite::SqlitePool;
use uuid::Uuid;

use crate::domain::{
    slugify, Category, Course, GalleryImage, Post, Principal, ResultEntry, SiteSettings, Slider,
    Testimonial,
};
use crate::error::{CmsError, CmsResult};
use crate::storage::models::{
    CategoryRow, CourseRow, GalleryImageRow, PostRow, PrincipalRow, ResultEntryRow,
    SiteSettingsRow, SliderRow, TestimonialRow,
};

/// Repository for all CMS database operations.
#[derive(Clone)]
pub struct CmsRepository {
    pool: SqlitePool,
}

impl CmsRepository {
    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Initialize the database schema.
    pub async fn init_schema(&self) -> CmsResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS principals (
                id TEXT PRIMARY KEY,
                email TEXT NOT NULL UNIQUE,
                display_name TEXT NOT NULL,
                password_hash TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_principals_email ON principals(email);
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                slug TEXT NOT NULL UNIQUE,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS posts (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                slug TEXT NOT NULL UNIQUE,
                category_id TEXT,
                excerpt TEXT,
                body TEXT NOT NULL,
                cover_image TEXT,
                published INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                FOREIGN KEY (category_id) REFERENCES categories(id) ON DELETE SET NULL
            );

            CREATE INDEX IF NOT EXISTS idx_posts_slug ON posts(slug);
            CREATE INDEX IF NOT EXISTS idx_posts_category ON posts(category_id);
            CREATE INDEX IF NOT EXISTS idx_posts_created_at ON posts(created_at);
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS courses (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                slug TEXT NOT NULL UNIQUE,
                description TEXT NOT NULL,
                duration TEXT,
                fee TEXT,
                image TEXT,
                published INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_courses_slug ON courses(slug);
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS testimonials (
                id TEXT PRIMARY KEY,
                author TEXT NOT NULL,
                quote TEXT NOT NULL,
                photo TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS sliders (
                id TEXT PRIMARY KEY,
                title TEXT,
                image TEXT NOT NULL,
                link TEXT,
                position INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_sliders_position ON sliders(position);
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS gallery_images (
                id TEXT PRIMARY KEY,
                caption TEXT,
                image TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS result_entries (
                id TEXT PRIMARY KEY,
                student_name TEXT NOT NULL,
                exam TEXT NOT NULL,
                score TEXT NOT NULL,
                year INTEGER NOT NULL,
                photo TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_result_entries_year ON result_entries(year);
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS site_settings (
                key INTEGER PRIMARY KEY CHECK (key = 1),
                site_name TEXT NOT NULL,
                tagline TEXT,
                phone TEXT,
                contact_email TEXT,
                address TEXT,
                facebook_url TEXT,
                instagram_url TEXT,
                youtube_url TEXT,
                updated_at TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // ==================== Principals ====================

    /// Create a principal (seed/admin-creation flow).
    pub async fn create_principal(&self, principal: &Principal) -> CmsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO principals (id, email, display_name, password_hash, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(principal.id.to_string())
        .bind(&principal.email)
        .bind(&principal.display_name)
        .bind(&principal.password_hash)
        .bind(principal.created_at.to_rfc3339())
        .bind(principal.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Find a principal by email. Returns None when absent.
    pub async fn find_principal_by_email(&self, email: &str) -> CmsResult<Option<Principal>> {
        let row: Option<PrincipalRow> = sqlx::query_as("SELECT * FROM principals WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(TryInto::try_into).transpose()
    }

    // ==================== Categories ====================

    /// Create a category.
    pub async fn create_category(&self, category: &Category) -> CmsResult<()> {
        sqlx::query(
            "INSERT INTO categories (id, name, slug, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(category.id.to_string())
        .bind(&category.name)
        .bind(&category.slug)
        .bind(category.created_at.to_rfc3339())
        .bind(category.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List categories.
    pub async fn list_categories(&self, limit: i64, offset: i64) -> CmsResult<Vec<Category>> {
        let rows: Vec<CategoryRow> =
            sqlx::query_as("SELECT * FROM categories ORDER BY name LIMIT ? OFFSET ?")
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a category by ID.
    pub async fn get_category(&self, id: Uuid) -> CmsResult<Category> {
        let row: CategoryRow = sqlx::query_as("SELECT * FROM categories WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| CmsError::NotFound(format!("Category {} not found", id)))?;

        row.try_into()
    }

    /// Find a category by slug. Returns None when absent.
    pub async fn find_category_by_slug(&self, slug: &str) -> CmsResult<Option<Category>> {
        let row: Option<CategoryRow> = sqlx::query_as("SELECT * FROM categories WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Update a category (slug follows the name).
    pub async fn update_category(&self, id: Uuid, name: Option<&str>) -> CmsResult<Category> {
        let updated_at = chrono::Utc::now().to_rfc3339();

        if let Some(name) = name {
            let slug = slugify(name);
            sqlx::query("UPDATE categories SET name = ?, slug = ?, updated_at = ? WHERE id = ?")
                .bind(name)
                .bind(&slug)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        self.get_category(id).await
    }

    /// Delete a category.
    pub async fn delete_category(&self, id: Uuid) -> CmsResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CmsError::NotFound(format!("Category {} not found", id)));
        }

        Ok(())
    }

    // ==================== Posts ====================

    /// Create a post.
    pub async fn create_post(&self, post: &Post) -> CmsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                id, title, slug, category_id, excerpt, body,
                cover_image, published, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(post.id.to_string())
        .bind(&post.title)
        .bind(&post.slug)
        .bind(post.category_id.map(|id| id.to_string()))
        .bind(&post.excerpt)
        .bind(&post.body)
        .bind(&post.cover_image)
        .bind(post.published as i64)
        .bind(post.created_at.to_rfc3339())
        .bind(post.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List posts, newest first. `published_only` hides drafts (public site).
    pub async fn list_posts(
        &self,
        published_only: bool,
        limit: i64,
        offset: i64,
    ) -> CmsResult<Vec<Post>> {
        let rows: Vec<PostRow> = if published_only {
            sqlx::query_as(
                "SELECT * FROM posts WHERE published = 1 ORDER BY created_at DESC LIMIT ? OFFSET ?",
            )
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as("SELECT * FROM posts ORDER BY created_at DESC LIMIT ? OFFSET ?")
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
        };

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a post by ID.
    pub async fn get_post(&self, id: Uuid) -> CmsResult<Post> {
        let row: PostRow = sqlx::query_as("SELECT * FROM posts WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| CmsError::NotFound(format!("Post {} not found", id)))?;

        row.try_into()
    }

    /// Find a post by slug. Returns None when absent.
    pub async fn find_post_by_slug(&self, slug: &str) -> CmsResult<Option<Post>> {
        let row: Option<PostRow> = sqlx::query_as("SELECT * FROM posts WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Update a post (slug follows the title).
    #[allow(clippy::too_many_arguments)]
    pub async fn update_post(
        &self,
        id: Uuid,
        title: Option<&str>,
        category_id: Option<Uuid>,
        excerpt: Option<&str>,
        body: Option<&str>,
        cover_image: Option<&str>,
        published: Option<bool>,
    ) -> CmsResult<Post> {
        let updated_at = chrono::Utc::now().to_rfc3339();

        if let Some(title) = title {
            let slug = slugify(title);
            sqlx::query("UPDATE posts SET title = ?, slug = ?, updated_at = ? WHERE id = ?")
                .bind(title)
                .bind(&slug)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(category_id) = category_id {
            sqlx::query("UPDATE posts SET category_id = ?, updated_at = ? WHERE id = ?")
                .bind(category_id.to_string())
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(excerpt) = excerpt {
            sqlx::query("UPDATE posts SET excerpt = ?, updated_at = ? WHERE id = ?")
                .bind(excerpt)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(body) = body {
            sqlx::query("UPDATE posts SET body = ?, updated_at = ? WHERE id = ?")
                .bind(body)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(cover_image) = cover_image {
            sqlx::query("UPDATE posts SET cover_image = ?, updated_at = ? WHERE id = ?")
                .bind(cover_image)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(published) = published {
            sqlx::query("UPDATE posts SET published = ?, updated_at = ? WHERE id = ?")
                .bind(published as i64)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        self.get_post(id).await
    }

    /// Delete a post.
    pub async fn delete_post(&self, id: Uuid) -> CmsResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CmsError::NotFound(format!("Post {} not found", id)));
        }

        Ok(())
    }

    // ==================== Courses ====================

    /// Create a course.
    pub async fn create_course(&self, course: &Course) -> CmsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO courses (
                id, name, slug, description, duration, fee,
                image, published, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(course.id.to_string())
        .bind(&course.name)
        .bind(&course.slug)
        .bind(&course.description)
        .bind(&course.duration)
        .bind(&course.fee)
        .bind(&course.image)
        .bind(course.published as i64)
        .bind(course.created_at.to_rfc3339())
        .bind(course.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List courses. `published_only` hides drafts (public site).
    pub async fn list_courses(
        &self,
        published_only: bool,
        limit: i64,
        offset: i64,
    ) -> CmsResult<Vec<Course>> {
        let rows: Vec<CourseRow> = if published_only {
            sqlx::query_as(
                "SELECT * FROM courses WHERE published = 1 ORDER BY name LIMIT ? OFFSET ?",
            )
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as("SELECT * FROM courses ORDER BY name LIMIT ? OFFSET ?")
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?
        };

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a course by ID.
    pub async fn get_course(&self, id: Uuid) -> CmsResult<Course> {
        let row: CourseRow = sqlx::query_as("SELECT * FROM courses WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| CmsError::NotFound(format!("Course {} not found", id)))?;

        row.try_into()
    }

    /// Find a course by slug. Returns None when absent.
    pub async fn find_course_by_slug(&self, slug: &str) -> CmsResult<Option<Course>> {
        let row: Option<CourseRow> = sqlx::query_as("SELECT * FROM courses WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Update a course (slug follows the name).
    #[allow(clippy::too_many_arguments)]
    pub async fn update_course(
        &self,
        id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
        duration: Option<&str>,
        fee: Option<&str>,
        image: Option<&str>,
        published: Option<bool>,
    ) -> CmsResult<Course> {
        let updated_at = chrono::Utc::now().to_rfc3339();

        if let Some(name) = name {
            let slug = slugify(name);
            sqlx::query("UPDATE courses SET name = ?, slug = ?, updated_at = ? WHERE id = ?")
                .bind(name)
                .bind(&slug)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(description) = description {
            sqlx::query("UPDATE courses SET description = ?, updated_at = ? WHERE id = ?")
                .bind(description)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(duration) = duration {
            sqlx::query("UPDATE courses SET duration = ?, updated_at = ? WHERE id = ?")
                .bind(duration)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(fee) = fee {
            sqlx::query("UPDATE courses SET fee = ?, updated_at = ? WHERE id = ?")
                .bind(fee)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(image) = image {
            sqlx::query("UPDATE courses SET image = ?, updated_at = ? WHERE id = ?")
                .bind(image)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(published) = published {
            sqlx::query("UPDATE courses SET published = ?, updated_at = ? WHERE id = ?")
                .bind(published as i64)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        self.get_course(id).await
    }

    /// Delete a course.
    pub async fn delete_course(&self, id: Uuid) -> CmsResult<()> {
        let result = sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CmsError::NotFound(format!("Course {} not found", id)));
        }

        Ok(())
    }

    // ==================== Testimonials ====================

    /// Create a testimonial.
    pub async fn create_testimonial(&self, testimonial: &Testimonial) -> CmsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO testimonials (id, author, quote, photo, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(testimonial.id.to_string())
        .bind(&testimonial.author)
        .bind(&testimonial.quote)
        .bind(&testimonial.photo)
        .bind(testimonial.created_at.to_rfc3339())
        .bind(testimonial.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List testimonials, newest first.
    pub async fn list_testimonials(&self, limit: i64, offset: i64) -> CmsResult<Vec<Testimonial>> {
        let rows: Vec<TestimonialRow> =
            sqlx::query_as("SELECT * FROM testimonials ORDER BY created_at DESC LIMIT ? OFFSET ?")
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a testimonial by ID.
    pub async fn get_testimonial(&self, id: Uuid) -> CmsResult<Testimonial> {
        let row: TestimonialRow = sqlx::query_as("SELECT * FROM testimonials WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| CmsError::NotFound(format!("Testimonial {} not found", id)))?;

        row.try_into()
    }

    /// Update a testimonial.
    pub async fn update_testimonial(
        &self,
        id: Uuid,
        author: Option<&str>,
        quote: Option<&str>,
        photo: Option<&str>,
    ) -> CmsResult<Testimonial> {
        let updated_at = chrono::Utc::now().to_rfc3339();

        if let Some(author) = author {
            sqlx::query("UPDATE testimonials SET author = ?, updated_at = ? WHERE id = ?")
                .bind(author)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(quote) = quote {
            sqlx::query("UPDATE testimonials SET quote = ?, updated_at = ? WHERE id = ?")
                .bind(quote)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(photo) = photo {
            sqlx::query("UPDATE testimonials SET photo = ?, updated_at = ? WHERE id = ?")
                .bind(photo)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        self.get_testimonial(id).await
    }

    /// Delete a testimonial.
    pub async fn delete_testimonial(&self, id: Uuid) -> CmsResult<()> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CmsError::NotFound(format!("Testimonial {} not found", id)));
        }

        Ok(())
    }

    // ==================== Sliders ====================

    /// Create a slider.
    pub async fn create_slider(&self, slider: &Slider) -> CmsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO sliders (id, title, image, link, position, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(slider.id.to_string())
        .bind(&slider.title)
        .bind(&slider.image)
        .bind(&slider.link)
        .bind(slider.position)
        .bind(slider.created_at.to_rfc3339())
        .bind(slider.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List sliders in carousel order.
    pub async fn list_sliders(&self, limit: i64, offset: i64) -> CmsResult<Vec<Slider>> {
        let rows: Vec<SliderRow> =
            sqlx::query_as("SELECT * FROM sliders ORDER BY position LIMIT ? OFFSET ?")
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a slider by ID.
    pub async fn get_slider(&self, id: Uuid) -> CmsResult<Slider> {
        let row: SliderRow = sqlx::query_as("SELECT * FROM sliders WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| CmsError::NotFound(format!("Slider {} not found", id)))?;

        row.try_into()
    }

    /// Update a slider.
    pub async fn update_slider(
        &self,
        id: Uuid,
        title: Option<&str>,
        image: Option<&str>,
        link: Option<&str>,
        position: Option<i64>,
    ) -> CmsResult<Slider> {
        let updated_at = chrono::Utc::now().to_rfc3339();

        if let Some(title) = title {
            sqlx::query("UPDATE sliders SET title = ?, updated_at = ? WHERE id = ?")
                .bind(title)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(image) = image {
            sqlx::query("UPDATE sliders SET image = ?, updated_at = ? WHERE id = ?")
                .bind(image)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(link) = link {
            sqlx::query("UPDATE sliders SET link = ?, updated_at = ? WHERE id = ?")
                .bind(link)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(position) = position {
            sqlx::query("UPDATE sliders SET position = ?, updated_at = ? WHERE id = ?")
                .bind(position)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        self.get_slider(id).await
    }

    /// Delete a slider.
    pub async fn delete_slider(&self, id: Uuid) -> CmsResult<()> {
        let result = sqlx::query("DELETE FROM sliders WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CmsError::NotFound(format!("Slider {} not found", id)));
        }

        Ok(())
    }

    // ==================== Gallery ====================

    /// Create a gallery image.
    pub async fn create_gallery_image(&self, image: &GalleryImage) -> CmsResult<()> {
        sqlx::query(
            "INSERT INTO gallery_images (id, caption, image, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(image.id.to_string())
        .bind(&image.caption)
        .bind(&image.image)
        .bind(image.created_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List gallery images, newest first.
    pub async fn list_gallery_images(
        &self,
        limit: i64,
        offset: i64,
    ) -> CmsResult<Vec<GalleryImage>> {
        let rows: Vec<GalleryImageRow> = sqlx::query_as(
            "SELECT * FROM gallery_images ORDER BY created_at DESC LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a gallery image by ID.
    pub async fn get_gallery_image(&self, id: Uuid) -> CmsResult<GalleryImage> {
        let row: GalleryImageRow = sqlx::query_as("SELECT * FROM gallery_images WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| CmsError::NotFound(format!("Gallery image {} not found", id)))?;

        row.try_into()
    }

    /// Delete a gallery image.
    pub async fn delete_gallery_image(&self, id: Uuid) -> CmsResult<()> {
        let result = sqlx::query("DELETE FROM gallery_images WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CmsError::NotFound(format!("Gallery image {} not found", id)));
        }

        Ok(())
    }

    // ==================== Results ====================

    /// Create a result entry.
    pub async fn create_result_entry(&self, entry: &ResultEntry) -> CmsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO result_entries (
                id, student_name, exam, score, year, photo, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(entry.id.to_string())
        .bind(&entry.student_name)
        .bind(&entry.exam)
        .bind(&entry.score)
        .bind(entry.year)
        .bind(&entry.photo)
        .bind(entry.created_at.to_rfc3339())
        .bind(entry.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// List result entries, most recent exam year first.
    pub async fn list_result_entries(&self, limit: i64, offset: i64) -> CmsResult<Vec<ResultEntry>> {
        let rows: Vec<ResultEntryRow> = sqlx::query_as(
            "SELECT * FROM result_entries ORDER BY year DESC, student_name LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a result entry by ID.
    pub async fn get_result_entry(&self, id: Uuid) -> CmsResult<ResultEntry> {
        let row: ResultEntryRow = sqlx::query_as("SELECT * FROM result_entries WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| CmsError::NotFound(format!("Result entry {} not found", id)))?;

        row.try_into()
    }

    /// Update a result entry.
    pub async fn update_result_entry(
        &self,
        id: Uuid,
        student_name: Option<&str>,
        exam: Option<&str>,
        score: Option<&str>,
        year: Option<i64>,
        photo: Option<&str>,
    ) -> CmsResult<ResultEntry> {
        let updated_at = chrono::Utc::now().to_rfc3339();

        if let Some(student_name) = student_name {
            sqlx::query("UPDATE result_entries SET student_name = ?, updated_at = ? WHERE id = ?")
                .bind(student_name)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(exam) = exam {
            sqlx::query("UPDATE result_entries SET exam = ?, updated_at = ? WHERE id = ?")
                .bind(exam)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(score) = score {
            sqlx::query("UPDATE result_entries SET score = ?, updated_at = ? WHERE id = ?")
                .bind(score)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(year) = year {
            sqlx::query("UPDATE result_entries SET year = ?, updated_at = ? WHERE id = ?")
                .bind(year)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        if let Some(photo) = photo {
            sqlx::query("UPDATE result_entries SET photo = ?, updated_at = ? WHERE id = ?")
                .bind(photo)
                .bind(&updated_at)
                .bind(id.to_string())
                .execute(&self.pool)
                .await?;
        }

        self.get_result_entry(id).await
    }

    /// Delete a result entry.
    pub async fn delete_result_entry(&self, id: Uuid) -> CmsResult<()> {
        let result = sqlx::query("DELETE FROM result_entries WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CmsError::NotFound(format!("Result entry {} not found", id)));
        }

        Ok(())
    }

    // ==================== Site Settings ====================

    /// Get the site settings, falling back to defaults when the row is absent.
    pub async fn get_site_settings(&self) -> CmsResult<SiteSettings> {
        let row: Option<SiteSettingsRow> =
            sqlx::query_as("SELECT * FROM site_settings WHERE key = 1")
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some(row) => row.try_into(),
            None => Ok(SiteSettings::default()),
        }
    }

    /// Replace the site settings (single upserted row).
    pub async fn save_site_settings(&self, settings: &SiteSettings) -> CmsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO site_settings (
                key, site_name, tagline, phone, contact_email, address,
                facebook_url, instagram_url, youtube_url, updated_at
            ) VALUES (1, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                site_name = excluded.site_name,
                tagline = excluded.tagline,
                phone = excluded.phone,
                contact_email = excluded.contact_email,
                address = excluded.address,
                facebook_url = excluded.facebook_url,
                instagram_url = excluded.instagram_url,
                youtube_url = excluded.youtube_url,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&settings.site_name)
        .bind(&settings.tagline)
        .bind(&settings.phone)
        .bind(&settings.contact_email)
        .bind(&settings.address)
        .bind(&settings.facebook_url)
        .bind(&settings.instagram_url)
        .bind(&settings.youtube_url)
        .bind(settings.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Post;

    async fn repository() -> CmsRepository {
        let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
        let repository = CmsRepository::new(pool);
        repository.init_schema().await.unwrap();
        repository
    }

    #[tokio::test]
    async fn test_post_crud_roundtrip() {
        let repository = repository().await;

        let post = Post::new(
            "Batch Timings Updated".to_string(),
            None,
            Some("New schedule".to_string()),
            "<p>Timings change from Monday.</p>".to_string(),
            None,
            false,
        );
        repository.create_post(&post).await.unwrap();

        let fetched = repository.get_post(post.id).await.unwrap();
        assert_eq!(fetched.slug, "batch-timings-updated");
        assert!(!fetched.published);

        let updated = repository
            .update_post(post.id, None, None, None, None, None, Some(true))
            .await
            .unwrap();
        assert!(updated.published);

        repository.delete_post(post.id).await.unwrap();
        assert!(repository.get_post(post.id).await.is_err());
    }

    #[tokio::test]
    async fn test_published_filter_hides_drafts() {
        let repository = repository().await;

        let draft = Post::new(
            "Draft".to_string(),
            None,
            None,
            "x".to_string(),
            None,
            false,
        );
        let live = Post::new(
            "Live".to_string(),
            None,
            None,
            "x".to_string(),
            None,
            true,
        );
        repository.create_post(&draft).await.unwrap();
        repository.create_post(&live).await.unwrap();

        let public = repository.list_posts(true, 20, 0).await.unwrap();
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].slug, "live");

        let admin = repository.list_posts(false, 20, 0).await.unwrap();
        assert_eq!(admin.len(), 2);
    }

    #[tokio::test]
    async fn test_find_principal_absent_is_none() {
        let repository = repository().await;
        let found = repository
            .find_principal_by_email("nobody@example.com")
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_settings_default_then_upsert() {
        let repository = repository().await;

        let defaults = repository.get_site_settings().await.unwrap();
        assert_eq!(defaults.site_name, "Academy");

        let mut settings = defaults;
        settings.site_name = "Summit Coaching".to_string();
        settings.phone = Some("+91 98765 43210".to_string());
        repository.save_site_settings(&settings).await.unwrap();
        // Second save exercises the upsert path.
        repository.save_site_settings(&settings).await.unwrap();

        let fetched = repository.get_site_settings().await.unwrap();
        assert_eq!(fetched.site_name, "Summit Coaching");
        assert_eq!(fetched.phone.as_deref(), Some("+91 98765 43210"));
    }
}
