//! HTTP request handlers.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{AppendHeaders, IntoResponse},
    Json,
};
use uuid::Uuid;

use crate::api::types::*;
use crate::auth::{cookie, Claims, CredentialIssuer, IssueError};
use crate::domain::{
    slugify, Category, Course, GalleryImage, Post, ResultEntry, Slider, Testimonial,
};
use crate::error::{CmsError, CmsResult};
use crate::AppState;

/// Authentication state for the login/logout endpoints.
#[derive(Clone)]
pub struct AuthState {
    pub issuer: CredentialIssuer,
    pub cookie_name: String,
}

// ==================== Authentication Endpoints ====================

/// Login to obtain an admin access token.
///
/// POST /admin/login
#[utoipa::path(
    post,
    path = "/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 503, description = "Credential store unavailable")
    ),
    tag = "auth"
)]
pub async fn login(
    State(auth): State<AuthState>,
    Json(request): Json<LoginRequest>,
) -> CmsResult<impl IntoResponse> {
    let (principal, issued) = auth
        .issuer
        .issue(&request.email, &request.password)
        .await
        .map_err(|e| {
            if matches!(e, IssueError::Infrastructure(_)) {
                tracing::error!(error = %e, "Credential issuance failed");
            } else {
                // Kind stays internal; the response is uniform either way.
                tracing::warn!(email = %request.email, "Failed login attempt");
            }
            CmsError::from(e)
        })?;

    let expires_in = auth.issuer.tokens().ttl_hours() * 3600;
    let set_cookie = cookie::session_cookie(&auth.cookie_name, &issued.token, expires_in);

    tracing::info!(email = %principal.email, "Admin logged in");

    Ok((
        AppendHeaders([(header::SET_COOKIE, set_cookie)]),
        Json(LoginResponse {
            token: issued.token,
            user: AdminInfo {
                email: principal.email,
                display_name: Some(principal.display_name),
                role: issued.claims.role,
            },
            expires_in,
        }),
    ))
}

/// Get the authenticated admin from the verified token.
///
/// GET /admin/me
#[utoipa::path(
    get,
    path = "/admin/me",
    responses(
        (status = 200, description = "Current admin", body = AdminInfo),
        (status = 303, description = "Not authenticated; redirected to login")
    ),
    tag = "auth"
)]
pub async fn get_current_admin(
    axum::Extension(claims): axum::Extension<Claims>,
) -> Json<AdminInfo> {
    Json(AdminInfo {
        email: claims.sub,
        display_name: None,
        role: claims.role,
    })
}

/// Logout by clearing the token cookie. There is no server-side revocation;
/// the client simply discards its credential.
///
/// POST /admin/logout
#[utoipa::path(
    post,
    path = "/admin/logout",
    responses(
        (status = 204, description = "Cookie cleared")
    ),
    tag = "auth"
)]
pub async fn logout(State(auth): State<AuthState>) -> impl IntoResponse {
    (
        AppendHeaders([(header::SET_COOKIE, cookie::clear_cookie(&auth.cookie_name))]),
        StatusCode::NO_CONTENT,
    )
}

// ==================== Health ====================

/// Health check endpoint.
///
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    // Check database connectivity
    let db_status = match sqlx::query("SELECT 1")
        .fetch_one(state.repository.pool())
        .await
    {
        Ok(_) => "connected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

// ==================== Category Endpoints ====================

/// Create a category.
///
/// POST /admin/categories
#[utoipa::path(
    post,
    path = "/admin/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Invalid request")
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(request): Json<CreateCategoryRequest>,
) -> CmsResult<(StatusCode, Json<Category>)> {
    let slug = slugify(&request.name);
    // Catches empty names and names with no sluggable characters at all.
    if slug.is_empty() {
        return Err(CmsError::BadRequest(
            "Category name must contain letters or digits".to_string(),
        ));
    }
    if state.repository.find_category_by_slug(&slug).await?.is_some() {
        return Err(CmsError::BadRequest(format!(
            "A category with slug '{}' already exists",
            slug
        )));
    }

    let category = Category::new(request.name);
    state.repository.create_category(&category).await?;

    tracing::info!(category_id = %category.id, slug = %category.slug, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// List categories.
///
/// GET /admin/categories
#[utoipa::path(
    get,
    path = "/admin/categories",
    params(
        ("limit" = Option<i64>, Query, description = "Maximum results (default 20)"),
        ("offset" = Option<i64>, Query, description = "Pagination offset")
    ),
    responses(
        (status = 200, description = "List of categories", body = ListCategoriesResponse)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> CmsResult<Json<ListCategoriesResponse>> {
    let limit = query.limit.clamp(1, 100);
    let offset = query.offset.max(0);

    let categories = state.repository.list_categories(limit, offset).await?;

    Ok(Json(ListCategoriesResponse {
        categories,
        limit,
        offset,
    }))
}

/// Get a category by ID.
///
/// GET /admin/categories/{id}
#[utoipa::path(
    get,
    path = "/admin/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = Category),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> CmsResult<Json<Category>> {
    Ok(Json(state.repository.get_category(id).await?))
}

/// Update a category.
///
/// PUT /admin/categories/{id}
#[utoipa::path(
    put,
    path = "/admin/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCategoryRequest>,
) -> CmsResult<Json<Category>> {
    // 404 before attempting any update
    state.repository.get_category(id).await?;

    let category = state
        .repository
        .update_category(id, request.name.as_deref())
        .await?;

    Ok(Json(category))
}

/// Delete a category.
///
/// DELETE /admin/categories/{id}
#[utoipa::path(
    delete,
    path = "/admin/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> CmsResult<StatusCode> {
    state.repository.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ==================== Post Endpoints ====================

/// Create a blog post.
///
/// POST /admin/posts
#[utoipa::path(
    post,
    path = "/admin/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = Post),
        (status = 400, description = "Invalid request")
    ),
    tag = "posts"
)]
pub async fn create_post(
    State(state): State<AppState>,
    Json(request): Json<CreatePostRequest>,
) -> CmsResult<(StatusCode, Json<Post>)> {
    let slug = slugify(&request.title);
    if slug.is_empty() {
        return Err(CmsError::BadRequest(
            "Post title must contain letters or digits".to_string(),
        ));
    }
    if state.repository.find_post_by_slug(&slug).await?.is_some() {
        return Err(CmsError::BadRequest(format!(
            "A post with slug '{}' already exists",
            slug
        )));
    }

    if let Some(category_id) = request.category_id {
        // 404 message would mislead here; a bad reference is a bad request.
        state
            .repository
            .get_category(category_id)
            .await
            .map_err(|_| CmsError::BadRequest(format!("Unknown category {}", category_id)))?;
    }

    let post = Post::new(
        request.title,
        request.category_id,
        request.excerpt,
        request.body,
        request.cover_image,
        request.published,
    );
    state.repository.create_post(&post).await?;

    tracing::info!(post_id = %post.id, slug = %post.slug, published = post.published, "Post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// List all posts, drafts included.
///
/// GET /admin/posts
#[utoipa::path(
    get,
    path = "/admin/posts",
    params(
        ("limit" = Option<i64>, Query, description = "Maximum results (default 20)"),
        ("offset" = Option<i64>, Query, description = "Pagination offset")
    ),
    responses(
        (status = 200, description = "List of posts", body = ListPostsResponse)
    ),
    tag = "posts"
)]
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> CmsResult<Json<ListPostsResponse>> {
    let limit = query.limit.clamp(1, 100);
    let offset = query.offset.max(0);

    let posts = state.repository.list_posts(false, limit, offset).await?;

    Ok(Json(ListPostsResponse {
        posts,
        limit,
        offset,
    }))
}

/// Get a post by ID.
///
/// GET /admin/posts/{id}
#[utoipa::path(
    get,
    path = "/admin/posts/{id}",
    params(("id" = Uuid, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post details", body = Post),
        (status = 404, description = "Post not found")
    ),
    tag = "posts"
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> CmsResult<Json<Post>> {
    Ok(Json(state.repository.get_post(id).await?))
}

/// Update a post.
///
/// PUT /admin/posts/{id}
#[utoipa::path(
    put,
    path = "/admin/posts/{id}",
    params(("id" = Uuid, Path, description = "Post ID")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated", body = Post),
        (status = 404, description = "Post not found")
    ),
    tag = "posts"
)]
pub async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePostRequest>,
) -> CmsResult<Json<Post>> {
    state.repository.get_post(id).await?;

    if let Some(category_id) = request.category_id {
        state
            .repository
            .get_category(category_id)
            .await
            .map_err(|_| CmsError::BadRequest(format!("Unknown category {}", category_id)))?;
    }

    let post = state
        .repository
        .update_post(
            id,
            request.title.as_deref(),
            request.category_id,
            request.excerpt.as_deref(),
            request.body.as_deref(),
            request.cover_image.as_deref(),
            request.published,
        )
        .await?;

    Ok(Json(post))
}

/// Delete a post.
///
/// DELETE /admin/posts/{id}
#[utoipa::path(
    delete,
    path = "/admin/posts/{id}",
    params(("id" = Uuid, Path, description = "Post ID")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 404, description = "Post not found")
    ),
    tag = "posts"
)]
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> CmsResult<StatusCode> {
    state.repository.delete_post(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ==================== Course Endpoints ====================

/// Create a course.
///
/// POST /admin/courses
#[utoipa::path(
    post,
    path = "/admin/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = Course),
        (status = 400, description = "Invalid request")
    ),
    tag = "courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    Json(request): Json<CreateCourseRequest>,
) -> CmsResult<(StatusCode, Json<Course>)> {
    let slug = slugify(&request.name);
    if slug.is_empty() {
        return Err(CmsError::BadRequest(
            "Course name must contain letters or digits".to_string(),
        ));
    }
    if state.repository.find_course_by_slug(&slug).await?.is_some() {
        return Err(CmsError::BadRequest(format!(
            "A course with slug '{}' already exists",
            slug
        )));
    }

    let course = Course::new(
        request.name,
        request.description,
        request.duration,
        request.fee,
        request.image,
        request.published,
    );
    state.repository.create_course(&course).await?;

    tracing::info!(course_id = %course.id, slug = %course.slug, "Course created");

    Ok((StatusCode::CREATED, Json(course)))
}

/// List all courses, drafts included.
///
/// GET /admin/courses
#[utoipa::path(
    get,
    path = "/admin/courses",
    params(
        ("limit" = Option<i64>, Query, description = "Maximum results (default 20)"),
        ("offset" = Option<i64>, Query, description = "Pagination offset")
    ),
    responses(
        (status = 200, description = "List of courses", body = ListCoursesResponse)
    ),
    tag = "courses"
)]
pub async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> CmsResult<Json<ListCoursesResponse>> {
    let limit = query.limit.clamp(1, 100);
    let offset = query.offset.max(0);

    let courses = state.repository.list_courses(false, limit, offset).await?;

    Ok(Json(ListCoursesResponse {
        courses,
        limit,
        offset,
    }))
}

/// Get a course by ID.
///
/// GET /admin/courses/{id}
#[utoipa::path(
    get,
    path = "/admin/courses/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course details", body = Course),
        (status = 404, description = "Course not found")
    ),
    tag = "courses"
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> CmsResult<Json<Course>> {
    Ok(Json(state.repository.get_course(id).await?))
}

/// Update a course.
///
/// PUT /admin/courses/{id}
#[utoipa::path(
    put,
    path = "/admin/courses/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = Course),
        (status = 404, description = "Course not found")
    ),
    tag = "courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCourseRequest>,
) -> CmsResult<Json<Course>> {
    state.repository.get_course(id).await?;

    let course = state
        .repository
        .update_course(
            id,
            request.name.as_deref(),
            request.description.as_deref(),
            request.duration.as_deref(),
            request.fee.as_deref(),
            request.image.as_deref(),
            request.published,
        )
        .await?;

    Ok(Json(course))
}

/// Delete a course.
///
/// DELETE /admin/courses/{id}
#[utoipa::path(
    delete,
    path = "/admin/courses/{id}",
    params(("id" = Uuid, Path, description = "Course ID")),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Course not found")
    ),
    tag = "courses"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> CmsResult<StatusCode> {
    state.repository.delete_course(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ==================== Testimonial Endpoints ====================

/// Create a testimonial.
///
/// POST /admin/testimonials
#[utoipa::path(
    post,
    path = "/admin/testimonials",
    request_body = CreateTestimonialRequest,
    responses(
        (status = 201, description = "Testimonial created", body = Testimonial),
        (status = 400, description = "Invalid request")
    ),
    tag = "testimonials"
)]
pub async fn create_testimonial(
    State(state): State<AppState>,
    Json(request): Json<CreateTestimonialRequest>,
) -> CmsResult<(StatusCode, Json<Testimonial>)> {
    if request.author.trim().is_empty() || request.quote.trim().is_empty() {
        return Err(CmsError::BadRequest(
            "Testimonial author and quote are required".to_string(),
        ));
    }

    let testimonial = Testimonial::new(request.author, request.quote, request.photo);
    state.repository.create_testimonial(&testimonial).await?;

    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// List testimonials.
///
/// GET /admin/testimonials
#[utoipa::path(
    get,
    path = "/admin/testimonials",
    params(
        ("limit" = Option<i64>, Query, description = "Maximum results (default 20)"),
        ("offset" = Option<i64>, Query, description = "Pagination offset")
    ),
    responses(
        (status = 200, description = "List of testimonials", body = ListTestimonialsResponse)
    ),
    tag = "testimonials"
)]
pub async fn list_testimonials(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> CmsResult<Json<ListTestimonialsResponse>> {
    let limit = query.limit.clamp(1, 100);
    let offset = query.offset.max(0);

    let testimonials = state.repository.list_testimonials(limit, offset).await?;

    Ok(Json(ListTestimonialsResponse {
        testimonials,
        limit,
        offset,
    }))
}

/// Get a testimonial by ID.
///
/// GET /admin/testimonials/{id}
#[utoipa::path(
    get,
    path = "/admin/testimonials/{id}",
    params(("id" = Uuid, Path, description = "Testimonial ID")),
    responses(
        (status = 200, description = "Testimonial details", body = Testimonial),
        (status = 404, description = "Testimonial not found")
    ),
    tag = "testimonials"
)]
pub async fn get_testimonial(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> CmsResult<Json<Testimonial>> {
    Ok(Json(state.repository.get_testimonial(id).await?))
}

/// Update a testimonial.
///
/// PUT /admin/testimonials/{id}
#[utoipa::path(
    put,
    path = "/admin/testimonials/{id}",
    params(("id" = Uuid, Path, description = "Testimonial ID")),
    request_body = UpdateTestimonialRequest,
    responses(
        (status = 200, description = "Testimonial updated", body = Testimonial),
        (status = 404, description = "Testimonial not found")
    ),
    tag = "testimonials"
)]
pub async fn update_testimonial(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTestimonialRequest>,
) -> CmsResult<Json<Testimonial>> {
    state.repository.get_testimonial(id).await?;

    let testimonial = state
        .repository
        .update_testimonial(
            id,
            request.author.as_deref(),
            request.quote.as_deref(),
            request.photo.as_deref(),
        )
        .await?;

    Ok(Json(testimonial))
}

/// Delete a testimonial.
///
/// DELETE /admin/testimonials/{id}
#[utoipa::path(
    delete,
    path = "/admin/testimonials/{id}",
    params(("id" = Uuid, Path, description = "Testimonial ID")),
    responses(
        (status = 204, description = "Testimonial deleted"),
        (status = 404, description = "Testimonial not found")
    ),
    tag = "testimonials"
)]
pub async fn delete_testimonial(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> CmsResult<StatusCode> {
    state.repository.delete_testimonial(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ==================== Slider Endpoints ====================

/// Create a slider.
///
/// POST /admin/sliders
#[utoipa::path(
    post,
    path = "/admin/sliders",
    request_body = CreateSliderRequest,
    responses(
        (status = 201, description = "Slider created", body = Slider),
        (status = 400, description = "Invalid request")
    ),
    tag = "sliders"
)]
pub async fn create_slider(
    State(state): State<AppState>,
    Json(request): Json<CreateSliderRequest>,
) -> CmsResult<(StatusCode, Json<Slider>)> {
    if request.image.trim().is_empty() {
        return Err(CmsError::BadRequest("Slider image is required".to_string()));
    }

    let slider = Slider::new(request.title, request.image, request.link, request.position);
    state.repository.create_slider(&slider).await?;

    Ok((StatusCode::CREATED, Json(slider)))
}

/// List sliders in carousel order.
///
/// GET /admin/sliders
#[utoipa::path(
    get,
    path = "/admin/sliders",
    params(
        ("limit" = Option<i64>, Query, description = "Maximum results (default 20)"),
        ("offset" = Option<i64>, Query, description = "Pagination offset")
    ),
    responses(
        (status = 200, description = "List of sliders", body = ListSlidersResponse)
    ),
    tag = "sliders"
)]
pub async fn list_sliders(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> CmsResult<Json<ListSlidersResponse>> {
    let limit = query.limit.clamp(1, 100);
    let offset = query.offset.max(0);

    let sliders = state.repository.list_sliders(limit, offset).await?;

    Ok(Json(ListSlidersResponse {
        sliders,
        limit,
        offset,
    }))
}

/// Get a slider by ID.
///
/// GET /admin/sliders/{id}
#[utoipa::path(
    get,
    path = "/admin/sliders/{id}",
    params(("id" = Uuid, Path, description = "Slider ID")),
    responses(
        (status = 200, description = "Slider details", body = Slider),
        (status = 404, description = "Slider not found")
    ),
    tag = "sliders"
)]
pub async fn get_slider(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> CmsResult<Json<Slider>> {
    Ok(Json(state.repository.get_slider(id).await?))
}

/// Update a slider.
///
/// PUT /admin/sliders/{id}
#[utoipa::path(
    put,
    path = "/admin/sliders/{id}",
    params(("id" = Uuid, Path, description = "Slider ID")),
    request_body = UpdateSliderRequest,
    responses(
        (status = 200, description = "Slider updated", body = Slider),
        (status = 404, description = "Slider not found")
    ),
    tag = "sliders"
)]
pub async fn update_slider(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateSliderRequest>,
) -> CmsResult<Json<Slider>> {
    state.repository.get_slider(id).await?;

    let slider = state
        .repository
        .update_slider(
            id,
            request.title.as_deref(),
            request.image.as_deref(),
            request.link.as_deref(),
            request.position,
        )
        .await?;

    Ok(Json(slider))
}

/// Delete a slider.
///
/// DELETE /admin/sliders/{id}
#[utoipa::path(
    delete,
    path = "/admin/sliders/{id}",
    params(("id" = Uuid, Path, description = "Slider ID")),
    responses(
        (status = 204, description = "Slider deleted"),
        (status = 404, description = "Slider not found")
    ),
    tag = "sliders"
)]
pub async fn delete_slider(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> CmsResult<StatusCode> {
    state.repository.delete_slider(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ==================== Gallery Endpoints ====================

/// Add a gallery image.
///
/// POST /admin/gallery
#[utoipa::path(
    post,
    path = "/admin/gallery",
    request_body = CreateGalleryImageRequest,
    responses(
        (status = 201, description = "Image added", body = GalleryImage),
        (status = 400, description = "Invalid request")
    ),
    tag = "gallery"
)]
pub async fn create_gallery_image(
    State(state): State<AppState>,
    Json(request): Json<CreateGalleryImageRequest>,
) -> CmsResult<(StatusCode, Json<GalleryImage>)> {
    if request.image.trim().is_empty() {
        return Err(CmsError::BadRequest("Image URL is required".to_string()));
    }

    let image = GalleryImage::new(request.caption, request.image);
    state.repository.create_gallery_image(&image).await?;

    Ok((StatusCode::CREATED, Json(image)))
}

/// List gallery images.
///
/// GET /admin/gallery
#[utoipa::path(
    get,
    path = "/admin/gallery",
    params(
        ("limit" = Option<i64>, Query, description = "Maximum results (default 20)"),
        ("offset" = Option<i64>, Query, description = "Pagination offset")
    ),
    responses(
        (status = 200, description = "List of gallery images", body = ListGalleryResponse)
    ),
    tag = "gallery"
)]
pub async fn list_gallery_images(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> CmsResult<Json<ListGalleryResponse>> {
    let limit = query.limit.clamp(1, 100);
    let offset = query.offset.max(0);

    let images = state.repository.list_gallery_images(limit, offset).await?;

    Ok(Json(ListGalleryResponse {
        images,
        limit,
        offset,
    }))
}

/// Get a gallery image by ID.
///
/// GET /admin/gallery/{id}
#[utoipa::path(
    get,
    path = "/admin/gallery/{id}",
    params(("id" = Uuid, Path, description = "Image ID")),
    responses(
        (status = 200, description = "Image details", body = GalleryImage),
        (status = 404, description = "Image not found")
    ),
    tag = "gallery"
)]
pub async fn get_gallery_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> CmsResult<Json<GalleryImage>> {
    Ok(Json(state.repository.get_gallery_image(id).await?))
}

/// Delete a gallery image.
///
/// DELETE /admin/gallery/{id}
#[utoipa::path(
    delete,
    path = "/admin/gallery/{id}",
    params(("id" = Uuid, Path, description = "Image ID")),
    responses(
        (status = 204, description = "Image deleted"),
        (status = 404, description = "Image not found")
    ),
    tag = "gallery"
)]
pub async fn delete_gallery_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> CmsResult<StatusCode> {
    state.repository.delete_gallery_image(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ==================== Result Endpoints ====================

/// Create a result entry.
///
/// POST /admin/results
#[utoipa::path(
    post,
    path = "/admin/results",
    request_body = CreateResultEntryRequest,
    responses(
        (status = 201, description = "Result entry created", body = ResultEntry),
        (status = 400, description = "Invalid request")
    ),
    tag = "results"
)]
pub async fn create_result_entry(
    State(state): State<AppState>,
    Json(request): Json<CreateResultEntryRequest>,
) -> CmsResult<(StatusCode, Json<ResultEntry>)> {
    if request.student_name.trim().is_empty() || request.exam.trim().is_empty() {
        return Err(CmsError::BadRequest(
            "Student name and exam are required".to_string(),
        ));
    }

    let entry = ResultEntry::new(
        request.student_name,
        request.exam,
        request.score,
        request.year,
        request.photo,
    );
    state.repository.create_result_entry(&entry).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// List result entries.
///
/// GET /admin/results
#[utoipa::path(
    get,
    path = "/admin/results",
    params(
        ("limit" = Option<i64>, Query, description = "Maximum results (default 20)"),
        ("offset" = Option<i64>, Query, description = "Pagination offset")
    ),
    responses(
        (status = 200, description = "List of result entries", body = ListResultsResponse)
    ),
    tag = "results"
)]
pub async fn list_result_entries(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> CmsResult<Json<ListResultsResponse>> {
    let limit = query.limit.clamp(1, 100);
    let offset = query.offset.max(0);

    let results = state.repository.list_result_entries(limit, offset).await?;

    Ok(Json(ListResultsResponse {
        results,
        limit,
        offset,
    }))
}

/// Get a result entry by ID.
///
/// GET /admin/results/{id}
#[utoipa::path(
    get,
    path = "/admin/results/{id}",
    params(("id" = Uuid, Path, description = "Result entry ID")),
    responses(
        (status = 200, description = "Result entry details", body = ResultEntry),
        (status = 404, description = "Result entry not found")
    ),
    tag = "results"
)]
pub async fn get_result_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> CmsResult<Json<ResultEntry>> {
    Ok(Json(state.repository.get_result_entry(id).await?))
}

/// Update a result entry.
///
/// PUT /admin/results/{id}
#[utoipa::path(
    put,
    path = "/admin/results/{id}",
    params(("id" = Uuid, Path, description = "Result entry ID")),
    request_body = UpdateResultEntryRequest,
    responses(
        (status = 200, description = "Result entry updated", body = ResultEntry),
        (status = 404, description = "Result entry not found")
    ),
    tag = "results"
)]
pub async fn update_result_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateResultEntryRequest>,
) -> CmsResult<Json<ResultEntry>> {
    state.repository.get_result_entry(id).await?;

    let entry = state
        .repository
        .update_result_entry(
            id,
            request.student_name.as_deref(),
            request.exam.as_deref(),
            request.score.as_deref(),
            request.year,
            request.photo.as_deref(),
        )
        .await?;

    Ok(Json(entry))
}

/// Delete a result entry.
///
/// DELETE /admin/results/{id}
#[utoipa::path(
    delete,
    path = "/admin/results/{id}",
    params(("id" = Uuid, Path, description = "Result entry ID")),
    responses(
        (status = 204, description = "Result entry deleted"),
        (status = 404, description = "Result entry not found")
    ),
    tag = "results"
)]
pub async fn delete_result_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> CmsResult<StatusCode> {
    state.repository.delete_result_entry(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ==================== Settings Endpoints ====================

/// Get site settings.
///
/// GET /admin/settings
#[utoipa::path(
    get,
    path = "/admin/settings",
    responses(
        (status = 200, description = "Site settings", body = crate::domain::SiteSettings)
    ),
    tag = "settings"
)]
pub async fn get_settings(
    State(state): State<AppState>,
) -> CmsResult<Json<crate::domain::SiteSettings>> {
    Ok(Json(state.repository.get_site_settings().await?))
}

/// Update site settings.
///
/// PUT /admin/settings
#[utoipa::path(
    put,
    path = "/admin/settings",
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Settings updated", body = crate::domain::SiteSettings)
    ),
    tag = "settings"
)]
pub async fn update_settings(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> CmsResult<Json<crate::domain::SiteSettings>> {
    let mut settings = state.repository.get_site_settings().await?;

    if let Some(site_name) = request.site_name {
        settings.site_name = site_name;
    }
    if request.tagline.is_some() {
        settings.tagline = request.tagline;
    }
    if request.phone.is_some() {
        settings.phone = request.phone;
    }
    if request.contact_email.is_some() {
        settings.contact_email = request.contact_email;
    }
    if request.address.is_some() {
        settings.address = request.address;
    }
    if request.facebook_url.is_some() {
        settings.facebook_url = request.facebook_url;
    }
    if request.instagram_url.is_some() {
        settings.instagram_url = request.instagram_url;
    }
    if request.youtube_url.is_some() {
        settings.youtube_url = request.youtube_url;
    }
    settings.updated_at = chrono::Utc::now();

    state.repository.save_site_settings(&settings).await?;

    tracing::info!("Site settings updated");

    Ok(Json(settings))
}

// ==================== Public Endpoints ====================

/// List published posts for the public site.
///
/// GET /api/posts
#[utoipa::path(
    get,
    path = "/api/posts",
    params(
        ("limit" = Option<i64>, Query, description = "Maximum results (default 20)"),
        ("offset" = Option<i64>, Query, description = "Pagination offset")
    ),
    responses(
        (status = 200, description = "Published posts", body = ListPostsResponse)
    ),
    tag = "public"
)]
pub async fn list_public_posts(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> CmsResult<Json<ListPostsResponse>> {
    let limit = query.limit.clamp(1, 100);
    let offset = query.offset.max(0);

    let posts = state.repository.list_posts(true, limit, offset).await?;

    Ok(Json(ListPostsResponse {
        posts,
        limit,
        offset,
    }))
}

/// Get a published post by slug.
///
/// GET /api/posts/{slug}
#[utoipa::path(
    get,
    path = "/api/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Post details", body = Post),
        (status = 404, description = "Post not found")
    ),
    tag = "public"
)]
pub async fn get_public_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> CmsResult<Json<Post>> {
    let post = state
        .repository
        .find_post_by_slug(&slug)
        .await?
        // Drafts are invisible to the public site, indistinguishable from absent.
        .filter(|p| p.published)
        .ok_or_else(|| CmsError::NotFound(format!("Post '{}' not found", slug)))?;

    Ok(Json(post))
}

/// List published courses for the public site.
///
/// GET /api/courses
#[utoipa::path(
    get,
    path = "/api/courses",
    params(
        ("limit" = Option<i64>, Query, description = "Maximum results (default 20)"),
        ("offset" = Option<i64>, Query, description = "Pagination offset")
    ),
    responses(
        (status = 200, description = "Published courses", body = ListCoursesResponse)
    ),
    tag = "public"
)]
pub async fn list_public_courses(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> CmsResult<Json<ListCoursesResponse>> {
    let limit = query.limit.clamp(1, 100);
    let offset = query.offset.max(0);

    let courses = state.repository.list_courses(true, limit, offset).await?;

    Ok(Json(ListCoursesResponse {
        courses,
        limit,
        offset,
    }))
}

/// Get a published course by slug.
///
/// GET /api/courses/{slug}
#[utoipa::path(
    get,
    path = "/api/courses/{slug}",
    params(("slug" = String, Path, description = "Course slug")),
    responses(
        (status = 200, description = "Course details", body = Course),
        (status = 404, description = "Course not found")
    ),
    tag = "public"
)]
pub async fn get_public_course(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> CmsResult<Json<Course>> {
    let course = state
        .repository
        .find_course_by_slug(&slug)
        .await?
        .filter(|c| c.published)
        .ok_or_else(|| CmsError::NotFound(format!("Course '{}' not found", slug)))?;

    Ok(Json(course))
}

/// List testimonials for the public site.
///
/// GET /api/testimonials
#[utoipa::path(
    get,
    path = "/api/testimonials",
    params(
        ("limit" = Option<i64>, Query, description = "Maximum results (default 20)"),
        ("offset" = Option<i64>, Query, description = "Pagination offset")
    ),
    responses(
        (status = 200, description = "Testimonials", body = ListTestimonialsResponse)
    ),
    tag = "public"
)]
pub async fn list_public_testimonials(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> CmsResult<Json<ListTestimonialsResponse>> {
    list_testimonials(State(state), Query(query)).await
}

/// List sliders for the public site, in carousel order.
///
/// GET /api/sliders
#[utoipa::path(
    get,
    path = "/api/sliders",
    params(
        ("limit" = Option<i64>, Query, description = "Maximum results (default 20)"),
        ("offset" = Option<i64>, Query, description = "Pagination offset")
    ),
    responses(
        (status = 200, description = "Sliders", body = ListSlidersResponse)
    ),
    tag = "public"
)]
pub async fn list_public_sliders(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> CmsResult<Json<ListSlidersResponse>> {
    list_sliders(State(state), Query(query)).await
}

/// List gallery images for the public site.
///
/// GET /api/gallery
#[utoipa::path(
    get,
    path = "/api/gallery",
    params(
        ("limit" = Option<i64>, Query, description = "Maximum results (default 20)"),
        ("offset" = Option<i64>, Query, description = "Pagination offset")
    ),
    responses(
        (status = 200, description = "Gallery images", body = ListGalleryResponse)
    ),
    tag = "public"
)]
pub async fn list_public_gallery(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> CmsResult<Json<ListGalleryResponse>> {
    list_gallery_images(State(state), Query(query)).await
}

/// List result entries for the public site.
///
/// GET /api/results
#[utoipa::path(
    get,
    path = "/api/results",
    params(
        ("limit" = Option<i64>, Query, description = "Maximum results (default 20)"),
        ("offset" = Option<i64>, Query, description = "Pagination offset")
    ),
    responses(
        (status = 200, description = "Result entries", body = ListResultsResponse)
    ),
    tag = "public"
)]
pub async fn list_public_results(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> CmsResult<Json<ListResultsResponse>> {
    list_result_entries(State(state), Query(query)).await
}

/// Get site settings for the public site.
///
/// GET /api/settings
#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "Site settings", body = crate::domain::SiteSettings)
    ),
    tag = "public"
)]
pub async fn get_public_settings(
    State(state): State<AppState>,
) -> CmsResult<Json<crate::domain::SiteSettings>> {
    get_settings(State(state)).await
}

/// List categories for the public site.
///
/// GET /api/categories
#[utoipa::path(
    get,
    path = "/api/categories",
    params(
        ("limit" = Option<i64>, Query, description = "Maximum results (default 20)"),
        ("offset" = Option<i64>, Query, description = "Pagination offset")
    ),
    responses(
        (status = 200, description = "Categories", body = ListCategoriesResponse)
    ),
    tag = "public"
)]
pub async fn list_public_categories(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> CmsResult<Json<ListCategoriesResponse>> {
    list_categories(State(state), Query(query)).await
}
