//! Route definitions for the API.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::{self, AuthState};
use crate::auth::{edge_gate, AdminGate};
use crate::AppState;

/// Security scheme modifier for OpenAPI.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("admin_token"))),
            );
        }
    }
}

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::login,
        handlers::logout,
        handlers::get_current_admin,
        handlers::health_check,
        handlers::create_category,
        handlers::list_categories,
        handlers::get_category,
        handlers::update_category,
        handlers::delete_category,
        handlers::create_post,
        handlers::list_posts,
        handlers::get_post,
        handlers::update_post,
        handlers::delete_post,
        handlers::create_course,
        handlers::list_courses,
        handlers::get_course,
        handlers::update_course,
        handlers::delete_course,
        handlers::create_testimonial,
        handlers::list_testimonials,
        handlers::get_testimonial,
        handlers::update_testimonial,
        handlers::delete_testimonial,
        handlers::create_slider,
        handlers::list_sliders,
        handlers::get_slider,
        handlers::update_slider,
        handlers::delete_slider,
        handlers::create_gallery_image,
        handlers::list_gallery_images,
        handlers::get_gallery_image,
        handlers::delete_gallery_image,
        handlers::create_result_entry,
        handlers::list_result_entries,
        handlers::get_result_entry,
        handlers::update_result_entry,
        handlers::delete_result_entry,
        handlers::get_settings,
        handlers::update_settings,
        handlers::list_public_posts,
        handlers::get_public_post,
        handlers::list_public_courses,
        handlers::get_public_course,
        handlers::list_public_testimonials,
        handlers::list_public_sliders,
        handlers::list_public_gallery,
        handlers::list_public_results,
        handlers::list_public_categories,
        handlers::get_public_settings,
    ),
    components(schemas(
        crate::api::types::LoginRequest,
        crate::api::types::LoginResponse,
        crate::api::types::AdminInfo,
        crate::api::types::HealthResponse,
        crate::api::types::CreateCategoryRequest,
        crate::api::types::UpdateCategoryRequest,
        crate::api::types::ListCategoriesResponse,
        crate::api::types::CreatePostRequest,
        crate::api::types::UpdatePostRequest,
        crate::api::types::ListPostsResponse,
        crate::api::types::CreateCourseRequest,
        crate::api::types::UpdateCourseRequest,
        crate::api::types::ListCoursesResponse,
        crate::api::types::CreateTestimonialRequest,
        crate::api::types::UpdateTestimonialRequest,
        crate::api::types::ListTestimonialsResponse,
        crate::api::types::CreateSliderRequest,
        crate::api::types::UpdateSliderRequest,
        crate::api::types::ListSlidersResponse,
        crate::api::types::CreateGalleryImageRequest,
        crate::api::types::ListGalleryResponse,
        crate::api::types::CreateResultEntryRequest,
        crate::api::types::UpdateResultEntryRequest,
        crate::api::types::ListResultsResponse,
        crate::api::types::UpdateSettingsRequest,
        crate::domain::Category,
        crate::domain::Post,
        crate::domain::Course,
        crate::domain::Testimonial,
        crate::domain::Slider,
        crate::domain::GalleryImage,
        crate::domain::ResultEntry,
        crate::domain::SiteSettings,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin authentication"),
        (name = "categories", description = "Blog category management"),
        (name = "posts", description = "Blog post management"),
        (name = "courses", description = "Course catalogue management"),
        (name = "testimonials", description = "Testimonial management"),
        (name = "sliders", description = "Homepage slider management"),
        (name = "gallery", description = "Photo gallery management"),
        (name = "results", description = "Exam result management"),
        (name = "settings", description = "Site-wide settings"),
        (name = "public", description = "Read-only endpoints for the public site"),
        (name = "health", description = "Health and status endpoints")
    ),
    info(
        title = "Academy CMS API",
        version = "0.1.0",
        description = "Content management backend for a coaching institute website",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the full router. The edge gate is layered over everything; it steers
/// unauthenticated requests under the admin root to the login entry point and
/// leaves every other path alone.
pub fn build_router(state: AppState, auth_state: AuthState, gate: AdminGate) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let admin_root = gate.policy().admin_root().to_string();
    // Login lives inside the admin nest; strip the root to get its mount point.
    let login_mount = gate
        .policy()
        .login_path()
        .strip_prefix(admin_root.as_str())
        .unwrap_or("/login")
        .to_string();

    // Routes under the protected root. The gate exempts the login path itself.
    let admin_routes = Router::new()
        .route("/me", get(handlers::get_current_admin))
        .route(
            "/categories",
            post(handlers::create_category).get(handlers::list_categories),
        )
        .route(
            "/categories/:id",
            get(handlers::get_category)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        )
        .route(
            "/posts",
            post(handlers::create_post).get(handlers::list_posts),
        )
        .route(
            "/posts/:id",
            get(handlers::get_post)
                .put(handlers::update_post)
                .delete(handlers::delete_post),
        )
        .route(
            "/courses",
            post(handlers::create_course).get(handlers::list_courses),
        )
        .route(
            "/courses/:id",
            get(handlers::get_course)
                .put(handlers::update_course)
                .delete(handlers::delete_course),
        )
        .route(
            "/testimonials",
            post(handlers::create_testimonial).get(handlers::list_testimonials),
        )
        .route(
            "/testimonials/:id",
            get(handlers::get_testimonial)
                .put(handlers::update_testimonial)
                .delete(handlers::delete_testimonial),
        )
        .route(
            "/sliders",
            post(handlers::create_slider).get(handlers::list_sliders),
        )
        .route(
            "/sliders/:id",
            get(handlers::get_slider)
                .put(handlers::update_slider)
                .delete(handlers::delete_slider),
        )
        .route(
            "/gallery",
            post(handlers::create_gallery_image).get(handlers::list_gallery_images),
        )
        .route(
            "/gallery/:id",
            get(handlers::get_gallery_image).delete(handlers::delete_gallery_image),
        )
        .route(
            "/results",
            post(handlers::create_result_entry).get(handlers::list_result_entries),
        )
        .route(
            "/results/:id",
            get(handlers::get_result_entry)
                .put(handlers::update_result_entry)
                .delete(handlers::delete_result_entry),
        )
        .route(
            "/settings",
            get(handlers::get_settings).put(handlers::update_settings),
        )
        .with_state(state.clone())
        .route(&login_mount, post(handlers::login))
        .route("/logout", post(handlers::logout))
        .with_state(auth_state);

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/posts", get(handlers::list_public_posts))
        .route("/api/posts/:slug", get(handlers::get_public_post))
        .route("/api/courses", get(handlers::list_public_courses))
        .route("/api/courses/:slug", get(handlers::get_public_course))
        .route("/api/categories", get(handlers::list_public_categories))
        .route("/api/testimonials", get(handlers::list_public_testimonials))
        .route("/api/sliders", get(handlers::list_public_sliders))
        .route("/api/gallery", get(handlers::list_public_gallery))
        .route("/api/results", get(handlers::list_public_results))
        .route("/api/settings", get(handlers::get_public_settings))
        .with_state(state);

    Router::new()
        .nest(&admin_root, admin_routes)
        .merge(public_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn_with_state(gate, edge_gate))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use sqlx::sqlite::SqlitePool;
    use tower::ServiceExt;

    use crate::auth::{CredentialIssuer, GatePolicy, TokenService};
    use crate::domain::Principal;
    use crate::storage::CmsRepository;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";
    const ADMIN_EMAIL: &str = "admin@academy.test";
    const ADMIN_PASSWORD: &str = "correct horse battery staple";

    async fn test_app() -> Router {
        let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
        let repository = CmsRepository::new(pool);
        repository.init_schema().await.unwrap();

        let hash = Principal::hash_password(ADMIN_PASSWORD).unwrap();
        let principal = Principal::new(
            ADMIN_EMAIL.to_string(),
            "Site Admin".to_string(),
            hash,
        );
        repository.create_principal(&principal).await.unwrap();

        let tokens = TokenService::new(SECRET, "academy-cms".to_string(), 24);
        let issuer = CredentialIssuer::new(repository.clone(), tokens.clone());
        let gate = AdminGate::new(
            GatePolicy::new(
                "/admin".to_string(),
                "/admin/login".to_string(),
                "admin_token".to_string(),
            ),
            tokens,
        );
        let auth_state = AuthState {
            issuer,
            cookie_name: "admin_token".to_string(),
        };

        build_router(AppState { repository }, auth_state, gate)
    }

    async fn login(app: &Router) -> String {
        let response = app
            .clone()
            .oneshot(
                Request::post("/admin/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(format!(
                        r#"{{"email":"{}","password":"{}"}}"#,
                        ADMIN_EMAIL, ADMIN_PASSWORD
                    )))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        // "admin_token=<jwt>; Path=/; ..."
        set_cookie.split(';').next().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_admin_without_token_redirects_to_login() {
        let app = test_app().await;

        let response = app
            .oneshot(Request::get("/admin/posts").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/admin/login"
        );
    }

    #[tokio::test]
    async fn test_admin_with_garbage_token_redirects_to_login() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::get("/admin/posts")
                    .header(header::COOKIE, "admin_token=not-a-jwt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn test_login_then_access_admin() {
        let app = test_app().await;
        let cookie = login(&app).await;

        let response = app
            .oneshot(
                Request::get("/admin/posts")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_login_reachable_without_token() {
        let app = test_app().await;

        // Wrong password must produce a 401, not a redirect loop.
        let response = app
            .oneshot(
                Request::post("/admin/login")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(format!(
                        r#"{{"email":"{}","password":"wrong"}}"#,
                        ADMIN_EMAIL
                    )))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_public_paths_bypass_the_gate() {
        let app = test_app().await;

        for path in ["/health", "/api/posts", "/api/courses", "/api/settings"] {
            let response = app
                .clone()
                .oneshot(Request::get(path).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "path {}", path);
        }
    }

    #[tokio::test]
    async fn test_me_reflects_token_subject() {
        let app = test_app().await;
        let cookie = login(&app).await;

        let response = app
            .oneshot(
                Request::get("/admin/me")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["email"], ADMIN_EMAIL);
        assert_eq!(body["role"], "admin");
    }

    #[tokio::test]
    async fn test_logout_clears_cookie() {
        let app = test_app().await;
        let cookie = login(&app).await;

        let response = app
            .oneshot(
                Request::post("/admin/logout")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(set_cookie.contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn test_duplicate_slug_rejected() {
        let app = test_app().await;
        let cookie = login(&app).await;

        let body = r#"{"title":"Exam Notice","body":"first","published":true}"#;
        let response = app
            .clone()
            .oneshot(
                Request::post("/admin/posts")
                    .header(header::COOKIE, cookie.clone())
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        // Same title slugifies to the same slug; the second create must fail.
        let response = app
            .oneshot(
                Request::post("/admin/posts")
                    .header(header::COOKIE, cookie)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"title":"Exam Notice","body":"second","published":false}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("already exists"));
    }

    #[tokio::test]
    async fn test_unsluggable_title_rejected() {
        let app = test_app().await;
        let cookie = login(&app).await;

        // All punctuation slugifies to an empty, unroutable slug.
        let response = app
            .oneshot(
                Request::post("/admin/posts")
                    .header(header::COOKIE, cookie)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"title":"!!!","body":"x","published":true}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_public_request_with_bad_cookie_passes() {
        let app = test_app().await;

        // An unverifiable token on a public path must not matter.
        let response = app
            .oneshot(
                Request::get("/api/posts")
                    .header(header::COOKIE, "admin_token=expired.or.garbage")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_draft_post_invisible_to_public() {
        let app = test_app().await;
        let cookie = login(&app).await;

        let response = app
            .clone()
            .oneshot(
                Request::post("/admin/posts")
                    .header(header::COOKIE, cookie)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"title":"Draft Announcement","body":"soon","published":false}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(
                Request::get("/api/posts/draft-announcement")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
