use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use permatrix_core::AppError;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let protected_routes = Router::new()
        .route("/auth/me", get(handlers::session::me_handler))
        .route(
            "/api/objects",
            get(handlers::objects::list_objects_handler)
                .post(handlers::objects::create_object_handler),
        )
        .route(
            "/api/objects/state",
            get(handlers::objects::object_catalog_state_handler),
        )
        .route(
            "/api/objects/actions",
            post(handlers::objects::dispatch_object_action_handler),
        )
        .route(
            "/api/objects/{object_id}",
            get(handlers::objects::get_object_handler)
                .put(handlers::objects::update_object_handler),
        )
        .route(
            "/api/roles",
            get(handlers::roles::list_roles_handler).post(handlers::roles::create_role_handler),
        )
        .route(
            "/api/roles/refresh",
            post(handlers::roles::refresh_roles_handler),
        )
        .route(
            "/api/roles/filter-options",
            get(handlers::roles::filter_options_handler),
        )
        .route(
            "/api/roles/selection",
            get(handlers::roles::role_selection_handler),
        )
        .route(
            "/api/roles/selection/actions",
            post(handlers::roles::dispatch_role_selection_handler),
        )
        .route(
            "/api/roles/selection/save",
            post(handlers::roles::save_role_selection_handler),
        )
        .route(
            "/api/roles/{role_id}",
            put(handlers::roles::update_role_handler).delete(handlers::roles::delete_role_handler),
        )
        .route(
            "/api/users",
            get(handlers::users::list_users_handler).post(handlers::users::create_user_handler),
        )
        .route(
            "/api/users/{employee_id}",
            get(handlers::users::get_user_handler)
                .put(handlers::users::update_user_handler)
                .delete(handlers::users::delete_user_handler),
        )
        .route(
            "/api/users/{employee_id}/profile-picture",
            put(handlers::users::update_profile_picture_handler),
        )
        .route(
            "/api/users/{employee_id}/roles",
            put(handlers::users::assign_user_roles_handler),
        )
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_auth,
        ));

    let cors_layer = CorsLayer::new()
        .allow_origin(
            HeaderValue::from_str(frontend_url)
                .map_err(|error| AppError::Internal(format!("invalid FRONTEND_URL: {error}")))?,
        )
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE]);

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(protected_routes)
        .route_layer(from_fn_with_state(
            app_state.clone(),
            middleware::require_same_origin_for_mutations,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}
