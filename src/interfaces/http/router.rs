//! API Router with Swagger UI

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::Resource;
use crate::infrastructure::SeaOrmResourceRepository;
use crate::interfaces::http::modules::{
    health, Comments, EmbeddedMovies, Movies, Theaters, Users,
};
use crate::interfaces::http::openapi::api_doc;
use crate::interfaces::http::request_id::request_id_middleware;
use crate::interfaces::http::resource::resource_router;

/// Create the API router with all routes
pub fn create_api_router(db: DatabaseConnection) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState::new(db.clone()));

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", api_doc()))
        .merge(health_routes)
        .nest(Users::PATH, store_routes::<Users>(&db))
        .nest(Movies::PATH, store_routes::<Movies>(&db))
        .nest(Theaters::PATH, store_routes::<Theaters>(&db))
        .nest(Comments::PATH, store_routes::<Comments>(&db))
        .nest(EmbeddedMovies::PATH, store_routes::<EmbeddedMovies>(&db))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn store_routes<R: Resource>(db: &DatabaseConnection) -> Router {
    resource_router::<R>(Arc::new(SeaOrmResourceRepository::<R>::new(db.clone())))
}
