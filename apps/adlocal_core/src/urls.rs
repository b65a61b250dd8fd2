use axum::{
    routing::get,
    Router,
};

use crate::views::{
    adlocal_health::{health, root},
    style_recommendations::style_recommendations,
};

pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/style-recommendations", get(style_recommendations))
}
