use axum::Json;

use crate::rules::VIBE_KEYS;
use crate::serializers::adlocal_health::{Health, Root};

pub async fn root() -> Json<Root> {
    Json(Root {
        message: "Hyperlocal Ad Optimizer API is running",
        status: "healthy",
    })
}

pub async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy",
        service: "style-recommendations",
        available_vibes: VIBE_KEYS.to_vec(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
