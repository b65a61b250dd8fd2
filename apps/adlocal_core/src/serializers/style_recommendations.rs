use serde::{Deserialize, Serialize};

use crate::rules::{BusinessContext, ColorGroup, FontPair};

fn default_business_type() -> String {
    "retail".into()
}

fn default_vibe() -> String {
    "modern-clean".into()
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    #[serde(default = "default_business_type")]
    pub business_type: String,
    #[serde(default = "default_vibe")]
    pub vibe: String,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Metadata {
    /// Raw query input, echoed without normalization.
    pub business_type: String,
    /// Raw query input, echoed without normalization.
    pub vibe: String,
    pub generated_for: &'static str,
}

#[derive(Debug, Serialize)]
pub struct StyleRecommendations {
    pub colors: Vec<ColorGroup>,
    pub imagery: Vec<String>,
    pub fonts: FontPair,
    pub mock_tile_text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_context: Option<BusinessContext>,
    pub metadata: Metadata,
}
