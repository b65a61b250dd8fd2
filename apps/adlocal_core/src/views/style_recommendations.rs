use axum::{extract::Query, Json};

use crate::rules::{BUSINESS_CONTEXT, BUSINESS_IMAGERY, DEFAULT_VIBE, STYLE_RULES};
use crate::serializers::style_recommendations::{
    Metadata, RecommendationQuery, StyleRecommendations,
};

// ---------- handlers ----------
pub async fn style_recommendations(
    Query(q): Query<RecommendationQuery>,
) -> Json<StyleRecommendations> {
    Json(resolve(&q.vibe, &q.business_type))
}

// ---------- resolution ----------

/// Pure lookup-and-merge over the static rule tables. Total over all string
/// inputs: unknown vibes fall back to the default preset, unknown business
/// types skip enrichment.
pub fn resolve(vibe: &str, business_type: &str) -> StyleRecommendations {
    let key = normalize_vibe(vibe);
    let preset = STYLE_RULES
        .get(key.as_str())
        .unwrap_or_else(|| &STYLE_RULES[DEFAULT_VIBE]);

    // Every response field is built fresh; the shared tables are never
    // aliased into a response.
    let mut imagery: Vec<String> = preset.imagery.iter().map(|s| s.to_string()).collect();

    let business_type_clean = business_type.to_lowercase();

    // Substring match on the raw vibe, not the normalized key: any vibe
    // containing "local" gets business-specific imagery.
    if vibe.to_lowercase().contains("local") && !business_type.is_empty() {
        if let Some(first) = imagery.first_mut() {
            *first = format!("Photos of happy customers at your {business_type_clean}");
        }
        if let Some(extra) = BUSINESS_IMAGERY.get(business_type_clean.as_str()) {
            imagery.extend(extra.iter().map(|s| s.to_string()));
        }
    }

    let business_context = BUSINESS_CONTEXT.get(business_type_clean.as_str()).cloned();

    StyleRecommendations {
        colors: preset.colors.clone(),
        imagery,
        fonts: preset.fonts.clone(),
        mock_tile_text: preset.mock_tile_text,
        business_context,
        metadata: Metadata {
            business_type: business_type.to_string(),
            vibe: vibe.to_string(),
            generated_for: "hyperlocal_advertising",
        },
    }
}

/// Lowercase, hyphenate spaces, drop ampersands, collapse "--" (single
/// pass), trim edge hyphens: "Friendly & Local" -> "friendly-local".
fn normalize_vibe(vibe: &str) -> String {
    vibe.to_lowercase()
        .replace(' ', "-")
        .replace('&', "")
        .replace("--", "-")
        .trim_matches('-')
        .to_string()
}
