use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorGroup {
    pub name: &'static str,
    pub palette: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontPair {
    pub headline: &'static str,
    pub body: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessContext {
    pub color_description: &'static str,
    pub font_style: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StylePreset {
    pub colors: Vec<ColorGroup>,
    pub imagery: Vec<&'static str>,
    pub fonts: FontPair,
    pub mock_tile_text: &'static str,
}

/// Preset keys in their canonical order; the first is the fallback default.
pub const VIBE_KEYS: [&str; 4] = [
    "modern-clean",
    "friendly-local",
    "classic-professional",
    "bold-eye-catching",
];

pub const DEFAULT_VIBE: &str = "modern-clean";

fn group(name: &'static str, palette: [&'static str; 3]) -> ColorGroup {
    ColorGroup {
        name,
        palette: palette.to_vec(),
    }
}

/// Style rules per vibe. Built once, read-only afterwards; handlers clone
/// whatever they put in a response.
pub static STYLE_RULES: Lazy<HashMap<&'static str, StylePreset>> = Lazy::new(|| {
    HashMap::from([
        (
            "modern-clean",
            StylePreset {
                colors: vec![
                    group("Primary", ["#2563EB", "#1E40AF", "#1D4ED8"]),
                    group("Accent", ["#F3F4F6", "#E5E7EB", "#D1D5DB"]),
                    group("Highlight", ["#10B981", "#059669", "#047857"]),
                ],
                imagery: vec![
                    "Clean product photography with white backgrounds",
                    "Minimal geometric patterns and shapes",
                    "Professional business photography",
                    "Simple icons and illustrations",
                ],
                fonts: FontPair { headline: "Inter", body: "system-ui" },
                mock_tile_text: "Modern Business",
            },
        ),
        (
            "friendly-local",
            StylePreset {
                colors: vec![
                    group("Warm", ["#F59E0B", "#D97706", "#B45309"]),
                    group("Natural", ["#84CC16", "#65A30D", "#4D7C0F"]),
                    group("Comfort", ["#EF4444", "#DC2626", "#B91C1C"]),
                ],
                imagery: vec![
                    "Local community photos and events",
                    "Warm, natural lighting in photography",
                    "Hand-drawn illustrations and doodles",
                    "Authentic customer testimonial photos",
                ],
                fonts: FontPair { headline: "Poppins", body: "sans-serif" },
                mock_tile_text: "Local Community",
            },
        ),
        (
            "classic-professional",
            StylePreset {
                colors: vec![
                    group("Traditional", ["#1F2937", "#374151", "#4B5563"]),
                    group("Elegant", ["#7C2D12", "#92400E", "#A16207"]),
                    group("Refined", ["#1E3A8A", "#1E40AF", "#2563EB"]),
                ],
                imagery: vec![
                    "Professional headshots and office photography",
                    "Classic architectural elements",
                    "Elegant product arrangements",
                    "Traditional business imagery",
                ],
                fonts: FontPair { headline: "Playfair Display", body: "Georgia" },
                mock_tile_text: "Professional Service",
            },
        ),
        (
            "bold-eye-catching",
            StylePreset {
                colors: vec![
                    group("Vibrant", ["#EC4899", "#DB2777", "#BE185D"]),
                    group("Electric", ["#8B5CF6", "#7C3AED", "#6D28D9"]),
                    group("Dynamic", ["#F97316", "#EA580C", "#C2410C"]),
                ],
                imagery: vec![
                    "High-contrast photography with dramatic lighting",
                    "Bold graphic elements and patterns",
                    "Dynamic action shots and movement",
                    "Bright, saturated color photography",
                ],
                fonts: FontPair { headline: "Montserrat", body: "Arial Black" },
                mock_tile_text: "Bold Impact",
            },
        ),
    ])
});

/// Copy for business-type context shown alongside any vibe.
pub static BUSINESS_CONTEXT: Lazy<HashMap<&'static str, BusinessContext>> = Lazy::new(|| {
    HashMap::from([
        (
            "restaurant",
            BusinessContext {
                color_description: "Colors that stimulate appetite and create warmth",
                font_style: "Readable menu fonts with personality",
            },
        ),
        (
            "retail",
            BusinessContext {
                color_description: "Colors that encourage browsing and purchases",
                font_style: "Clear product labels and attractive displays",
            },
        ),
        (
            "services",
            BusinessContext {
                color_description: "Professional colors that build trust",
                font_style: "Authoritative yet approachable typography",
            },
        ),
        (
            "healthcare",
            BusinessContext {
                color_description: "Calming colors that reduce anxiety",
                font_style: "Clear, accessible fonts for all ages",
            },
        ),
        (
            "fitness",
            BusinessContext {
                color_description: "Energizing colors that motivate action",
                font_style: "Bold, dynamic fonts that inspire",
            },
        ),
    ])
});

/// Extra imagery suggestions appended for "local" vibes, per business type.
pub static BUSINESS_IMAGERY: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        (
            "restaurant",
            vec![
                "Food photography showcasing local ingredients",
                "Cozy interior shots with local community feel",
                "Staff and chef personality photos",
            ],
        ),
        (
            "retail",
            vec![
                "Product displays with local context",
                "Customer browsing and shopping moments",
                "Store front and neighborhood integration",
            ],
        ),
        (
            "services",
            vec![
                "Before/after service results in local settings",
                "Professional team in community context",
                "Client testimonials with local landmarks",
            ],
        ),
        (
            "healthcare",
            vec![
                "Welcoming facility exterior and interior",
                "Professional staff in community setting",
                "Patient care moments with local feel",
            ],
        ),
        (
            "fitness",
            vec![
                "Local community workout sessions",
                "Outdoor fitness in neighborhood parks",
                "Member success stories with local backdrop",
            ],
        ),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_cover_every_key() {
        assert_eq!(STYLE_RULES.len(), 4);
        for key in VIBE_KEYS {
            assert!(STYLE_RULES.contains_key(key), "missing preset for {key}");
        }

        assert_eq!(BUSINESS_CONTEXT.len(), 5);
        assert_eq!(BUSINESS_IMAGERY.len(), 5);
        for (key, extra) in BUSINESS_IMAGERY.iter() {
            assert!(BUSINESS_CONTEXT.contains_key(key));
            assert_eq!(extra.len(), 3, "expected three extensions for {key}");
        }
    }

    #[test]
    fn presets_have_full_shape() {
        for (key, preset) in STYLE_RULES.iter() {
            assert_eq!(preset.colors.len(), 3, "{key}");
            for group in &preset.colors {
                assert_eq!(group.palette.len(), 3, "{key}/{}", group.name);
            }
            assert_eq!(preset.imagery.len(), 4, "{key}");
            assert!(!preset.mock_tile_text.is_empty());
        }
    }
}
