pub mod adlocal_health;
pub mod style_recommendations;
