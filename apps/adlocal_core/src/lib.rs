pub mod rules;
pub mod serializers;
pub mod urls;
pub mod views;
