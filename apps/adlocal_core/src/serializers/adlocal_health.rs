use serde::Serialize;

#[derive(Serialize)]
pub struct Root {
    pub message: &'static str,
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub service: &'static str,
    pub available_vibes: Vec<&'static str>,
    pub version: &'static str,
}
