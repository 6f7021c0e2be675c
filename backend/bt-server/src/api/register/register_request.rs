use serde::Deserialize;

/// Body of `POST /register`. Absent fields are reported by the handler,
/// not by deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}
