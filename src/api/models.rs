use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "phi3";

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub symptoms: String,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
