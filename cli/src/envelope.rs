//! The `{success, data, error}` response envelope.

use serde::Serialize;

use crate::CliError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    pub status: u16,
}

#[derive(Debug, Serialize)]
pub struct Envelope {
    pub success: bool,
    pub data: Option<serde_json::Value>,
    pub error: Option<ErrorBody>,
}

impl Envelope {
    pub fn ok(data: serde_json::Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: &CliError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorBody {
                code: error.code(),
                message: error.to_string(),
                status: error.status(),
            }),
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
