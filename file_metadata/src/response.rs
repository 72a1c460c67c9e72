use std::collections::BTreeMap;

use serde::Serialize;

pub const ALLOW_ORIGIN_HEADER: &str = "Access-Control-Allow-Origin";

/// Proxy-style response returned by both Lambda functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    /// Always JSON text.
    pub body: String,
}

impl FunctionResponse {
    pub fn json<T: Serialize + ?Sized>(status_code: u16, body: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status_code,
            headers: None,
            body: serde_json::to_string(body)?,
        })
    }

    pub fn with_any_origin(mut self) -> Self {
        self.headers
            .get_or_insert_with(BTreeMap::new)
            .insert(ALLOW_ORIGIN_HEADER.to_string(), "*".to_string());
        self
    }
}
