use serde::Serialize;

pub const STATUS_OK: &str = "ok";

/// Body of a liveness response. Always exactly one key, `status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusPayload {
    pub status: &'static str,
}

impl StatusPayload {
    pub const fn ok() -> Self {
        Self { status: STATUS_OK }
    }
}
