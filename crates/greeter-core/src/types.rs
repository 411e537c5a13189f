use serde::{Deserialize, Serialize};

/// Route served by the greeting handler.
pub const GREETING_PATH: &str = "/api/express";

/// Route served by the health handler.
pub const HEALTH_PATH: &str = "/api/express/health";

/// Text of the canned greeting.
pub const GREETING_MESSAGE: &str = "Hello from Express!";

/// Value reported by a healthy server.
pub const STATUS_OK: &str = "ok";

/// Body of `GET /api/express`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

impl Greeting {
    pub fn new() -> Self {
        Self {
            message: GREETING_MESSAGE.to_string(),
        }
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::new()
    }
}

/// Body of `GET /api/express/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: STATUS_OK.to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}
