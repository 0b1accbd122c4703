use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub base_uri: Option<String>,
    #[serde(default)]
    pub full_domain: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub plan_type: Option<String>,
    #[serde(default)]
    pub week_start_day: Option<String>,
    #[serde(default)]
    pub time_format: Option<String>,
    #[serde(default)]
    pub clock: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WhoAmIUser {
    pub id: u64,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub admin: Option<bool>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Response of `GET /account/who_am_i`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WhoAmI {
    pub company: Company,
    pub user: WhoAmIUser,
}

/// Response of `GET /account/rate_limit_status`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RateLimitStatus {
    /// Window length in seconds.
    pub timeframe_limit: u64,
    pub request_limit: u64,
    pub requests_made: u64,
    #[serde(default)]
    pub next_reset_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub over_limit: bool,
}

impl RateLimitStatus {
    pub fn remaining(&self) -> u64 {
        self.request_limit.saturating_sub(self.requests_made)
    }
}
