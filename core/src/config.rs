//! Connection settings for a `Harvest` client.
//!
//! A `Config` is a loose bag of optional fields; it is only validated when
//! `Credentials::resolve` turns it into something usable.

use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = concat!("harvest-core/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct Config {
    pub subdomain: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub access_token: Option<String>,
    /// Use https for basic-auth hosts. OAuth hosts are always https.
    pub ssl: bool,
    /// Replaces the host derived from the credentials, e.g. `http://127.0.0.1:3000`.
    pub host: Option<String>,
    pub user_agent: String,
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subdomain: None,
            username: None,
            password: None,
            access_token: None,
            ssl: true,
            host: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl Config {
    pub fn basic(subdomain: &str, username: &str, password: &str) -> Self {
        Self {
            subdomain: Some(subdomain.to_string()),
            username: Some(username.to_string()),
            password: Some(password.to_string()),
            ..Self::default()
        }
    }

    pub fn oauth(access_token: &str) -> Self {
        Self {
            access_token: Some(access_token.to_string()),
            ..Self::default()
        }
    }

    /// Read settings from `HARVEST_*` environment variables.
    ///
    /// Empty variables count as unset. `HARVEST_SSL=false` (or `0`) switches
    /// basic-auth hosts to plain http.
    pub fn from_env() -> Self {
        let ssl = match non_empty_var("HARVEST_SSL") {
            Some(value) => !matches!(value.to_ascii_lowercase().as_str(), "false" | "0" | "no"),
            None => true,
        };
        Self {
            subdomain: non_empty_var("HARVEST_SUBDOMAIN"),
            username: non_empty_var("HARVEST_USERNAME"),
            password: non_empty_var("HARVEST_PASSWORD"),
            access_token: non_empty_var("HARVEST_ACCESS_TOKEN"),
            ssl,
            host: non_empty_var("HARVEST_HOST"),
            ..Self::default()
        }
    }

    pub fn with_access_token(mut self, access_token: &str) -> Self {
        self.access_token = Some(access_token.to_string());
        self
    }

    pub fn with_ssl(mut self, ssl: bool) -> Self {
        self.ssl = ssl;
        self
    }

    pub fn with_host(mut self, host: &str) -> Self {
        self.host = Some(host.trim_end_matches('/').to_string());
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("subdomain", &self.subdomain)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("ssl", &self.ssl)
            .field("host", &self.host)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}
