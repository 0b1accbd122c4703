//! Credential resolution: basic auth against an account subdomain, or an
//! OAuth access token against the shared API host.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::config::Config;
use crate::error::{Error, Result};

const OAUTH_HOST: &str = "https://api.harvestapp.com";

/// Authentication data attached to every outbound request.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Basic {
        subdomain: String,
        username: String,
        password: String,
        ssl: bool,
    },
    OAuth {
        access_token: String,
    },
}

impl Credentials {
    /// Pick credentials from `config`.
    ///
    /// A complete subdomain/username/password triple wins over an access
    /// token; with neither, resolution fails.
    pub fn resolve(config: &Config) -> Result<Self> {
        let present = |value: &Option<String>| value.as_deref().filter(|v| !v.is_empty()).map(str::to_string);

        if let (Some(subdomain), Some(username), Some(password)) = (
            present(&config.subdomain),
            present(&config.username),
            present(&config.password),
        ) {
            if !is_dns_label(&subdomain) {
                return Err(Error::Configuration(format!(
                    "subdomain {subdomain:?} is not a valid host label"
                )));
            }
            return Ok(Credentials::Basic {
                subdomain,
                username,
                password,
                ssl: config.ssl,
            });
        }

        if let Some(access_token) = present(&config.access_token) {
            return Ok(Credentials::OAuth { access_token });
        }

        Err(Error::Configuration(
            "provide either subdomain, username and password, or an OAuth access token".to_string(),
        ))
    }

    /// Base URL for requests made with these credentials.
    pub fn host(&self) -> String {
        match self {
            Credentials::Basic { subdomain, ssl, .. } => {
                let scheme = if *ssl { "https" } else { "http" };
                format!("{scheme}://{subdomain}.harvestapp.com")
            }
            Credentials::OAuth { .. } => OAUTH_HOST.to_string(),
        }
    }

    /// Value of the `Authorization` header.
    pub fn authorization(&self) -> String {
        match self {
            Credentials::Basic { username, password, .. } => {
                format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
            }
            Credentials::OAuth { access_token } => format!("Bearer {access_token}"),
        }
    }

    pub fn is_basic(&self) -> bool {
        matches!(self, Credentials::Basic { .. })
    }

    pub fn is_oauth(&self) -> bool {
        matches!(self, Credentials::OAuth { .. })
    }
}

/// ASCII letters, digits and inner hyphens, at most 63 characters.
fn is_dns_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Basic {
                subdomain,
                username,
                ssl,
                ..
            } => f
                .debug_struct("Basic")
                .field("subdomain", subdomain)
                .field("username", username)
                .field("password", &"<redacted>")
                .field("ssl", ssl)
                .finish(),
            Credentials::OAuth { .. } => f
                .debug_struct("OAuth")
                .field("access_token", &"<redacted>")
                .finish(),
        }
    }
}
