use std::sync::Arc;

use crate::api::Api;
use crate::error::Result;
use crate::types::{RateLimitStatus, WhoAmI};

/// `/account`: who the credentials belong to and how much quota is left.
pub struct Account {
    api: Arc<Api>,
}

impl Account {
    pub(crate) fn new(api: Arc<Api>) -> Self {
        Self { api }
    }

    pub fn who_am_i(&self) -> Result<WhoAmI> {
        self.api.get_json("/account/who_am_i", &[])
    }

    pub fn rate_limit_status(&self) -> Result<RateLimitStatus> {
        self.api.get_json("/account/rate_limit_status", &[])
    }
}
