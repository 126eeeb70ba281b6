mod pattern;
pub mod settings;

use crate::pattern::RoutePattern;
use crate::settings::RoutingSettings;
use std::collections::HashMap;
use tether::error::TetherError;
use tether::model::link::Link;
use tether::resolver::{UrlParams, UrlResolver};
use tether::Result;

/// Registry of named routes, playing the host framework's routing table
#[derive(Debug, Clone, Default)]
pub struct RouteSet {
    routes: HashMap<String, RoutePattern>,
    base: Option<String>,
    prefix: String,
}

impl RouteSet {
    pub fn new() -> Self { Default::default() }

    /// A route set able to build absolute URLs rooted at `base`
    pub fn with_base(base: impl ToString) -> Result<Self> {
        let base = base.to_string();
        Link::absolute(&base, "/")?;
        Ok(Self { base: Some(base), ..Default::default() })
    }

    pub fn from_settings(settings: &RoutingSettings) -> Result<Self> {
        let mut routes = Self::with_base(settings.base_url())?;
        routes.prefix = settings.path.clone();
        Ok(routes)
    }

    /// Registers `pattern` under `endpoint`; malformed patterns fail here,
    /// never at resolution time
    pub fn route(mut self, endpoint: impl ToString, pattern: &str) -> Result<Self> {
        let parsed = RoutePattern::parse(pattern)?;
        self.routes.insert(endpoint.to_string(), parsed);
        Ok(self)
    }
}

impl UrlResolver for RouteSet {
    fn resolve(&self, endpoint: &str, params: &UrlParams, external: bool) -> Result<Link> {
        let route = self
            .routes
            .get(endpoint)
            .ok_or_else(|| TetherError::UnknownEndpoint(endpoint.to_string()))?;
        let path = format!("{}{}", self.prefix, route.build(endpoint, params)?);
        log::debug!("url_for `{}` -> `{}`", endpoint, path);
        if external {
            let base = self.base.as_ref().ok_or(TetherError::NoExternalBase)?;
            Link::absolute(base, &path)
        } else {
            path.parse::<Link>().map_err(TetherError::from)
        }
    }
}
