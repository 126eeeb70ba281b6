use crate::model::link::Link;
use crate::Result;
use serde_json::Value;
use std::collections::HashMap;

pub type UrlParams = HashMap<String, Value>;

/// Maps an endpoint identifier plus resolved parameters to a URL. Hosts plug
/// in their own routing table; the core never names a concrete router.
pub trait UrlResolver {
    fn resolve(&self, endpoint: &str, params: &UrlParams, external: bool) -> Result<Link>;
}

impl<F> UrlResolver for F
where
    F: Fn(&str, &UrlParams, bool) -> Result<Link>,
{
    fn resolve(&self, endpoint: &str, params: &UrlParams, external: bool) -> Result<Link> {
        self(endpoint, params, external)
    }
}
