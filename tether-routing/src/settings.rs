use serde::Deserialize;

/// Server-facing settings a route set can be built from
#[derive(Debug, Deserialize, Clone)]
pub struct RoutingSettings {
    #[serde(default = "default_scheme")]
    pub scheme: String,
    pub host: String,
    pub port: u32,
    #[serde(default)]
    pub path: String,
}

impl RoutingSettings {
    pub fn base_url(&self) -> String { format!("{}://{}:{}", self.scheme, self.host, self.port) }
}

fn default_scheme() -> String { "http".to_string() }
