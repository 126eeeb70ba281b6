use crate::model::Meta;
use std::collections::HashMap;
use std::str::FromStr;

pub type Links = HashMap<String, Link>;

/// Either a raw URI or a `{href, meta}` object
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Link {
    #[serde(with = "http_serde::uri")]
    Raw(http::Uri),
    Object {
        #[serde(with = "http_serde::uri")]
        href: http::Uri,
        meta: Meta,
    },
}

impl FromStr for Link {
    type Err = http::uri::InvalidUri;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Ok(Link::Raw(s.parse()?)) }
}

impl From<http::Uri> for Link {
    fn from(uri: http::Uri) -> Self { Link::Raw(uri) }
}

impl From<Link> for http::Uri {
    fn from(link: Link) -> Self {
        match link {
            Link::Raw(raw) => raw,
            Link::Object { href, .. } => href,
        }
    }
}

impl From<&Link> for http::Uri {
    fn from(link: &Link) -> Self {
        match link {
            Link::Raw(raw) => raw.to_owned(),
            Link::Object { href, .. } => href.to_owned(),
        }
    }
}

impl Link {
    /// Joins `path` onto an absolute `base`, e.g. when an external link is requested
    pub fn absolute(base: &str, path: &str) -> crate::Result<Link> {
        let joined = base.parse::<url::Url>()?.join(path)?;
        Ok(joined.to_string().parse::<http::Uri>()?.into())
    }
}
