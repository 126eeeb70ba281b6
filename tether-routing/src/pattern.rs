use itertools::Itertools;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde_json::Value;
use std::collections::HashSet;
use tether::error::TetherError;
use tether::resolver::UrlParams;
use tether::Result;

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'=')
    .add(b'?');

#[derive(Debug, Clone, Copy, PartialEq)]
enum Converter {
    Any,
    Int,
    Uuid,
}

impl Converter {
    fn parse(pattern: &str, name: &str) -> Result<Converter> {
        match name {
            "string" => Ok(Converter::Any),
            "int" => Ok(Converter::Int),
            "uuid" => Ok(Converter::Uuid),
            other => Err(invalid(pattern, format!("unknown converter `{}`", other))),
        }
    }

    fn accepts(self, value: &str) -> bool {
        match self {
            Converter::Any => !value.is_empty(),
            Converter::Int => value.parse::<i64>().is_ok(),
            Converter::Uuid => uuid::Uuid::parse_str(value).is_ok(),
        }
    }
}

#[derive(Debug, Clone)]
enum Segment {
    Static(String),
    Param { name: String, converter: Converter },
}

/// A parsed route template, e.g. `/posts/<post_id>/comments/`
#[derive(Debug, Clone)]
pub(crate) struct RoutePattern {
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub(crate) fn parse(pattern: &str) -> Result<RoutePattern> {
        if !pattern.starts_with('/') {
            return Err(invalid(pattern, "must start with `/`"));
        }
        let mut seen = HashSet::new();
        let mut segments = Vec::new();
        for piece in pattern.split('/') {
            if piece.starts_with('<') && piece.ends_with('>') && piece.len() > 2 {
                let inner = &piece[1..piece.len() - 1];
                let (converter, name) = match inner.split_once(':') {
                    Some((converter, name)) => (Converter::parse(pattern, converter)?, name),
                    None => (Converter::Any, inner),
                };
                if name.is_empty() {
                    return Err(invalid(pattern, "empty parameter name"));
                }
                if !seen.insert(name.to_string()) {
                    return Err(invalid(pattern, format!("duplicate parameter `{}`", name)));
                }
                segments.push(Segment::Param { name: name.to_string(), converter });
            } else if piece.contains('<') || piece.contains('>') {
                return Err(invalid(pattern, "malformed parameter segment"));
            } else {
                segments.push(Segment::Static(piece.to_string()));
            }
        }
        Ok(RoutePattern { segments })
    }

    /// Substitutes `params` into the template; entries the template does not
    /// consume become a query string in sorted key order
    pub(crate) fn build(&self, endpoint: &str, params: &UrlParams) -> Result<String> {
        let mut used: HashSet<&str> = HashSet::new();
        let mut pieces = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                Segment::Static(text) => pieces.push(text.clone()),
                Segment::Param { name, converter } => {
                    let value =
                        params.get(name).ok_or_else(|| TetherError::MissingRouteParam {
                            endpoint: endpoint.to_string(),
                            param: name.clone(),
                        })?;
                    let raw = stringify(value);
                    if !converter.accepts(&raw) {
                        return Err(TetherError::InvalidRouteParam {
                            endpoint: endpoint.to_string(),
                            param: name.clone(),
                            value: raw,
                        });
                    }
                    used.insert(name.as_str());
                    pieces.push(utf8_percent_encode(&raw, PATH_SEGMENT).to_string());
                },
            }
        }
        let mut path = pieces.join("/");
        let query = params
            .iter()
            .filter(|(name, _)| !used.contains(name.as_str()))
            .sorted_by(|a, b| a.0.cmp(b.0))
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(name, QUERY),
                    utf8_percent_encode(&stringify(value), QUERY)
                )
            })
            .join("&");
        if !query.is_empty() {
            path.push('?');
            path.push_str(&query);
        }
        Ok(path)
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn invalid(pattern: &str, reason: impl ToString) -> TetherError {
    TetherError::InvalidRoutePattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
}
