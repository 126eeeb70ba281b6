use crate::error::TetherError;
use crate::model::link::Link;
use crate::model::relationship::{Relationship, RelationshipLinks};
use crate::model::resource::IdentifierData;
use crate::record::{self, Gettable};
use crate::resolver::{UrlParams, UrlResolver};
use crate::Result;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;

/// Kwargs key requesting an absolute URL instead of a relative one
pub const EXTERNAL_KEY: &str = "_external";

lazy_static! {
    static ref PATH_EXPR: Regex =
        Regex::new(r"^<([A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*)>$").unwrap();
}

/// A URL parameter template entry: a verbatim value, or a dotted attribute
/// path resolved against the source record at serialization time
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Literal(Value),
    Path(String),
}

impl Param {
    pub fn parse(value: Value) -> Param {
        if let Value::String(ref s) = value {
            if let Some(caps) = PATH_EXPR.captures(s) {
                return Param::Path(caps[1].to_string());
            }
        }
        Param::Literal(value)
    }

    fn resolve<G: Gettable>(&self, source: &G) -> Result<Value> {
        match self {
            Param::Literal(value) => Ok(value.clone()),
            Param::Path(path) => record::resolve_path(source, path),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct LinkView {
    endpoint: String,
    params: HashMap<String, Param>,
    external: bool,
}

impl LinkView {
    fn resolve<G, R>(&self, source: &G, urls: &R) -> Result<Link>
    where
        G: Gettable,
        R: UrlResolver + ?Sized,
    {
        let mut params = UrlParams::with_capacity(self.params.len());
        for (name, param) in &self.params {
            params.insert(name.clone(), param.resolve(source)?);
        }
        urls.resolve(&self.endpoint, &params, self.external)
    }
}

/// Serializes one named attribute of a source record into a JSON:API
/// relationship object: an optional `self`/`related` link pair plus optional
/// resource linkage. Configuration is validated once at `build()` and the
/// field is immutable afterwards.
#[derive(Debug, Clone)]
pub struct RelationshipField {
    self_view: Option<LinkView>,
    related_view: Option<LinkView>,
    linkage_ty: Option<String>,
    many: bool,
    dump_only: bool,
}

impl RelationshipField {
    pub fn builder() -> RelationshipFieldBuilder { RelationshipFieldBuilder::default() }

    pub fn include_data(&self) -> bool { self.linkage_ty.is_some() }

    pub fn many(&self) -> bool { self.many }

    pub fn dump_only(&self) -> bool { self.dump_only }

    /// Produces the relationship object for `attribute` on `source`. Link
    /// templates resolve against the record as of this call; resolver and
    /// attribute failures propagate unchanged.
    pub fn serialize<G, R>(&self, attribute: &str, source: &G, urls: &R) -> Result<Relationship>
    where
        G: Gettable,
        R: UrlResolver + ?Sized,
    {
        log::trace!("serializing relationship `{}`", attribute);
        let slf = self.self_view.as_ref().map(|view| view.resolve(source, urls)).transpose()?;
        let related =
            self.related_view.as_ref().map(|view| view.resolve(source, urls)).transpose()?;
        let data = match self.linkage_ty {
            Some(ref ty) => Some(self.linkage(ty, attribute, source)?),
            None => None,
        };
        Ok(Relationship { links: RelationshipLinks::new(slf, related), data })
    }

    fn linkage<G: Gettable>(&self, ty: &str, attribute: &str, source: &G) -> Result<IdentifierData> {
        if self.many {
            let value = source.get(attribute).ok_or_else(|| TetherError::MissingAttribute {
                path: attribute.to_string(),
                segment: attribute.to_string(),
            })?;
            let related = value
                .as_array()
                .ok_or_else(|| TetherError::ExpectedSequence(attribute.to_string()))?;
            let identifiers = related
                .iter()
                .map(|each| record::identifier(each, ty, attribute))
                .collect::<Result<Vec<_>>>()?;
            Ok(IdentifierData::Multiple(identifiers))
        } else {
            match source.get(attribute) {
                None | Some(Value::Null) => Ok(IdentifierData::Single(None)),
                Some(related) => {
                    Ok(IdentifierData::Single(Some(record::identifier(&related, ty, attribute)?)))
                },
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct RelationshipFieldBuilder {
    self_view: Option<LinkView>,
    related_view: Option<LinkView>,
    include_data: bool,
    ty: Option<String>,
    many: bool,
    dump_only: Option<bool>,
}

impl RelationshipFieldBuilder {
    pub fn self_view(mut self, endpoint: impl ToString) -> Self {
        self.self_view.get_or_insert_with(Default::default).endpoint = endpoint.to_string();
        self
    }

    pub fn self_view_kwargs<I, K>(mut self, kwargs: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: ToString,
    {
        fill_kwargs(self.self_view.get_or_insert_with(Default::default), kwargs);
        self
    }

    pub fn related_view(mut self, endpoint: impl ToString) -> Self {
        self.related_view.get_or_insert_with(Default::default).endpoint = endpoint.to_string();
        self
    }

    pub fn related_view_kwargs<I, K>(mut self, kwargs: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: ToString,
    {
        fill_kwargs(self.related_view.get_or_insert_with(Default::default), kwargs);
        self
    }

    pub fn include_data(mut self, include_data: bool) -> Self {
        self.include_data = include_data;
        self
    }

    pub fn type_(mut self, ty: impl ToString) -> Self {
        self.ty = Some(ty.to_string());
        self
    }

    pub fn many(mut self, many: bool) -> Self {
        self.many = many;
        self
    }

    pub fn dump_only(mut self, dump_only: bool) -> Self {
        self.dump_only = Some(dump_only);
        self
    }

    /// Validates the configuration; an `Err` never leaves a usable field behind
    pub fn build(self) -> Result<RelationshipField> {
        if self.include_data && self.ty.is_none() {
            return Err(TetherError::TypeRequired);
        }
        if let Some(ref view) = self.self_view {
            if view.endpoint.is_empty() {
                return Err(TetherError::KwargsWithoutView("self"));
            }
        }
        if let Some(ref view) = self.related_view {
            if view.endpoint.is_empty() {
                return Err(TetherError::KwargsWithoutView("related"));
            }
        }
        if self.self_view.is_none() && self.related_view.is_none() && !self.include_data {
            return Err(TetherError::EmptyRelationship);
        }
        Ok(RelationshipField {
            self_view: self.self_view,
            related_view: self.related_view,
            linkage_ty: if self.include_data { self.ty } else { None },
            many: self.many,
            dump_only: self.dump_only.unwrap_or(true),
        })
    }
}

fn fill_kwargs<I, K>(view: &mut LinkView, kwargs: I)
where
    I: IntoIterator<Item = (K, Value)>,
    K: ToString,
{
    for (name, value) in kwargs {
        let name = name.to_string();
        if name == EXTERNAL_KEY {
            view.external = value.as_bool().unwrap_or(false);
        } else {
            view.params.insert(name, Param::parse(value));
        }
    }
}
