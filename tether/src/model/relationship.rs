use crate::model::link::Link;
use crate::model::resource::IdentifierData;
use std::collections::HashMap;

pub type Relationships = HashMap<String, Relationship>;

/// Relationship with another object
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Relationship {
    #[serde(skip_serializing_if = "RelationshipLinks::is_not_valid")]
    #[serde(default)]
    pub links: RelationshipLinks,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub data: Option<IdentifierData>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RelationshipLinks {
    #[serde(rename = "self")]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    slf: Option<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    related: Option<Link>,
}

impl RelationshipLinks {
    pub fn new(slf: Option<Link>, related: Option<Link>) -> Self { Self { slf, related } }

    pub fn is_valid(&self) -> bool { !(self.slf.is_none() && self.related.is_none()) }

    pub(crate) fn is_not_valid(&self) -> bool { !self.is_valid() }

    pub fn slf(&self) -> Option<&Link> { self.slf.as_ref() }

    pub fn related(&self) -> Option<&Link> { self.related.as_ref() }
}
