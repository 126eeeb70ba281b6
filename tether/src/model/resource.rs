use crate::model::Id;

pub type ResourceIdentifiers = Vec<ResourceIdentifier>;

/// Resource Identifier
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq, Hash)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub ty: String,
    pub id: Id,
}

impl ResourceIdentifier {
    pub fn new(ty: impl ToString, id: impl ToString) -> Self {
        Self { ty: ty.to_string(), id: id.to_string() }
    }
}

/// Resource linkage (can be None)
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(untagged)]
pub enum IdentifierData {
    Single(Option<ResourceIdentifier>),
    Multiple(ResourceIdentifiers),
}

impl IdentifierData {
    pub fn data(&self) -> Vec<ResourceIdentifier> {
        match self {
            IdentifierData::Single(Some(data)) => vec![data.clone()],
            IdentifierData::Single(None) => Default::default(),
            IdentifierData::Multiple(data) => data.clone(),
        }
    }
}

impl Default for IdentifierData {
    fn default() -> Self { IdentifierData::Single(None) }
}
