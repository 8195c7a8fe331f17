//! Popolo host entities carrying sources
//!
//! Every constructor here follows the same order: `sources` first, then
//! identity and properties. Rehydration builds the empty entity and only then
//! applies the dumped `sources` through the bulk setter.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::json_kind;
use crate::{Dump, NormalizeConfig, SourceError, Sourceable, Sources};

/// Unique identifier for an entity based on UUIDv7
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u128);

impl EntityId {
    /// Generate a new UUIDv7-based EntityId
    ///
    /// # Examples
    ///
    /// ```
    /// use pupa_domain::EntityId;
    ///
    /// let id = EntityId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create an EntityId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse an EntityId from its hyphenated UUID string
    pub fn parse(s: &str) -> Result<Self, SourceError> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| SourceError::InvalidValue {
                field: "_id".to_string(),
                found: format!("malformed UUID ({})", e),
            })
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Kinds of host entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A real person
    Person,
    /// A group with a common purpose or reason for existence
    Organization,
}

impl EntityKind {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Person => "person",
            EntityKind::Organization => "organization",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "person" => Ok(EntityKind::Person),
            "organization" => Ok(EntityKind::Organization),
            _ => Err(format!("Invalid entity kind: {}", s)),
        }
    }
}

/// A real person, alive or dead
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    /// Sources substantiating this record
    pub sources: Sources,

    /// Unique identifier
    #[serde(rename = "_id")]
    pub id: EntityId,

    /// Full name
    pub name: String,
}

impl Person {
    /// Create a person with no sources
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            sources: Sources::new(),
            id: EntityId::new(),
            name: name.into(),
        }
    }

    /// Rebuild a person from its dumped form
    pub fn from_dump(value: &Value, config: &NormalizeConfig) -> Result<Self, SourceError> {
        let object = as_object(value)?;
        let mut person = Person::new(required_str(object, "name")?);
        if let Some(id) = optional_id(object)? {
            person.id = id;
        }
        apply_sources(&mut person, object, config)?;
        Ok(person)
    }
}

impl Sourceable for Person {
    fn sources(&self) -> &Sources {
        &self.sources
    }

    fn sources_mut(&mut self) -> &mut Sources {
        &mut self.sources
    }
}

impl Dump for Person {
    fn dump_fields(&self, out: &mut Map<String, Value>) {
        out.insert("_id".to_string(), Value::String(self.id.to_string()));
        out.insert("name".to_string(), Value::String(self.name.clone()));
        self.dump_sources(out);
    }
}

/// A group with a common purpose or reason for existence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Organization {
    /// Sources substantiating this record
    pub sources: Sources,

    /// Unique identifier
    #[serde(rename = "_id")]
    pub id: EntityId,

    /// Primary name
    pub name: String,

    /// Organization category, e.g. "legislature" or "party"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
}

impl Organization {
    /// Create an organization with no sources
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            sources: Sources::new(),
            id: EntityId::new(),
            name: name.into(),
            classification: None,
        }
    }

    /// Set the classification
    pub fn with_classification(mut self, classification: impl Into<String>) -> Self {
        self.classification = Some(classification.into());
        self
    }

    /// Rebuild an organization from its dumped form
    pub fn from_dump(value: &Value, config: &NormalizeConfig) -> Result<Self, SourceError> {
        let object = as_object(value)?;
        let mut organization = Organization::new(required_str(object, "name")?);
        if let Some(id) = optional_id(object)? {
            organization.id = id;
        }
        organization.classification = optional_str(object, "classification")?.map(str::to_string);
        apply_sources(&mut organization, object, config)?;
        Ok(organization)
    }
}

impl Sourceable for Organization {
    fn sources(&self) -> &Sources {
        &self.sources
    }

    fn sources_mut(&mut self) -> &mut Sources {
        &mut self.sources
    }
}

impl Dump for Organization {
    fn dump_fields(&self, out: &mut Map<String, Value>) {
        out.insert("_id".to_string(), Value::String(self.id.to_string()));
        out.insert("name".to_string(), Value::String(self.name.clone()));
        if let Some(classification) = &self.classification {
            out.insert("classification".to_string(), Value::String(classification.clone()));
        }
        self.dump_sources(out);
    }
}

/// Any host entity, for callers that pick the kind at runtime
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entity {
    /// A person
    Person(Person),
    /// An organization
    Organization(Organization),
}

impl Entity {
    /// Create an entity of `kind` with no sources
    pub fn new(kind: EntityKind, name: impl Into<String>) -> Self {
        match kind {
            EntityKind::Person => Entity::Person(Person::new(name)),
            EntityKind::Organization => Entity::Organization(Organization::new(name)),
        }
    }

    /// Rebuild an entity of `kind` from its dumped form
    pub fn from_dump(
        kind: EntityKind,
        value: &Value,
        config: &NormalizeConfig,
    ) -> Result<Self, SourceError> {
        match kind {
            EntityKind::Person => Person::from_dump(value, config).map(Entity::Person),
            EntityKind::Organization => {
                Organization::from_dump(value, config).map(Entity::Organization)
            }
        }
    }

    /// Get the kind of this entity
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Person(_) => EntityKind::Person,
            Entity::Organization(_) => EntityKind::Organization,
        }
    }
}

impl Sourceable for Entity {
    fn sources(&self) -> &Sources {
        match self {
            Entity::Person(p) => p.sources(),
            Entity::Organization(o) => o.sources(),
        }
    }

    fn sources_mut(&mut self) -> &mut Sources {
        match self {
            Entity::Person(p) => p.sources_mut(),
            Entity::Organization(o) => o.sources_mut(),
        }
    }
}

impl Dump for Entity {
    fn dump_fields(&self, out: &mut Map<String, Value>) {
        match self {
            Entity::Person(p) => p.dump_fields(out),
            Entity::Organization(o) => o.dump_fields(out),
        }
    }
}

fn as_object(value: &Value) -> Result<&Map<String, Value>, SourceError> {
    value
        .as_object()
        .ok_or_else(|| SourceError::NotAnObject(json_kind(value).to_string()))
}

fn optional_str<'a>(
    object: &'a Map<String, Value>,
    key: &str,
) -> Result<Option<&'a str>, SourceError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(SourceError::InvalidValue {
            field: key.to_string(),
            found: json_kind(other).to_string(),
        }),
    }
}

fn required_str<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a str, SourceError> {
    optional_str(object, key)?.ok_or_else(|| SourceError::MissingField(key.to_string()))
}

fn optional_id(object: &Map<String, Value>) -> Result<Option<EntityId>, SourceError> {
    optional_str(object, "_id")?.map(EntityId::parse).transpose()
}

fn apply_sources<T: Sourceable>(
    entity: &mut T,
    object: &Map<String, Value>,
    config: &NormalizeConfig,
) -> Result<(), SourceError> {
    match object.get("sources") {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Array(records)) => entity.set_sources_with(records.iter().cloned(), config),
        Some(other) => Err(SourceError::InvalidValue {
            field: "sources".to_string(),
            found: json_kind(other).to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Source;
    use serde_json::json;

    #[test]
    fn test_entity_id_display_and_parse() {
        let id = EntityId::new();
        let id_str = id.to_string();
        assert_eq!(id_str.len(), 36);
        assert_eq!(EntityId::parse(&id_str).unwrap(), id);
    }

    #[test]
    fn test_entity_id_invalid_string() {
        assert!(EntityId::parse("not-a-valid-uuid").is_err());
        assert!(EntityId::parse("").is_err());
    }

    #[test]
    fn test_entity_kind_from_str() {
        assert_eq!("person".parse::<EntityKind>().unwrap(), EntityKind::Person);
        assert_eq!("Organization".parse::<EntityKind>().unwrap(), EntityKind::Organization);
        assert!("event".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_person_dump_shape() {
        let mut person = Person::new("Jane Doe");
        person.add_source(Some("http://a"), None);

        let dump = person.to_dump();
        assert_eq!(dump["name"], "Jane Doe");
        assert_eq!(dump["_id"], person.id.to_string());
        assert_eq!(dump["sources"], json!([{"url": "http://a"}]));
    }

    #[test]
    fn test_serde_agrees_with_dump() {
        let mut org = Organization::new("City Council").with_classification("legislature");
        org.add_source(Some("http://council.example.org"), Some("homepage"));
        assert_eq!(serde_json::to_value(&org).unwrap(), org.to_dump());

        let entity = Entity::Organization(org.clone());
        assert_eq!(serde_json::to_value(&entity).unwrap(), org.to_dump());
    }

    #[test]
    fn test_organization_dump_omits_classification() {
        let org = Organization::new("Ad Hoc Committee");
        let dump = org.to_dump();
        assert!(dump.get("classification").is_none());
        assert_eq!(dump["sources"], json!([]));
    }

    #[test]
    fn test_from_dump_keeps_id_and_sources() {
        let id = EntityId::new();
        let dump = json!({
            "_id": id.to_string(),
            "name": "Jane Doe",
            "sources": [{"url": "http://a", "note": "bio"}, {"note": "no url"}]
        });
        let person = Person::from_dump(&dump, &NormalizeConfig::default()).unwrap();

        assert_eq!(person.id, id);
        assert_eq!(
            person.sources.as_slice(),
            &[
                Source::new("http://a").with_note("bio"),
                Source {
                    url: None,
                    note: Some("no url".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_from_dump_without_sources() {
        let org =
            Organization::from_dump(&json!({"name": "Senate"}), &NormalizeConfig::default())
                .unwrap();
        assert!(org.sources.is_empty());
        assert_eq!(org.classification, None);
    }

    #[test]
    fn test_from_dump_errors() {
        let config = NormalizeConfig::default();
        assert_eq!(
            Person::from_dump(&json!({"sources": []}), &config),
            Err(SourceError::MissingField("name".to_string()))
        );
        assert_eq!(
            Person::from_dump(&json!([]), &config),
            Err(SourceError::NotAnObject("array".to_string()))
        );
        assert!(matches!(
            Person::from_dump(&json!({"name": "x", "sources": "http://a"}), &config),
            Err(SourceError::InvalidValue { .. })
        ));
        assert!(matches!(
            Person::from_dump(&json!({"name": "x", "_id": "nope"}), &config),
            Err(SourceError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_entity_dispatch() {
        let mut entity = Entity::new(EntityKind::Organization, "Senate");
        assert_eq!(entity.kind(), EntityKind::Organization);
        entity.add_source(Some("http://senate.example.org"), None);
        assert_eq!(entity.sources().len(), 1);
        assert_eq!(entity.to_dump()["name"], "Senate");
    }
}
