//! Pupa Domain Layer
//!
//! Provenance for civic data. Any Popolo entity (a person, an organization,
//! an event) can carry a list of sources: the documents that substantiate
//! the data it holds.
//!
//! ## Key Concepts
//!
//! - **Source**: a `{url, note?}` record citing a supporting document
//! - **Sources**: the ordered list a host entity carries
//! - **Sourceable**: the capability trait host entities implement
//! - **RawSource**: key-shaped input awaiting normalization
//! - **Dump**: the serialized representation of a host entity
//!
//! ## Host contract
//!
//! A type embedding [`Sources`] must initialize it empty *first*, before it
//! applies any constructor-supplied payload. Rehydration then goes through
//! [`Sourceable::set_sources`], never the other way around.
//!
//! ```
//! use pupa_domain::{Dump, Person, Sourceable};
//!
//! let mut person = Person::new("Jane Doe");
//! person.add_source(Some("http://example.org/bio"), Some("official bio"));
//! person.add_source(Some("   "), None); // silently skipped
//!
//! let dump = person.to_dump();
//! assert_eq!(dump["sources"][0]["note"], "official bio");
//! assert_eq!(person.sources().len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod dump;
pub mod entity;
pub mod error;
pub mod field;
pub mod normalize;
pub mod source;
pub mod sourceable;

// Re-exports for convenience
pub use config::{NormalizeConfig, UnknownKeyPolicy};
pub use dump::Dump;
pub use entity::{Entity, EntityId, EntityKind, Organization, Person};
pub use error::SourceError;
pub use field::SourceField;
pub use normalize::{normalize, RawSource};
pub use source::{is_blank, Source};
pub use sourceable::{Sourceable, Sources};
