//! Dumped (serialized) representation of host entities

use serde_json::{Map, Value};

/// Types that export a flat JSON object of their properties
///
/// Implementors insert each dumped property into `out`. Sourceable hosts call
/// [`Sourceable::dump_sources`](crate::Sourceable::dump_sources) so the
/// `sources` field is always present.
pub trait Dump {
    /// Insert dumped properties into `out`
    fn dump_fields(&self, out: &mut Map<String, Value>);

    /// Build the full dumped object
    fn to_dump(&self) -> Value {
        let mut out = Map::new();
        self.dump_fields(&mut out);
        Value::Object(out)
    }
}
