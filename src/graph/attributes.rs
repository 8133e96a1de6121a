//! Sparse attribute overlay — schema-validated records per entity.

use crate::schema::{EntityKind, GraphSchema};
use crate::types::{AttrValue, GraphError, GraphResult};

/// One stored attribute: entity position, key position, value index.
///
/// The value index points into the key's domain in the schema; the store
/// itself never holds attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AttrRecord {
    entity: usize,
    key: usize,
    value: usize,
}

/// Sparse attribute records for one entity kind.
///
/// At most one record exists per `(entity, key)` pair; a later set
/// overwrites the value index in place. Both get and set scan the full
/// record list — inherited baseline behavior, adequate for bounded
/// in-memory graphs.
#[derive(Debug)]
pub struct AttributeStore {
    kind: EntityKind,
    records: Vec<AttrRecord>,
}

impl AttributeStore {
    /// Create an empty store for the given entity kind.
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
        }
    }

    /// The entity kind this store validates against.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate `(key, value)` against the schema and store it for
    /// `entity`, overwriting any existing record for the same key.
    pub fn set(
        &mut self,
        schema: &GraphSchema,
        entity: usize,
        key: &str,
        value: &AttrValue,
    ) -> GraphResult<()> {
        // Validation order: key first, then value, then key position.
        let value_index = schema.value_index(self.kind, key, value)?;
        let key_position = schema.key_position(self.kind, key)?;

        for record in &mut self.records {
            if record.entity == entity && record.key == key_position {
                record.value = value_index;
                return Ok(());
            }
        }
        self.records.push(AttrRecord {
            entity,
            key: key_position,
            value: value_index,
        });
        Ok(())
    }

    /// Look up the stored value for `(entity, key)`.
    ///
    /// The returned reference points into the schema's domain, so it lives
    /// as long as the schema rather than this store.
    pub fn get<'s>(
        &self,
        schema: &'s GraphSchema,
        entity: usize,
        key: &str,
    ) -> GraphResult<&'s AttrValue> {
        let domain = schema.domain(self.kind, key)?;
        let key_position = schema.key_position(self.kind, key)?;

        for record in &self.records {
            if record.entity == entity && record.key == key_position {
                return Ok(&domain[record.value]);
            }
        }
        Err(GraphError::AttributeNotSet {
            key: key.to_owned(),
        })
    }
}
