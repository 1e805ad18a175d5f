// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic enum values: a schema plus a raw `u16`.

use crate::schema::{EnumSchema, Enumerant, FoundEnumerant, SchemaPool};

/// An enum value paired with its schema. The raw value may name an
/// enumerant the schema does not know (a newer producer); such values
/// round-trip unchanged.
#[derive(Clone, Copy)]
pub struct DynamicEnum<'a> {
    pool: &'a SchemaPool<'a>,
    schema: EnumSchema<'a>,
    value: u16,
}

impl<'a> DynamicEnum<'a> {
    /// Wrap a raw value.
    pub fn new(pool: &'a SchemaPool<'a>, schema: EnumSchema<'a>, value: u16) -> Self {
        Self {
            pool,
            schema,
            value,
        }
    }

    /// The enum's schema.
    pub fn schema(&self) -> EnumSchema<'a> {
        self.schema
    }

    /// The raw wire value.
    pub fn raw(&self) -> u16 {
        self.value
    }

    /// The enumerant this value names, or `None` if the value is past
    /// the schema's enumerant count.
    pub fn enumerant(&self) -> Option<&'a Enumerant> {
        self.schema.body.enumerants.get(self.value as usize)
    }

    /// Look up an enumerant of this enum by name.
    pub fn find_enumerant_by_name(&self, name: &str) -> Option<FoundEnumerant<'a>> {
        self.pool.find_enumerant(self.schema.id(), name)
    }

    /// The raw value, after checking that the caller expected this
    /// enum type. A mismatch is reported; the raw value is yielded
    /// either way.
    pub fn raw_for_type(&self, requested_type_id: u64) -> u16 {
        if requested_type_id != self.schema.id() {
            crate::error!(
                "enum type mismatch: value has schema {:#018x}, caller requested {:#018x}",
                self.schema.id(),
                requested_type_id
            );
        }
        self.value
    }
}
