// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic objects: type-erased pointer slots.
//!
//! An object wraps a pointer that is `null`, a struct or a list, and
//! is re-interpreted on demand against a caller-supplied schema. A null
//! slot is not an error; it re-interprets to an empty reader of the
//! requested kind. A kind mismatch is reported and also yields an
//! empty reader.

use super::lists::{DynamicList, DynamicListBuilder};
use super::structs::{DynamicStruct, DynamicStructBuilder};
use crate::schema::{ListSchema, Node, SchemaPool, StructSchema, Type};
use crate::wire::{ListBuilder, ListReader, ObjectBuilder, ObjectReader, StructBuilder, StructReader};

/// Read-side type-erased pointer slot.
#[derive(Clone, Copy)]
pub struct DynamicObject<'a> {
    pool: &'a SchemaPool<'a>,
    reader: ObjectReader<'a>,
}

impl<'a> DynamicObject<'a> {
    pub(crate) fn new(pool: &'a SchemaPool<'a>, reader: ObjectReader<'a>) -> Self {
        Self { pool, reader }
    }

    /// Whether the underlying pointer is unset.
    pub fn is_null(&self) -> bool {
        matches!(self.reader, ObjectReader::Null)
    }

    /// Re-interpret as a struct of the type registered under `type_id`.
    pub fn to_struct(&self, type_id: u64) -> DynamicStruct<'a> {
        self.to_struct_schema(self.pool.get_struct(type_id))
    }

    /// Re-interpret as a struct described by `node`.
    ///
    /// # Panics
    /// If `node` is not a struct node (caller contract).
    pub fn to_struct_node(&self, node: &'a Node) -> DynamicStruct<'a> {
        self.to_struct_schema(StructSchema::from_node(node))
    }

    fn to_struct_schema(&self, schema: StructSchema<'a>) -> DynamicStruct<'a> {
        match self.reader {
            ObjectReader::Null => DynamicStruct::new(self.pool, schema, StructReader::empty()),
            ObjectReader::Struct(reader) => DynamicStruct::new(self.pool, schema, reader),
            ObjectReader::List(_) => {
                crate::error!("object holds a list, not a struct");
                DynamicStruct::new(self.pool, schema, StructReader::empty())
            }
        }
    }

    /// Re-interpret as a list whose elements have the given type.
    pub fn to_list_of(&self, element: &Type) -> DynamicList<'a> {
        self.to_list(ListSchema::of(element))
    }

    /// Re-interpret as a list with the given canonical descriptor.
    pub fn to_list(&self, schema: ListSchema) -> DynamicList<'a> {
        match self.reader {
            ObjectReader::Null => {
                DynamicList::new(self.pool, schema, ListReader::empty(schema.element_size()))
            }
            ObjectReader::List(reader) => DynamicList::new(self.pool, schema, reader),
            ObjectReader::Struct(_) => {
                crate::error!("object holds a struct, not a list");
                DynamicList::new(self.pool, schema, ListReader::empty(schema.element_size()))
            }
        }
    }
}

/// Write-side type-erased pointer slot.
#[derive(Clone, Copy)]
pub struct DynamicObjectBuilder<'a> {
    pool: &'a SchemaPool<'a>,
    builder: ObjectBuilder<'a>,
}

impl<'a> DynamicObjectBuilder<'a> {
    pub(crate) fn new(pool: &'a SchemaPool<'a>, builder: ObjectBuilder<'a>) -> Self {
        Self { pool, builder }
    }

    /// Whether the underlying pointer is unset.
    pub fn is_null(&self) -> bool {
        matches!(self.builder, ObjectBuilder::Null(_))
    }

    /// Re-interpret as a struct of the type registered under `type_id`.
    pub fn to_struct(&self, type_id: u64) -> DynamicStructBuilder<'a> {
        self.to_struct_schema(self.pool.get_struct(type_id))
    }

    /// Re-interpret as a struct described by `node`.
    ///
    /// # Panics
    /// If `node` is not a struct node (caller contract).
    pub fn to_struct_node(&self, node: &'a Node) -> DynamicStructBuilder<'a> {
        self.to_struct_schema(StructSchema::from_node(node))
    }

    fn to_struct_schema(&self, schema: StructSchema<'a>) -> DynamicStructBuilder<'a> {
        match self.builder {
            ObjectBuilder::Null(msg) => {
                DynamicStructBuilder::new(self.pool, schema, StructBuilder::empty(msg))
            }
            ObjectBuilder::Struct(builder) => DynamicStructBuilder::new(self.pool, schema, builder),
            ObjectBuilder::List(list) => {
                crate::error!("object holds a list, not a struct");
                DynamicStructBuilder::new(self.pool, schema, StructBuilder::empty(list.message()))
            }
        }
    }

    /// Re-interpret as a list whose elements have the given type.
    pub fn to_list_of(&self, element: &Type) -> DynamicListBuilder<'a> {
        self.to_list(ListSchema::of(element))
    }

    /// Re-interpret as a list with the given canonical descriptor.
    pub fn to_list(&self, schema: ListSchema) -> DynamicListBuilder<'a> {
        match self.builder {
            ObjectBuilder::Null(msg) => DynamicListBuilder::new(
                self.pool,
                schema,
                ListBuilder::empty(msg, schema.element_size()),
            ),
            ObjectBuilder::List(builder) => DynamicListBuilder::new(self.pool, schema, builder),
            ObjectBuilder::Struct(st) => {
                crate::error!("object holds a struct, not a list");
                DynamicListBuilder::new(
                    self.pool,
                    schema,
                    ListBuilder::empty(st.message(), schema.element_size()),
                )
            }
        }
    }
}
