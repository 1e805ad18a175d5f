// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic lists.
//!
//! A dynamic list carries the canonical descriptor `(innermost element
//! kind, depth, element schema)`. At depth zero the element kind
//! drives the dispatch; above depth zero every element is a sub-list
//! one level down. Indexing past the end is a caller bug and panics;
//! it is not a recoverable input error.

use super::enums::DynamicEnum;
use super::object::DynamicObject;
use super::structs::{DynamicStruct, DynamicStructBuilder};
use super::value::{DynamicValue, DynamicValueBuilder};
use crate::schema::{EnumSchema, ListSchema, Node, SchemaPool, StructSchema, TypeKind};
use crate::wire::{ElementSize, ListBuilder, ListReader};

/// Resolve the element schema node a descriptor references, if any.
///
/// # Panics
/// If the pool does not hold the referenced node (caller contract).
fn resolve_element_schema<'a>(pool: &'a SchemaPool<'a>, schema: ListSchema) -> Option<&'a Node> {
    match schema.element_kind {
        TypeKind::Enum => Some(pool.get_enum(schema.element_id).node),
        TypeKind::Struct => Some(pool.get_struct(schema.element_id).node),
        TypeKind::Interface => Some(pool.get_interface(schema.element_id)),
        _ => None,
    }
}

/// Read-side dynamic list.
#[derive(Clone, Copy)]
pub struct DynamicList<'a> {
    pool: &'a SchemaPool<'a>,
    element_kind: TypeKind,
    depth: u8,
    element_schema: Option<&'a Node>,
    reader: ListReader<'a>,
}

impl<'a> DynamicList<'a> {
    pub(crate) fn new(pool: &'a SchemaPool<'a>, schema: ListSchema, reader: ListReader<'a>) -> Self {
        Self {
            pool,
            element_kind: schema.element_kind,
            depth: schema.depth,
            element_schema: resolve_element_schema(pool, schema),
            reader,
        }
    }

    /// The canonical descriptor of this list.
    pub fn schema(&self) -> ListSchema {
        ListSchema {
            element_kind: self.element_kind,
            depth: self.depth,
            element_id: self.element_schema.map_or(0, |node| node.id),
        }
    }

    /// Element count.
    pub fn size(&self) -> u32 {
        self.reader.size()
    }

    /// Check this list against a caller-expected descriptor; a
    /// mismatch is reported and otherwise ignored.
    pub fn check_schema(&self, schema: ListSchema) {
        if schema != self.schema() {
            crate::error!(
                "list type mismatch: value is {:?}, caller expected {:?}",
                self.schema(),
                schema
            );
        }
    }

    fn struct_schema(&self) -> StructSchema<'a> {
        match self.element_schema {
            Some(node) => StructSchema::from_node(node),
            None => panic!("list of structs carries no element schema node"),
        }
    }

    fn enum_schema(&self) -> EnumSchema<'a> {
        match self.element_schema {
            Some(node) => EnumSchema::from_node(node),
            None => panic!("list of enums carries no element schema node"),
        }
    }

    /// Element at `index`.
    ///
    /// # Panics
    /// If `index >= size()` (caller contract).
    pub fn get(&self, index: u32) -> DynamicValue<'a> {
        assert!(
            index < self.size(),
            "list index out-of-bounds: {} >= {}",
            index,
            self.size()
        );

        if self.depth > 0 {
            let inner = self.schema().inner();
            return DynamicValue::List(DynamicList::new(
                self.pool,
                inner,
                self.reader.get_list_element(index, inner.element_size()),
            ));
        }

        match self.element_kind {
            TypeKind::Void => DynamicValue::Void,
            TypeKind::Bool => DynamicValue::Bool(self.reader.get_bool_element(index)),
            TypeKind::Int8 => DynamicValue::Int8(self.reader.get_i8_element(index)),
            TypeKind::Int16 => DynamicValue::Int16(self.reader.get_i16_element(index)),
            TypeKind::Int32 => DynamicValue::Int32(self.reader.get_i32_element(index)),
            TypeKind::Int64 => DynamicValue::Int64(self.reader.get_i64_element(index)),
            TypeKind::Uint8 => DynamicValue::Uint8(self.reader.get_u8_element(index)),
            TypeKind::Uint16 => DynamicValue::Uint16(self.reader.get_u16_element(index)),
            TypeKind::Uint32 => DynamicValue::Uint32(self.reader.get_u32_element(index)),
            TypeKind::Uint64 => DynamicValue::Uint64(self.reader.get_u64_element(index)),
            TypeKind::Float32 => DynamicValue::Float32(self.reader.get_f32_element(index)),
            TypeKind::Float64 => DynamicValue::Float64(self.reader.get_f64_element(index)),
            TypeKind::Text => DynamicValue::Text(self.reader.get_text_element(index)),
            TypeKind::Data => DynamicValue::Data(self.reader.get_data_blob_element(index)),
            TypeKind::List => panic!("innermost element kind cannot itself be a list"),
            TypeKind::Enum => DynamicValue::Enum(DynamicEnum::new(
                self.pool,
                self.enum_schema(),
                self.reader.get_u16_element(index),
            )),
            TypeKind::Struct => DynamicValue::Struct(DynamicStruct::new(
                self.pool,
                self.struct_schema(),
                self.reader.get_struct_element(index),
            )),
            TypeKind::Object => DynamicValue::Object(DynamicObject::new(
                self.pool,
                self.reader.get_object_element(index),
            )),
            TypeKind::Interface => {
                crate::error!("not implemented: interface access");
                DynamicValue::Void
            }
        }
    }
}

/// Write-side dynamic list.
#[derive(Clone, Copy)]
pub struct DynamicListBuilder<'a> {
    pool: &'a SchemaPool<'a>,
    element_kind: TypeKind,
    depth: u8,
    element_schema: Option<&'a Node>,
    builder: ListBuilder<'a>,
}

impl<'a> DynamicListBuilder<'a> {
    pub(crate) fn new(
        pool: &'a SchemaPool<'a>,
        schema: ListSchema,
        builder: ListBuilder<'a>,
    ) -> Self {
        Self {
            pool,
            element_kind: schema.element_kind,
            depth: schema.depth,
            element_schema: resolve_element_schema(pool, schema),
            builder,
        }
    }

    /// The canonical descriptor of this list.
    pub fn schema(&self) -> ListSchema {
        ListSchema {
            element_kind: self.element_kind,
            depth: self.depth,
            element_id: self.element_schema.map_or(0, |node| node.id),
        }
    }

    /// Element count.
    pub fn size(&self) -> u32 {
        self.builder.size()
    }

    /// Check this list against a caller-expected descriptor; a
    /// mismatch is reported and otherwise ignored.
    pub fn check_schema(&self, schema: ListSchema) {
        if schema != self.schema() {
            crate::error!(
                "list type mismatch: value is {:?}, caller expected {:?}",
                self.schema(),
                schema
            );
        }
    }

    fn struct_schema(&self) -> StructSchema<'a> {
        match self.element_schema {
            Some(node) => StructSchema::from_node(node),
            None => panic!("list of structs carries no element schema node"),
        }
    }

    fn enum_schema(&self) -> EnumSchema<'a> {
        match self.element_schema {
            Some(node) => EnumSchema::from_node(node),
            None => panic!("list of enums carries no element schema node"),
        }
    }

    #[inline]
    fn check_index(&self, index: u32) {
        assert!(
            index < self.size(),
            "list index out-of-bounds: {} >= {}",
            index,
            self.size()
        );
    }

    /// Element at `index`.
    ///
    /// # Panics
    /// If `index >= size()` (caller contract), or on `List(Object)`.
    pub fn get(&self, index: u32) -> DynamicValueBuilder<'a> {
        self.check_index(index);

        if self.depth > 0 {
            let inner = self.schema().inner();
            return DynamicValueBuilder::List(DynamicListBuilder::new(
                self.pool,
                inner,
                self.builder.get_list_element(index),
            ));
        }

        match self.element_kind {
            TypeKind::Void => DynamicValueBuilder::Void,
            TypeKind::Bool => DynamicValueBuilder::Bool(self.builder.get_bool_element(index)),
            TypeKind::Int8 => DynamicValueBuilder::Int8(self.builder.get_i8_element(index)),
            TypeKind::Int16 => DynamicValueBuilder::Int16(self.builder.get_i16_element(index)),
            TypeKind::Int32 => DynamicValueBuilder::Int32(self.builder.get_i32_element(index)),
            TypeKind::Int64 => DynamicValueBuilder::Int64(self.builder.get_i64_element(index)),
            TypeKind::Uint8 => DynamicValueBuilder::Uint8(self.builder.get_u8_element(index)),
            TypeKind::Uint16 => DynamicValueBuilder::Uint16(self.builder.get_u16_element(index)),
            TypeKind::Uint32 => DynamicValueBuilder::Uint32(self.builder.get_u32_element(index)),
            TypeKind::Uint64 => DynamicValueBuilder::Uint64(self.builder.get_u64_element(index)),
            TypeKind::Float32 => DynamicValueBuilder::Float32(self.builder.get_f32_element(index)),
            TypeKind::Float64 => DynamicValueBuilder::Float64(self.builder.get_f64_element(index)),
            TypeKind::Text => DynamicValueBuilder::Text(self.builder.get_text_element(index)),
            TypeKind::Data => {
                DynamicValueBuilder::Data(self.builder.get_data_blob_element(index))
            }
            TypeKind::List => panic!("innermost element kind cannot itself be a list"),
            TypeKind::Enum => DynamicValueBuilder::Enum(DynamicEnum::new(
                self.pool,
                self.enum_schema(),
                self.builder.get_u16_element(index),
            )),
            TypeKind::Struct => DynamicValueBuilder::Struct(DynamicStructBuilder::new(
                self.pool,
                self.struct_schema(),
                self.builder.get_struct_element(index),
            )),
            TypeKind::Object => panic!("List(Object) not supported"),
            TypeKind::Interface => {
                crate::error!("not implemented: interface access");
                DynamicValueBuilder::Void
            }
        }
    }

    /// Write the element at `index`.
    ///
    /// # Panics
    /// If `index >= size()` (caller contract), or on `List(Object)`.
    pub fn set(&self, index: u32, value: DynamicValue<'_>) {
        self.check_index(index);

        if self.depth > 0 {
            // Sized like the source, then filled by the (unimplemented)
            // deep copy.
            if let Some(source) = value.as_list() {
                if let Some(dest) = self.init(index, source.size()).as_list() {
                    dest.copy_from(source);
                }
            }
            return;
        }

        match self.element_kind {
            TypeKind::Void => value.as_void(),
            TypeKind::Bool => self.builder.set_bool_element(index, value.as_bool()),
            TypeKind::Int8 => self.builder.set_i8_element(index, value.as_i8()),
            TypeKind::Int16 => self.builder.set_i16_element(index, value.as_i16()),
            TypeKind::Int32 => self.builder.set_i32_element(index, value.as_i32()),
            TypeKind::Int64 => self.builder.set_i64_element(index, value.as_i64()),
            TypeKind::Uint8 => self.builder.set_u8_element(index, value.as_u8()),
            TypeKind::Uint16 => self.builder.set_u16_element(index, value.as_u16()),
            TypeKind::Uint32 => self.builder.set_u32_element(index, value.as_u32()),
            TypeKind::Uint64 => self.builder.set_u64_element(index, value.as_u64()),
            TypeKind::Float32 => self.builder.set_f32_element(index, value.as_f32()),
            TypeKind::Float64 => self.builder.set_f64_element(index, value.as_f64()),
            TypeKind::Text => self.builder.set_text_element(index, value.as_text()),
            TypeKind::Data => self.builder.set_data_blob_element(index, value.as_data()),
            TypeKind::List => panic!("innermost element kind cannot itself be a list"),
            TypeKind::Enum => {
                let raw = match value.as_enum() {
                    Some(value) => {
                        if value.schema().id() != self.enum_schema().id() {
                            crate::error!(
                                "enum type mismatch: value has schema {:#018x}, list expects {:#018x}",
                                value.schema().id(),
                                self.enum_schema().id()
                            );
                        }
                        value.raw()
                    }
                    None => 0,
                };
                self.builder.set_u16_element(index, raw);
            }
            TypeKind::Struct => {
                // The slot is already sized, so this cannot grow to the
                // source's schema; the deep copy itself is unimplemented.
                if let Some(source) = value.as_struct() {
                    DynamicStructBuilder::new(
                        self.pool,
                        self.struct_schema(),
                        self.builder.get_struct_element(index),
                    )
                    .copy_from(source);
                }
            }
            TypeKind::Object => panic!("List(Object) not supported"),
            TypeKind::Interface => {
                crate::error!("not implemented: interface access");
            }
        }
    }

    /// Allocate the element at `index`: a blob of `size` bytes at depth
    /// zero, a sub-list of `size` elements above depth zero.
    ///
    /// # Panics
    /// If `index >= size()` (caller contract), or on `List(Object)`.
    pub fn init(&self, index: u32, size: u32) -> DynamicValueBuilder<'a> {
        self.check_index(index);

        if self.depth > 0 {
            let inner = self.schema().inner();
            let builder = if inner.element_size() == ElementSize::InlineComposite {
                self.builder.init_struct_list_element(
                    index,
                    size,
                    self.struct_schema().struct_size(),
                )
            } else {
                self.builder
                    .init_list_element(index, inner.element_size(), size)
            };
            return DynamicValueBuilder::List(DynamicListBuilder::new(self.pool, inner, builder));
        }

        match self.element_kind {
            TypeKind::Text => {
                DynamicValueBuilder::Text(self.builder.init_text_element(index, size))
            }
            TypeKind::Data => {
                DynamicValueBuilder::Data(self.builder.init_data_blob_element(index, size))
            }
            TypeKind::List => panic!("innermost element kind cannot itself be a list"),
            TypeKind::Object => panic!("List(Object) not supported"),
            _ => {
                crate::error!(
                    "init on a {:?} element: only blobs and sub-lists take a size",
                    self.element_kind
                );
                DynamicValueBuilder::Void
            }
        }
    }

    /// Deep copy from a read-side list.
    ///
    /// Not implemented: a conforming copy must be schemaless (driven by
    /// the producer's layout) so unknown fields are not truncated.
    pub fn copy_from(&self, _other: DynamicList<'_>) {
        crate::error!("not implemented: deep list copy");
    }
}
