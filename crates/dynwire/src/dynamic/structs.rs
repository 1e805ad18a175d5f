// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic structs and unions.
//!
//! Field access translates a `(schema, field)` pair into the typed
//! wire verb: primitives read through the XOR default mask carried by
//! the field descriptor, blobs fall back to the descriptor's default
//! span, and composite kinds wrap the referenced region in the
//! matching dynamic cursor. Mutation runs the same dispatch in
//! reverse, coercing the incoming [`DynamicValue`] to the declared
//! kind first.

use super::enums::DynamicEnum;
use super::lists::{DynamicList, DynamicListBuilder};
use super::object::{DynamicObject, DynamicObjectBuilder};
use super::value::{DynamicValue, DynamicValueBuilder};
use crate::schema::{
    Field, ListSchema, Member, MemberBody, SchemaPool, StructSchema, Type, UnionNode,
};
use crate::wire::{ElementSize, StructBuilder, StructReader};

/// Resolve the named member to a field descriptor.
///
/// # Panics
/// If the pool has no such member under this struct, or the member is
/// a union (caller contract; unions are accessed through `get_union`).
fn expect_field<'a>(pool: &'a SchemaPool<'a>, schema: StructSchema<'a>, name: &str) -> &'a Field {
    match pool.find_member(schema.id(), name) {
        Some(member) => match &member.body {
            MemberBody::Field(field) => field,
            MemberBody::Union(_) => panic!(
                "member '{}' of {} is a union; access it through get_union()",
                name, schema.node.name
            ),
        },
        None => panic!("struct {} has no member '{}'", schema.node.name, name),
    }
}

/// Read-side dynamic struct.
#[derive(Clone, Copy)]
pub struct DynamicStruct<'a> {
    pool: &'a SchemaPool<'a>,
    schema: StructSchema<'a>,
    reader: StructReader<'a>,
}

impl<'a> DynamicStruct<'a> {
    pub(crate) fn new(
        pool: &'a SchemaPool<'a>,
        schema: StructSchema<'a>,
        reader: StructReader<'a>,
    ) -> Self {
        Self {
            pool,
            schema,
            reader,
        }
    }

    /// The struct's schema.
    pub fn schema(&self) -> StructSchema<'a> {
        self.schema
    }

    /// Check that the caller expected this struct type. A mismatch is
    /// reported; the reader stays usable either way.
    pub fn check_type_id(&self, requested_type_id: u64) {
        if requested_type_id != self.schema.id() {
            crate::error!(
                "struct type mismatch: value has schema {:#018x}, caller requested {:#018x}",
                self.schema.id(),
                requested_type_id
            );
        }
    }

    /// Member of this struct with the given name, if any. Union
    /// members share the struct's name space.
    pub fn find_member_by_name(&self, name: &str) -> Option<&'a Member> {
        self.pool.find_member(self.schema.id(), name)
    }

    /// Read one field through its descriptor.
    pub fn get_field(&self, field: &'a Field) -> DynamicValue<'a> {
        get_field_impl(self.pool, self.reader, field)
    }

    /// Read the field named `name`.
    ///
    /// # Panics
    /// If the struct has no such field (caller contract).
    pub fn get(&self, name: &str) -> DynamicValue<'a> {
        self.get_field(expect_field(self.pool, self.schema, name))
    }

    /// View a union member.
    pub fn get_union(&self, union: &'a UnionNode) -> DynamicUnion<'a> {
        DynamicUnion {
            pool: self.pool,
            schema: union,
            reader: self.reader,
        }
    }
}

/// Read dispatch shared by struct fields and union members.
fn get_field_impl<'a>(
    pool: &'a SchemaPool<'a>,
    reader: StructReader<'a>,
    field: &'a Field,
) -> DynamicValue<'a> {
    let dval = &field.default;
    match &field.ty {
        Type::Void => DynamicValue::Void,
        Type::Bool => DynamicValue::Bool(reader.get_bool_field(field.offset, dval.bool_value())),
        Type::Int8 => DynamicValue::Int8(reader.get_i8_field(field.offset, dval.int8_value())),
        Type::Int16 => DynamicValue::Int16(reader.get_i16_field(field.offset, dval.int16_value())),
        Type::Int32 => DynamicValue::Int32(reader.get_i32_field(field.offset, dval.int32_value())),
        Type::Int64 => DynamicValue::Int64(reader.get_i64_field(field.offset, dval.int64_value())),
        Type::Uint8 => DynamicValue::Uint8(reader.get_u8_field(field.offset, dval.uint8_value())),
        Type::Uint16 => {
            DynamicValue::Uint16(reader.get_u16_field(field.offset, dval.uint16_value()))
        }
        Type::Uint32 => {
            DynamicValue::Uint32(reader.get_u32_field(field.offset, dval.uint32_value()))
        }
        Type::Uint64 => {
            DynamicValue::Uint64(reader.get_u64_field(field.offset, dval.uint64_value()))
        }
        Type::Float32 => {
            DynamicValue::Float32(reader.get_f32_field(field.offset, dval.float32_mask()))
        }
        Type::Float64 => {
            DynamicValue::Float64(reader.get_f64_field(field.offset, dval.float64_mask()))
        }
        Type::Enum(id) => DynamicValue::Enum(DynamicEnum::new(
            pool,
            pool.get_enum(*id),
            reader.get_u16_field(field.offset, dval.enum_value()),
        )),
        Type::Text => DynamicValue::Text(reader.get_text_field(field.offset, dval.text_value())),
        Type::Data => {
            DynamicValue::Data(reader.get_data_blob_field(field.offset, dval.data_value()))
        }
        Type::List(element) => {
            let schema = ListSchema::of(element);
            DynamicValue::List(DynamicList::new(
                pool,
                schema,
                reader.get_list_field(field.offset, schema.element_size()),
            ))
        }
        Type::Struct(id) => DynamicValue::Struct(DynamicStruct::new(
            pool,
            pool.get_struct(*id),
            reader.get_struct_field(field.offset),
        )),
        Type::Object => DynamicValue::Object(DynamicObject::new(
            pool,
            reader.get_object_field(field.offset),
        )),
        Type::Interface(_) => panic!("not implemented: interface access"),
    }
}

/// Write-side dynamic struct.
#[derive(Clone, Copy)]
pub struct DynamicStructBuilder<'a> {
    pool: &'a SchemaPool<'a>,
    schema: StructSchema<'a>,
    builder: StructBuilder<'a>,
}

impl<'a> DynamicStructBuilder<'a> {
    pub(crate) fn new(
        pool: &'a SchemaPool<'a>,
        schema: StructSchema<'a>,
        builder: StructBuilder<'a>,
    ) -> Self {
        Self {
            pool,
            schema,
            builder,
        }
    }

    /// The struct's schema.
    pub fn schema(&self) -> StructSchema<'a> {
        self.schema
    }

    /// Check that the caller expected this struct type. A mismatch is
    /// reported; the builder stays usable either way.
    pub fn check_type_id(&self, requested_type_id: u64) {
        if requested_type_id != self.schema.id() {
            crate::error!(
                "struct type mismatch: value has schema {:#018x}, caller requested {:#018x}",
                self.schema.id(),
                requested_type_id
            );
        }
    }

    /// Member of this struct with the given name, if any.
    pub fn find_member_by_name(&self, name: &str) -> Option<&'a Member> {
        self.pool.find_member(self.schema.id(), name)
    }

    /// Read one field through its descriptor.
    pub fn get_field(&self, field: &'a Field) -> DynamicValueBuilder<'a> {
        get_field_builder_impl(self.pool, self.builder, field)
    }

    /// Write one field through its descriptor, coercing `value` to the
    /// declared kind.
    pub fn set_field(&self, field: &'a Field, value: DynamicValue<'_>) {
        set_field_impl(self.pool, self.builder, field, value);
    }

    /// Allocate fresh storage for a struct-typed field.
    pub fn init_field(&self, field: &'a Field) -> DynamicValueBuilder<'a> {
        init_field_impl(self.pool, self.builder, field, &field.ty)
    }

    /// Allocate fresh storage for a blob or list field: `size` bytes
    /// for blobs, `size` elements for lists.
    pub fn init_field_sized(&self, field: &'a Field, size: u32) -> DynamicValueBuilder<'a> {
        init_field_sized_impl(self.pool, self.builder, field, &field.ty, size)
    }

    /// Initialize an object-typed field as a struct of the given
    /// as-of-init type. On a non-object field the type argument is
    /// reported and ignored.
    pub fn init_object_field(&self, field: &'a Field, ty: &Type) -> DynamicValueBuilder<'a> {
        if field.ty != Type::Object {
            crate::error!(
                "init_object_field on a {:?} field; the as-of-init type is only for object fields",
                field.ty.kind()
            );
            return init_field_impl(self.pool, self.builder, field, &field.ty);
        }
        init_field_impl(self.pool, self.builder, field, ty)
    }

    /// Initialize an object-typed field as a blob or list of the given
    /// as-of-init type. Nested list types are rejected until the
    /// object representation for them is settled.
    pub fn init_object_field_sized(
        &self,
        field: &'a Field,
        ty: &Type,
        size: u32,
    ) -> DynamicValueBuilder<'a> {
        if field.ty != Type::Object {
            crate::error!(
                "init_object_field on a {:?} field; the as-of-init type is only for object fields",
                field.ty.kind()
            );
            return init_field_sized_impl(self.pool, self.builder, field, &field.ty, size);
        }
        if let Some(element) = ty.list_element() {
            if ListSchema::of(element).depth > 0 {
                crate::error!("object fields do not accept nested list types");
                return DynamicValueBuilder::Void;
            }
        }
        init_field_sized_impl(self.pool, self.builder, field, ty, size)
    }

    /// Read the field named `name`.
    ///
    /// # Panics
    /// If the struct has no such field (caller contract).
    pub fn get(&self, name: &str) -> DynamicValueBuilder<'a> {
        self.get_field(expect_field(self.pool, self.schema, name))
    }

    /// Write the field named `name`.
    ///
    /// # Panics
    /// If the struct has no such field (caller contract).
    pub fn set(&self, name: &str, value: DynamicValue<'_>) {
        self.set_field(expect_field(self.pool, self.schema, name), value);
    }

    /// Initialize the struct-typed field named `name`.
    ///
    /// # Panics
    /// If the struct has no such field (caller contract).
    pub fn init(&self, name: &str) -> DynamicValueBuilder<'a> {
        self.init_field(expect_field(self.pool, self.schema, name))
    }

    /// Initialize the blob or list field named `name`.
    ///
    /// # Panics
    /// If the struct has no such field (caller contract).
    pub fn init_sized(&self, name: &str, size: u32) -> DynamicValueBuilder<'a> {
        self.init_field_sized(expect_field(self.pool, self.schema, name), size)
    }

    /// View a union member.
    pub fn get_union(&self, union: &'a UnionNode) -> DynamicUnionBuilder<'a> {
        DynamicUnionBuilder {
            pool: self.pool,
            schema: union,
            builder: self.builder,
        }
    }

    /// Deep, type-checked copy from a read-side struct.
    ///
    /// Not implemented: a conforming copy must be schemaless (driven
    /// by the producer's layout) so unknown fields are not truncated
    /// when forwarding.
    pub fn copy_from(&self, _other: DynamicStruct<'_>) {
        crate::error!("not implemented: deep struct copy");
    }
}

/// Builder-side read dispatch.
fn get_field_builder_impl<'a>(
    pool: &'a SchemaPool<'a>,
    builder: StructBuilder<'a>,
    field: &'a Field,
) -> DynamicValueBuilder<'a> {
    let dval = &field.default;
    match &field.ty {
        Type::Void => DynamicValueBuilder::Void,
        Type::Bool => {
            DynamicValueBuilder::Bool(builder.get_bool_field(field.offset, dval.bool_value()))
        }
        Type::Int8 => {
            DynamicValueBuilder::Int8(builder.get_i8_field(field.offset, dval.int8_value()))
        }
        Type::Int16 => {
            DynamicValueBuilder::Int16(builder.get_i16_field(field.offset, dval.int16_value()))
        }
        Type::Int32 => {
            DynamicValueBuilder::Int32(builder.get_i32_field(field.offset, dval.int32_value()))
        }
        Type::Int64 => {
            DynamicValueBuilder::Int64(builder.get_i64_field(field.offset, dval.int64_value()))
        }
        Type::Uint8 => {
            DynamicValueBuilder::Uint8(builder.get_u8_field(field.offset, dval.uint8_value()))
        }
        Type::Uint16 => {
            DynamicValueBuilder::Uint16(builder.get_u16_field(field.offset, dval.uint16_value()))
        }
        Type::Uint32 => {
            DynamicValueBuilder::Uint32(builder.get_u32_field(field.offset, dval.uint32_value()))
        }
        Type::Uint64 => {
            DynamicValueBuilder::Uint64(builder.get_u64_field(field.offset, dval.uint64_value()))
        }
        Type::Float32 => {
            DynamicValueBuilder::Float32(builder.get_f32_field(field.offset, dval.float32_mask()))
        }
        Type::Float64 => {
            DynamicValueBuilder::Float64(builder.get_f64_field(field.offset, dval.float64_mask()))
        }
        Type::Enum(id) => DynamicValueBuilder::Enum(DynamicEnum::new(
            pool,
            pool.get_enum(*id),
            builder.get_u16_field(field.offset, dval.enum_value()),
        )),
        Type::Text => {
            DynamicValueBuilder::Text(builder.get_text_field(field.offset, dval.text_value()))
        }
        Type::Data => DynamicValueBuilder::Data(
            builder.get_data_blob_field(field.offset, dval.data_value()),
        ),
        Type::List(element) => {
            let schema = ListSchema::of(element);
            DynamicValueBuilder::List(DynamicListBuilder::new(
                pool,
                schema,
                builder.get_list_field(field.offset),
            ))
        }
        Type::Struct(id) => {
            let schema = pool.get_struct(*id);
            DynamicValueBuilder::Struct(DynamicStructBuilder::new(
                pool,
                schema,
                builder.get_struct_field(field.offset, schema.struct_size()),
            ))
        }
        Type::Object => DynamicValueBuilder::Object(DynamicObjectBuilder::new(
            pool,
            builder.get_object_field(field.offset),
        )),
        Type::Interface(_) => panic!("not implemented: interface access"),
    }
}

/// Write dispatch shared by struct fields and union members.
fn set_field_impl<'a>(
    pool: &'a SchemaPool<'a>,
    builder: StructBuilder<'a>,
    field: &'a Field,
    value: DynamicValue<'_>,
) {
    let dval = &field.default;
    match &field.ty {
        Type::Void => value.as_void(),
        Type::Bool => builder.set_bool_field(field.offset, value.as_bool(), dval.bool_value()),
        Type::Int8 => builder.set_i8_field(field.offset, value.as_i8(), dval.int8_value()),
        Type::Int16 => builder.set_i16_field(field.offset, value.as_i16(), dval.int16_value()),
        Type::Int32 => builder.set_i32_field(field.offset, value.as_i32(), dval.int32_value()),
        Type::Int64 => builder.set_i64_field(field.offset, value.as_i64(), dval.int64_value()),
        Type::Uint8 => builder.set_u8_field(field.offset, value.as_u8(), dval.uint8_value()),
        Type::Uint16 => builder.set_u16_field(field.offset, value.as_u16(), dval.uint16_value()),
        Type::Uint32 => builder.set_u32_field(field.offset, value.as_u32(), dval.uint32_value()),
        Type::Uint64 => builder.set_u64_field(field.offset, value.as_u64(), dval.uint64_value()),
        Type::Float32 => {
            builder.set_f32_field(field.offset, value.as_f32(), dval.float32_mask())
        }
        Type::Float64 => {
            builder.set_f64_field(field.offset, value.as_f64(), dval.float64_mask())
        }
        Type::Enum(id) => {
            let raw = match value.as_enum() {
                Some(value) => {
                    if value.schema().id() != *id {
                        crate::error!(
                            "enum type mismatch: value has schema {:#018x}, field expects {:#018x}",
                            value.schema().id(),
                            id
                        );
                    }
                    value.raw()
                }
                None => 0,
            };
            builder.set_u16_field(field.offset, raw, dval.enum_value());
        }
        Type::Text => builder.set_text_field(field.offset, value.as_text()),
        Type::Data => builder.set_data_blob_field(field.offset, value.as_data()),
        Type::List(_) => {
            // Sized like the source, then filled by the (unimplemented)
            // deep copy; a conforming copy must use the source's schema.
            if let Some(source) = value.as_list() {
                let dest = init_field_sized_impl(pool, builder, field, &field.ty, source.size());
                if let Some(dest) = dest.as_list() {
                    dest.copy_from(source);
                }
            }
        }
        Type::Struct(_) => {
            if let Some(source) = value.as_struct() {
                let dest = init_field_impl(pool, builder, field, &field.ty);
                if let Some(dest) = dest.as_struct() {
                    dest.copy_from(source);
                }
            }
        }
        Type::Object => {
            crate::error!("not implemented: schemaless copy into an object field");
        }
        Type::Interface(_) => panic!("not implemented: interface access"),
    }
}

/// Allocation dispatch for struct-typed targets (no size argument).
fn init_field_impl<'a>(
    pool: &'a SchemaPool<'a>,
    builder: StructBuilder<'a>,
    field: &'a Field,
    ty: &Type,
) -> DynamicValueBuilder<'a> {
    match ty {
        Type::Struct(id) => {
            let schema = pool.get_struct(*id);
            DynamicValueBuilder::Struct(DynamicStructBuilder::new(
                pool,
                schema,
                builder.init_struct_field(field.offset, schema.struct_size()),
            ))
        }
        Type::Object => {
            crate::error!(
                "init on an object field requires an as-of-init type; use init_object_field()"
            );
            DynamicValueBuilder::Void
        }
        _ => {
            crate::error!("init without a size expects a struct field, not {:?}", ty.kind());
            get_field_builder_impl(pool, builder, field)
        }
    }
}

/// Allocation dispatch for sized targets (blobs and lists).
fn init_field_sized_impl<'a>(
    pool: &'a SchemaPool<'a>,
    builder: StructBuilder<'a>,
    field: &'a Field,
    ty: &Type,
    size: u32,
) -> DynamicValueBuilder<'a> {
    match ty {
        Type::Text => DynamicValueBuilder::Text(builder.init_text_field(field.offset, size)),
        Type::Data => DynamicValueBuilder::Data(builder.init_data_blob_field(field.offset, size)),
        Type::List(element) => {
            let schema = ListSchema::of(element);
            let list = if schema.element_size() == ElementSize::InlineComposite {
                let element_schema = pool.get_struct(schema.element_id);
                builder.init_struct_list_field(field.offset, size, element_schema.struct_size())
            } else {
                builder.init_list_field(field.offset, schema.element_size(), size)
            };
            DynamicValueBuilder::List(DynamicListBuilder::new(pool, schema, list))
        }
        Type::Object => {
            crate::error!(
                "init on an object field requires an as-of-init type; use init_object_field()"
            );
            DynamicValueBuilder::Void
        }
        _ => {
            crate::error!("init with a size expects a blob or list field, not {:?}", ty.kind());
            get_field_builder_impl(pool, builder, field)
        }
    }
}

/// Read-side union view.
#[derive(Clone, Copy)]
pub struct DynamicUnion<'a> {
    pool: &'a SchemaPool<'a>,
    schema: &'a UnionNode,
    reader: StructReader<'a>,
}

impl<'a> DynamicUnion<'a> {
    /// The active member, or `None` when the discriminant names a
    /// member this schema does not know.
    pub fn which(&self) -> Option<&'a Member> {
        let discrim = self.reader.get_u32_field(self.schema.discriminant_offset, 0) as u16;
        self.schema.members.get(discrim as usize)
    }

    /// Read the active member's value. An unknown discriminant is
    /// reported and reads as void.
    pub fn get(&self) -> DynamicValue<'a> {
        match self.which() {
            Some(member) => match &member.body {
                MemberBody::Field(field) => get_field_impl(self.pool, self.reader, field),
                MemberBody::Union(_) => panic!("union members must be fields"),
            },
            None => {
                crate::error!("unknown union discriminant");
                DynamicValue::Void
            }
        }
    }
}

/// Write-side union view.
#[derive(Clone, Copy)]
pub struct DynamicUnionBuilder<'a> {
    pool: &'a SchemaPool<'a>,
    schema: &'a UnionNode,
    builder: StructBuilder<'a>,
}

impl<'a> DynamicUnionBuilder<'a> {
    /// The active member, or `None` when the discriminant names a
    /// member this schema does not know.
    pub fn which(&self) -> Option<&'a Member> {
        let discrim = self.builder.get_u32_field(self.schema.discriminant_offset, 0) as u16;
        self.schema.members.get(discrim as usize)
    }

    /// Read the active member's value. An unknown discriminant is
    /// reported and reads as void.
    pub fn get(&self) -> DynamicValueBuilder<'a> {
        match self.which() {
            Some(member) => match &member.body {
                MemberBody::Field(field) => {
                    get_field_builder_impl(self.pool, self.builder, field)
                }
                MemberBody::Union(_) => panic!("union members must be fields"),
            },
            None => {
                crate::error!("unknown union discriminant");
                DynamicValueBuilder::Void
            }
        }
    }

    /// Make `field` the active member and write its value.
    pub fn set(&self, field: &'a Field, value: DynamicValue<'_>) {
        self.builder
            .set_u16_field(self.schema.discriminant_offset, field.index, 0);
        set_field_impl(self.pool, self.builder, field, value);
    }

    /// Make `field` the active member and allocate its storage
    /// (struct-typed members).
    pub fn init(&self, field: &'a Field) -> DynamicValueBuilder<'a> {
        self.builder
            .set_u16_field(self.schema.discriminant_offset, field.index, 0);
        init_field_impl(self.pool, self.builder, field, &field.ty)
    }

    /// Make `field` the active member and allocate its storage (blob
    /// and list members).
    pub fn init_sized(&self, field: &'a Field, size: u32) -> DynamicValueBuilder<'a> {
        self.builder
            .set_u16_field(self.schema.discriminant_offset, field.index, 0);
        init_field_sized_impl(self.pool, self.builder, field, &field.ty, size)
    }
}
