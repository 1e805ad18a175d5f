// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Integration tests for the reflection layer.

use super::*;
use crate::schema::{
    EnumNodeBuilder, Field, MemberBody, Node, SchemaPool, StructNodeBuilder, Type, TypeKind,
    UnionNode, Value,
};
use crate::wire::{MessageBuilder, MessageReader};

const SAMPLE_ID: u64 = 0x5A17;
const HOLDER_ID: u64 = 0x401D;
const SHAPE_ID: u64 = 0x5A9E;
const COLOR_ID: u64 = 0xC01;
const MOOD_ID: u64 = 0xC02;
const POINT_ID: u64 = 0x9014;
const CARRIER_ID: u64 = 0xCA44;
const SCALARS_ID: u64 = 0x5CA1;

/// `Sample { a :Int32 = -7; b :Float64 = 3.25; }`
fn sample_node() -> Node {
    StructNodeBuilder::new(SAMPLE_ID, "Sample")
        .data_words(2)
        .field("a", 0, Type::Int32, Value::Int32(-7))
        .field("b", 1, Type::Float64, Value::Float64(3.25))
        .build()
}

/// `Holder { s :Text = "hi"; raw :Data = [1, 2]; lol :List(List(Int16)); }`
fn holder_node() -> Node {
    StructNodeBuilder::new(HOLDER_ID, "Holder")
        .pointers(3)
        .field("s", 0, Type::Text, Value::Text("hi".into()))
        .field("raw", 1, Type::Data, Value::Data(vec![1, 2]))
        .field(
            "lol",
            2,
            Type::List(Box::new(Type::List(Box::new(Type::Int16)))),
            Value::List,
        )
        .build()
}

/// `Shape { tag :UInt16; union u { x :Int32; y :Text } }` with the
/// discriminant at data offset 0; `tag` aliases it so tests can force
/// out-of-range discriminants.
fn shape_node() -> Node {
    StructNodeBuilder::new(SHAPE_ID, "Shape")
        .data_words(1)
        .pointers(1)
        .field("tag", 0, Type::Uint16, Value::Uint16(0))
        .union("u", 0, |u| {
            u.field("x", 1, Type::Int32, Value::Int32(0))
                .field("y", 0, Type::Text, Value::Text(String::new()))
        })
        .build()
}

fn color_node() -> Node {
    EnumNodeBuilder::new(COLOR_ID, "Color")
        .enumerant("red")
        .enumerant("green")
        .enumerant("blue")
        .build()
}

fn mood_node() -> Node {
    EnumNodeBuilder::new(MOOD_ID, "Mood")
        .enumerant("calm")
        .enumerant("tense")
        .build()
}

/// `Point { x :Int32; y :Int32; }`
fn point_node() -> Node {
    StructNodeBuilder::new(POINT_ID, "Point")
        .data_words(1)
        .field("x", 0, Type::Int32, Value::Int32(0))
        .field("y", 1, Type::Int32, Value::Int32(0))
        .build()
}

/// `Carrier { o :Object; color :Color = green; pts :List(Point);
///  colors :List(Color); sub :Sample; }`
fn carrier_node() -> Node {
    StructNodeBuilder::new(CARRIER_ID, "Carrier")
        .data_words(1)
        .pointers(4)
        .field("o", 0, Type::Object, Value::Object)
        .field("color", 0, Type::Enum(COLOR_ID), Value::Enum(1))
        .field(
            "pts",
            1,
            Type::List(Box::new(Type::Struct(POINT_ID))),
            Value::List,
        )
        .field(
            "colors",
            2,
            Type::List(Box::new(Type::Enum(COLOR_ID))),
            Value::List,
        )
        .field("sub", 3, Type::Struct(SAMPLE_ID), Value::Struct)
        .build()
}

/// Every primitive kind at a distinct offset.
fn scalars_node() -> Node {
    StructNodeBuilder::new(SCALARS_ID, "Scalars")
        .data_words(6)
        .field("f64v", 0, Type::Float64, Value::Float64(0.0))
        .field("i64v", 1, Type::Int64, Value::Int64(0))
        .field("u64v", 2, Type::Uint64, Value::Uint64(0))
        .field("i32v", 6, Type::Int32, Value::Int32(0))
        .field("u32v", 7, Type::Uint32, Value::Uint32(0))
        .field("f32v", 8, Type::Float32, Value::Float32(0.0))
        .field("i16v", 18, Type::Int16, Value::Int16(0))
        .field("u16v", 19, Type::Uint16, Value::Uint16(0))
        .field("i8v", 40, Type::Int8, Value::Int8(0))
        .field("u8v", 41, Type::Uint8, Value::Uint8(0))
        .field("flag", 336, Type::Bool, Value::Bool(false))
        .field("nothing", 0, Type::Void, Value::Void)
        .build()
}

fn field_of<'a>(node: &'a Node, name: &str) -> &'a Field {
    fn walk<'a>(members: &'a [crate::schema::Member], name: &str) -> Option<&'a Field> {
        for member in members {
            match &member.body {
                MemberBody::Field(field) if member.name == name => return Some(field),
                MemberBody::Union(un) => {
                    if let Some(field) = walk(&un.members, name) {
                        return Some(field);
                    }
                }
                MemberBody::Field(_) => {}
            }
        }
        None
    }
    let crate::schema::NodeBody::Struct(body) = &node.body else {
        panic!("not a struct node");
    };
    walk(&body.members, name).expect("no such field")
}

fn union_of<'a>(node: &'a Node, name: &str) -> &'a UnionNode {
    let crate::schema::NodeBody::Struct(body) = &node.body else {
        panic!("not a struct node");
    };
    body.members
        .iter()
        .find_map(|member| match &member.body {
            MemberBody::Union(un) if member.name == name => Some(un),
            _ => None,
        })
        .expect("no such union")
}

#[test]
fn test_primitive_defaults_and_roundtrip() {
    let node = sample_node();
    let mut pool = SchemaPool::new();
    pool.add_no_copy(&node);

    let message = MessageBuilder::new();
    let root = message.init_root(&pool, SAMPLE_ID);

    // Freshly allocated: both fields read their declared defaults.
    assert_eq!(root.get("b").as_f64(), 3.25);
    assert_eq!(root.get("a").as_i32(), -7);

    root.set("a", 42i32.into());
    assert_eq!(root.get("a").as_i32(), 42);

    // Writing the default zeroes the stored bits but reads back as -7.
    root.set("a", (-7i32).into());
    assert_eq!(root.get("a").as_i32(), -7);

    let frozen = message.into_reader();
    let root = frozen.get_root(&pool, SAMPLE_ID);
    assert_eq!(root.get("a").as_i32(), -7);
    assert_eq!(root.get("b").as_f64(), 3.25);
}

#[test]
fn test_absent_message_reads_all_defaults() {
    let node = sample_node();
    let holder = holder_node();
    let mut pool = SchemaPool::new();
    pool.add_no_copy(&node);
    pool.add_no_copy(&holder);

    // A zero-length message has a null root: every field is absent.
    let empty = MessageReader::new(Vec::new());
    let sample = empty.get_root(&pool, SAMPLE_ID);
    assert_eq!(sample.get("a").as_i32(), -7);
    assert_eq!(sample.get("b").as_f64(), 3.25);

    let holder = empty.get_root(&pool, HOLDER_ID);
    assert_eq!(holder.get("s").as_text(), "hi");
    assert_eq!(holder.get("raw").as_data(), &[1, 2]);
    let lol = holder.get("lol").as_list().expect("lol is a list");
    assert_eq!(lol.size(), 0);
}

#[test]
fn test_primitive_boundaries_roundtrip() {
    let node = scalars_node();
    let mut pool = SchemaPool::new();
    pool.add_no_copy(&node);

    let message = MessageBuilder::new();
    let root = message.init_root(&pool, SCALARS_ID);
    root.set("f64v", (-0.0f64).into());
    root.set("i64v", i64::MIN.into());
    root.set("u64v", u64::MAX.into());
    root.set("i32v", i32::MIN.into());
    root.set("u32v", u32::MAX.into());
    root.set("f32v", f32::NAN.into());
    root.set("i16v", i16::MAX.into());
    root.set("u16v", u16::MAX.into());
    root.set("i8v", i8::MIN.into());
    root.set("u8v", u8::MAX.into());
    root.set("flag", true.into());
    root.set("nothing", DynamicValue::Void);

    let frozen = message.into_reader();
    let root = frozen.get_root(&pool, SCALARS_ID);
    assert_eq!(root.get("f64v").as_f64().to_bits(), (-0.0f64).to_bits());
    assert_eq!(root.get("i64v").as_i64(), i64::MIN);
    assert_eq!(root.get("u64v").as_u64(), u64::MAX);
    assert_eq!(root.get("i32v").as_i32(), i32::MIN);
    assert_eq!(root.get("u32v").as_u32(), u32::MAX);
    assert!(root.get("f32v").as_f32().is_nan());
    assert_eq!(root.get("i16v").as_i16(), i16::MAX);
    assert_eq!(root.get("u16v").as_u16(), u16::MAX);
    assert_eq!(root.get("i8v").as_i8(), i8::MIN);
    assert_eq!(root.get("u8v").as_u8(), u8::MAX);
    assert!(root.get("flag").as_bool());
    assert_eq!(root.get("nothing").kind(), TypeKind::Void);
}

#[test]
fn test_text_default_set_and_init() {
    let node = holder_node();
    let mut pool = SchemaPool::new();
    pool.add_no_copy(&node);

    let message = MessageBuilder::new();
    let root = message.init_root(&pool, HOLDER_ID);
    assert_eq!(root.get("s").as_text(), "hi");

    root.set("s", "hello".into());
    assert_eq!(root.get("s").as_text(), "hello");

    let blank = root.init_sized("s", 3);
    assert_eq!(blank.as_text().len(), 3);

    root.set("raw", (&[9u8, 8, 7][..]).into());

    let frozen = message.into_reader();
    let root = frozen.get_root(&pool, HOLDER_ID);
    assert_eq!(root.get("s").as_text().len(), 3);
    assert_eq!(root.get("raw").as_data(), &[9, 8, 7]);
}

#[test]
fn test_nested_list_depth_invariance() {
    let node = holder_node();
    let mut pool = SchemaPool::new();
    pool.add_no_copy(&node);

    let message = MessageBuilder::new();
    let root = message.init_root(&pool, HOLDER_ID);

    let lol = root.init_sized("lol", 2).as_list().expect("lol list");
    assert_eq!(lol.size(), 2);
    assert_eq!(lol.schema().element_kind, TypeKind::Int16);
    assert_eq!(lol.schema().depth, 1);

    let first = lol.init(0, 3).as_list().expect("sub-list");
    lol.init(1, 0);
    assert_eq!(first.size(), 3);
    assert_eq!(first.schema().depth, 0);
    assert_eq!(first.schema().element_kind, TypeKind::Int16);
    first.set(1, 123i16.into());

    let frozen = message.into_reader();
    let lol = frozen
        .get_root(&pool, HOLDER_ID)
        .get("lol")
        .as_list()
        .expect("lol list");
    assert_eq!(lol.size(), 2);

    let first = lol.get(0).as_list().expect("sub-list");
    let second = lol.get(1).as_list().expect("sub-list");
    assert_eq!(first.size(), 3);
    assert_eq!(second.size(), 0);
    assert_eq!(first.schema().depth, 0);
    // Unwritten elements of a fresh sub-list read as zero.
    assert_eq!(first.get(2).as_i16(), 0);
    assert_eq!(first.get(1).as_i16(), 123);
}

#[test]
#[should_panic(expected = "list index out-of-bounds")]
fn test_list_index_precondition() {
    let node = holder_node();
    let mut pool = SchemaPool::new();
    pool.add_no_copy(&node);

    let message = MessageBuilder::new();
    let root = message.init_root(&pool, HOLDER_ID);
    let lol = root.init_sized("lol", 2).as_list().expect("lol list");
    lol.init(2, 1);
}

#[test]
fn test_union_discriminant_and_exclusivity() {
    let node = shape_node();
    let mut pool = SchemaPool::new();
    pool.add_no_copy(&node);

    let un = union_of(&node, "u");
    let x = field_of(&node, "x");
    let y = field_of(&node, "y");

    let message = MessageBuilder::new();
    let root = message.get_root(&pool, SHAPE_ID);
    let ub = root.get_union(un);

    // init on a primitive member still selects it; the allocation
    // itself is reported as a validation failure and falls back to a
    // getter.
    ub.init(x);
    assert_eq!(ub.which().map(|m| m.name.as_str()), Some("x"));
    // The inactive text member reads its declared default.
    assert_eq!(root.get("y").as_text(), "");

    ub.set(x, 42i32.into());
    assert_eq!(ub.which().map(|m| m.name.as_str()), Some("x"));
    assert_eq!(ub.get().as_i32(), 42);

    ub.set(y, "side".into());
    assert_eq!(ub.which().map(|m| m.name.as_str()), Some("y"));
    assert_eq!(ub.get().as_text(), "side");
    // x's storage is distinct from the text pointer and still holds 42;
    // exclusivity is the discriminant, not the storage.
    let frozen = message.into_reader();
    let root = frozen.get_root(&pool, SHAPE_ID);
    let ur = root.get_union(un);
    assert_eq!(ur.which().map(|m| m.name.as_str()), Some("y"));
    assert_eq!(ur.get().as_text(), "side");
}

#[test]
fn test_union_unknown_discriminant_recovers() {
    let node = shape_node();
    let mut pool = SchemaPool::new();
    pool.add_no_copy(&node);

    let un = union_of(&node, "u");
    let message = MessageBuilder::new();
    let root = message.get_root(&pool, SHAPE_ID);

    // `tag` aliases the discriminant word; force a value past the
    // member count.
    root.set("tag", 9u16.into());

    let ub = root.get_union(un);
    assert!(ub.which().is_none());
    assert_eq!(ub.get().kind(), TypeKind::Void);

    let frozen = message.into_reader();
    let ur = frozen.get_root(&pool, SHAPE_ID).get_union(un);
    assert!(ur.which().is_none());
    assert_eq!(ur.get().kind(), TypeKind::Void);
}

#[test]
fn test_enum_lookup_and_mismatched_schema() {
    let color = color_node();
    let mood = mood_node();
    let sample = sample_node();
    let point = point_node();
    let carrier = carrier_node();
    let mut pool = SchemaPool::new();
    pool.add_no_copy(&color);
    pool.add_no_copy(&mood);
    pool.add_no_copy(&sample);
    pool.add_no_copy(&point);
    pool.add_no_copy(&carrier);

    let message = MessageBuilder::new();
    let root = message.init_root(&pool, CARRIER_ID);

    // Declared default is green (1).
    let value = root.get("color").as_enum().expect("enum value");
    assert_eq!(value.raw(), 1);
    assert_eq!(value.enumerant().map(|e| e.name.as_str()), Some("green"));
    assert_eq!(
        value.find_enumerant_by_name("green").map(|f| f.value),
        Some(1)
    );

    let blue = DynamicEnum::new(&pool, pool.get_enum(COLOR_ID), 2);
    root.set("color", DynamicValue::Enum(blue));
    assert_eq!(
        root.get("color").as_enum().map(|e| e.raw()),
        Some(2)
    );

    // A value built against a different enum's schema is reported but
    // its raw value is still written.
    let tense = DynamicEnum::new(&pool, pool.get_enum(MOOD_ID), 1);
    root.set("color", DynamicValue::Enum(tense));
    assert_eq!(root.get("color").as_enum().map(|e| e.raw()), Some(1));

    // Same check on list elements.
    let colors = root.init_sized("colors", 2).as_list().expect("colors");
    colors.set(0, DynamicValue::Enum(blue));
    colors.set(1, DynamicValue::Enum(tense));

    let frozen = message.into_reader();
    let root = frozen.get_root(&pool, CARRIER_ID);
    let colors = root.get("colors").as_list().expect("colors");
    assert_eq!(colors.get(0).as_enum().map(|e| e.raw()), Some(2));
    assert_eq!(colors.get(1).as_enum().map(|e| e.raw()), Some(1));
    assert_eq!(
        colors.get(0).as_enum().and_then(|e| e.enumerant()).map(|e| e.name.as_str()),
        Some("blue")
    );
}

#[test]
fn test_struct_list_elements() {
    let sample = sample_node();
    let color = color_node();
    let point = point_node();
    let carrier = carrier_node();
    let mut pool = SchemaPool::new();
    pool.add_no_copy(&sample);
    pool.add_no_copy(&color);
    pool.add_no_copy(&point);
    pool.add_no_copy(&carrier);

    let message = MessageBuilder::new();
    let root = message.init_root(&pool, CARRIER_ID);

    let pts = root.init_sized("pts", 3).as_list().expect("pts");
    assert_eq!(pts.size(), 3);
    for i in 0..3 {
        let pt = pts.get(i).as_struct().expect("point");
        pt.set("x", (i as i32).into());
        pt.set("y", (i as i32 * 10).into());
    }

    let frozen = message.into_reader();
    let pts = frozen
        .get_root(&pool, CARRIER_ID)
        .get("pts")
        .as_list()
        .expect("pts");
    assert_eq!(pts.size(), 3);
    let p2 = pts.get(2).as_struct().expect("point");
    assert_eq!(p2.get("x").as_i32(), 2);
    assert_eq!(p2.get("y").as_i32(), 20);
}

#[test]
fn test_object_polymorphism() {
    let sample = sample_node();
    let color = color_node();
    let point = point_node();
    let carrier = carrier_node();
    let mut pool = SchemaPool::new();
    pool.add_no_copy(&sample);
    pool.add_no_copy(&color);
    pool.add_no_copy(&point);
    pool.add_no_copy(&carrier);

    let o = field_of(&carrier, "o");

    let message = MessageBuilder::new();
    let root = message.init_root(&pool, CARRIER_ID);

    // Null slot: re-interpretation yields empty readers, not errors.
    let fresh = root.get("o").as_object().expect("object");
    assert!(fresh.is_null());
    assert_eq!(fresh.to_struct(SAMPLE_ID).get("a").as_i32(), -7);

    // Initialize as a Sample struct and fill it.
    let as_sample = root
        .init_object_field(o, &Type::Struct(SAMPLE_ID))
        .as_struct()
        .expect("sample in object");
    as_sample.set("a", 99i32.into());

    let frozen = message.into_reader();
    let root = frozen.get_root(&pool, CARRIER_ID);
    let object = root.get("o").as_object().expect("object");
    assert!(!object.is_null());

    let sample = object.to_struct(SAMPLE_ID);
    assert_eq!(sample.get("a").as_i32(), 99);
    assert_eq!(sample.get("b").as_f64(), 3.25);

    // The same slot re-interpreted as a list is a validation failure
    // that yields an empty reader.
    let as_list = object.to_list_of(&Type::Int32);
    assert_eq!(as_list.size(), 0);
}

#[test]
fn test_object_as_list() {
    let sample = sample_node();
    let color = color_node();
    let point = point_node();
    let carrier = carrier_node();
    let mut pool = SchemaPool::new();
    pool.add_no_copy(&sample);
    pool.add_no_copy(&color);
    pool.add_no_copy(&point);
    pool.add_no_copy(&carrier);

    let o = field_of(&carrier, "o");
    let u32_list = Type::List(Box::new(Type::Uint32));

    let message = MessageBuilder::new();
    let root = message.init_root(&pool, CARRIER_ID);
    let values = root
        .init_object_field_sized(o, &u32_list, 4)
        .as_list()
        .expect("u32 list in object");
    for i in 0..4 {
        values.set(i, (i * 11).into());
    }

    // Nested list types are rejected as the as-of-init type.
    let nested = Type::List(Box::new(Type::List(Box::new(Type::Uint8))));
    let rejected = root.init_object_field_sized(o, &nested, 2);
    assert_eq!(rejected.kind(), TypeKind::Void);

    let frozen = message.into_reader();
    let object = frozen
        .get_root(&pool, CARRIER_ID)
        .get("o")
        .as_object()
        .expect("object");
    let values = object.to_list_of(&Type::Uint32);
    assert_eq!(values.size(), 4);
    assert_eq!(values.get(3).as_u32(), 33);
    // Struct re-interpretation of a list slot recovers with an empty
    // reader.
    assert_eq!(object.to_struct(SAMPLE_ID).get("a").as_i32(), -7);
}

#[test]
fn test_name_lookup_idempotence() {
    let first = StructNodeBuilder::new(0x111, "First")
        .data_words(1)
        .field("x", 3, Type::Uint16, Value::Uint16(0))
        .build();
    let second = StructNodeBuilder::new(0x222, "Second")
        .data_words(2)
        .field("x", 5, Type::Uint16, Value::Uint16(0))
        .build();
    let mut pool = SchemaPool::new();
    pool.add_no_copy(&first);
    pool.add_no_copy(&second);

    // Identical names under different parents resolve independently.
    for (id, node) in [(0x111u64, &first), (0x222u64, &second)] {
        let member = pool.find_member(id, "x").expect("member x");
        let MemberBody::Field(found) = &member.body else {
            panic!("expected field");
        };
        assert_eq!(found.offset, field_of(node, "x").offset);
    }
}

#[test]
fn test_type_mismatch_recovery_through_struct() {
    let node = sample_node();
    let mut pool = SchemaPool::new();
    pool.add_no_copy(&node);

    let empty = MessageReader::new(Vec::new());
    let root = empty.get_root(&pool, SAMPLE_ID);

    // `a` is Int32; every other accessor recovers with a zero value.
    let value = root.get("a");
    assert_eq!(value.as_u64(), 0);
    assert_eq!(value.as_f32(), 0.0);
    assert_eq!(value.as_text(), "");
    assert!(value.as_struct().is_none());
    assert!(value.as_list().is_none());

    // The checked type-id accessor reports but keeps the reader
    // usable.
    root.check_type_id(0xBAD);
    assert_eq!(root.get("a").as_i32(), -7);
}

#[test]
fn test_struct_field_get_allocates_on_builder() {
    let sample = sample_node();
    let color = color_node();
    let point = point_node();
    let carrier = carrier_node();
    let mut pool = SchemaPool::new();
    pool.add_no_copy(&sample);
    pool.add_no_copy(&color);
    pool.add_no_copy(&point);
    pool.add_no_copy(&carrier);

    let message = MessageBuilder::new();
    let root = message.init_root(&pool, CARRIER_ID);

    // Builder get of an unset struct field allocates it in place.
    let sub = root.get("sub").as_struct().expect("sub");
    sub.set("a", 5i32.into());

    let frozen = message.into_reader();
    let sub = frozen
        .get_root(&pool, CARRIER_ID)
        .get("sub")
        .as_struct()
        .expect("sub");
    assert_eq!(sub.get("a").as_i32(), 5);
}

#[test]
fn test_set_composite_fields_is_a_known_gap() {
    let node = holder_node();
    let mut pool = SchemaPool::new();
    pool.add_no_copy(&node);

    // Source message with a populated nested list.
    let source_message = MessageBuilder::new();
    let source_root = source_message.init_root(&pool, HOLDER_ID);
    let lol = source_root.init_sized("lol", 2).as_list().expect("lol");
    lol.init(0, 2).as_list().expect("sub").set(0, 7i16.into());
    lol.init(1, 1);
    let source = source_message.into_reader();

    // Destination set: the list is allocated at the source's size, but
    // the element copy is an unimplemented schemaless copy, so the
    // elements stay zeroed.
    let dest_message = MessageBuilder::new();
    let dest_root = dest_message.init_root(&pool, HOLDER_ID);
    let source_list = source
        .get_root(&pool, HOLDER_ID)
        .get("lol")
        .as_list()
        .expect("source lol");
    dest_root.set_field(field_of(&node, "lol"), DynamicValue::List(source_list));

    let dest = dest_message.into_reader();
    let copied = dest
        .get_root(&pool, HOLDER_ID)
        .get("lol")
        .as_list()
        .expect("copied lol");
    assert_eq!(copied.size(), 2);
    assert_eq!(copied.get(0).as_list().expect("sub").size(), 0);
}

#[test]
fn test_root_reinterpretation_on_builder() {
    let node = sample_node();
    let mut pool = SchemaPool::new();
    pool.add_no_copy(&node);

    let message = MessageBuilder::new();
    message.init_root(&pool, SAMPLE_ID).set("a", 8i32.into());
    // get_root on an already-built message sees the existing data.
    assert_eq!(message.get_root(&pool, SAMPLE_ID).get("a").as_i32(), 8);
}

#[test]
#[should_panic(expected = "has no member")]
fn test_unknown_member_is_a_caller_bug() {
    let node = sample_node();
    let mut pool = SchemaPool::new();
    pool.add_no_copy(&node);

    let message = MessageBuilder::new();
    let root = message.init_root(&pool, SAMPLE_ID);
    root.get("missing");
}

#[test]
#[should_panic(expected = "schema pool has no node")]
fn test_unregistered_type_id_is_a_caller_bug() {
    let pool = SchemaPool::new();
    let message = MessageBuilder::new();
    let _ = message.init_root(&pool, 0xDEAD);
}
