// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fluent assembly of schema nodes.
//!
//! The builders take explicit word/bit offsets: layout computation
//! belongs to the schema compiler, which is not part of this runtime.

use super::nodes::{
    EnumNode, Enumerant, Field, Member, MemberBody, Node, NodeBody, StructNode, Type, UnionNode,
    Value,
};
use crate::wire::ElementSize;

/// Assembles a struct node.
///
/// ```
/// use dynwire::schema::{StructNodeBuilder, Type, Value};
///
/// let node = StructNodeBuilder::new(0x1001, "Point")
///     .data_words(1)
///     .field("x", 0, Type::Int32, Value::Int32(0))
///     .field("y", 1, Type::Int32, Value::Int32(0))
///     .build();
/// assert_eq!(node.id, 0x1001);
/// ```
pub struct StructNodeBuilder {
    id: u64,
    name: String,
    data_words: u16,
    pointer_count: u16,
    preferred_list_encoding: ElementSize,
    members: Vec<Member>,
}

impl StructNodeBuilder {
    /// Start a struct node with the given id and display name.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            data_words: 0,
            pointer_count: 0,
            preferred_list_encoding: ElementSize::InlineComposite,
            members: Vec::new(),
        }
    }

    /// Data-section size in words.
    pub fn data_words(mut self, words: u16) -> Self {
        self.data_words = words;
        self
    }

    /// Pointer-section size in pointers.
    pub fn pointers(mut self, count: u16) -> Self {
        self.pointer_count = count;
        self
    }

    /// Encoding a list of this struct may be packed to.
    pub fn preferred_list_encoding(mut self, encoding: ElementSize) -> Self {
        self.preferred_list_encoding = encoding;
        self
    }

    /// Append a field member at the given offset (in multiples of the
    /// field width).
    pub fn field(mut self, name: impl Into<String>, offset: u32, ty: Type, default: Value) -> Self {
        let ordinal = self.members.len() as u16;
        self.members.push(Member {
            name: name.into(),
            ordinal,
            body: MemberBody::Field(Field {
                offset,
                index: 0,
                ty,
                default,
            }),
        });
        self
    }

    /// Append a union member whose discriminant lives at
    /// `discriminant_offset` (in two-byte units). The closure adds the
    /// union's fields in discriminant order.
    pub fn union(
        mut self,
        name: impl Into<String>,
        discriminant_offset: u32,
        build: impl FnOnce(UnionBuilder) -> UnionBuilder,
    ) -> Self {
        let ordinal = self.members.len() as u16;
        let union_builder = build(UnionBuilder::new(discriminant_offset));
        self.members.push(Member {
            name: name.into(),
            ordinal,
            body: MemberBody::Union(union_builder.finish()),
        });
        self
    }

    /// Finish the node.
    pub fn build(self) -> Node {
        Node {
            id: self.id,
            name: self.name,
            body: NodeBody::Struct(StructNode {
                data_words: self.data_words,
                pointer_count: self.pointer_count,
                preferred_list_encoding: self.preferred_list_encoding,
                members: self.members,
            }),
        }
    }
}

/// Assembles the member list of one union. Field indices are assigned
/// in call order and double as the discriminant values.
pub struct UnionBuilder {
    discriminant_offset: u32,
    members: Vec<Member>,
}

impl UnionBuilder {
    fn new(discriminant_offset: u32) -> Self {
        Self {
            discriminant_offset,
            members: Vec::new(),
        }
    }

    /// Append a union field.
    pub fn field(mut self, name: impl Into<String>, offset: u32, ty: Type, default: Value) -> Self {
        let index = self.members.len() as u16;
        self.members.push(Member {
            name: name.into(),
            ordinal: index,
            body: MemberBody::Field(Field {
                offset,
                index,
                ty,
                default,
            }),
        });
        self
    }

    fn finish(self) -> UnionNode {
        UnionNode {
            discriminant_offset: self.discriminant_offset,
            members: self.members,
        }
    }
}

/// Assembles an enum node. Enumerant values are assigned in call order.
///
/// ```
/// use dynwire::schema::EnumNodeBuilder;
///
/// let node = EnumNodeBuilder::new(0x2001, "Color")
///     .enumerant("red")
///     .enumerant("green")
///     .enumerant("blue")
///     .build();
/// ```
pub struct EnumNodeBuilder {
    id: u64,
    name: String,
    enumerants: Vec<Enumerant>,
}

impl EnumNodeBuilder {
    /// Start an enum node with the given id and display name.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            enumerants: Vec::new(),
        }
    }

    /// Append an enumerant; its value is its position.
    pub fn enumerant(mut self, name: impl Into<String>) -> Self {
        let ordinal = self.enumerants.len() as u16;
        self.enumerants.push(Enumerant {
            name: name.into(),
            ordinal,
        });
        self
    }

    /// Finish the node.
    pub fn build(self) -> Node {
        Node {
            id: self.id,
            name: self.name,
            body: NodeBody::Enum(EnumNode {
                enumerants: self.enumerants,
            }),
        }
    }
}
