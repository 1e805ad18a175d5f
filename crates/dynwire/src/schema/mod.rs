// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! In-memory schema model and lookup pool.
//!
//! A schema is a set of [`Node`]s, each describing one user-defined
//! struct, enum or interface under a globally unique 64-bit id. Nodes
//! reference each other by id, never by pointer; the [`SchemaPool`]
//! resolves those references and offers fast name-based lookup of
//! struct members and enumerants. The pool borrows the nodes it indexes
//! and is construct-then-freeze: after the last `add_no_copy` it may be
//! shared by reference across threads for reading.

mod builder;
mod list;
mod nodes;
mod pool;

pub use builder::{EnumNodeBuilder, StructNodeBuilder, UnionBuilder};
pub use list::ListSchema;
pub use nodes::{
    EnumNode, EnumSchema, Enumerant, Field, InterfaceNode, Member, MemberBody, Node, NodeBody,
    StructNode, StructSchema, Type, TypeKind, UnionNode, Value,
};
pub use pool::{FoundEnumerant, SchemaPool};
