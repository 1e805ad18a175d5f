// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # DynWire - schema-driven reflection for a fixed binary record format
//!
//! A runtime for reflective access to messages encoded in a fixed
//! word-oriented wire format. Given a schema (struct, enum, list and
//! union descriptions indexed by 64-bit ids) and a raw message buffer,
//! callers read fields by name or descriptor and mutate writable
//! messages with no code generation for the types concerned.
//!
//! ## Quick Start
//!
//! ```
//! use dynwire::schema::{SchemaPool, StructNodeBuilder, Type, Value};
//! use dynwire::wire::MessageBuilder;
//!
//! // Describe a struct: one data word, an i32 at offset 0 with
//! // default -7.
//! let node = StructNodeBuilder::new(0xA11CE, "Sample")
//!     .data_words(1)
//!     .field("count", 0, Type::Int32, Value::Int32(-7))
//!     .build();
//!
//! let mut pool = SchemaPool::new();
//! pool.add_no_copy(&node);
//!
//! // Build a message against that schema.
//! let message = MessageBuilder::new();
//! let root = message.init_root(&pool, 0xA11CE);
//! assert_eq!(root.get("count").as_i32(), -7); // absent -> default
//! root.set("count", 42i32.into());
//!
//! // Freeze and read it back.
//! let frozen = message.into_reader();
//! assert_eq!(frozen.get_root(&pool, 0xA11CE).get("count").as_i32(), 42);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +------------------------------------------------------------------+
//! |                        Reflection Layer                          |
//! |  DynamicStruct / DynamicList / DynamicUnion / DynamicEnum /      |
//! |  DynamicObject  -- tag-checked DynamicValue in and out           |
//! +------------------------------------------------------------------+
//! |                          Schema Layer                            |
//! |  Node graph by 64-bit id | SchemaPool name maps | ListSchema     |
//! +------------------------------------------------------------------+
//! |                           Wire Layer                             |
//! |  StructReader/Builder | ListReader/Builder | pointer codec |     |
//! |  single-segment message arena                                    |
//! +------------------------------------------------------------------+
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`schema::SchemaPool`] | Borrowing index of schema nodes with name-based member lookup |
//! | [`dynamic::DynamicStruct`] | Read cursor over one struct against its schema |
//! | [`dynamic::DynamicStructBuilder`] | Write cursor with `set`/`init` field dispatch |
//! | [`dynamic::DynamicValue`] | Discriminated value covering every readable kind |
//! | [`wire::MessageBuilder`] | Growable single-segment message arena |
//!
//! ## Error model
//!
//! Caller bugs abort with a descriptive panic; malformed data and type
//! mismatches are reported through the crate's logging macros and
//! recovered with zero values or empty readers, so consumers can keep
//! walking a suspect message. See the [`dynamic`] module docs.

/// Schema-driven reflection: dynamic structs, lists, unions, enums and
/// objects.
pub mod dynamic;
/// Compile-time configurable logging (zero-cost when disabled).
pub mod logging;
/// Schema node model, pool and list descriptor.
pub mod schema;
/// Word-level wire format: cursors, pointer codec, message arena.
pub mod wire;

pub use dynamic::{
    DynamicEnum, DynamicList, DynamicListBuilder, DynamicObject, DynamicObjectBuilder,
    DynamicStruct, DynamicStructBuilder, DynamicUnion, DynamicUnionBuilder, DynamicValue,
    DynamicValueBuilder,
};
pub use schema::{ListSchema, SchemaPool};
pub use wire::{MessageBuilder, MessageReader};

/// Crate version string.
pub const VERSION: &str = "0.2.0";
