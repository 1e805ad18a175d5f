// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema-driven reflection over encoded messages.
//!
//! Given a [`SchemaPool`](crate::schema::SchemaPool) and a message,
//! this layer reads and writes fields by member descriptor or by name
//! without any generated code for the types concerned. Every
//! navigation step yields a [`DynamicValue`] (or its builder flavor);
//! mutation coerces a value to the declared kind and forwards it to
//! the wire setters.
//!
//! # Example
//!
//! ```
//! use dynwire::schema::{SchemaPool, StructNodeBuilder, Type, Value};
//! use dynwire::wire::MessageBuilder;
//!
//! let node = StructNodeBuilder::new(0x1001, "Reading")
//!     .data_words(1)
//!     .field("celsius", 0, Type::Float64, Value::Float64(0.0))
//!     .build();
//! let mut pool = SchemaPool::new();
//! pool.add_no_copy(&node);
//!
//! let message = MessageBuilder::new();
//! let root = message.init_root(&pool, 0x1001);
//! root.set("celsius", 21.5f64.into());
//! assert_eq!(root.get("celsius").as_f64(), 21.5);
//!
//! let frozen = message.into_reader();
//! assert_eq!(frozen.get_root(&pool, 0x1001).get("celsius").as_f64(), 21.5);
//! ```
//!
//! # Error model
//!
//! Caller bugs (out-of-bounds indices, unknown ids or member names)
//! panic. Bad data and type mismatches are reported through the
//! logging macros and recovered with the zero value or empty reader of
//! the requested kind. Known gaps (deep `copy_from`, interface access)
//! are reported as not implemented.

mod enums;
mod lists;
mod object;
mod root;
mod structs;
mod value;

pub use enums::DynamicEnum;
pub use lists::{DynamicList, DynamicListBuilder};
pub use object::{DynamicObject, DynamicObjectBuilder};
pub use structs::{
    DynamicStruct, DynamicStructBuilder, DynamicUnion, DynamicUnionBuilder,
};
pub use value::{DynamicValue, DynamicValueBuilder};

#[cfg(test)]
mod tests;
