// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema-driven root binding on the message types.

use super::structs::{DynamicStruct, DynamicStructBuilder};
use crate::schema::SchemaPool;
use crate::wire::{MessageBuilder, MessageReader};

impl MessageReader {
    /// The root struct, read against the type registered under
    /// `type_id`.
    ///
    /// # Panics
    /// If the pool does not hold a struct node under `type_id` (caller
    /// contract).
    pub fn get_root<'a>(&'a self, pool: &'a SchemaPool<'a>, type_id: u64) -> DynamicStruct<'a> {
        DynamicStruct::new(pool, pool.get_struct(type_id), self.root())
    }
}

impl MessageBuilder {
    /// Allocate the root as a struct of the type registered under
    /// `type_id`.
    ///
    /// # Panics
    /// If the pool does not hold a struct node under `type_id` (caller
    /// contract).
    pub fn init_root<'a>(
        &'a self,
        pool: &'a SchemaPool<'a>,
        type_id: u64,
    ) -> DynamicStructBuilder<'a> {
        let schema = pool.get_struct(type_id);
        DynamicStructBuilder::new(pool, schema, self.init_root_raw(schema.struct_size()))
    }

    /// The existing root, re-interpreted against the type registered
    /// under `type_id` (allocated with that type's size if unset).
    ///
    /// # Panics
    /// If the pool does not hold a struct node under `type_id` (caller
    /// contract).
    pub fn get_root<'a>(
        &'a self,
        pool: &'a SchemaPool<'a>,
        type_id: u64,
    ) -> DynamicStructBuilder<'a> {
        let schema = pool.get_struct(type_id);
        DynamicStructBuilder::new(pool, schema, self.get_root_raw(schema.struct_size()))
    }
}
