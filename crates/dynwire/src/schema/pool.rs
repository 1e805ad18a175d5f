// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema pool: id and name indices over borrowed nodes.

use super::nodes::{EnumSchema, Enumerant, Member, MemberBody, Node, NodeBody, StructSchema};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Composite key for the name maps. Hashing folds the member name into
/// the parent id with a djb2a variant seeded by the id, so identical
/// names under different parents land in different buckets; equality is
/// byte-exact including length.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct NameKey<'a> {
    id: u64,
    name: &'a str,
}

impl Hash for NameKey<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut h = self.id;
        for &byte in self.name.as_bytes() {
            // (h * 33) ^ byte
            h = (h << 5).wrapping_add(h) ^ u64::from(byte);
        }
        state.write_u64(h);
    }
}

/// Result of an enumerant name lookup.
#[derive(Debug, Clone, Copy)]
pub struct FoundEnumerant<'a> {
    /// The enumerant's raw value (its position in the enum node).
    pub value: u16,
    pub enumerant: &'a Enumerant,
}

/// Lookup indices over a set of schema nodes.
///
/// The pool borrows the nodes; nothing is copied. It is
/// construct-then-freeze: populate it with [`add_no_copy`] before
/// sharing it, then share `&SchemaPool` freely across threads.
/// An optional parent pool serves as a fallback for [`has`] only.
///
/// [`add_no_copy`]: SchemaPool::add_no_copy
/// [`has`]: SchemaPool::has
#[derive(Default)]
pub struct SchemaPool<'a> {
    base: Option<&'a SchemaPool<'a>>,
    nodes: HashMap<u64, &'a Node>,
    members: HashMap<NameKey<'a>, &'a Member>,
    enumerants: HashMap<NameKey<'a>, FoundEnumerant<'a>>,
}

impl<'a> SchemaPool<'a> {
    /// An empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty pool chained to a parent consulted by `has`.
    pub fn with_base(base: &'a SchemaPool<'a>) -> Self {
        Self {
            base: Some(base),
            ..Self::default()
        }
    }

    /// Copy a node into the pool.
    ///
    /// # Panics
    /// Always: copying and validating schemas is not implemented. Use
    /// [`add_no_copy`](Self::add_no_copy) with a node that outlives the
    /// pool.
    pub fn add(&mut self, _node: &Node) {
        panic!("not implemented: copying/validating schemas");
    }

    /// Index one node and its members/enumerants. The node is borrowed,
    /// not copied.
    ///
    /// # Panics
    /// If a node with the same id is already present: the compatibility
    /// check between duplicate schemas is not implemented.
    pub fn add_no_copy(&mut self, node: &'a Node) {
        crate::trace_fn!("schema::pool::add_no_copy");
        if self.nodes.insert(node.id, node).is_some() {
            panic!(
                "schema compatibility check not implemented: duplicate id {:#018x}",
                node.id
            );
        }
        crate::debug!("registered schema node {:#018x} ({})", node.id, node.name);
        match &node.body {
            NodeBody::Struct(body) => self.index_members(node.id, &body.members),
            NodeBody::Enum(body) => {
                for (position, enumerant) in body.enumerants.iter().enumerate() {
                    self.enumerants.insert(
                        NameKey {
                            id: node.id,
                            name: &enumerant.name,
                        },
                        FoundEnumerant {
                            value: position as u16,
                            enumerant,
                        },
                    );
                }
            }
            NodeBody::Interface(_) => {}
        }
    }

    /// Union members share the parent struct's name space.
    fn index_members(&mut self, id: u64, members: &'a [Member]) {
        for member in members {
            self.members.insert(
                NameKey {
                    id,
                    name: &member.name,
                },
                member,
            );
            if let MemberBody::Union(union) = &member.body {
                self.index_members(id, &union.members);
            }
        }
    }

    /// Whether `id` is known here or in the base chain.
    pub fn has(&self, id: u64) -> bool {
        self.nodes.contains_key(&id) || self.base.is_some_and(|base| base.has(id))
    }

    /// The node registered under `id`, if any. Does not consult the
    /// base chain.
    pub fn get(&self, id: u64) -> Option<&'a Node> {
        self.nodes.get(&id).copied()
    }

    /// The struct node registered under `id`.
    ///
    /// # Panics
    /// If the id is unknown or names a non-struct node (caller
    /// contract: operating on a schema the pool does not hold).
    pub fn get_struct(&self, id: u64) -> StructSchema<'a> {
        match self.get(id) {
            Some(node) => StructSchema::from_node(node),
            None => panic!("schema pool has no node {:#018x}", id),
        }
    }

    /// The enum node registered under `id`.
    ///
    /// # Panics
    /// If the id is unknown or names a non-enum node.
    pub fn get_enum(&self, id: u64) -> EnumSchema<'a> {
        match self.get(id) {
            Some(node) => EnumSchema::from_node(node),
            None => panic!("schema pool has no node {:#018x}", id),
        }
    }

    /// The interface node registered under `id`. Interface access
    /// itself is not implemented; only the node can be resolved.
    ///
    /// # Panics
    /// If the id is unknown or names a non-interface node.
    pub fn get_interface(&self, id: u64) -> &'a Node {
        match self.get(id) {
            Some(node) if matches!(node.body, NodeBody::Interface(_)) => node,
            Some(node) => panic!(
                "schema node {:#018x} ({}) is not an interface",
                node.id, node.name
            ),
            None => panic!("schema pool has no node {:#018x}", id),
        }
    }

    /// Member of struct `id` with the given name, if registered.
    pub fn find_member(&self, id: u64, name: &str) -> Option<&'a Member> {
        self.members.get(&NameKey { id, name }).copied()
    }

    /// Enumerant of enum `id` with the given name, if registered.
    pub fn find_enumerant(&self, id: u64, name: &str) -> Option<FoundEnumerant<'a>> {
        self.enumerants.get(&NameKey { id, name }).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EnumNodeBuilder, StructNodeBuilder, Type, Value};
    use std::collections::hash_map::DefaultHasher;

    fn hash_key(key: &NameKey<'_>) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_name_key_seeded_by_id() {
        let a = NameKey { id: 1, name: "x" };
        let b = NameKey { id: 2, name: "x" };
        assert_ne!(hash_key(&a), hash_key(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_member_lookup_including_union_fields() {
        let node = StructNodeBuilder::new(0x10, "S")
            .data_words(1)
            .pointers(1)
            .field("a", 0, Type::Int32, Value::Int32(0))
            .union("u", 2, |u| {
                u.field("x", 1, Type::Int32, Value::Int32(0))
                    .field("y", 0, Type::Text, Value::Text(String::new()))
            })
            .build();
        let mut pool = SchemaPool::new();
        pool.add_no_copy(&node);

        assert!(pool.find_member(0x10, "a").is_some());
        assert!(pool.find_member(0x10, "u").is_some());
        assert!(pool.find_member(0x10, "x").is_some());
        assert!(pool.find_member(0x10, "y").is_some());
        assert!(pool.find_member(0x10, "z").is_none());
        assert!(pool.find_member(0x11, "a").is_none());
    }

    #[test]
    fn test_enumerant_lookup() {
        let node = EnumNodeBuilder::new(0x20, "E")
            .enumerant("red")
            .enumerant("green")
            .enumerant("blue")
            .build();
        let mut pool = SchemaPool::new();
        pool.add_no_copy(&node);

        let found = pool.find_enumerant(0x20, "green").expect("green");
        assert_eq!(found.value, 1);
        assert_eq!(found.enumerant.name, "green");
        assert!(pool.find_enumerant(0x20, "purple").is_none());
    }

    #[test]
    #[should_panic(expected = "schema compatibility check not implemented")]
    fn test_duplicate_id_panics() {
        let node = StructNodeBuilder::new(0x30, "S").build();
        let twin = StructNodeBuilder::new(0x30, "S").build();
        let mut pool = SchemaPool::new();
        pool.add_no_copy(&node);
        pool.add_no_copy(&twin);
    }

    #[test]
    fn test_base_chain_serves_has_only() {
        let node = StructNodeBuilder::new(0x40, "S").build();
        let mut base = SchemaPool::new();
        base.add_no_copy(&node);

        let derived = SchemaPool::with_base(&base);
        assert!(derived.has(0x40));
        assert!(derived.get(0x40).is_none());
        assert!(!derived.has(0x41));
    }

    #[test]
    #[should_panic(expected = "not implemented: copying")]
    fn test_copying_add_is_stubbed() {
        let node = StructNodeBuilder::new(0x60, "S").build();
        let mut pool = SchemaPool::new();
        pool.add(&node);
    }

    #[test]
    fn test_frozen_pool_is_shareable() {
        fn assert_share<T: Send + Sync>() {}
        // Construct-then-freeze: a populated pool is shared by
        // reference across threads for reading.
        assert_share::<SchemaPool<'static>>();
    }

    #[test]
    #[should_panic(expected = "is not a struct")]
    fn test_get_struct_kind_checked() {
        let node = EnumNodeBuilder::new(0x50, "E").build();
        let mut pool = SchemaPool::new();
        pool.add_no_copy(&node);
        let _ = pool.get_struct(0x50);
    }
}
