// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Canonical list type descriptor.

use super::nodes::{Type, TypeKind};
use crate::wire::ElementSize;

/// A list type canonicalized to `(innermost element kind, nesting
/// depth, element type id)`.
///
/// `List(List(Int16))` is stored as `(Int16, depth 1)` when describing
/// the outer list's elements: each descent through a nesting level
/// decrements the depth, and at depth zero the element kind determines
/// the physical layout. This is what lets a list-element accessor pick
/// the right element size at every level without compile-time type
/// knowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSchema {
    /// Innermost (non-list) element kind.
    pub element_kind: TypeKind,
    /// Number of list levels wrapped around the innermost kind.
    pub depth: u8,
    /// Node id for enum/struct/interface element kinds, zero otherwise.
    pub element_id: u64,
}

impl ListSchema {
    /// Canonicalize the element type of a list.
    pub fn of(element: &Type) -> Self {
        let mut depth = 0u8;
        let mut innermost = element;
        while let Type::List(inner) = innermost {
            depth += 1;
            innermost = inner;
        }
        Self {
            element_kind: innermost.kind(),
            depth,
            element_id: innermost.type_id().unwrap_or(0),
        }
    }

    /// Physical size of one element at this level: sub-list references
    /// above depth zero, the innermost kind's size at depth zero.
    pub fn element_size(&self) -> ElementSize {
        if self.depth > 0 {
            ElementSize::Pointer
        } else {
            self.element_kind.element_size()
        }
    }

    /// Descriptor of the sub-lists one level down.
    ///
    /// # Panics
    /// At depth zero there is no level below (caller contract).
    pub fn inner(&self) -> Self {
        assert!(self.depth > 0, "list schema has no inner level at depth 0");
        Self {
            element_kind: self.element_kind,
            depth: self.depth - 1,
            element_id: self.element_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_list() {
        let schema = ListSchema::of(&Type::Int16);
        assert_eq!(schema.element_kind, TypeKind::Int16);
        assert_eq!(schema.depth, 0);
        assert_eq!(schema.element_id, 0);
        assert_eq!(schema.element_size(), ElementSize::TwoBytes);
    }

    #[test]
    fn test_nested_list_counts_depth() {
        let element = Type::List(Box::new(Type::List(Box::new(Type::Float32))));
        let schema = ListSchema::of(&element);
        assert_eq!(schema.element_kind, TypeKind::Float32);
        assert_eq!(schema.depth, 2);
        assert_eq!(schema.element_size(), ElementSize::Pointer);

        let inner = schema.inner();
        assert_eq!(inner.depth, 1);
        assert_eq!(inner.element_size(), ElementSize::Pointer);
        assert_eq!(inner.inner().element_size(), ElementSize::FourBytes);
    }

    #[test]
    fn test_struct_element_carries_id() {
        let schema = ListSchema::of(&Type::Struct(0xBEEF));
        assert_eq!(schema.element_kind, TypeKind::Struct);
        assert_eq!(schema.element_id, 0xBEEF);
        assert_eq!(schema.element_size(), ElementSize::InlineComposite);
    }

    #[test]
    #[should_panic(expected = "no inner level")]
    fn test_inner_at_depth_zero_panics() {
        let _ = ListSchema::of(&Type::Bool).inner();
    }
}
