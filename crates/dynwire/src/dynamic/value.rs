// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Discriminated dynamic values.
//!
//! A [`DynamicValue`] carries any readable kind behind a tag equal to
//! the schema kind that produced it. Accessors check the tag on every
//! access: a mismatched primitive or blob accessor reports the
//! violation and returns the zero value of the requested kind so the
//! caller can continue in recovery mode; mismatched composite accessors
//! report and return `None`.

use super::enums::DynamicEnum;
use super::lists::{DynamicList, DynamicListBuilder};
use super::object::{DynamicObject, DynamicObjectBuilder};
use super::structs::{DynamicStruct, DynamicStructBuilder};
use crate::schema::TypeKind;

/// Generate zero-defaulting primitive accessors for reader values.
macro_rules! impl_as_primitive {
    ($name:ident, $variant:ident, $ty:ty, $label:expr) => {
        pub fn $name(&self) -> $ty {
            match self {
                Self::$variant(v) => *v,
                other => {
                    crate::error!(
                        "type mismatch: expected a {} value, found {:?}",
                        $label,
                        other.kind()
                    );
                    Default::default()
                }
            }
        }
    };
}

/// Generate `Option`-returning composite accessors.
macro_rules! impl_as_composite {
    ($name:ident, $variant:ident, $ty:ty, $label:expr) => {
        pub fn $name(&self) -> Option<$ty> {
            match self {
                Self::$variant(v) => Some(*v),
                other => {
                    crate::error!(
                        "type mismatch: expected a {} value, found {:?}",
                        $label,
                        other.kind()
                    );
                    None
                }
            }
        }
    };
}

/// A read-side value of any kind.
#[derive(Clone, Copy)]
pub enum DynamicValue<'a> {
    Void,
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    Text(&'a str),
    Data(&'a [u8]),
    List(DynamicList<'a>),
    Enum(DynamicEnum<'a>),
    Struct(DynamicStruct<'a>),
    Object(DynamicObject<'a>),
}

impl<'a> DynamicValue<'a> {
    /// The tag of this value.
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Void => TypeKind::Void,
            Self::Bool(_) => TypeKind::Bool,
            Self::Int8(_) => TypeKind::Int8,
            Self::Int16(_) => TypeKind::Int16,
            Self::Int32(_) => TypeKind::Int32,
            Self::Int64(_) => TypeKind::Int64,
            Self::Uint8(_) => TypeKind::Uint8,
            Self::Uint16(_) => TypeKind::Uint16,
            Self::Uint32(_) => TypeKind::Uint32,
            Self::Uint64(_) => TypeKind::Uint64,
            Self::Float32(_) => TypeKind::Float32,
            Self::Float64(_) => TypeKind::Float64,
            Self::Text(_) => TypeKind::Text,
            Self::Data(_) => TypeKind::Data,
            Self::List(_) => TypeKind::List,
            Self::Enum(_) => TypeKind::Enum,
            Self::Struct(_) => TypeKind::Struct,
            Self::Object(_) => TypeKind::Object,
        }
    }

    /// Tag check for void; a mismatch is reported and ignored.
    pub fn as_void(&self) {
        if !matches!(self, Self::Void) {
            crate::error!(
                "type mismatch: expected a void value, found {:?}",
                self.kind()
            );
        }
    }

    impl_as_primitive!(as_bool, Bool, bool, "bool");
    impl_as_primitive!(as_i8, Int8, i8, "int8");
    impl_as_primitive!(as_i16, Int16, i16, "int16");
    impl_as_primitive!(as_i32, Int32, i32, "int32");
    impl_as_primitive!(as_i64, Int64, i64, "int64");
    impl_as_primitive!(as_u8, Uint8, u8, "uint8");
    impl_as_primitive!(as_u16, Uint16, u16, "uint16");
    impl_as_primitive!(as_u32, Uint32, u32, "uint32");
    impl_as_primitive!(as_u64, Uint64, u64, "uint64");
    impl_as_primitive!(as_f32, Float32, f32, "float32");
    impl_as_primitive!(as_f64, Float64, f64, "float64");
    impl_as_primitive!(as_text, Text, &'a str, "text");
    impl_as_primitive!(as_data, Data, &'a [u8], "data");

    impl_as_composite!(as_list, List, DynamicList<'a>, "list");
    impl_as_composite!(as_enum, Enum, DynamicEnum<'a>, "enum");
    impl_as_composite!(as_struct, Struct, DynamicStruct<'a>, "struct");
    impl_as_composite!(as_object, Object, DynamicObject<'a>, "object");
}

macro_rules! impl_from_value {
    ($ty:ty, $variant:ident) => {
        impl<'a> From<$ty> for DynamicValue<'a> {
            fn from(v: $ty) -> Self {
                Self::$variant(v)
            }
        }
    };
}

impl_from_value!(bool, Bool);
impl_from_value!(i8, Int8);
impl_from_value!(i16, Int16);
impl_from_value!(i32, Int32);
impl_from_value!(i64, Int64);
impl_from_value!(u8, Uint8);
impl_from_value!(u16, Uint16);
impl_from_value!(u32, Uint32);
impl_from_value!(u64, Uint64);
impl_from_value!(f32, Float32);
impl_from_value!(f64, Float64);

impl<'a> From<&'a str> for DynamicValue<'a> {
    fn from(v: &'a str) -> Self {
        Self::Text(v)
    }
}

impl<'a> From<&'a [u8]> for DynamicValue<'a> {
    fn from(v: &'a [u8]) -> Self {
        Self::Data(v)
    }
}

impl<'a> From<DynamicList<'a>> for DynamicValue<'a> {
    fn from(v: DynamicList<'a>) -> Self {
        Self::List(v)
    }
}

impl<'a> From<DynamicEnum<'a>> for DynamicValue<'a> {
    fn from(v: DynamicEnum<'a>) -> Self {
        Self::Enum(v)
    }
}

impl<'a> From<DynamicStruct<'a>> for DynamicValue<'a> {
    fn from(v: DynamicStruct<'a>) -> Self {
        Self::Struct(v)
    }
}

impl<'a> From<DynamicObject<'a>> for DynamicValue<'a> {
    fn from(v: DynamicObject<'a>) -> Self {
        Self::Object(v)
    }
}

/// Generate zero-defaulting primitive accessors for builder values.
macro_rules! impl_as_primitive_builder {
    ($name:ident, $variant:ident, $ty:ty, $label:expr) => {
        pub fn $name(&self) -> $ty {
            match self {
                Self::$variant(v) => *v,
                other => {
                    crate::error!(
                        "type mismatch: expected a {} value, found {:?}",
                        $label,
                        other.kind()
                    );
                    Default::default()
                }
            }
        }
    };
}

/// A write-side value of any kind.
///
/// Blob payloads are owned snapshots (the build arena uses interior
/// mutability, so borrowing out of it is not possible); composite
/// payloads are live builder cursors.
#[derive(Clone)]
pub enum DynamicValueBuilder<'a> {
    Void,
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    Text(String),
    Data(Vec<u8>),
    List(DynamicListBuilder<'a>),
    Enum(DynamicEnum<'a>),
    Struct(DynamicStructBuilder<'a>),
    Object(DynamicObjectBuilder<'a>),
}

impl<'a> DynamicValueBuilder<'a> {
    /// The tag of this value.
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Void => TypeKind::Void,
            Self::Bool(_) => TypeKind::Bool,
            Self::Int8(_) => TypeKind::Int8,
            Self::Int16(_) => TypeKind::Int16,
            Self::Int32(_) => TypeKind::Int32,
            Self::Int64(_) => TypeKind::Int64,
            Self::Uint8(_) => TypeKind::Uint8,
            Self::Uint16(_) => TypeKind::Uint16,
            Self::Uint32(_) => TypeKind::Uint32,
            Self::Uint64(_) => TypeKind::Uint64,
            Self::Float32(_) => TypeKind::Float32,
            Self::Float64(_) => TypeKind::Float64,
            Self::Text(_) => TypeKind::Text,
            Self::Data(_) => TypeKind::Data,
            Self::List(_) => TypeKind::List,
            Self::Enum(_) => TypeKind::Enum,
            Self::Struct(_) => TypeKind::Struct,
            Self::Object(_) => TypeKind::Object,
        }
    }

    impl_as_primitive_builder!(as_bool, Bool, bool, "bool");
    impl_as_primitive_builder!(as_i8, Int8, i8, "int8");
    impl_as_primitive_builder!(as_i16, Int16, i16, "int16");
    impl_as_primitive_builder!(as_i32, Int32, i32, "int32");
    impl_as_primitive_builder!(as_i64, Int64, i64, "int64");
    impl_as_primitive_builder!(as_u8, Uint8, u8, "uint8");
    impl_as_primitive_builder!(as_u16, Uint16, u16, "uint16");
    impl_as_primitive_builder!(as_u32, Uint32, u32, "uint32");
    impl_as_primitive_builder!(as_u64, Uint64, u64, "uint64");
    impl_as_primitive_builder!(as_f32, Float32, f32, "float32");
    impl_as_primitive_builder!(as_f64, Float64, f64, "float64");

    /// Text payload; a mismatch is reported and reads as empty.
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(v) => v.clone(),
            other => {
                crate::error!(
                    "type mismatch: expected a text value, found {:?}",
                    other.kind()
                );
                String::new()
            }
        }
    }

    /// Data payload; a mismatch is reported and reads as empty.
    pub fn as_data(&self) -> Vec<u8> {
        match self {
            Self::Data(v) => v.clone(),
            other => {
                crate::error!(
                    "type mismatch: expected a data value, found {:?}",
                    other.kind()
                );
                Vec::new()
            }
        }
    }

    /// List cursor, if this value is a list.
    pub fn as_list(&self) -> Option<DynamicListBuilder<'a>> {
        match self {
            Self::List(v) => Some(*v),
            other => {
                crate::error!(
                    "type mismatch: expected a list value, found {:?}",
                    other.kind()
                );
                None
            }
        }
    }

    /// Enum payload, if this value is an enum.
    pub fn as_enum(&self) -> Option<DynamicEnum<'a>> {
        match self {
            Self::Enum(v) => Some(*v),
            other => {
                crate::error!(
                    "type mismatch: expected an enum value, found {:?}",
                    other.kind()
                );
                None
            }
        }
    }

    /// Struct cursor, if this value is a struct.
    pub fn as_struct(&self) -> Option<DynamicStructBuilder<'a>> {
        match self {
            Self::Struct(v) => Some(*v),
            other => {
                crate::error!(
                    "type mismatch: expected a struct value, found {:?}",
                    other.kind()
                );
                None
            }
        }
    }

    /// Object cursor, if this value is an object.
    pub fn as_object(&self) -> Option<DynamicObjectBuilder<'a>> {
        match self {
            Self::Object(v) => Some(*v),
            other => {
                crate::error!(
                    "type mismatch: expected an object value, found {:?}",
                    other.kind()
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_tags() {
        assert_eq!(DynamicValue::from(true).kind(), TypeKind::Bool);
        assert_eq!(DynamicValue::from(-1i32).kind(), TypeKind::Int32);
        assert_eq!(DynamicValue::from(1.5f64).kind(), TypeKind::Float64);
        assert_eq!(DynamicValue::from("hi").kind(), TypeKind::Text);
    }

    #[test]
    fn test_matching_accessors() {
        assert_eq!(DynamicValue::from(42i32).as_i32(), 42);
        assert_eq!(DynamicValue::from(7u64).as_u64(), 7);
        assert_eq!(DynamicValue::from("abc").as_text(), "abc");
        let bytes: &[u8] = &[1, 2, 3];
        assert_eq!(DynamicValue::from(bytes).as_data(), bytes);
    }

    #[test]
    fn test_mismatch_recovers_with_zero() {
        let value = DynamicValue::from(42i32);
        assert_eq!(value.as_u16(), 0);
        assert_eq!(value.as_f64(), 0.0);
        assert_eq!(value.as_text(), "");
        assert!(value.as_struct().is_none());
        assert!(value.as_enum().is_none());
        value.as_void();
    }

    #[test]
    fn test_builder_value_mismatch_recovers() {
        let value = DynamicValueBuilder::Int8(5);
        assert_eq!(value.as_i8(), 5);
        assert_eq!(value.as_i64(), 0);
        assert_eq!(value.as_text(), "");
        assert!(value.as_list().is_none());
    }
}
