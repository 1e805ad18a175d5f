// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Word-level wire format.
//!
//! Messages are sequences of 8-byte little-endian words in a single
//! segment. Word 0 holds the root pointer. A struct is a data section
//! (whole words of packed primitives) followed by a pointer section; a
//! list is a run of packed elements whose physical size is one of eight
//! encodings. Structs inside lists use the inline-composite encoding: a
//! tag word followed by the element bodies.
//!
//! The reflection layer above never touches bytes directly; it goes
//! through the cursor verbs defined here ([`StructReader`],
//! [`StructBuilder`], [`ListReader`], [`ListBuilder`] and the blob and
//! object accessors). All reads are bounds-checked: data reads outside
//! the data section return the XOR default mask, malformed pointers are
//! reported and read as empty.

mod builder;
mod message;
mod pointer;
mod reader;

pub use builder::{ListBuilder, MessageBuilder, ObjectBuilder, StructBuilder};
pub use message::MessageReader;
pub use reader::{ListReader, ObjectReader, StructReader};

pub(crate) use pointer::{
    encode_list_pointer, encode_struct_pointer, resolve_target, WirePointer,
};

/// Bytes per wire word.
pub const BYTES_PER_WORD: usize = 8;

/// Physical encoding of one list element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementSize {
    /// Zero bits; the list is length-only.
    Void,
    /// One bit, packed.
    Bit,
    /// One byte.
    Byte,
    /// Two bytes.
    TwoBytes,
    /// Four bytes.
    FourBytes,
    /// Eight bytes.
    EightBytes,
    /// One pointer word referencing the element body.
    Pointer,
    /// Struct elements laid out back-to-back after a tag word.
    InlineComposite,
}

impl ElementSize {
    /// Wire code (3 bits) for this encoding.
    pub const fn code(self) -> u8 {
        match self {
            Self::Void => 0,
            Self::Bit => 1,
            Self::Byte => 2,
            Self::TwoBytes => 3,
            Self::FourBytes => 4,
            Self::EightBytes => 5,
            Self::Pointer => 6,
            Self::InlineComposite => 7,
        }
    }

    /// Decode a 3-bit wire code. Codes 0-7 are all defined.
    pub const fn from_code(code: u8) -> Self {
        match code & 7 {
            0 => Self::Void,
            1 => Self::Bit,
            2 => Self::Byte,
            3 => Self::TwoBytes,
            4 => Self::FourBytes,
            5 => Self::EightBytes,
            6 => Self::Pointer,
            _ => Self::InlineComposite,
        }
    }

    /// Bits occupied by one element. Inline-composite strides are taken
    /// from the tag word instead.
    pub const fn data_bits(self) -> u64 {
        match self {
            Self::Void => 0,
            Self::Bit => 1,
            Self::Byte => 8,
            Self::TwoBytes => 16,
            Self::FourBytes => 32,
            Self::EightBytes | Self::Pointer => 64,
            Self::InlineComposite => 0,
        }
    }

    /// Total bytes a list of `count` elements occupies, rounded up to
    /// whole bytes. Not meaningful for inline-composite.
    pub(crate) const fn byte_len(self, count: u32) -> usize {
        ((count as u64 * self.data_bits() + 7) / 8) as usize
    }
}

/// Size of one struct instance, as carried by a struct schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructSize {
    /// Data section size in words.
    pub data_words: u16,
    /// Pointer section size in pointers.
    pub pointer_count: u16,
    /// Encoding a list of this struct may be packed to. Lists are
    /// currently always allocated inline-composite; the preference is
    /// carried for schema fidelity.
    pub preferred_list_encoding: ElementSize,
}

impl StructSize {
    /// Create a struct size.
    pub const fn new(
        data_words: u16,
        pointer_count: u16,
        preferred_list_encoding: ElementSize,
    ) -> Self {
        Self {
            data_words,
            pointer_count,
            preferred_list_encoding,
        }
    }

    /// Total words occupied by one instance.
    pub const fn total_words(self) -> u32 {
        self.data_words as u32 + self.pointer_count as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_size_codes_roundtrip() {
        for code in 0..8u8 {
            assert_eq!(ElementSize::from_code(code).code(), code);
        }
    }

    #[test]
    fn test_element_size_bits() {
        assert_eq!(ElementSize::Void.data_bits(), 0);
        assert_eq!(ElementSize::Bit.data_bits(), 1);
        assert_eq!(ElementSize::Byte.data_bits(), 8);
        assert_eq!(ElementSize::TwoBytes.data_bits(), 16);
        assert_eq!(ElementSize::FourBytes.data_bits(), 32);
        assert_eq!(ElementSize::EightBytes.data_bits(), 64);
        assert_eq!(ElementSize::Pointer.data_bits(), 64);
    }

    #[test]
    fn test_byte_len_rounds_up() {
        assert_eq!(ElementSize::Bit.byte_len(9), 2);
        assert_eq!(ElementSize::Byte.byte_len(3), 3);
        assert_eq!(ElementSize::TwoBytes.byte_len(5), 10);
        assert_eq!(ElementSize::Void.byte_len(1000), 0);
    }

    #[test]
    fn test_struct_size_total() {
        let size = StructSize::new(2, 3, ElementSize::InlineComposite);
        assert_eq!(size.total_words(), 5);
    }
}
