// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Read-side cursors over an immutable segment.
//!
//! Cursors are cheap `Copy` values borrowing the segment. Data reads
//! outside the struct's data section return the XOR default mask, so an
//! absent field reads back as its declared default. Malformed pointers
//! are reported through `error!` and read as empty.

use super::{resolve_target, ElementSize, WirePointer, BYTES_PER_WORD};

#[inline]
fn read_word_at(segment: &[u8], at: usize) -> u64 {
    match segment.get(at..at + BYTES_PER_WORD) {
        Some(bytes) => {
            let mut buf = [0u8; BYTES_PER_WORD];
            buf.copy_from_slice(bytes);
            u64::from_le_bytes(buf)
        }
        None => 0,
    }
}

/// Resolve a struct pointer body, bounds-checking the target region.
fn resolve_struct(
    segment: &[u8],
    ptr_at: usize,
    offset: i32,
    data_words: u16,
    pointer_count: u16,
) -> Option<StructReader<'_>> {
    let target = resolve_target(ptr_at, offset)?;
    let total = (data_words as usize + pointer_count as usize) * BYTES_PER_WORD;
    if target + total > segment.len() {
        return None;
    }
    Some(StructReader {
        segment,
        data: target,
        data_words,
        ptrs: target + data_words as usize * BYTES_PER_WORD,
        ptr_count: pointer_count,
    })
}

/// Resolve a list pointer body. For inline-composite lists the element
/// count and per-element size come from the tag word; `element_count`
/// is the total word count in that case.
fn resolve_list(
    segment: &[u8],
    ptr_at: usize,
    offset: i32,
    element_size: ElementSize,
    element_count: u32,
) -> Option<ListReader<'_>> {
    let target = resolve_target(ptr_at, offset)?;
    if element_size == ElementSize::InlineComposite {
        let word_count = element_count as usize;
        if target + (1 + word_count) * BYTES_PER_WORD > segment.len() {
            return None;
        }
        match WirePointer::decode(read_word_at(segment, target)) {
            WirePointer::Struct {
                offset: count,
                data_words,
                pointer_count,
            } if count >= 0 => {
                let count = count as u32;
                let stride = data_words as usize + pointer_count as usize;
                if count as usize * stride > word_count {
                    return None;
                }
                Some(ListReader {
                    segment,
                    start: target + BYTES_PER_WORD,
                    count,
                    element_size,
                    struct_data_words: data_words,
                    struct_ptr_count: pointer_count,
                })
            }
            _ => None,
        }
    } else {
        if target + element_size.byte_len(element_count) > segment.len() {
            return None;
        }
        Some(ListReader {
            segment,
            start: target,
            count: element_count,
            element_size,
            struct_data_words: 0,
            struct_ptr_count: 0,
        })
    }
}

fn resolve_blob(
    segment: &[u8],
    ptr_at: usize,
    offset: i32,
    element_size: ElementSize,
    element_count: u32,
) -> Option<&[u8]> {
    if element_size != ElementSize::Byte {
        return None;
    }
    let target = resolve_target(ptr_at, offset)?;
    segment.get(target..target + element_count as usize)
}

/// Decode the struct pointer at byte offset `ptr_at`. Null reads as an
/// empty reader; anything other than a struct pointer is reported.
pub(crate) fn struct_reader_at(segment: &[u8], ptr_at: usize) -> StructReader<'_> {
    match WirePointer::decode(read_word_at(segment, ptr_at)) {
        WirePointer::Null => StructReader::empty(),
        WirePointer::Struct {
            offset,
            data_words,
            pointer_count,
        } => match resolve_struct(segment, ptr_at, offset, data_words, pointer_count) {
            Some(reader) => reader,
            None => {
                crate::error!("struct pointer points outside the message");
                StructReader::empty()
            }
        },
        _ => {
            crate::error!("expected a struct pointer");
            StructReader::empty()
        }
    }
}

/// Decode the list pointer at byte offset `ptr_at`. When `expected` is
/// given, a list of a different physical element size is reported and
/// read as empty.
pub(crate) fn list_reader_at(
    segment: &[u8],
    ptr_at: usize,
    expected: Option<ElementSize>,
) -> ListReader<'_> {
    let fallback = expected.unwrap_or(ElementSize::Void);
    match WirePointer::decode(read_word_at(segment, ptr_at)) {
        WirePointer::Null => ListReader::empty(fallback),
        WirePointer::List {
            offset,
            element_size,
            element_count,
        } => {
            if let Some(expected) = expected {
                if element_size != expected {
                    crate::error!(
                        "list has element size {:?} where {:?} was expected",
                        element_size,
                        expected
                    );
                    return ListReader::empty(fallback);
                }
            }
            match resolve_list(segment, ptr_at, offset, element_size, element_count) {
                Some(reader) => reader,
                None => {
                    crate::error!("list pointer points outside the message");
                    ListReader::empty(fallback)
                }
            }
        }
        _ => {
            crate::error!("expected a list pointer");
            ListReader::empty(fallback)
        }
    }
}

/// Decode the pointer at `ptr_at` as a type-erased object.
pub(crate) fn object_reader_at(segment: &[u8], ptr_at: usize) -> ObjectReader<'_> {
    match WirePointer::decode(read_word_at(segment, ptr_at)) {
        WirePointer::Null => ObjectReader::Null,
        WirePointer::Struct {
            offset,
            data_words,
            pointer_count,
        } => match resolve_struct(segment, ptr_at, offset, data_words, pointer_count) {
            Some(reader) => ObjectReader::Struct(reader),
            None => {
                crate::error!("struct pointer points outside the message");
                ObjectReader::Null
            }
        },
        WirePointer::List {
            offset,
            element_size,
            element_count,
        } => match resolve_list(segment, ptr_at, offset, element_size, element_count) {
            Some(reader) => ObjectReader::List(reader),
            None => {
                crate::error!("list pointer points outside the message");
                ObjectReader::Null
            }
        },
        WirePointer::Unsupported => {
            crate::error!("unsupported pointer kind in single-segment message");
            ObjectReader::Null
        }
    }
}

/// Generate data-section getters.
///
/// `offset` is in multiples of the field width, per the wire layout.
/// Reads outside the data section yield the mask (the field default).
macro_rules! impl_get_data_field {
    ($name:ident, $ty:ty, $size:expr) => {
        pub fn $name(&self, offset: u32, mask: $ty) -> $ty {
            let end = (offset as usize + 1) * $size;
            if end <= self.data_section_bytes() {
                let at = self.data + offset as usize * $size;
                match self.segment.get(at..at + $size) {
                    Some(bytes) => {
                        let mut buf = [0u8; $size];
                        buf.copy_from_slice(bytes);
                        <$ty>::from_le_bytes(buf) ^ mask
                    }
                    None => mask,
                }
            } else {
                mask
            }
        }
    };
}

/// Read-only cursor over one struct instance.
#[derive(Debug, Clone, Copy)]
pub struct StructReader<'a> {
    segment: &'a [u8],
    data: usize,
    data_words: u16,
    ptrs: usize,
    ptr_count: u16,
}

impl<'a> StructReader<'a> {
    /// A reader over no storage: every field reads as its default.
    pub fn empty() -> Self {
        Self {
            segment: &[],
            data: 0,
            data_words: 0,
            ptrs: 0,
            ptr_count: 0,
        }
    }

    #[inline]
    fn data_section_bytes(&self) -> usize {
        self.data_words as usize * BYTES_PER_WORD
    }

    #[inline]
    fn pointer_at(&self, index: u32) -> Option<usize> {
        if index < self.ptr_count as u32 {
            Some(self.ptrs + index as usize * BYTES_PER_WORD)
        } else {
            None
        }
    }

    impl_get_data_field!(get_i8_field, i8, 1);
    impl_get_data_field!(get_i16_field, i16, 2);
    impl_get_data_field!(get_i32_field, i32, 4);
    impl_get_data_field!(get_i64_field, i64, 8);
    impl_get_data_field!(get_u8_field, u8, 1);
    impl_get_data_field!(get_u16_field, u16, 2);
    impl_get_data_field!(get_u32_field, u32, 4);
    impl_get_data_field!(get_u64_field, u64, 8);

    /// Booleans are addressed by bit offset.
    pub fn get_bool_field(&self, offset: u32, mask: bool) -> bool {
        let byte = offset as usize / 8;
        if byte < self.data_section_bytes() {
            match self.segment.get(self.data + byte) {
                Some(b) => ((b >> (offset % 8)) & 1 != 0) != mask,
                None => mask,
            }
        } else {
            mask
        }
    }

    /// The default mask is the IEEE-754 bit pattern of the default.
    pub fn get_f32_field(&self, offset: u32, mask: u32) -> f32 {
        f32::from_bits(self.get_u32_field(offset, mask))
    }

    /// The default mask is the IEEE-754 bit pattern of the default.
    pub fn get_f64_field(&self, offset: u32, mask: u64) -> f64 {
        f64::from_bits(self.get_u64_field(offset, mask))
    }

    /// Read a text blob reference; absent or malformed reads as `default`.
    pub fn get_text_field(&self, index: u32, default: &'a str) -> &'a str {
        let Some(ptr_at) = self.pointer_at(index) else {
            return default;
        };
        match WirePointer::decode(read_word_at(self.segment, ptr_at)) {
            WirePointer::Null => default,
            WirePointer::List {
                offset,
                element_size,
                element_count,
            } => {
                match resolve_blob(self.segment, ptr_at, offset, element_size, element_count)
                    .and_then(|bytes| std::str::from_utf8(bytes).ok())
                {
                    Some(text) => text,
                    None => {
                        crate::error!("malformed text blob");
                        default
                    }
                }
            }
            _ => {
                crate::error!("expected a blob pointer");
                default
            }
        }
    }

    /// Read a data blob reference; absent or malformed reads as `default`.
    pub fn get_data_blob_field(&self, index: u32, default: &'a [u8]) -> &'a [u8] {
        let Some(ptr_at) = self.pointer_at(index) else {
            return default;
        };
        match WirePointer::decode(read_word_at(self.segment, ptr_at)) {
            WirePointer::Null => default,
            WirePointer::List {
                offset,
                element_size,
                element_count,
            } => match resolve_blob(self.segment, ptr_at, offset, element_size, element_count) {
                Some(bytes) => bytes,
                None => {
                    crate::error!("malformed data blob");
                    default
                }
            },
            _ => {
                crate::error!("expected a blob pointer");
                default
            }
        }
    }

    /// Read a struct reference; absent reads as an empty reader.
    pub fn get_struct_field(&self, index: u32) -> StructReader<'a> {
        match self.pointer_at(index) {
            Some(ptr_at) => struct_reader_at(self.segment, ptr_at),
            None => StructReader::empty(),
        }
    }

    /// Read a list reference whose physical element size must be
    /// `expected`; absent reads as an empty list.
    pub fn get_list_field(&self, index: u32, expected: ElementSize) -> ListReader<'a> {
        match self.pointer_at(index) {
            Some(ptr_at) => list_reader_at(self.segment, ptr_at, Some(expected)),
            None => ListReader::empty(expected),
        }
    }

    /// Read a type-erased object reference.
    pub fn get_object_field(&self, index: u32) -> ObjectReader<'a> {
        match self.pointer_at(index) {
            Some(ptr_at) => object_reader_at(self.segment, ptr_at),
            None => ObjectReader::Null,
        }
    }
}

/// Generate list-element getters (offsets in element units, no mask:
/// list elements have no per-element defaults).
macro_rules! impl_get_data_element {
    ($name:ident, $ty:ty, $size:expr) => {
        pub fn $name(&self, index: u32) -> $ty {
            let at = self.start + index as usize * $size;
            match self.segment.get(at..at + $size) {
                Some(bytes) => {
                    let mut buf = [0u8; $size];
                    buf.copy_from_slice(bytes);
                    <$ty>::from_le_bytes(buf)
                }
                None => 0 as $ty,
            }
        }
    };
}

/// Read-only cursor over one list.
#[derive(Debug, Clone, Copy)]
pub struct ListReader<'a> {
    segment: &'a [u8],
    start: usize,
    count: u32,
    element_size: ElementSize,
    struct_data_words: u16,
    struct_ptr_count: u16,
}

impl<'a> ListReader<'a> {
    /// A zero-length list of the given physical element size.
    pub fn empty(element_size: ElementSize) -> Self {
        Self {
            segment: &[],
            start: 0,
            count: 0,
            element_size,
            struct_data_words: 0,
            struct_ptr_count: 0,
        }
    }

    /// Element count.
    pub fn size(&self) -> u32 {
        self.count
    }

    /// Physical element encoding.
    pub fn element_size(&self) -> ElementSize {
        self.element_size
    }

    impl_get_data_element!(get_i8_element, i8, 1);
    impl_get_data_element!(get_i16_element, i16, 2);
    impl_get_data_element!(get_i32_element, i32, 4);
    impl_get_data_element!(get_i64_element, i64, 8);
    impl_get_data_element!(get_u8_element, u8, 1);
    impl_get_data_element!(get_u16_element, u16, 2);
    impl_get_data_element!(get_u32_element, u32, 4);
    impl_get_data_element!(get_u64_element, u64, 8);

    pub fn get_bool_element(&self, index: u32) -> bool {
        let at = self.start + index as usize / 8;
        match self.segment.get(at) {
            Some(b) => (b >> (index % 8)) & 1 != 0,
            None => false,
        }
    }

    pub fn get_f32_element(&self, index: u32) -> f32 {
        f32::from_bits(self.get_u32_element(index))
    }

    pub fn get_f64_element(&self, index: u32) -> f64 {
        f64::from_bits(self.get_u64_element(index))
    }

    #[inline]
    fn element_pointer_at(&self, index: u32) -> Option<usize> {
        if self.element_size == ElementSize::Pointer {
            Some(self.start + index as usize * BYTES_PER_WORD)
        } else {
            crate::error!(
                "list of {:?} elements has no pointer elements",
                self.element_size
            );
            None
        }
    }

    /// Read a text element.
    pub fn get_text_element(&self, index: u32) -> &'a str {
        let Some(ptr_at) = self.element_pointer_at(index) else {
            return "";
        };
        match WirePointer::decode(read_word_at(self.segment, ptr_at)) {
            WirePointer::Null => "",
            WirePointer::List {
                offset,
                element_size,
                element_count,
            } => {
                match resolve_blob(self.segment, ptr_at, offset, element_size, element_count)
                    .and_then(|bytes| std::str::from_utf8(bytes).ok())
                {
                    Some(text) => text,
                    None => {
                        crate::error!("malformed text blob");
                        ""
                    }
                }
            }
            _ => {
                crate::error!("expected a blob pointer");
                ""
            }
        }
    }

    /// Read a data element.
    pub fn get_data_blob_element(&self, index: u32) -> &'a [u8] {
        let Some(ptr_at) = self.element_pointer_at(index) else {
            return &[];
        };
        match WirePointer::decode(read_word_at(self.segment, ptr_at)) {
            WirePointer::Null => &[],
            WirePointer::List {
                offset,
                element_size,
                element_count,
            } => match resolve_blob(self.segment, ptr_at, offset, element_size, element_count) {
                Some(bytes) => bytes,
                None => {
                    crate::error!("malformed data blob");
                    &[]
                }
            },
            _ => {
                crate::error!("expected a blob pointer");
                &[]
            }
        }
    }

    /// Read a struct element of an inline-composite list.
    pub fn get_struct_element(&self, index: u32) -> StructReader<'a> {
        if self.element_size != ElementSize::InlineComposite {
            crate::error!("struct elements require an inline-composite list");
            return StructReader::empty();
        }
        let stride =
            (self.struct_data_words as usize + self.struct_ptr_count as usize) * BYTES_PER_WORD;
        let data = self.start + index as usize * stride;
        StructReader {
            segment: self.segment,
            data,
            data_words: self.struct_data_words,
            ptrs: data + self.struct_data_words as usize * BYTES_PER_WORD,
            ptr_count: self.struct_ptr_count,
        }
    }

    /// Read a sub-list element with the given expected element size.
    pub fn get_list_element(&self, index: u32, expected: ElementSize) -> ListReader<'a> {
        match self.element_pointer_at(index) {
            Some(ptr_at) => list_reader_at(self.segment, ptr_at, Some(expected)),
            None => ListReader::empty(expected),
        }
    }

    /// Read a type-erased object element.
    pub fn get_object_element(&self, index: u32) -> ObjectReader<'a> {
        match self.element_pointer_at(index) {
            Some(ptr_at) => object_reader_at(self.segment, ptr_at),
            None => ObjectReader::Null,
        }
    }
}

/// A decoded type-erased pointer slot.
#[derive(Debug, Clone, Copy)]
pub enum ObjectReader<'a> {
    /// The slot is unset.
    Null,
    /// The slot holds a struct.
    Struct(StructReader<'a>),
    /// The slot holds a list.
    List(ListReader<'a>),
}
