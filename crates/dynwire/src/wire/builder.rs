// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Write-side cursors over a growable message arena.
//!
//! [`MessageBuilder`] owns a single zero-initialized segment that only
//! ever grows at the end, so previously handed-out byte offsets stay
//! valid. Cursors ([`StructBuilder`], [`ListBuilder`]) are cheap `Copy`
//! values holding offsets plus a borrow of the arena; each access goes
//! through the arena's checked accessors. Because the arena uses
//! interior mutability, builder-side blob getters return owned copies.

use super::message::MessageReader;
use super::{
    encode_list_pointer, encode_struct_pointer, resolve_target, ElementSize, StructSize,
    WirePointer, BYTES_PER_WORD,
};
use std::cell::RefCell;

/// Generate checked little-endian arena accessors.
macro_rules! impl_arena_io {
    ($get:ident, $set:ident, $ty:ty, $size:expr) => {
        pub(crate) fn $get(&self, at: usize) -> $ty {
            let segment = self.segment.borrow();
            match segment.get(at..at + $size) {
                Some(bytes) => {
                    let mut buf = [0u8; $size];
                    buf.copy_from_slice(bytes);
                    <$ty>::from_le_bytes(buf)
                }
                None => 0 as $ty,
            }
        }

        pub(crate) fn $set(&self, at: usize, value: $ty) {
            let mut segment = self.segment.borrow_mut();
            if let Some(slice) = segment.get_mut(at..at + $size) {
                slice.copy_from_slice(&value.to_le_bytes());
            }
        }
    };
}

/// Growable single-segment message under construction.
///
/// Word 0 is the root pointer. Allocation never moves existing data;
/// exclusive access during a build is the caller's responsibility, the
/// arena itself only guarantees memory safety.
pub struct MessageBuilder {
    segment: RefCell<Vec<u8>>,
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageBuilder {
    /// Create an empty message holding only a null root pointer.
    pub fn new() -> Self {
        Self {
            segment: RefCell::new(vec![0; BYTES_PER_WORD]),
        }
    }

    /// Append `words` zeroed words, returning their byte offset.
    pub(crate) fn allocate_words(&self, words: u32) -> usize {
        let mut segment = self.segment.borrow_mut();
        let at = segment.len();
        segment.resize(at + words as usize * BYTES_PER_WORD, 0);
        at
    }

    impl_arena_io!(read_u8_at, write_u8_at, u8, 1);
    impl_arena_io!(read_u16_at, write_u16_at, u16, 2);
    impl_arena_io!(read_u32_at, write_u32_at, u32, 4);
    impl_arena_io!(read_u64_at, write_u64_at, u64, 8);
    impl_arena_io!(read_i8_at, write_i8_at, i8, 1);
    impl_arena_io!(read_i16_at, write_i16_at, i16, 2);
    impl_arena_io!(read_i32_at, write_i32_at, i32, 4);
    impl_arena_io!(read_i64_at, write_i64_at, i64, 8);

    pub(crate) fn read_bit(&self, byte_at: usize, bit: u32) -> bool {
        (self.read_u8_at(byte_at) >> bit) & 1 != 0
    }

    pub(crate) fn write_bit(&self, byte_at: usize, bit: u32, value: bool) {
        let byte = self.read_u8_at(byte_at);
        let byte = if value {
            byte | (1 << bit)
        } else {
            byte & !(1 << bit)
        };
        self.write_u8_at(byte_at, byte);
    }

    pub(crate) fn read_bytes_at(&self, at: usize, len: usize) -> Vec<u8> {
        let segment = self.segment.borrow();
        segment.get(at..at + len).map(<[u8]>::to_vec).unwrap_or_default()
    }

    pub(crate) fn write_bytes_at(&self, at: usize, bytes: &[u8]) {
        let mut segment = self.segment.borrow_mut();
        if let Some(slice) = segment.get_mut(at..at + bytes.len()) {
            slice.copy_from_slice(bytes);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.segment.borrow().len()
    }

    /// Allocate the root struct, overwriting any existing root.
    pub fn init_root_raw(&self, size: StructSize) -> StructBuilder<'_> {
        init_struct_pointer(self, 0, size)
    }

    /// Return the existing root, allocating it with `size` if unset.
    /// Re-interpretation against a smaller existing root keeps the
    /// existing layout.
    pub fn get_root_raw(&self, size: StructSize) -> StructBuilder<'_> {
        get_struct_pointer(self, 0, size)
    }

    /// Freeze the message for reading.
    pub fn into_reader(self) -> MessageReader {
        MessageReader::new(self.segment.into_inner())
    }
}

/// Word offset stored in a pointer at `ptr_at` aiming at `target`.
fn word_offset(ptr_at: usize, target: usize) -> i32 {
    ((target as i64 - (ptr_at as i64 + BYTES_PER_WORD as i64)) / BYTES_PER_WORD as i64) as i32
}

fn init_struct_pointer<'a>(
    msg: &'a MessageBuilder,
    ptr_at: usize,
    size: StructSize,
) -> StructBuilder<'a> {
    let target = msg.allocate_words(size.total_words());
    msg.write_u64_at(
        ptr_at,
        encode_struct_pointer(
            word_offset(ptr_at, target),
            size.data_words,
            size.pointer_count,
        ),
    );
    StructBuilder {
        msg,
        data: target,
        data_words: size.data_words,
        ptrs: target + size.data_words as usize * BYTES_PER_WORD,
        ptr_count: size.pointer_count,
    }
}

fn get_struct_pointer<'a>(
    msg: &'a MessageBuilder,
    ptr_at: usize,
    size: StructSize,
) -> StructBuilder<'a> {
    match WirePointer::decode(msg.read_u64_at(ptr_at)) {
        WirePointer::Null => init_struct_pointer(msg, ptr_at, size),
        WirePointer::Struct {
            offset,
            data_words,
            pointer_count,
        } => {
            let total = (data_words as usize + pointer_count as usize) * BYTES_PER_WORD;
            match resolve_target(ptr_at, offset) {
                Some(target) if target + total <= msg.len() => StructBuilder {
                    msg,
                    data: target,
                    data_words,
                    ptrs: target + data_words as usize * BYTES_PER_WORD,
                    ptr_count: pointer_count,
                },
                _ => {
                    crate::error!("struct pointer points outside the message");
                    StructBuilder::empty(msg)
                }
            }
        }
        _ => {
            crate::error!("expected a struct pointer");
            StructBuilder::empty(msg)
        }
    }
}

fn init_list_pointer<'a>(
    msg: &'a MessageBuilder,
    ptr_at: usize,
    element_size: ElementSize,
    count: u32,
) -> ListBuilder<'a> {
    let words = element_size.byte_len(count).div_ceil(BYTES_PER_WORD) as u32;
    let target = msg.allocate_words(words);
    msg.write_u64_at(
        ptr_at,
        encode_list_pointer(word_offset(ptr_at, target), element_size, count),
    );
    ListBuilder {
        msg,
        start: target,
        count,
        element_size,
        struct_data_words: 0,
        struct_ptr_count: 0,
    }
}

fn init_struct_list_pointer<'a>(
    msg: &'a MessageBuilder,
    ptr_at: usize,
    count: u32,
    size: StructSize,
) -> ListBuilder<'a> {
    let body_words = count * size.total_words();
    let target = msg.allocate_words(1 + body_words);
    msg.write_u64_at(
        ptr_at,
        encode_list_pointer(
            word_offset(ptr_at, target),
            ElementSize::InlineComposite,
            body_words,
        ),
    );
    // Tag word: element count in the offset field plus per-element size.
    msg.write_u64_at(
        target,
        encode_struct_pointer(count as i32, size.data_words, size.pointer_count),
    );
    ListBuilder {
        msg,
        start: target + BYTES_PER_WORD,
        count,
        element_size: ElementSize::InlineComposite,
        struct_data_words: size.data_words,
        struct_ptr_count: size.pointer_count,
    }
}

fn get_list_pointer<'a>(msg: &'a MessageBuilder, ptr_at: usize) -> ListBuilder<'a> {
    match WirePointer::decode(msg.read_u64_at(ptr_at)) {
        WirePointer::Null => ListBuilder::empty(msg, ElementSize::Void),
        WirePointer::List {
            offset,
            element_size,
            element_count,
        } => {
            let Some(target) = resolve_target(ptr_at, offset) else {
                crate::error!("list pointer points outside the message");
                return ListBuilder::empty(msg, element_size);
            };
            if element_size == ElementSize::InlineComposite {
                let word_count = element_count as usize;
                if target + (1 + word_count) * BYTES_PER_WORD > msg.len() {
                    crate::error!("list pointer points outside the message");
                    return ListBuilder::empty(msg, element_size);
                }
                match WirePointer::decode(msg.read_u64_at(target)) {
                    WirePointer::Struct {
                        offset: count,
                        data_words,
                        pointer_count,
                    } if count >= 0 => ListBuilder {
                        msg,
                        start: target + BYTES_PER_WORD,
                        count: count as u32,
                        element_size,
                        struct_data_words: data_words,
                        struct_ptr_count: pointer_count,
                    },
                    _ => {
                        crate::error!("malformed inline-composite tag word");
                        ListBuilder::empty(msg, element_size)
                    }
                }
            } else {
                if target + element_size.byte_len(element_count) > msg.len() {
                    crate::error!("list pointer points outside the message");
                    return ListBuilder::empty(msg, element_size);
                }
                ListBuilder {
                    msg,
                    start: target,
                    count: element_count,
                    element_size,
                    struct_data_words: 0,
                    struct_ptr_count: 0,
                }
            }
        }
        _ => {
            crate::error!("expected a list pointer");
            ListBuilder::empty(msg, ElementSize::Void)
        }
    }
}

/// Allocate a byte blob and point `ptr_at` at it; returns the blob's
/// byte offset.
fn init_blob_pointer(msg: &MessageBuilder, ptr_at: usize, len: u32) -> usize {
    let words = (len as usize).div_ceil(BYTES_PER_WORD) as u32;
    let target = msg.allocate_words(words);
    msg.write_u64_at(
        ptr_at,
        encode_list_pointer(word_offset(ptr_at, target), ElementSize::Byte, len),
    );
    target
}

/// Locate an existing byte blob behind `ptr_at`.
fn get_blob_pointer(msg: &MessageBuilder, ptr_at: usize) -> Option<(usize, u32)> {
    match WirePointer::decode(msg.read_u64_at(ptr_at)) {
        WirePointer::List {
            offset,
            element_size: ElementSize::Byte,
            element_count,
        } => {
            let target = resolve_target(ptr_at, offset)?;
            if target + element_count as usize <= msg.len() {
                Some((target, element_count))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Generate struct data-section accessors (offset in field-width units,
/// XOR default masking).
macro_rules! impl_data_field_rw {
    ($get:ident, $set:ident, $arena_get:ident, $arena_set:ident, $ty:ty, $size:expr) => {
        pub fn $get(&self, offset: u32, mask: $ty) -> $ty {
            if (offset as usize + 1) * $size <= self.data_section_bytes() {
                self.msg.$arena_get(self.data + offset as usize * $size) ^ mask
            } else {
                mask
            }
        }

        pub fn $set(&self, offset: u32, value: $ty, mask: $ty) {
            if (offset as usize + 1) * $size <= self.data_section_bytes() {
                self.msg
                    .$arena_set(self.data + offset as usize * $size, value ^ mask);
            } else {
                crate::error!("data write outside the struct's data section");
            }
        }
    };
}

/// Read-write cursor over one struct instance.
#[derive(Clone, Copy)]
pub struct StructBuilder<'a> {
    msg: &'a MessageBuilder,
    data: usize,
    data_words: u16,
    ptrs: usize,
    ptr_count: u16,
}

impl<'a> StructBuilder<'a> {
    /// A cursor over no storage: reads yield defaults, writes are
    /// reported and dropped.
    pub(crate) fn empty(msg: &'a MessageBuilder) -> Self {
        Self {
            msg,
            data: 0,
            data_words: 0,
            ptrs: 0,
            ptr_count: 0,
        }
    }

    pub(crate) fn message(&self) -> &'a MessageBuilder {
        self.msg
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
            crate::error!("pointer index {} outside the struct's pointer section", index);
            None
        }
    }

    impl_data_field_rw!(get_i8_field, set_i8_field, read_i8_at, write_i8_at, i8, 1);
    impl_data_field_rw!(get_i16_field, set_i16_field, read_i16_at, write_i16_at, i16, 2);
    impl_data_field_rw!(get_i32_field, set_i32_field, read_i32_at, write_i32_at, i32, 4);
    impl_data_field_rw!(get_i64_field, set_i64_field, read_i64_at, write_i64_at, i64, 8);
    impl_data_field_rw!(get_u8_field, set_u8_field, read_u8_at, write_u8_at, u8, 1);
    impl_data_field_rw!(get_u16_field, set_u16_field, read_u16_at, write_u16_at, u16, 2);
    impl_data_field_rw!(get_u32_field, set_u32_field, read_u32_at, write_u32_at, u32, 4);
    impl_data_field_rw!(get_u64_field, set_u64_field, read_u64_at, write_u64_at, u64, 8);

    pub fn get_bool_field(&self, offset: u32, mask: bool) -> bool {
        let byte = offset as usize / 8;
        if byte < self.data_section_bytes() {
            self.msg.read_bit(self.data + byte, offset % 8) != mask
        } else {
            mask
        }
    }

    pub fn set_bool_field(&self, offset: u32, value: bool, mask: bool) {
        let byte = offset as usize / 8;
        if byte < self.data_section_bytes() {
            self.msg.write_bit(self.data + byte, offset % 8, value != mask);
        } else {
            crate::error!("data write outside the struct's data section");
        }
    }

    pub fn get_f32_field(&self, offset: u32, mask: u32) -> f32 {
        f32::from_bits(self.get_u32_field(offset, mask))
    }

    pub fn set_f32_field(&self, offset: u32, value: f32, mask: u32) {
        self.set_u32_field(offset, value.to_bits(), mask);
    }

    pub fn get_f64_field(&self, offset: u32, mask: u64) -> f64 {
        f64::from_bits(self.get_u64_field(offset, mask))
    }

    pub fn set_f64_field(&self, offset: u32, value: f64, mask: u64) {
        self.set_u64_field(offset, value.to_bits(), mask);
    }

    /// Existing struct behind the reference, allocated with `size` if
    /// unset.
    pub fn get_struct_field(&self, index: u32, size: StructSize) -> StructBuilder<'a> {
        match self.pointer_at(index) {
            Some(ptr_at) => get_struct_pointer(self.msg, ptr_at, size),
            None => StructBuilder::empty(self.msg),
        }
    }

    /// Allocate a fresh struct, overwriting the reference.
    pub fn init_struct_field(&self, index: u32, size: StructSize) -> StructBuilder<'a> {
        match self.pointer_at(index) {
            Some(ptr_at) => init_struct_pointer(self.msg, ptr_at, size),
            None => StructBuilder::empty(self.msg),
        }
    }

    /// Existing list behind the reference; an unset reference reads as
    /// an empty list.
    pub fn get_list_field(&self, index: u32) -> ListBuilder<'a> {
        match self.pointer_at(index) {
            Some(ptr_at) => get_list_pointer(self.msg, ptr_at),
            None => ListBuilder::empty(self.msg, ElementSize::Void),
        }
    }

    /// Allocate a fresh list of `count` elements.
    pub fn init_list_field(
        &self,
        index: u32,
        element_size: ElementSize,
        count: u32,
    ) -> ListBuilder<'a> {
        match self.pointer_at(index) {
            Some(ptr_at) => init_list_pointer(self.msg, ptr_at, element_size, count),
            None => ListBuilder::empty(self.msg, element_size),
        }
    }

    /// Allocate a fresh inline-composite list of `count` structs.
    pub fn init_struct_list_field(
        &self,
        index: u32,
        count: u32,
        size: StructSize,
    ) -> ListBuilder<'a> {
        match self.pointer_at(index) {
            Some(ptr_at) => init_struct_list_pointer(self.msg, ptr_at, count, size),
            None => ListBuilder::empty(self.msg, ElementSize::InlineComposite),
        }
    }

    /// Read a text blob as an owned copy; absent reads as `default`.
    pub fn get_text_field(&self, index: u32, default: &str) -> String {
        let Some(ptr_at) = self.pointer_at(index) else {
            return default.to_string();
        };
        if self.msg.read_u64_at(ptr_at) == 0 {
            return default.to_string();
        }
        match get_blob_pointer(self.msg, ptr_at) {
            Some((at, len)) => {
                match String::from_utf8(self.msg.read_bytes_at(at, len as usize)) {
                    Ok(text) => text,
                    Err(_) => {
                        crate::error!("malformed text blob");
                        default.to_string()
                    }
                }
            }
            None => {
                crate::error!("expected a blob pointer");
                default.to_string()
            }
        }
    }

    /// Overwrite the text blob (allocates fresh storage).
    pub fn set_text_field(&self, index: u32, value: &str) {
        if let Some(ptr_at) = self.pointer_at(index) {
            let at = init_blob_pointer(self.msg, ptr_at, value.len() as u32);
            self.msg.write_bytes_at(at, value.as_bytes());
        }
    }

    /// Allocate a zeroed text blob of `size` bytes.
    pub fn init_text_field(&self, index: u32, size: u32) -> String {
        if let Some(ptr_at) = self.pointer_at(index) {
            init_blob_pointer(self.msg, ptr_at, size);
        }
        String::from_utf8(vec![0; size as usize]).unwrap_or_default()
    }

    /// Read a data blob as an owned copy; absent reads as `default`.
    pub fn get_data_blob_field(&self, index: u32, default: &[u8]) -> Vec<u8> {
        let Some(ptr_at) = self.pointer_at(index) else {
            return default.to_vec();
        };
        if self.msg.read_u64_at(ptr_at) == 0 {
            return default.to_vec();
        }
        match get_blob_pointer(self.msg, ptr_at) {
            Some((at, len)) => self.msg.read_bytes_at(at, len as usize),
            None => {
                crate::error!("expected a blob pointer");
                default.to_vec()
            }
        }
    }

    /// Overwrite the data blob (allocates fresh storage).
    pub fn set_data_blob_field(&self, index: u32, value: &[u8]) {
        if let Some(ptr_at) = self.pointer_at(index) {
            let at = init_blob_pointer(self.msg, ptr_at, value.len() as u32);
            self.msg.write_bytes_at(at, value);
        }
    }

    /// Allocate a zeroed data blob of `size` bytes.
    pub fn init_data_blob_field(&self, index: u32, size: u32) -> Vec<u8> {
        if let Some(ptr_at) = self.pointer_at(index) {
            init_blob_pointer(self.msg, ptr_at, size);
        }
        vec![0; size as usize]
    }

    /// Decode the reference as a type-erased object.
    pub fn get_object_field(&self, index: u32) -> ObjectBuilder<'a> {
        let Some(ptr_at) = self.pointer_at(index) else {
            return ObjectBuilder::Null(self.msg);
        };
        match WirePointer::decode(self.msg.read_u64_at(ptr_at)) {
            WirePointer::Null => ObjectBuilder::Null(self.msg),
            WirePointer::Struct { .. } => {
                // Re-enter through the struct path with the stored size.
                ObjectBuilder::Struct(get_struct_pointer(
                    self.msg,
                    ptr_at,
                    StructSize::new(0, 0, ElementSize::InlineComposite),
                ))
            }
            WirePointer::List { .. } => ObjectBuilder::List(get_list_pointer(self.msg, ptr_at)),
            WirePointer::Unsupported => {
                crate::error!("unsupported pointer kind in single-segment message");
                ObjectBuilder::Null(self.msg)
            }
        }
    }
}

/// Generate list data-element accessors.
macro_rules! impl_data_element_rw {
    ($get:ident, $set:ident, $arena_get:ident, $arena_set:ident, $ty:ty, $size:expr) => {
        pub fn $get(&self, index: u32) -> $ty {
            self.msg.$arena_get(self.start + index as usize * $size)
        }

        pub fn $set(&self, index: u32, value: $ty) {
            self.msg.$arena_set(self.start + index as usize * $size, value);
        }
    };
}

/// Read-write cursor over one list.
#[derive(Clone, Copy)]
pub struct ListBuilder<'a> {
    msg: &'a MessageBuilder,
    start: usize,
    count: u32,
    element_size: ElementSize,
    struct_data_words: u16,
    struct_ptr_count: u16,
}

impl<'a> ListBuilder<'a> {
    /// A zero-length list cursor.
    pub(crate) fn empty(msg: &'a MessageBuilder, element_size: ElementSize) -> Self {
        Self {
            msg,
            start: 0,
            count: 0,
            element_size,
            struct_data_words: 0,
            struct_ptr_count: 0,
        }
    }

    pub(crate) fn message(&self) -> &'a MessageBuilder {
        self.msg
    }

    /// Element count.
    pub fn size(&self) -> u32 {
        self.count
    }

    /// Physical element encoding.
    pub fn element_size(&self) -> ElementSize {
        self.element_size
    }

    impl_data_element_rw!(get_i8_element, set_i8_element, read_i8_at, write_i8_at, i8, 1);
    impl_data_element_rw!(get_i16_element, set_i16_element, read_i16_at, write_i16_at, i16, 2);
    impl_data_element_rw!(get_i32_element, set_i32_element, read_i32_at, write_i32_at, i32, 4);
    impl_data_element_rw!(get_i64_element, set_i64_element, read_i64_at, write_i64_at, i64, 8);
    impl_data_element_rw!(get_u8_element, set_u8_element, read_u8_at, write_u8_at, u8, 1);
    impl_data_element_rw!(get_u16_element, set_u16_element, read_u16_at, write_u16_at, u16, 2);
    impl_data_element_rw!(get_u32_element, set_u32_element, read_u32_at, write_u32_at, u32, 4);
    impl_data_element_rw!(get_u64_element, set_u64_element, read_u64_at, write_u64_at, u64, 8);

    pub fn get_bool_element(&self, index: u32) -> bool {
        self.msg.read_bit(self.start + index as usize / 8, index % 8)
    }

    pub fn set_bool_element(&self, index: u32, value: bool) {
        self.msg.write_bit(self.start + index as usize / 8, index % 8, value);
    }

    pub fn get_f32_element(&self, index: u32) -> f32 {
        f32::from_bits(self.get_u32_element(index))
    }

    pub fn set_f32_element(&self, index: u32, value: f32) {
        self.set_u32_element(index, value.to_bits());
    }

    pub fn get_f64_element(&self, index: u32) -> f64 {
        f64::from_bits(self.get_u64_element(index))
    }

    pub fn set_f64_element(&self, index: u32, value: f64) {
        self.set_u64_element(index, value.to_bits());
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

    /// Struct element of an inline-composite list.
    pub fn get_struct_element(&self, index: u32) -> StructBuilder<'a> {
        if self.element_size != ElementSize::InlineComposite {
            crate::error!("struct elements require an inline-composite list");
            return StructBuilder::empty(self.msg);
        }
        let stride =
            (self.struct_data_words as usize + self.struct_ptr_count as usize) * BYTES_PER_WORD;
        let data = self.start + index as usize * stride;
        StructBuilder {
            msg: self.msg,
            data,
            data_words: self.struct_data_words,
            ptrs: data + self.struct_data_words as usize * BYTES_PER_WORD,
            ptr_count: self.struct_ptr_count,
        }
    }

    /// Existing sub-list element.
    pub fn get_list_element(&self, index: u32) -> ListBuilder<'a> {
        match self.element_pointer_at(index) {
            Some(ptr_at) => get_list_pointer(self.msg, ptr_at),
            None => ListBuilder::empty(self.msg, ElementSize::Void),
        }
    }

    /// Allocate a fresh sub-list of `count` elements.
    pub fn init_list_element(
        &self,
        index: u32,
        element_size: ElementSize,
        count: u32,
    ) -> ListBuilder<'a> {
        match self.element_pointer_at(index) {
            Some(ptr_at) => init_list_pointer(self.msg, ptr_at, element_size, count),
            None => ListBuilder::empty(self.msg, element_size),
        }
    }

    /// Allocate a fresh inline-composite sub-list of `count` structs.
    pub fn init_struct_list_element(
        &self,
        index: u32,
        count: u32,
        size: StructSize,
    ) -> ListBuilder<'a> {
        match self.element_pointer_at(index) {
            Some(ptr_at) => init_struct_list_pointer(self.msg, ptr_at, count, size),
            None => ListBuilder::empty(self.msg, ElementSize::InlineComposite),
        }
    }

    /// Text element as an owned copy.
    pub fn get_text_element(&self, index: u32) -> String {
        let Some(ptr_at) = self.element_pointer_at(index) else {
            return String::new();
        };
        if self.msg.read_u64_at(ptr_at) == 0 {
            return String::new();
        }
        match get_blob_pointer(self.msg, ptr_at) {
            Some((at, len)) => {
                match String::from_utf8(self.msg.read_bytes_at(at, len as usize)) {
                    Ok(text) => text,
                    Err(_) => {
                        crate::error!("malformed text blob");
                        String::new()
                    }
                }
            }
            None => {
                crate::error!("expected a blob pointer");
                String::new()
            }
        }
    }

    /// Overwrite a text element (allocates fresh storage).
    pub fn set_text_element(&self, index: u32, value: &str) {
        if let Some(ptr_at) = self.element_pointer_at(index) {
            let at = init_blob_pointer(self.msg, ptr_at, value.len() as u32);
            self.msg.write_bytes_at(at, value.as_bytes());
        }
    }

    /// Allocate a zeroed text element of `size` bytes.
    pub fn init_text_element(&self, index: u32, size: u32) -> String {
        if let Some(ptr_at) = self.element_pointer_at(index) {
            init_blob_pointer(self.msg, ptr_at, size);
        }
        String::from_utf8(vec![0; size as usize]).unwrap_or_default()
    }

    /// Data element as an owned copy.
    pub fn get_data_blob_element(&self, index: u32) -> Vec<u8> {
        let Some(ptr_at) = self.element_pointer_at(index) else {
            return Vec::new();
        };
        if self.msg.read_u64_at(ptr_at) == 0 {
            return Vec::new();
        }
        match get_blob_pointer(self.msg, ptr_at) {
            Some((at, len)) => self.msg.read_bytes_at(at, len as usize),
            None => {
                crate::error!("expected a blob pointer");
                Vec::new()
            }
        }
    }

    /// Overwrite a data element (allocates fresh storage).
    pub fn set_data_blob_element(&self, index: u32, value: &[u8]) {
        if let Some(ptr_at) = self.element_pointer_at(index) {
            let at = init_blob_pointer(self.msg, ptr_at, value.len() as u32);
            self.msg.write_bytes_at(at, value);
        }
    }

    /// Allocate a zeroed data element of `size` bytes.
    pub fn init_data_blob_element(&self, index: u32, size: u32) -> Vec<u8> {
        if let Some(ptr_at) = self.element_pointer_at(index) {
            init_blob_pointer(self.msg, ptr_at, size);
        }
        vec![0; size as usize]
    }
}

/// A decoded type-erased pointer slot on the build side.
#[derive(Clone, Copy)]
pub enum ObjectBuilder<'a> {
    /// The slot is unset; the arena is carried so empty cursors can be
    /// formed.
    Null(&'a MessageBuilder),
    /// The slot holds a struct.
    Struct(StructBuilder<'a>),
    /// The slot holds a list.
    List(ListBuilder<'a>),
}
