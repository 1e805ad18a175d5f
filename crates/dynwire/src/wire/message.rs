// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Read-only message wrapper.

use super::reader::{struct_reader_at, StructReader};
use super::BYTES_PER_WORD;

/// A complete encoded message. Word 0 is the root pointer.
pub struct MessageReader {
    segment: Vec<u8>,
}

impl MessageReader {
    /// Wrap raw message bytes. A segment shorter than one word has a
    /// null root.
    pub fn new(segment: Vec<u8>) -> Self {
        Self { segment }
    }

    /// The raw segment bytes.
    pub fn segment(&self) -> &[u8] {
        &self.segment
    }

    /// Message size in whole words.
    pub fn word_count(&self) -> usize {
        self.segment.len() / BYTES_PER_WORD
    }

    /// The root struct. A null or malformed root pointer reads as an
    /// empty struct.
    pub(crate) fn root(&self) -> StructReader<'_> {
        struct_reader_at(&self.segment, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_has_null_root() {
        let reader = MessageReader::new(Vec::new());
        assert_eq!(reader.word_count(), 0);
        assert_eq!(reader.root().get_u32_field(0, 11), 11);
    }

    #[test]
    fn test_root_through_builder() {
        let msg = crate::wire::MessageBuilder::new();
        let size = crate::wire::StructSize::new(1, 0, crate::wire::ElementSize::EightBytes);
        msg.init_root_raw(size).set_u32_field(0, 1234, 0);
        let reader = msg.into_reader();
        assert_eq!(reader.root().get_u32_field(0, 0), 1234);
    }
}
