// Concatenated-short-message body: reference number, total segment count,
// sequence number. The reference field is 1 or 2 bytes depending on which
// concatenation tag carries the body, so the width is codec configuration
// rather than part of the value.

use crate::codec::{self, UdhEncodeError, UdhParseError};
use crate::datatypes::{ElementTag, InformationElementIdentifier};
use bytes::{BufMut, BytesMut};
use std::io::Cursor;

/// Width of the reference-number field, fixed by the carrying tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReferenceNumberWidth {
    EightBit,
    SixteenBit,
}

impl ReferenceNumberWidth {
    /// The tag-to-body-codec dispatch table. `None` means the tag has no
    /// structured body and its bytes stay opaque.
    pub fn for_tag(tag: ElementTag) -> Option<Self> {
        match tag {
            ElementTag::Known(InformationElementIdentifier::ConcatenatedSm8bitRefNum) => {
                Some(ReferenceNumberWidth::EightBit)
            }
            ElementTag::Known(InformationElementIdentifier::ConcatenatedSm16bitRefNum) => {
                Some(ReferenceNumberWidth::SixteenBit)
            }
            _ => None,
        }
    }

    /// Exact body length a concatenation element must declare at this width.
    pub const fn body_len(self) -> usize {
        match self {
            ReferenceNumberWidth::EightBit => 3,
            ReferenceNumberWidth::SixteenBit => 4,
        }
    }
}

/// Reassembly metadata for one segment of a multi-part short message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConcatenatedShortMessage {
    /// Reference shared by all segments of one logical message. Bounded by
    /// 0xFF when carried under the 8-bit tag.
    pub reference_number: u16,
    pub total_segments: u8,
    pub sequence_number: u8,
}

impl ConcatenatedShortMessage {
    pub fn new(reference_number: u16, total_segments: u8, sequence_number: u8) -> Self {
        Self {
            reference_number,
            total_segments,
            sequence_number,
        }
    }

    /// Encode the fixed-layout body: big-endian reference at the configured
    /// width, then total segments, then sequence number.
    pub fn encode(
        &self,
        width: ReferenceNumberWidth,
        buf: &mut BytesMut,
    ) -> Result<(), UdhEncodeError> {
        match width {
            ReferenceNumberWidth::EightBit => {
                let reference = u8::try_from(self.reference_number).map_err(|_| {
                    UdhEncodeError::ReferenceNumberOverflow(self.reference_number)
                })?;
                buf.put_u8(reference);
            }
            ReferenceNumberWidth::SixteenBit => buf.put_u16(self.reference_number),
        }
        buf.put_u8(self.total_segments);
        buf.put_u8(self.sequence_number);
        Ok(())
    }

    /// Consumes exactly `width.body_len()` bytes; the caller bounds the
    /// region and has already validated the declared length.
    pub fn decode(
        buf: &mut Cursor<&[u8]>,
        width: ReferenceNumberWidth,
    ) -> Result<Self, UdhParseError> {
        let reference_number = match width {
            ReferenceNumberWidth::EightBit => {
                u16::from(codec::decode_u8(buf, "concatenation reference number")?)
            }
            ReferenceNumberWidth::SixteenBit => {
                codec::decode_u16(buf, "concatenation reference number")?
            }
        };
        let total_segments = codec::decode_u8(buf, "concatenation total segments")?;
        let sequence_number = codec::decode_u8(buf, "concatenation sequence number")?;
        Ok(Self {
            reference_number,
            total_segments,
            sequence_number,
        })
    }
}
