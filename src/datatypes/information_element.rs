// The generic TLV envelope: tag byte, one length byte, body. Bodies with a
// registered codec decode to structured values; recognized tags without one
// keep their bytes; unrecognized tags consume their bytes and surface as
// `Unrepresented`, which the header codec filters out.

use crate::codec::{self, MAX_ELEMENT_BODY_LEN, UdhEncodeError, UdhParseError};
use crate::datatypes::{
    ConcatenatedShortMessage, ElementTag, InformationElementIdentifier, ReferenceNumberWidth,
};
use bytes::{BufMut, Bytes, BytesMut};
use std::io::Cursor;

#[derive(Clone, Debug, PartialEq)]
pub enum ElementBody {
    /// Structured body of a concatenation element.
    Concatenated(ConcatenatedShortMessage),
    /// Opaque body of a recognized tag without a structured codec, or of a
    /// raw tag supplied by the caller.
    Raw(Bytes),
    /// Bytes were consumed from the wire for an unrecognized tag; no value
    /// is modeled. Never present in a decoded header and never encodable.
    Unrepresented,
}

/// One tag-length-value record of a User Data Header.
#[derive(Clone, Debug, PartialEq)]
pub struct InformationElement {
    pub tag: ElementTag,
    pub body: ElementBody,
}

impl InformationElement {
    pub fn new(tag: impl Into<ElementTag>, body: ElementBody) -> Self {
        Self {
            tag: tag.into(),
            body,
        }
    }

    /// Concatenation element carrying a 1-byte message reference.
    pub fn concatenated_8bit(
        reference_number: u8,
        total_segments: u8,
        sequence_number: u8,
    ) -> Self {
        Self {
            tag: InformationElementIdentifier::ConcatenatedSm8bitRefNum.into(),
            body: ElementBody::Concatenated(ConcatenatedShortMessage::new(
                u16::from(reference_number),
                total_segments,
                sequence_number,
            )),
        }
    }

    /// Concatenation element carrying a 2-byte message reference.
    pub fn concatenated_16bit(
        reference_number: u16,
        total_segments: u8,
        sequence_number: u8,
    ) -> Self {
        Self {
            tag: InformationElementIdentifier::ConcatenatedSm16bitRefNum.into(),
            body: ElementBody::Concatenated(ConcatenatedShortMessage::new(
                reference_number,
                total_segments,
                sequence_number,
            )),
        }
    }

    /// Element with an opaque body, for tags without a structured codec.
    pub fn raw(tag: impl Into<ElementTag>, body: impl Into<Bytes>) -> Self {
        Self {
            tag: tag.into(),
            body: ElementBody::Raw(body.into()),
        }
    }

    /// Encoded size on the wire: tag + length byte + body.
    pub fn encoded_size(&self) -> usize {
        2 + match &self.body {
            ElementBody::Concatenated(_) => ReferenceNumberWidth::for_tag(self.tag)
                .map(ReferenceNumberWidth::body_len)
                .unwrap_or(0),
            ElementBody::Raw(bytes) => bytes.len(),
            ElementBody::Unrepresented => 0,
        }
    }

    /// Encode tag, length, body. The body must match the tag's registered
    /// codec: a concatenation tag requires a `Concatenated` body and any
    /// other tag requires `Raw`.
    pub fn encode(&self, buf: &mut BytesMut) -> Result<(), UdhEncodeError> {
        let mut body = BytesMut::new();
        match (&self.body, ReferenceNumberWidth::for_tag(self.tag)) {
            (ElementBody::Concatenated(info), Some(width)) => info.encode(width, &mut body)?,
            (ElementBody::Raw(bytes), None) => body.extend_from_slice(bytes),
            _ => return Err(UdhEncodeError::BodyMismatch { tag: self.tag }),
        }
        if body.len() > MAX_ELEMENT_BODY_LEN {
            return Err(UdhEncodeError::BodyTooLong(body.len()));
        }

        self.tag.encode(buf);
        buf.put_u8(body.len() as u8);
        buf.extend_from_slice(&body);
        Ok(())
    }

    /// Decode one element, advancing the cursor by exactly `2 + len` bytes
    /// on every non-error return. That contract lets the header codec
    /// iterate elements without separate length bookkeeping.
    pub fn decode(buf: &mut Cursor<&[u8]>) -> Result<Self, UdhParseError> {
        let tag = ElementTag::decode(buf)?;
        let declared_len =
            usize::from(codec::decode_u8(buf, "information element length")?);

        // Recognized-tag lengths are fixed by the body codec; reject a
        // mismatch before consuming the body.
        if let Some(width) = ReferenceNumberWidth::for_tag(tag) {
            if declared_len != width.body_len() {
                return Err(UdhParseError::InvalidElementLength {
                    tag,
                    expected: width.body_len(),
                    actual: declared_len,
                });
            }
        }

        let region = codec::take_region(buf, declared_len, "information element body")?;
        let body = match tag {
            ElementTag::Raw(value) => {
                tracing::trace!(
                    tag = value,
                    len = declared_len,
                    "unrecognized information element, bytes consumed but not modeled"
                );
                ElementBody::Unrepresented
            }
            ElementTag::Known(_) => match ReferenceNumberWidth::for_tag(tag) {
                Some(width) => {
                    let mut body_buf = Cursor::new(region);
                    ElementBody::Concatenated(ConcatenatedShortMessage::decode(
                        &mut body_buf,
                        width,
                    )?)
                }
                None => ElementBody::Raw(Bytes::copy_from_slice(region)),
            },
        };

        Ok(InformationElement { tag, body })
    }
}
