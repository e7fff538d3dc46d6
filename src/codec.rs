// UDH codec support layer: shared cursor helpers and the two error families.
//
// Every decoder in this crate reads from a `Cursor<&[u8]>` and is bounded by
// its caller: the header codec carves the udhl region, the element codec
// carves each declared body. `take_region` is the one place that enforces
// "exactly N bytes consumed", so no call site does its own offset arithmetic.

use crate::datatypes::ElementTag;
use bytes::Buf;
use std::io::Cursor;
use thiserror::Error;

/// Largest body an information element can declare (single length byte).
pub const MAX_ELEMENT_BODY_LEN: usize = u8::MAX as usize;

/// Largest element sequence a header can declare (single udhl byte).
pub const MAX_HEADER_LEN: usize = u8::MAX as usize;

/// Malformed wire data. Decoding aborts immediately; bytes consumed before
/// the failure stay consumed.
#[derive(Debug, Error)]
pub enum UdhParseError {
    #[error("truncated {field}: declared length exceeds remaining bytes")]
    Truncated { field: &'static str },

    #[error("element {tag} declares body length {actual}, its codec requires {expected}")]
    InvalidElementLength {
        tag: ElementTag,
        expected: usize,
        actual: usize,
    },
}

/// Caller-supplied encode input violates UDH rules. The whole encode call is
/// rejected with no partial output.
#[derive(Debug, Error)]
pub enum UdhEncodeError {
    #[error("non-repeatable element {0} appears more than once")]
    RepeatedElement(ElementTag),

    #[error("elements {0} and {1} are mutually exclusive")]
    MutuallyExclusiveElements(ElementTag, ElementTag),

    #[error("element {tag} paired with a body of the wrong shape")]
    BodyMismatch { tag: ElementTag },

    #[error("element body is {0} bytes, limit is {MAX_ELEMENT_BODY_LEN}")]
    BodyTooLong(usize),

    #[error("header content is {0} bytes, limit is {MAX_HEADER_LEN}")]
    HeaderTooLong(usize),

    #[error("reference number {0:#06x} does not fit an 8-bit reference field")]
    ReferenceNumberOverflow(u16),
}

/// Decode a single byte.
pub(crate) fn decode_u8(
    buf: &mut Cursor<&[u8]>,
    field: &'static str,
) -> Result<u8, UdhParseError> {
    if buf.remaining() < 1 {
        return Err(UdhParseError::Truncated { field });
    }
    Ok(buf.get_u8())
}

/// Decode a 16-bit big-endian integer.
pub(crate) fn decode_u16(
    buf: &mut Cursor<&[u8]>,
    field: &'static str,
) -> Result<u16, UdhParseError> {
    if buf.remaining() < 2 {
        return Err(UdhParseError::Truncated { field });
    }
    Ok(buf.get_u16())
}

/// Carve a bounded sub-region of exactly `len` bytes, advancing the cursor
/// past it. The returned slice is the only window the caller's inner decoder
/// gets, so it cannot over-read into sibling fields.
pub(crate) fn take_region<'a>(
    buf: &mut Cursor<&'a [u8]>,
    len: usize,
    field: &'static str,
) -> Result<&'a [u8], UdhParseError> {
    let pos = buf.position() as usize;
    let data = *buf.get_ref();
    if data.len().saturating_sub(pos) < len {
        return Err(UdhParseError::Truncated { field });
    }
    buf.set_position((pos + len) as u64);
    Ok(&data[pos..pos + len])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_region_bounds_and_advances() {
        let data: &[u8] = &[0xAA, 0xBB, 0xCC, 0xDD];
        let mut cursor = Cursor::new(data);

        let region = take_region(&mut cursor, 3, "test").unwrap();
        assert_eq!(region, &[0xAA, 0xBB, 0xCC]);
        assert_eq!(cursor.position(), 3);

        let result = take_region(&mut cursor, 2, "test");
        assert!(matches!(result, Err(UdhParseError::Truncated { .. })));
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn decode_u16_is_big_endian() {
        let data: &[u8] = &[0x9C, 0xFA];
        let mut cursor = Cursor::new(data);
        assert_eq!(decode_u16(&mut cursor, "test").unwrap(), 0x9CFA);
    }

    #[test]
    fn short_reads_fail_without_advancing() {
        let data: &[u8] = &[0x01];
        let mut cursor = Cursor::new(data);
        assert!(matches!(
            decode_u16(&mut cursor, "test"),
            Err(UdhParseError::Truncated { field: "test" })
        ));
        assert_eq!(cursor.position(), 0);
    }
}
