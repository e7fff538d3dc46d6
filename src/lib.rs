//! Codec for the GSM User Data Header (UDH) carried in SMPP short messages.
//!
//! A UDH is a length-prefixed sequence of tag-length-value information
//! elements spliced into the front of an SMS body. This crate decodes and
//! encodes that sequence: structured codecs for the concatenation elements,
//! opaque pass-through for everything else, strict length validation on
//! recognized tags, and deterministic conflict resolution when elements
//! compete for the same slot.
//!
//! The surrounding PDU layer hands [`UserDataHeader::decode`] a cursor
//! positioned at the UDH's first byte and gets it back positioned exactly one
//! byte past the last consumed byte; [`UserDataHeader::encode`] produces the
//! bytes to splice into a PDU body.
//!
//! ```rust
//! use smpp_udh::{InformationElement, UserDataHeader};
//! use bytes::BytesMut;
//! use std::io::Cursor;
//!
//! let header = UserDataHeader::from(vec![
//!     InformationElement::concatenated_16bit(0x9CFA, 3, 2),
//! ]);
//!
//! let mut buf = BytesMut::new();
//! header.encode(&mut buf)?;
//! assert_eq!(buf.as_ref(), &[0x06, 0x08, 0x04, 0x9C, 0xFA, 0x03, 0x02]);
//!
//! let mut cursor = Cursor::new(buf.as_ref());
//! let decoded = UserDataHeader::decode(&mut cursor)?;
//! assert_eq!(decoded, header);
//! assert_eq!(cursor.position() as usize, buf.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod codec;
pub mod datatypes;

#[cfg(test)]
mod tests;

pub use codec::{UdhEncodeError, UdhParseError};
pub use datatypes::{
    ConcatenatedShortMessage, ElementBody, ElementTag, ExclusivityGroup, InformationElement,
    InformationElementIdentifier, ReferenceNumberWidth, UserDataHeader,
};
