use crate::codec::{self, UdhParseError};
use bytes::{BufMut, BytesMut};
use num_enum::TryFromPrimitive;
use std::fmt;
use std::io::Cursor;

/// Information element identifiers assigned by 3GPP TS 23.040 Section 9.2.3.24.
///
/// Only the two concatenation identifiers carry a structured body codec in
/// this crate; the rest decode as opaque bytes.
#[derive(TryFromPrimitive)]
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InformationElementIdentifier {
    ConcatenatedSm8bitRefNum = 0x00,
    SpecialSmMessageIndication = 0x01,
    // Reserved 0x02
    // 0x03 not used to avoid misinterpretation as line feed
    ApplicationPortAddressing8bit = 0x04,
    ApplicationPortAddressing16bit = 0x05,
    SmscControlParameters = 0x06,
    UdhSourceIndicator = 0x07,
    ConcatenatedSm16bitRefNum = 0x08,
    WirelessControlMessageProtocol = 0x09,
    TextFormatting = 0x0A,
    PredefinedSound = 0x0B,
    UserDefinedSound = 0x0C,
    PredefinedAnimation = 0x0D,
    LargeAnimation = 0x0E,
    SmallAnimation = 0x0F,
    LargePicture = 0x10,
    SmallPicture = 0x11,
    VariablePicture = 0x12,
    UserPromptIndicator = 0x13,
    ExtendedObject = 0x14,
    ReusedExtendedObject = 0x15,
    CompressionControl = 0x16,
    ObjectDistributionIndicator = 0x17,
    StandardWvgObject = 0x18,
    CharacterSizeWvgObject = 0x19,
    ExtendedObjectDataRequestCommand = 0x1A,
    // Reserved 0x1B - 0x1F for future EMS features
    Rfc822EmailHeader = 0x20,
    HyperlinkFormatElement = 0x21,
    ReplyAddressElement = 0x22,
    EnhancedVoiceMailInformation = 0x23,
    NationalLanguageSingleShift = 0x24,
    NationalLanguageLockingShift = 0x25,
    // Reserved 0x26 - 0x6F
    // SIM toolkit security headers 0x70 - 0x7F
    // SME-to-SME specific use 0x80 - 0x9F
    // Reserved 0xA0 - 0xBF
    // SC specific use 0xC0 - 0xDF
    // Reserved 0xE0 - 0xFF
}

/// The single-byte tag of an information element: either a recognized
/// identifier or an arbitrary byte passed through unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementTag {
    Known(InformationElementIdentifier),
    Raw(u8),
}

/// Exclusivity groups: at most one live member of a group per header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExclusivityGroup {
    Concatenation,
}

impl ElementTag {
    /// Total mapping from the wire byte; unassigned values become `Raw`.
    pub fn from_byte(value: u8) -> Self {
        match InformationElementIdentifier::try_from(value) {
            Ok(identifier) => ElementTag::Known(identifier),
            Err(_) => ElementTag::Raw(value),
        }
    }

    pub fn to_byte(self) -> u8 {
        match self {
            ElementTag::Known(identifier) => identifier as u8,
            ElementTag::Raw(value) => value,
        }
    }

    /// Whether a header may carry this tag more than once. Raw tags carry
    /// no policy and are implicitly repeatable.
    pub fn is_repeatable(self) -> bool {
        !matches!(
            self,
            ElementTag::Known(
                InformationElementIdentifier::ConcatenatedSm8bitRefNum
                    | InformationElementIdentifier::ConcatenatedSm16bitRefNum
            )
        )
    }

    /// The mutual-exclusion group this tag belongs to, if any. Consulted by
    /// both encode validation and the decode merge, so the policy lives in
    /// exactly one place.
    pub fn exclusivity_group(self) -> Option<ExclusivityGroup> {
        match self {
            ElementTag::Known(
                InformationElementIdentifier::ConcatenatedSm8bitRefNum
                | InformationElementIdentifier::ConcatenatedSm16bitRefNum,
            ) => Some(ExclusivityGroup::Concatenation),
            _ => None,
        }
    }

    pub fn encode(self, buf: &mut BytesMut) {
        buf.put_u8(self.to_byte());
    }

    pub fn decode(buf: &mut Cursor<&[u8]>) -> Result<Self, UdhParseError> {
        Ok(Self::from_byte(codec::decode_u8(
            buf,
            "information element identifier",
        )?))
    }
}

impl From<InformationElementIdentifier> for ElementTag {
    fn from(identifier: InformationElementIdentifier) -> Self {
        ElementTag::Known(identifier)
    }
}

impl From<u8> for ElementTag {
    fn from(value: u8) -> Self {
        ElementTag::from_byte(value)
    }
}

impl fmt::Display for ElementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementTag::Known(identifier) => {
                write!(f, "{:#04x} ({identifier:?})", *identifier as u8)
            }
            ElementTag::Raw(value) => write!(f, "{value:#04x}"),
        }
    }
}
