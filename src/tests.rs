//! Integration tests exercising the full UDH codec against known wire vectors.

use crate::codec::{UdhEncodeError, UdhParseError};
use crate::datatypes::*;
use std::io::Cursor;

fn hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}

/// Decode a header and assert the cursor consumed the whole input, which is
/// the boundary contract with the surrounding PDU parser.
fn decode_all(input: &str) -> UserDataHeader {
    let bytes = hex(input);
    let mut cursor = Cursor::new(bytes.as_slice());
    let header = UserDataHeader::decode(&mut cursor).unwrap();
    assert_eq!(cursor.position() as usize, bytes.len());
    header
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_single_concatenation_element_round_trip() {
        let header =
            UserDataHeader::new(vec![InformationElement::concatenated_8bit(0x24, 0x03, 0x01)]);

        let bytes = header.to_bytes().unwrap();
        assert_eq!(bytes.to_vec(), hex("050003240301"));

        let decoded = decode_all("050003240301");
        assert_eq!(decoded, header);
    }

    #[test]
    fn test_decode_repeated_non_repeatable_element_last_wins() {
        let decoded = decode_all("0c0804abcd030208049cfa0302");
        assert_eq!(
            decoded,
            UserDataHeader::new(vec![InformationElement::concatenated_16bit(
                0x9CFA, 0x03, 0x02
            )])
        );
    }

    #[test]
    fn test_decode_mutually_exclusive_elements_last_wins() {
        let decoded = decode_all("0b000324030108049cfa0302");
        assert_eq!(
            decoded,
            UserDataHeader::new(vec![InformationElement::concatenated_16bit(
                0x9CFA, 0x03, 0x02
            )])
        );
    }

    #[test]
    fn test_decode_drops_unknown_elements() {
        let decoded = decode_all("0f0203ffffff0201ff00032403010200");
        assert_eq!(
            decoded,
            UserDataHeader::new(vec![InformationElement::concatenated_8bit(
                0x24, 0x03, 0x01
            )])
        );
    }

    #[test]
    fn test_decode_merge_keeps_first_insertion_position() {
        // hyperlink, then concat-8bit, then concat-16bit: the concatenation
        // slot keeps position 1 but ends up holding the 16-bit element.
        let decoded = decode_all("0f2102aabb000324030108049cfa0302");
        assert_eq!(
            decoded,
            UserDataHeader::new(vec![
                InformationElement::raw(
                    InformationElementIdentifier::HyperlinkFormatElement,
                    hex("aabb"),
                ),
                InformationElement::concatenated_16bit(0x9CFA, 0x03, 0x02),
            ])
        );
    }

    #[test]
    fn test_decode_preserves_opaque_known_elements() {
        let decoded = decode_all("062102aabb0200");
        assert_eq!(
            decoded,
            UserDataHeader::new(vec![InformationElement::raw(
                InformationElementIdentifier::HyperlinkFormatElement,
                hex("aabb"),
            )])
        );
    }

    #[test]
    fn test_decode_truncated_header_region() {
        // udhl claims 5 bytes but only 4 follow
        let bytes = hex("0500032403");
        let mut cursor = Cursor::new(bytes.as_slice());
        let result = UserDataHeader::decode(&mut cursor);
        assert!(matches!(
            result,
            Err(UdhParseError::Truncated {
                field: "user data header"
            })
        ));
    }

    #[test]
    fn test_decode_element_overrunning_declared_region() {
        // udhl bounds 4 bytes; the element inside declares a 3-byte body but
        // only 2 remain in the region
        let bytes = hex("040003240300");
        let mut cursor = Cursor::new(bytes.as_slice());
        let result = UserDataHeader::decode(&mut cursor);
        assert!(matches!(result, Err(UdhParseError::Truncated { .. })));
    }

    #[test]
    fn test_decode_invalid_element_length_aborts_header() {
        // concat-8bit tag declaring a 2-byte body
        let bytes = hex("040002fa03");
        let mut cursor = Cursor::new(bytes.as_slice());
        let result = UserDataHeader::decode(&mut cursor);
        assert!(matches!(
            result,
            Err(UdhParseError::InvalidElementLength {
                expected: 3,
                actual: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_encode_repeated_non_repeatable_element_rejected() {
        let header = UserDataHeader::new(vec![
            InformationElement::concatenated_16bit(0x9CFA, 0x03, 0x02),
            InformationElement::concatenated_16bit(0xABCD, 0x04, 0x01),
        ]);
        assert!(matches!(
            header.to_bytes(),
            Err(UdhEncodeError::RepeatedElement(_))
        ));
    }

    #[test]
    fn test_encode_mutually_exclusive_elements_rejected() {
        let header = UserDataHeader::new(vec![
            InformationElement::concatenated_8bit(0x24, 0x03, 0x01),
            InformationElement::concatenated_16bit(0xABCD, 0x04, 0x01),
        ]);
        assert!(matches!(
            header.to_bytes(),
            Err(UdhEncodeError::MutuallyExclusiveElements(_, _))
        ));
    }

    #[test]
    fn test_encode_preserves_caller_element_order() {
        let header = UserDataHeader::new(vec![
            InformationElement::raw(
                InformationElementIdentifier::HyperlinkFormatElement,
                hex("aabb"),
            ),
            InformationElement::concatenated_16bit(0x9CFA, 0x03, 0x02),
        ]);
        let bytes = header.to_bytes().unwrap();
        assert_eq!(bytes.to_vec(), hex("0a2102aabb08049cfa0302"));

        let decoded = decode_all("0a2102aabb08049cfa0302");
        assert_eq!(decoded, header);
    }

    #[test]
    fn test_decode_leaves_trailing_pdu_bytes_untouched() {
        // bytes past the declared udhl region belong to the SMS body and
        // must not be consumed
        let mut bytes = hex("050003240301");
        bytes.extend_from_slice(b"hello");
        let mut cursor = Cursor::new(bytes.as_slice());
        let header = UserDataHeader::decode(&mut cursor).unwrap();
        assert_eq!(header.elements.len(), 1);
        assert_eq!(cursor.position(), 6);
        assert_eq!(&bytes[cursor.position() as usize..], b"hello");
    }

    #[test]
    fn test_concatenation_accessor_after_decode() {
        let decoded = decode_all("0b000324030108049cfa0302");
        assert_eq!(
            decoded.concatenation(),
            Some(&ConcatenatedShortMessage::new(0x9CFA, 0x03, 0x02))
        );
    }
}
