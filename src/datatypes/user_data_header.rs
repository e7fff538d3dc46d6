// Top-level UDH codec: the udhl length prefix, the element sequence, and the
// conflict policy. Encode rejects conflicting input outright; decode merges
// conflicts deterministically (last occurrence wins) and never fails on them.

use crate::codec::{self, MAX_HEADER_LEN, UdhEncodeError, UdhParseError};
use crate::datatypes::{
    ConcatenatedShortMessage, ElementBody, ElementTag, ExclusivityGroup, InformationElement,
};
use bytes::{Buf, BufMut, Bytes, BytesMut};
use std::io::Cursor;

/// Key under which decoded elements are merged: members of an exclusivity
/// group contend for one slot, everything else contends per tag.
#[derive(Clone, Copy, PartialEq, Eq)]
enum MergeKey {
    Group(ExclusivityGroup),
    Tag(ElementTag),
}

impl MergeKey {
    fn for_tag(tag: ElementTag) -> Self {
        match tag.exclusivity_group() {
            Some(group) => MergeKey::Group(group),
            None => MergeKey::Tag(tag),
        }
    }
}

/// An ordered sequence of information elements, the unit exchanged with the
/// surrounding PDU layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserDataHeader {
    pub elements: Vec<InformationElement>,
}

impl UserDataHeader {
    pub fn new(elements: Vec<InformationElement>) -> Self {
        Self { elements }
    }

    /// The concatenation info carried by this header, if any, regardless of
    /// which reference width the carrying tag uses.
    pub fn concatenation(&self) -> Option<&ConcatenatedShortMessage> {
        self.elements.iter().find_map(|element| match &element.body {
            ElementBody::Concatenated(info) => Some(info),
            _ => None,
        })
    }

    /// Total wire size including the udhl byte, for callers budgeting the
    /// remaining octets of the short message body.
    pub fn encoded_len(&self) -> usize {
        1 + self
            .elements
            .iter()
            .map(InformationElement::encoded_size)
            .sum::<usize>()
    }

    /// Encode the udhl prefix and all elements in input order. Duplicate
    /// non-repeatable tags and exclusivity-group conflicts are caller bugs
    /// and reject the whole call; nothing is written on any error.
    pub fn encode(&self, buf: &mut BytesMut) -> Result<(), UdhEncodeError> {
        self.check_conflicts()?;

        let mut body = BytesMut::new();
        for element in &self.elements {
            element.encode(&mut body)?;
        }
        if body.len() > MAX_HEADER_LEN {
            return Err(UdhEncodeError::HeaderTooLong(body.len()));
        }

        buf.put_u8(body.len() as u8);
        buf.extend_from_slice(&body);
        Ok(())
    }

    /// Convenience wrapper returning the encoded header as frozen bytes.
    pub fn to_bytes(&self) -> Result<Bytes, UdhEncodeError> {
        let mut buf = BytesMut::with_capacity(self.encoded_len());
        self.encode(&mut buf)?;
        Ok(buf.freeze())
    }

    fn check_conflicts(&self) -> Result<(), UdhEncodeError> {
        for (index, element) in self.elements.iter().enumerate() {
            for earlier in &self.elements[..index] {
                if earlier.tag == element.tag {
                    if !element.tag.is_repeatable() {
                        return Err(UdhEncodeError::RepeatedElement(element.tag));
                    }
                } else if earlier.tag.exclusivity_group().is_some()
                    && earlier.tag.exclusivity_group() == element.tag.exclusivity_group()
                {
                    return Err(UdhEncodeError::MutuallyExclusiveElements(
                        earlier.tag,
                        element.tag,
                    ));
                }
            }
        }
        Ok(())
    }

    /// Decode a full header, advancing the cursor by exactly `1 + udhl`
    /// bytes on success. Conflicting elements merge last-occurrence-wins
    /// while keeping the first occurrence's position; unrecognized elements
    /// are dropped after their bytes are consumed.
    pub fn decode(buf: &mut Cursor<&[u8]>) -> Result<Self, UdhParseError> {
        let declared_len = usize::from(codec::decode_u8(buf, "user data header length")?);
        let region = codec::take_region(buf, declared_len, "user data header")?;

        let mut region_buf = Cursor::new(region);
        let mut merged: Vec<(MergeKey, InformationElement)> = Vec::new();
        while region_buf.has_remaining() {
            let element = InformationElement::decode(&mut region_buf)?;
            if element.body == ElementBody::Unrepresented {
                continue;
            }

            let key = MergeKey::for_tag(element.tag);
            match merged.iter_mut().find(|(existing, _)| *existing == key) {
                Some((_, slot)) => {
                    tracing::trace!(
                        tag = element.tag.to_byte(),
                        "later information element supersedes an earlier one"
                    );
                    *slot = element;
                }
                None => merged.push((key, element)),
            }
        }

        Ok(UserDataHeader {
            elements: merged.into_iter().map(|(_, element)| element).collect(),
        })
    }
}

impl From<Vec<InformationElement>> for UserDataHeader {
    fn from(elements: Vec<InformationElement>) -> Self {
        Self { elements }
    }
}

impl IntoIterator for UserDataHeader {
    type Item = InformationElement;
    type IntoIter = std::vec::IntoIter<InformationElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
