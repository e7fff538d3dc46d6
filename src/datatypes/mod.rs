mod concatenation;
mod identifier;
mod information_element;
mod user_data_header;

pub use concatenation::{ConcatenatedShortMessage, ReferenceNumberWidth};
pub use identifier::{ElementTag, ExclusivityGroup, InformationElementIdentifier};
pub use information_element::{ElementBody, InformationElement};
pub use user_data_header::UserDataHeader;
