use bstr::BString;

use super::error::{InsertResult, RecordError, RecordResult};
use super::GFA;

/// The operations shared by every GFA line type that is stored as a
/// list in a GFA, i.e. everything except the header.
pub trait GFARecord: Sized {
    /// Human-readable name of the record type, e.g. "segment"
    fn kind(&self) -> &'static str;

    /// The record as a tab-delimited GFA line, without a newline
    fn format(&self) -> String;

    /// Add the record to a GFA, checking any invariants the record
    /// type has at the container level. The GFA is left unchanged if
    /// this fails.
    fn insert(self, gfa: &mut GFA) -> InsertResult;
}

/// Bytes that may not appear in a segment name: `+-*=` and ASCII
/// whitespace, vertical tab included.
const RESERVED_NAME_BYTES: &[u8] = b"+-*= \t\n\r\x0B\x0C";

/// Check that a segment name, given as the field `field` of some
/// record, doesn't contain `+`, `-`, `*`, `=`, or whitespace. An empty
/// name passes.
pub(crate) fn check_name(field: &'static str, name: &[u8]) -> RecordResult<()> {
    if name.iter().any(|b| RESERVED_NAME_BYTES.contains(b)) {
        return Err(RecordError::InvalidName {
            field,
            name: BString::from(name),
        });
    }
    Ok(())
}
