use std::{error, fmt};

use bstr::{BString, ByteSlice};

/// Errors raised while constructing a single record from its fields.
/// A record that fails construction never exists.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordError {
    /// A segment name contained one of `+-*=` or whitespace. Includes
    /// the field name and the offending name.
    InvalidName { field: &'static str, name: BString },
    /// Segments must carry a sequence.
    MissingSequence,
    /// An orientation field was something other than `+` or `-`.
    InvalidOrientation { field: &'static str, value: BString },
    /// An optional field that isn't shaped like `TAG:TYPE:VALUE`.
    MalformedOptionalField(BString),
    /// An optional field whose tag the record doesn't know.
    UnrecognizedOptionalField(BString),
    /// An optional field whose value couldn't be decoded, e.g. a
    /// non-numeric read count.
    InvalidOptionalValue(BString),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use RecordError as RE;
        match self {
            RE::InvalidName { field, name } => write!(
                f,
                "{} `{}` can't contain +/-/*/= or whitespace",
                field,
                name.to_str_lossy()
            ),
            RE::MissingSequence => write!(f, "Segment must have a sequence"),
            RE::InvalidOrientation { field, value } => write!(
                f,
                "{} must be either + or -, was `{}`",
                field,
                value.to_str_lossy()
            ),
            RE::MalformedOptionalField(tok) => write!(
                f,
                "Optional field `{}` is not of the form TAG:TYPE:VALUE",
                tok.to_str_lossy()
            ),
            RE::UnrecognizedOptionalField(tok) => write!(
                f,
                "Don't recognise optional field: {}",
                tok.to_str_lossy()
            ),
            RE::InvalidOptionalValue(tok) => write!(
                f,
                "Failed to decode the value of optional field: {}",
                tok.to_str_lossy()
            ),
        }
    }
}

impl error::Error for RecordError {}

/// Violations of the header's version policy. The header is left
/// unchanged when any of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionError {
    /// The header already has a version, or 0 (the unset value) was
    /// requested.
    AlreadySet,
    /// A GFA version that exists but isn't supported, i.e. 2.
    Unsupported(u32),
    /// Anything other than 1 or 2.
    OutOfRange(u32),
}

impl fmt::Display for VersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use VersionError as VE;
        match self {
            VE::AlreadySet => {
                write!(f, "GFA instance already has a version number attached")
            }
            VE::Unsupported(v) => {
                write!(f, "GFA version {} is currently unsupported", v)
            }
            VE::OutOfRange(v) => write!(
                f,
                "GFA format must be either version 1 or version 2, got {}",
                v
            ),
        }
    }
}

impl error::Error for VersionError {}

/// Errors raised when inserting a record into a GFA. The GFA is left
/// unchanged when any of these is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertError {
    /// A segment with this name is already present.
    DuplicateSegment(BString),
    /// The record kind is reserved but not yet supported by the
    /// container. Includes the record kind.
    UnsupportedRecord(&'static str),
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InsertError as IE;
        match self {
            IE::DuplicateSegment(name) => write!(
                f,
                "Duplicate segment name already present in GFA instance: {}",
                name.to_str_lossy()
            ),
            IE::UnsupportedRecord(kind) => {
                write!(f, "Inserting {} records is not supported", kind)
            }
        }
    }
}

impl error::Error for InsertError {}

pub type RecordResult<T> = Result<T, RecordError>;
pub type InsertResult = Result<(), InsertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_messages_are_distinct() {
        let unsupported = VersionError::Unsupported(2).to_string();
        let range = VersionError::OutOfRange(3).to_string();
        assert_ne!(unsupported, range);
        assert!(range.contains("version 1 or version 2"));
    }

    #[test]
    fn messages_name_the_offender() {
        let err = RecordError::UnrecognizedOptionalField("XY:Z:abc".into());
        assert!(err.to_string().contains("XY:Z:abc"));

        let err = InsertError::DuplicateSegment("s1".into());
        assert!(err.to_string().ends_with("s1"));
    }
}
