use std::fmt;

use bstr::{BStr, BString, ByteSlice};
use log::{debug, trace};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use super::error::{InsertError, InsertResult, RecordError, RecordResult};
use super::traits::{check_name, GFARecord};
use super::GFA;
use crate::optfields::{CountDecoding, OptField};

/// A segment in a GFA graph. The length is always the length of the
/// sequence; the counts are 0 and the URI empty when absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Segment {
    name: BString,
    sequence: BString,
    length: usize,
    read_count: i64,
    fragment_count: i64,
    kmer_count: i64,
    checksum: Option<BString>,
    uri: String,
}

impl Segment {
    pub const TYPE: &'static str = "S";

    /// Create a segment from its name, sequence, and a list of
    /// optional fields in TAG:TYPE:VALUE form. Counts are read as
    /// decimal integers.
    pub fn new<I>(name: &[u8], sequence: &[u8], optional: I) -> RecordResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        Self::with_decoding(name, sequence, optional, CountDecoding::Decimal)
    }

    /// Like `Segment::new`, with an explicit way of decoding the RC,
    /// FC, and KC fields.
    pub fn with_decoding<I>(
        name: &[u8],
        sequence: &[u8],
        optional: I,
        decoding: CountDecoding,
    ) -> RecordResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        check_name("Segment name", name)?;
        if sequence.is_empty() {
            return Err(RecordError::MissingSequence);
        }

        let mut seg = Segment {
            name: name.into(),
            sequence: sequence.into(),
            length: sequence.len(),
            read_count: 0,
            fragment_count: 0,
            kmer_count: 0,
            checksum: None,
            uri: String::new(),
        };

        for token in optional {
            seg.apply_field(token.as_ref(), decoding)?;
        }

        Ok(seg)
    }

    fn apply_field(
        &mut self,
        token: &[u8],
        decoding: CountDecoding,
    ) -> RecordResult<()> {
        let field = OptField::decode(token)?;
        let invalid = || RecordError::InvalidOptionalValue(token.into());

        match &field.tag {
            b"RC" => self.read_count = field.count(decoding).ok_or_else(invalid)?,
            b"FC" => {
                self.fragment_count = field.count(decoding).ok_or_else(invalid)?
            }
            b"KC" => self.kmer_count = field.count(decoding).ok_or_else(invalid)?,
            b"SH" => self.checksum = Some(field.value.into()),
            b"UR" => {
                self.uri = field.value.to_str().map_err(|_| invalid())?.into()
            }
            b"LN" => trace!("ignoring LN field of segment {}", self.name),
            _ => {
                return Err(RecordError::UnrecognizedOptionalField(token.into()))
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &BStr {
        self.name.as_bstr()
    }

    pub fn sequence(&self) -> &BStr {
        self.sequence.as_bstr()
    }

    /// Length of the sequence in bytes
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn read_count(&self) -> Option<i64> {
        Some(self.read_count).filter(|&c| c != 0)
    }

    pub fn fragment_count(&self) -> Option<i64> {
        Some(self.fragment_count).filter(|&c| c != 0)
    }

    pub fn kmer_count(&self) -> Option<i64> {
        Some(self.kmer_count).filter(|&c| c != 0)
    }

    pub fn checksum(&self) -> Option<&BStr> {
        self.checksum.as_ref().map(|c| c.as_bstr())
    }

    pub fn uri(&self) -> Option<&str> {
        Some(self.uri.as_str()).filter(|u| !u.is_empty())
    }
}

/// Writes the segment line. The optional fields follow LN in the
/// order RC, FC, KC, SH, UR, each only if present.
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\tLN:i:{}",
            Self::TYPE,
            self.name,
            self.sequence,
            self.length
        )?;
        if let Some(rc) = self.read_count() {
            write!(f, "\tRC:i:{}", rc)?;
        }
        if let Some(fc) = self.fragment_count() {
            write!(f, "\tFC:i:{}", fc)?;
        }
        if let Some(kc) = self.kmer_count() {
            write!(f, "\tKC:i:{}", kc)?;
        }
        if let Some(sh) = self.checksum() {
            write!(f, "\tSH:i:{}", sh)?;
        }
        if let Some(ur) = self.uri() {
            write!(f, "\tUR:i:{}", ur)?;
        }
        Ok(())
    }
}

impl GFARecord for Segment {
    fn kind(&self) -> &'static str {
        "segment"
    }

    fn format(&self) -> String {
        self.to_string()
    }

    fn insert(self, gfa: &mut GFA) -> InsertResult {
        if gfa.segment_names.contains(self.name.as_bytes()) {
            debug!("rejecting duplicate segment {}", self.name);
            return Err(InsertError::DuplicateSegment(self.name));
        }
        gfa.segment_names.insert(self.name.to_vec());
        gfa.segments.push(self);
        Ok(())
    }
}
