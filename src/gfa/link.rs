use std::fmt;

use bstr::{BStr, BString, ByteSlice};
use log::trace;

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use super::error::{InsertResult, RecordError, RecordResult};
use super::orientation::Orientation;
use super::traits::{check_name, GFARecord};
use super::GFA;
use crate::cigar::CIGAR;

/// A link from the end of one oriented segment to the start of
/// another. If an orientation is `-`, the reverse complement of that
/// segment's sequence takes part in the overlap.
///
/// The overlap is kept exactly as given: usually a CIGAR string, `*`
/// if the nature of the overlap is unspecified. An overlap of `0M`
/// means the `to` segment follows directly after `from`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Link {
    from_segment: BString,
    from_orient: Orientation,
    to_segment: BString,
    to_orient: Orientation,
    overlap: BString,
}

fn parse_orient(field: &'static str, value: &[u8]) -> RecordResult<Orientation> {
    Orientation::from_bytes_plus_minus(value).ok_or_else(|| {
        RecordError::InvalidOrientation {
            field,
            value: value.into(),
        }
    })
}

impl Link {
    pub const TYPE: &'static str = "L";

    /// Create a link from its five required fields. Optional fields
    /// are accepted but not stored.
    pub fn new<I>(
        from_segment: &[u8],
        from_orient: &[u8],
        to_segment: &[u8],
        to_orient: &[u8],
        overlap: &[u8],
        optional: I,
    ) -> RecordResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        check_name("From segment name", from_segment)?;
        check_name("To segment name", to_segment)?;
        let from_orient = parse_orient("From orientation", from_orient)?;
        let to_orient = parse_orient("To orientation", to_orient)?;

        let ignored = optional.into_iter().count();
        if ignored > 0 {
            trace!("ignoring {} optional fields on link", ignored);
        }

        Ok(Link {
            from_segment: from_segment.into(),
            from_orient,
            to_segment: to_segment.into(),
            to_orient,
            overlap: overlap.into(),
        })
    }

    pub fn from_segment(&self) -> &BStr {
        self.from_segment.as_bstr()
    }

    pub fn from_orient(&self) -> Orientation {
        self.from_orient
    }

    pub fn to_segment(&self) -> &BStr {
        self.to_segment.as_bstr()
    }

    pub fn to_orient(&self) -> Orientation {
        self.to_orient
    }

    /// The overlap field, verbatim
    pub fn overlap(&self) -> &BStr {
        self.overlap.as_bstr()
    }

    /// True if the overlap is `*`
    pub fn is_unspecified_overlap(&self) -> bool {
        self.overlap == "*"
    }

    /// Parses the overlap as a CIGAR string. Returns None if the
    /// overlap is `*`, or isn't entirely a valid CIGAR.
    pub fn overlap_cigar(&self) -> Option<CIGAR> {
        CIGAR::from_bytestring(&self.overlap)
    }

    /// True if `to` begins exactly where `from` ends, i.e. the overlap
    /// is a CIGAR of length zero such as `0M`.
    pub fn is_adjacent(&self) -> bool {
        self.overlap_cigar().map_or(false, |cg| cg.len() == 0)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}",
            Self::TYPE,
            self.from_segment,
            self.from_orient,
            self.to_segment,
            self.to_orient,
            self.overlap
        )
    }
}

impl GFARecord for Link {
    fn kind(&self) -> &'static str {
        "link"
    }

    fn format(&self) -> String {
        self.to_string()
    }

    /// Links are always appended; parallel links and links to
    /// segments that aren't in the graph are both allowed.
    fn insert(self, gfa: &mut GFA) -> InsertResult {
        gfa.links.push(self);
        Ok(())
    }
}
