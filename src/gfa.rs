//! The GFA line types, the GFA object that collects them, and the
//! `Record` sum type that ties the list-stored line types together.

pub mod error;
pub mod header;
pub mod link;
pub mod orientation;
pub mod segment;
pub mod traits;

pub use self::error::*;
pub use self::header::*;
pub use self::link::*;
pub use self::orientation::*;
pub use self::segment::*;
pub use self::traits::*;

pub use crate::optfields::CountDecoding;

use fnv::FnvHashSet;

/// A GFA graph under construction. Segments and links are kept in the
/// order they were inserted, and nothing is ever removed.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct GFA {
    header: Header,
    pub(crate) segments: Vec<Segment>,
    pub(crate) links: Vec<Link>,
    containments: Vec<Containment>,
    paths: Vec<Path>,
    /// Names of every segment in `segments`
    pub(crate) segment_names: FnvHashSet<Vec<u8>>,
}

impl GFA {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Always empty until containments can be inserted
    pub fn containments(&self) -> &[Containment] {
        &self.containments
    }

    /// Always empty until paths can be inserted
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// True if a segment with this name has been inserted
    pub fn contains_segment(&self, name: &[u8]) -> bool {
        self.segment_names.contains(name)
    }

    /// Insert a record of any kind, see `GFARecord::insert`.
    pub fn insert_record(&mut self, record: Record) -> InsertResult {
        record.insert(self)
    }

    /// Iterate over every formatted record line: all segments, then
    /// all links. The header and comments are not included.
    pub fn lines_iter(&self) -> impl Iterator<Item = String> + '_ {
        let segs = self.segments.iter().map(GFARecord::format);
        let links = self.links.iter().map(GFARecord::format);
        segs.chain(links)
    }
}

/// Reserved for containment lines; only the line type is modelled.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Containment;

impl Containment {
    pub const TYPE: &'static str = "C";
}

/// Reserved for path lines; only the line type is modelled.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Path;

impl Path {
    pub const TYPE: &'static str = "P";
}

impl GFARecord for Containment {
    fn kind(&self) -> &'static str {
        "containment"
    }

    fn format(&self) -> String {
        Self::TYPE.to_string()
    }

    fn insert(self, _gfa: &mut GFA) -> InsertResult {
        Err(InsertError::UnsupportedRecord(self.kind()))
    }
}

impl GFARecord for Path {
    fn kind(&self) -> &'static str {
        "path"
    }

    fn format(&self) -> String {
        Self::TYPE.to_string()
    }

    fn insert(self, _gfa: &mut GFA) -> InsertResult {
        Err(InsertError::UnsupportedRecord(self.kind()))
    }
}

/// Enum containing the different kinds of list-stored GFA lines.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Segment(Segment),
    Link(Link),
    Containment(Containment),
    Path(Path),
}

impl GFARecord for Record {
    fn kind(&self) -> &'static str {
        match self {
            Record::Segment(s) => s.kind(),
            Record::Link(l) => l.kind(),
            Record::Containment(c) => c.kind(),
            Record::Path(p) => p.kind(),
        }
    }

    fn format(&self) -> String {
        match self {
            Record::Segment(s) => s.format(),
            Record::Link(l) => l.format(),
            Record::Containment(c) => c.format(),
            Record::Path(p) => p.format(),
        }
    }

    fn insert(self, gfa: &mut GFA) -> InsertResult {
        match self {
            Record::Segment(s) => s.insert(gfa),
            Record::Link(l) => l.insert(gfa),
            Record::Containment(c) => c.insert(gfa),
            Record::Path(p) => p.insert(gfa),
        }
    }
}

impl From<Segment> for Record {
    fn from(s: Segment) -> Self {
        Record::Segment(s)
    }
}

impl From<Link> for Record {
    fn from(l: Link) -> Self {
        Record::Link(l)
    }
}
