pub mod error;

pub use self::error::*;

use std::fs::File;
use std::io::BufReader;

use bstr::{io::BufReadExt, BString, ByteSlice};
use log::warn;

use crate::gfa::*;
use crate::optfields::OptField;

/// Configures how lines are turned into records and what happens to
/// lines that can't be used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GFAParsingConfig {
    pub count_decoding: CountDecoding,
    pub tolerance: ParserTolerance,
}

impl GFAParsingConfig {
    pub fn with_count_decoding(mut self, count_decoding: CountDecoding) -> Self {
        self.count_decoding = count_decoding;
        self
    }

    pub fn with_tolerance(mut self, tolerance: ParserTolerance) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// A single tokenized GFA line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// A header line, with the GFA major version if it had a VN tag
    Header(Option<u32>),
    /// The text of a comment line, without the leading `#`
    Comment(BString),
    Record(Record),
}

/// Splits GFA lines on tabs and feeds the fields to the record
/// constructors.
#[derive(Debug, Clone, Default)]
pub struct GFAParser {
    config: GFAParsingConfig,
}

impl GFAParser {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(config: GFAParsingConfig) -> Self {
        GFAParser { config }
    }

    pub fn config(&self) -> &GFAParsingConfig {
        &self.config
    }

    /// Parse a single line, with or without the trailing newline.
    pub fn parse_gfa_line(&self, line: &[u8]) -> GFAResult<Line> {
        let line = line.trim_end_with(|c| c == '\n' || c == '\r');
        if line.is_empty() {
            return Err(ParseError::EmptyLine);
        }

        if line[0] == b'#' {
            let text = match line.get(1) {
                Some(b'\t') | Some(b' ') => &line[2..],
                _ => &line[1..],
            };
            return Ok(Line::Comment(text.into()));
        }

        let fields: Vec<&[u8]> = line.split_str(b"\t").collect();
        let invalid = |err| ParseError::invalid_record(err, line);
        let required = |n: usize| {
            if fields.len() < n {
                Err(ParseError::MissingFields(line_string(line)))
            } else {
                Ok(())
            }
        };

        match fields[0] {
            b"H" => parse_header(&fields[1..])
                .map(Line::Header)
                .map_err(invalid),
            b"S" => {
                required(3)?;
                Segment::with_decoding(
                    fields[1],
                    fields[2],
                    &fields[3..],
                    self.config.count_decoding,
                )
                .map(|s| Line::Record(Record::Segment(s)))
                .map_err(invalid)
            }
            b"L" => {
                required(6)?;
                Link::new(
                    fields[1],
                    fields[2],
                    fields[3],
                    fields[4],
                    fields[5],
                    &fields[6..],
                )
                .map(|l| Line::Record(Record::Link(l)))
                .map_err(invalid)
            }
            b"C" => Ok(Line::Record(Record::Containment(Containment))),
            b"P" => Ok(Line::Record(Record::Path(Path))),
            _ => Err(ParseError::UnknownLineType(line_string(line))),
        }
    }

    /// Parse a line and apply it to the GFA: records are inserted,
    /// comments are added to the header, and a header line sets the
    /// version.
    pub fn parse_into(&self, gfa: &mut GFA, line: &[u8]) -> GFAResult<()> {
        match self.parse_gfa_line(line)? {
            Line::Header(Some(version)) => gfa
                .header_mut()
                .set_version(version)
                .map_err(|err| ParseError::invalid_version(err, line)),
            Line::Header(None) => Ok(()),
            Line::Comment(text) => {
                gfa.header_mut().add_comment(text);
                Ok(())
            }
            Line::Record(record) => gfa
                .insert_record(record)
                .map_err(|err| ParseError::invalid_insert(err, line)),
        }
    }

    /// Build a GFA from a sequence of lines. Errors that the
    /// configured tolerance allows are logged and the line skipped.
    pub fn parse_lines<I>(&self, lines: I) -> GFAResult<GFA>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut gfa = GFA::new();
        for line in lines {
            self.parse_line_tolerant(&mut gfa, line.as_ref())?;
        }
        Ok(gfa)
    }

    /// Build a GFA from the file at `path`.
    pub fn parse_file<P: AsRef<std::path::Path>>(&self, path: P) -> GFAResult<GFA> {
        let file = File::open(path)?;
        let mut gfa = GFA::new();
        for line in BufReader::new(file).byte_lines() {
            self.parse_line_tolerant(&mut gfa, &line?)?;
        }
        Ok(gfa)
    }

    fn parse_line_tolerant(&self, gfa: &mut GFA, line: &[u8]) -> GFAResult<()> {
        match self.parse_into(gfa, line) {
            Err(err) if err.can_safely_continue(&self.config.tolerance) => {
                warn!("skipping line: {}", err);
                Ok(())
            }
            res => res,
        }
    }
}

/// The version is taken from the VN tag; "1.0" and "1" are both
/// version 1, and a major version of 0 is an unversioned header.
/// Other tags are ignored.
fn parse_header(fields: &[&[u8]]) -> Result<Option<u32>, RecordError> {
    let mut version = None;
    for &token in fields {
        let field = OptField::decode(token)?;
        if &field.tag == b"VN" {
            let major = field.value.split_str(".").next().unwrap_or_default();
            let major = major
                .to_str()
                .ok()
                .and_then(|s| s.parse::<u32>().ok())
                .ok_or_else(|| RecordError::InvalidOptionalValue(token.into()))?;
            version = Some(major).filter(|&v| v != 0);
        }
    }
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> GFAResult<Line> {
        GFAParser::new().parse_gfa_line(line.as_bytes())
    }

    #[test]
    fn header_versions() {
        assert_eq!(Line::Header(Some(1)), parse("H\tVN:Z:1.0").unwrap());
        assert_eq!(Line::Header(Some(1)), parse("H\tVN:Z:1").unwrap());
        assert_eq!(Line::Header(Some(2)), parse("H\tVN:Z:2.0").unwrap());
        assert_eq!(Line::Header(None), parse("H").unwrap());
        assert_eq!(Line::Header(None), parse("H\tVN:Z:0").unwrap());
        assert_eq!(Line::Header(None), parse("H\tVN:Z:0.9").unwrap());
        assert!(matches!(
            parse("H\tVN:Z:one"),
            Err(ParseError::InvalidRecord(
                RecordError::InvalidOptionalValue(_),
                _
            ))
        ));
    }

    #[test]
    fn comment_lines() {
        assert_eq!(Line::Comment("hello".into()), parse("#\thello").unwrap());
        assert_eq!(Line::Comment("hello".into()), parse("# hello").unwrap());
        assert_eq!(Line::Comment("hello".into()), parse("#hello").unwrap());
        assert_eq!(Line::Comment("".into()), parse("#").unwrap());
    }

    #[test]
    fn segment_line() {
        let line = parse("S\t11\tACCTT\tLN:i:5\tRC:i:40\r\n").unwrap();
        match line {
            Line::Record(Record::Segment(seg)) => {
                assert_eq!(seg.name(), "11");
                assert_eq!(Some(40), seg.read_count());
            }
            other => panic!("expected a segment, got {:?}", other),
        }
    }

    #[test]
    fn link_line() {
        let line = parse("L\t11\t+\t12\t-\t4M\tMQ:i:60").unwrap();
        let expected = Link::new(b"11", b"+", b"12", b"-", b"4M", &[] as &[&[u8]])
            .unwrap();
        assert_eq!(Line::Record(Record::Link(expected)), line);
    }

    #[test]
    fn bad_lines() {
        assert!(matches!(parse(""), Err(ParseError::EmptyLine)));
        assert!(matches!(parse("\n"), Err(ParseError::EmptyLine)));
        assert!(matches!(parse("X\tfoo"), Err(ParseError::UnknownLineType(_))));
        assert!(matches!(parse("S\t11"), Err(ParseError::MissingFields(_))));
        assert!(matches!(
            parse("L\t1\t+\t2\t-"),
            Err(ParseError::MissingFields(_))
        ));
        assert!(matches!(
            parse("S\t1+\tACGT"),
            Err(ParseError::InvalidRecord(RecordError::InvalidName { .. }, _))
        ));
        assert!(matches!(
            parse("L\t1\t?\t2\t-\t0M"),
            Err(ParseError::InvalidRecord(
                RecordError::InvalidOrientation { .. },
                _
            ))
        ));
    }

    #[test]
    fn reserved_line_types() {
        assert_eq!(
            Line::Record(Record::Containment(Containment)),
            parse("C\t1\t+\t2\t-\t10\t4M").unwrap()
        );
        assert_eq!(
            Line::Record(Record::Path(Path)),
            parse("P\tp1\t1+,2-\t4M").unwrap()
        );
    }

    const SMALL: &str = "H\tVN:Z:1.0
# a small graph
S\t1\tACGT
S\t2\tTTGA\tRC:i:3

S\t3\tC
L\t1\t+\t2\t-\t0M
L\t2\t-\t3\t+\t*
P\tp1\t1+,2-,3+\t0M,*
";

    #[test]
    fn safe_parse_skips_paths_and_blanks() {
        let gfa = GFAParser::new().parse_lines(SMALL.lines()).unwrap();
        assert_eq!(1, gfa.header().version());
        assert_eq!(gfa.header().comment_lines(), "#\ta small graph");
        assert_eq!(3, gfa.segments().len());
        assert_eq!(2, gfa.links().len());
        assert!(gfa.paths().is_empty());
    }

    #[test]
    fn pedantic_parse_stops() {
        let config = GFAParsingConfig::default()
            .with_tolerance(ParserTolerance::Pedantic);
        let parser = GFAParser::with_config(config);
        assert!(matches!(
            parser.parse_lines(SMALL.lines()),
            Err(ParseError::EmptyLine)
        ));
    }

    #[test]
    fn duplicates_depend_on_tolerance() {
        let lines = ["S\t1\tACGT", "S\t1\tTT", "S\t2\tA"];

        let res = GFAParser::new().parse_lines(&lines);
        assert!(matches!(
            res,
            Err(ParseError::InvalidInsert(InsertError::DuplicateSegment(_), _))
        ));

        let config = GFAParsingConfig::default()
            .with_tolerance(ParserTolerance::IgnoreAll);
        let gfa = GFAParser::with_config(config).parse_lines(&lines).unwrap();
        assert_eq!(2, gfa.segments().len());
        assert_eq!(gfa.segments()[0].sequence(), "ACGT");
    }

    #[test]
    fn second_header_version_fails() {
        let lines = ["H\tVN:Z:1.0", "H\tVN:Z:1.0"];
        assert!(matches!(
            GFAParser::new().parse_lines(&lines),
            Err(ParseError::InvalidVersion(VersionError::AlreadySet, _))
        ));

        let lines = ["H\tVN:Z:2.0"];
        assert!(matches!(
            GFAParser::new().parse_lines(&lines),
            Err(ParseError::InvalidVersion(VersionError::Unsupported(2), _))
        ));
    }

    #[test]
    fn legacy_count_decoding() {
        let config = GFAParsingConfig::default()
            .with_count_decoding(CountDecoding::FirstByte);
        let gfa = GFAParser::with_config(config)
            .parse_lines(&["S\t1\tACGT\tRC:i:5"])
            .unwrap();
        assert_eq!(Some(53), gfa.segments()[0].read_count());
    }

    #[test]
    fn parse_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL.as_bytes()).unwrap();
        file.flush().unwrap();

        let gfa = GFAParser::new().parse_file(file.path()).unwrap();
        assert_eq!(3, gfa.segments().len());
        assert_eq!(2, gfa.links().len());

        let missing = GFAParser::new().parse_file("/no/such/file.gfa");
        assert!(matches!(missing, Err(ParseError::IOError(_))));
    }
}
