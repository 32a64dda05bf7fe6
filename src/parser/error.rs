use std::{error, fmt};

use bstr::ByteSlice;

use crate::gfa::{InsertError, RecordError, VersionError};

pub type GFAResult<T> = Result<T, ParseError>;

/// How the file parser reacts to lines it can't use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserTolerance {
    /// Skip every bad line; only IO errors stop parsing.
    IgnoreAll,
    /// Skip empty lines, unknown line types, and line types the GFA
    /// can't store yet (containments and paths).
    Safe,
    /// Stop at the first problem.
    Pedantic,
}

impl Default for ParserTolerance {
    fn default() -> Self {
        Self::Safe
    }
}

impl std::str::FromStr for ParserTolerance {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ignore-all" => Ok(Self::IgnoreAll),
            "safe" => Ok(Self::Safe),
            "pedantic" => Ok(Self::Pedantic),
            _ => Err("tolerance must be one of ignore-all, safe, pedantic"),
        }
    }
}

/// Type encapsulating different kinds of GFA parsing errors. The
/// variants that concern a specific line include it as a string.
#[derive(Debug)]
pub enum ParseError {
    /// Tried to parse an empty line.
    EmptyLine,
    /// The line type was something other than 'H', '#', 'S', 'L',
    /// 'C', or 'P'.
    UnknownLineType(String),
    /// The line has fewer fields than its type requires.
    MissingFields(String),
    /// A record couldn't be constructed from the line's fields.
    InvalidRecord(RecordError, String),
    /// The header line's version was rejected.
    InvalidVersion(VersionError, String),
    /// The record was valid but the GFA refused it.
    InvalidInsert(InsertError, String),
    /// Wrapper for an IO error.
    IOError(std::io::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseError as PE;
        match self {
            PE::EmptyLine => write!(f, "Line was empty"),
            PE::UnknownLineType(line) => write!(
                f,
                "Line type was not one of 'H', '#', 'S', 'L', 'C', 'P': {}",
                line
            ),
            PE::MissingFields(line) => {
                write!(f, "Line is missing required fields: {}", line)
            }
            PE::InvalidRecord(err, line) => {
                write!(f, "Failed to parse line {}, error: {}", line, err)
            }
            PE::InvalidVersion(err, line) => {
                write!(f, "Failed to set version from line {}, error: {}", line, err)
            }
            PE::InvalidInsert(err, line) => {
                write!(f, "Failed to insert line {}, error: {}", line, err)
            }
            PE::IOError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl error::Error for ParseError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        use ParseError as PE;
        match self {
            PE::InvalidRecord(err, _) => Some(err),
            PE::InvalidVersion(err, _) => Some(err),
            PE::InvalidInsert(err, _) => Some(err),
            PE::IOError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    #[inline]
    fn from(err: std::io::Error) -> Self {
        Self::IOError(err)
    }
}

#[inline]
pub(crate) fn line_string(line: &[u8]) -> String {
    let mut dest = String::new();
    line.to_str_lossy_into(&mut dest);
    dest
}

impl ParseError {
    #[inline]
    pub(crate) fn invalid_record(error: RecordError, line: &[u8]) -> Self {
        Self::InvalidRecord(error, line_string(line))
    }

    #[inline]
    pub(crate) fn invalid_version(error: VersionError, line: &[u8]) -> Self {
        Self::InvalidVersion(error, line_string(line))
    }

    #[inline]
    pub(crate) fn invalid_insert(error: InsertError, line: &[u8]) -> Self {
        Self::InvalidInsert(error, line_string(line))
    }

    #[inline]
    pub fn can_safely_continue(&self, tol: &ParserTolerance) -> bool {
        use ParserTolerance as Tol;
        match tol {
            Tol::IgnoreAll => !matches!(self, ParseError::IOError(_)),
            Tol::Safe => matches!(
                self,
                ParseError::EmptyLine
                    | ParseError::UnknownLineType(_)
                    | ParseError::InvalidInsert(
                        InsertError::UnsupportedRecord(_),
                        _
                    )
            ),
            Tol::Pedantic => false,
        }
    }
}
