use nom::{bytes::complete::*, IResult};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub enum CIGAROp {
    M,
    I,
    D,
    N,
    S,
    H,
    P,
    E,
    X,
}

impl CIGAROp {
    fn to_u8_char(self) -> u8 {
        use CIGAROp::*;
        match self {
            M => b'M',
            I => b'I',
            D => b'D',
            N => b'N',
            S => b'S',
            H => b'H',
            P => b'P',
            E => b'=',
            X => b'X',
        }
    }

    #[inline]
    pub fn consumes_query(&self) -> bool {
        use CIGAROp::*;
        matches!(self, M | E | X | I | S)
    }

    #[inline]
    pub fn consumes_reference(&self) -> bool {
        use CIGAROp::*;
        matches!(self, M | E | X | D | N)
    }
}

impl std::fmt::Display for CIGAROp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(self.to_u8_char()))
    }
}

/// A parsed link overlap, as a list of (length, operation) pairs.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct CIGAR(pub Vec<(u32, CIGAROp)>);

impl CIGAR {
    fn parse_op_cmd(input: &[u8]) -> IResult<&[u8], CIGAROp> {
        use nom::{branch::alt, combinator::map};
        use CIGAROp::*;
        alt((
            map(tag("M"), |_| M),
            map(tag("I"), |_| I),
            map(tag("D"), |_| D),
            map(tag("N"), |_| N),
            map(tag("S"), |_| S),
            map(tag("H"), |_| H),
            map(tag("P"), |_| P),
            map(tag("="), |_| E),
            map(tag("X"), |_| X),
        ))(input)
    }

    fn parse_len(input: &[u8]) -> IResult<&[u8], u32> {
        use nom::{character::complete::digit1, combinator::map_res};
        map_res(digit1, |bs: &[u8]| {
            std::str::from_utf8(bs)
                .map_err(|_| ())
                .and_then(|s| s.parse::<u32>().map_err(|_| ()))
        })(input)
    }

    pub(crate) fn parser_bytestring(i: &[u8]) -> IResult<&[u8], Self> {
        use nom::{combinator::map, multi::many1, sequence::pair};
        map(many1(pair(Self::parse_len, Self::parse_op_cmd)), CIGAR)(i)
    }

    /// Parse a CIGAR from an ASCII byte slice. The whole slice must
    /// be a CIGAR, so `*` and trailing garbage both give None.
    pub fn from_bytestring(i: &[u8]) -> Option<Self> {
        use nom::combinator::all_consuming;
        all_consuming(Self::parser_bytestring)(i)
            .ok()
            .map(|(_, cg)| cg)
    }

    /// Sum of the lengths of all operations
    pub fn len(&self) -> usize {
        self.0.iter().map(|(len, _)| *len as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, CIGAROp)> + '_ {
        self.0.iter().copied()
    }

    /// Number of bases of the `to` segment covered by the overlap
    pub fn query_len(&self) -> usize {
        self.iter()
            .filter(|(_, op)| op.consumes_query())
            .map(|(len, _)| len as usize)
            .sum()
    }

    /// Number of bases of the `from` segment covered by the overlap
    pub fn ref_len(&self) -> usize {
        self.iter()
            .filter(|(_, op)| op.consumes_reference())
            .map(|(len, _)| len as usize)
            .sum()
    }
}

impl std::fmt::Display for CIGAR {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (len, op) in self.iter() {
            write!(f, "{}{}", len, op)?
        }
        Ok(())
    }
}
