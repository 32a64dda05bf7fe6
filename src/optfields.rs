use bstr::{BStr, ByteSlice};

use lazy_static::lazy_static;
use regex::bytes::Regex;

use crate::gfa::error::{RecordError, RecordResult};

/// An optional field a la SAM, decoded into its three parts but
/// without interpreting the value. Borrows from the input token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptField<'a> {
    pub tag: [u8; 2],
    pub kind: u8,
    pub value: &'a BStr,
}

impl<'a> OptField<'a> {
    /// Decodes a bytestring in the format <TAG>:<TYPE>:<VALUE>, where
    /// TAG matches [A-Za-z][A-Za-z0-9] and TYPE is one of AifZJHB.
    /// Everything after the second colon is the value, colons
    /// included, so URIs survive intact.
    pub fn decode(input: &'a [u8]) -> RecordResult<Self> {
        lazy_static! {
            static ref RE_FIELD: Regex =
                Regex::new(r"(?s-u)^([A-Za-z][A-Za-z0-9]):([AifZJHB]):(.*)$")
                    .unwrap();
        }

        let caps = RE_FIELD
            .captures(input)
            .ok_or_else(|| RecordError::MalformedOptionalField(input.into()))?;

        let tag = caps.get(1).map(|m| m.as_bytes()).unwrap_or_default();
        let kind = caps.get(2).map(|m| m.as_bytes()[0]).unwrap_or_default();
        let value = caps.get(3).map(|m| m.as_bytes()).unwrap_or_default();

        Ok(OptField {
            tag: [tag[0], tag[1]],
            kind,
            value: value.as_bstr(),
        })
    }

    /// Interprets the value as an integer using the given decoding.
    pub fn count(&self, decoding: CountDecoding) -> Option<i64> {
        decoding.decode(self.value)
    }
}

impl<'a> std::fmt::Display for OptField<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}:{}:{}",
            char::from(self.tag[0]),
            char::from(self.tag[1]),
            char::from(self.kind),
            self.value
        )
    }
}

/// How the integer-valued count fields (RC, FC, KC) of a segment are
/// read from their value bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountDecoding {
    /// Parse the value as a signed decimal integer, so `RC:i:42` is
    /// 42. A value that isn't an integer is rejected.
    Decimal,
    /// Use the code of the value's first byte, so `RC:i:42` is 52
    /// (the code of '4'). Reproduces output of older GFA tooling that
    /// read counts this way; an empty value is rejected.
    FirstByte,
}

impl Default for CountDecoding {
    fn default() -> Self {
        CountDecoding::Decimal
    }
}

impl CountDecoding {
    pub fn decode(&self, value: &[u8]) -> Option<i64> {
        match self {
            CountDecoding::Decimal => value.to_str().ok()?.parse().ok(),
            CountDecoding::FirstByte => value.first().map(|&b| i64::from(b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_parts() {
        let field = OptField::decode(b"RC:i:123").unwrap();
        assert_eq!(b"RC", &field.tag);
        assert_eq!(b'i', field.kind);
        assert_eq!(field.value, "123");
        assert_eq!("RC:i:123", field.to_string());
    }

    #[test]
    fn value_keeps_colons() {
        let field = OptField::decode(b"UR:Z:http://x.org/seg.fa").unwrap();
        assert_eq!(b"UR", &field.tag);
        assert_eq!(field.value, "http://x.org/seg.fa");

        let field = OptField::decode(b"SH:H:").unwrap();
        assert!(field.value.is_empty());
    }

    #[test]
    fn malformed_fields() {
        let bad_fields: [&[u8]; 6] =
            [b"RC", b"RC:i", b"RC5", b"R:i:5", b"RC:q:5", b""];
        for bad in bad_fields.iter().copied() {
            assert_eq!(
                Err(RecordError::MalformedOptionalField(bad.into())),
                OptField::decode(bad)
            );
        }
    }

    #[test]
    fn decimal_counts() {
        let dec = CountDecoding::Decimal;
        assert_eq!(Some(5), dec.decode(b"5"));
        assert_eq!(Some(1234), dec.decode(b"1234"));
        assert_eq!(Some(-3), dec.decode(b"-3"));
        assert_eq!(None, dec.decode(b"12x"));
        assert_eq!(None, dec.decode(b""));
    }

    #[test]
    fn first_byte_counts() {
        let fb = CountDecoding::FirstByte;
        assert_eq!(Some(53), fb.decode(b"5"));
        assert_eq!(Some(49), fb.decode(b"1234"));
        assert_eq!(Some(i64::from(b'x')), fb.decode(b"x"));
        assert_eq!(None, fb.decode(b""));
    }
}
