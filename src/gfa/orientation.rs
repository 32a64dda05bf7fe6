#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Represents segment orientation/strand
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub enum Orientation {
    Forward,
    Backward,
}

impl Orientation {
    /// Parse an orientation from a single-element bytestring, where +
    /// is Forward, - is Backward. Anything else, including "+ " or
    /// "++", is rejected.
    #[inline]
    pub fn from_bytes_plus_minus<T: AsRef<[u8]>>(bs: T) -> Option<Self> {
        match bs.as_ref() {
            b"+" => Some(Orientation::Forward),
            b"-" => Some(Orientation::Backward),
            _ => None,
        }
    }

    #[inline]
    pub fn plus_minus_as_byte(&self) -> u8 {
        match self {
            Self::Forward => b'+',
            Self::Backward => b'-',
        }
    }

    #[inline]
    pub fn is_reverse(&self) -> bool {
        matches!(self, Self::Backward)
    }
}

/// Default orientation is forward
impl Default for Orientation {
    #[inline]
    fn default() -> Orientation {
        Orientation::Forward
    }
}

impl std::str::FromStr for Orientation {
    type Err = &'static str;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Orientation::from_bytes_plus_minus(s.as_bytes())
            .ok_or("Could not parse orientation (was not + or -)")
    }
}

/// Display maps `Forward` to "+", `Backward` to "-". With the
/// alternate flag, i.e. `{:#}`, they map to ">" and "<".
///
/// # Examples
///
/// ```
/// use gfa_records::gfa::Orientation as O;
///
/// assert_eq!(&format!("{}", O::Forward), "+");
/// assert_eq!(&format!("{}", O::Backward), "-");
/// assert_eq!(&format!("{:#}", O::Forward), ">");
/// assert_eq!(&format!("{:#}", O::Backward), "<");
/// ```
impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sym = match (self, f.alternate()) {
            (Self::Forward, false) => '+',
            (Self::Backward, false) => '-',
            (Self::Forward, true) => '>',
            (Self::Backward, true) => '<',
        };
        write!(f, "{}", sym)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_single_plus_or_minus() {
        use Orientation::*;
        assert_eq!(Some(Forward), Orientation::from_bytes_plus_minus(b"+"));
        assert_eq!(Some(Backward), Orientation::from_bytes_plus_minus("-"));
        assert_eq!(None, Orientation::from_bytes_plus_minus(b""));
        assert_eq!(None, Orientation::from_bytes_plus_minus(b"++"));
        assert_eq!(None, Orientation::from_bytes_plus_minus(b"+ "));
        assert_eq!(None, Orientation::from_bytes_plus_minus(b">"));
        assert!("*".parse::<Orientation>().is_err());
        assert!(Backward.is_reverse());
        assert_eq!(b'-', Backward.plus_minus_as_byte());
    }
}
