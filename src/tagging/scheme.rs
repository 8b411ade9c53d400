//! Tag alphabets.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, TagSequenceError};

/// A tag in the BIO (begin/inside/outside) scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bio {
    O,
    B,
    I,
}

/// A tag in the BIOLU (begin/inside/outside/last/unit) scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biolu {
    O,
    B,
    I,
    L,
    U,
}

impl Bio {
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "O" => Some(Self::O),
            "B" => Some(Self::B),
            "I" => Some(Self::I),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::O => "O",
            Self::B => "B",
            Self::I => "I",
        }
    }
}

impl Biolu {
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "O" => Some(Self::O),
            "B" => Some(Self::B),
            "I" => Some(Self::I),
            "L" => Some(Self::L),
            "U" => Some(Self::U),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::O => "O",
            Self::B => "B",
            Self::I => "I",
            Self::L => "L",
            Self::U => "U",
        }
    }
}

impl fmt::Display for Bio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Biolu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parses textual BIO tags, reporting unknown symbols with their position.
pub fn parse_bio<'a, I>(tags: I) -> impl Iterator<Item = Result<Bio, Error>> + 'a
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: 'a,
{
    tags.into_iter().enumerate().map(|(position, s)| {
        Bio::from_symbol(s).ok_or_else(|| TagSequenceError::unknown(position, s).into())
    })
}

/// Parses textual BIOLU tags, reporting unknown symbols with their position.
pub fn parse_biolu<'a, I>(tags: I) -> impl Iterator<Item = Result<Biolu, Error>> + 'a
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: 'a,
{
    tags.into_iter().enumerate().map(|(position, s)| {
        Biolu::from_symbol(s).ok_or_else(|| TagSequenceError::unknown(position, s).into())
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_bio, parse_biolu, Bio, Biolu};
    use crate::error::{Error, TagContext};

    #[test]
    fn symbols_roundtrip() {
        for tag in [Bio::O, Bio::B, Bio::I] {
            assert_eq!(Bio::from_symbol(tag.symbol()), Some(tag));
        }
        for tag in [Biolu::O, Biolu::B, Biolu::I, Biolu::L, Biolu::U] {
            assert_eq!(Biolu::from_symbol(tag.symbol()), Some(tag));
        }
    }

    #[test]
    fn l_and_u_are_not_bio() {
        assert_eq!(Bio::from_symbol("L"), None);
        assert_eq!(Bio::from_symbol("U"), None);
    }

    #[test]
    fn parse_reports_position() {
        let res: Vec<_> = parse_bio(vec!["O", "B", "X"]).collect();
        assert_eq!(res[0].as_ref().unwrap(), &Bio::O);
        assert_eq!(res[1].as_ref().unwrap(), &Bio::B);
        match &res[2] {
            Err(Error::TagSequence(e)) => {
                assert_eq!(e.position, 2);
                assert_eq!(e.tag, "X");
                assert_eq!(e.context, TagContext::UnknownTag);
            }
            other => panic!("expected tag error, got {:?}", other),
        }
    }

    #[test]
    fn parse_biolu_accepts_full_alphabet() {
        let res: Result<Vec<_>, _> = parse_biolu(vec!["O", "B", "I", "L", "U"]).collect();
        assert_eq!(
            res.unwrap(),
            vec![Biolu::O, Biolu::B, Biolu::I, Biolu::L, Biolu::U]
        );
    }

    #[test]
    fn serializes_as_bare_symbols() {
        let json = serde_json::to_string(&vec![Biolu::O, Biolu::U]).unwrap();
        assert_eq!(json, r#"["O","U"]"#);
    }
}
