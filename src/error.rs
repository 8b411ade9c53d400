//! Error enum

#[derive(Debug)]
pub enum Error {
    /// reservoir capacity must be at least 1.
    InvalidCapacity(usize),
    /// sampling probability must be in [0, 1].
    InvalidProbability(f64),
    /// step size must be at least 1.
    InvalidStep(usize),
    TagSequence(TagSequenceError),
    Io(std::io::Error),
    Serde(serde_json::Error),
    Custom(String),
}

/// Illegal tag or tag transition, along with where it happened.
///
/// `position` is the 0-based index of the offending tag in the input
/// sequence. `context` carries the neighboring tag that made the
/// transition illegal, when there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSequenceError {
    pub position: usize,
    pub tag: String,
    pub context: TagContext,
}

/// The neighboring tag involved in an illegal transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagContext {
    /// tag text is not part of the scheme alphabet.
    UnknownTag,
    /// offending tag sits at the start of the sequence.
    SequenceStart,
    /// offending tag follows this one.
    After(String),
}

impl TagSequenceError {
    pub fn unknown(position: usize, tag: &str) -> Self {
        Self {
            position,
            tag: tag.to_string(),
            context: TagContext::UnknownTag,
        }
    }

    pub fn illegal_after(position: usize, tag: &str, previous: Option<&str>) -> Self {
        Self {
            position,
            tag: tag.to_string(),
            context: match previous {
                Some(p) => TagContext::After(p.to_string()),
                None => TagContext::SequenceStart,
            },
        }
    }
}

impl From<TagSequenceError> for Error {
    fn from(e: TagSequenceError) -> Error {
        Error::TagSequence(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
