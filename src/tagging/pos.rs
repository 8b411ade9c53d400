//! Universal POS classification tables.
//!
//! Read-only groupings of the [Universal Part of Speech tags](http://universaldependencies.org/u/pos/)
//! plus the usual time/numeric entity labels, compiled in as constant sets.
use std::collections::HashSet;

use lazy_static::lazy_static;

lazy_static! {

    /// Content word POS tags.
    pub static ref CONTENT_POS: HashSet<&'static str> =
        ["ADJ", "ADV", "NOUN", "PROPN", "VERB"].into_iter().collect();

    /// Function word POS tags.
    pub static ref FUNCTION_POS: HashSet<&'static str> =
        ["ADP", "AUX", "CONJ", "DET", "INTJ", "PRON", "PART", "SCONJ"]
            .into_iter()
            .collect();

    /// Open class POS tags.
    pub static ref OPEN_CLASS_POS: HashSet<&'static str> =
        ["ADJ", "ADV", "INTJ", "NOUN", "PROPN", "VERB"]
            .into_iter()
            .collect();

    /// Closed class POS tags.
    pub static ref CLOSED_CLASS_POS: HashSet<&'static str> =
        ["ADP", "AUX", "CONJ", "DET", "NUM", "PART", "PRON", "SCONJ"]
            .into_iter()
            .collect();

    /// POS tags that are neither open nor closed class.
    pub static ref OTHER_POS: HashSet<&'static str> =
        ["PUNCT", "SYM", "X"].into_iter().collect();

    /// Time-related entity labels.
    pub static ref ENTITIES_TIME: HashSet<&'static str> =
        ["DATE", "TIME"].into_iter().collect();

    /// Numeric entity labels.
    pub static ref ENTITIES_NUMERIC: HashSet<&'static str> =
        ["PERCENT", "MONEY", "QUANTITY", "ORDINAL", "CARDINAL"]
            .into_iter()
            .collect();
}

pub fn is_content(pos: &str) -> bool {
    CONTENT_POS.contains(pos)
}

pub fn is_function(pos: &str) -> bool {
    FUNCTION_POS.contains(pos)
}

pub fn is_open_class(pos: &str) -> bool {
    OPEN_CLASS_POS.contains(pos)
}

pub fn is_closed_class(pos: &str) -> bool {
    CLOSED_CLASS_POS.contains(pos)
}

pub fn is_time_entity(label: &str) -> bool {
    ENTITIES_TIME.contains(label)
}

pub fn is_numeric_entity(label: &str) -> bool {
    ENTITIES_NUMERIC.contains(label)
}
