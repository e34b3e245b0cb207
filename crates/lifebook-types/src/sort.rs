use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order in which story pages are presented.
///
/// Serialized as `"newest-first"` / `"oldest-first"`, the exact strings the
/// preference slot has always stored, so existing stores keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

impl SortOrder {
    /// The other order; sort toggling flips between exactly two states.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::NewestFirst => SortOrder::OldestFirst,
            SortOrder::OldestFirst => SortOrder::NewestFirst,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::NewestFirst => "newest-first",
            SortOrder::OldestFirst => "oldest-first",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest-first" => Ok(SortOrder::NewestFirst),
            "oldest-first" => Ok(SortOrder::OldestFirst),
            other => Err(format!("unknown sort order: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_between_the_two_orders() {
        assert_eq!(SortOrder::NewestFirst.toggled(), SortOrder::OldestFirst);
        assert_eq!(SortOrder::OldestFirst.toggled(), SortOrder::NewestFirst);
    }

    #[test]
    fn round_trips_through_the_wire_strings() {
        assert_eq!("newest-first".parse::<SortOrder>().unwrap(), SortOrder::NewestFirst);
        assert_eq!(SortOrder::OldestFirst.to_string(), "oldest-first");
    }
}
