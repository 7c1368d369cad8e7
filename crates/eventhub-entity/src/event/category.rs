//! Event category enumeration.

use serde::{Deserialize, Serialize};

/// Category label attached to an event for filtering and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    /// Live music performances.
    Concert,
    /// Social gatherings and parties.
    Party,
    /// Multi-day or outdoor festivals.
    Festival,
    /// Talks and professional conferences.
    Conference,
    /// Hands-on workshops.
    Workshop,
    /// Art and trade exhibitions.
    Exhibition,
    /// Sporting events.
    Sports,
    /// Theater performances.
    Theater,
    /// Stand-up and comedy shows.
    Comedy,
    /// Anything that does not fit the above.
    Other,
}

impl EventCategory {
    /// Return the category as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concert => "concert",
            Self::Party => "party",
            Self::Festival => "festival",
            Self::Conference => "conference",
            Self::Workshop => "workshop",
            Self::Exhibition => "exhibition",
            Self::Sports => "sports",
            Self::Theater => "theater",
            Self::Comedy => "comedy",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EventCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "concert" => Ok(Self::Concert),
            "party" => Ok(Self::Party),
            "festival" => Ok(Self::Festival),
            "conference" => Ok(Self::Conference),
            "workshop" => Ok(Self::Workshop),
            "exhibition" => Ok(Self::Exhibition),
            "sports" => Ok(Self::Sports),
            "theater" => Ok(Self::Theater),
            "comedy" => Ok(Self::Comedy),
            "other" => Ok(Self::Other),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognized category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl std::fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown event category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}
