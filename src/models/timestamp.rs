use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::parsers::deserializers::parse_timestamp;

/// A message date after parsing.
///
/// `Unparsable` orders before every parsed instant so that conversations
/// with unknown or missing dates rank last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Timestamp {
    Unparsable,
    Parsed(DateTime<Utc>),
}

impl Timestamp {
    pub fn parse(raw: &str) -> Self {
        parse_timestamp(raw).map(Timestamp::Parsed).unwrap_or(Timestamp::Unparsable)
    }

    pub fn is_unparsable(&self) -> bool {
        matches!(self, Timestamp::Unparsable)
    }

    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Timestamp::Parsed(dt) => Some(dt),
            Timestamp::Unparsable => None,
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp::Parsed(dt)
    }
}
