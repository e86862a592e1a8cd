use std::{fmt, str::FromStr};

use super::error::PageError;

/// The two selector forms the dashboard needs: `#id` and `.class`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    Id(String),
    Class(String),
}

impl Selector {
    pub fn id(value: impl Into<String>) -> Self {
        Self::Id(value.into())
    }

    pub fn class(value: impl Into<String>) -> Self {
        Self::Class(value.into())
    }
}

impl FromStr for Selector {
    type Err = PageError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || PageError::InvalidSelector(raw.to_owned());
        let name = raw.get(1..).filter(|name| is_valid_name(name));

        match (raw.chars().next(), name) {
            (Some('#'), Some(name)) => Ok(Self::id(name)),
            (Some('.'), Some(name)) => Ok(Self::class(name)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Class(class) => write!(f, ".{class}"),
        }
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
}
