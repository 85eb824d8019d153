//! Roster parsing and formatting

use std::str::FromStr;

use serde::Serialize;
use typerank_chart::Element;

use crate::TeamError;

/// Ordered team members, duplicates allowed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    members: Vec<Element>,
}

impl Roster {
    /// Parse a JSON array (`["fire", "water"]`) or a list separated by
    /// commas and/or whitespace (`fire, water`)
    pub fn parse(input: &str) -> Result<Self, TeamError> {
        let trimmed = input.trim();
        if trimmed.starts_with('[') {
            return Self::from_json(trimmed);
        }

        let members = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|name| !name.is_empty())
            .map(str::parse::<Element>)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { members })
    }

    /// Parse a JSON array of names, case-insensitively like the text form
    pub fn from_json(json: &str) -> Result<Self, TeamError> {
        let names: Vec<String> = serde_json::from_str(json)?;
        let members = names
            .iter()
            .map(|name| name.parse::<Element>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { members })
    }

    pub fn to_json(&self) -> Result<String, TeamError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn members(&self) -> &[Element] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl FromStr for Roster {
    type Err = TeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Roster::parse(s)
    }
}

impl FromIterator<Element> for Roster {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Roster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.members.iter().map(Element::as_str).collect();
        write!(f, "{}", names.join(", "))
    }
}
