//! Birth/survival rules for life-like automata

use super::Cell;
use crate::error::{AutomatonError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Maximum number of living neighbors in a Moore neighborhood
pub const MAX_NEIGHBORS: u8 = 8;

/// A life-like rule: the neighbor counts that give birth to a dead cell and
/// the counts that keep a living cell alive.
///
/// Counts above [`MAX_NEIGHBORS`] are kept but can never match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRule", into = "RawRule")]
pub struct Rule {
    born: BTreeSet<u32>,
    survive: BTreeSet<u32>,
}

/// Serialized form of a rule: either `"B3/S23"` notation or explicit lists
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRule {
    Notation(String),
    Counts { born: Vec<i64>, survive: Vec<i64> },
}

impl Rule {
    /// Create a rule from non-negative neighbor counts
    pub fn new<B, S>(born: B, survive: S) -> Self
    where
        B: IntoIterator<Item = u32>,
        S: IntoIterator<Item = u32>,
    {
        Self {
            born: born.into_iter().collect(),
            survive: survive.into_iter().collect(),
        }
    }

    /// Create a rule from signed counts, rejecting negative values
    pub fn from_counts(born: &[i64], survive: &[i64]) -> Result<Self> {
        Ok(Self {
            born: to_counts("born", born)?,
            survive: to_counts("survive", survive)?,
        })
    }

    /// Conway's Game of Life, B3/S23
    pub fn conway() -> Self {
        Self::new([3], [2, 3])
    }

    pub fn born(&self) -> &BTreeSet<u32> {
        &self.born
    }

    pub fn survive(&self) -> &BTreeSet<u32> {
        &self.survive
    }

    /// Next state of a cell given its current state and living neighbor count
    pub fn should_be_alive(&self, cell: Cell, neighbor_count: u8) -> bool {
        let count = u32::from(neighbor_count);
        match cell {
            Cell::Dead => self.born.contains(&count),
            Cell::Alive => self.survive.contains(&count),
        }
    }

    /// Apply the rule to a single cell
    #[inline]
    pub fn next_cell(&self, cell: Cell, neighbor_count: u8) -> Cell {
        Cell::from(self.should_be_alive(cell, neighbor_count))
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}

fn to_counts(field: &str, values: &[i64]) -> Result<BTreeSet<u32>> {
    values
        .iter()
        .map(|&value| {
            if value < 0 {
                return Err(AutomatonError::MalformedRule(format!(
                    "{} count {} is negative",
                    field, value
                )));
            }
            // Anything past u32 can never match, same as any count above eight
            Ok(u32::try_from(value).unwrap_or(u32::MAX))
        })
        .collect()
}

fn parse_digits(part: &str, notation: &str) -> Result<BTreeSet<u32>> {
    part.chars()
        .map(|ch| match ch.to_digit(10) {
            Some(d) if d <= u32::from(MAX_NEIGHBORS) => Ok(d),
            _ => Err(AutomatonError::MalformedRule(format!(
                "unexpected '{}' in rule '{}'",
                ch, notation
            ))),
        })
        .collect()
}

impl FromStr for Rule {
    type Err = AutomatonError;

    /// Parse `B3/S23` notation (either order, case-insensitive) or the
    /// legacy `23/3` survive/born form.
    fn from_str(s: &str) -> Result<Self> {
        let notation = s.trim();
        let (first, second) = notation
            .split_once('/')
            .ok_or_else(|| AutomatonError::MalformedRule(format!("missing '/' in rule '{}'", s)))?;

        let mut born = None;
        let mut survive = None;
        for part in [first, second] {
            let mut chars = part.chars();
            match chars.next().map(|c| c.to_ascii_uppercase()) {
                Some('B') if born.is_none() => born = Some(parse_digits(chars.as_str(), s)?),
                Some('S') if survive.is_none() => survive = Some(parse_digits(chars.as_str(), s)?),
                _ => break,
            }
        }

        match (born, survive) {
            (Some(born), Some(survive)) => Ok(Self { born, survive }),
            (None, None) => Ok(Self {
                survive: parse_digits(first, s)?,
                born: parse_digits(second, s)?,
            }),
            _ => Err(AutomatonError::MalformedRule(format!(
                "rule '{}' must name both B and S parts",
                s
            ))),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for count in &self.born {
            write!(f, "{}", count)?;
        }
        write!(f, "/S")?;
        for count in &self.survive {
            write!(f, "{}", count)?;
        }
        Ok(())
    }
}

impl TryFrom<RawRule> for Rule {
    type Error = AutomatonError;

    fn try_from(raw: RawRule) -> Result<Self> {
        match raw {
            RawRule::Notation(notation) => notation.parse(),
            RawRule::Counts { born, survive } => Self::from_counts(&born, &survive),
        }
    }
}

impl From<Rule> for RawRule {
    fn from(rule: Rule) -> Self {
        RawRule::Counts {
            born: rule.born.into_iter().map(i64::from).collect(),
            survive: rule.survive.into_iter().map(i64::from).collect(),
        }
    }
}
