//! Fruit kinds and their colors

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A fruit hanging on a branch.
///
/// The set of kinds is closed. Adding a kind means adding a variant here and
/// its arm in [`Fruit::color`]; traversal code only compares kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Fruit {
    Apple,
    Orange,
}

/// Name that does not match any fruit kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown fruit kind: {0}")]
pub struct UnknownFruit(pub String);

impl Fruit {
    /// All kinds, in declaration order.
    pub const ALL: [Fruit; 2] = [Fruit::Apple, Fruit::Orange];

    pub const fn color(&self) -> &'static str {
        match self {
            Fruit::Apple => "red",
            Fruit::Orange => "orange",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Fruit::Apple => "apple",
            Fruit::Orange => "orange",
        }
    }

    /// Plural label used in reports, e.g. "apples".
    pub const fn plural(&self) -> &'static str {
        match self {
            Fruit::Apple => "apples",
            Fruit::Orange => "oranges",
        }
    }
}

impl fmt::Display for Fruit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Fruit {
    type Err = UnknownFruit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Fruit::ALL
            .into_iter()
            .find(|fruit| fruit.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownFruit(s.to_string()))
    }
}
