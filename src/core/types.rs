//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Unique identifier for regions (activity ledgers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionId(pub u32);

impl RegionId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Unique identifier for funding nations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NationId(pub u32);

impl NationId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Currency units. Funding and balances can go deeply negative.
pub type Funds = i64;

/// Activity and rating points
pub type Points = i32;

/// Named difficulty levels and the integer the council thresholds scale with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Experienced,
    Veteran,
    Genius,
    Superhuman,
}

impl Difficulty {
    pub fn level(self) -> i32 {
        match self {
            Difficulty::Beginner => 0,
            Difficulty::Experienced => 1,
            Difficulty::Veteran => 2,
            Difficulty::Genius => 3,
            Difficulty::Superhuman => 4,
        }
    }
}

impl From<Difficulty> for i32 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.level()
    }
}
