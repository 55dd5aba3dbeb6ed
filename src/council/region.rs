//! Region - per-faction monthly activity ledger

use serde::{Deserialize, Serialize};

use crate::core::types::{Points, RegionId};

/// A region whose military activity the council tracks month by month
///
/// Both histories hold one entry per month in chronological order. The last
/// entry is the month in progress and receives new activity; everything before
/// it is committed and never rewritten.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionId,
    pub key: String,
    activity_player: Vec<Points>,
    activity_opposition: Vec<Points>,
}

impl Region {
    pub fn new(id: RegionId, key: impl Into<String>) -> Self {
        Self {
            id,
            key: key.into(),
            activity_player: vec![0],
            activity_opposition: vec![0],
        }
    }

    pub fn activity_player(&self) -> &[Points] {
        &self.activity_player
    }

    pub fn activity_opposition(&self) -> &[Points] {
        &self.activity_opposition
    }

    /// Number of recorded months, including the one in progress
    pub fn months_recorded(&self) -> usize {
        self.activity_player.len()
    }

    pub fn record_player_activity(&mut self, points: Points) {
        if let Some(current) = self.activity_player.last_mut() {
            *current += points;
        }
    }

    pub fn record_opposition_activity(&mut self, points: Points) {
        if let Some(current) = self.activity_opposition.last_mut() {
            *current += points;
        }
    }

    /// Commit the month in progress and open a fresh zeroed one
    ///
    /// Must run exactly once per region per evaluation; a second call would
    /// shift this region's offsets out of line with every other ledger.
    pub fn new_month(&mut self) {
        self.activity_player.push(0);
        self.activity_opposition.push(0);
    }

    /// Index of the most recently committed month
    pub fn month_offset(&self) -> Option<usize> {
        committed_offset(self.months_recorded())
    }

    /// Index of the month before the most recently committed one
    pub fn previous_month_offset(&self) -> Option<usize> {
        previous_offset(self.months_recorded())
    }

    /// (player, opposition) activity of the most recently committed month
    pub fn committed_activity(&self) -> Option<(Points, Points)> {
        self.month_offset().map(|idx| self.activity_at(idx))
    }

    /// (player, opposition) activity of the month before that
    pub fn previous_activity(&self) -> Option<(Points, Points)> {
        self.previous_month_offset().map(|idx| self.activity_at(idx))
    }

    fn activity_at(&self, idx: usize) -> (Points, Points) {
        (self.activity_player[idx], self.activity_opposition[idx])
    }
}

/// Committed month of a history whose last entry is still in progress
pub(crate) fn committed_offset(len: usize) -> Option<usize> {
    len.checked_sub(2)
}

/// Month before the committed one; absent until three months are recorded
pub(crate) fn previous_offset(len: usize) -> Option<usize> {
    if len >= 3 {
        Some(len - 3)
    } else {
        None
    }
}
