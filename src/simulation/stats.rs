//! Running counters for a simulation world

/// Statistics accumulated across ticks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimStats {
    pub ticks: u64,
    pub moves: u64,
    pub blocked: u64,
    pub deaths: u64,
    pub revivals: u64,
    pub light_changes: u64,
    pub rounds: u64,
}

impl SimStats {
    /// Share of living-agent ticks that ended in a move, as a percentage
    pub fn move_rate(&self) -> f32 {
        let attempts = self.moves + self.blocked;
        if attempts == 0 {
            0.0
        } else {
            self.moves as f32 / attempts as f32 * 100.0
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Ticks: {} | Moves: {} | Blocked: {} | Deaths: {} | Revivals: {}",
            self.ticks, self.moves, self.blocked, self.deaths, self.revivals
        )
    }
}
