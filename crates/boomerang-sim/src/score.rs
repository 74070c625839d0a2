//! Running score state tracked by the engine.

use boomerang_core::state::ScoreView;

#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub score: u32,
    pub targets_destroyed: u32,
    pub targets_expired: u32,
    pub throws: u32,
    /// Flights that reached the end of their path.
    pub returns: u32,
}

impl ScoreState {
    /// Credit a destroyed target.
    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.targets_destroyed += 1;
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            score: self.score,
            targets_destroyed: self.targets_destroyed,
            targets_expired: self.targets_expired,
            throws: self.throws,
            returns: self.returns,
        }
    }
}
