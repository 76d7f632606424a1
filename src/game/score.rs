/// Cumulative score after each round, starting from a zero entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScoreHistory {
    scores: Vec<u32>,
}

impl Default for ScoreHistory {
    fn default() -> Self {
        ScoreHistory { scores: vec![0] }
    }
}

impl ScoreHistory {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn record(&mut self, score: u32) {
        debug_assert!(score >= self.current());
        self.scores.push(score);
    }

    pub fn current(&self) -> u32 {
        self.scores.last().copied().unwrap_or(0)
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.scores.len()
    }
}
