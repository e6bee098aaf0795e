use crate::models::{MatchThresholds, ScoredEntry};

/// Working set of "good enough" matches around the best closeness seen so far
///
/// Every time a better match turns up, the window is re-anchored and anything
/// that no longer fits is dropped for good. Feeding the same entries in any
/// order leaves the same set behind: exactly those with
/// `closeness <= min(max, best + also_valid)`.
#[derive(Debug)]
pub struct MatchWindow<'a> {
    thresholds: MatchThresholds,
    best: Option<f64>,
    matches: Vec<ScoredEntry<'a>>,
}

impl<'a> MatchWindow<'a> {
    pub fn new(thresholds: MatchThresholds) -> Self {
        Self {
            thresholds,
            best: None,
            matches: Vec::new(),
        }
    }

    /// Lowest closeness admitted so far
    pub fn best(&self) -> Option<f64> {
        self.best
    }

    /// Offer a scored entry to the window, returning whether it was kept
    pub fn offer(&mut self, candidate: ScoredEntry<'a>) -> bool {
        if candidate.closeness > self.thresholds.max {
            return false;
        }

        if self.best.map_or(true, |best| candidate.closeness < best) {
            self.best = Some(candidate.closeness);
            let limit = self.limit();
            self.matches.retain(|m| m.closeness <= limit);
        }

        if candidate.closeness <= self.limit() {
            self.matches.push(candidate);
            true
        } else {
            false
        }
    }

    /// Current upper bound on closeness for a match to stay in the window
    fn limit(&self) -> f64 {
        match self.best {
            Some(best) => (best + self.thresholds.also_valid).min(self.thresholds.max),
            None => self.thresholds.max,
        }
    }

    /// Surviving matches in the order they were offered
    pub fn into_matches(self) -> Vec<ScoredEntry<'a>> {
        self.matches
    }
}
