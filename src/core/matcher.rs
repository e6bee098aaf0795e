use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::core::{angles::TargetAngles, closeness::closeness, filters::MatchWindow};
use crate::models::{Entry, MatchThresholds, ScoredEntry};

/// Finds the buns whose ears best resemble a requested time
///
/// Holds only its thresholds; the catalog is passed into each call, so a single
/// matcher can be shared freely between workers.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    thresholds: MatchThresholds,
}

impl Matcher {
    pub fn new(thresholds: MatchThresholds) -> Self {
        Self { thresholds }
    }

    pub fn with_default_thresholds() -> Self {
        Self {
            thresholds: MatchThresholds::default(),
        }
    }

    pub fn thresholds(&self) -> MatchThresholds {
        self.thresholds
    }

    /// All entries close enough to count as a match for `target`
    ///
    /// An entry qualifies when its closeness is within `max` and no more than
    /// `also_valid` degrees worse than the best entry in the catalog. The result
    /// is sorted by closeness (best first), ties broken by id, so it does not
    /// depend on catalog order.
    pub fn find_matching_entries<'a>(
        &self,
        entries: &'a [Entry],
        target: &TargetAngles,
    ) -> Vec<ScoredEntry<'a>> {
        let mut window = MatchWindow::new(self.thresholds);

        for entry in entries {
            window.offer(ScoredEntry {
                closeness: closeness(target, entry),
                entry,
            });
        }

        let mut matches = window.into_matches();
        matches.sort_by(|a, b| {
            a.closeness
                .total_cmp(&b.closeness)
                .then_with(|| a.entry.id.cmp(&b.entry.id))
        });

        tracing::trace!(
            "{} of {} entries match hour={} minute={}",
            matches.len(),
            entries.len(),
            target.hour,
            target.minute
        );

        matches
    }

    /// Pick one matching entry for `target`, or `None` if nothing matches
    ///
    /// Near-ties are broken at random, favouring closer entries.
    pub fn find_matching_entry<'a>(
        &self,
        entries: &'a [Entry],
        target: &TargetAngles,
        rng: &mut impl Rng,
    ) -> Option<&'a Entry> {
        let matches = self.find_matching_entries(entries, target);
        self.pick_weighted(&matches, rng)
    }

    /// Weighted random pick from an already filtered list of matches
    ///
    /// Each match is weighted `max - (closeness - best)`, so the best match gets
    /// the full `max` and weight falls off linearly from there.
    pub fn pick_weighted<'a>(
        &self,
        matches: &[ScoredEntry<'a>],
        rng: &mut impl Rng,
    ) -> Option<&'a Entry> {
        let best = matches
            .iter()
            .map(|m| m.closeness)
            .min_by(|a, b| a.total_cmp(b))?;

        let weights = matches.iter().map(|m| self.weight(m.closeness, best));
        match WeightedIndex::new(weights) {
            Ok(index) => Some(matches[index.sample(rng)].entry),
            Err(e) => {
                // Only reachable with thresholds that leave no positive weight
                tracing::warn!("Falling back to best match, invalid weights: {}", e);
                matches
                    .iter()
                    .min_by(|a, b| a.closeness.total_cmp(&b.closeness))
                    .map(|m| m.entry)
            }
        }
    }

    /// Relative probability of picking a match `closeness` when the best is `best`
    #[inline]
    pub fn weight(&self, closeness: f64, best: f64) -> f64 {
        self.thresholds.max - (closeness - best)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_thresholds()
    }
}
