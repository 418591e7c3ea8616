use std::collections::HashMap;

use crate::{
    error::{Error, Result},
    tokenizer::{DocumentCounts, TermId},
};

/// Per-class aggregate term counts, built by merging one document at a time
/// so peak memory stays at one model per class rather than every document's
/// counts at once.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LanguageModel {
    counts: HashMap<TermId, u64>,
}

impl LanguageModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges one document's counts into the model. Terms absent from the
    /// document contribute nothing; stored counts stay strictly positive.
    pub fn add_document(&mut self, doc_counts: &DocumentCounts) {
        for (&term, &count) in doc_counts {
            if count == 0 {
                continue;
            }

            *self.counts.entry(term).or_insert(0) += u64::from(count);
        }
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn counts(&self) -> &HashMap<TermId, u64> {
        &self.counts
    }

    /// Relative-frequency smoothing: each term's probability is its count
    /// over the class total. The comparison-time ε floor is not applied
    /// here; a term missing from the class keeps probability zero until
    /// ranking.
    pub fn smooth(&self, class: &str) -> Result<SmoothedModel> {
        let total = self.total();
        if total == 0 {
            return Err(Error::DegenerateModel {
                class: class.to_string(),
            });
        }

        let total = total as f64;
        Ok(SmoothedModel {
            probabilities: self
                .counts
                .iter()
                .map(|(&term, &count)| (term, count as f64 / total))
                .collect(),
        })
    }
}

/// Normalized probability distribution over one class's terms. Probabilities
/// are in (0, 1] and sum to 1 over the class's own vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedModel {
    probabilities: HashMap<TermId, f64>,
}

impl SmoothedModel {
    /// Probability of `term` under this class, zero if the class never saw
    /// it.
    pub fn probability(&self, term: TermId) -> f64 {
        self.probabilities.get(&term).copied().unwrap_or(0.0)
    }

    pub fn terms(&self) -> impl Iterator<Item = TermId> + '_ {
        self.probabilities.keys().copied()
    }
}
