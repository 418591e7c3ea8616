use std::{cmp::Ordering, collections::HashSet};

use crate::{
    error::{Error, Result},
    model::SmoothedModel,
    tokenizer::{TermId, Vocabulary},
};

/// Additive smoothing constant applied symmetrically to both sides of the
/// ratio at comparison time, so terms absent from one class still score.
pub const EPSILON: f64 = 0.0001;

/// One ranked feature: how much more likely the term is under the numerator
/// class than the denominator class.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureScore {
    pub term: TermId,
    pub ratio: f64,
    pub label: String,
}

/// Scores every term in the union of both models' vocabularies with
/// `(p_num + ε) / (p_den + ε)`. Ratios above 1 mark the term as
/// characteristic of the numerator class, below 1 of the denominator class.
///
/// The list comes back in descending ratio order with ties broken by
/// ascending term id, so the output is identical across runs.
pub fn rank(
    numerator: &SmoothedModel,
    denominator: &SmoothedModel,
    vocabulary: &Vocabulary,
) -> Result<Vec<FeatureScore>> {
    let mut term_ids: HashSet<TermId> = numerator.terms().collect();
    term_ids.extend(denominator.terms());

    let mut scores = term_ids
        .into_iter()
        .map(|term| {
            let ratio = (numerator.probability(term) + EPSILON)
                / (denominator.probability(term) + EPSILON);
            let label = vocabulary
                .label(term)
                .ok_or(Error::UnknownTerm(term))?
                .to_string();

            Ok(FeatureScore { term, ratio, label })
        })
        .collect::<Result<Vec<_>>>()?;

    scores.sort_by(|a, b| {
        b.ratio
            .partial_cmp(&a.ratio)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.term.cmp(&b.term))
    });

    Ok(scores)
}
