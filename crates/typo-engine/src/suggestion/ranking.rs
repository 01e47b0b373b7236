// Candidate scoring, ordering and final selection

use std::cmp::Ordering;

use typo_core::case::{detect_case, restore_case};
use typo_core::enums::WordFlag;

use super::edits::EditCounts;
use crate::speller::Speller;

/// Score bonus for words carrying `PRIORITYSUGGEST`.
pub const PRIORITY_BONUS: usize = 1000;

/// A correctly spelled candidate with its weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub word: String,
    pub score: usize,
}

/// Highest score first; equal scores by word, descending.
fn by_rank(a: &Candidate, b: &Candidate) -> Ordering {
    b.score.cmp(&a.score).then_with(|| b.word.cmp(&a.word))
}

/// Merge the known two-edit counts with the one-edit variants `speller`
/// accepts, add the priority bonus and sort.
pub fn rank(ed1: &EditCounts, ed2: EditCounts, speller: &dyn Speller) -> Vec<Candidate> {
    let mut weighted = ed2;
    for (word, &count) in ed1 {
        if speller.is_correct(word) {
            *weighted.entry_ref(word.as_str()).or_insert(0) += count;
        }
    }

    let mut candidates: Vec<Candidate> = weighted
        .into_iter()
        .map(|(word, mut score)| {
            if speller.has_flag(&word, WordFlag::PrioritySuggest) {
                score += PRIORITY_BONUS;
            }
            Candidate { word, score }
        })
        .collect();
    candidates.sort_by(by_rank);
    candidates
}

/// Pick up to `limit` suggestions for `input` from ranked candidates.
///
/// Each candidate is given the capitalization scheme of `input` first.
/// Candidates marked `NOSUGGEST`, repeats after the case change and the
/// input itself are passed over without using up a slot.
pub fn select(
    candidates: &[Candidate],
    input: &str,
    limit: usize,
    speller: &dyn Speller,
) -> Vec<String> {
    let scheme = detect_case(input);
    let mut out: Vec<String> = Vec::with_capacity(limit.min(candidates.len()));
    for candidate in candidates {
        if out.len() >= limit {
            break;
        }
        let shown = restore_case(&candidate.word, scheme);
        let suppressed = speller.has_flag(&candidate.word, WordFlag::NoSuggest)
            || (shown != candidate.word && speller.has_flag(&shown, WordFlag::NoSuggest));
        if suppressed || shown == input || out.contains(&shown) {
            continue;
        }
        out.push(shown);
    }
    out
}
