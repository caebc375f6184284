// src/knowledge/matcher.rs
//! Single-best approximate string match.
//!
//! Score is the normalized Levenshtein ratio (`1 - distance / max_len`, on
//! chars). Candidates below the cutoff are ignored; among the rest the highest
//! score wins, and the earliest candidate wins a tie.

use strsim::normalized_levenshtein;
use tracing::warn;

use crate::config::consts::MATCH_CUTOFF;

/// How query and candidates are compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// Both sides lowercased before scoring.
    #[default]
    Insensitive,
    Sensitive,
}

impl CaseMode {
    pub fn from_flag(case_sensitive: bool) -> Self {
        if case_sensitive { CaseMode::Sensitive } else { CaseMode::Insensitive }
    }

    pub fn normalize(self, s: &str) -> String {
        match self {
            CaseMode::Insensitive => s.to_lowercase(),
            CaseMode::Sensitive => s.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matcher {
    cutoff: f64,
    case: CaseMode,
}

impl Matcher {
    /// `cutoff` is clamped into `[0, 1]`; NaN or infinite values fall back
    /// to the default cutoff.
    pub fn new(cutoff: f64, case: CaseMode) -> Self {
        let cutoff = if cutoff.is_finite() {
            cutoff.clamp(0.0, 1.0)
        } else {
            warn!("Ignoring non-finite match cutoff {cutoff}; using {MATCH_CUTOFF}");
            MATCH_CUTOFF
        };
        Self { cutoff, case }
    }

    pub fn cutoff(&self) -> f64 { self.cutoff }
    pub fn case(&self) -> CaseMode { self.case }

    /// Position and score of the best candidate at or above the cutoff.
    pub fn best_index<S: AsRef<str>>(&self, query: &str, candidates: &[S]) -> Option<(usize, f64)> {
        let query = self.case.normalize(query);
        let mut best: Option<(usize, f64)> = None;

        for (i, cand) in candidates.iter().enumerate() {
            let score = normalized_levenshtein(&query, &self.case.normalize(cand.as_ref()));
            if score < self.cutoff {
                continue;
            }
            // strict: first candidate keeps a tie
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((i, score));
            }
        }
        best
    }

    /// The best candidate itself, as given (not case-folded).
    pub fn best_match<'a, S: AsRef<str>>(&self, query: &str, candidates: &'a [S]) -> Option<&'a str> {
        self.best_index(query, candidates).map(|(i, _)| candidates[i].as_ref())
    }
}

/// Free-function form of [`Matcher::best_match`].
pub fn best_match<'a, S: AsRef<str>>(
    query: &str,
    candidates: &'a [S],
    cutoff: f64,
    case: CaseMode,
) -> Option<&'a str> {
    Matcher::new(cutoff, case).best_match(query, candidates)
}
