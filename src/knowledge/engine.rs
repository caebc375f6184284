// src/knowledge/engine.rs
//! Answer-or-learn loop over a [`KnowledgeBase`].
//!
//! `ask` either finds a stored answer or reports the question as unknown;
//! the caller then collects a taught answer and hands it to `teach`, which
//! appends and persists. A failed save keeps the in-memory entry, so the
//! session and the file can drift apart until the next successful save.

use std::path::PathBuf;

use tracing::{error, info};

use super::matcher::{CaseMode, Matcher};
use super::store::{self, KnowledgeBase, QaEntry};
use crate::config::KnowledgeOptions;
use crate::config::consts::SKIP_WORD;
use crate::core::sanitize::fold;
use crate::error::KnowledgeError;

#[derive(Debug, PartialEq)]
pub enum Reply {
    Answer { matched: String, answer: String },
    Unknown,
}

#[derive(Debug)]
pub enum TeachOutcome {
    Learned,
    Skipped,
    /// Appended in memory, but the file was not updated.
    LearnedUnsaved(KnowledgeError),
}

pub struct KnowledgeEngine {
    kb: KnowledgeBase,
    path: PathBuf,
    matcher: Matcher,
}

impl KnowledgeEngine {
    pub fn new(kb: KnowledgeBase, path: impl Into<PathBuf>, matcher: Matcher) -> Self {
        Self { kb, path: path.into(), matcher }
    }

    /// Load the store named in `opts` (soft-failing to empty).
    pub fn open(opts: &KnowledgeOptions) -> Self {
        let matcher = Matcher::new(opts.cutoff, CaseMode::from_flag(opts.case_sensitive));
        Self::new(store::load(&opts.path), &opts.path, matcher)
    }

    pub fn knowledge(&self) -> &KnowledgeBase { &self.kb }

    pub fn ask(&self, query: &str) -> Reply {
        let candidates = self.kb.question_texts();
        let Some(matched) = self.matcher.best_match(query, &candidates) else {
            return Reply::Unknown;
        };
        match self.answer_for(matched) {
            Some(answer) => Reply::Answer { matched: s!(matched), answer: s!(answer) },
            None => Reply::Unknown,
        }
    }

    /// Stored answer for an exact question text, first entry wins.
    pub fn answer_for(&self, question: &str) -> Option<&str> {
        let case = self.matcher.case();
        let want = case.normalize(question);
        self.kb
            .questions
            .iter()
            .find(|q| case.normalize(&q.question) == want)
            .map(|q| q.answer.as_str())
    }

    /// Record a taught answer for `question`. `skip` (any case) or a blank
    /// answer leaves the base untouched.
    pub fn teach(&mut self, question: &str, answer: &str) -> TeachOutcome {
        let answer = answer.trim();
        if answer.is_empty() || fold(answer) == SKIP_WORD {
            return TeachOutcome::Skipped;
        }

        self.kb.push(QaEntry::new(question.trim(), answer));
        info!("Learned answer for {:?} ({} entries)", question.trim(), self.kb.len());

        match store::save(&self.path, &self.kb) {
            Ok(()) => TeachOutcome::Learned,
            Err(e) => {
                error!("Error saving knowledge base: {e}");
                TeachOutcome::LearnedUnsaved(e)
            }
        }
    }
}
