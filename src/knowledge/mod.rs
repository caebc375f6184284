// src/knowledge/mod.rs
//! Free-text Q&A: approximate matching against a self-extending store.

pub mod engine;
pub mod matcher;
pub mod store;

pub use engine::{KnowledgeEngine, Reply, TeachOutcome};
pub use matcher::{CaseMode, Matcher, best_match};
pub use store::{KnowledgeBase, QaEntry};
