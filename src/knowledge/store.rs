// src/knowledge/store.rs
//! Durable question/answer file.
//!
//! Format: `{"questions": [{"question": "...", "answer": "..."}, ...]}`,
//! pretty-printed with two-space indentation. Whole-file overwrite on save,
//! via a sibling temp file + rename. No locking: one writer per file is
//! assumed, and two concurrent sessions race with last-writer-wins.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::KnowledgeError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaEntry {
    pub question: String,
    pub answer: String,
}

impl QaEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self { question: question.into(), answer: answer.into() }
    }
}

/// Ordered, append-only collection. Duplicate questions are allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    #[serde(default)]
    pub questions: Vec<QaEntry>,
}

impl KnowledgeBase {
    pub fn len(&self) -> usize { self.questions.len() }
    pub fn is_empty(&self) -> bool { self.questions.is_empty() }

    pub fn push(&mut self, entry: QaEntry) {
        self.questions.push(entry);
    }

    /// Question texts in insertion order (matcher candidates).
    pub fn question_texts(&self) -> Vec<&str> {
        self.questions.iter().map(|q| q.question.as_str()).collect()
    }
}

/// Read the knowledge base. Never fails: a missing or unreadable file, or
/// malformed content, logs a warning and yields an empty base.
pub fn load(path: &Path) -> KnowledgeBase {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("Knowledge file {} not found; starting empty", path.display());
            return KnowledgeBase::default();
        }
        Err(e) => {
            warn!("Could not read knowledge file {}: {e}; starting empty", path.display());
            return KnowledgeBase::default();
        }
    };

    match serde_json::from_str::<KnowledgeBase>(&text) {
        Ok(kb) => {
            debug!("Loaded {} Q&A entries from {}", kb.len(), path.display());
            kb
        }
        Err(e) => {
            warn!("Malformed knowledge file {}: {e}; starting empty", path.display());
            KnowledgeBase::default()
        }
    }
}

/// Overwrite `path` with the full base. The caller decides how loudly to
/// report a failure; nothing here panics.
pub fn save(path: &Path, kb: &KnowledgeBase) -> Result<(), KnowledgeError> {
    let mut json = serde_json::to_string_pretty(kb)?;
    json.push('\n');

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| io_err(parent, source))?;
        }
    }

    let tmp = tmp_path(path);
    let write = || -> io::Result<()> {
        let mut f = fs::File::create(&tmp)?;
        f.write_all(json.as_bytes())?;
        f.sync_all()?;
        fs::rename(&tmp, path)
    };
    if let Err(source) = write() {
        let _ = fs::remove_file(&tmp);
        return Err(io_err(path, source));
    }

    debug!("Saved {} Q&A entries to {}", kb.len(), path.display());
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn io_err(path: &Path, source: io::Error) -> KnowledgeError {
    KnowledgeError::Io { path: path.to_path_buf(), source }
}
