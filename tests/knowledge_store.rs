// tests/knowledge_store.rs
use std::fs;

use greenmen_bot::config::KnowledgeOptions;
use greenmen_bot::knowledge::{KnowledgeBase, KnowledgeEngine, QaEntry, Reply, TeachOutcome, store};

fn opts(path: std::path::PathBuf) -> KnowledgeOptions {
    KnowledgeOptions { path, ..Default::default() }
}

#[test]
fn file_layout_matches_the_shared_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("General_Information.json");
    fs::write(
        &path,
        r#"{"questions": [{"question": "What time does school start?", "answer": "7:45 AM"}]}"#,
    )
    .unwrap();

    let mut engine = KnowledgeEngine::open(&opts(path.clone()));
    assert_eq!(engine.knowledge().len(), 1);
    assert!(matches!(engine.teach("Who is the principal?", "Dr. Smith"), TeachOutcome::Learned));

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let qs = v["questions"].as_array().unwrap();
    assert_eq!(qs.len(), 2);
    assert_eq!(qs[1]["question"], "Who is the principal?");
    assert_eq!(qs[1]["answer"], "Dr. Smith");
}

#[test]
fn taught_entries_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/kb.json");

    let mut first = KnowledgeEngine::open(&opts(path.clone()));
    assert!(first.knowledge().is_empty());
    assert!(matches!(first.teach("When is spring break?", "March 24-28"), TeachOutcome::Learned));

    let second = KnowledgeEngine::open(&opts(path));
    match second.ask("when is spring break") {
        Reply::Answer { matched, answer } => {
            assert_eq!(matched, "When is spring break?");
            assert_eq!(answer, "March 24-28");
        }
        Reply::Unknown => panic!("expected an answer"),
    }
}

#[test]
fn corrupt_file_starts_empty_and_is_replaced_on_teach() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kb.json");
    fs::write(&path, "questions: [").unwrap();

    let mut engine = KnowledgeEngine::open(&opts(path.clone()));
    assert!(engine.knowledge().is_empty());
    assert_eq!(engine.ask("anything"), Reply::Unknown);

    assert!(matches!(engine.teach("Is there school today?", "Yes"), TeachOutcome::Learned));
    assert_eq!(store::load(&path).len(), 1);
}

#[test]
fn failed_save_keeps_the_answer_for_this_session() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should be makes the final rename fail.
    let path = dir.path().join("kb.json");
    fs::create_dir(&path).unwrap();

    let mut engine = KnowledgeEngine::open(&opts(path));
    let outcome = engine.teach("Where is the gym?", "Building B");
    assert!(matches!(outcome, TeachOutcome::LearnedUnsaved(_)));
    assert!(matches!(engine.ask("where is the gym"), Reply::Answer { .. }));
}

#[test]
fn save_load_save_keeps_entries_and_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kb.json");
    let mut kb = KnowledgeBase::default();
    kb.push(QaEntry::new("When is graduation?", "June 1st"));
    kb.push(QaEntry::new("What time does school start?", "7:45 AM"));
    kb.push(QaEntry::new("Who is the principal?", "Dr. Smith"));

    store::save(&path, &kb).unwrap();
    let first = store::load(&path);
    assert_eq!(first, kb);

    store::save(&path, &first).unwrap();
    let second = store::load(&path);
    assert_eq!(second, kb);
    let order: Vec<&str> = second.questions.iter().map(|q| q.question.as_str()).collect();
    assert_eq!(order, ["When is graduation?", "What time does school start?", "Who is the principal?"]);
}
