use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use glot_config::history::HistoryConfig;
use glot_history::HistoryStore;
use glot_translator::{LanguageCode, TranslationOutcome, Translator, ValidationError};
use tokio::time::timeout;

#[derive(Clone, Default)]
struct StubTranslator {
    calls: Arc<AtomicUsize>,
}

impl Translator for StubTranslator {
    fn validate(&self, text: &str) -> Result<(), ValidationError> {
        if text.trim().is_empty() {
            Err(ValidationError::Empty)
        } else {
            Ok(())
        }
    }

    fn translate(&self, text: &str, src: &str, _dest: &str) -> TranslationOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.validate(text) {
            Ok(()) => TranslationOutcome::translated(text.to_uppercase(), "en", 0.9),
            Err(err) => TranslationOutcome::failed(err.to_string(), src),
        }
    }

    fn translate_large(&self, text: &str, src: &str, dest: &str) -> TranslationOutcome {
        self.translate(text, src, dest)
    }

    fn detect_language(&self, _text: &str) -> (LanguageCode, f32) {
        ("fr".to_string(), 0.9)
    }
}

#[tokio::test]
async fn translate_round_trips_through_the_worker() {
    let stub = StubTranslator::default();
    let calls = Arc::clone(&stub.calls);
    let worker = crate::spawn(stub, None);

    let outcome = timeout(Duration::from_secs(2), worker.translate("hello", "auto", "id"))
        .await
        .expect("worker never replied")
        .expect("worker gone");

    assert_eq!(outcome.text(), Some("HELLO"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn detect_round_trips_through_the_worker() {
    let worker = crate::spawn(StubTranslator::default(), None);

    let (lang, confidence) = timeout(Duration::from_secs(2), worker.detect("bonjour"))
        .await
        .expect("worker never replied")
        .expect("worker gone");

    assert_eq!(lang, "fr");
    assert_eq!(confidence, 0.9);
}

#[tokio::test]
async fn successful_translations_are_recorded_in_history() {
    let dir = tempfile::tempdir().unwrap();
    let config = HistoryConfig {
        file_path: dir.path().join("history.json"),
        max_entries: 100,
    };

    let worker = crate::spawn(
        StubTranslator::default(),
        Some(HistoryStore::new(config.clone())),
    );

    timeout(Duration::from_secs(2), worker.translate("hello", "auto", "id"))
        .await
        .expect("worker never replied")
        .expect("worker gone");

    let entries = HistoryStore::new(config).load_history();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].original, "hello");
    assert_eq!(entries[0].translated, "HELLO");
    assert_eq!(entries[0].from_lang, "en");
    assert_eq!(entries[0].to_lang, "id");
}

#[tokio::test]
async fn failed_translations_are_not_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let config = HistoryConfig {
        file_path: dir.path().join("history.json"),
        max_entries: 100,
    };

    let worker = crate::spawn(
        StubTranslator::default(),
        Some(HistoryStore::new(config.clone())),
    );

    let outcome = timeout(Duration::from_secs(2), worker.translate("", "auto", "id"))
        .await
        .expect("worker never replied")
        .expect("worker gone");

    assert!(outcome.is_error());
    assert!(HistoryStore::new(config).load_history().is_empty());
}

#[tokio::test]
async fn shutdown_stops_accepting_jobs() {
    let worker = crate::spawn(StubTranslator::default(), None);

    worker.shutdown();
    tokio::time::sleep(Duration::from_millis(50)).await;

    let result = timeout(Duration::from_secs(2), worker.translate("hello", "auto", "id"))
        .await
        .expect("shutdown worker should fail fast");
    assert!(result.is_err());
}
