use chrono::Local;
use serde::{Deserialize, Serialize};

/// One persisted translation exchange, never mutated after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// ISO-8601 local time of the exchange
    pub timestamp: String,
    pub original: String,
    pub translated: String,
    pub from_lang: String,
    pub to_lang: String,
    pub confidence: f32,
}

impl HistoryEntry {
    pub fn new(
        original: &str,
        translated: &str,
        from_lang: &str,
        to_lang: &str,
        confidence: f32,
    ) -> Self {
        Self {
            timestamp: Local::now().to_rfc3339(),
            original: original.to_string(),
            translated: translated.to_string(),
            from_lang: from_lang.to_string(),
            to_lang: to_lang.to_string(),
            confidence,
        }
    }

    /// Time-of-day slice of the timestamp, empty when malformed
    pub fn time_of_day(&self) -> &str {
        self.timestamp.get(11..19).unwrap_or("")
    }

    /// One-line label for history pickers: "12:30:45 en→id: original…"
    pub fn summary(&self) -> String {
        format!(
            "{} {}→{}: {}",
            self.time_of_day(),
            self.from_lang,
            self.to_lang,
            truncate(&self.original, 30)
        )
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let short: String = text.chars().take(max_chars).collect();
        format!("{short}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::HistoryEntry;

    #[test]
    fn summary_shows_time_langs_and_truncated_original() {
        let entry = HistoryEntry {
            timestamp: "2025-10-01T12:30:45+07:00".to_string(),
            original: "a very long sentence that keeps going well past thirty characters".to_string(),
            translated: "whatever".to_string(),
            from_lang: "en".to_string(),
            to_lang: "id".to_string(),
            confidence: 0.9,
        };

        let summary = entry.summary();

        assert!(summary.starts_with("12:30:45 en→id: "));
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn short_originals_are_not_truncated() {
        let entry = HistoryEntry::new("Hello", "Halo", "en", "id", 0.9);

        assert!(entry.summary().ends_with("Hello"));
    }
}
