/// Outcome of a translation call.
///
/// Expected failures (validation, transport, response shape) are carried in
/// the `Failed` variant instead of an `Err`, so callers branch on the variant
/// rather than unwinding. Exactly one of the two holds at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationOutcome {
    Translated {
        text: String,
        /// Language the endpoint detected, or the caller's source code
        detected_lang: String,
        confidence: f32,
    },
    Failed {
        message: String,
        /// Source language echoed back from the caller
        lang: String,
    },
}

impl TranslationOutcome {
    pub fn translated(
        text: impl Into<String>,
        detected_lang: impl Into<String>,
        confidence: f32,
    ) -> Self {
        TranslationOutcome::Translated {
            text: text.into(),
            detected_lang: detected_lang.into(),
            confidence,
        }
    }

    pub fn failed(message: impl Into<String>, lang: impl Into<String>) -> Self {
        TranslationOutcome::Failed {
            message: message.into(),
            lang: lang.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TranslationOutcome::Failed { .. })
    }

    /// Human-readable failure message, None for successful translations
    pub fn error_message(&self) -> Option<&str> {
        match self {
            TranslationOutcome::Failed { message, .. } => Some(message),
            TranslationOutcome::Translated { .. } => None,
        }
    }

    /// Translated text, None for failures
    pub fn text(&self) -> Option<&str> {
        match self {
            TranslationOutcome::Translated { text, .. } => Some(text),
            TranslationOutcome::Failed { .. } => None,
        }
    }

    pub fn detected_lang(&self) -> &str {
        match self {
            TranslationOutcome::Translated { detected_lang, .. } => detected_lang,
            TranslationOutcome::Failed { lang, .. } => lang,
        }
    }

    pub fn confidence(&self) -> f32 {
        match self {
            TranslationOutcome::Translated { confidence, .. } => *confidence,
            TranslationOutcome::Failed { .. } => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TranslationOutcome;

    #[test]
    fn translated_outcome_is_not_an_error() {
        let outcome = TranslationOutcome::translated("Halo dunia", "en", 0.9);

        assert!(!outcome.is_error());
        assert_eq!(outcome.text(), Some("Halo dunia"));
        assert_eq!(outcome.detected_lang(), "en");
        assert_eq!(outcome.confidence(), 0.9);
        assert_eq!(outcome.error_message(), None);
    }

    #[test]
    fn failed_outcome_exposes_message_and_echoes_lang() {
        let outcome = TranslationOutcome::failed("No text to translate", "auto");

        assert!(outcome.is_error());
        assert_eq!(outcome.error_message(), Some("No text to translate"));
        assert_eq!(outcome.text(), None);
        assert_eq!(outcome.detected_lang(), "auto");
        assert_eq!(outcome.confidence(), 0.0);
    }
}
