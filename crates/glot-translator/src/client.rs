use std::time::Duration;

use glot_config::translator::TranslatorConfig;
use serde_json::Value;

use crate::chunk::split_chunks;
use crate::outcome::TranslationOutcome;
use crate::{LanguageCode, Translator, ValidationError};

/// Only this many characters of the input are sent for detection
const DETECT_SNIPPET_CHARS: usize = 500;

/// The endpoint refuses requests without a browser user agent
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// One failed request round-trip, folded into a `Failed` outcome
#[derive(Debug, thiserror::Error)]
enum RequestError {
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("HTTP error {0}")]
    Status(reqwest::StatusCode),

    #[error("Translation failed: {0}")]
    Decode(reqwest::Error),

    #[error("Invalid response from translation service")]
    UnexpectedShape,
}

/// Blocking client for the translation endpoint.
///
/// Expected failures never escape as errors: `translate` and
/// `translate_large` fold them into the outcome, `detect_language` falls
/// back to ("auto", 0.0). Callers are expected to run this off their
/// interaction thread.
#[derive(Clone)]
pub struct TranslationClient {
    config: TranslatorConfig,
    client: reqwest::blocking::Client,
}

impl TranslationClient {
    pub fn new(config: TranslatorConfig) -> Self {
        Self {
            config,
            client: reqwest::blocking::Client::new(),
        }
    }

    fn request(&self, params: &[(&str, &str)], timeout: Duration) -> Result<Value, RequestError> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(params)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .timeout(timeout)
            .send()
            .map_err(RequestError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status(status));
        }

        response.json::<Value>().map_err(RequestError::Decode)
    }

    /// Pull the translation out of the endpoint's array-of-arrays dialect:
    /// element 0 holds `[translated, original, ...]` fragment tuples,
    /// element 2 the detected source language when the detector committed.
    fn read_translation(&self, body: &Value, src: &str) -> TranslationOutcome {
        let fragments = match body.get(0).and_then(Value::as_array) {
            Some(fragments) if !fragments.is_empty() => fragments,
            _ => {
                return TranslationOutcome::failed(
                    RequestError::UnexpectedShape.to_string(),
                    src,
                );
            }
        };

        let mut text = String::new();
        for fragment in fragments {
            if let Some(piece) = fragment.get(0).and_then(Value::as_str)
                && !piece.is_empty()
            {
                text.push_str(piece);
            }
        }

        let detected = detected_language(body).unwrap_or(src);
        TranslationOutcome::translated(text, detected, detection_confidence(detected))
    }
}

impl Translator for TranslationClient {
    fn validate(&self, text: &str) -> Result<(), ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::Empty);
        }

        let len = text.chars().count();
        if len > self.config.max_chars {
            return Err(ValidationError::TooLong {
                len,
                max: self.config.max_chars,
            });
        }

        let lines = text.matches('\n').count() + 1;
        if lines > self.config.max_lines {
            return Err(ValidationError::TooManyLines {
                lines,
                max: self.config.max_lines,
            });
        }

        Ok(())
    }

    fn translate(&self, text: &str, src: &str, dest: &str) -> TranslationOutcome {
        if let Err(err) = self.validate(text) {
            return TranslationOutcome::failed(err.to_string(), src);
        }

        let params = [
            ("client", "gtx"),
            ("dt", "t"),
            ("q", text),
            ("sl", src),
            ("tl", dest),
            ("ie", "UTF-8"),
            ("oe", "UTF-8"),
        ];

        match self.request(&params, self.config.translate_timeout()) {
            Ok(body) => self.read_translation(&body, src),
            Err(err) => {
                tracing::debug!("translation request failed: {err}");
                TranslationOutcome::failed(err.to_string(), src)
            }
        }
    }

    fn translate_large(&self, text: &str, src: &str, dest: &str) -> TranslationOutcome {
        let err = match self.validate(text) {
            Ok(()) => return self.translate(text, src, dest),
            Err(err) => err,
        };

        // Only over-length input is worth splitting; anything else is
        // reported as-is.
        if !matches!(err, ValidationError::TooLong { .. }) {
            return TranslationOutcome::failed(err.to_string(), src);
        }

        let chunks = split_chunks(text, self.config.chunk_size());
        if chunks.len() <= 1 {
            return TranslationOutcome::failed(
                "Text too large to process. Please split manually.",
                src,
            );
        }

        let mut parts = Vec::with_capacity(chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            tracing::debug!(
                "translating chunk {}/{} ({} chars)",
                i + 1,
                chunks.len(),
                chunk.chars().count()
            );

            // Strictly sequential: concatenation order must match input
            // order, and a failing chunk stops the remaining requests.
            match self.translate(chunk, src, dest) {
                TranslationOutcome::Translated { text, .. } => parts.push(text),
                failed => return failed,
            }
        }

        TranslationOutcome::translated(parts.join("\n\n"), src, 0.8)
    }

    fn detect_language(&self, text: &str) -> (LanguageCode, f32) {
        if text.trim().is_empty() {
            return ("auto".to_string(), 0.0);
        }

        let snippet: String = text.chars().take(DETECT_SNIPPET_CHARS).collect();
        let params = [
            ("client", "gtx"),
            ("dt", "at"),
            ("q", snippet.as_str()),
            ("sl", "auto"),
            ("tl", "en"),
        ];

        match self.request(&params, self.config.detect_timeout()) {
            Ok(body) => match detected_language(&body) {
                Some(lang) => (lang.to_string(), detection_confidence(lang)),
                None => ("auto".to_string(), 0.0),
            },
            Err(err) => {
                tracing::debug!("language detection failed: {err}");
                ("auto".to_string(), 0.0)
            }
        }
    }
}

fn detected_language(body: &Value) -> Option<&str> {
    body.get(2)
        .and_then(Value::as_str)
        .filter(|lang| !lang.is_empty())
}

fn detection_confidence(lang: &str) -> f32 {
    if lang != "auto" { 0.9 } else { 0.5 }
}
