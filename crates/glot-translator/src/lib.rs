pub use self::catalog::language_name;
pub use self::client::TranslationClient;
pub use self::outcome::TranslationOutcome;

pub mod catalog;
pub mod chunk;
pub mod client;
pub mod outcome;


pub type LanguageCode = String;

/// Translation provider interface
pub trait Translator: Send + Sync {
    /// Check text against the provider's size limits
    fn validate(&self, text: &str) -> Result<(), ValidationError>;

    /// Translate text from source to target language
    fn translate(&self, text: &str, src: &str, dest: &str) -> TranslationOutcome;

    /// Translate text that may exceed the single-request size limit
    fn translate_large(&self, text: &str, src: &str, dest: &str) -> TranslationOutcome;

    /// Detect the language of text, ("auto", 0.0) when nothing can be said
    fn detect_language(&self, text: &str) -> (LanguageCode, f32);
}

/// Why a text was rejected before any request was made
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("No text to translate")]
    Empty,

    #[error("Text too long ({len} characters). Maximum is {max} characters.")]
    TooLong { len: usize, max: usize },

    #[error("Too many lines ({lines}). Maximum is {max} lines per translation.")]
    TooManyLines { lines: usize, max: usize },
}
