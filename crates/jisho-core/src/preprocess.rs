use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default term cleanup
    fn process(&self, text: &str) -> String {
        text.trim().to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// NFKC-normalizes before trimming, folds full-width ASCII and half-width kana
pub struct NfkcPreprocessor;
impl Preprocessor for NfkcPreprocessor {
    fn process(&self, text: &str) -> String {
        text.nfkc().collect::<String>().trim().to_string()
    }
}

pub fn preprocessor(normalize: bool) -> Box<dyn Preprocessor + Send + Sync> {
    if normalize {
        Box::new(NfkcPreprocessor)
    } else {
        Box::new(DefaultPreprocessor)
    }
}

/// One term per line, blank lines dropped. Repeated terms are kept.
pub fn parse_terms(text: &str, preprocessor: &dyn Preprocessor) -> Vec<String> {
    text.lines()
        .map(|line| preprocessor.process(line))
        .filter(|term| !term.is_empty())
        .collect()
}
