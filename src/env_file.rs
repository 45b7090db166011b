//! Line scanner for the source `.env` file.

/// Model used when the source file does not name one.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

const API_KEY_PREFIX: &str = "OPENAI_API_KEY=";
const MODEL_PREFIX: &str = "OPENAI_MODEL=";

/// Settings extracted from one scan of the source file.
///
/// An empty `api_key` means no usable key was found.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_key: String,
    pub model: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// Scans the source contents for the two recognized keys.
///
/// Each line is trimmed before matching. A repeated key overwrites the
/// previous value, so the last occurrence wins. Every other line is inert,
/// including comments and unrelated assignments. Lines without a `=` can
/// never match a prefix, so there is no malformed-line failure path.
pub fn scan(contents: &str) -> Settings {
    let mut settings = Settings::default();

    for line in contents.lines() {
        let line = line.trim();
        if let Some(raw) = line.strip_prefix(API_KEY_PREFIX) {
            settings.api_key = strip_outer_quotes(raw).to_string();
        } else if let Some(raw) = line.strip_prefix(MODEL_PREFIX) {
            settings.model = strip_outer_quotes(raw).to_string();
        }
    }

    settings
}

// Removes at most one leading and one trailing quote character, each of
// either kind. Exactly one layer: '"abc"' becomes "abc" with the inner
// quotes intact.
fn strip_outer_quotes(raw: &str) -> &str {
    let mut value = raw;
    if let Some(rest) = value.strip_prefix('\'').or_else(|| value.strip_prefix('"')) {
        value = rest;
    }
    if let Some(rest) = value.strip_suffix('\'').or_else(|| value.strip_suffix('"')) {
        value = rest;
    }
    value
}
