//! Text normalization: symbol removal and indentation stripping

/// Symbols removed from article text by default
pub const UNWANTED_SYMBOLS: [&str; 8] = ["●", "■", "×", "▼", "◇", "x000D", "＿", "_"];

/// Strip leading whitespace from every line, rejoining with `\n`
///
/// Trailing whitespace and line content are untouched.
pub fn strip_line_indent(text: &str) -> String {
    text.lines()
        .map(str::trim_start)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Removes unwanted symbols and leading whitespace from article text
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    symbols: Vec<String>,
}

impl TextNormalizer {
    /// Create a normalizer removing the given symbols; empty symbols are ignored
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols
                .into_iter()
                .map(Into::into)
                .filter(|s: &String| !s.is_empty())
                .collect(),
        }
    }

    /// Normalize text
    ///
    /// Symbols are removed until none is left, so a removal that joins the
    /// pieces of another symbol (`x00_0D`) cannot leave it behind.
    pub fn normalize(&self, text: &str) -> String {
        let mut text = text.to_string();
        loop {
            let before = text.len();
            for symbol in &self.symbols {
                if text.contains(symbol.as_str()) {
                    text = text.replace(symbol.as_str(), "");
                }
            }
            if text.len() == before {
                break;
            }
        }

        strip_line_indent(text.trim())
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(UNWANTED_SYMBOLS)
    }
}
