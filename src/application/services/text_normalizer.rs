use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{CleaningRuleSet, NormalizedText};

static DETERMINERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(a|an|the)\b").unwrap());

/// Turns raw extracted text into a single line of ASCII words.
///
/// Steps, in order: optional lowercasing, per-line trimming, the cleaning
/// rules, dropping non-ASCII and control characters, dropping ASCII
/// punctuation, whitespace collapsing, determiner removal and a final
/// collapse.
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    rules: CleaningRuleSet,
}

impl TextNormalizer {
    pub fn new(rules: CleaningRuleSet) -> Self {
        Self { rules }
    }

    pub fn normalize(&self, raw: &str, case_fold: bool) -> NormalizedText {
        let text = if case_fold {
            raw.to_lowercase()
        } else {
            raw.to_string()
        };

        let text = trim_lines(&text);
        let text = self.rules.apply(text);

        let text: String = text.chars().filter(|&ch| is_retained(ch)).collect();
        let text = collapse_whitespace(&text);

        // Determiner removal leaves a gap that the second collapse closes.
        let text = DETERMINERS.replace_all(&text, " ");
        NormalizedText::new(collapse_whitespace(&text))
    }
}

fn trim_lines(text: &str) -> String {
    text.lines().map(str::trim).collect::<Vec<_>>().join("\n")
}

fn is_retained(ch: char) -> bool {
    ch.is_ascii() && !ch.is_ascii_punctuation() && (!ch.is_ascii_control() || ch.is_whitespace())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
