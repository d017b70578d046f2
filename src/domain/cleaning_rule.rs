use regex::Regex;

#[derive(Debug, thiserror::Error)]
pub enum CleaningRuleError {
    #[error("invalid cleaning pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A global regular-expression substitution. Replacements use `$1` /
/// `${name}` group references.
#[derive(Debug, Clone)]
pub struct CleaningRule {
    pattern: Regex,
    replacement: String,
}

impl CleaningRule {
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, CleaningRuleError> {
        let pattern = Regex::new(pattern).map_err(|source| CleaningRuleError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern,
            replacement: replacement.into(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}

/// Ordered rules, applied one after another. Order is significant.
#[derive(Debug, Clone, Default)]
pub struct CleaningRuleSet {
    rules: Vec<CleaningRule>,
}

impl CleaningRuleSet {
    pub fn new(rules: Vec<CleaningRule>) -> Self {
        Self { rules }
    }

    pub fn from_pairs<I, P, R>(pairs: I) -> Result<Self, CleaningRuleError>
    where
        I: IntoIterator<Item = (P, R)>,
        P: AsRef<str>,
        R: Into<String>,
    {
        let rules = pairs
            .into_iter()
            .map(|(pattern, replacement)| CleaningRule::new(pattern.as_ref(), replacement))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[CleaningRule] {
        &self.rules
    }

    pub fn apply(&self, text: String) -> String {
        self.rules
            .iter()
            .fold(text, |current, rule| rule.apply(&current))
    }
}
