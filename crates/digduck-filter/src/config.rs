//! Filter configuration

use crate::FilterError;
use serde::{Deserialize, Serialize};

/// Job titles whose presence marks a sentence as a byline/title sentence
pub const DEFAULT_JOB_TITLES: [&str; 13] = [
    "代表", "取締役", "部長", "社長", "専務", "理事", "監査役", "役員", "議員", "審議官", "教授",
    "会長", "研究員",
];

/// Configuration for the article filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Keep only articles containing at least one of these (empty keeps all)
    pub keywords: Vec<String>,

    /// Literal marker counted for the garbage ratio
    pub garbage_marker: String,

    /// Articles need a garbage ratio strictly below this
    pub max_garbage_ratio: f64,

    /// Noun ratio at or above which a verb-poor article is excluded
    pub noun_ratio_threshold: f64,

    /// Verb ratio at or below which a noun-heavy article is excluded
    pub verb_ratio_threshold: f64,

    /// Person/title sentence ratio at or above which an article is excluded
    pub person_title_threshold: f64,

    /// Job titles matched as substrings of noun surfaces
    pub job_titles: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            garbage_marker: "x000D".to_string(),
            max_garbage_ratio: 0.018,
            noun_ratio_threshold: 0.8,
            verb_ratio_threshold: 0.05,
            person_title_threshold: 0.5,
            job_titles: DEFAULT_JOB_TITLES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl FilterConfig {
    /// Replace the keyword list
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.garbage_marker.is_empty() {
            return Err("garbage_marker must not be empty".to_string());
        }
        let ratios = [
            ("max_garbage_ratio", self.max_garbage_ratio),
            ("noun_ratio_threshold", self.noun_ratio_threshold),
            ("verb_ratio_threshold", self.verb_ratio_threshold),
            ("person_title_threshold", self.person_title_threshold),
        ];
        for (name, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{} must be within [0.0, 1.0], got {}", name, value));
            }
        }
        if self.keywords.iter().any(|k| k.is_empty()) {
            return Err("keywords must not contain empty strings".to_string());
        }
        if self.job_titles.iter().any(|t| t.is_empty()) {
            return Err("job_titles must not contain empty strings".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, FilterError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, FilterError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Split a space-separated keyword field; blank input means no keywords
pub fn parse_keywords(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}
