//! Canned replies for the report chat.
//!
//! There is no model behind the chat. A reply is picked from an ordered list
//! of rules by looking for keywords in the lower-cased query; the first rule
//! with any matching keyword wins and the fallback covers everything else.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRule {
    /// Lower-case substrings, any of which selects this rule
    pub keywords: Vec<String>,
    pub response: String,
}

impl ResponseRule {
    pub fn matches(&self, query: &str) -> bool {
        self.keywords.iter().any(|k| query.contains(k.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Assistant {
    pub rules: Vec<ResponseRule>,
    pub fallback: String,
}

impl Assistant {
    #[instrument(level = "debug", skip(self))]
    pub fn respond(&self, query: &str) -> &str {
        let query = query.to_lowercase();
        match self.rules.iter().position(|rule| rule.matches(&query)) {
            Some(index) => {
                debug!(rule = index, "Matched response rule");
                &self.rules[index].response
            }
            None => &self.fallback,
        }
    }
}

/// The message posted on the user's behalf when a report value is clicked.
pub fn explain_prompt(value: &str, context: Option<&str>) -> String {
    match context.filter(|c| !c.trim().is_empty()) {
        Some(context) => format!("Explain {} in the context of {}", value, context),
        None => format!("Explain what {} means in this report", value),
    }
}
