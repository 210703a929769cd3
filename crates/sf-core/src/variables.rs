//! Placeholder substitution for hook-script text

use regex::{Captures, Regex};
use std::collections::HashMap;

/// Replaces `${name}` placeholders in text with mapped values.
///
/// Substitution is purely textual and single-pass: substituted values are
/// never re-scanned for further placeholders, and a `${name}` whose name is
/// not in the mapping is left in the output untouched. No SQL escaping is
/// applied; callers are responsible for supplying safe values.
pub struct VariableReplacer {
    variables: HashMap<String, String>,
    pattern: Regex,
}

impl VariableReplacer {
    /// Bind a replacer to a finalized variable mapping.
    pub fn new(variables: HashMap<String, String>) -> Self {
        let pattern = Regex::new(r"\$\{([^}]*)\}").expect("valid placeholder pattern");
        Self { variables, pattern }
    }

    /// Produce a copy of `text` with every known placeholder substituted.
    pub fn replace(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures<'_>| match self.variables.get(&caps[1]) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }

    /// The bound variable mapping
    pub fn variables(&self) -> &HashMap<String, String> {
        &self.variables
    }
}

#[cfg(test)]
#[path = "variables_test.rs"]
mod tests;
