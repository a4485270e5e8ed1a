//! Survey profile templating.
//!
//! Combines structured profile data with question text into the final
//! prompt list a campaign consumes: every profile is rendered as a header
//! of `key: value` lines, followed by a blank line and the question.

use crate::core::prompt::Prompt;

/// One survey profile: ordered key/value fields rendered ahead of every
/// question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    fields: Vec<(String, String)>,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, preserving insertion order.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn render(&self) -> String {
        let mut header = String::new();
        for (key, value) in &self.fields {
            header.push_str(key);
            header.push_str(": ");
            header.push_str(value);
            header.push('\n');
        }
        header.push('\n');
        header
    }
}

/// Generates prompts by crossing profiles with questions.
///
/// Prompts come out profile-major: all questions for the first profile,
/// then all questions for the second, and so on.
#[derive(Debug, Clone, Default)]
pub struct ProfileGenerator {
    profiles: Vec<Profile>,
    questions: Vec<String>,
}

impl ProfileGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a profile to the list of profiles.
    pub fn add_profile(&mut self, profile: Profile) {
        self.profiles.push(profile);
    }

    /// Add a question to the list of questions.
    pub fn add_question(&mut self, question: impl Into<String>) {
        self.questions.push(question.into());
    }

    /// Generate prompts by combining profiles and questions.
    pub fn generate_prompts(&self) -> Vec<Prompt> {
        let mut prompts = Vec::with_capacity(self.profiles.len() * self.questions.len());
        for profile in &self.profiles {
            let header = profile.render();
            for question in &self.questions {
                prompts.push(Prompt::new(format!("{header}{question}")));
            }
        }
        prompts
    }
}
