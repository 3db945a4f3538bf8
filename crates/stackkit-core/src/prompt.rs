//! Abstract selection provider
//!
//! The engine never talks to a terminal directly. The cliclack front-end in
//! `tui` implements [`Prompter`]; tests script it.

use crate::error::Result;

/// Interactive input and progress output for one run
pub trait Prompter {
    /// Show a line of menu or summary text; may be batched until the next prompt
    fn message(&mut self, text: &str) -> Result<()>;

    /// Announce a pipeline stage right away
    fn step(&mut self, text: &str) -> Result<()>;

    /// Show a non-fatal problem
    fn warning(&mut self, text: &str) -> Result<()>;

    /// Ask for a numeric token; returns the raw answer
    ///
    /// Cancellation is reported as `ScaffoldError::Cancelled`.
    fn number(&mut self, prompt: &str) -> Result<String>;

    /// Ask for free text, optionally pre-filled
    fn text(&mut self, prompt: &str, default: Option<&str>) -> Result<String>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::error::ScaffoldError;
    use std::collections::VecDeque;

    /// Replays canned answers; running out of answers counts as a cancel
    #[derive(Debug, Default)]
    pub struct ScriptedPrompter {
        answers: VecDeque<String>,
        pub shown: Vec<String>,
        pub steps: Vec<String>,
        pub warnings: Vec<String>,
        pub asked: usize,
    }

    impl ScriptedPrompter {
        pub fn new<I, S>(answers: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                answers: answers.into_iter().map(Into::into).collect(),
                ..Self::default()
            }
        }

        fn next(&mut self) -> Result<String> {
            self.asked += 1;
            self.answers.pop_front().ok_or(ScaffoldError::Cancelled)
        }
    }

    impl Prompter for ScriptedPrompter {
        fn message(&mut self, text: &str) -> Result<()> {
            self.shown.push(text.to_string());
            Ok(())
        }

        fn step(&mut self, text: &str) -> Result<()> {
            self.steps.push(text.to_string());
            Ok(())
        }

        fn warning(&mut self, text: &str) -> Result<()> {
            self.warnings.push(text.to_string());
            Ok(())
        }

        fn number(&mut self, _prompt: &str) -> Result<String> {
            self.next()
        }

        fn text(&mut self, _prompt: &str, _default: Option<&str>) -> Result<String> {
            self.next()
        }
    }
}
