use anyhow::Result;
use dialoguer::Input;

/// Source of answers for the shell's text prompts.
pub trait Prompt {
    /// Ask for one line of text. An empty answer is allowed.
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Prompts on the controlling terminal.
pub struct Terminal;

impl Prompt for Terminal {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}

/// Replays canned answers, for driving the shell in tests.
#[cfg(test)]
pub struct Scripted {
    answers: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl Scripted {
    pub fn new(answers: &[&str]) -> Self {
        Scripted {
            answers: answers.iter().map(|a| a.to_string()).collect(),
        }
    }
}

#[cfg(test)]
impl Prompt for Scripted {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No scripted answer for prompt: {}", prompt))
    }
}
