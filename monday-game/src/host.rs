//! The boundary between the engine and whatever shows text to the player.
use std::collections::VecDeque;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// The player's input stream ended (EOF, closed tab, ...).
    #[error("input closed")]
    InputClosed,
    #[error("host I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Prompt, print and wait.
///
/// The engine is written once against this trait. A terminal host can do
/// blocking I/O inside the futures and be driven by a simple executor; a
/// cooperative host awaits real async I/O.
#[async_trait::async_trait(?Send)]
pub trait Host {
    /// Show `text` and wait for one line of input, without its newline.
    async fn prompt(&mut self, text: &str) -> Result<String, HostError>;

    /// Print one line.
    async fn output(&mut self, text: &str) -> Result<(), HostError>;

    /// Pacing delay. Hosts may shorten or skip it.
    async fn delay(&mut self, seconds: f32);

    /// Wait for the player to acknowledge `text`. Hosts without a keyboard
    /// can override this with a delay.
    async fn pause(&mut self, text: &str) -> Result<(), HostError> {
        self.prompt(text).await.map(drop)
    }
}

/// Host fed from a fixed list of answers that records everything shown.
///
/// Pauses are recorded but consume no input, so a script only lists the
/// menu answers. Running out of answers closes the input.
#[derive(Debug, Default, Clone)]
pub struct ScriptedHost {
    inputs: VecDeque<String>,
    transcript: Vec<String>,
    prompts: usize,
    waited: f32,
}

impl ScriptedHost {
    pub fn new<I, T>(inputs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Every line output so far, pause prompts included.
    #[must_use]
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    /// How many output lines contain `needle`.
    #[must_use]
    pub fn count(&self, needle: &str) -> usize {
        self.transcript
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }

    #[must_use]
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Number of prompts answered.
    #[must_use]
    pub const fn prompts(&self) -> usize {
        self.prompts
    }

    /// Total seconds of delay requested.
    #[must_use]
    pub const fn waited(&self) -> f32 {
        self.waited
    }
}

#[async_trait::async_trait(?Send)]
impl Host for ScriptedHost {
    async fn prompt(&mut self, text: &str) -> Result<String, HostError> {
        let answer = self.inputs.pop_front().ok_or(HostError::InputClosed)?;
        self.transcript.push(format!("{text}{answer}"));
        self.prompts += 1;
        Ok(answer)
    }

    async fn output(&mut self, text: &str) -> Result<(), HostError> {
        self.transcript.push(text.to_string());
        Ok(())
    }

    async fn delay(&mut self, seconds: f32) {
        self.waited += seconds;
    }

    async fn pause(&mut self, text: &str) -> Result<(), HostError> {
        self.transcript.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn scripted_answers_then_closes() {
        let mut host = ScriptedHost::new(["1", " 2 "]);
        block_on(async {
            assert_eq!(host.prompt("> ").await.unwrap(), "1");
            host.pause("Press Enter").await.unwrap();
            assert_eq!(host.prompt("> ").await.unwrap(), " 2 ");
            assert!(matches!(
                host.prompt("> ").await,
                Err(HostError::InputClosed)
            ));
        });
        assert_eq!(host.prompts(), 2);
        assert_eq!(host.transcript(), ["> 1", "Press Enter", ">  2 "]);
    }

    #[test]
    fn delays_accumulate() {
        let mut host = ScriptedHost::default();
        block_on(async {
            host.delay(1.5).await;
            host.delay(0.5).await;
        });
        assert!((host.waited() - 2.0).abs() < f32::EPSILON);
    }
}
