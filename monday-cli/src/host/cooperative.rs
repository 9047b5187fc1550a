use std::time::Duration;

use async_trait::async_trait;
use monday_game::{Host, HostError};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};

/// Host on tokio's async stdin/stdout. Delays yield to the runtime
/// instead of blocking the thread.
pub struct CooperativeHost {
    lines: Lines<BufReader<Stdin>>,
    stdout: Stdout,
}

impl CooperativeHost {
    /// Must be called from inside a tokio runtime.
    pub fn stdio() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            stdout: tokio::io::stdout(),
        }
    }

    async fn write(&mut self, text: &str) -> Result<(), HostError> {
        self.stdout.write_all(text.as_bytes()).await?;
        self.stdout.flush().await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl Host for CooperativeHost {
    async fn prompt(&mut self, text: &str) -> Result<String, HostError> {
        self.write(text).await?;
        let line = self.lines.next_line().await?.ok_or(HostError::InputClosed)?;
        Ok(super::strip_newline(line))
    }

    async fn output(&mut self, text: &str) -> Result<(), HostError> {
        self.write(&format!("{text}\n")).await
    }

    async fn delay(&mut self, seconds: f32) {
        if let Ok(duration) = Duration::try_from_secs_f32(seconds) {
            tokio::time::sleep(duration).await;
        }
    }
}
