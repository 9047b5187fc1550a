use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};
use std::thread;
use std::time::Duration;

use async_trait::async_trait;
use colored::Colorize;
use monday_game::{Host, HostError};

use super::strip_newline;

/// Move up one line and clear it.
const ERASE_LINE: &str = "\x1b[F\x1b[K";

/// Terminal host doing plain blocking I/O inside its futures.
///
/// Every future completes on first poll, so a trivial executor such as
/// `futures::executor::block_on` is enough to drive the engine.
pub struct BlockingHost<R: BufRead, W: Write> {
    input: R,
    output: W,
    interactive: bool,
}

impl BlockingHost<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        let interactive = io::stdout().is_terminal();
        Self::new(io::stdin().lock(), io::stdout(), interactive)
    }
}

impl<R: BufRead, W: Write> BlockingHost<R, W> {
    pub const fn new(input: R, output: W, interactive: bool) -> Self {
        Self {
            input,
            output,
            interactive,
        }
    }

    fn read_line(&mut self, text: &str) -> Result<String, HostError> {
        if self.interactive {
            write!(self.output, "{}", text.bold())?;
        } else {
            write!(self.output, "{text}")?;
        }
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(HostError::InputClosed);
        }
        Ok(strip_newline(line))
    }
}

#[async_trait(?Send)]
impl<R: BufRead, W: Write> Host for BlockingHost<R, W> {
    async fn prompt(&mut self, text: &str) -> Result<String, HostError> {
        self.read_line(text)
    }

    async fn output(&mut self, text: &str) -> Result<(), HostError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    async fn delay(&mut self, seconds: f32) {
        if let Ok(duration) = Duration::try_from_secs_f32(seconds) {
            let _ = self.output.flush();
            thread::sleep(duration);
        }
    }

    async fn pause(&mut self, text: &str) -> Result<(), HostError> {
        self.read_line(text)?;
        if self.interactive {
            write!(self.output, "{ERASE_LINE}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::io::Cursor;

    #[test]
    fn prompts_and_prints() {
        let mut out = Vec::new();
        let mut host = BlockingHost::new(Cursor::new("2\r\n"), &mut out, false);
        block_on(async {
            host.output("YOU WAKE UP").await.unwrap();
            assert_eq!(host.prompt("Enter your choice: ").await.unwrap(), "2");
            assert!(matches!(
                host.pause("Press Enter to continue...").await,
                Err(HostError::InputClosed)
            ));
        });
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("YOU WAKE UP\nEnter your choice: "));
        assert!(!text.contains(ERASE_LINE));
    }

    #[test]
    fn interactive_pause_erases_prompt() {
        let mut out = Vec::new();
        let mut host = BlockingHost::new(Cursor::new("\n"), &mut out, true);
        block_on(host.pause("Press Enter to continue...")).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with(ERASE_LINE));
    }

    #[test]
    fn bogus_delays_are_ignored() {
        let mut host = BlockingHost::new(Cursor::new(""), Vec::new(), false);
        block_on(async {
            host.delay(-1.0).await;
            host.delay(f32::NAN).await;
            host.delay(0.0).await;
        });
    }
}
