use std::io::ErrorKind;
use std::process::Stdio;
use std::string::FromUtf8Error;
use std::time::Duration;

use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;

pub const DEFAULT_PROGRAM: &str = "ollama";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Invokes a local model runner as `<program> [leading args] run <model>`,
/// feeding the prompt on stdin and capturing stdout.
#[derive(Debug, Clone)]
pub struct ModelRunner {
    program: String,
    leading_args: Vec<String>,
    timeout: Duration,
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to start model runner `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write prompt to model runner: {0}")]
    Stdin(#[source] std::io::Error),
    #[error("failed to collect model runner output: {0}")]
    Wait(#[source] std::io::Error),
    #[error("model runner `{command}` timed out after {timeout:?}")]
    Timeout { command: String, timeout: Duration },
    #[error("model runner output is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),
}

impl ModelRunner {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
            timeout,
        }
    }

    /// Arguments placed before `run <model>`, for runners wrapped in another command.
    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Runs the model and returns its trimmed stdout.
    ///
    /// The exit status is not inspected. On timeout the child is killed and
    /// whatever it had written is discarded.
    pub async fn run(&self, model: &str, prompt: &str) -> Result<String, RunnerError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.leading_args)
            .arg("run")
            .arg(model)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        let mut child = cmd.spawn().map_err(|source| RunnerError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        let stdin = child.stdin.take();
        let feed = async move {
            if let Some(mut stdin) = stdin {
                stdin.write_all(prompt.as_bytes()).await?;
                stdin.shutdown().await?;
            }
            Ok::<(), std::io::Error>(())
        };

        // stdin is fed while stdout drains so a chatty runner cannot stall on a full pipe
        let exchange = async move { tokio::join!(feed, child.wait_with_output()) };

        let (fed, output) = timeout(self.timeout, exchange)
            .await
            .map_err(|_| RunnerError::Timeout {
                command: format!("{} run {}", self.program, model),
                timeout: self.timeout,
            })?;

        if let Err(err) = fed {
            // a runner may exit without consuming its input
            if err.kind() != ErrorKind::BrokenPipe {
                return Err(RunnerError::Stdin(err));
            }
        }

        let output = output.map_err(RunnerError::Wait)?;
        tracing::debug!(
            status = %output.status,
            bytes = output.stdout.len(),
            "model runner finished"
        );

        let text = String::from_utf8(output.stdout)?;
        Ok(text.trim().to_string())
    }
}

impl Default for ModelRunner {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM, DEFAULT_TIMEOUT)
    }
}
