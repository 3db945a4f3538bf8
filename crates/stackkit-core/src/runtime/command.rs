//! Shell command execution with streamed output

use crate::error::{Result, ScaffoldError};
use colored::Colorize;
use std::future::Future;
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;

/// Runs opaque shell commands in a working directory
pub trait CommandRunner {
    fn run(&self, cmd: &str, cwd: &Path) -> impl Future<Output = Result<()>>;
}

/// Runs commands through `sh -c`, streaming their output to the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    async fn run(&self, cmd: &str, cwd: &Path) -> Result<()> {
        run_shell(cmd, cwd).await
    }
}

/// Run `cmd` in `cwd` and wait for it; non-zero exit becomes `ExternalCommand`
pub async fn run_shell(cmd: &str, cwd: &Path) -> Result<()> {
    println!("{} {}", "Running:".dimmed(), cmd.yellow());
    tracing::info!(cmd = %cmd, cwd = %cwd.display(), "running external command");

    let spawn_err = ScaffoldError::io("Failed to spawn command in", cwd);
    let mut child = TokioCommand::new("sh")
        .arg("-c")
        .arg(cmd)
        .current_dir(cwd)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(spawn_err)?;

    let mut stdout_reader = child.stdout.take().map(|s| BufReader::new(s).lines());
    let mut stderr_reader = child.stderr.take().map(|s| BufReader::new(s).lines());

    // Stream until both pipes close
    while stdout_reader.is_some() || stderr_reader.is_some() {
        tokio::select! {
            line = async { stdout_reader.as_mut()?.next_line().await.transpose() }, if stdout_reader.is_some() => {
                match line {
                    Some(Ok(line)) => println!("  {}", line),
                    Some(Err(e)) => {
                        eprintln!("{} {}", "Error reading stdout:".red(), e);
                        stdout_reader = None;
                    }
                    None => stdout_reader = None,
                }
            }
            line = async { stderr_reader.as_mut()?.next_line().await.transpose() }, if stderr_reader.is_some() => {
                match line {
                    Some(Ok(line)) => eprintln!("  {}", line.yellow()),
                    Some(Err(e)) => {
                        eprintln!("{} {}", "Error reading stderr:".red(), e);
                        stderr_reader = None;
                    }
                    None => stderr_reader = None,
                }
            }
        }
    }

    let status = child
        .wait()
        .await
        .map_err(ScaffoldError::io("Failed to wait for command in", cwd))?;

    if status.success() {
        Ok(())
    } else {
        let code = status.code().unwrap_or(-1);
        tracing::error!(cmd = %cmd, code, "external command failed");
        Err(ScaffoldError::ExternalCommand {
            cmd: cmd.to_string(),
            cwd: cwd.to_path_buf(),
            code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_success_in_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        run_shell("echo hello > out.txt", dir.path()).await.unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("out.txt")).unwrap(),
            "hello\n"
        );
    }

    #[tokio::test]
    async fn test_failure_carries_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShellRunner
            .run("echo oops >&2; exit 3", dir.path())
            .await
            .unwrap_err();
        assert!(err.is_external());
        assert!(matches!(err, ScaffoldError::ExternalCommand { code: 3, .. }));
    }
}
