//! Shared subprocess execution with a hard time budget.

use std::io::{ErrorKind, Read};
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::domain::AppError;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Captured result of a finished subprocess.
#[derive(Debug)]
pub struct Captured {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Run `program` with `args`, capturing output, killing the child when the
/// timeout expires.
///
/// `tool` labels the external tool in errors; `missing_hint` is the
/// operator-facing install hint used when the binary is absent.
pub fn run_with_timeout(
    program: &str,
    args: &[&str],
    timeout: Duration,
    tool: &str,
    missing_hint: &str,
) -> Result<Captured, AppError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::ToolMissing {
                tool: tool.to_string(),
                hint: missing_hint.to_string(),
            },
            _ => AppError::Io(e),
        })?;

    // Drain both pipes on reader threads so a chatty child cannot deadlock
    // against a full pipe buffer while we poll for exit.
    let stdout = child.stdout.take().map(spawn_reader);
    let stderr = child.stderr.take().map(spawn_reader);

    let start = Instant::now();
    let status = loop {
        match child.try_wait()? {
            Some(status) => break status,
            None if start.elapsed() >= timeout => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(AppError::ToolTimeout {
                    tool: tool.to_string(),
                    secs: timeout.as_secs(),
                });
            }
            None => thread::sleep(POLL_INTERVAL),
        }
    };

    Ok(Captured {
        success: status.success(),
        stdout: join_reader(stdout),
        stderr: join_reader(stderr),
    })
}

fn spawn_reader<S: Read + Send + 'static>(mut stream: S) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buffer = Vec::new();
        let _ = stream.read_to_end(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    })
}

fn join_reader(handle: Option<thread::JoinHandle<String>>) -> String {
    handle.and_then(|h| h.join().ok()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout_of_a_successful_command() {
        let captured =
            run_with_timeout("echo", &["hello"], Duration::from_secs(5), "echo", "").unwrap();
        assert!(captured.success);
        assert_eq!(captured.stdout.trim(), "hello");
    }

    #[test]
    fn missing_binary_maps_to_tool_missing() {
        let result = run_with_timeout(
            "definitely-not-a-real-binary-42",
            &[],
            Duration::from_secs(1),
            "Example CLI",
            "Install it first.",
        );
        assert!(matches!(result, Err(AppError::ToolMissing { .. })));
    }

    #[test]
    fn slow_command_times_out_and_is_killed() {
        let result =
            run_with_timeout("sleep", &["5"], Duration::from_millis(200), "sleep", "");
        match result {
            Err(AppError::ToolTimeout { tool, .. }) => assert_eq!(tool, "sleep"),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[test]
    fn non_zero_exit_is_reported_not_errored() {
        let captured =
            run_with_timeout("false", &[], Duration::from_secs(5), "false", "").unwrap();
        assert!(!captured.success);
    }
}
