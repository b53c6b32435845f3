//! Local command-line providers
//!
//! The prompt is passed as the last argument. stdout is the answer; stderr
//! is only surfaced when the command exits non-zero.

use super::timeout_reason;
use council_domain::{InvocationOutcome, ProcessCommand};
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::process::{Child, Command};
use tracing::{debug, warn};

/// Runs a [`ProcessCommand`] once per call
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessInvoker;

impl ProcessInvoker {
    pub fn new() -> Self {
        Self
    }

    pub async fn invoke(
        &self,
        command: &ProcessCommand,
        prompt: &str,
        timeout: Duration,
    ) -> InvocationOutcome {
        debug!(
            "Spawning {} {:?} (+{} byte prompt)",
            command.program,
            command.args,
            prompt.len()
        );

        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .arg(prompt)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        // Linux: have the kernel SIGTERM the child if we die first.
        #[cfg(target_os = "linux")]
        unsafe {
            cmd.pre_exec(|| {
                libc::prctl(libc::PR_SET_PDEATHSIG, libc::SIGTERM);
                Ok(())
            });
        }

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                return InvocationOutcome::failure(format!(
                    "Failed to spawn {}: {}",
                    command.program, e
                ));
            }
        };

        match tokio::time::timeout(timeout, collect_output(&mut child)).await {
            Ok(Ok((status, stdout, stderr))) => {
                debug!("{} exited with {}", command.program, status);
                InvocationOutcome::success(render_output(status, &stdout, &stderr))
            }
            Ok(Err(e)) => InvocationOutcome::failure(format!(
                "Failed to read output of {}: {}",
                command.program, e
            )),
            Err(_) => {
                // kill() also waits, so no zombie is left behind
                if let Err(e) = child.kill().await {
                    warn!("Failed to kill {} after timeout: {}", command.program, e);
                }
                InvocationOutcome::failure(timeout_reason(timeout))
            }
        }
    }
}

async fn collect_output(child: &mut Child) -> std::io::Result<(ExitStatus, Vec<u8>, Vec<u8>)> {
    let mut stdout = child
        .stdout
        .take()
        .ok_or_else(|| std::io::Error::other("stdout not captured"))?;
    let mut stderr = child
        .stderr
        .take()
        .ok_or_else(|| std::io::Error::other("stderr not captured"))?;

    let mut out = Vec::new();
    let mut err = Vec::new();
    let (status, _, _) = tokio::try_join!(
        child.wait(),
        stdout.read_to_end(&mut out),
        stderr.read_to_end(&mut err)
    )?;

    Ok((status, out, err))
}

fn render_output(status: ExitStatus, stdout: &[u8], stderr: &[u8]) -> String {
    let mut output = String::from_utf8_lossy(stdout).trim().to_string();
    if !status.success() && !stderr.is_empty() {
        let stderr = String::from_utf8_lossy(stderr);
        output.push_str(&format!("\n[stderr: {}]", stderr.trim()));
    }
    output
}
