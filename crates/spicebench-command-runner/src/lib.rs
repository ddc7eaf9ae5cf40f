//! Run external commands while capturing stdout and stderr as one stream.
//!
//! stdout and stderr are routed through a single pipe so interleaving is
//! preserved the way a terminal would show it. The captured bytes can be
//! teed to a log file, and a timeout can be set to kill runaway children.

use std::fs::File;
use std::io::{Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::debug;

/// Builder for an external command whose merged console output is captured.
#[derive(Debug)]
pub struct CommandRunner {
    program: String,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    current_dir: Option<String>,
    timeout: Option<Duration>,
    log_file: Option<File>,
    passthrough: bool,
}

impl CommandRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: Vec::new(),
            current_dir: None,
            timeout: None,
            log_file: None,
            passthrough: false,
        }
    }

    /// Add an argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(|s| s.into()));
        self
    }

    /// Add an environment variable
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Set the working directory for the command
    pub fn current_dir(mut self, dir: impl Into<String>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Kill the child if it runs longer than `limit`.
    pub fn timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    /// Tee captured output into `file` as it arrives.
    pub fn log_file(mut self, file: File) -> Self {
        self.log_file = Some(file);
        self
    }

    /// Let the child inherit the parent's stdio instead of capturing.
    ///
    /// `raw_output` will be empty in this mode.
    pub fn passthrough(mut self, passthrough: bool) -> Self {
        self.passthrough = passthrough;
        self
    }

    /// Spawn the command and block until it exits.
    pub fn run(self) -> Result<CommandOutput> {
        debug!("running {} {}", self.program, self.args.join(" "));

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }
        cmd.stdin(Stdio::null());

        if self.passthrough {
            let mut child = cmd
                .spawn()
                .with_context(|| format!("failed to spawn {}", self.program))?;
            let status = wait(&mut child, self.timeout)?;
            return Ok(CommandOutput {
                success: status.success(),
                exit_code: status.code(),
                raw_output: Vec::new(),
            });
        }

        // One pipe for both streams keeps the child's output in order.
        let (mut reader, writer) = os_pipe::pipe().context("failed to create capture pipe")?;
        let writer_err = writer.try_clone().context("failed to clone capture pipe")?;
        cmd.stdout(writer);
        cmd.stderr(writer_err);

        let mut child = cmd
            .spawn()
            .with_context(|| format!("failed to spawn {}", self.program))?;

        // The Command still holds write ends of the pipe; drop it so the
        // reader sees EOF once the child exits.
        drop(cmd);

        let mut log_file = self.log_file;
        let drain = thread::spawn(move || {
            let mut captured = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                match reader.read(&mut chunk) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        captured.extend_from_slice(&chunk[..n]);
                        if let Some(file) = log_file.as_mut() {
                            let _ = file.write_all(&chunk[..n]);
                        }
                    }
                }
            }
            if let Some(file) = log_file.as_mut() {
                let _ = file.flush();
            }
            captured
        });

        let status = wait(&mut child, self.timeout)?;
        let raw_output = drain.join().unwrap_or_default();

        Ok(CommandOutput {
            success: status.success(),
            exit_code: status.code(),
            raw_output,
        })
    }
}

fn wait(child: &mut Child, timeout: Option<Duration>) -> Result<ExitStatus> {
    let Some(limit) = timeout else {
        return child.wait().context("failed to wait for child process");
    };

    let deadline = Instant::now() + limit;
    loop {
        if let Some(status) = child.try_wait().context("failed to poll child process")? {
            return Ok(status);
        }
        if Instant::now() >= deadline {
            debug!("child exceeded {limit:?}, killing");
            let _ = child.kill();
            return child.wait().context("failed to reap child after kill");
        }
        thread::sleep(Duration::from_millis(50));
    }
}

/// Result of a captured command run.
#[derive(Debug)]
pub struct CommandOutput {
    /// Whether the child exited with status zero.
    pub success: bool,
    /// The child's exit code, if it exited normally.
    pub exit_code: Option<i32>,
    /// Interleaved stdout + stderr bytes, exactly as emitted.
    pub raw_output: Vec<u8>,
}

impl CommandOutput {
    /// Captured output as text with ANSI escape sequences removed.
    pub fn plain_as_string(&self) -> String {
        let stripped = strip_ansi_escapes::strip(&self.raw_output);
        String::from_utf8_lossy(&stripped).into_owned()
    }
}
