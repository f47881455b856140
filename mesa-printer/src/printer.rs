//! Printer adapters backed by OS commands
//!
//! Supports:
//! - Windows (PowerShell `Get-Printer` / `Out-Printer`)
//! - CUPS systems (`lpstat -p` / `lp -d`)

use crate::error::{PrintError, PrintResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, instrument, warn};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const LIST_PRINTERS_SCRIPT: &str =
    "Get-Printer | Select-Object Name,PrinterStatus,PortName,DriverName | ConvertTo-Json";

/// Trait for printer adapters
#[allow(async_fn_in_trait)]
pub trait Printer {
    /// Enumerate installed printers
    async fn list_printers(&self) -> PrintResult<Vec<PrinterInfo>>;

    /// Send plain text to the named printer
    async fn print_text(&self, printer: &str, content: &str) -> PrintResult<()>;
}

/// An installed printer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
}

/// Which command family to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Cups,
}

impl Platform {
    /// Platform of the running host
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Cups
        }
    }
}

/// Printer that shells out to the host's printing tools
#[derive(Debug, Clone)]
pub struct ShellPrinter {
    platform: Platform,
    timeout: Duration,
}

impl ShellPrinter {
    /// Create a printer for an explicit platform
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a printer for the running host
    pub fn detect() -> Self {
        Self::new(Platform::current())
    }

    /// Set the per-command timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Printer for ShellPrinter {
    #[instrument(skip(self), fields(platform = ?self.platform))]
    async fn list_printers(&self) -> PrintResult<Vec<PrinterInfo>> {
        match self.platform {
            Platform::Windows => {
                let output = run_command(
                    "powershell",
                    &["-NoProfile", "-Command", LIST_PRINTERS_SCRIPT],
                    None,
                    self.timeout,
                )
                .await?;
                let stdout = expect_success("powershell", output)?;
                parse_powershell_printers(&stdout)
            }
            Platform::Cups => {
                let output = run_command("lpstat", &["-p"], None, self.timeout).await?;
                if !output.status.success() {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    if stderr.contains("No destinations") {
                        debug!("lpstat reports no destinations");
                        return Ok(Vec::new());
                    }
                }
                let stdout = expect_success("lpstat", output)?;
                Ok(parse_lpstat(&stdout))
            }
        }
    }

    #[instrument(skip(self, content), fields(platform = ?self.platform, content_len = content.len()))]
    async fn print_text(&self, printer: &str, content: &str) -> PrintResult<()> {
        let printer = sanitize(printer);
        if printer.trim().is_empty() {
            return Err(PrintError::InvalidConfig("Printer name is empty".to_string()));
        }
        let content = sanitize(content);

        match self.platform {
            Platform::Windows => {
                let script = format!(
                    "Write-Output '{}' | Out-Printer -Name '{}'",
                    ps_single_quoted(&content),
                    ps_single_quoted(&printer)
                );
                let output = run_command(
                    "powershell",
                    &["-NoProfile", "-Command", &script],
                    None,
                    self.timeout,
                )
                .await?;
                log_stderr(&output);
                expect_success("powershell", output)?;
            }
            Platform::Cups => {
                let output =
                    run_command("lp", &["-d", &printer], Some(&content), self.timeout).await?;
                log_stderr(&output);
                expect_success("lp", output)?;
            }
        }

        info!(printer = %printer, "Print job sent");
        Ok(())
    }
}

/// Strip characters that could break out of a shell string (`"` and `$`)
pub fn sanitize(input: &str) -> String {
    input.chars().filter(|c| !matches!(c, '"' | '$')).collect()
}

/// Escape for a PowerShell single-quoted string literal
fn ps_single_quoted(input: &str) -> String {
    input.replace('\'', "''")
}

/// Run a command to completion, feeding optional stdin, bounded by `timeout`
///
/// The child is killed if the timeout elapses.
async fn run_command(
    program: &str,
    args: &[&str],
    stdin: Option<&str>,
    timeout: Duration,
) -> PrintResult<Output> {
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let run = async {
        let mut child = cmd.spawn()?;
        if let Some(input) = stdin
            && let Some(mut pipe) = child.stdin.take()
        {
            pipe.write_all(input.as_bytes()).await?;
            pipe.shutdown().await?;
        }
        child.wait_with_output().await
    };

    tokio::time::timeout(timeout, run)
        .await
        .map_err(|_| {
            PrintError::Timeout(format!(
                "{} did not finish within {}ms",
                program,
                timeout.as_millis()
            ))
        })?
        .map_err(PrintError::from)
}

fn expect_success(program: &str, output: Output) -> PrintResult<String> {
    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Err(PrintError::CommandFailed {
            program: program.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

fn log_stderr(output: &Output) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        warn!(stderr = %stderr.trim(), "Printer command wrote to stderr");
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PowerShellPrinter {
    name: String,
    #[serde(default)]
    printer_status: Option<Value>,
    #[serde(default)]
    port_name: Option<String>,
    #[serde(default)]
    driver_name: Option<String>,
}

impl From<PowerShellPrinter> for PrinterInfo {
    fn from(p: PowerShellPrinter) -> Self {
        PrinterInfo {
            name: p.name,
            status: p.printer_status.and_then(|s| powershell_status(&s)),
            port: p.port_name,
            driver: p.driver_name,
        }
    }
}

/// `PrinterStatus` is emitted as an enum number by `ConvertTo-Json`
fn powershell_status(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(
            match n.as_u64() {
                Some(0) => "normal",
                Some(1) => "paused",
                Some(2) => "error",
                Some(3) => "pending deletion",
                Some(4) => "paper jam",
                Some(5) => "paper out",
                Some(8) => "offline",
                _ => return Some(n.to_string()),
            }
            .to_string(),
        ),
        _ => None,
    }
}

/// Parse `ConvertTo-Json` output; a single printer arrives as a bare object
fn parse_powershell_printers(stdout: &str) -> PrintResult<Vec<PrinterInfo>> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let value: Value =
        serde_json::from_str(trimmed).map_err(|e| PrintError::Parse(e.to_string()))?;
    let entries = match value {
        Value::Array(entries) => entries,
        obj @ Value::Object(_) => vec![obj],
        other => return Err(PrintError::Parse(format!("expected array or object, got {}", other))),
    };

    entries
        .into_iter()
        .map(|entry| {
            serde_json::from_value::<PowerShellPrinter>(entry)
                .map(PrinterInfo::from)
                .map_err(|e| PrintError::Parse(e.to_string()))
        })
        .collect()
}

/// Parse `lpstat -p` lines such as `printer Kitchen is idle.  enabled since ...`
fn parse_lpstat(stdout: &str) -> Vec<PrinterInfo> {
    stdout
        .lines()
        .filter_map(|line| {
            let rest = line.strip_prefix("printer ")?;
            let (name, state) = rest.split_once(' ').unwrap_or((rest, ""));
            let state = state.trim_start();
            let state = state
                .strip_prefix("is ")
                .or_else(|| state.strip_prefix("now "))
                .unwrap_or(state);
            let status = state
                .split_whitespace()
                .next()
                .map(|s| s.trim_end_matches(['.', ',']).to_string())
                .filter(|s| !s.is_empty());
            Some(PrinterInfo {
                name: name.to_string(),
                status,
                port: None,
                driver: None,
            })
        })
        .collect()
}
