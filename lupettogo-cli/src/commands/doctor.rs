//! Development environment checks

use anyhow::{bail, Result};
use console::{style, Emoji};
use regex::Regex;
use std::process::Command;

use lupettogo::Catalog;

static OK: Emoji = Emoji("✅ ", "[ok] ");
static WARN: Emoji = Emoji("⚠️  ", "[warn] ");
static FAIL: Emoji = Emoji("❌ ", "[fail] ");

const GO_VERSION_PATTERN: &str = r"go(\d+)\.(\d+)";
// Generated go.mod files declare `go 1.21`
const MIN_GO: (u32, u32) = (1, 21);

/// Whether a missing tool is fatal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Generated projects cannot be built without it
    Required,
    /// Only needed for some workflows
    Optional,
}

/// One external tool to look for
#[derive(Debug, Clone, Copy)]
pub struct Tool {
    /// Display name
    pub name: &'static str,
    /// Executable
    pub program: &'static str,
    /// Arguments that print the version
    pub args: &'static [&'static str],
    /// What to do when it is missing
    pub requirement: Requirement,
    /// Hint printed when it is missing
    pub hint: &'static str,
}

/// Tools checked by `lupettogo doctor`, in order
pub static TOOLS: [Tool; 5] = [
    Tool {
        name: "Go",
        program: "go",
        args: &["version"],
        requirement: Requirement::Required,
        hint: "install Go 1.21+ from https://go.dev/dl/",
    },
    Tool {
        name: "Git",
        program: "git",
        args: &["--version"],
        requirement: Requirement::Required,
        hint: "install Git from https://git-scm.com/",
    },
    Tool {
        name: "PostgreSQL client",
        program: "psql",
        args: &["--version"],
        requirement: Requirement::Optional,
        hint: "needed to inspect PostgreSQL databases",
    },
    Tool {
        name: "MySQL client",
        program: "mysql",
        args: &["--version"],
        requirement: Requirement::Optional,
        hint: "needed to inspect MySQL databases",
    },
    Tool {
        name: "Docker",
        program: "docker",
        args: &["--version"],
        requirement: Requirement::Optional,
        hint: "needed for docker-compose workflows",
    },
];

/// Outcome of one tool check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Found and usable
    Ok(String),
    /// Optional tool missing, or version could not be confirmed
    Warning(String),
    /// Required tool missing
    Failure(String),
}

/// Classify a tool from its captured version output (`None` if the tool
/// could not be run)
#[must_use]
pub fn classify(tool: &Tool, output: Option<&str>) -> CheckStatus {
    let Some(output) = output else {
        let message = format!("{} not found ({})", tool.name, tool.hint);
        return match tool.requirement {
            Requirement::Required => CheckStatus::Failure(message),
            Requirement::Optional => CheckStatus::Warning(message),
        };
    };

    let version = output.lines().next().unwrap_or_default().trim().to_string();

    if tool.program == "go" {
        return match go_version(&version) {
            Some(found) if found >= MIN_GO => CheckStatus::Ok(version),
            Some((major, minor)) => CheckStatus::Warning(format!(
                "Go {major}.{minor} found, {}.{} or later recommended",
                MIN_GO.0, MIN_GO.1
            )),
            None => {
                CheckStatus::Warning(format!("could not determine Go version from '{version}'"))
            }
        };
    }

    CheckStatus::Ok(version)
}

/// Major and minor version from `go version` output
#[must_use]
pub fn go_version(output: &str) -> Option<(u32, u32)> {
    let re = Regex::new(GO_VERSION_PATTERN).ok()?;
    let caps = re.captures(output)?;
    Some((caps[1].parse().ok()?, caps[2].parse().ok()?))
}

fn run(tool: &Tool) -> Option<String> {
    let output = Command::new(tool.program).args(tool.args).output().ok()?;
    if !output.status.success() {
        tracing::debug!(program = tool.program, status = %output.status, "version check failed");
        return None;
    }
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    if text.trim().is_empty() {
        text = String::from_utf8_lossy(&output.stderr).into_owned();
    }
    Some(text)
}

/// Check the local development environment
pub struct DoctorCommand;

impl DoctorCommand {
    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if a required tool is missing.
    pub fn execute() -> Result<()> {
        println!("{}", style("🩺 LupettoGo Doctor").bold());
        println!();

        let mut failures = 0;
        for tool in &TOOLS {
            let status = classify(tool, run(tool).as_deref());
            match &status {
                CheckStatus::Ok(detail) => {
                    println!("{}{}: {}", OK, style(tool.name).bold(), style(detail).dim());
                }
                CheckStatus::Warning(detail) => {
                    println!("{}{}: {}", WARN, style(tool.name).bold(), style(detail).yellow());
                }
                CheckStatus::Failure(detail) => {
                    failures += 1;
                    println!("{}{}: {}", FAIL, style(tool.name).bold(), style(detail).red());
                }
            }
        }

        println!();
        println!(
            "{}{}: embedded in binary ({} files)",
            OK,
            style("Templates").bold(),
            Catalog::embedded().len()
        );

        if failures > 0 {
            bail!("{failures} required tool(s) missing");
        }

        println!();
        println!("{}", style("Environment ready").green().bold());
        Ok(())
    }
}
