//! Project scaffolding command

use anyhow::{Context, Result};
use clap::Args;
use console::{style, Emoji};
use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use lupettogo::{
    generate_project, Catalog, DatabaseDriver, GenerateOptions, GenerationReport,
    ProjectConfiguration, Settings,
};

static WOLF: Emoji = Emoji("🐺 ", "");
static CHECK: Emoji = Emoji("✓ ", "+ ");

/// Create a new Go API project
#[derive(Debug, Clone, Args)]
pub struct InitCommand {
    /// Project name, also the name of the new directory
    pub name: String,

    /// Database driver
    #[arg(long, value_enum)]
    pub db: Option<DatabaseDriver>,

    /// Include JWT authentication
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub with_auth: Option<bool>,

    /// Include Dockerfile and docker-compose.yml
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub with_docker: Option<bool>,

    /// Include Go test files
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
    pub with_tests: Option<bool>,

    /// Go module path (defaults to the project name, or `<module_prefix>/<name>`)
    #[arg(long, value_name = "PATH")]
    pub module: Option<String>,

    /// Directory to create the project in
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Only move the project into place once every file is written
    #[arg(long)]
    pub atomic: bool,

    /// Ask for each option interactively
    #[arg(short, long)]
    pub interactive: bool,
}

impl InitCommand {
    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if settings cannot be loaded, the options are
    /// invalid, a prompt fails, or generation fails.
    pub fn execute(&self) -> Result<()> {
        let settings = Settings::load().context("Failed to load settings")?;
        let mut config = self.resolve(&settings)?;
        if self.interactive {
            config = prompt(config)?;
        }

        println!(
            "{}{} {}",
            WOLF,
            style("Creating Go project:").bold(),
            style(config.name()).cyan().bold()
        );
        println!();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message("Generating project files...");

        let result = generate_project(
            &Catalog::embedded(),
            &config,
            &self.output,
            GenerateOptions {
                atomic: self.atomic,
            },
        );
        spinner.finish_and_clear();

        let report = result
            .with_context(|| format!("Failed to create project '{}'", config.name()))?;
        print_success(&report, &config);

        Ok(())
    }

    /// Layer command-line flags over user settings
    fn resolve(&self, settings: &Settings) -> Result<ProjectConfiguration> {
        let mut config = settings.project(&self.name)?;

        if let Some(db) = self.db {
            config = config.with_database(db);
        }
        if let Some(auth) = self.with_auth {
            config = config.with_auth(auth);
        }
        if let Some(docker) = self.with_docker {
            config = config.with_docker(docker);
        }
        if let Some(tests) = self.with_tests {
            config = config.with_tests(tests);
        }
        if let Some(module) = &self.module {
            config = config.with_module_path(module.as_str())?;
        }

        Ok(config)
    }
}

fn prompt(config: ProjectConfiguration) -> Result<ProjectConfiguration> {
    let theme = ColorfulTheme::default();
    let drivers = [DatabaseDriver::Postgres, DatabaseDriver::Mysql];
    let labels = ["PostgreSQL", "MySQL"];

    let current = drivers
        .iter()
        .position(|driver| *driver == config.database())
        .unwrap_or_default();
    let selected = Select::with_theme(&theme)
        .with_prompt("Database")
        .items(&labels)
        .default(current)
        .interact()?;

    let auth = Confirm::with_theme(&theme)
        .with_prompt("Include JWT authentication?")
        .default(config.include_auth())
        .interact()?;
    let docker = Confirm::with_theme(&theme)
        .with_prompt("Include Docker files?")
        .default(config.include_docker())
        .interact()?;
    let tests = Confirm::with_theme(&theme)
        .with_prompt("Include tests?")
        .default(config.include_tests())
        .interact()?;

    Ok(config
        .with_database(drivers[selected])
        .with_auth(auth)
        .with_docker(docker)
        .with_tests(tests))
}

/// Print success message with next steps
fn print_success(report: &GenerationReport, config: &ProjectConfiguration) {
    println!(
        "{}{}",
        CHECK,
        style("Project created successfully!").green().bold()
    );
    println!(
        "  {} files written to {}",
        report.files().len(),
        style(report.root().display()).cyan()
    );
    println!();
    println!("{}", style("Next steps:").bold());
    println!();
    println!("  {} Navigate to project:", style("1.").cyan());
    println!(
        "     {} {}",
        style("$").dim(),
        style(format!("cd {}", report.root().display())).cyan()
    );
    println!();
    println!("  {} Fetch dependencies:", style("2.").cyan());
    println!("     {} {}", style("$").dim(), style("go mod tidy").cyan());
    println!();
    if config.include_docker() {
        println!("  {} Start the stack:", style("3.").cyan());
        println!("     {} {}", style("$").dim(), style("docker compose up --build").cyan());
    } else {
        println!(
            "  {} Configure {} in .env, then run:",
            style("3.").cyan(),
            config.database()
        );
        println!("     {} {}", style("$").dim(), style("make run").cyan());
    }
    println!();
    println!("  {} Add your first module:", style("4.").cyan());
    println!(
        "     {} {}",
        style("$").dim(),
        style("lupettogo generate module product").cyan()
    );
    println!();
    println!("{}", style("Happy coding! 🐺").green().bold());
}
