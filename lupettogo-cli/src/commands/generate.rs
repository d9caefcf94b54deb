//! Code generation commands

use anyhow::{Context, Result};
use clap::Subcommand;
use console::{style, Emoji};
use std::path::{Path, PathBuf};

use lupettogo::{generate_module, Catalog, ModuleOptions, TemplateSource};

static CHECK: Emoji = Emoji("✓ ", "+ ");

/// Code generation commands
#[derive(Debug, Clone, Subcommand)]
pub enum GenerateCommand {
    /// Add a model, repository, service and handler to an existing project
    ///
    /// Examples:
    ///   lupettogo generate module product
    ///   lupettogo generate module order --path ./shopapi
    Module {
        /// Module name (e.g. product, order_item)
        name: String,

        /// Project root containing go.mod
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Read module templates from this directory instead of the built-in set
        #[arg(long, value_name = "DIR")]
        templates: Option<PathBuf>,

        /// Overwrite existing module files
        #[arg(short, long)]
        force: bool,
    },
}

impl GenerateCommand {
    /// Execute the generate command
    ///
    /// # Errors
    ///
    /// Returns an error if the project or templates cannot be found, or a
    /// file cannot be written.
    pub fn execute(&self) -> Result<()> {
        match self {
            Self::Module {
                name,
                path,
                templates,
                force,
            } => {
                let options = ModuleOptions {
                    source: templates
                        .clone()
                        .map_or(TemplateSource::Embedded, TemplateSource::Directory),
                    force: *force,
                };
                generate(name, path, &options)
            }
        }
    }
}

fn generate(name: &str, project_root: &Path, options: &ModuleOptions) -> Result<()> {
    println!(
        "{} {}",
        style("Generating module:").bold(),
        style(name).cyan().bold()
    );

    let written = generate_module(&Catalog::embedded(), name, project_root, options, |path| {
        let shown = path.strip_prefix(project_root).unwrap_or(path);
        println!("  {}{}", CHECK, style(shown.display()).green());
    })
    .with_context(|| format!("Failed to generate module '{name}'"))?;

    println!();
    println!(
        "{}",
        style(format!("Module generated ({} files)", written.len()))
            .green()
            .bold()
    );
    println!();
    println!("{}", style("Next steps:").bold());
    println!(
        "  {} Register the handler routes in {}",
        style("1.").cyan(),
        style("internal/server/server.go").cyan()
    );
    println!(
        "  {} Add the model to {}",
        style("2.").cyan(),
        style("database.Migrate").cyan()
    );

    Ok(())
}
