//! LupettoGo: scaffolding for Go (gin + gorm) API projects
//!
//! The library holds the generation pipeline used by the `lupettogo` binary:
//!
//! - [`config`] validates user input into immutable configuration records
//! - [`templates`] is the embedded template catalog
//! - [`filter`] selects catalog entries for a configuration
//! - [`render`] substitutes placeholders
//! - [`materialize`] writes rendered files
//! - [`generator`] drives whole-project and module generation
//!
//! ```rust,no_run
//! use lupettogo::{generate_project, Catalog, GenerateOptions, ProjectConfiguration};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ProjectConfiguration::new("shopapi")?.with_auth(true);
//! let report = generate_project(
//!     &Catalog::embedded(),
//!     &config,
//!     std::path::Path::new("."),
//!     GenerateOptions::default(),
//! )?;
//! println!("{} files", report.files().len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod filter;
pub mod generator;
pub mod materialize;
pub mod observability;
pub mod render;
pub mod settings;
pub mod templates;

pub use config::{DatabaseDriver, ModuleConfiguration, ProjectConfiguration};
pub use error::{GenerationError, Result};
pub use generator::{
    generate_module, generate_project, GenerateOptions, GenerationReport, ModuleOptions,
    TemplateSource,
};
pub use settings::Settings;
pub use templates::Catalog;
