//! Embedded template catalog
//!
//! The catalog is an ordered list of [`TemplateEntry`] values compiled into
//! the binary. Project entries are rendered with the structured grammar by
//! `init`; module entries live under `modules/` and are only used by
//! `generate module`.

use std::path::PathBuf;

use crate::config::DatabaseDriver;
use crate::render::Grammar;

mod internal;
mod modules;
mod project;
mod testing;

/// Catalog directory holding the module templates
pub const MODULES_DIR: &str = "modules";

/// What a template is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateRole {
    /// Part of a freshly generated project
    Project,
    /// One of the four files of a generated module
    Module(ModuleRole),
}

impl TemplateRole {
    /// Substitution grammar for bodies of this role
    #[must_use]
    pub const fn grammar(self) -> Grammar {
        match self {
            Self::Project => Grammar::Structured,
            Self::Module(_) => Grammar::Literal,
        }
    }
}

/// The four files of a module, in generation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleRole {
    /// gorm model
    Model,
    /// Data access
    Repository,
    /// Business logic
    Service,
    /// HTTP handlers
    Handler,
}

impl ModuleRole {
    /// Every role, in generation order
    pub const ALL: [Self; 4] = [Self::Model, Self::Repository, Self::Service, Self::Handler];

    /// Template file name, both in the catalog and in override directories
    #[must_use]
    pub const fn template_file(self) -> &'static str {
        match self {
            Self::Model => "model.go.tmpl",
            Self::Repository => "repository.go.tmpl",
            Self::Service => "service.go.tmpl",
            Self::Handler => "handler.go.tmpl",
        }
    }

    /// Output path, relative to the project root, for a lowercase module name
    #[must_use]
    pub fn output_path(self, module_lower: &str) -> PathBuf {
        let file = match self {
            Self::Model => format!("{module_lower}.go"),
            Self::Repository => format!("{module_lower}_repository.go"),
            Self::Service => format!("{module_lower}_service.go"),
            Self::Handler => format!("{module_lower}_handler.go"),
        };
        PathBuf::from("internal").join(self.layout_dir()).join(file)
    }

    const fn layout_dir(self) -> &'static str {
        match self {
            Self::Model => "models",
            Self::Repository => "repositories",
            Self::Service => "services",
            Self::Handler => "handlers",
        }
    }
}

/// One template: where it goes and what it contains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry {
    path: &'static str,
    body: &'static str,
    role: TemplateRole,
    driver: Option<DatabaseDriver>,
}

impl TemplateEntry {
    /// A project file shared by every database driver
    #[must_use]
    pub const fn project(path: &'static str, body: &'static str) -> Self {
        Self {
            path,
            body,
            role: TemplateRole::Project,
            driver: None,
        }
    }

    /// A project file only generated for `driver`
    #[must_use]
    pub const fn for_driver(
        path: &'static str,
        body: &'static str,
        driver: DatabaseDriver,
    ) -> Self {
        Self {
            path,
            body,
            role: TemplateRole::Project,
            driver: Some(driver),
        }
    }

    /// A module template stored at `path` in the catalog
    #[must_use]
    pub const fn module(role: ModuleRole, path: &'static str, body: &'static str) -> Self {
        Self {
            path,
            body,
            role: TemplateRole::Module(role),
            driver: None,
        }
    }

    /// Relative output path (catalog path for module templates)
    #[must_use]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Template source
    #[must_use]
    pub const fn body(&self) -> &'static str {
        self.body
    }

    /// What the template is used for
    #[must_use]
    pub const fn role(&self) -> TemplateRole {
        self.role
    }

    /// Driver this entry is restricted to, if any
    #[must_use]
    pub const fn driver(&self) -> Option<DatabaseDriver> {
        self.driver
    }
}

/// Ordered, immutable set of templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<TemplateEntry>,
}

impl Catalog {
    /// The catalog compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let entries = project::ENTRIES
            .iter()
            .chain(internal::ENTRIES)
            .chain(testing::ENTRIES)
            .chain(modules::ENTRIES)
            .copied()
            .collect();
        Self { entries }
    }

    /// Build a catalog from explicit entries, keeping their order
    #[must_use]
    pub const fn from_entries(entries: Vec<TemplateEntry>) -> Self {
        Self { entries }
    }

    /// All entries in catalog order
    #[must_use]
    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The template for one module role
    #[must_use]
    pub fn module_template(&self, role: ModuleRole) -> Option<&TemplateEntry> {
        self.entries
            .iter()
            .find(|entry| entry.role == TemplateRole::Module(role))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Template;
    use std::collections::HashSet;

    #[test]
    fn test_every_body_parses_against_its_grammar() {
        for entry in Catalog::embedded().entries() {
            if let Err(e) = Template::parse(entry.body(), entry.role().grammar()) {
                panic!("{} does not parse: {e}", entry.path());
            }
        }
    }

    #[test]
    fn test_module_templates_live_under_modules_dir() {
        let catalog = Catalog::embedded();
        for role in ModuleRole::ALL {
            let entry = catalog.module_template(role).expect("module template");
            assert_eq!(
                entry.path(),
                format!("{MODULES_DIR}/{}", role.template_file())
            );
        }
    }

    #[test]
    fn test_paths_unique_per_driver() {
        let catalog = Catalog::embedded();
        for driver in [DatabaseDriver::Postgres, DatabaseDriver::Mysql] {
            let mut seen = HashSet::new();
            for entry in catalog.entries() {
                if entry.driver().is_some_and(|d| d != driver) {
                    continue;
                }
                assert!(seen.insert(entry.path()), "duplicate path {}", entry.path());
            }
        }
    }

    #[test]
    fn test_catalog_contents() {
        let catalog = Catalog::embedded();
        let paths: Vec<_> = catalog.entries().iter().map(TemplateEntry::path).collect();
        for expected in [
            "go.mod",
            "main.go",
            "Dockerfile",
            "docker-compose.yml",
            "internal/config/config.go",
            "internal/database/database.go",
            "internal/handlers/example_handler_test.go",
            "internal/middleware/auth.go",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_module_output_paths() {
        assert_eq!(
            ModuleRole::Model.output_path("order"),
            PathBuf::from("internal/models/order.go")
        );
        assert_eq!(
            ModuleRole::Repository.output_path("order"),
            PathBuf::from("internal/repositories/order_repository.go")
        );
        assert_eq!(
            ModuleRole::Service.output_path("order"),
            PathBuf::from("internal/services/order_service.go")
        );
        assert_eq!(
            ModuleRole::Handler.output_path("order"),
            PathBuf::from("internal/handlers/order_handler.go")
        );
    }
}
