//! Configuration records consumed by the generators
//!
//! [`ProjectConfiguration`] drives `init`, [`ModuleConfiguration`] drives
//! `generate module`. Both are validated on construction and immutable
//! afterwards; the renderer resolves placeholders against them through
//! [`RenderContext`].

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Component, Path};
use std::str::FromStr;

use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, Result};
use crate::render::{Field, RenderContext, Token};

/// Maximum length of a project name, in characters
pub const MAX_PROJECT_NAME_LEN: usize = 50;

/// Name of the module declaration file in a generated project
pub const MODULE_FILE: &str = "go.mod";

/// Database driver for new projects
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseDriver {
    /// `PostgreSQL` (default)
    #[default]
    #[value(alias = "postgresql")]
    #[serde(alias = "postgresql")]
    Postgres,
    /// `MySQL`
    Mysql,
}

impl DatabaseDriver {
    /// Driver name as used by gorm and in generated config files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Mysql => "mysql",
        }
    }

    /// Default port of the database server
    #[must_use]
    pub const fn default_port(self) -> u16 {
        match self {
            Self::Postgres => 5432,
            Self::Mysql => 3306,
        }
    }

    /// Container image used by the generated docker-compose file
    #[must_use]
    pub const fn docker_image(self) -> &'static str {
        match self {
            Self::Postgres => "postgres:16-alpine",
            Self::Mysql => "mysql:8.0",
        }
    }
}

impl fmt::Display for DatabaseDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseDriver {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "mysql" => Ok(Self::Mysql),
            other => Err(GenerationError::Configuration(format!(
                "unsupported database driver '{other}' (expected postgres or mysql)"
            ))),
        }
    }
}

/// Everything `init` needs to know about the project being generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfiguration {
    name: String,
    module_path: String,
    database: DatabaseDriver,
    include_auth: bool,
    include_docker: bool,
    include_tests: bool,
}

impl ProjectConfiguration {
    /// Create a configuration with the stock options: `PostgreSQL`, no auth,
    /// Docker and tests included. The Go module path defaults to the name.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidInput`] if the name is empty, longer
    /// than [`MAX_PROJECT_NAME_LEN`] characters, or not a single directory
    /// component.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_project_name(&name)?;

        Ok(Self {
            module_path: name.clone(),
            name,
            database: DatabaseDriver::Postgres,
            include_auth: false,
            include_docker: true,
            include_tests: true,
        })
    }

    /// Select the database driver
    #[must_use]
    pub const fn with_database(mut self, database: DatabaseDriver) -> Self {
        self.database = database;
        self
    }

    /// Include or omit authentication files
    #[must_use]
    pub const fn with_auth(mut self, include: bool) -> Self {
        self.include_auth = include;
        self
    }

    /// Include or omit Docker files
    #[must_use]
    pub const fn with_docker(mut self, include: bool) -> Self {
        self.include_docker = include;
        self
    }

    /// Include or omit test files
    #[must_use]
    pub const fn with_tests(mut self, include: bool) -> Self {
        self.include_tests = include;
        self
    }

    /// Override the Go module path written to `go.mod` and used in imports
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidInput`] if the path is empty or
    /// contains whitespace.
    pub fn with_module_path(mut self, module_path: impl Into<String>) -> Result<Self> {
        let module_path = module_path.into();
        if module_path.is_empty() || module_path.chars().any(char::is_whitespace) {
            return Err(GenerationError::InvalidInput(format!(
                "invalid Go module path '{module_path}'"
            )));
        }
        self.module_path = module_path;
        Ok(self)
    }

    /// Project name, also the name of the root directory
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Go module path
    #[must_use]
    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    /// Selected database driver
    #[must_use]
    pub const fn database(&self) -> DatabaseDriver {
        self.database
    }

    /// Whether authentication files are generated
    #[must_use]
    pub const fn include_auth(&self) -> bool {
        self.include_auth
    }

    /// Whether Docker files are generated
    #[must_use]
    pub const fn include_docker(&self) -> bool {
        self.include_docker
    }

    /// Whether test files are generated
    #[must_use]
    pub const fn include_tests(&self) -> bool {
        self.include_tests
    }
}

impl RenderContext for ProjectConfiguration {
    fn field(&self, field: Field) -> Option<Cow<'_, str>> {
        let value = match field {
            Field::ProjectName => Cow::Borrowed(self.name.as_str()),
            Field::ModulePath => Cow::Borrowed(self.module_path.as_str()),
            Field::DbDriver => Cow::Borrowed(self.database.as_str()),
            Field::DbPort => Cow::Owned(self.database.default_port().to_string()),
            Field::DbImage => Cow::Borrowed(self.database.docker_image()),
            Field::WithAuth => Cow::Borrowed(bool_str(self.include_auth)),
            Field::WithDocker => Cow::Borrowed(bool_str(self.include_docker)),
            Field::WithTests => Cow::Borrowed(bool_str(self.include_tests)),
        };
        Some(value)
    }

    fn token(&self, _token: Token) -> Option<Cow<'_, str>> {
        None
    }
}

const fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Validate a project name as a directory component
fn validate_project_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(GenerationError::InvalidInput(
            "project name cannot be empty".to_string(),
        ));
    }

    let len = name.chars().count();
    if len > MAX_PROJECT_NAME_LEN {
        return Err(GenerationError::InvalidInput(format!(
            "project name is {len} characters long (maximum {MAX_PROJECT_NAME_LEN})"
        )));
    }

    let mut components = Path::new(name).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single_normal || name.contains(['/', '\\', '\0']) {
        return Err(GenerationError::InvalidInput(format!(
            "project name '{name}' is not a valid directory name"
        )));
    }

    Ok(())
}

/// Names derived for one `generate module` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleConfiguration {
    project_path: String,
    module_lower: String,
    module_title: String,
}

impl ModuleConfiguration {
    /// Derive module names for an explicit project path
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidInput`] if the module name is empty
    /// or not an identifier.
    pub fn new(module_name: &str, project_path: impl Into<String>) -> Result<Self> {
        validate_module_name(module_name)?;

        Ok(Self {
            project_path: project_path.into(),
            module_lower: module_name.to_ascii_lowercase(),
            module_title: module_name.to_case(Case::Pascal),
        })
    }

    /// Derive module names, reading the project path from `go.mod` under
    /// `project_root`
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidInput`] for a bad module name and
    /// [`GenerationError::ProjectNotDetected`] if `go.mod` is missing or
    /// declares no module.
    pub fn resolve(module_name: &str, project_root: &Path) -> Result<Self> {
        validate_module_name(module_name)?;
        let project_path = detect_project_path(project_root)?;
        Self::new(module_name, project_path)
    }

    /// Go import path of the host project
    #[must_use]
    pub fn project_path(&self) -> &str {
        &self.project_path
    }

    /// Lowercase module identifier (`order`)
    #[must_use]
    pub fn module_lower(&self) -> &str {
        &self.module_lower
    }

    /// Title-case module identifier (`Order`)
    #[must_use]
    pub fn module_title(&self) -> &str {
        &self.module_title
    }
}

impl RenderContext for ModuleConfiguration {
    fn field(&self, _field: Field) -> Option<Cow<'_, str>> {
        None
    }

    fn token(&self, token: Token) -> Option<Cow<'_, str>> {
        let value = match token {
            Token::ModuleLower => &self.module_lower,
            Token::ModuleTitle => &self.module_title,
            Token::ProjectPath => &self.project_path,
        };
        Some(Cow::Borrowed(value.as_str()))
    }
}

fn validate_module_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(GenerationError::InvalidInput(
            "module name cannot be empty".to_string(),
        ));
    }

    let mut chars = name.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    if !starts_with_letter || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(GenerationError::InvalidInput(format!(
            "module name '{name}' must start with a letter and contain only letters, \
             digits and underscores"
        )));
    }

    Ok(())
}

/// Read the module path declared in `<project_root>/go.mod`
///
/// # Errors
///
/// Returns [`GenerationError::ProjectNotDetected`] if the file cannot be
/// read or has no `module` line.
pub fn detect_project_path(project_root: &Path) -> Result<String> {
    let path = project_root.join(MODULE_FILE);

    let content = fs::read_to_string(&path).map_err(|e| {
        let reason = if e.kind() == io::ErrorKind::NotFound {
            format!("{MODULE_FILE} not found")
        } else {
            format!("failed to read {MODULE_FILE}: {e}")
        };
        GenerationError::ProjectNotDetected {
            path: path.clone(),
            reason,
        }
    })?;

    parse_module_path(&content).ok_or_else(|| GenerationError::ProjectNotDetected {
        path,
        reason: format!("module declaration not found in {MODULE_FILE}"),
    })
}

/// Extract the module path from `go.mod` content
#[must_use]
pub fn parse_module_path(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let rest = line.trim_start().strip_prefix("module")?;
        if !rest.starts_with([' ', '\t']) {
            return None;
        }
        let rest = rest.split("//").next().unwrap_or_default().trim();
        let path = rest.trim_matches('"');
        (!path.is_empty()).then(|| path.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_project_options() {
        let config = ProjectConfiguration::new("shopapi").unwrap();
        assert_eq!(config.name(), "shopapi");
        assert_eq!(config.module_path(), "shopapi");
        assert_eq!(config.database(), DatabaseDriver::Postgres);
        assert!(!config.include_auth());
        assert!(config.include_docker());
        assert!(config.include_tests());
    }

    #[test]
    fn test_project_name_bounds() {
        assert!(matches!(
            ProjectConfiguration::new(""),
            Err(GenerationError::InvalidInput(_))
        ));
        assert!(ProjectConfiguration::new("a".repeat(50)).is_ok());
        assert!(matches!(
            ProjectConfiguration::new("a".repeat(51)),
            Err(GenerationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_project_name_must_be_directory_component() {
        for name in ["..", ".", "a/b", "a\\b", "/abs", "   "] {
            assert!(
                matches!(
                    ProjectConfiguration::new(name),
                    Err(GenerationError::InvalidInput(_))
                ),
                "name should be rejected: {name:?}"
            );
        }
        assert!(ProjectConfiguration::new("my-api_2").is_ok());
    }

    #[test]
    fn test_module_path_override() {
        let config = ProjectConfiguration::new("shopapi")
            .unwrap()
            .with_module_path("example.com/shopapi")
            .unwrap();
        assert_eq!(config.module_path(), "example.com/shopapi");
        assert_eq!(config.name(), "shopapi");

        let err = ProjectConfiguration::new("shopapi")
            .unwrap()
            .with_module_path("has space");
        assert!(matches!(err, Err(GenerationError::InvalidInput(_))));
    }

    #[test]
    fn test_database_driver_parsing() {
        assert_eq!("postgres".parse::<DatabaseDriver>().unwrap(), DatabaseDriver::Postgres);
        assert_eq!("PostgreSQL".parse::<DatabaseDriver>().unwrap(), DatabaseDriver::Postgres);
        assert_eq!("mysql".parse::<DatabaseDriver>().unwrap(), DatabaseDriver::Mysql);
        assert!(matches!(
            "sqlite".parse::<DatabaseDriver>(),
            Err(GenerationError::Configuration(_))
        ));
    }

    #[test]
    fn test_project_fields_resolve() {
        let config = ProjectConfiguration::new("shopapi")
            .unwrap()
            .with_database(DatabaseDriver::Mysql)
            .with_auth(true);
        assert_eq!(config.field(Field::DbDriver).as_deref(), Some("mysql"));
        assert_eq!(config.field(Field::DbPort).as_deref(), Some("3306"));
        assert_eq!(config.field(Field::WithAuth).as_deref(), Some("true"));
        assert_eq!(config.token(Token::ModuleLower), None);
    }

    #[test]
    fn test_module_names() {
        let module = ModuleConfiguration::new("invoice", "example.com/shopapi").unwrap();
        assert_eq!(module.module_lower(), "invoice");
        assert_eq!(module.module_title(), "Invoice");

        let module = ModuleConfiguration::new("order_item", "shopapi").unwrap();
        assert_eq!(module.module_lower(), "order_item");
        assert_eq!(module.module_title(), "OrderItem");
    }

    #[test]
    fn test_invalid_module_names() {
        for name in ["", "1order", "../etc", "order-item", "order item"] {
            assert!(
                matches!(
                    ModuleConfiguration::new(name, "shopapi"),
                    Err(GenerationError::InvalidInput(_))
                ),
                "name should be rejected: {name:?}"
            );
        }
    }

    #[test]
    fn test_parse_module_path() {
        assert_eq!(
            parse_module_path("module example.com/shopapi\n\ngo 1.21\n").as_deref(),
            Some("example.com/shopapi")
        );
        assert_eq!(
            parse_module_path("// header\nmodule \"shopapi\" // quoted\n").as_deref(),
            Some("shopapi")
        );
        assert_eq!(parse_module_path("go 1.21\nrequire x v1\n"), None);
        assert_eq!(parse_module_path("modules foo\n"), None);
    }

    #[test]
    fn test_detect_project_path() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            detect_project_path(dir.path()),
            Err(GenerationError::ProjectNotDetected { .. })
        ));

        fs::write(dir.path().join(MODULE_FILE), "go 1.21\n").unwrap();
        assert!(matches!(
            detect_project_path(dir.path()),
            Err(GenerationError::ProjectNotDetected { .. })
        ));

        fs::write(dir.path().join(MODULE_FILE), "module example.com/shopapi\n").unwrap();
        assert_eq!(detect_project_path(dir.path()).unwrap(), "example.com/shopapi");
    }
}
