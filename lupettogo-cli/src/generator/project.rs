//! Whole-project generation (`init`)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, trace};

use super::render_template;
use crate::config::ProjectConfiguration;
use crate::error::{GenerationError, Result};
use crate::filter::should_skip;
use crate::materialize;
use crate::templates::Catalog;

const STAGING_PREFIX: &str = ".lupettogo-";

/// Knobs for [`generate_project`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Render into a sibling staging directory and move it into place only
    /// once every file has been written
    pub atomic: bool,
}

/// What a project generation produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    root: PathBuf,
    files: Vec<PathBuf>,
}

impl GenerationReport {
    /// Root directory of the generated project
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Written files, relative to [`root`](Self::root), in catalog order
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

/// Generate a project named after `config` under `output_dir`
///
/// The destination `<output_dir>/<name>` must not exist or must be an empty
/// directory. Entries are filtered, rendered and written in catalog order.
///
/// # Errors
///
/// Returns [`GenerationError::DestinationExists`] if the destination is
/// occupied, [`GenerationError::TemplateSyntax`] for a malformed template and
/// [`GenerationError::Io`] if a directory or file cannot be written. Without
/// `atomic`, files written before the failure are left in place.
pub fn generate_project(
    catalog: &Catalog,
    config: &ProjectConfiguration,
    output_dir: &Path,
    options: GenerateOptions,
) -> Result<GenerationReport> {
    let root = output_dir.join(config.name());
    ensure_vacant(&root)?;

    let files = if options.atomic {
        generate_staged(catalog, config, output_dir, &root)?
    } else {
        fs::create_dir_all(&root).map_err(|e| GenerationError::io(&root, e))?;
        render_catalog(catalog, config, &root)?
    };

    info!(
        project = config.name(),
        database = %config.database(),
        files = files.len(),
        "project generated"
    );

    Ok(GenerationReport { root, files })
}

fn render_catalog(
    catalog: &Catalog,
    config: &ProjectConfiguration,
    root: &Path,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in catalog.entries() {
        if should_skip(entry, config) {
            trace!(path = entry.path(), "skipped");
            continue;
        }

        let content = render_template(entry.path(), entry.body(), entry.role().grammar(), config)?;
        materialize::write(root, entry.path(), &content)?;
        files.push(PathBuf::from(entry.path()));
    }

    Ok(files)
}

fn generate_staged(
    catalog: &Catalog,
    config: &ProjectConfiguration,
    output_dir: &Path,
    root: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir).map_err(|e| GenerationError::io(output_dir, e))?;

    // Removed on drop, including every early return below
    let staging = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(output_dir)
        .map_err(|e| GenerationError::io(output_dir, e))?;

    // The staging directory itself is private to the user. The project root
    // is created inside it the same way direct mode creates it, so both modes
    // end up with the default directory permissions.
    let staged_root = staging.path().join(config.name());
    fs::create_dir(&staged_root).map_err(|e| GenerationError::io(&staged_root, e))?;
    debug!(staging = %staged_root.display(), "staging project");

    let files = render_catalog(catalog, config, &staged_root)?;

    if root.is_dir() {
        fs::remove_dir(root).map_err(|e| GenerationError::io(root, e))?;
    }
    fs::rename(&staged_root, root).map_err(|e| GenerationError::io(root, e))?;

    Ok(files)
}

/// Fail unless `root` is absent or an empty directory
fn ensure_vacant(root: &Path) -> Result<()> {
    match fs::read_dir(root) {
        Ok(mut entries) => {
            if entries.next().is_some() {
                return Err(GenerationError::DestinationExists {
                    path: root.to_path_buf(),
                });
            }
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(_) if root.exists() => Err(GenerationError::DestinationExists {
            path: root.to_path_buf(),
        }),
        Err(e) => Err(GenerationError::io(root, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::TemplateEntry;
    use tempfile::TempDir;

    fn config() -> ProjectConfiguration {
        ProjectConfiguration::new("shopapi").unwrap()
    }

    #[test]
    fn test_writes_into_named_root() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::from_entries(vec![
            TemplateEntry::project("go.mod", "module {{.ModulePath}}\n"),
            TemplateEntry::project("internal/middleware/auth.go", "package middleware\n"),
        ]);

        let report = generate_project(&catalog, &config(), dir.path(), GenerateOptions::default())
            .unwrap();

        assert_eq!(report.root(), dir.path().join("shopapi"));
        assert_eq!(report.files(), [PathBuf::from("go.mod")]);
        assert_eq!(
            fs::read_to_string(report.root().join("go.mod")).unwrap(),
            "module shopapi\n"
        );
        assert!(!report.root().join("internal").exists());
    }

    #[test]
    fn test_empty_catalog_creates_empty_root() {
        let dir = TempDir::new().unwrap();
        let report = generate_project(
            &Catalog::from_entries(Vec::new()),
            &config(),
            dir.path(),
            GenerateOptions::default(),
        )
        .unwrap();

        assert!(report.root().is_dir());
        assert!(report.files().is_empty());
    }

    #[test]
    fn test_empty_destination_is_reused() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("shopapi")).unwrap();

        let catalog =
            Catalog::from_entries(vec![TemplateEntry::project("main.go", "package main\n")]);
        let report =
            generate_project(&catalog, &config(), dir.path(), GenerateOptions::default());
        assert!(report.is_ok());
    }

    #[test]
    fn test_occupied_destination_is_refused() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("shopapi")).unwrap();
        fs::write(dir.path().join("shopapi/keep.txt"), "mine").unwrap();

        let catalog = Catalog::embedded();
        let err = generate_project(&catalog, &config(), dir.path(), GenerateOptions::default())
            .unwrap_err();
        assert!(matches!(err, GenerationError::DestinationExists { .. }));
        assert_eq!(
            fs::read_to_string(dir.path().join("shopapi/keep.txt")).unwrap(),
            "mine"
        );

        fs::write(dir.path().join("other"), "file").unwrap();
        let other = ProjectConfiguration::new("other").unwrap();
        let err = generate_project(&catalog, &other, dir.path(), GenerateOptions::default())
            .unwrap_err();
        assert!(matches!(err, GenerationError::DestinationExists { .. }));
    }

    #[test]
    fn test_malformed_template_names_entry() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::from_entries(vec![
            TemplateEntry::project("go.mod", "module {{.ModulePath}}\n"),
            TemplateEntry::project("main.go", "{{.Nope}}"),
        ]);

        let err = generate_project(&catalog, &config(), dir.path(), GenerateOptions::default())
            .unwrap_err();
        match err {
            GenerationError::TemplateSyntax { path, .. } => assert_eq!(path, "main.go"),
            other => panic!("unexpected error: {other}"),
        }
        // no rollback in direct mode
        assert!(dir.path().join("shopapi/go.mod").exists());
    }

    #[test]
    fn test_atomic_failure_leaves_nothing_behind() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::from_entries(vec![
            TemplateEntry::project("go.mod", "module {{.ModulePath}}\n"),
            TemplateEntry::project("main.go", "{{ProjectName}}"),
        ]);

        let options = GenerateOptions { atomic: true };
        let err = generate_project(&catalog, &config(), dir.path(), options).unwrap_err();
        assert!(matches!(err, GenerationError::TemplateSyntax { .. }));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_atomic_success_moves_tree_into_place() {
        let dir = TempDir::new().unwrap();
        let report = generate_project(
            &Catalog::embedded(),
            &config(),
            dir.path(),
            GenerateOptions { atomic: true },
        )
        .unwrap();

        assert!(report.root().join("go.mod").is_file());
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, ["shopapi"]);
    }

    #[test]
    fn test_io_failure_stops_generation() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::from_entries(vec![
            TemplateEntry::project("cmd", "not a directory\n"),
            TemplateEntry::project("cmd/main.go", "package main\n"),
            TemplateEntry::project("go.mod", "module {{.ModulePath}}\n"),
        ]);

        let err = generate_project(&catalog, &config(), dir.path(), GenerateOptions::default())
            .unwrap_err();
        let root = dir.path().join("shopapi");
        match err {
            GenerationError::Io { path, .. } => assert_eq!(path, root.join("cmd")),
            other => panic!("unexpected error: {other}"),
        }
        assert!(root.join("cmd").is_file());
        assert!(!root.join("go.mod").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_root_mode_matches_direct() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        fs::set_permissions(dir.path(), fs::Permissions::from_mode(0o1777)).unwrap();
        let catalog =
            Catalog::from_entries(vec![TemplateEntry::project("main.go", "package main\n")]);

        let direct = ProjectConfiguration::new("direct").unwrap();
        let atomic = ProjectConfiguration::new("atomic").unwrap();
        let direct = generate_project(&catalog, &direct, dir.path(), GenerateOptions::default())
            .unwrap();
        let atomic =
            generate_project(&catalog, &atomic, dir.path(), GenerateOptions { atomic: true })
                .unwrap();

        let mode = |path: &Path| fs::metadata(path).unwrap().permissions().mode() & 0o7777;
        assert_eq!(mode(atomic.root()), mode(direct.root()));
        assert_eq!(mode(atomic.root()) & 0o1000, 0);
    }
}
