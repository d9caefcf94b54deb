//! Module quartet generation (`generate module`)

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::render_template;
use crate::config::ModuleConfiguration;
use crate::error::{GenerationError, Result};
use crate::materialize;
use crate::render::Grammar;
use crate::templates::{Catalog, ModuleRole, MODULES_DIR};

/// Where module templates are read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// The catalog's `modules/` entries
    #[default]
    Embedded,
    /// A directory holding `model.go.tmpl`, `repository.go.tmpl`,
    /// `service.go.tmpl` and `handler.go.tmpl`
    Directory(PathBuf),
}

/// Knobs for [`generate_module`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleOptions {
    /// Template source
    pub source: TemplateSource,
    /// Overwrite module files that already exist
    pub force: bool,
}

struct ModuleTemplate<'a> {
    role: ModuleRole,
    label: String,
    body: Cow<'a, str>,
}

/// Add a model, repository, service and handler named `module_name` to the
/// project at `project_root`
///
/// Every template is loaded and rendered before anything is written, so a
/// missing or malformed template leaves the project untouched. `on_write` is
/// called with each path right after it has been written. Returns the
/// written paths in generation order.
///
/// # Errors
///
/// - [`GenerationError::InvalidInput`] if the module name is not an identifier
/// - [`GenerationError::ProjectNotDetected`] if `go.mod` is missing or
///   declares no module
/// - [`GenerationError::TemplatesNotFound`] if a template cannot be located
/// - [`GenerationError::DestinationExists`] if an output file exists and
///   `force` is off
/// - [`GenerationError::Io`] if a file cannot be written
pub fn generate_module(
    catalog: &Catalog,
    module_name: &str,
    project_root: &Path,
    options: &ModuleOptions,
    mut on_write: impl FnMut(&Path),
) -> Result<Vec<PathBuf>> {
    let config = ModuleConfiguration::resolve(module_name, project_root)?;
    debug!(
        module = config.module_lower(),
        project = config.project_path(),
        "resolved module"
    );

    let templates = load_templates(catalog, &options.source)?;

    let mut rendered = Vec::with_capacity(templates.len());
    for template in &templates {
        let content = render_template(&template.label, &template.body, Grammar::Literal, &config)?;
        rendered.push((template.role.output_path(config.module_lower()), content));
    }

    for (relative, _) in &rendered {
        let path = project_root.join(relative);
        if path.exists() {
            if !options.force {
                return Err(GenerationError::DestinationExists { path });
            }
            warn!(path = %path.display(), "overwriting existing file");
        }
    }

    let mut written = Vec::with_capacity(rendered.len());
    for (relative, content) in rendered {
        let path = materialize::write(project_root, &relative, &content)?;
        on_write(&path);
        written.push(path);
    }

    info!(module = config.module_lower(), files = written.len(), "module generated");
    Ok(written)
}

fn load_templates<'a>(
    catalog: &'a Catalog,
    source: &TemplateSource,
) -> Result<Vec<ModuleTemplate<'a>>> {
    match source {
        TemplateSource::Embedded => ModuleRole::ALL
            .into_iter()
            .map(|role| {
                let entry = catalog.module_template(role).ok_or_else(|| {
                    GenerationError::TemplatesNotFound {
                        path: PathBuf::from(MODULES_DIR).join(role.template_file()),
                    }
                })?;
                Ok(ModuleTemplate {
                    role,
                    label: entry.path().to_string(),
                    body: Cow::Borrowed(entry.body()),
                })
            })
            .collect(),
        TemplateSource::Directory(dir) => {
            if !dir.is_dir() {
                return Err(GenerationError::TemplatesNotFound { path: dir.clone() });
            }
            ModuleRole::ALL
                .into_iter()
                .map(|role| {
                    let path = dir.join(role.template_file());
                    let body = fs::read_to_string(&path).map_err(|e| {
                        if e.kind() == io::ErrorKind::NotFound {
                            GenerationError::TemplatesNotFound { path: path.clone() }
                        } else {
                            GenerationError::io(&path, e)
                        }
                    })?;
                    Ok(ModuleTemplate {
                        role,
                        label: path.display().to_string(),
                        body: Cow::Owned(body),
                    })
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::TemplateEntry;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("go.mod"), "module example.com/shopapi\n\ngo 1.21\n").unwrap();
        dir
    }

    #[test]
    fn test_writes_quartet_in_order() {
        let dir = project();
        let mut seen = Vec::new();

        let written = generate_module(
            &Catalog::embedded(),
            "order",
            dir.path(),
            &ModuleOptions::default(),
            |path| seen.push(path.to_path_buf()),
        )
        .unwrap();

        let expected: Vec<_> = ModuleRole::ALL
            .iter()
            .map(|role| dir.path().join(role.output_path("order")))
            .collect();
        assert_eq!(written, expected);
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_missing_embedded_role() {
        let dir = project();
        let catalog = Catalog::from_entries(vec![TemplateEntry::module(
            ModuleRole::Model,
            "modules/model.go.tmpl",
            "package models\n",
        )]);

        let err = generate_module(&catalog, "order", dir.path(), &ModuleOptions::default(), |_| {})
            .unwrap_err();
        assert!(matches!(err, GenerationError::TemplatesNotFound { .. }));
        assert!(!dir.path().join("internal").exists());
    }

    #[test]
    fn test_directory_source() {
        let dir = project();
        let templates = TempDir::new().unwrap();
        for role in ModuleRole::ALL {
            fs::write(
                templates.path().join(role.template_file()),
                "// __Module__ in __project__ (__module__)\n",
            )
            .unwrap();
        }

        let options = ModuleOptions {
            source: TemplateSource::Directory(templates.path().to_path_buf()),
            force: false,
        };
        let written = generate_module(&Catalog::embedded(), "invoice", dir.path(), &options, |_| {})
            .unwrap();

        for path in written {
            assert_eq!(
                fs::read_to_string(path).unwrap(),
                "// Invoice in example.com/shopapi (invoice)\n"
            );
        }
    }

    #[test]
    fn test_directory_source_project_name_marker() {
        let dir = project();
        let templates = TempDir::new().unwrap();
        for role in ModuleRole::ALL {
            fs::write(
                templates.path().join(role.template_file()),
                "import \"{{.ProjectName}}/internal/models\"\n",
            )
            .unwrap();
        }

        let options = ModuleOptions {
            source: TemplateSource::Directory(templates.path().to_path_buf()),
            force: false,
        };
        let written = generate_module(&Catalog::embedded(), "order", dir.path(), &options, |_| {})
            .unwrap();

        assert_eq!(written.len(), ModuleRole::ALL.len());
        for path in written {
            assert_eq!(
                fs::read_to_string(path).unwrap(),
                "import \"example.com/shopapi/internal/models\"\n"
            );
        }
    }

    #[test]
    fn test_directory_source_missing_file() {
        let dir = project();
        let templates = TempDir::new().unwrap();
        fs::write(templates.path().join("model.go.tmpl"), "package models\n").unwrap();

        let options = ModuleOptions {
            source: TemplateSource::Directory(templates.path().to_path_buf()),
            force: false,
        };
        let err = generate_module(&Catalog::embedded(), "order", dir.path(), &options, |_| {})
            .unwrap_err();
        match err {
            GenerationError::TemplatesNotFound { path } => {
                assert_eq!(path, templates.path().join("repository.go.tmpl"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_braces_in_module_template_are_rejected() {
        let dir = project();
        let catalog = Catalog::from_entries(
            ModuleRole::ALL
                .into_iter()
                .map(|role| TemplateEntry::module(role, role.template_file(), "{{.DBDriver}}"))
                .collect(),
        );

        let err = generate_module(&catalog, "order", dir.path(), &ModuleOptions::default(), |_| {})
            .unwrap_err();
        assert!(matches!(err, GenerationError::TemplateSyntax { .. }));
    }

    #[test]
    fn test_existing_files_need_force() {
        let dir = project();
        let catalog = Catalog::embedded();
        generate_module(&catalog, "order", dir.path(), &ModuleOptions::default(), |_| {}).unwrap();

        let err = generate_module(&catalog, "order", dir.path(), &ModuleOptions::default(), |_| {})
            .unwrap_err();
        assert!(matches!(err, GenerationError::DestinationExists { .. }));

        let forced = ModuleOptions {
            force: true,
            ..ModuleOptions::default()
        };
        let written = generate_module(&catalog, "order", dir.path(), &forced, |_| {}).unwrap();
        assert_eq!(written.len(), 4);
    }
}
