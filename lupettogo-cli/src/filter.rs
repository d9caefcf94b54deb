//! Catalog entry selection for project generation
//!
//! Rules match substrings of the relative output path, so a file whose name
//! merely contains `auth` or `_test.go` is treated as an auth or test
//! artifact.

use crate::config::ProjectConfiguration;
use crate::templates::{TemplateEntry, TemplateRole, MODULES_DIR};

const DOCKER_FRAGMENTS: [&str; 3] = ["Dockerfile", "docker-compose", ".dockerignore"];
const TEST_FRAGMENT: &str = "_test.go";
const AUTH_FRAGMENT: &str = "auth";

/// Whether `path` names a Docker artifact
#[must_use]
pub fn is_docker_artifact(path: &str) -> bool {
    DOCKER_FRAGMENTS.iter().any(|fragment| path.contains(fragment))
}

/// Whether `path` names a Go test file
#[must_use]
pub fn is_test_artifact(path: &str) -> bool {
    path.contains(TEST_FRAGMENT)
}

/// Whether `path` names an authentication artifact
#[must_use]
pub fn is_auth_artifact(path: &str) -> bool {
    path.contains(AUTH_FRAGMENT)
}

fn is_module_template(entry: &TemplateEntry) -> bool {
    matches!(entry.role(), TemplateRole::Module(_))
        || entry
            .path()
            .strip_prefix(MODULES_DIR)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Decide whether `entry` is left out of a project generated from `config`
#[must_use]
pub fn should_skip(entry: &TemplateEntry, config: &ProjectConfiguration) -> bool {
    let path = entry.path();

    if is_module_template(entry) {
        return true;
    }
    if entry.driver().is_some_and(|driver| driver != config.database()) {
        return true;
    }

    (!config.include_docker() && is_docker_artifact(path))
        || (!config.include_tests() && is_test_artifact(path))
        || (!config.include_auth() && is_auth_artifact(path))
}
