//! Skill bundle creation
//!
//! Steps run in a fixed order and the first failure aborts the rest:
//!
//! 1. resolve the target root and check the bundle path is free
//! 2. create the bundle root (strict) and any missing parents
//! 3. write `SKILL.md`
//! 4. write `scripts/`, `references/` and `assets/` placeholders (tolerant)
//!
//! Nothing is rolled back on failure.

use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use crate::identifier::Identifier;
use crate::report::{Progress, Reporter};
use crate::templates::{render_asset, render_manifest, render_reference, render_script};
use crate::MANIFEST_FILE;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

const SCRIPTS_DIR: &str = "scripts";
const REFERENCES_DIR: &str = "references";
const ASSETS_DIR: &str = "assets";

/// Create a new skill bundle at `<target_root>/<identifier>`.
///
/// Returns the absolute bundle directory. Fails with `AlreadyExists` without
/// writing anything if the bundle path is taken.
pub fn create_bundle(
    identifier: &Identifier,
    target_root: impl AsRef<Path>,
    config: &ScaffoldConfig,
    reporter: &mut dyn Reporter,
) -> Result<PathBuf> {
    let root = resolve_root(target_root.as_ref())?;
    let bundle_dir = root.join(identifier.as_str());
    debug!(bundle_dir = %bundle_dir.display(), "resolved bundle directory");

    // symlink_metadata so a dangling symlink still counts as taken
    if fs::symlink_metadata(&bundle_dir).is_ok() {
        return Err(ScaffoldError::AlreadyExists { path: bundle_dir });
    }

    create_bundle_root(&root, &bundle_dir)?;
    reporter.report(Progress::DirectoryCreated(&bundle_dir));

    let title = identifier.title();

    let manifest_path = bundle_dir.join(MANIFEST_FILE);
    write_file(&manifest_path, &render_manifest(identifier.as_str(), &title))?;
    reporter.report(Progress::FileWritten(MANIFEST_FILE));

    let script_name = config.script.script_file_name();
    let script_path = write_resource(
        &bundle_dir,
        SCRIPTS_DIR,
        &script_name,
        &render_script(config.script, identifier.as_str()),
        reporter,
    )?;
    if config.executable_scripts {
        make_executable(&script_path)?;
    }

    write_resource(
        &bundle_dir,
        REFERENCES_DIR,
        "api_reference.md",
        &render_reference(&title),
        reporter,
    )?;

    write_resource(&bundle_dir, ASSETS_DIR, "README.md", &render_asset(), reporter)?;

    debug!(identifier = %identifier, "bundle complete");
    Ok(bundle_dir)
}

/// Make `target_root` absolute by joining relative paths onto the working
/// directory, then drop `.` and `..` components lexically (the root may not
/// exist yet, so nothing is canonicalized).
pub fn resolve_root(target_root: &Path) -> Result<PathBuf> {
    let absolute = if target_root.is_absolute() {
        target_root.to_path_buf()
    } else {
        let current_dir =
            std::env::current_dir().map_err(|e| ScaffoldError::creation(target_root, e))?;
        current_dir.join(target_root)
    };

    Ok(normalize(&absolute))
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

fn create_bundle_root(root: &Path, bundle_dir: &Path) -> Result<()> {
    fs::create_dir_all(root).map_err(|e| ScaffoldError::creation(root, e))?;

    // Strict: another process may have created it since the existence check
    fs::create_dir(bundle_dir).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            ScaffoldError::AlreadyExists {
                path: bundle_dir.to_path_buf(),
            }
        } else {
            ScaffoldError::creation(bundle_dir, e)
        }
    })?;

    debug!(path = %bundle_dir.display(), "created bundle root");
    Ok(())
}

/// Write `<bundle_dir>/<subdir>/<file_name>`, creating `subdir` if absent
fn write_resource(
    bundle_dir: &Path,
    subdir: &str,
    file_name: &str,
    content: &str,
    reporter: &mut dyn Reporter,
) -> Result<PathBuf> {
    let dir = bundle_dir.join(subdir);
    fs::create_dir_all(&dir).map_err(|e| ScaffoldError::creation(&dir, e))?;

    let path = dir.join(file_name);
    write_file(&path, content)?;

    let relative = format!("{}/{}", subdir, file_name);
    reporter.report(Progress::FileWritten(&relative));
    Ok(path)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| ScaffoldError::write(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)
        .map_err(|e| ScaffoldError::write(path, e))?
        .permissions();
    permissions.set_mode(permissions.mode() | 0o111);
    fs::set_permissions(path, permissions).map_err(|e| ScaffoldError::write(path, e))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
