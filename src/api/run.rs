//! Feature discovery and the `run` command.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tracing::{debug, info};

use crate::error::{FeatureError, Result as StepmatchResult};
use crate::registry::Registry;
use crate::runner::{Feature, RunOptions, RunSummary, Runner};

/// Extension of files picked up from directories.
const FEATURE_EXTENSION: &str = "feature";

/// Parameters for [`run`].
#[derive(Debug, Clone, Default)]
pub struct RunParams {
    /// Feature files or directories. Empty means `features_dir`.
    pub paths: Vec<Utf8PathBuf>,
    /// Directory used when `paths` is empty.
    pub features_dir: Utf8PathBuf,
    /// Runner switches.
    pub options: RunOptions,
}

/// Expands `paths` into feature files.
///
/// Files are taken as given. Directories contribute their `*.feature` files
/// (not recursively) in name order. With no paths, `features_dir` is used.
///
/// # Errors
///
/// Returns [`FeatureError::Read`] when a directory cannot be listed.
pub fn discover_features(
    paths: &[Utf8PathBuf],
    features_dir: &Utf8Path,
) -> Result<Vec<Utf8PathBuf>, FeatureError> {
    let defaults = [features_dir.to_path_buf()];
    let roots = if paths.is_empty() {
        defaults.as_slice()
    } else {
        paths
    };
    let mut found = Vec::new();
    for root in roots {
        if root.is_dir() {
            found.extend(feature_files_in(root)?);
        } else {
            found.push(root.clone());
        }
    }
    Ok(found)
}

fn feature_files_in(dir_path: &Utf8Path) -> Result<Vec<Utf8PathBuf>, FeatureError> {
    let read_error = |e: std::io::Error| FeatureError::Read {
        path: dir_path.to_string(),
        message: e.to_string(),
    };
    let dir = Dir::open_ambient_dir(dir_path, ambient_authority()).map_err(read_error)?;
    let mut names = Vec::new();
    for item in dir.entries().map_err(read_error)? {
        let entry = item.map_err(read_error)?;
        if !entry.file_type().map_err(read_error)?.is_file() {
            continue;
        }
        let name = entry.file_name().map_err(read_error)?;
        if Utf8Path::new(&name).extension() == Some(FEATURE_EXTENSION) {
            names.push(name);
        }
    }
    names.sort();
    debug!(dir = %dir_path, count = names.len(), "discovered feature files");
    Ok(names.into_iter().map(|name| dir_path.join(name)).collect())
}

fn read_feature(path: &Utf8Path) -> Result<String, FeatureError> {
    let read_error = |message: String| FeatureError::Read {
        path: path.to_string(),
        message,
    };
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| read_error(String::from("not a file")))?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|e| read_error(e.to_string()))?;
    dir.read_to_string(file_name)
        .map_err(|e| read_error(e.to_string()))
}

/// Reads and parses every file in `paths`.
///
/// # Errors
///
/// Returns the first [`FeatureError`] encountered.
pub fn load_features(paths: &[Utf8PathBuf]) -> Result<Vec<Feature>, FeatureError> {
    paths
        .iter()
        .map(|path| Feature::parse(path.as_str(), &read_feature(path)?))
        .collect()
}

/// Discovers, parses and runs feature files.
///
/// Parsing finishes before anything runs, so a malformed file aborts the
/// whole run.
///
/// # Errors
///
/// Returns [`FeatureError`] (wrapped) when discovery or parsing fails. Step
/// failures are reported in the [`RunSummary`], not as errors.
pub fn run(registry: &Registry, params: &RunParams) -> StepmatchResult<RunSummary> {
    let files = discover_features(&params.paths, &params.features_dir)?;
    let features = load_features(&files)?;
    info!(features = features.len(), "running features");
    Ok(Runner::new(registry, params.options).run(&features))
}
