//! Resolved invocation options.
//!
//! The dispatch loop in [`crate::cli`] fills an [`ArgumentsBuilder`] with raw
//! option values exactly as they appeared on the command line. The builder is
//! frozen once into an [`Arguments`] record, at which point defaults are
//! applied, negated switches are inverted into their public sense, source
//! filters are split, and path-valued options are standardized. `Arguments`
//! is never mutated afterwards.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Immutable record of every option this tool accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    /// Path to the bazel binary used for builds and queries.
    pub bazel: Option<PathBuf>,
    /// `<project>.tulsiproj[:ConfigName]` reference selecting a generator config.
    pub generator_config: Option<String>,
    /// Name for a freshly created project bundle.
    pub tulsiproj_name: Option<PathBuf>,
    /// Destination directory for generated output.
    pub output_folder: Option<PathBuf>,
    /// Override for automatic Bazel workspace root detection.
    pub workspace_root_override: Option<PathBuf>,
    /// Emit informational logging.
    pub verbose: bool,
    /// Skip validation of the Bazel workspace.
    pub suppress_workspace_check: bool,
    /// Open the generated project in Xcode when generation succeeds.
    pub open_on_success: bool,
    /// Extra source path filters, each with any single leading `//` stripped.
    pub additional_path_filters: HashSet<String>,
    /// Raw startup option string handed to bazel verbatim.
    pub build_startup_options: Option<String>,
    /// Raw build option string handed to bazel verbatim.
    pub build_options: Option<String>,
    /// Build target labels in first-seen-to-last order, duplicates preserved.
    pub build_targets: Option<Vec<String>>,
}

impl Default for Arguments {
    fn default() -> Self {
        Self {
            bazel: None,
            generator_config: None,
            tulsiproj_name: None,
            output_folder: None,
            workspace_root_override: None,
            verbose: true,
            suppress_workspace_check: false,
            open_on_success: true,
            additional_path_filters: HashSet::new(),
            build_startup_options: None,
            build_options: None,
            build_targets: None,
        }
    }
}

/// High-level operation selected by the mode flags. Mutually exclusive: the
/// presence of both (or neither) mode flag is ambiguous and therefore invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    Invalid,
    ProjectCreator,
    ProjectGenerator,
}

impl Arguments {
    /// Derives the operation mode from the mode-selecting options. Computed on
    /// demand; callers are expected to reject `Invalid` themselves.
    pub fn operation_mode(&self) -> OperationMode {
        match (&self.generator_config, &self.tulsiproj_name) {
            (Some(_), Some(_)) => OperationMode::Invalid,
            (Some(_), None) => OperationMode::ProjectGenerator,
            (None, Some(_)) => OperationMode::ProjectCreator,
            (None, None) => OperationMode::Invalid,
        }
    }
}

/// Mutable draft of [`Arguments`], one field per option in its raw
/// command-line sense. Negated switches (`quiet`, `no_open_xcode`) and the
/// unsplit filter string keep their on-the-wire shape until [`build`] freezes
/// the record.
///
/// [`build`]: ArgumentsBuilder::build
#[derive(Debug, Default)]
pub struct ArgumentsBuilder {
    pub bazel: Option<String>,
    pub generator_config: Option<String>,
    pub tulsiproj_name: Option<String>,
    pub output_folder: Option<String>,
    pub workspace_root_override: Option<String>,
    pub quiet: bool,
    pub suppress_workspace_check: bool,
    pub no_open_xcode: bool,
    pub source_filters: Option<String>,
    pub build_startup_options: Option<String>,
    pub build_options: Option<String>,
    pub build_targets: Vec<String>,
}

impl ArgumentsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Freezes the draft into the immutable record, applying defaults,
    /// boolean inversion, filter splitting, and path standardization.
    pub fn build(self) -> Arguments {
        Arguments {
            bazel: self.bazel.as_deref().map(standardize_path),
            generator_config: self.generator_config,
            tulsiproj_name: self.tulsiproj_name.as_deref().map(standardize_path),
            output_folder: self.output_folder.as_deref().map(standardize_path),
            workspace_root_override: self
                .workspace_root_override
                .as_deref()
                .map(standardize_path),
            verbose: !self.quiet,
            suppress_workspace_check: self.suppress_workspace_check,
            open_on_success: !self.no_open_xcode,
            additional_path_filters: self
                .source_filters
                .as_deref()
                .map(split_source_filters)
                .unwrap_or_default(),
            build_startup_options: self.build_startup_options,
            build_options: self.build_options,
            build_targets: if self.build_targets.is_empty() {
                None
            } else {
                Some(self.build_targets)
            },
        }
    }
}

/// Splits a raw filter string on single spaces and strips one leading `//`
/// from each entry that carries it. Only the leading occurrence is touched;
/// interior `//` sequences survive.
fn split_source_filters(raw: &str) -> HashSet<String> {
    raw.split(' ')
        .map(|filter| filter.strip_prefix("//").unwrap_or(filter).to_string())
        .collect()
}

/// Standardizes a path string without touching the filesystem.
///
/// A leading `~` or `~/` expands to the current user's home directory, `.`
/// components are dropped, and `..` folds against a preceding component in
/// absolute paths. Relative paths stay relative and symlinks are not
/// resolved, so a path that is already standard round-trips unchanged and
/// nonexistent paths are still accepted.
pub fn standardize_path(raw: &str) -> PathBuf {
    let expanded = expand_tilde(raw);
    let absolute = expanded.is_absolute();

    let mut standardized = PathBuf::new();
    for component in expanded.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let folds = absolute
                    && matches!(
                        standardized.components().next_back(),
                        Some(Component::Normal(_))
                    );
                if folds {
                    standardized.pop();
                } else {
                    standardized.push(Component::ParentDir);
                }
            }
            other => standardized.push(other.as_os_str()),
        }
    }

    if standardized.as_os_str().is_empty() {
        standardized.push(Component::CurDir);
    }
    standardized
}

fn expand_tilde(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    // `~user` forms are left alone.
    Path::new(raw).to_path_buf()
}
