//! Command-line tokenizing and dispatch.
//!
//! The tool doubles as a GUI application: only an invocation whose first
//! token is the literal sentinel `--` is treated as a command-line run.
//! Anything else (a bare double-click launch, OS-supplied arguments) yields
//! the all-defaults record untouched.
//!
//! One flag-definition table drives both the single-pass dispatch loop and
//! the usage text, so the two cannot drift apart. [`parse`] never prints or
//! exits; help requests and missing option values come back as [`CliError`]
//! variants for the binary shim to map to exit codes.

use std::fmt::Write as _;

use crate::arguments::{Arguments, ArgumentsBuilder};
use crate::error::{CliError, Result};

/// Literal separator marking that all following tokens are options for this
/// tool rather than OS-supplied launch arguments.
pub const SENTINEL: &str = "--";

/// Result of consuming the raw argument list (program name excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommandLine {
    /// Whether the leading `--` sentinel was present at all.
    pub commandline_sentinel_found: bool,
    /// The frozen options record.
    pub arguments: Arguments,
    /// Unrecognized tokens in the order they appeared; parsing continued
    /// past each of them.
    pub unknown_options: Vec<String>,
}

/// Effect a recognized flag has on the accumulating builder.
#[derive(Debug, Clone, Copy)]
enum Effect {
    Help,
    Quiet,
    Bazel,
    NoWorkspaceCheck,
    OutputFolder,
    WorkspaceRoot,
    AdditionalSourceFilters,
    GenConfig,
    NoOpenXcode,
    CreateTulsiproj,
    StartupOptions,
    BuildOptions,
    Target,
}

struct FlagDef {
    /// Accepted spellings, short forms first.
    names: &'static [&'static str],
    /// Metavar for the value token, `None` for zero-arity switches.
    value: Option<&'static str>,
    help: &'static str,
    effect: Effect,
}

const FLAGS: &[FlagDef] = &[
    FlagDef {
        names: &["-h", "--help"],
        value: None,
        help: "Show this help message and exit.",
        effect: Effect::Help,
    },
    FlagDef {
        names: &["-c", "--genconfig"],
        value: Some("config"),
        help: "Generate an Xcode project from the given generator config.",
        effect: Effect::GenConfig,
    },
    FlagDef {
        names: &["--create-tulsiproj"],
        value: Some("name"),
        help: "Create a new Tulsi project bundle with the given name.",
        effect: Effect::CreateTulsiproj,
    },
    FlagDef {
        names: &["--bazel"],
        value: Some("path"),
        help: "Path to the bazel binary to use for builds and queries.",
        effect: Effect::Bazel,
    },
    FlagDef {
        names: &["-o", "--outputfolder"],
        value: Some("path"),
        help: "Destination folder for the generated project.",
        effect: Effect::OutputFolder,
    },
    FlagDef {
        names: &["-w", "--workspaceroot"],
        value: Some("path"),
        help: "Override automatic detection of the Bazel workspace root.",
        effect: Effect::WorkspaceRoot,
    },
    FlagDef {
        names: &["-t", "--target"],
        value: Some("label"),
        help: "Build target label to include; may be repeated.",
        effect: Effect::Target,
    },
    FlagDef {
        names: &["--additionalSourceFilters"],
        value: Some("filters"),
        help: "Space-separated source path filters to add to the project.",
        effect: Effect::AdditionalSourceFilters,
    },
    FlagDef {
        names: &["--startup-options"],
        value: Some("options"),
        help: "Startup option string passed to bazel verbatim.",
        effect: Effect::StartupOptions,
    },
    FlagDef {
        names: &["--build-options"],
        value: Some("options"),
        help: "Build option string passed to bazel verbatim.",
        effect: Effect::BuildOptions,
    },
    FlagDef {
        names: &["--no-workspace-check"],
        value: None,
        help: "Skip validation of the Bazel workspace.",
        effect: Effect::NoWorkspaceCheck,
    },
    FlagDef {
        names: &["--no-open-xcode"],
        value: None,
        help: "Do not open the generated project in Xcode on success.",
        effect: Effect::NoOpenXcode,
    },
    FlagDef {
        names: &["-q", "--quiet"],
        value: None,
        help: "Silence informational logging.",
        effect: Effect::Quiet,
    },
];

/// Consumes the raw argument list and produces the frozen options record.
///
/// When the first token is not the [`SENTINEL`] the rest of the input is
/// ignored entirely and the all-defaults record is returned. Unrecognized
/// tokens are collected rather than fatal; a value-taking flag at
/// end-of-input is.
pub fn parse(args: &[String]) -> Result<ParsedCommandLine> {
    if args.first().map(String::as_str) != Some(SENTINEL) {
        return Ok(ParsedCommandLine {
            commandline_sentinel_found: false,
            arguments: Arguments::default(),
            unknown_options: Vec::new(),
        });
    }

    let mut builder = ArgumentsBuilder::new();
    let mut unknown_options = Vec::new();

    let mut tokens = args[1..].iter();
    while let Some(token) = tokens.next() {
        let Some(def) = FLAGS
            .iter()
            .find(|def| def.names.contains(&token.as_str()))
        else {
            unknown_options.push(token.clone());
            continue;
        };

        let value = if def.value.is_some() {
            match tokens.next() {
                Some(value) => Some(value.clone()),
                None => return Err(CliError::MissingValue(token.clone())),
            }
        } else {
            None
        };

        // Non-repeatable value flags are last-write-wins, silently.
        match def.effect {
            Effect::Help => return Err(CliError::HelpRequested),
            Effect::Quiet => builder.quiet = true,
            Effect::NoWorkspaceCheck => builder.suppress_workspace_check = true,
            Effect::NoOpenXcode => builder.no_open_xcode = true,
            Effect::Bazel => builder.bazel = value,
            Effect::OutputFolder => builder.output_folder = value,
            Effect::WorkspaceRoot => builder.workspace_root_override = value,
            Effect::AdditionalSourceFilters => builder.source_filters = value,
            Effect::GenConfig => builder.generator_config = value,
            Effect::CreateTulsiproj => builder.tulsiproj_name = value,
            Effect::StartupOptions => builder.build_startup_options = value,
            Effect::BuildOptions => builder.build_options = value,
            Effect::Target => builder.build_targets.extend(value),
        }
    }

    Ok(ParsedCommandLine {
        commandline_sentinel_found: true,
        arguments: builder.build(),
        unknown_options,
    })
}

/// Renders the full usage text from the flag-definition table.
pub fn usage() -> String {
    let mut text = String::new();
    let _ = writeln!(text, "Usage: {} -- [options]", env!("CARGO_PKG_NAME"));
    let _ = writeln!(
        text,
        "\nGenerates Xcode projects from Bazel workspaces. Launched without a\nleading \"--\" the tool ignores its arguments and starts as a GUI\napplication with default options.\n\nOptions:"
    );

    for def in FLAGS {
        let mut column = format!("  {}", def.names.join(", "));
        if let Some(metavar) = def.value {
            let _ = write!(column, " <{metavar}>");
        }
        if column.len() > 32 {
            let _ = writeln!(text, "{column}\n{:32}{}", "", def.help);
        } else {
            let _ = writeln!(text, "{column:<32}{}", def.help);
        }
    }

    let _ = writeln!(
        text,
        "\nA <config> reference takes the form <project>.tulsiproj[:ConfigName],\ne.g. \"~/MyProject.tulsiproj:MyConfig\". When :ConfigName is omitted, a\nconfig sharing the project's name is assumed.\n\nExactly one of --genconfig or --create-tulsiproj must be given."
    );
    text
}
