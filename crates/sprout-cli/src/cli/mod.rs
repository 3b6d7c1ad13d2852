//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sprout",
    bin_name = "sprout",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Empty project skeletons in one command",
    long_about = "Sprout creates a project directory, fills it with the empty \
                  files and folders of a Terraform, Python or HTML skeleton \
                  (or a layout from your config file) and runs `git init`.",
    after_help = "EXAMPLES:\n\
        \x20 sprout new                          # ./foo as a Terraform module\n\
        \x20 sprout new site --kind html --path ~/src\n\
        \x20 sprout new api  --layout go-service --baseline-files\n\
        \x20 sprout check\n\
        \x20 sprout completions bash > /usr/share/bash-completion/completions/sprout",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project skeleton.
    #[command(
        visible_alias = "n",
        about = "Create a new project skeleton",
        after_help = "EXAMPLES:\n\
            \x20 sprout new                       # ./foo, default kind\n\
            \x20 sprout new infra --kind tf\n\
            \x20 sprout new site  --kind html --no-git\n\
            \x20 sprout new docs  --layout docs --dry-run\n\
            \x20 sprout new --here --kind python  # set up the current directory"
    )]
    New(NewArgs),

    /// List built-in kinds and configured layouts.
    #[command(
        visible_alias = "ls",
        about = "List available layouts",
        after_help = "EXAMPLES:\n\
            \x20 sprout list\n\
            \x20 sprout list --format json"
    )]
    List(ListArgs),

    /// Validate layouts without touching the disk.
    #[command(
        about = "Check layouts for structural problems",
        after_help = "EXAMPLES:\n\
            \x20 sprout check            # every layout\n\
            \x20 sprout check go-service # one layout"
    )]
    Check(CheckArgs),

    /// Initialise a Sprout configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 sprout init           # default location\n\
            \x20 sprout init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sprout completions bash > ~/.local/share/bash-completion/completions/sprout\n\
            \x20 sprout completions zsh  > ~/.zfunc/_sprout\n\
            \x20 sprout completions fish > ~/.config/fish/completions/sprout.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Sprout configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sprout config get defaults.kind\n\
            \x20 sprout config list\n\
            \x20 sprout config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `sprout new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Name of the root directory to create.
    #[arg(
        value_name = "NAME",
        help = "Root directory name (default: defaults.root_name, 'foo')"
    )]
    pub name: Option<String>,

    /// Built-in scaffold kind.
    #[arg(
        short = 'k',
        long = "kind",
        value_name = "KIND",
        value_enum,
        conflicts_with = "layout",
        help = "Built-in skeleton (default: defaults.kind)"
    )]
    pub kind: Option<Kind>,

    /// Custom layout from the configuration file.
    #[arg(
        short = 'l',
        long = "layout",
        value_name = "LAYOUT",
        help = "Layout defined under [layouts] in the config file"
    )]
    pub layout: Option<String>,

    /// Directory in which the root directory is created.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        help = "Base directory (default: current directory)"
    )]
    pub path: Option<PathBuf>,

    /// Scaffold into the base directory itself instead of `base/NAME`.
    #[arg(
        long = "here",
        conflicts_with = "name",
        help = "Scaffold into --path (default: current directory) without creating a root"
    )]
    pub here: bool,

    /// Skip `git init`.
    #[arg(long = "no-git", help = "Do not initialise a git repository")]
    pub no_git: bool,

    /// Create empty `.gitignore` and `README.md` after `git init`.
    #[arg(
        long = "baseline-files",
        help = "Create .gitignore and README.md after git init"
    )]
    pub baseline_files: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Exit non-zero if any path could not be created.
    #[arg(long = "strict", help = "Fail when any path or git init fails")]
    pub strict: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `sprout list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `sprout check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Check only this layout.
    #[arg(value_name = "LAYOUT", help = "Layout to check (default: all)")]
    pub layout: Option<String>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `sprout init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sprout completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `sprout config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.kind`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Built-in scaffold kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Kind {
    /// Also accepted as `tf`.
    #[value(alias = "tf")]
    Terraform,
    /// Also accepted as `py`.
    #[value(alias = "py")]
    Python,
    /// Also accepted as `web`.
    #[value(alias = "web")]
    Html,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Terraform => write!(f, "terraform"),
            Self::Python => write!(f, "python"),
            Self::Html => write!(f, "html"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
