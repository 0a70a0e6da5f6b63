//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pipegen",
    bin_name = "pipegen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Task scaffolding for data-pipeline projects",
    long_about = "Pipegen generates task class files for data-pipeline projects \
                  from per-archetype templates, after checking that every \
                  data model the task depends on exists.",
    after_help = "EXAMPLES:\n\
        \x20 pipegen task UserEvents RawLogs\n\
        \x20 pipegen task LogReader --source --dry-run\n\
        \x20 pipegen models -p ./my_project\n\
        \x20 pipegen completions bash > /usr/share/bash-completion/completions/pipegen",
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
    /// Generate a task class.
    #[command(
        visible_alias = "t",
        about = "Generate a task class",
        after_help = "EXAMPLES:\n\
            \x20 pipegen task UserEvents RawLogs Accounts\n\
            \x20 pipegen task CleanLogs RawLogs --simple\n\
            \x20 pipegen task LogReader --source -p ./my_project\n\
            \x20 pipegen task UserEvents RawLogs --dry-run"
    )]
    Task(TaskArgs),

    /// List the data models defined in a project.
    #[command(
        visible_alias = "m",
        about = "List data models in a project",
        after_help = "EXAMPLES:\n\
            \x20 pipegen models\n\
            \x20 pipegen models -p ./my_project --format json"
    )]
    Models(ModelsArgs),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 pipegen templates\n\
            \x20 pipegen templates --templates ./my-templates --format csv\n\
            \x20 pipegen templates --show simple-task"
    )]
    Templates(TemplatesArgs),

    /// Initialise a Pipegen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 pipegen init                     # default location\n\
            \x20 pipegen -c ./pipegen.toml init   # explicit location"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 pipegen completions bash > ~/.local/share/bash-completion/completions/pipegen\n\
            \x20 pipegen completions zsh  > ~/.zfunc/_pipegen\n\
            \x20 pipegen completions fish > ~/.config/fish/completions/pipegen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Pipegen configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 pipegen config get defaults.project_directory\n\
            \x20 pipegen config list\n\
            \x20 pipegen config path"
    )]
    Config(ConfigCommands),
}

// ── task ──────────────────────────────────────────────────────────────────────

/// Arguments for `pipegen task`.
#[derive(Debug, Args)]
pub struct TaskArgs {
    /// Class name of the task, in CamelCase.
    #[arg(value_name = "CLASS_NAME", help = "Task class name (CamelCase)")]
    pub class_name: String,

    /// Data-model classes the task consumes.
    #[arg(
        value_name = "DEPENDENCY",
        help = "Data model class names the task depends on"
    )]
    pub dependencies: Vec<String>,

    /// Project root containing `data_models/` and `tasks/`.
    #[arg(
        short = 'p',
        long = "project-dir",
        value_name = "DIR",
        help = "Project directory (default: config or current directory)"
    )]
    pub project_dir: Option<PathBuf>,

    /// Generate a Source task.
    #[arg(long = "source", help = "Generate a Source")]
    pub source: bool,

    /// Generate a SimpleTask.
    #[arg(long = "simple", help = "Generate a SimpleTask")]
    pub simple: bool,

    /// Render without writing.
    #[arg(long = "dry-run", help = "Print the generated code instead of writing it")]
    pub dry_run: bool,

    /// Overwrite an existing task file (destructive).
    #[arg(long = "force", help = "Overwrite an existing task file")]
    pub force: bool,

    /// Directory of `*.j2` templates overriding the built-ins.
    #[arg(
        long = "templates",
        value_name = "DIR",
        help = "Template directory overriding built-in templates"
    )]
    pub templates: Option<PathBuf>,
}

// ── models ────────────────────────────────────────────────────────────────────

/// Arguments for `pipegen models`.
#[derive(Debug, Args)]
pub struct ModelsArgs {
    /// Project root containing `data_models/`.
    #[arg(short = 'p', long = "project-dir", value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Output format. Defaults to JSON under `--output-format json`, else table.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<ModelsFormat>,
}

/// Output format for the `models` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelsFormat {
    /// Class name and file, aligned.
    Table,
    /// One class name per line.
    List,
    /// JSON array.
    Json,
}

// ── templates ─────────────────────────────────────────────────────────────────

/// Arguments for `pipegen templates`.
#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Output format. Defaults to JSON under `--output-format json`, else table.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<ListFormat>,

    /// Directory of `*.j2` templates overriding the built-ins.
    #[arg(long = "templates", value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Print one template body: an archetype (`source`, `simple-task`,
    /// `task`) or a template key ending in `.j2`.
    #[arg(long = "show", value_name = "NAME", conflicts_with = "format")]
    pub show: Option<String>,
}

/// Output format for the `templates` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One key per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `pipegen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `pipegen completions`.
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

/// Subcommands for `pipegen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
