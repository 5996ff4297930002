//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use kiln_core::domain::ElementKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "kiln",
    bin_name = "kiln",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Staged code generation for namespaced classes",
    long_about = "Kiln turns short names into fully-qualified classes, stages \
                  the files they need and writes them only when every step \
                  succeeded.",
    after_help = "EXAMPLES:\n\
        \x20 kiln make controller admin/dashboard\n\
        \x20 kiln make entity 'featured product' --template entity/Entity.tpl\n\
        \x20 kiln file config/routes.yaml --content 'routes: []'\n\
        \x20 kiln list --format json",
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
    /// Generate a class.
    #[command(
        visible_alias = "m",
        about = "Generate a class",
        after_help = "EXAMPLES:\n\
            \x20 kiln make controller blog/post\n\
            \x20 kiln make command 'send mail' --var description='Sends mail'\n\
            \x20 kiln make service '\\Vendor\\Billing\\Invoicer' --dry-run"
    )]
    Make(MakeArgs),

    /// Generate an arbitrary file.
    #[command(
        about = "Generate a file from a template or literal content",
        after_help = "EXAMPLES:\n\
            \x20 kiln file README.md --template readme.tpl --var title=Shop\n\
            \x20 kiln file .gitkeep --content ''"
    )]
    File(FileArgs),

    /// List element kinds.
    #[command(
        visible_alias = "ls",
        about = "List element kinds with their namespace and suffix",
        after_help = "EXAMPLES:\n\
            \x20 kiln list\n\
            \x20 kiln list --format json"
    )]
    List(ListArgs),

    /// Initialise a Kiln configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 kiln init           # kiln.toml in the project root\n\
            \x20 kiln init --global  # user-wide config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 kiln completions bash > ~/.local/share/bash-completion/completions/kiln\n\
            \x20 kiln completions zsh  > ~/.zfunc/_kiln\n\
            \x20 kiln completions fish > ~/.config/fish/completions/kiln.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Kiln configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 kiln config get generator.root_namespace\n\
            \x20 kiln config list\n\
            \x20 kiln config path"
    )]
    Config(ConfigCommands),
}

// ── make ──────────────────────────────────────────────────────────────────────

/// Arguments for `kiln make`.
#[derive(Debug, Args)]
pub struct MakeArgs {
    /// Kind of element to generate.
    #[arg(value_enum, value_name = "KIND")]
    pub kind: Element,

    /// Class name. Short names are placed under the element's namespace; a
    /// leading `\` makes the name absolute.
    #[arg(value_name = "NAME", help = "Class name, e.g. 'admin/dashboard'")]
    pub name: String,

    /// Template to render instead of an empty class declaration.
    #[arg(
        short = 't',
        long = "template",
        value_name = "ID",
        help = "Template path, or a path relative to the skeleton directory"
    )]
    pub template: Option<String>,

    /// Extra template variables.
    #[arg(
        long = "var",
        value_name = "KEY=VALUE",
        help = "Template variable (repeatable)"
    )]
    pub vars: Vec<String>,

    /// Preview what would be written without writing any files.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,
}

// ── file ──────────────────────────────────────────────────────────────────────

/// Arguments for `kiln file`.
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["template", "content"])))]
pub struct FileArgs {
    /// Target path, relative to the project root.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Template to render.
    #[arg(short = 't', long = "template", value_name = "ID")]
    pub template: Option<String>,

    /// Literal file content.
    #[arg(long = "content", value_name = "TEXT")]
    pub content: Option<String>,

    /// Extra template variables.
    #[arg(long = "var", value_name = "KEY=VALUE", requires = "template")]
    pub vars: Vec<String>,

    /// Preview what would be written without writing any files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `kiln list`.
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
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One kind per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `kiln init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the user-wide config location instead of the project root.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `kiln completions`.
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

/// Subcommands for `kiln config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generator.root_namespace`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the configuration file locations.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Element kinds accepted by `kiln make`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Element {
    #[value(alias = "ctrl")]
    Controller,
    Entity,
    #[value(alias = "repo")]
    Repository,
    #[value(alias = "cmd")]
    Command,
    Event,
    Listener,
    Middleware,
    Service,
    Test,
}

impl From<Element> for ElementKind {
    fn from(element: Element) -> Self {
        match element {
            Element::Controller => Self::Controller,
            Element::Entity => Self::Entity,
            Element::Repository => Self::Repository,
            Element::Command => Self::Command,
            Element::Event => Self::Event,
            Element::Listener => Self::Listener,
            Element::Middleware => Self::Middleware,
            Element::Service => Self::Service,
            Element::Test => Self::Test,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn every_element_maps_to_a_kind() {
        for element in Element::value_variants() {
            let kind = ElementKind::from(*element);
            let name = element.to_possible_value().unwrap();
            assert_eq!(name.get_name(), kind.as_str());
        }
    }

    #[test]
    fn parse_make_command() {
        let cli = Cli::parse_from([
            "kiln", "make", "controller", "admin/dashboard", "--var", "a=b", "--dry-run",
        ]);
        let Commands::Make(args) = cli.command else {
            panic!("expected Make command");
        };
        assert_eq!(args.kind, Element::Controller);
        assert_eq!(args.name, "admin/dashboard");
        assert_eq!(args.vars, vec!["a=b".to_string()]);
        assert!(args.dry_run);
    }

    #[test]
    fn element_aliases() {
        let cli = Cli::parse_from(["kiln", "make", "repo", "product"]);
        assert!(matches!(cli.command, Commands::Make(MakeArgs { kind: Element::Repository, .. })));
    }

    #[test]
    fn file_requires_a_source() {
        assert!(Cli::try_parse_from(["kiln", "file", "README.md"]).is_err());
        assert!(
            Cli::try_parse_from(["kiln", "file", "README.md", "--template", "a", "--content", "b"])
                .is_err()
        );
        assert!(Cli::try_parse_from(["kiln", "file", "README.md", "--content", ""]).is_ok());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["kiln", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn root_flag_is_global() {
        let cli = Cli::parse_from(["kiln", "list", "--root", "/tmp/project"]);
        assert_eq!(cli.global.root, Some(PathBuf::from("/tmp/project")));
    }
}
