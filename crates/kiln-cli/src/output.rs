//! Terminal output.
//!
//! Every command writes through [`OutputManager`] so that `--quiet`,
//! `--no-color` and `--output-format` behave the same everywhere.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Writes command output to stdout.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Auto is Human on a TTY, Plain otherwise.
        let resolved_format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Plain line; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Raw line that ignores quiet mode, for output the user asked for
    /// explicitly (a config value, a completion script).
    pub fn data(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// `✓ <msg>`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked("\u{2713}", msg, |s| s.green().bold().to_string())
    }

    /// `⚠ <msg>`
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked("\u{26a0}", msg, |s| s.yellow().bold().to_string())
    }

    /// `ℹ <msg>`
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked("\u{2139}", msg, |s| s.blue().bold().to_string())
    }

    /// A file the command created or would create, e.g. `  created  src/Foo.php`.
    pub fn file(&self, action: &str, path: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let label = format!("{action:>8}");
        let line = if self.no_color {
            format!("  {label}  {path}")
        } else {
            format!("  {}  {path}", label.green())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty-printed JSON document. Never suppressed.
    pub fn json<T: Serialize>(&self, value: &T) -> CliResult<()> {
        let text = serde_json::to_string_pretty(value).map_err(|e| CliError::InvalidInput {
            message: format!("could not encode output as JSON: {e}"),
            source: Some(Box::new(e)),
        })?;
        self.term.write_line(&text)?;
        Ok(())
    }

    fn marked(&self, mark: &str, msg: &str, paint: impl Fn(&str) -> String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("{mark} {msg}")
        } else {
            format!("{} {msg}", paint(mark))
        };
        self.term.write_line(&line)
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            root: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.is_quiet());
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn colour_only_for_human_output() {
        assert!(make_manager(false, false, OutputFormat::Human).supports_color());
        assert!(!make_manager(false, true, OutputFormat::Human).supports_color());
        assert!(!make_manager(false, false, OutputFormat::Plain).supports_color());
    }

    #[test]
    fn config_can_disable_colour() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            root: None,
            output_format: OutputFormat::Human,
        };
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(!OutputManager::new(&args, &config).supports_color());
    }

    #[test]
    fn explicit_format_is_kept() {
        assert_eq!(make_manager(false, false, OutputFormat::Plain).format(), OutputFormat::Plain);
        assert!(make_manager(false, false, OutputFormat::Json).is_json());
    }
}
