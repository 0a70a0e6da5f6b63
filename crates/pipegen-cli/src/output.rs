//! Terminal output.
//!
//! Everything the user asked for (generated code, listings, JSON) goes to
//! stdout. Logs and errors go to stderr.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

#[derive(Clone, Copy)]
enum Tone {
    Good,
    Caution,
    Neutral,
}

/// Writes command results to stdout.
///
/// Indicators and headers respect `--quiet`; [`Self::raw`] and
/// [`Self::json`] never do, since they carry what the user asked for.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let resolved_format = resolve_format(args.output_format, &config.output.format, || {
            io::stdout().is_terminal()
        });
        let no_color = args.no_color
            || config.output.no_color
            || resolved_format != OutputFormat::Human;

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color,
            term: Term::stdout(),
        }
    }

    /// Requested content (generated code, listings). Never suppressed.
    pub fn raw(&self, content: &str) -> io::Result<()> {
        self.term.write_str(content)?;
        if !content.ends_with('\n') {
            self.term.write_line("")?;
        }
        Ok(())
    }

    /// Pretty JSON document. Never suppressed.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    /// `✓ <msg>` in green.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.indicator('\u{2713}', msg, Tone::Good)
    }

    /// `⚠ <msg>` in yellow.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.indicator('\u{26a0}', msg, Tone::Caution)
    }

    /// `ℹ <msg>` in blue.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.indicator('\u{2139}', msg, Tone::Neutral)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.no_color {
            return self.term.write_line(text);
        }
        self.term.write_line(&text.cyan().bold().to_string())
    }

    fn indicator(&self, symbol: char, msg: &str, tone: Tone) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("{symbol} {msg}")
        } else {
            let symbol = symbol.to_string();
            match tone {
                Tone::Good => format!("{} {}", symbol.green().bold(), msg.green()),
                Tone::Caution => format!("{} {}", symbol.yellow().bold(), msg.yellow()),
                Tone::Neutral => format!("{} {}", symbol.blue().bold(), msg.blue()),
            }
        };
        self.term.write_line(&line)
    }

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

/// Resolve `Auto` using the config file's `output.format`, then the TTY.
fn resolve_format(
    flag: OutputFormat,
    configured: &str,
    is_terminal: impl FnOnce() -> bool,
) -> OutputFormat {
    if flag != OutputFormat::Auto {
        return flag;
    }
    match configured.to_ascii_lowercase().as_str() {
        "json" => OutputFormat::Json,
        "plain" => OutputFormat::Plain,
        _ if is_terminal() => OutputFormat::Human,
        _ => OutputFormat::Plain,
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
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_indicators_are_ok() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.success("hello").is_ok());
        assert!(out.info("hello").is_ok());
    }

    #[test]
    fn color_follows_flag_and_format() {
        assert!(!make_manager(false, false, OutputFormat::Human).no_color);
        assert!(make_manager(false, true, OutputFormat::Human).no_color);
        assert!(make_manager(false, false, OutputFormat::Plain).no_color);
    }

    #[test]
    fn explicit_flag_wins() {
        assert_eq!(
            resolve_format(OutputFormat::Plain, "json", || true),
            OutputFormat::Plain
        );
    }

    #[test]
    fn auto_uses_configured_format() {
        assert_eq!(
            resolve_format(OutputFormat::Auto, "json", || true),
            OutputFormat::Json
        );
        assert_eq!(
            resolve_format(OutputFormat::Auto, "plain", || true),
            OutputFormat::Plain
        );
    }

    #[test]
    fn auto_human_depends_on_terminal() {
        assert_eq!(
            resolve_format(OutputFormat::Auto, "human", || true),
            OutputFormat::Human
        );
        assert_eq!(
            resolve_format(OutputFormat::Auto, "human", || false),
            OutputFormat::Plain
        );
    }

    #[test]
    fn json_accessor() {
        assert!(make_manager(false, true, OutputFormat::Json).is_json());
        assert!(!make_manager(false, true, OutputFormat::Plain).is_json());
    }
}
