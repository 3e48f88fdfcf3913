//! Command-line interface for numfield
//!
//! Supports:
//! - Checking values against a constraint set
//! - Printing the generated pattern
//! - Replaying typed text through a guarded field
//!
//! Every command starts from the field defaults (two fraction digits), not
//! the looser bare-grammar defaults, so `check` and `type` always agree.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use numfield::config::NumericConstraints;
use numfield::editable::NumberField;
use numfield::grammar::Matcher;
use numfield::guard::NoClipboard;
use numfield::input::Keystroke;
use numfield::Verdict;

/// Guarded numeric input: check values against a numeric grammar
#[derive(Parser, Debug)]
#[command(name = "numfield", version, about)]
pub struct CliArgs {
    /// Constraints file (YAML); defaults to ~/.config/numfield/config.yaml
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Disallow a leading minus sign
    #[arg(long, global = true)]
    pub no_negative: bool,

    /// Integers only
    #[arg(long, global = true)]
    pub no_decimal: bool,

    /// Maximum digits before the decimal point
    #[arg(long, value_name = "N", global = true)]
    pub int_digits: Option<u32>,

    /// Maximum digits after the decimal point
    #[arg(long, value_name = "N", global = true)]
    pub frac_digits: Option<u32>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Report whether each value is accepted (exit code 1 if any is rejected)
    Check {
        #[arg(value_name = "VALUES", required = true, allow_hyphen_values = true)]
        values: Vec<String>,
    },
    /// Print the matcher pattern
    Pattern,
    /// Type TEXT key by key into an empty field and show each step
    Type {
        #[arg(value_name = "TEXT", allow_hyphen_values = true)]
        text: String,
    },
}

impl CliArgs {
    /// Constraints from the config file with command-line overrides applied
    pub fn constraints(&self) -> Result<NumericConstraints> {
        let mut constraints = match &self.config {
            Some(path) => NumericConstraints::load(path)
                .with_context(|| format!("loading constraints from {}", path.display()))?,
            None => NumericConstraints::load_user_or_default(),
        };

        if self.no_negative {
            constraints.allow_negative = false;
        }
        if self.no_decimal {
            constraints.allow_decimal = false;
        }
        if let Some(n) = self.int_digits {
            constraints.max_int_digits = n;
        }
        if let Some(n) = self.frac_digits {
            constraints.max_frac_digits = n;
        }
        constraints.validate()?;
        Ok(constraints)
    }
}

/// Run a parsed command; returns the process exit code
pub fn run(args: CliArgs) -> Result<i32> {
    let constraints = args.constraints()?;
    tracing::debug!(?constraints, command = ?args.command, "running");

    match args.command {
        CliCommand::Check { values } => {
            let matcher = Matcher::build(&constraints).context("building matcher")?;
            let mut all_accepted = true;
            for value in &values {
                let status = if matcher.is_complete(value) {
                    "complete"
                } else if matcher.accepts(value) {
                    "accept"
                } else {
                    all_accepted = false;
                    "reject"
                };
                println!("{:<8} {:?}", status, value);
            }
            Ok(if all_accepted { 0 } else { 1 })
        }
        CliCommand::Pattern => {
            let matcher = Matcher::build(&constraints).context("building matcher")?;
            println!("{}", matcher.pattern());
            Ok(0)
        }
        CliCommand::Type { text } => {
            let mut field = NumberField::with_clipboard(constraints, Box::new(NoClipboard))
                .context("building field")?;
            for ch in text.chars() {
                let verdict = field.key_press(&Keystroke::char(ch));
                let mark = match verdict {
                    Verdict::Reject => "reject",
                    Verdict::Accept => "accept",
                    Verdict::PassThrough => "pass",
                };
                println!("{:?} {:<6} {:?}", ch, mark, field.text());
            }
            Ok(0)
        }
    }
}
