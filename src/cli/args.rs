//! CLI argument definitions
//!
//! clap owns the outer shell (verbosity, version); everything else is
//! captured verbatim and split into flags and positionals by [`parse_args`].

use std::collections::BTreeMap;

use clap::{ArgAction, Parser};

use crate::domain::{DomainError, DomainResult};

/// WordPress content manager: site info and post CRUD over the REST API
#[derive(Parser, Debug)]
#[command(name = "wp-content")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Increase log verbosity (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count)]
    pub debug: u8,

    /// <command> [<subcommand>] [<id>] [--flag [value]]...
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub args: Vec<String>,
}

/// Prefix marking a flag token.
pub const FLAG_PREFIX: &str = "--";

/// Value of a parsed flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// Flag given without a value
    Bool,
    Str(String),
}

/// Arguments split into flags and positionals.
///
/// A [`FlagValue::Str`] is never empty: an empty token after a flag leaves
/// the flag boolean. Positionals may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub flags: BTreeMap<String, FlagValue>,
    pub positionals: Vec<String>,
}

/// Split raw arguments into flags and positionals in a single pass.
///
/// `--name value` sets a string flag unless `value` is empty or is itself a
/// flag, in which case `--name` is boolean and `value` is examined next.
/// Later occurrences of a flag replace earlier ones. Flag names are not
/// checked.
pub fn parse_args<S: AsRef<str>>(argv: &[S]) -> ParsedArgs {
    let mut parsed = ParsedArgs::default();
    let mut i = 0;

    while i < argv.len() {
        let arg = argv[i].as_ref();
        match arg.strip_prefix(FLAG_PREFIX) {
            Some(key) => {
                let next = argv
                    .get(i + 1)
                    .map(AsRef::as_ref)
                    .filter(|n| !n.is_empty() && !n.starts_with(FLAG_PREFIX));
                match next {
                    Some(value) => {
                        parsed
                            .flags
                            .insert(key.to_string(), FlagValue::Str(value.to_string()));
                        i += 2;
                    }
                    None => {
                        parsed.flags.insert(key.to_string(), FlagValue::Bool);
                        i += 1;
                    }
                }
            }
            None => {
                parsed.positionals.push(arg.to_string());
                i += 1;
            }
        }
    }

    parsed
}

impl ParsedArgs {
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positionals.get(index).map(String::as_str)
    }

    /// True when the flag was given, with or without a value.
    pub fn is_set(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    /// String value of a flag that needs one.
    ///
    /// `Ok(None)` when absent; an error when given without a value.
    pub fn value(&self, name: &str) -> DomainResult<Option<&str>> {
        match self.flags.get(name) {
            None => Ok(None),
            Some(FlagValue::Str(v)) => Ok(Some(v.as_str())),
            Some(FlagValue::Bool) => Err(DomainError::MissingFlagValue {
                flag: name.to_string(),
            }),
        }
    }

    /// Like [`ParsedArgs::value`] but owned.
    pub fn string(&self, name: &str) -> DomainResult<Option<String>> {
        Ok(self.value(name)?.map(String::from))
    }
}
