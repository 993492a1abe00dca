//! CLI argument definitions for the birth number tool.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use fnr_model::Gender;

#[derive(Parser)]
#[command(
    name = "fnr",
    version,
    about = "Validate and generate Norwegian birth numbers",
    long_about = "Validate and generate Norwegian national identity numbers (fødselsnummer).\n\n\
                  A birth number is 11 digits: birth date (ddMMyy), a 3-digit individual\n\
                  number encoding century and gender, and two mod-11 control digits."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for silence).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow full identity numbers in log output (personal data).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate an 11-digit birth number and print its decoded fields.
    Validate(ValidateArgs),

    /// Generate every valid birth number for a date of birth.
    Generate(GenerateArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// The 11-digit birth number to validate.
    #[arg(value_name = "NUMBER")]
    pub number: String,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Date of birth in ISO format (YYYY-MM-DD).
    #[arg(value_name = "DATE")]
    pub date: NaiveDate,

    /// Only emit numbers encoding this gender.
    #[arg(long = "gender", value_enum)]
    pub gender: Option<GenderArg>,

    /// Print one bare 11-digit number per line instead of a table.
    #[arg(long = "digits-only")]
    pub digits_only: bool,
}

/// CLI gender choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum GenderArg {
    Female,
    Male,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Female => Gender::Female,
            GenderArg::Male => Gender::Male,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
