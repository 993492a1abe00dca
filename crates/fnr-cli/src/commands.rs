//! Command implementations for the birth number CLI.

use anyhow::Context;
use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use tracing::info;

use fnr_generate::birth_numbers_for_date;
use fnr_model::BirthNumber;

use crate::cli::{GenerateArgs, ValidateArgs};
use crate::logging::redact_number;

/// Validate a single birth number and print its decoded fields.
///
/// Returns the process exit code: 0 for a valid number, 1 otherwise.
pub fn run_validate(args: &ValidateArgs) -> i32 {
    match BirthNumber::parse(&args.number) {
        Ok(number) => {
            info!(number = redact_number(number.as_str()), "number is valid");
            println!("{}", decode_table(&[number]));
            0
        }
        Err(error) => {
            eprintln!("invalid: {error}");
            1
        }
    }
}

/// Generate every valid birth number for the requested date and print them.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<()> {
    let mut numbers = birth_numbers_for_date(Some(args.date))
        .with_context(|| format!("generating birth numbers for {}", args.date))?;
    if let Some(gender) = args.gender {
        let gender = gender.into();
        numbers.retain(|number| number.gender() == gender);
    }
    info!(date = %args.date, count = numbers.len(), "generation finished");

    if numbers.is_empty() {
        eprintln!("no valid birth numbers exist for {}", args.date);
        return Ok(());
    }
    if args.digits_only {
        for number in &numbers {
            println!("{number}");
        }
    } else {
        println!("{}", decode_table(&numbers));
    }
    Ok(())
}

/// Render decoded birth numbers as a table.
fn decode_table(numbers: &[BirthNumber]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED).set_header(vec![
        "Number",
        "Day",
        "Month",
        "Year",
        "Individual",
        "Gender",
        "Century",
    ]);
    for number in numbers {
        table.add_row(vec![
            number.as_str().to_string(),
            number.day().to_string(),
            number.month().to_string(),
            number.year_suffix().to_string(),
            format!("{:03}", number.individual_number()),
            number.gender().to_string(),
            number.century().unwrap_or("-").to_string(),
        ]);
    }
    table
}
