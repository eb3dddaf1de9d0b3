// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with debug logging to see rejected inputs:
//   RUST_LOG=debug cargo run --example basic_usage --features logging

use salary_types::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Salary Types Example ===\n");

    // Loosely formatted inputs
    println!("Parsing inputs...");
    for input in ["85'000$", "CA$ 72'500.50", "-1'234.5678", "10000000000"] {
        match Money::parse(input, true) {
            Ok(money) => println!("  {:>16} -> {:>14} ({} units)", input, money, money.units()),
            Err(err) => println!("  {:>16} -> error: {}", input, err),
        }
    }

    // Percentages
    println!("\n=== Raise ===");
    let salary = Money::parse("85'000$", false).unwrap();
    let raise = Ratio::parse("3.25%", false).unwrap();
    let increase = salary.apply_percentage(raise).unwrap();
    let new_salary = salary.checked_add(increase).unwrap();
    println!("  {} + {}% = {}", salary, raise, new_salary);
    println!(
        "  Plain: {}",
        new_salary.format_with(&FormatConfig::plain())
    );

    // Share of total compensation
    let bonus = Money::parse("12'000", false).unwrap();
    let total = new_salary.checked_add(bonus).unwrap();
    println!("  Bonus share: {}%", bonus.fraction_of(total).unwrap());

    // Stock in a foreign currency
    println!("\n=== Stock Grant ===");
    let grant = ConvertedAmount::parse("20'000 USD", "1.36").unwrap();
    let vested = grant.apply_percentage(Ratio::from_points(25).unwrap()).unwrap();
    match vested.value() {
        Ok(converted) => println!(
            "  Vested: {} USD = {} CAD",
            converted.original, converted.base
        ),
        Err(err) => println!("  Conversion failed: {}", err),
    }

    // Context
    println!("\n=== Context ===");
    let region = Region::from_code("on").unwrap();
    let year = Year::parse("");
    println!(
        "  {} ({}) in {}, leap year: {}",
        region.name(),
        region,
        year,
        year.is_leap()
    );
}
