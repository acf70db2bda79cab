//! Table rendering for the terminal

use nestegg_core::model::{MonteCarloEnsemble, ProjectionTable, final_percentile};

/// Format a currency value without cents, with thousands separators.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let dollars = rounded.abs() as i64;

    let digits = dollars.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Format a percentage that is already scaled to 0..=100.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Print the year-by-year projection table to stdout.
pub fn print_table(table: &ProjectionTable) {
    println!(
        "{:<6} {:<5} {:>14} {:>14} {:>13} {:>13} {:>13} {:>15} {:>15}",
        "Year", "Age", "Income", "Expenses", "Net Draw", "RMD", "From Savings", "Savings End", "Net Worth"
    );
    for row in &table.rows {
        println!(
            "{:<6} {:<5} {:>14} {:>14} {:>13} {:>13} {:>13} {:>15} {:>15}",
            row.year,
            row.age,
            format_currency(row.total_income),
            format_currency(row.total_expenses),
            format_currency(row.net_draw),
            format_currency(row.rmd_primary + row.rmd_partner),
            format_currency(row.cash_from_savings),
            format_currency(row.balance_end),
            format_currency(row.net_worth),
        );
    }

    let last = table.final_row();
    println!();
    println!(
        "Final savings: {}   Final home value: {}   Final net worth: {}",
        format_currency(last.balance_end),
        format_currency(last.primary_home_value + last.secondary_home_value),
        format_currency(last.net_worth),
    );
}

/// Print goal funding results, if any goals fired.
pub fn print_goal_funding(table: &ProjectionTable) {
    if table.goal_funding.is_empty() {
        return;
    }
    println!();
    println!("Goal funding:");
    for funding in &table.goal_funding {
        println!(
            "  {:<24} cost {:>12}   funded {}",
            funding.name,
            format_currency(funding.total_cost),
            format_percent(funding.funded_percent),
        );
    }
}

/// Print the Monte Carlo summary bands to stdout.
pub fn print_ensemble(ensemble: &MonteCarloEnsemble) {
    println!(
        "Monte Carlo: {} trials, seed {}",
        ensemble.trials, ensemble.seed
    );
    println!(
        "{:<6} {:>15} {:>15} {:>15} {:>12}",
        "Year", "P10", "Median", "P90", "Bankrupt"
    );
    for distribution in &ensemble.yearly {
        println!(
            "{:<6} {:>15} {:>15} {:>15} {:>12}",
            distribution.year,
            format_currency(distribution.p10),
            format_currency(distribution.median),
            format_currency(distribution.p90),
            format_percent(distribution.bankruptcy_probability),
        );
    }

    println!();
    for (label, target) in [("P10", 0.10), ("Median", 0.50), ("P90", 0.90)] {
        if let Some(value) = final_percentile(&ensemble.final_net_worth_percentiles, target) {
            println!("Final net worth {label}: {}", format_currency(value));
        }
    }
    println!();
    println!("Representative (median) trial:");
}
