//! CSV export of a projection table

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use nestegg_core::model::ProjectionTable;

const HEADER: &str = "Year,Age,Partner Age,Total Income,Total Expenses,Net Draw,\
RMD Primary,RMD Partner,Net RMD Used,Cash from Savings,Savings Open,Savings Growth,\
Savings Before Draw,Savings End,Primary Home Value,Secondary Home Value,\
Total Assets,Total Liabilities,Net Worth";

/// Serialize the table to CSV, one row per simulated year.
///
/// Values are written with two decimal places and no currency formatting, so
/// spreadsheets parse them as numbers.
pub fn write_csv(path: &Path, table: &ProjectionTable) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{HEADER}")?;
    for row in &table.rows {
        let partner_age = row.partner_age.map_or(String::new(), |age| age.to_string());
        writeln!(
            writer,
            "{},{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            row.year,
            row.age,
            partner_age,
            row.total_income,
            row.total_expenses,
            row.net_draw,
            row.rmd_primary,
            row.rmd_partner,
            row.net_rmd_used,
            row.cash_from_savings,
            row.balance_open,
            row.balance_growth,
            row.balance_before_draw,
            row.balance_end,
            row.primary_home_value,
            row.secondary_home_value,
            row.total_assets,
            row.total_liabilities,
            row.net_worth,
        )?;
    }
    writer.flush()
}
