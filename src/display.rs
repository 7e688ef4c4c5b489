use crate::balances::BalanceRow;
use crate::config::EXPLORER_TX_URL;
use alloy_primitives::B256;
use comfy_table::{Cell, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};
use csv::Writer;
use serde_json::json;

#[derive(Debug, Clone)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            _ => OutputFormat::Table,
        }
    }
}

pub fn format_balances(rows: &[BalanceRow], format: &OutputFormat) -> String {
    match format {
        OutputFormat::Table => format_balances_table(rows),
        OutputFormat::Json => format_balances_json(rows),
        OutputFormat::Csv => format_balances_csv(rows),
    }
}

fn format_balances_table(rows: &[BalanceRow]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["Asset", "Balance"]);

    for row in rows {
        let value = match (&row.amount, &row.error) {
            (Some(amount), _) => amount.clone(),
            (None, Some(error)) => format!("error: {error}"),
            (None, None) => String::new(),
        };
        table.add_row(vec![Cell::new(&row.symbol), Cell::new(value)]);
    }

    table.to_string()
}

fn format_balances_json(rows: &[BalanceRow]) -> String {
    let entries: Vec<_> = rows
        .iter()
        .map(|row| {
            json!({
                "asset": row.symbol,
                "balance": row.amount,
                "error": row.error,
            })
        })
        .collect();

    serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".to_string())
}

fn format_balances_csv(rows: &[BalanceRow]) -> String {
    let mut wtr = Writer::from_writer(vec![]);

    let _ = wtr.write_record(["asset", "balance", "error"]);
    for row in rows {
        let _ = wtr.write_record([
            row.symbol.as_str(),
            row.amount.as_deref().unwrap_or(""),
            row.error.as_deref().unwrap_or(""),
        ]);
    }

    wtr.into_inner()
        .map(|bytes| String::from_utf8_lossy(&bytes).to_string())
        .unwrap_or_default()
}

/// Block-explorer link for a submitted operation.
pub fn explorer_tx_url(hash: &B256) -> String {
    format!("{EXPLORER_TX_URL}/{hash}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<BalanceRow> {
        vec![
            BalanceRow { symbol: "ETH".to_string(), amount: Some("0.25".to_string()), error: None },
            BalanceRow {
                symbol: "USDC".to_string(),
                amount: None,
                error: Some("query failed for USDC balance: connection refused".to_string()),
            },
        ]
    }

    #[test]
    fn json_output_keeps_failed_rows_inline() {
        let parsed: serde_json::Value = serde_json::from_str(&format_balances_json(&rows())).unwrap();
        assert_eq!(parsed[0]["asset"], "ETH");
        assert_eq!(parsed[0]["balance"], "0.25");
        assert_eq!(parsed[1]["asset"], "USDC");
        assert!(parsed[1]["balance"].is_null());
        assert!(parsed[1]["error"].as_str().unwrap().contains("connection refused"));
    }

    #[test]
    fn csv_output_has_one_record_per_row() {
        let csv = format_balances_csv(&rows());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "asset,balance,error");
        assert!(lines[1].starts_with("ETH,0.25,"));
        assert!(lines[2].starts_with("USDC,,"));
    }

    #[test]
    fn table_output_includes_every_asset() {
        let table = format_balances_table(&rows());
        assert!(table.contains("ETH"));
        assert!(table.contains("0.25"));
        assert!(table.contains("USDC"));
    }

    #[test]
    fn explorer_url_embeds_the_full_hash() {
        let hash = B256::repeat_byte(0xab);
        let url = explorer_tx_url(&hash);
        assert!(url.starts_with("https://basescan.org/tx/0x"));
        assert!(url.ends_with(&hash.to_string()[2..]));
    }
}
