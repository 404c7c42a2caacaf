pub mod csv_out;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Result fields holding per-row data (comparison rows, payoff months).
pub const ROW_FIELDS: [&str; 2] = ["rows", "schedule"];

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_pretty(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

fn print_pretty(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => eprintln!("failed to render result as JSON: {e}"),
    }
}

/// Render a scalar (or nested value) as a single cell.
pub fn format_cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Object(map) => match map.get("state") {
            // Tagged status enums read better as their state name.
            Some(Value::String(state)) if map.len() == 1 => state.clone(),
            _ => serde_json::to_string(value).unwrap_or_default(),
        },
        Value::Array(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payoff_status_renders_as_state_name() {
        assert_eq!(format_cell(&json!({ "state": "paid_off" })), "paid_off");
    }

    #[test]
    fn test_non_convergent_status_keeps_balance() {
        let cell = format_cell(&json!({ "state": "non_convergent", "remaining_balance": "100.00" }));
        assert!(cell.contains("remaining_balance"));
    }

    #[test]
    fn test_scalar_cells() {
        assert_eq!(format_cell(&json!("21695.58")), "21695.58");
        assert_eq!(format_cell(&json!(240)), "240");
        assert_eq!(format_cell(&json!(true)), "true");
        assert_eq!(format_cell(&Value::Null), "");
    }
}
