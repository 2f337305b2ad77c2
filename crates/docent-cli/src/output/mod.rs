use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            let options = table::TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            };
            Ok(render_table(&serde_json::to_value(value)?, options))
        }
    }
}

/// Print a serializable response to stdout.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

fn render_table(value: &Value, options: table::TableOptions) -> String {
    match value {
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) if items.iter().all(Value::is_object) => {
            // Union of keys across rows, sorted so columns are stable.
            let mut headers: Vec<&str> = Vec::new();
            for map in items.iter().filter_map(Value::as_object) {
                for key in map.keys() {
                    if !headers.contains(&key.as_str()) {
                        headers.push(key);
                    }
                }
            }
            headers.sort_unstable();
            let rows = items
                .iter()
                .filter_map(Value::as_object)
                .map(|map| {
                    headers
                        .iter()
                        .map(|h| map.get(*h).map_or_else(|| String::from("-"), cell))
                        .collect()
                })
                .collect::<Vec<Vec<String>>>();
            table::render_table(&headers, &rows, options)
        }
        Value::Array(items) => {
            let rows = items.iter().map(|v| vec![cell(v)]).collect::<Vec<_>>();
            table::render_table(&["value"], &rows, options)
        }
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, v)| vec![key.clone(), cell(v)])
                .collect::<Vec<_>>();
            table::render_table(&["field", "value"], &rows, options)
        }
        scalar => table::render_table(&["value"], &[vec![cell(scalar)]], options),
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(s) => s.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(map) => format!("{{{} fields}}", map.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;
    use serde_json::json;

    use super::{cell, render, render_table, table::TableOptions};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        id: &'static str,
        entries: u32,
    }

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn json_is_pretty_and_raw_is_one_line() {
        let row = Row {
            id: "kubernetes",
            entries: 7,
        };
        let pretty = render(&row, OutputFormat::Json).unwrap();
        let raw = render(&row, OutputFormat::Raw).unwrap();

        assert!(pretty.contains('\n'));
        assert!(!raw.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["entries"], 7);
    }

    #[test]
    fn array_of_objects_becomes_columns() {
        let value = json!([
            { "id": "pods", "entries": 3 },
            { "id": "services", "entries": 12, "extra": true }
        ]);
        let out = render_table(&value, PLAIN);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 4);
        let headers: Vec<&str> = lines[0].split_whitespace().collect();
        assert_eq!(headers, vec!["entries", "extra", "id"]);
        assert!(lines[2].contains("pods"));
        assert!(lines[2].contains('-'));
    }

    #[test]
    fn empty_array_says_so() {
        assert_eq!(render_table(&json!([]), PLAIN), "(no rows)");
    }

    #[test]
    fn nested_values_are_summarized() {
        assert_eq!(cell(&json!(["a", "b"])), "a, b");
        assert_eq!(cell(&json!([{ "x": 1 }])), "[1 items]");
        assert_eq!(cell(&json!({ "x": 1, "y": 2 })), "{2 fields}");
        assert_eq!(cell(&json!(null)), "-");
    }
}
