use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print plain text to stdout (repaired payloads, messages).
pub fn output_text(text: &str) {
    println!("{text}");
}

fn options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    match serde_json::to_value(value)? {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => Ok(render_object(map)),
        scalar => Ok(table::render_entity_table(
            &["value"],
            &[vec![value_to_cell(&scalar)]],
            options(),
        )),
    }
}

/// Scalars and nested objects as a key/value table; arrays of objects
/// (problems, outcomes, entries, issues) as their own tables below it.
fn render_object(map: Map<String, Value>) -> String {
    let mut scalars = Vec::new();
    let mut sections = Vec::new();
    for (key, value) in map {
        match value {
            Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
                sections.push((key, items));
            }
            Value::Object(inner) if inner.values().all(|v| !v.is_array()) => {
                for (inner_key, inner_value) in inner {
                    scalars.push((format!("{key}.{inner_key}"), inner_value));
                }
            }
            other => scalars.push((key, other)),
        }
    }
    scalars.sort_by(|a, b| a.0.cmp(&b.0));
    sections.sort_by(|a, b| a.0.cmp(&b.0));

    let rows = scalars
        .iter()
        .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
        .collect::<Vec<_>>();
    let mut out = table::render_entity_table(&["key", "value"], &rows, options());
    for (key, items) in sections {
        out.push_str(&format!("\n\n{key} ({})\n", items.len()));
        out.push_str(&render_array_table(&items));
    }
    out
}

fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, options());
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }
    if headers.is_empty() {
        return String::from("(no columns)");
    }
    table::order_columns(&mut headers);

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options())
}

/// One-line cell text; multi-line problem content is flattened.
fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.replace('\n', " ⏎ "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Row {
        id: &'static str,
        status: &'static str,
    }

    #[derive(Serialize)]
    struct Detail {
        title: &'static str,
        counts: Counts,
        problems: Vec<Row>,
    }

    #[derive(Serialize)]
    struct Counts {
        total: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Row {
            id: "tsk-1",
            status: "in_progress",
        };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "tsk-1");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Row {
            id: "tsk-1",
            status: "completed",
        };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_lists_nested_rows_as_sections() {
        let value = Detail {
            title: "Set\nwith newline",
            counts: Counts { total: 2 },
            problems: vec![
                Row {
                    id: "prb-1",
                    status: "open",
                },
                Row {
                    id: "prb-2",
                    status: "open",
                },
            ],
        };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("counts.total"));
        assert!(out.contains("Set ⏎ with newline"));
        assert!(out.contains("problems (2)"));
        assert!(out.contains("prb-2"));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let rows: Vec<Row> = Vec::new();
        let out = render(&rows, OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }
}
