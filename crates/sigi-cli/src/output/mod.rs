use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response to a string in the requested format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
    }
}

/// Print a serializable response in the requested format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => render_array_table(&items),
        Value::Object(map) => {
            let headers = ["campo", "valor"];
            let mut rows = Vec::with_capacity(map.len());
            for (key, value) in map {
                rows.push(vec![key, value_to_cell(&value)]);
            }
            Ok(table::render_entity_table(&headers, &rows))
        }
        scalar => Ok(value_to_cell(&scalar)),
    }
}

fn render_array_table(items: &[Value]) -> anyhow::Result<String> {
    if items.is_empty() {
        return Ok("(sin resultados)".to_string());
    }

    let Some(Value::Object(first)) = items.first() else {
        let rows: Vec<Vec<String>> = items.iter().map(|v| vec![value_to_cell(v)]).collect();
        return Ok(table::render_entity_table(&["valor"], &rows));
    };

    let headers: Vec<&str> = first.keys().map(String::as_str).collect();
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            headers
                .iter()
                .map(|header| {
                    item.get(*header)
                        .map_or_else(|| "-".to_string(), value_to_cell)
                })
                .collect()
        })
        .collect();
    Ok(table::render_entity_table(&headers, &rows))
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        nested => serde_json::to_string(nested).unwrap_or_else(|_| "-".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::render;
    use crate::cli::OutputFormat;

    #[test]
    fn json_is_pretty_printed() {
        let rendered = render(&json!({"id": 1}), OutputFormat::Json).unwrap();
        assert!(rendered.contains("\"id\": 1"));
    }

    #[test]
    fn object_renders_as_campo_valor_table() {
        let rendered = render(&json!({"nombre": "Bio", "id": 7}), OutputFormat::Table).unwrap();
        assert!(rendered.contains("campo"));
        assert!(rendered.contains("Bio"));
    }

    #[test]
    fn empty_array_renders_placeholder() {
        let rendered = render(&json!([]), OutputFormat::Table).unwrap();
        assert_eq!(rendered, "(sin resultados)");
    }
}
