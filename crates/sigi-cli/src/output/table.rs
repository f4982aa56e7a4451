/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_entity_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(String::len)
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, &width)| format!("{header:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.len());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                let value = row.get(index).map_or("-", String::as_str);
                format!("{value:<width$}")
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::render_entity_table;

    #[test]
    fn aligns_columns_to_longest_cell() {
        let rendered = render_entity_table(
            &["id", "nombre"],
            &[
                vec!["1".to_string(), "Bio".to_string()],
                vec!["2".to_string(), "Semillero largo".to_string()],
            ],
        );
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[3].contains("Semillero largo"));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let rendered = render_entity_table(&["a", "b"], &[vec!["1".to_string()]]);
        assert!(rendered.lines().last().unwrap().contains('-'));
    }
}
