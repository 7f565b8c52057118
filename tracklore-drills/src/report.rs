//! Result set rendering for the drill runner

use tracklore_common::db::query::ResultSet;

/// Render a result set as an aligned text table
pub fn render_table(result: &ResultSet) -> String {
    if result.is_empty() {
        return "(no rows)".to_string();
    }

    let cells: Vec<Vec<String>> = result
        .rows
        .iter()
        .map(|row| row.iter().map(|value| value.to_string()).collect())
        .collect();

    let mut widths: Vec<usize> = result.columns.iter().map(|c| c.chars().count()).collect();
    for row in &cells {
        for (index, cell) in row.iter().enumerate() {
            let width = cell.chars().count();
            if width > widths[index] {
                widths[index] = width;
            }
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(&result.columns, &widths));
    out.push('\n');
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format_row(&rule, &widths));
    for row in &cells {
        out.push('\n');
        out.push_str(&format_row(row, &widths));
    }
    out
}

/// Render a result set as one JSON object per line
pub fn render_json_lines(result: &ResultSet) -> String {
    result
        .to_json()
        .iter()
        .map(|row| row.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracklore_common::db::query::SqlValue;

    fn sample() -> ResultSet {
        ResultSet {
            columns: vec!["title".to_string(), "track_count".to_string()],
            rows: vec![
                vec![
                    SqlValue::Text("Blur".to_string()),
                    SqlValue::Integer(8),
                ],
                vec![
                    SqlValue::Text("My Aim Is True".to_string()),
                    SqlValue::Integer(6),
                ],
            ],
        }
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let rendered = render_table(&sample());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "title          | track_count");
        assert_eq!(lines[1], "-------------- | -----------");
        assert_eq!(lines[2], "Blur           | 8");
        assert_eq!(lines[3], "My Aim Is True | 6");
    }

    #[test]
    fn test_render_table_empty() {
        let rendered = render_table(&ResultSet::default());
        assert_eq!(rendered, "(no rows)");
    }

    #[test]
    fn test_render_json_lines() {
        let rendered = render_json_lines(&sample());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"title":"Blur","track_count":8}"#);
        assert_eq!(lines[1], r#"{"title":"My Aim Is True","track_count":6}"#);
    }
}
