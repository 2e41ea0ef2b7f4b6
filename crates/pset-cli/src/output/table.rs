#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN_WIDTH: usize = 6;

/// Columns shown first, in this order; the rest follow alphabetically with
/// timestamps last.
const LEADING_COLUMNS: &[&str] = &[
    "outcome",
    "id",
    "task_id",
    "key",
    "problem_key",
    "index",
    "title",
    "status",
];
const TRAILING_COLUMNS: &[&str] = &["created_at", "updated_at"];

/// Sort headers into display order.
pub fn order_columns(headers: &mut [String]) {
    let rank = |header: &str| {
        if let Some(i) = LEADING_COLUMNS.iter().position(|c| *c == header) {
            i
        } else if let Some(i) = TRAILING_COLUMNS.iter().position(|c| *c == header) {
            LEADING_COLUMNS.len() + 1 + i
        } else {
            LEADING_COLUMNS.len()
        }
    };
    headers.sort_by(|a, b| rank(a).cmp(&rank(b)).then_with(|| a.cmp(b)));
}

/// Render an aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .max()
                .unwrap_or(0)
                .max(display_width(header))
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(display_width(&header_line));

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let padded = pad(&truncated, *width, looks_numeric(&truncated));
                if options.color {
                    colorize(&truncated, &padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

/// Shrink the widest columns until the table fits `max_width`.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;

    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > display_width(headers[*idx]).max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);
        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(value)));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Colour task statuses and import outcomes; padding stays outside the escape codes.
fn colorize(value: &str, padded: &str) -> String {
    let code = match value {
        "completed" | "created" | "true" => "32",
        "in_progress" => "36",
        "not_started" => "33",
        "cancelled" | "failed" | "false" => "31",
        _ => return padded.to_string(),
    };
    let fill = &padded[value.len()..];
    format!("\u{1b}[{code}m{value}\u{1b}[0m{fill}")
}

#[cfg(test)]
mod tests {
    use super::{TableOptions, order_columns, render_entity_table};

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn alignment_handles_mixed_widths() {
        let headers = ["id", "status", "title"];
        let rows = vec![
            vec!["tsk-1".to_string(), "not_started".to_string(), "short".to_string()],
            vec![
                "tsk-200".to_string(),
                "in_progress".to_string(),
                "a much longer title".to_string(),
            ],
        ];

        let table = render_entity_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(
            lines[2].chars().count(),
            lines[3].chars().count(),
            "rows should be padded to the same width"
        );
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let rows = vec![vec!["prb-1".to_string(), "x".repeat(80)]];
        let table = render_entity_table(
            &["id", "content"],
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        let row = table.lines().nth(2).expect("row line");
        assert!(row.chars().count() <= 40);
        assert!(row.ends_with('…'));
    }

    #[test]
    fn colored_statuses_keep_alignment() {
        let rows = vec![vec!["completed".to_string()], vec!["other".to_string()]];
        let table = render_entity_table(
            &["status"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(table.contains("\u{1b}[32mcompleted\u{1b}[0m"));
    }

    #[test]
    fn columns_follow_display_order() {
        let mut headers = ["updated_at", "content", "id", "answered", "task_id"]
            .map(String::from)
            .to_vec();
        order_columns(&mut headers);
        assert_eq!(
            headers,
            vec!["id", "task_id", "answered", "content", "updated_at"]
        );
    }
}
