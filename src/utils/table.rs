//! Plain-text table rendering for debug output.
//!
//! Example output:
//! ```text
//! +-------------+----------+
//! | DESTINATION | GATEWAY  |
//! +-------------+----------+
//! | svc-a       | 10.0.0.1 |
//! +-------------+----------+
//! ```

/// Render `rows` under `headers` as a bordered table.
///
/// Headers are upper-cased. Missing cells render empty; extra cells are ignored.
pub fn render_table<R, C>(
    headers: &[&str],
    rows: R,
) -> String
where
    R: IntoIterator<Item = Vec<C>>,
    C: AsRef<str>,
{
    let headers: Vec<String> = headers.iter().map(|h| h.to_uppercase()).collect();
    let rows: Vec<Vec<C>> = rows.into_iter().collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.as_ref().chars().count());
        }
    }

    let border = border_line(&widths);
    let mut out = String::new();

    out.push_str(&border);
    out.push_str(&row_line(&widths, |i| headers.get(i).map(String::as_str)));
    out.push_str(&border);
    for row in &rows {
        out.push_str(&row_line(&widths, |i| row.get(i).map(|c| c.as_ref())));
    }
    out.push_str(&border);

    out
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn row_line<'a>(
    widths: &[usize],
    cell: impl Fn(usize) -> Option<&'a str>,
) -> String {
    let mut line = String::from("|");
    for (i, width) in widths.iter().enumerate() {
        let text = cell(i).unwrap_or("");
        let pad = width - text.chars().count();
        line.push(' ');
        line.push_str(text);
        line.push_str(&" ".repeat(pad + 1));
        line.push('|');
    }
    line.push('\n');
    line
}
