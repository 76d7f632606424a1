
const TITLE: &str = "Score over time";
const X_LABEL: &str = "Question number";
const Y_LABEL: &str = "Score";
const COLUMN_WIDTH: usize = 4;

/// Draws a line chart of cumulative scores, one point per question.
/// The y axis always spans `0..=max_score`, higher scores are clamped.
pub fn render(scores: &[u32], max_score: u32) -> String {
    let label_width = max_score.to_string().len();
    let width = scores.len().saturating_sub(1) * COLUMN_WIDTH + 1;
    let mut grid = vec![vec![' '; width]; max_score as usize + 1];

    for (x, pair) in scores.windows(2).enumerate() {
        let from = pair[0].min(max_score) as f64;
        let to = pair[1].min(max_score) as f64;
        let glyph = if to > from {
            '/'
        } else if to < from {
            '\\'
        } else {
            '-'
        };
        for step in 1..COLUMN_WIDTH {
            let y = from + (to - from) * step as f64 / COLUMN_WIDTH as f64;
            grid[y.round() as usize][x * COLUMN_WIDTH + step] = glyph;
        }
    }
    for (x, score) in scores.iter().enumerate() {
        grid[(*score).min(max_score) as usize][x * COLUMN_WIDTH] = '*';
    }

    let mut lines = vec![TITLE.to_owned(), String::new(), Y_LABEL.to_owned()];
    for (y, row) in grid.iter().enumerate().rev() {
        let row: String = row.iter().collect();
        let line = format!("{:>w$} |{}", y, row, w = label_width);
        lines.push(line.trim_end().to_owned());
    }
    lines.push(format!("{:>w$} +{}", "", "-".repeat(width), w = label_width));

    let mut ticks = vec![' '; width];
    for x in 0..scores.len() {
        for (offset, digit) in x.to_string().chars().enumerate() {
            let column = x * COLUMN_WIDTH + offset;
            if column >= ticks.len() {
                ticks.resize(column + 1, ' ');
            }
            ticks[column] = digit;
        }
    }
    let ticks: String = ticks.iter().collect();
    lines.push(format!("{:>w$}  {}", "", ticks, w = label_width).trim_end().to_owned());
    lines.push(format!("{:>w$}  {}", "", X_LABEL, w = label_width));

    lines.join("\n")
}
