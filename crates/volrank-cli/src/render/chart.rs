use volrank_core::PriceChart;

pub const DEFAULT_CHART_WIDTH: usize = 40;
pub const DEFAULT_CHART_HEIGHT: usize = 10;

const Y_LABEL: &str = "Adjusted Close Price (USD)";
const X_LABEL: &str = "Date";
const TICK_WIDTH: usize = 12;

/// ASCII line chart of one adjusted-close series, one string per line.
pub fn render_chart(chart: &PriceChart, year: i32, width: usize, height: usize) -> Vec<String> {
    let width = width.max(2);
    let height = height.max(2);

    let mut lines = vec![
        format!("{} Adjusted Close Price in {year}", chart.symbol),
        Y_LABEL.to_string(),
    ];

    let (Some(first), Some(last)) = (chart.points.first(), chart.points.last()) else {
        lines.push("(no data)".to_string());
        return lines;
    };

    let values: Vec<f64> = chart.points.iter().map(|p| p.adj_close).collect();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    let columns = width.min(values.len());
    let mut grid = vec![vec![' '; columns]; height];
    for (x, column) in (0..columns).map(|x| (x, x * values.len() / columns)) {
        let row = if range < 1e-10 {
            height / 2
        } else {
            let scaled = ((values[column] - min) / range * (height - 1) as f64).round() as usize;
            (height - 1).saturating_sub(scaled)
        };
        grid[row][x] = '*';
    }

    let gutter = " ".repeat(TICK_WIDTH);
    for (index, row) in grid.iter().enumerate() {
        let plot: String = row.iter().collect();
        let line = if index == 0 {
            format!("{max:>w$.2} ┤{plot}", w = TICK_WIDTH - 1)
        } else if index == height - 1 {
            format!("{min:>w$.2} ┤{plot}", w = TICK_WIDTH - 1)
        } else {
            format!("{gutter}│{plot}")
        };
        lines.push(line.trim_end().to_string());
    }
    lines.push(format!("{gutter}└{}", "─".repeat(columns)));

    let first_date = first.ts.date().to_string();
    let last_date = last.ts.date().to_string();
    let span = columns + 1;
    let padding = span.saturating_sub(first_date.len() + last_date.len()).max(1);
    lines.push(format!("{gutter}{first_date}{}{last_date}", " ".repeat(padding)));

    let centre = TICK_WIDTH + span.saturating_sub(X_LABEL.len()) / 2;
    lines.push(format!("{}{X_LABEL}", " ".repeat(centre)));

    lines
}

/// Places two blocks of lines next to each other.
pub fn side_by_side(left: &[String], right: &[String], gap: usize) -> Vec<String> {
    let left_width = left.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let rows = left.len().max(right.len());

    (0..rows)
        .map(|row| {
            let l = left.get(row).map(String::as_str).unwrap_or("");
            let r = right.get(row).map(String::as_str).unwrap_or("");
            let pad = left_width - l.chars().count() + gap;
            format!("{l}{}{r}", " ".repeat(pad)).trim_end().to_string()
        })
        .collect()
}
