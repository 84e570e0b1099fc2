use tabled::builder::Builder;
use tabled::settings::Style;
use volrank_core::Ranking;

use super::format::{format_change, format_volume};

pub const CARD_COLUMNS: usize = 3;

/// Summary cards for the selected assets, filled row by row so that card
/// `i` lands in column `i % 3`.
pub fn render_cards(ranking: &Ranking) -> String {
    let cards: Vec<String> = ranking
        .selected_metrics()
        .map(|m| {
            format!(
                "{}\n{}\n{}",
                m.symbol,
                format_volume(m.mean_volume),
                format_change(m.percent_change)
            )
        })
        .collect();

    let mut builder = Builder::default();
    for row in cards.chunks(CARD_COLUMNS) {
        let mut cells: Vec<String> = row.to_vec();
        cells.resize(CARD_COLUMNS, String::new());
        builder.push_record(cells);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}
