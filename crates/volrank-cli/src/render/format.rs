/// Rounds to a whole number and inserts `,` every three digits.
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_volume(mean_volume: f64) -> String {
    format!("{} volume", group_thousands(mean_volume))
}

pub fn format_change(percent_change: Option<f64>) -> String {
    match percent_change {
        Some(change) => format!("{change:.2}% change"),
        None => "n/a change".to_string(),
    }
}
