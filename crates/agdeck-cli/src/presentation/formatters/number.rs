pub fn format_compact(count: i64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}k", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// US dollars with cents
pub fn format_cost(usd: f64) -> String {
    format!("${:.2}", usd)
}
