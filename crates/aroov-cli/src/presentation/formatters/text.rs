use aroov_types::PriceRange;

pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// `RM20 - RM80`, or `Price on request` without bounds.
pub fn price_label(min: Option<f64>, max: Option<f64>) -> String {
    PriceRange { min, max }.to_string()
}
