use graphseek_core::graph::MedianStrategy;

/// Parse a median strategy, accepting `on-demand` as well as `on_demand`
pub fn parse_median_strategy(s: &str) -> Result<MedianStrategy, String> {
    s.parse::<MedianStrategy>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_median_strategy() {
        assert_eq!(
            parse_median_strategy("on-demand").unwrap(),
            MedianStrategy::OnDemand
        );
        assert_eq!(
            parse_median_strategy("PRECOMPUTED").unwrap(),
            MedianStrategy::Precomputed
        );
        assert!(parse_median_strategy("fastest")
            .unwrap_err()
            .contains("median strategy"));
    }
}
