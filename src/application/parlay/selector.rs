use crate::domain::parlay::Pick;

pub const DEFAULT_THRESHOLD: f64 = 8.0;
pub const DEFAULT_LIMIT: usize = 3;

/// Picks with `confidence >= threshold`, in pool order, at most `limit` of them.
pub fn select(candidates: &[Pick], threshold: f64, limit: usize) -> Vec<Pick> {
    candidates
        .iter()
        .filter(|p| p.confidence >= threshold)
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::PlayerType;

    fn pool() -> Vec<Pick> {
        vec![
            Pick::new(PlayerType::Pitcher, "A", "Over 6.5 K", 9.0),
            Pick::new(PlayerType::Hitter, "B", "1+ HR", 8.6),
            Pick::new(PlayerType::Hitter, "C", "2+ hits", 8.3),
        ]
    }

    fn games(picks: &[Pick]) -> Vec<&str> {
        picks.iter().map(|p| p.game.as_str()).collect()
    }

    #[test]
    fn test_default_threshold_keeps_all() {
        let got = select(&pool(), DEFAULT_THRESHOLD, DEFAULT_LIMIT);
        assert_eq!(games(&got), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_threshold_filters_in_order() {
        let got = select(&pool(), 8.5, DEFAULT_LIMIT);
        assert_eq!(games(&got), vec!["A", "B"]);
    }

    #[test]
    fn test_threshold_above_all_is_empty() {
        assert!(select(&pool(), 9.5, DEFAULT_LIMIT).is_empty());
    }

    #[test]
    fn test_empty_pool() {
        assert!(select(&[], 0.0, DEFAULT_LIMIT).is_empty());
    }

    #[test]
    fn test_inclusive_threshold() {
        let got = select(&pool(), 8.6, DEFAULT_LIMIT);
        assert_eq!(games(&got), vec!["A", "B"]);
    }

    #[test]
    fn test_truncates_to_limit_without_resorting() {
        let mut candidates = pool();
        candidates.insert(0, Pick::new(PlayerType::Hitter, "Z", "1+ RBI", 8.1));
        candidates.push(Pick::new(PlayerType::Pitcher, "D", "Over 5.5 IP", 9.9));
        let got = select(&candidates, 8.0, DEFAULT_LIMIT);
        assert_eq!(games(&got), vec!["Z", "A", "B"]);
    }

    #[test]
    fn test_pool_not_mutated_and_idempotent() {
        let candidates = pool();
        let before = candidates.clone();
        let once = select(&candidates, 8.4, DEFAULT_LIMIT);
        let twice = select(&once, 8.4, DEFAULT_LIMIT);
        assert_eq!(once, twice);
        assert_eq!(candidates, before);
    }

    #[test]
    fn test_length_and_monotonicity() {
        let mut candidates = pool();
        candidates.extend([
            Pick::new(PlayerType::Hitter, "E", "1+ hits", 7.9),
            Pick::new(PlayerType::Pitcher, "F", "Over 4.5 K", 9.2),
            Pick::new(PlayerType::Hitter, "G", "1+ RBI", 6.0),
        ]);

        let mut previous = usize::MAX;
        for step in 0..=22 {
            let t = step as f64 * 0.5;
            for limit in [0, 1, 3, 10] {
                let qualifying = candidates.iter().filter(|p| p.confidence >= t).count();
                assert_eq!(select(&candidates, t, limit).len(), qualifying.min(limit));
            }
            let len = select(&candidates, t, DEFAULT_LIMIT).len();
            assert!(len <= previous);
            previous = len;
        }
    }
}
