use std::cmp::Ordering;

use crate::dto::medal::MedalTallyEntry;

/// Rank a medal tally in standings order: gold, then silver, then bronze,
/// all descending, with department name as the deterministic tie-break.
pub fn rank(entries: &mut [MedalTallyEntry]) {
    entries.sort_by(standings_order);
}

fn standings_order(a: &MedalTallyEntry, b: &MedalTallyEntry) -> Ordering {
    b.gold
        .cmp(&a.gold)
        .then(b.silver.cmp(&a.silver))
        .then(b.bronze.cmp(&a.bronze))
        .then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, gold: i64, silver: i64, bronze: i64) -> MedalTallyEntry {
        MedalTallyEntry {
            id: 0,
            name: name.to_string(),
            short_code: name.to_string(),
            gold,
            silver,
            bronze,
            total: gold + silver + bronze,
        }
    }

    #[test]
    fn test_gold_outweighs_everything() {
        let mut tally = vec![entry("B", 1, 9, 9), entry("A", 2, 0, 5)];
        rank(&mut tally);
        assert_eq!(tally[0].name, "A");
    }

    #[test]
    fn test_gold_tie_broken_by_silver_then_bronze() {
        let mut tally = vec![
            entry("C", 1, 1, 0),
            entry("B", 1, 1, 2),
            entry("A", 1, 2, 0),
        ];
        rank(&mut tally);
        let names: Vec<&str> = tally.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_full_tie_ordered_by_name() {
        let mut tally = vec![entry("Mech", 1, 1, 1), entry("Civil", 1, 1, 1)];
        rank(&mut tally);
        assert_eq!(tally[0].name, "Civil");
    }
}
