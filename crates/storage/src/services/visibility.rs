use crate::dto::matches::MatchDetail;
use crate::models::Sport;

/// Apply the sport's visibility gate to a match list bound for an
/// unauthenticated viewer.
///
/// Matches are exposed only when the master flag is on AND at least one
/// round has been opened; the list is then narrowed to the opened rounds.
/// Individual-event results are never routed through this filter; medals
/// are public the moment they exist.
pub fn public_matches(sport: &Sport, matches: Vec<MatchDetail>) -> Vec<MatchDetail> {
    if !sport.fixtures_visible || sport.visible_rounds.is_empty() {
        return Vec::new();
    }

    matches
        .into_iter()
        .filter(|m| sport.visible_rounds.contains(m.round))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProgressStatus, RoundSet, RoundTag};

    fn sport(fixtures_visible: bool, rounds: &str) -> Sport {
        Sport {
            id: 1,
            name: "Basketball".to_string(),
            day: 1,
            icon: "🏀".to_string(),
            fixtures_visible,
            visible_rounds: RoundSet::from_csv(rounds).unwrap(),
        }
    }

    fn match_in_round(id: i32, round: RoundTag) -> MatchDetail {
        MatchDetail {
            id,
            event_id: 1,
            team1_department_id: 10,
            team2_department_id: Some(20),
            team1_name: "CSE".to_string(),
            team1_code: "CSE".to_string(),
            team2_name: Some("ECE".to_string()),
            team2_code: Some("ECE".to_string()),
            team1_score: None,
            team2_score: None,
            winner_department_id: None,
            winner_name: None,
            winner_code: None,
            round,
            status: ProgressStatus::Upcoming,
            is_bye: false,
            updated_at: chrono::NaiveDateTime::default(),
            event_name: None,
            sport_name: None,
        }
    }

    #[test]
    fn test_hidden_fixtures_return_nothing() {
        let s = sport(false, "semifinal,final");
        let matches = vec![match_in_round(1, RoundTag::Final)];
        assert!(public_matches(&s, matches).is_empty());
    }

    #[test]
    fn test_no_opened_rounds_returns_nothing() {
        let s = sport(true, "");
        let matches = vec![match_in_round(1, RoundTag::Final)];
        assert!(public_matches(&s, matches).is_empty());
    }

    #[test]
    fn test_only_opened_rounds_are_exposed() {
        let s = sport(true, "semifinal,final");
        let matches = vec![
            match_in_round(1, RoundTag::Round1),
            match_in_round(2, RoundTag::Semifinal),
            match_in_round(3, RoundTag::Final),
        ];

        let visible = public_matches(&s, matches);
        let ids: Vec<i32> = visible.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
