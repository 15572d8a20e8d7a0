use std::collections::HashSet;

use crate::dto::matches::{MatchDetail, QualifiedTeam};
use crate::models::{ProgressStatus, RoundTag};

/// Departments eligible to be paired into `target`, given all matches of
/// one event.
///
/// Candidates come from completed matches of `source`: the loser advances
/// when pairing into the third-place match, the winner everywhere else.
/// Departments already occupying a slot in the target round are excluded,
/// and a department is listed at most once however many source matches it
/// appears in.
pub fn qualified_teams(
    matches: &[MatchDetail],
    source: RoundTag,
    target: RoundTag,
) -> Vec<QualifiedTeam> {
    let advance_loser = target == RoundTag::ThirdPlace;

    let already_paired: HashSet<i32> = matches
        .iter()
        .filter(|m| m.round == target)
        .flat_map(|m| {
            std::iter::once(m.team1_department_id).chain(m.team2_department_id)
        })
        .collect();

    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for m in matches {
        if m.round != source || m.status != ProgressStatus::Completed {
            continue;
        }

        let Some(candidate) = advancing_team(m, advance_loser) else {
            continue;
        };

        if already_paired.contains(&candidate.department_id) {
            continue;
        }
        if seen.insert(candidate.department_id) {
            candidates.push(candidate);
        }
    }

    candidates
}

fn advancing_team(m: &MatchDetail, advance_loser: bool) -> Option<QualifiedTeam> {
    let winner = m.winner_department_id?;
    let team1_won = winner == m.team1_department_id;

    let (department_id, name, code) = if advance_loser {
        // The side that did not win; a bye has no loser to advance.
        if team1_won {
            (
                m.team2_department_id?,
                m.team2_name.clone(),
                m.team2_code.clone(),
            )
        } else {
            (
                m.team1_department_id,
                Some(m.team1_name.clone()),
                Some(m.team1_code.clone()),
            )
        }
    } else if team1_won {
        (
            m.team1_department_id,
            Some(m.team1_name.clone()),
            Some(m.team1_code.clone()),
        )
    } else {
        (m.team2_department_id?, m.team2_name.clone(), m.team2_code.clone())
    };

    let code = code.unwrap_or_default();
    Some(QualifiedTeam {
        department_id,
        name: name.filter(|n| !n.is_empty()).unwrap_or_else(|| code.clone()),
        short_code: code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed_match(
        id: i32,
        round: RoundTag,
        team1: (i32, &str),
        team2: Option<(i32, &str)>,
        winner: Option<i32>,
    ) -> MatchDetail {
        let mut m = pending_match(id, round, team1, team2);
        m.status = ProgressStatus::Completed;
        m.winner_department_id = winner;
        m
    }

    fn pending_match(
        id: i32,
        round: RoundTag,
        team1: (i32, &str),
        team2: Option<(i32, &str)>,
    ) -> MatchDetail {
        MatchDetail {
            id,
            event_id: 1,
            team1_department_id: team1.0,
            team2_department_id: team2.map(|t| t.0),
            team1_name: team1.1.to_string(),
            team1_code: team1.1.to_string(),
            team2_name: team2.map(|t| t.1.to_string()),
            team2_code: team2.map(|t| t.1.to_string()),
            team1_score: None,
            team2_score: None,
            winner_department_id: None,
            winner_name: None,
            winner_code: None,
            round,
            status: ProgressStatus::Upcoming,
            is_bye: team2.is_none(),
            updated_at: chrono::NaiveDateTime::default(),
            event_name: None,
            sport_name: None,
        }
    }

    #[test]
    fn test_winners_advance_to_next_round() {
        let matches = vec![
            completed_match(1, RoundTag::Round1, (10, "CSE"), Some((20, "ECE")), Some(10)),
            completed_match(2, RoundTag::Round1, (30, "MECH"), Some((40, "CIVIL")), Some(40)),
        ];

        let teams = qualified_teams(&matches, RoundTag::Round1, RoundTag::Quarterfinal);
        let ids: Vec<i32> = teams.iter().map(|t| t.department_id).collect();
        assert_eq!(ids, vec![10, 40]);
    }

    #[test]
    fn test_already_paired_teams_are_excluded() {
        let matches = vec![
            completed_match(1, RoundTag::Round1, (10, "CSE"), Some((20, "ECE")), Some(10)),
            completed_match(2, RoundTag::Round1, (30, "MECH"), Some((40, "CIVIL")), Some(40)),
            // both winners already paired into the quarterfinal
            pending_match(3, RoundTag::Quarterfinal, (10, "CSE"), Some((40, "CIVIL"))),
        ];

        let teams = qualified_teams(&matches, RoundTag::Round1, RoundTag::Quarterfinal);
        assert!(teams.is_empty());
    }

    #[test]
    fn test_losers_advance_to_third_place() {
        let matches = vec![
            completed_match(1, RoundTag::Semifinal, (10, "CSE"), Some((20, "ECE")), Some(10)),
            completed_match(2, RoundTag::Semifinal, (30, "MECH"), Some((40, "CIVIL")), Some(40)),
        ];

        let teams = qualified_teams(&matches, RoundTag::Semifinal, RoundTag::ThirdPlace);
        let ids: Vec<i32> = teams.iter().map(|t| t.department_id).collect();
        assert_eq!(ids, vec![20, 30]);
    }

    #[test]
    fn test_bye_has_no_loser_to_advance() {
        let matches = vec![completed_match(
            1,
            RoundTag::Semifinal,
            (10, "CSE"),
            None,
            Some(10),
        )];

        let teams = qualified_teams(&matches, RoundTag::Semifinal, RoundTag::ThirdPlace);
        assert!(teams.is_empty());
    }

    #[test]
    fn test_unfinished_matches_produce_no_candidates() {
        let matches = vec![pending_match(1, RoundTag::Round1, (10, "CSE"), Some((20, "ECE")))];

        let teams = qualified_teams(&matches, RoundTag::Round1, RoundTag::Quarterfinal);
        assert!(teams.is_empty());
    }

    #[test]
    fn test_department_listed_once_despite_repeat_wins() {
        let matches = vec![
            completed_match(1, RoundTag::Round1, (10, "CSE"), Some((20, "ECE")), Some(10)),
            completed_match(2, RoundTag::Round1, (10, "CSE"), Some((30, "MECH")), Some(10)),
        ];

        let teams = qualified_teams(&matches, RoundTag::Round1, RoundTag::Quarterfinal);
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].department_id, 10);
    }

    #[test]
    fn test_name_falls_back_to_short_code() {
        let mut m = completed_match(1, RoundTag::Round1, (10, ""), Some((20, "ECE")), Some(10));
        m.team1_name = String::new();
        m.team1_code = "CSE".to_string();

        let teams = qualified_teams(&[m], RoundTag::Round1, RoundTag::Quarterfinal);
        assert_eq!(teams[0].name, "CSE");
    }
}
