use sqlx::{PgConnection, PgPool};

use crate::dto::matches::{CreateMatchRequest, UpdateMatchRequest};
use crate::error::{Result, StorageError};
use crate::models::{Match, ProgressStatus, RoundTag, medal_label};

const GOLD: i16 = 1;
const SILVER: i16 = 2;
const BRONZE: i16 = 3;

const MATCH_COLUMNS: &str = "id, event_id, team1_department_id, team2_department_id, \
     team1_name, team2_name, team1_score, team2_score, \
     winner_department_id, round, status, updated_by, updated_at";

/// A medal row produced while applying a match update, reported back so the
/// caller can log and broadcast it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedMedal {
    pub position: i16,
    pub department_id: i32,
    pub participant_name: String,
}

impl DerivedMedal {
    pub fn label(&self) -> &'static str {
        medal_label(self.position)
    }
}

/// What a match update did beyond the row itself.
#[derive(Debug, Clone)]
pub struct MatchUpdateOutcome {
    pub updated: Match,
    pub derived: Vec<DerivedMedal>,
    pub event_completed: bool,
}

/// Which podium places a match awards: only a completed match with a
/// declared winner awards anything, a final awards gold and (against a real
/// opponent) silver, a third-place match awards bronze.
pub fn medal_slots(m: &Match) -> Vec<(i16, i32)> {
    if m.status != ProgressStatus::Completed {
        return Vec::new();
    }
    let Some(winner) = m.winner_department_id else {
        return Vec::new();
    };

    match m.round {
        RoundTag::Final => {
            let mut slots = vec![(GOLD, winner)];
            if let Some(loser) = m.loser_department_id() {
                slots.push((SILVER, loser));
            }
            slots
        }
        RoundTag::ThirdPlace => vec![(BRONZE, winner)],
        _ => Vec::new(),
    }
}

/// Create a match. A supplied `live` status immediately raises the owning
/// event to live.
pub async fn create_match(
    pool: &PgPool,
    req: &CreateMatchRequest,
    updated_by: i32,
) -> Result<Match> {
    if let Some(winner) = req.winner_department_id {
        let valid = winner == req.team1_department_id || Some(winner) == req.team2_department_id;
        if !valid {
            return Err(StorageError::Invalid(
                "Winner must be one of the competing departments".to_string(),
            ));
        }
    }

    let mut tx = pool.begin().await?;

    let created = sqlx::query_as::<_, Match>(&format!(
        r#"
        INSERT INTO matches (event_id, team1_department_id, team2_department_id,
                             team1_name, team2_name, team1_score, team2_score,
                             winner_department_id, round, status, updated_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING {MATCH_COLUMNS}
        "#
    ))
    .bind(req.event_id)
    .bind(req.team1_department_id)
    .bind(req.team2_department_id)
    .bind(&req.team1_name)
    .bind(&req.team2_name)
    .bind(&req.team1_score)
    .bind(&req.team2_score)
    .bind(req.winner_department_id)
    .bind(req.round.unwrap_or(RoundTag::Round1))
    .bind(req.status.unwrap_or(ProgressStatus::Upcoming))
    .bind(updated_by)
    .fetch_one(&mut *tx)
    .await?;

    if created.status == ProgressStatus::Live {
        sqlx::query("UPDATE events SET status = 'live' WHERE id = $1")
            .bind(created.event_id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    Ok(created)
}

/// Apply a partial match update and reconcile everything that hangs off it:
/// previously derived medals are purged, medals are re-derived when the
/// match lands in `completed` with a winner, and the owning event's status
/// is recomputed. Runs as a single transaction so a failure part-way
/// through cannot leave an event with half its medals.
pub async fn update_match(
    pool: &PgPool,
    match_id: i32,
    req: &UpdateMatchRequest,
    updated_by: i32,
) -> Result<MatchUpdateOutcome> {
    let mut tx = pool.begin().await?;

    let existing = sqlx::query_as::<_, Match>(&format!(
        "SELECT {MATCH_COLUMNS} FROM matches WHERE id = $1 FOR UPDATE"
    ))
    .bind(match_id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or(StorageError::NotFound)?;

    // Validate the winner against the post-update team pair, since either
    // side of the pairing may change in the same request.
    let team1 = req.team1_department_id.unwrap_or(existing.team1_department_id);
    let team2 = req.team2_department_id.or(existing.team2_department_id);
    if let Some(winner) = req.winner_department_id.or(existing.winner_department_id) {
        let valid = winner == team1 || Some(winner) == team2;
        if !valid {
            return Err(StorageError::Invalid(
                "Winner must be one of the competing departments".to_string(),
            ));
        }
    }

    let updated = sqlx::query_as::<_, Match>(&format!(
        r#"
        UPDATE matches SET
            team1_department_id = COALESCE($2, team1_department_id),
            team2_department_id = COALESCE($3, team2_department_id),
            team1_name = COALESCE($4, team1_name),
            team2_name = COALESCE($5, team2_name),
            team1_score = COALESCE($6, team1_score),
            team2_score = COALESCE($7, team2_score),
            winner_department_id = COALESCE($8, winner_department_id),
            round = COALESCE($9, round),
            status = COALESCE($10, status),
            updated_by = $11,
            updated_at = now()
        WHERE id = $1
        RETURNING {MATCH_COLUMNS}
        "#
    ))
    .bind(match_id)
    .bind(req.team1_department_id)
    .bind(req.team2_department_id)
    .bind(&req.team1_name)
    .bind(&req.team2_name)
    .bind(&req.team1_score)
    .bind(&req.team2_score)
    .bind(req.winner_department_id)
    .bind(req.round)
    .bind(req.status)
    .bind(updated_by)
    .fetch_one(&mut *tx)
    .await?;

    if req.status == Some(ProgressStatus::Live) {
        sqlx::query("UPDATE events SET status = 'live' WHERE id = $1")
            .bind(updated.event_id)
            .execute(&mut *tx)
            .await?;
    }

    // Purge medals this match derived earlier, on every update: an edit to
    // the teams, winner or round invalidates them, and a match downgraded
    // out of `completed` must not keep its podium.
    sqlx::query("DELETE FROM results WHERE match_id = $1")
        .bind(match_id)
        .execute(&mut *tx)
        .await?;

    let mut derived = Vec::new();
    for (position, department_id) in medal_slots(&updated) {
        // A manually entered row on the same podium spot would collide with
        // the derived one; the derived row wins.
        sqlx::query(
            "DELETE FROM results WHERE event_id = $1 AND position = $2 AND match_id IS NULL",
        )
        .bind(updated.event_id)
        .bind(position)
        .execute(&mut *tx)
        .await?;

        let participant_name = display_name_for(&mut *tx, &updated, department_id).await?;

        sqlx::query(
            r#"
            INSERT INTO results (event_id, department_id, participant_name, position, updated_by, match_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(updated.event_id)
        .bind(department_id)
        .bind(&participant_name)
        .bind(position)
        .bind(updated_by)
        .bind(match_id)
        .execute(&mut *tx)
        .await?;

        derived.push(DerivedMedal {
            position,
            department_id,
            participant_name,
        });
    }

    let mut event_completed = false;
    if updated.status == ProgressStatus::Completed {
        let pending = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM matches WHERE event_id = $1 AND status != 'completed'",
        )
        .bind(updated.event_id)
        .fetch_one(&mut *tx)
        .await?;

        if pending == 0 {
            sqlx::query("UPDATE events SET status = 'completed' WHERE id = $1")
                .bind(updated.event_id)
                .execute(&mut *tx)
                .await?;
            event_completed = true;
        }
    }

    tx.commit().await?;

    Ok(MatchUpdateOutcome {
        updated,
        derived,
        event_completed,
    })
}

/// Display name for a medal row: the match's name override for that side
/// when present, otherwise the department's registered name.
async fn display_name_for(
    conn: &mut PgConnection,
    m: &Match,
    department_id: i32,
) -> Result<String> {
    let override_name = if department_id == m.team1_department_id {
        m.team1_name.clone()
    } else if Some(department_id) == m.team2_department_id {
        m.team2_name.clone()
    } else {
        None
    };

    if let Some(name) = override_name.filter(|n| !n.is_empty()) {
        return Ok(name);
    }

    let name = sqlx::query_scalar::<_, String>("SELECT name FROM departments WHERE id = $1")
        .bind(department_id)
        .fetch_one(conn)
        .await?;

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(round: RoundTag, status: ProgressStatus) -> Match {
        Match {
            id: 10,
            event_id: 1,
            team1_department_id: 100,
            team2_department_id: Some(200),
            team1_name: None,
            team2_name: None,
            team1_score: Some("2".to_string()),
            team2_score: Some("1".to_string()),
            winner_department_id: Some(100),
            round,
            status,
            updated_by: Some(1),
            updated_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_final_awards_gold_and_silver() {
        let m = fixture(RoundTag::Final, ProgressStatus::Completed);
        assert_eq!(medal_slots(&m), vec![(GOLD, 100), (SILVER, 200)]);
    }

    #[test]
    fn test_final_silver_follows_the_winner_side() {
        let mut m = fixture(RoundTag::Final, ProgressStatus::Completed);
        m.winner_department_id = Some(200);
        assert_eq!(medal_slots(&m), vec![(GOLD, 200), (SILVER, 100)]);
    }

    #[test]
    fn test_bye_final_awards_gold_only() {
        let mut m = fixture(RoundTag::Final, ProgressStatus::Completed);
        m.team2_department_id = None;
        assert_eq!(medal_slots(&m), vec![(GOLD, 100)]);
    }

    #[test]
    fn test_third_place_awards_bronze_to_winner() {
        let m = fixture(RoundTag::ThirdPlace, ProgressStatus::Completed);
        assert_eq!(medal_slots(&m), vec![(BRONZE, 100)]);
    }

    #[test]
    fn test_ordinary_rounds_award_nothing() {
        for round in [
            RoundTag::Round1,
            RoundTag::Round3,
            RoundTag::Quarterfinal,
            RoundTag::Semifinal,
        ] {
            let m = fixture(round, ProgressStatus::Completed);
            assert!(medal_slots(&m).is_empty());
        }
    }

    #[test]
    fn test_no_awards_without_winner() {
        let mut m = fixture(RoundTag::Final, ProgressStatus::Completed);
        m.winner_department_id = None;
        assert!(medal_slots(&m).is_empty());
    }

    #[test]
    fn test_no_awards_before_completion() {
        let m = fixture(RoundTag::Final, ProgressStatus::Live);
        assert!(medal_slots(&m).is_empty());
    }
}
