use sqlx::PgPool;
use storage::dto::medal::{MedalTallyEntry, MedalWinnersResponse, SportMedalsResponse};
use storage::error::Result;
use storage::repository::medal::MedalRepository;
use storage::repository::sport::SportRepository;
use storage::services::medal_tally;

/// Overall standings: all departments ranked by medals won
pub async fn tally(pool: &PgPool) -> Result<Vec<MedalTallyEntry>> {
    let repo = MedalRepository::new(pool);
    let mut entries = repo.tally().await?;
    medal_tally::rank(&mut entries);
    Ok(entries)
}

/// Every medal winner, bucketed by colour
pub async fn winners(pool: &PgPool) -> Result<MedalWinnersResponse> {
    let repo = MedalRepository::new(pool);
    let all = repo.winners().await?;

    let mut response = MedalWinnersResponse {
        gold: Vec::new(),
        silver: Vec::new(),
        bronze: Vec::new(),
    };

    for winner in all {
        match winner.position {
            1 => response.gold.push(winner),
            2 => response.silver.push(winner),
            _ => response.bronze.push(winner),
        }
    }

    Ok(response)
}

/// Standings within one sport
pub async fn sport_medals(pool: &PgPool, sport_id: i32) -> Result<SportMedalsResponse> {
    let sport = SportRepository::new(pool).find_by_id(sport_id).await?;

    let repo = MedalRepository::new(pool);
    let mut medals = repo.tally_for_sport(sport_id).await?;
    medal_tally::rank(&mut medals);

    Ok(SportMedalsResponse { sport, medals })
}
