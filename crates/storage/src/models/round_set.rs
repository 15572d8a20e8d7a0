use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stage label for a bracket match.
///
/// Ordering follows bracket progression, so a `RoundSet` iterates from the
/// earliest round to the final.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "round_tag", rename_all = "snake_case")]
pub enum RoundTag {
    Round1,
    Round2,
    Round3,
    Round4,
    Quarterfinal,
    Semifinal,
    ThirdPlace,
    Final,
}

impl RoundTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Round1 => "round1",
            Self::Round2 => "round2",
            Self::Round3 => "round3",
            Self::Round4 => "round4",
            Self::Quarterfinal => "quarterfinal",
            Self::Semifinal => "semifinal",
            Self::ThirdPlace => "third_place",
            Self::Final => "final",
        }
    }
}

impl fmt::Display for RoundTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoundTagError(String);

impl fmt::Display for ParseRoundTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown round tag: {}", self.0)
    }
}

impl std::error::Error for ParseRoundTagError {}

impl FromStr for RoundTag {
    type Err = ParseRoundTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "thirdplace" survives in data entered before the tag was renamed
        match s.trim().to_ascii_lowercase().as_str() {
            "round1" => Ok(Self::Round1),
            "round2" => Ok(Self::Round2),
            "round3" => Ok(Self::Round3),
            "round4" => Ok(Self::Round4),
            "quarterfinal" => Ok(Self::Quarterfinal),
            "semifinal" => Ok(Self::Semifinal),
            "third_place" | "thirdplace" => Ok(Self::ThirdPlace),
            "final" => Ok(Self::Final),
            other => Err(ParseRoundTagError(other.to_string())),
        }
    }
}

/// The set of rounds a sport exposes to unauthenticated viewers.
///
/// Stored as a comma-separated string in the `sports.visible_rounds` column;
/// business logic only ever sees the decoded set. An empty set means no
/// round is public.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundSet(BTreeSet<RoundTag>);

impl RoundSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, round: RoundTag) -> bool {
        self.0.contains(&round)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = RoundTag> + '_ {
        self.0.iter().copied()
    }

    /// Decode the persistence form, ignoring empty segments.
    pub fn from_csv(raw: &str) -> Result<Self, ParseRoundTagError> {
        let mut rounds = BTreeSet::new();
        for part in raw.split(',') {
            if part.trim().is_empty() {
                continue;
            }
            rounds.insert(part.parse()?);
        }
        Ok(Self(rounds))
    }

    /// Encode for the `sports.visible_rounds` column.
    pub fn to_csv(&self) -> String {
        self.0
            .iter()
            .map(RoundTag::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromIterator<RoundTag> for RoundSet {
    fn from_iter<I: IntoIterator<Item = RoundTag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl sqlx::Type<sqlx::Postgres> for RoundSet {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for RoundSet {
    fn decode(
        value: sqlx::postgres::PgValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <&str as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self::from_csv(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_csv() {
        let set = RoundSet::from_csv("semifinal,final").unwrap();
        assert!(set.contains(RoundTag::Semifinal));
        assert!(set.contains(RoundTag::Final));
        assert!(!set.contains(RoundTag::Round1));
        assert_eq!(set.to_csv(), "semifinal,final");
    }

    #[test]
    fn test_empty_string_is_empty_set() {
        let set = RoundSet::from_csv("").unwrap();
        assert!(set.is_empty());
        assert_eq!(set.to_csv(), "");
    }

    #[test]
    fn test_ignores_blank_segments() {
        let set = RoundSet::from_csv("round1,,final,").unwrap();
        assert_eq!(set.iter().count(), 2);
    }

    #[test]
    fn test_ordered_by_bracket_progression() {
        let set = RoundSet::from_csv("final,round1,semifinal").unwrap();
        let rounds: Vec<_> = set.iter().collect();
        assert_eq!(
            rounds,
            vec![RoundTag::Round1, RoundTag::Semifinal, RoundTag::Final]
        );
    }

    #[test]
    fn test_legacy_third_place_spelling() {
        assert_eq!("thirdplace".parse::<RoundTag>(), Ok(RoundTag::ThirdPlace));
        assert_eq!("Third_Place".parse::<RoundTag>(), Ok(RoundTag::ThirdPlace));
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        assert!(RoundSet::from_csv("final,grand_final").is_err());
    }
}
