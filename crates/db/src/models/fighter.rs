//! Fighter entity model, DTOs and response views.
//!
//! One canonical row struct ([`Fighter`]) backs every view. Incoming DTOs are
//! validated and normalized into [`NewFighter`] / [`FighterChanges`] before
//! they reach the repository, and responses are built by the explicit
//! projections at the bottom of this file.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use ufc_core::error::CoreError;
use ufc_core::fighter::{
    full_name, parse_optional_date_of_birth, validate_full_name, validate_name_part,
};
use ufc_core::stance::normalize_stance_name;
use ufc_core::types::{DbId, Timestamp};
use validator::Validate;

/* --------------------------------------------------------------------------
Entity
-------------------------------------------------------------------------- */

/// A row from the `fighter` table, with the stance name joined in.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Fighter {
    pub id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nickname: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub reach: Option<i32>,
    pub stance_id: Option<DbId>,
    /// Catalog name for `stance_id`, filled by the repository's outer join.
    pub stance: Option<String>,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub no_contests: i32,
    pub current_champion: bool,
    pub slpm: Option<f64>,
    pub str_acc: Option<f64>,
    pub sapm: Option<f64>,
    pub str_def: Option<f64>,
    pub td_avg: Option<f64>,
    pub td_acc: Option<f64>,
    pub td_def: Option<f64>,
    pub sub_avg: Option<f64>,
}

impl Fighter {
    /// Display name derived from the first and last name.
    pub fn full_name(&self) -> String {
        full_name(self.first_name.as_deref(), self.last_name.as_deref())
    }
}

/* --------------------------------------------------------------------------
Incoming DTOs
-------------------------------------------------------------------------- */

/// Payload for `POST /fighters`.
///
/// Record counts and the champion flag default to zero / `false`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFighter {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub last_name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub nickname: Option<String>,
    /// `YYYY-M-D`; parsed during normalization.
    pub date_of_birth: Option<String>,

    #[validate(range(exclusive_min = 0, message = "must be greater than 0"))]
    pub height: Option<i32>,
    #[validate(range(exclusive_min = 0, message = "must be greater than 0"))]
    pub weight: Option<i32>,
    #[validate(range(exclusive_min = 0, message = "must be greater than 0"))]
    pub reach: Option<i32>,

    /// Free text; resolved against the stance catalog, dropped when unknown.
    #[validate(length(min = 1, message = "must not be empty"))]
    pub stance: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub wins: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub losses: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub draws: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub no_contests: i32,
    #[serde(default)]
    pub current_champion: bool,

    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub slpm: Option<f64>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub str_acc: Option<f64>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub sapm: Option<f64>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub str_def: Option<f64>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub td_avg: Option<f64>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub td_acc: Option<f64>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub td_def: Option<f64>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub sub_avg: Option<f64>,
}

/// Payload for `PATCH /fighters/{id}`.
///
/// Absent fields are left alone. An explicit `null` clears the nullable
/// columns, is ignored for `dateOfBirth` and `stance`, and is rejected for
/// the record counts and the champion flag.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFighter {
    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub last_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub nickname: Option<Option<String>>,
    pub date_of_birth: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    #[validate(range(exclusive_min = 0, message = "must be greater than 0"))]
    pub height: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(range(exclusive_min = 0, message = "must be greater than 0"))]
    pub weight: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(range(exclusive_min = 0, message = "must be greater than 0"))]
    pub reach: Option<Option<i32>>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub stance: Option<String>,

    #[serde(default, deserialize_with = "non_null")]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub wins: Option<i32>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub losses: Option<i32>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub draws: Option<i32>,
    #[serde(default, deserialize_with = "non_null")]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub no_contests: Option<i32>,
    #[serde(default, deserialize_with = "non_null")]
    pub current_champion: Option<bool>,

    #[serde(default, deserialize_with = "nullable")]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub slpm: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub str_acc: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub sapm: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub str_def: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub td_avg: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub td_acc: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub td_def: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub sub_avg: Option<Option<f64>>,
}

/// A present field maps to `Some`, so an explicit `null` becomes
/// `Some(None)`. Absent fields fall back to `None` through `#[serde(default)]`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// An optional field that must not be `null` when present.
fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/* --------------------------------------------------------------------------
Normalized repository inputs
-------------------------------------------------------------------------- */

/// Validated insert values. `stance` holds the catalog spelling; the
/// repository turns it into a `stance_id` (or `NULL` when unknown).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewFighter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nickname: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub reach: Option<i32>,
    pub stance: Option<String>,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub no_contests: i32,
    pub current_champion: bool,
    pub slpm: Option<f64>,
    pub str_acc: Option<f64>,
    pub sapm: Option<f64>,
    pub str_def: Option<f64>,
    pub td_avg: Option<f64>,
    pub td_acc: Option<f64>,
    pub td_def: Option<f64>,
    pub sub_avg: Option<f64>,
}

/// Validated partial update.
///
/// `None` leaves the stored column untouched. For the nullable columns
/// `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FighterChanges {
    pub first_name: Option<Option<String>>,
    pub last_name: Option<Option<String>>,
    pub nickname: Option<Option<String>>,
    pub date_of_birth: Option<NaiveDate>,
    pub height: Option<Option<i32>>,
    pub weight: Option<Option<i32>>,
    pub reach: Option<Option<i32>>,
    pub stance: Option<String>,
    pub wins: Option<i32>,
    pub losses: Option<i32>,
    pub draws: Option<i32>,
    pub no_contests: Option<i32>,
    pub current_champion: Option<bool>,
    pub slpm: Option<Option<f64>>,
    pub str_acc: Option<Option<f64>>,
    pub sapm: Option<Option<f64>>,
    pub str_def: Option<Option<f64>>,
    pub td_avg: Option<Option<f64>>,
    pub td_acc: Option<Option<f64>>,
    pub td_def: Option<Option<f64>>,
    pub sub_avg: Option<Option<f64>>,
}

impl CreateFighter {
    /// Validate the payload and normalize it for insertion.
    pub fn normalize(self) -> Result<NewFighter, CoreError> {
        self.validate()?;
        validate_full_name(self.first_name.as_deref(), self.last_name.as_deref())?;
        let date_of_birth = parse_optional_date_of_birth(self.date_of_birth.as_deref())?;

        Ok(NewFighter {
            first_name: self.first_name,
            last_name: self.last_name,
            nickname: self.nickname,
            date_of_birth,
            height: self.height,
            weight: self.weight,
            reach: self.reach,
            stance: self.stance.as_deref().map(normalize_stance_name),
            wins: self.wins,
            losses: self.losses,
            draws: self.draws,
            no_contests: self.no_contests,
            current_champion: self.current_champion,
            slpm: self.slpm,
            str_acc: self.str_acc,
            sapm: self.sapm,
            str_def: self.str_def,
            td_avg: self.td_avg,
            td_acc: self.td_acc,
            td_def: self.td_def,
            sub_avg: self.sub_avg,
        })
    }
}

impl UpdateFighter {
    /// Validate the payload and normalize it into column changes.
    pub fn normalize(self) -> Result<FighterChanges, CoreError> {
        self.validate()?;
        validate_name_part("firstName", self.first_name.as_ref().and_then(|v| v.as_deref()))?;
        validate_name_part("lastName", self.last_name.as_ref().and_then(|v| v.as_deref()))?;
        if matches!((&self.first_name, &self.last_name), (Some(None), Some(None))) {
            return Err(CoreError::Validation(
                "firstName and lastName cannot both be cleared".to_string(),
            ));
        }
        let date_of_birth = parse_optional_date_of_birth(self.date_of_birth.as_deref())?;

        Ok(FighterChanges {
            first_name: self.first_name,
            last_name: self.last_name,
            nickname: self.nickname,
            date_of_birth,
            height: self.height,
            weight: self.weight,
            reach: self.reach,
            stance: self.stance.as_deref().map(normalize_stance_name),
            wins: self.wins,
            losses: self.losses,
            draws: self.draws,
            no_contests: self.no_contests,
            current_champion: self.current_champion,
            slpm: self.slpm,
            str_acc: self.str_acc,
            sapm: self.sapm,
            str_def: self.str_def,
            td_avg: self.td_avg,
            td_acc: self.td_acc,
            td_def: self.td_def,
            sub_avg: self.sub_avg,
        })
    }
}

/* --------------------------------------------------------------------------
Response views
-------------------------------------------------------------------------- */

/// Name group shared by both read views. Missing names are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FighterNames {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

/// Physical group. Present when any member is set; unset members are `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FighterPhysicalFeatures {
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub reach: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FighterRecord {
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub no_contests: i32,
}

/// Career statistics. Present only when all eight values are set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FighterCareerStats {
    pub slpm: f64,
    pub str_acc: f64,
    pub sapm: f64,
    pub str_def: f64,
    pub td_avg: f64,
    pub td_acc: f64,
    pub td_def: f64,
    pub sub_avg: f64,
}

/// Acknowledgment returned after create and update.
///
/// Carries `createdAt` after a create and `updatedAt` after an update, never
/// both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FighterReadSimple {
    pub id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    pub names: FighterNames,
    pub full_name: String,
}

/// Full view returned by single and list reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FighterReadDetailed {
    pub id: DbId,
    pub names: FighterNames,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_features: Option<FighterPhysicalFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stance: Option<String>,
    pub record: FighterRecord,
    pub current_champion: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_stats: Option<FighterCareerStats>,
}

impl FighterNames {
    pub fn from_fighter(f: &Fighter) -> Self {
        Self {
            first_name: f.first_name.clone(),
            last_name: f.last_name.clone(),
            nickname: f.nickname.clone(),
        }
    }
}

impl FighterPhysicalFeatures {
    /// Any-present grouping: `None` only when height, weight and reach are all unset.
    pub fn from_fighter(f: &Fighter) -> Option<Self> {
        if f.height.is_none() && f.weight.is_none() && f.reach.is_none() {
            return None;
        }
        Some(Self {
            height: f.height,
            weight: f.weight,
            reach: f.reach,
        })
    }
}

impl FighterRecord {
    pub fn from_fighter(f: &Fighter) -> Self {
        Self {
            wins: f.wins,
            losses: f.losses,
            draws: f.draws,
            no_contests: f.no_contests,
        }
    }
}

impl FighterCareerStats {
    /// All-or-nothing grouping: a single unset statistic drops the whole group.
    pub fn from_fighter(f: &Fighter) -> Option<Self> {
        Some(Self {
            slpm: f.slpm?,
            str_acc: f.str_acc?,
            sapm: f.sapm?,
            str_def: f.str_def?,
            td_avg: f.td_avg?,
            td_acc: f.td_acc?,
            td_def: f.td_def?,
            sub_avg: f.sub_avg?,
        })
    }
}

impl FighterReadSimple {
    /// View returned by `POST /fighters`.
    pub fn created(f: &Fighter) -> Self {
        Self {
            id: f.id,
            created_at: Some(f.created_at),
            updated_at: None,
            names: FighterNames::from_fighter(f),
            full_name: f.full_name(),
        }
    }

    /// View returned by `PATCH /fighters/{id}`.
    pub fn updated(f: &Fighter) -> Self {
        Self {
            id: f.id,
            created_at: None,
            updated_at: Some(f.updated_at),
            names: FighterNames::from_fighter(f),
            full_name: f.full_name(),
        }
    }
}

impl From<&Fighter> for FighterReadDetailed {
    fn from(f: &Fighter) -> Self {
        Self {
            id: f.id,
            names: FighterNames::from_fighter(f),
            date_of_birth: f.date_of_birth.map(|d| d.format("%Y-%m-%d").to_string()),
            physical_features: FighterPhysicalFeatures::from_fighter(f),
            stance: f.stance.clone(),
            record: FighterRecord::from_fighter(f),
            current_champion: f.current_champion,
            career_stats: FighterCareerStats::from_fighter(f),
        }
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn sample_fighter() -> Fighter {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        Fighter {
            id: 1,
            created_at: created,
            updated_at: created,
            first_name: Some("Jon".into()),
            last_name: Some("Jones".into()),
            nickname: None,
            date_of_birth: None,
            height: None,
            weight: None,
            reach: None,
            stance_id: None,
            stance: None,
            wins: 0,
            losses: 0,
            draws: 0,
            no_contests: 0,
            current_champion: false,
            slpm: None,
            str_acc: None,
            sapm: None,
            str_def: None,
            td_avg: None,
            td_acc: None,
            td_def: None,
            sub_avg: None,
        }
    }

    fn with_all_stats(mut f: Fighter) -> Fighter {
        f.slpm = Some(4.29);
        f.str_acc = Some(0.58);
        f.sapm = Some(2.22);
        f.str_def = Some(0.64);
        f.td_avg = Some(1.93);
        f.td_acc = Some(0.45);
        f.td_def = Some(0.95);
        f.sub_avg = Some(0.5);
        f
    }

    // -- CreateFighter::normalize --

    #[test]
    fn create_defaults_record_to_zero() {
        let input: CreateFighter = serde_json::from_value(json!({"firstName": "Jon"})).unwrap();
        let new = input.normalize().unwrap();
        assert_eq!((new.wins, new.losses, new.draws, new.no_contests), (0, 0, 0, 0));
        assert!(!new.current_champion);
    }

    #[test]
    fn create_maps_camel_case_fields() {
        let input: CreateFighter = serde_json::from_value(json!({
            "firstName": "Jon",
            "lastName": "Jones",
            "noContests": 1,
            "currentChampion": true,
            "strAcc": 0.5,
            "subAvg": 0.4,
            "dateOfBirth": "1987-7-19",
        }))
        .unwrap();
        let new = input.normalize().unwrap();
        assert_eq!(new.last_name.as_deref(), Some("Jones"));
        assert_eq!(new.no_contests, 1);
        assert!(new.current_champion);
        assert_eq!(new.str_acc, Some(0.5));
        assert_eq!(new.sub_avg, Some(0.4));
        assert_eq!(new.date_of_birth, NaiveDate::from_ymd_opt(1987, 7, 19));
    }

    #[test]
    fn create_without_name_rejected() {
        let input = CreateFighter {
            nickname: Some("Bones".into()),
            ..Default::default()
        };
        let err = input.normalize().unwrap_err();
        assert!(err.to_string().contains("fighter has no name"));
    }

    #[test]
    fn create_with_whitespace_names_rejected() {
        let input = CreateFighter {
            first_name: Some("  ".into()),
            last_name: Some(" ".into()),
            ..Default::default()
        };
        assert!(matches!(input.normalize(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn create_with_empty_string_name_rejected() {
        let input = CreateFighter {
            first_name: Some(String::new()),
            last_name: Some("Jones".into()),
            ..Default::default()
        };
        let err = input.normalize().unwrap_err();
        assert!(err.to_string().contains("first_name"));
    }

    #[test]
    fn negative_record_counts_rejected() {
        for field in ["wins", "losses", "draws", "noContests"] {
            let input: CreateFighter =
                serde_json::from_value(json!({"firstName": "Jon", field: -1})).unwrap();
            assert!(
                matches!(input.normalize(), Err(CoreError::Validation(_))),
                "{field} = -1 should be rejected"
            );

            let input: CreateFighter =
                serde_json::from_value(json!({"firstName": "Jon", field: 0})).unwrap();
            assert!(input.normalize().is_ok(), "{field} = 0 should be accepted");
        }
    }

    #[test]
    fn non_positive_measurements_rejected() {
        for field in ["height", "weight", "reach"] {
            for value in [0, -5] {
                let input: CreateFighter =
                    serde_json::from_value(json!({"firstName": "Jon", field: value})).unwrap();
                assert!(
                    matches!(input.normalize(), Err(CoreError::Validation(_))),
                    "{field} = {value} should be rejected"
                );
            }
            let input: CreateFighter =
                serde_json::from_value(json!({"firstName": "Jon", field: 70})).unwrap();
            assert!(input.normalize().is_ok());
        }
    }

    #[test]
    fn negative_statistic_rejected() {
        let input = CreateFighter {
            first_name: Some("Jon".into()),
            td_def: Some(-0.1),
            ..Default::default()
        };
        let err = input.normalize().unwrap_err();
        assert!(err.to_string().contains("td_def"));
    }

    #[test]
    fn invalid_date_of_birth_rejected() {
        let input = CreateFighter {
            first_name: Some("Jon".into()),
            date_of_birth: Some("1987-13-01".into()),
            ..Default::default()
        };
        assert!(matches!(input.normalize(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn stance_is_title_cased() {
        let input = CreateFighter {
            first_name: Some("Jon".into()),
            stance: Some("open stance".into()),
            ..Default::default()
        };
        assert_eq!(input.normalize().unwrap().stance.as_deref(), Some("Open Stance"));
    }

    #[test]
    fn unknown_stance_is_not_a_validation_error() {
        let input = CreateFighter {
            first_name: Some("Jon".into()),
            stance: Some("invalid-value".into()),
            ..Default::default()
        };
        assert!(input.normalize().is_ok());
    }

    // -- UpdateFighter::normalize --

    #[test]
    fn empty_update_produces_no_changes() {
        let input: UpdateFighter = serde_json::from_value(json!({})).unwrap();
        assert_eq!(input.normalize().unwrap(), FighterChanges::default());
    }

    #[test]
    fn update_rejects_blank_name_part() {
        let input = UpdateFighter {
            last_name: Some(Some("   ".into())),
            ..Default::default()
        };
        let err = input.normalize().unwrap_err();
        assert!(err.to_string().contains("lastName must not be blank"));
    }

    #[test]
    fn update_applies_same_numeric_rules_as_create() {
        let input = UpdateFighter {
            wins: Some(-1),
            ..Default::default()
        };
        assert!(input.normalize().is_err());

        let input = UpdateFighter {
            reach: Some(Some(0)),
            ..Default::default()
        };
        assert!(input.normalize().is_err());
    }

    #[test]
    fn update_distinguishes_null_from_absent() {
        let input: UpdateFighter =
            serde_json::from_value(json!({"nickname": null, "height": null, "slpm": 1.5}))
                .unwrap();
        let changes = input.normalize().unwrap();

        assert_eq!(changes.nickname, Some(None));
        assert_eq!(changes.height, Some(None));
        assert_eq!(changes.slpm, Some(Some(1.5)));
        assert_eq!(changes.first_name, None);
        assert_eq!(changes.weight, None);
    }

    #[test]
    fn update_ignores_null_date_of_birth_and_stance() {
        let input: UpdateFighter =
            serde_json::from_value(json!({"dateOfBirth": null, "stance": null})).unwrap();
        assert_eq!(input.normalize().unwrap(), FighterChanges::default());
    }

    #[test]
    fn update_rejects_null_record_fields() {
        for field in ["wins", "losses", "draws", "noContests", "currentChampion"] {
            let result = serde_json::from_value::<UpdateFighter>(json!({ field: null }));
            assert!(result.is_err(), "{field} = null should not deserialize");
        }
    }

    #[test]
    fn update_rejects_clearing_both_names() {
        let input: UpdateFighter =
            serde_json::from_value(json!({"firstName": null, "lastName": null})).unwrap();
        assert!(matches!(input.normalize(), Err(CoreError::Validation(_))));

        let input: UpdateFighter = serde_json::from_value(json!({"firstName": null})).unwrap();
        assert_eq!(input.normalize().unwrap().first_name, Some(None));
    }

    #[test]
    fn update_range_rules_apply_inside_present_values() {
        let input: UpdateFighter = serde_json::from_value(json!({"height": 0})).unwrap();
        assert!(input.normalize().is_err());

        let input: UpdateFighter = serde_json::from_value(json!({"tdDef": -0.5})).unwrap();
        assert!(input.normalize().is_err());
    }

    // -- views --

    #[test]
    fn detailed_view_omits_empty_groups() {
        let view = FighterReadDetailed::from(&sample_fighter());
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["names"], json!({"firstName": "Jon", "lastName": "Jones"}));
        assert_eq!(
            json["record"],
            json!({"wins": 0, "losses": 0, "draws": 0, "noContests": 0})
        );
        assert_eq!(json["currentChampion"], false);
        let obj = json.as_object().unwrap();
        for absent in ["physicalFeatures", "careerStats", "stance", "dateOfBirth"] {
            assert!(!obj.contains_key(absent), "{absent} should be omitted");
        }
    }

    #[test]
    fn physical_features_present_when_any_member_set() {
        let mut f = sample_fighter();
        f.height = Some(76);
        let json = serde_json::to_value(FighterReadDetailed::from(&f)).unwrap();
        assert_eq!(
            json["physicalFeatures"],
            json!({"height": 76, "weight": null, "reach": null})
        );
    }

    #[test]
    fn career_stats_absent_when_all_unset() {
        assert_eq!(FighterCareerStats::from_fighter(&sample_fighter()), None);
    }

    #[test]
    fn career_stats_absent_when_one_unset() {
        let mut f = with_all_stats(sample_fighter());
        f.sapm = None;
        assert_eq!(FighterCareerStats::from_fighter(&f), None);
        assert_eq!(FighterReadDetailed::from(&f).career_stats, None);
    }

    #[test]
    fn career_stats_present_with_exact_values() {
        let f = with_all_stats(sample_fighter());
        let json = serde_json::to_value(FighterReadDetailed::from(&f)).unwrap();
        assert_eq!(
            json["careerStats"],
            json!({
                "slpm": 4.29,
                "strAcc": 0.58,
                "sapm": 2.22,
                "strDef": 0.64,
                "tdAvg": 1.93,
                "tdAcc": 0.45,
                "tdDef": 0.95,
                "subAvg": 0.5,
            })
        );
    }

    #[test]
    fn detailed_view_formats_date_and_stance() {
        let mut f = sample_fighter();
        f.date_of_birth = NaiveDate::from_ymd_opt(1987, 7, 19);
        f.stance_id = Some(1);
        f.stance = Some("Orthodox".into());
        let json = serde_json::to_value(FighterReadDetailed::from(&f)).unwrap();
        assert_eq!(json["dateOfBirth"], "1987-07-19");
        assert_eq!(json["stance"], "Orthodox");
    }

    #[test]
    fn simple_view_after_create_carries_created_at_only() {
        let json = serde_json::to_value(FighterReadSimple::created(&sample_fighter())).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("createdAt"));
        assert!(!obj.contains_key("updatedAt"));
        assert_eq!(json["fullName"], "Jon Jones");
        assert_eq!(json["names"]["firstName"], "Jon");
    }

    #[test]
    fn simple_view_after_update_carries_updated_at_only() {
        let json = serde_json::to_value(FighterReadSimple::updated(&sample_fighter())).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("updatedAt"));
        assert!(!obj.contains_key("createdAt"));
    }
}
