use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::{DriverName, Race, RaceId, RaceStatus, Tip, Weather, TOP_N};

// Identifier fields arrive as JSON strings or numbers depending on the
// storage source.
fn id_string(value: &Value) -> Option<RaceId> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn string_field(record: &Value, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

fn enum_field<T: std::str::FromStr + Default>(record: &Value, key: &str) -> T {
    record
        .get(key)
        .and_then(Value::as_str)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_default()
}

fn date_field(record: &Value, key: &str) -> Option<NaiveDate> {
    record
        .get(key)
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
}

fn timestamp_field(record: &Value, key: &str) -> Option<DateTime<Utc>> {
    record
        .get(key)
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

// Non-array input degrades to an empty list so downstream code stays total.
fn driver_list(value: Option<&Value>) -> Vec<DriverName> {
    let Some(Value::Array(entries)) = value else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Drops blank entries and caps a tipped order at the ten scoreable
/// positions.
pub fn clean_order(value: Option<&Value>) -> Vec<DriverName> {
    let mut order = driver_list(value);
    order.truncate(TOP_N);
    order
}

/// Canonicalizes a race-like record from any source. `name` and `track`
/// fall back to each other, unknown status or weather degrades to the
/// default, a missing or malformed results list becomes empty. Returns
/// `None` when the record is not an object with a usable id.
pub fn normalize_race(record: &Value) -> Option<Race> {
    if !record.is_object() {
        return None;
    }
    let id = record.get("id").and_then(id_string)?;

    let name = string_field(record, "name");
    let track = string_field(record, "track");

    Some(Race {
        id,
        name: name
            .clone()
            .or_else(|| track.clone())
            .unwrap_or_else(|| "Unnamed Race".to_owned()),
        track: track
            .or(name)
            .unwrap_or_else(|| "Unknown Track".to_owned()),
        date: date_field(record, "date"),
        weather: enum_field::<Weather>(record, "weather"),
        tyres: string_field(record, "tyres"),
        status: enum_field::<RaceStatus>(record, "status"),
        results_order: driver_list(
            record
                .get("resultsOrder")
                .or_else(|| record.get("results_order")),
        ),
    })
}

pub fn normalize_races(records: &Value) -> Vec<Race> {
    let Value::Array(entries) = records else {
        return Vec::new();
    };
    entries.iter().filter_map(normalize_race).collect()
}

pub fn normalize_tip(record: &Value) -> Option<Tip> {
    if !record.is_object() {
        return None;
    }
    let race_id = record
        .get("raceId")
        .or_else(|| record.get("race_id"))
        .and_then(id_string)?;

    Some(Tip {
        race_id,
        order: clean_order(record.get("order")),
        updated_at: timestamp_field(record, "updatedAt")
            .or_else(|| timestamp_field(record, "updated_at")),
    })
}

/// Canonicalizes a tip collection into a map keyed by race id. Accepts
/// either an array of tip records or a map of race id to tip, where the
/// tip may be a record or a bare order array.
pub fn normalize_tips(records: &Value) -> HashMap<RaceId, Tip> {
    match records {
        Value::Array(entries) => entries
            .iter()
            .filter_map(normalize_tip)
            .map(|tip| (tip.race_id.clone(), tip))
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(race_id, value)| {
                let order = match value {
                    Value::Array(_) => clean_order(Some(value)),
                    _ => clean_order(value.get("order")),
                };
                let tip = Tip {
                    race_id: race_id.clone(),
                    order,
                    updated_at: timestamp_field(value, "updatedAt"),
                };
                (race_id.clone(), tip)
            })
            .collect(),
        _ => HashMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn race_name_and_track_fall_back_to_each_other() {
        let race = normalize_race(&json!({"id": 1, "track": "Monza"})).unwrap();
        assert_eq!(race.name, "Monza");
        assert_eq!(race.track, "Monza");

        let race = normalize_race(&json!({"id": 1, "name": "Italian GP"})).unwrap();
        assert_eq!(race.track, "Italian GP");
    }

    #[test]
    fn numeric_ids_are_coerced_to_strings() {
        let race = normalize_race(&json!({"id": 42, "track": "Spa"})).unwrap();
        assert_eq!(race.id, "42");

        let tip = normalize_tip(&json!({"raceId": 42, "order": ["a"]})).unwrap();
        assert_eq!(tip.race_id, "42");
    }

    #[test]
    fn malformed_results_order_degrades_to_empty() {
        let race =
            normalize_race(&json!({"id": 1, "track": "Spa", "resultsOrder": "not-a-list"}))
                .unwrap();
        assert!(race.results_order.is_empty());

        let race = normalize_race(&json!({"id": 1, "track": "Spa"})).unwrap();
        assert!(race.results_order.is_empty());
    }

    #[test]
    fn unknown_status_and_weather_degrade_to_defaults() {
        let race = normalize_race(
            &json!({"id": 1, "track": "Spa", "status": "archived", "weather": "foggy"}),
        )
        .unwrap();
        assert_eq!(race.status, RaceStatus::Open);
        assert_eq!(race.weather, Weather::Sunny);

        let race =
            normalize_race(&json!({"id": 1, "track": "Spa", "status": "CLOSED"})).unwrap();
        assert_eq!(race.status, RaceStatus::Closed);
    }

    #[test]
    fn tip_order_is_cleaned_and_capped() {
        let order: Vec<Value> = (0..12).map(|i| json!(format!("driver-{i}"))).collect();
        let tip = normalize_tip(&json!({"raceId": "1", "order": order})).unwrap();
        assert_eq!(tip.order.len(), TOP_N);

        let tip = normalize_tip(&json!({"raceId": "1", "order": ["a", "", "  ", "b"]})).unwrap();
        assert_eq!(tip.order, vec!["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn tips_normalize_from_array_and_map_shapes() {
        let from_array = normalize_tips(&json!([
            {"raceId": 1, "order": ["a", "b"]},
            {"raceId": 2, "order": ["c"]},
        ]));
        assert_eq!(from_array.len(), 2);
        assert_eq!(from_array["1"].order, vec!["a".to_owned(), "b".to_owned()]);

        let from_map = normalize_tips(&json!({
            "1": {"order": ["a", "b"]},
            "2": ["c"],
        }));
        assert_eq!(from_map["1"].order, from_array["1"].order);
        assert_eq!(from_map["2"].order, vec!["c".to_owned()]);

        assert!(normalize_tips(&json!("garbage")).is_empty());
    }

    #[test]
    fn records_without_ids_are_rejected() {
        assert!(normalize_race(&json!({"track": "Spa"})).is_none());
        assert!(normalize_race(&json!(null)).is_none());
        assert!(normalize_tip(&json!({"order": ["a"]})).is_none());
    }
}
