use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::modules::calculator::PaceResult;

pub const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// # one persisted race-progress record
#[derive(Clone, Serialize, PartialEq, Deserialize, Debug)]
pub struct Entry {
    pub date: String,
    pub covered_distance: f64,
    pub elapsed_time: i64,
    pub current_speed: f64,
    pub required_speed: f64,
}

impl Entry {
    pub fn from_result(result: &PaceResult, recorded_at: NaiveDateTime) -> Entry {
        Entry {
            date: recorded_at.format(ENTRY_DATE_FORMAT).to_string(),
            covered_distance: result.covered_distance,
            elapsed_time: result.elapsed_time,
            current_speed: result.current_speed,
            required_speed: result.required_speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn copies_result_and_formats_date() {
        let result = PaceResult {
            covered_distance: 30.0,
            elapsed_time: 165,
            target_time: 270,
            current_speed: 10.909,
            required_speed: 6.968,
        };
        let at = NaiveDate::from_ymd_opt(2024, 4, 21)
            .unwrap()
            .and_hms_opt(9, 5, 42)
            .unwrap();

        let entry = Entry::from_result(&result, at);

        assert_eq!(entry.date, "2024-04-21 09:05");
        assert_eq!(entry.covered_distance, 30.0);
        assert_eq!(entry.elapsed_time, 165);
        assert_eq!(entry.current_speed, 10.909);
        assert_eq!(entry.required_speed, 6.968);
    }

    #[test]
    fn serializes_with_snake_case_keys() {
        let entry = Entry {
            date: "2024-04-21 09:05".to_string(),
            covered_distance: 25.0,
            elapsed_time: 150,
            current_speed: 10.0,
            required_speed: 9.5,
        };

        let json = serde_json::to_value(&entry).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();

        assert_eq!(keys.len(), 5);
        assert_eq!(json["elapsed_time"], 150);
        assert_eq!(json["covered_distance"], 25.0);
    }
}
