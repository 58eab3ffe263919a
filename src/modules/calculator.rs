use serde::{Deserialize, Serialize};

use crate::errors::{CustomResult, Error};
use crate::modules::helpers::math::Math;

/// marathon distance in km
pub const RACE_DISTANCE: f64 = 42.195;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceTime {
    pub hours: i64,
    pub minutes: i64,
}

impl RaceTime {
    pub fn new(hours: i64, minutes: i64) -> RaceTime {
        RaceTime { hours, minutes }
    }

    /// `None` when the total does not fit
    pub fn total_minutes(&self) -> Option<i64> {
        self.hours.checked_mul(60)?.checked_add(self.minutes)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaceInput {
    pub covered_distance: f64,
    pub elapsed: RaceTime,
    pub target: RaceTime,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaceResult {
    pub covered_distance: f64,
    pub elapsed_time: i64,
    pub target_time: i64,
    pub current_speed: f64,
    pub required_speed: f64,
}

impl PaceResult {
    pub fn remaining_distance(&self) -> f64 {
        RACE_DISTANCE - self.covered_distance
    }

    pub fn remaining_time(&self) -> i64 {
        self.target_time - self.elapsed_time
    }

    pub fn progress_percent(&self) -> f64 {
        Math::percentage(self.covered_distance, RACE_DISTANCE)
    }
}

pub fn clamp_distance(distance: f64) -> f64 {
    distance.clamp(0.0, RACE_DISTANCE)
}

/// # pace calculation
/// computes the average speed so far and the average speed needed over the
/// rest of the race to finish within the target time.
///
/// the covered distance is clamped to `[0, RACE_DISTANCE]`. fails with
/// `InvalidTimeValuesError` when either time is not positive or the elapsed
/// time is not below the target.
pub fn calculate(input: &PaceInput) -> CustomResult<PaceResult> {
    let covered_distance = clamp_distance(input.covered_distance);

    let (elapsed_time, target_time) =
        match (input.elapsed.total_minutes(), input.target.total_minutes()) {
            (Some(elapsed), Some(target)) => (elapsed, target),
            _ => return Err(Error::InvalidTimeValuesError {}),
        };

    if elapsed_time <= 0 || target_time <= 0 || elapsed_time >= target_time {
        return Err(Error::InvalidTimeValuesError {});
    }

    let current_speed = if covered_distance > 0.0 {
        Math::speed_kmh(covered_distance, elapsed_time)
    } else {
        0.0
    };

    let remaining_distance = RACE_DISTANCE - covered_distance;
    let remaining_time = target_time - elapsed_time;
    let required_speed = if remaining_distance > 0.0 {
        Math::speed_kmh(remaining_distance, remaining_time)
    } else {
        0.0
    };

    Ok(PaceResult {
        covered_distance,
        elapsed_time,
        target_time,
        current_speed,
        required_speed,
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn input(covered: f64, elapsed: (i64, i64), target: (i64, i64)) -> PaceInput {
        PaceInput {
            covered_distance: covered,
            elapsed: RaceTime::new(elapsed.0, elapsed.1),
            target: RaceTime::new(target.0, target.1),
        }
    }

    #[test]
    fn computes_reference_example() {
        let result = calculate(&input(25.0, (2, 30), (4, 15))).unwrap();

        assert_eq!(result.elapsed_time, 150);
        assert_eq!(result.target_time, 255);
        assert!((result.current_speed - 10.0).abs() < 1e-9);
        assert!((result.required_speed - 9.825714).abs() < 1e-4);
        assert!((result.remaining_distance() - 17.195).abs() < 1e-9);
        assert_eq!(result.remaining_time(), 105);
    }

    #[test]
    fn clamps_covered_distance() {
        let below = calculate(&input(-5.0, (1, 0), (4, 0))).unwrap();
        assert_eq!(below.covered_distance, 0.0);
        assert_eq!(below.current_speed, 0.0);

        let above = calculate(&input(100.0, (3, 0), (4, 0))).unwrap();
        assert_eq!(above.covered_distance, RACE_DISTANCE);
        assert_eq!(above.required_speed, 0.0);
    }

    #[test]
    fn rejects_zero_elapsed_time() {
        let err = calculate(&input(10.0, (0, 0), (4, 0))).unwrap_err();
        assert!(matches!(err, Error::InvalidTimeValuesError {}));
        assert_eq!(err.to_string(), "Invalid time values");
    }

    #[test]
    fn rejects_non_positive_target() {
        assert!(calculate(&input(10.0, (0, 30), (0, 0))).is_err());
        assert!(calculate(&input(10.0, (0, 30), (-1, 0))).is_err());
    }

    #[test]
    fn rejects_elapsed_not_below_target() {
        assert!(calculate(&input(10.0, (4, 0), (4, 0))).is_err());
        assert!(calculate(&input(10.0, (4, 30), (4, 0))).is_err());
    }

    #[test]
    fn rejects_overflowing_times() {
        assert!(calculate(&input(10.0, (1, 0), (i64::MAX, 0))).is_err());
    }

    #[test]
    fn minutes_may_carry_into_hours() {
        let result = calculate(&input(10.0, (0, 90), (3, 0))).unwrap();
        assert_eq!(result.elapsed_time, 90);
    }

    #[test]
    fn progress_percent_of_half_marathon() {
        let result = calculate(&input(RACE_DISTANCE / 2.0, (1, 0), (4, 0))).unwrap();
        assert!((result.progress_percent() - 50.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn speeds_are_never_negative(
            covered in -100.0f64..100.0,
            elapsed in 1i64..600,
            extra in 1i64..600,
        ) {
            let result = calculate(&input(covered, (0, elapsed), (0, elapsed + extra))).unwrap();

            prop_assert!(result.current_speed >= 0.0);
            prop_assert!(result.required_speed >= 0.0);
            prop_assert!(result.covered_distance >= 0.0);
            prop_assert!(result.covered_distance <= RACE_DISTANCE);
        }

        #[test]
        fn inverted_times_always_fail(
            covered in 0.0f64..RACE_DISTANCE,
            target in 1i64..600,
            extra in 0i64..600,
        ) {
            prop_assert!(calculate(&input(covered, (0, target + extra), (0, target))).is_err());
        }
    }
}
