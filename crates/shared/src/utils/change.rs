use crate::domain::responses::{ChangeDelta, ChangeDirection};

/// Sentinel shown when the previous period was zero and no finite
/// percentage exists.
const UNDEFINED_MAGNITUDE: &str = "---";

/// Month-over-month percentage change between two period values.
///
/// Total over every input pair: a zero previous period is special-cased
/// (zero-to-zero is reported as a flat increase, anything-from-zero as the
/// undefined sentinel), everything else is `|current - previous| / previous`
/// formatted to one decimal place.
pub fn compute_change(current: f64, previous: f64) -> ChangeDelta {
    if previous == 0.0 {
        if current == 0.0 {
            return ChangeDelta {
                magnitude: "0%".to_string(),
                direction: ChangeDirection::Increase,
            };
        }

        return ChangeDelta {
            magnitude: UNDEFINED_MAGNITUDE.to_string(),
            direction: ChangeDirection::Increase,
        };
    }

    let percentage = ((current - previous) / previous).abs() * 100.0;
    let direction = if current >= previous {
        ChangeDirection::Increase
    } else {
        ChangeDirection::Decrease
    };

    ChangeDelta {
        magnitude: format!("{percentage:.1}%"),
        direction,
    }
}
