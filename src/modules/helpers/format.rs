/// minutes as `"{h}h {m}m"`, anything not positive is shown as `"0m"`
pub fn format_time(minutes: i64) -> String {
    if minutes <= 0 {
        return "0m".to_string();
    }
    format!("{}h {}m", minutes / 60, minutes % 60)
}

pub fn format_speed(speed: f64) -> String {
    if speed <= 0.0 || speed.is_nan() {
        return "0 km/h".to_string();
    }
    format!("{} km/h", format_number(speed, 2))
}

pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_time() {
        assert_eq!(format_time(255), "4h 15m");
        assert_eq!(format_time(105), "1h 45m");
        assert_eq!(format_time(45), "0h 45m");
        assert_eq!(format_time(0), "0m");
        assert_eq!(format_time(-20), "0m");
    }

    #[test]
    fn formats_speed() {
        assert_eq!(format_speed(10.0), "10.00 km/h");
        assert_eq!(format_speed(9.825714285714286), "9.83 km/h");
        assert_eq!(format_speed(0.0), "0 km/h");
        assert_eq!(format_speed(-1.5), "0 km/h");
    }

    #[test]
    fn formats_number() {
        assert_eq!(format_number(17.195, 1), "17.2");
        assert_eq!(format_number(42.0, 2), "42.00");
        assert_eq!(format_number(3.14159, 0), "3");
    }
}
