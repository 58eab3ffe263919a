pub struct Math {}
impl Math {
    pub fn round_float_to_n_decimals(number: f64, decimals: i32) -> f64 {
        let multiplier = 10.0_f64.powi(decimals);
        (number * multiplier).round() / multiplier
    }

    /// `part` as a percentage of `whole`, 0 when `whole` is not positive
    pub fn percentage(part: f64, whole: f64) -> f64 {
        if whole <= 0.0 {
            return 0.0;
        }
        part / whole * 100.0
    }

    /// distance in km covered in `minutes`, expressed in km/h
    pub fn speed_kmh(distance: f64, minutes: i64) -> f64 {
        distance / (minutes as f64 / 60.0)
    }
}
