/// Rounds `value` to `n_decimals` decimal places, halfway cases away from zero.
pub fn round_to_decimals(value: f32, n_decimals: u32) -> f32 {
    let factor = 10f64.powi(n_decimals as i32);
    ((value as f64 * factor).round() / factor) as f32
}
