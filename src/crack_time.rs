// 10 billion guesses per second, an offline attack on a fast hash
pub const CRACK_SPEED_PER_SECOND: f64 = 10_000_000_000.0;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;
const CENTURY: f64 = 3_153_600_000.0;

pub fn crack_time(bits: f64, guesses_per_second: f64) -> String {
    // 2^bits overflows to infinity for large entropies, which lands in the
    // centuries bucket like every other huge value
    format_duration(2f64.powf(bits) / guesses_per_second)
}

pub fn format_duration(seconds: f64) -> String {
    if seconds < 1.0 {
        "Instantly".to_string()
    } else if seconds < MINUTE {
        format!("{} seconds", seconds.round() as u64)
    } else if seconds < HOUR {
        format!("{} minutes", (seconds / MINUTE).round() as u64)
    } else if seconds < DAY {
        format!("{} hours", (seconds / HOUR).round() as u64)
    } else if seconds < YEAR {
        format!("{} days", (seconds / DAY).round() as u64)
    } else if seconds < CENTURY {
        format!("{} years", (seconds / YEAR).round() as u64)
    } else {
        "Centuries".to_string()
    }
}
