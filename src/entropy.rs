use crate::CharClasses;

// length times log2 of the combined pool size, rounded to two decimals
pub fn entropy(password: &str) -> f64 {
    let len = password.chars().count();
    if len == 0 {
        return 0.0;
    }
    let pool = CharClasses::of(password).pool_size();
    if pool == 0 {
        // unreachable with the catch-all special class, guarded anyway
        return 0.0;
    }
    round2(len as f64 * f64::from(pool).log2())
}

fn round2(bits: f64) -> f64 {
    (bits * 100.0).round() / 100.0
}
