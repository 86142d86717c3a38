use crate::types::scoring::Score;

pub fn ratio(a: f64, b: f64) -> Score {
    if b > 0.0 {
        a / b
    } else {
        0.0
    }
}

pub fn saturate(x: f64, max: f64) -> Score {
    ratio(x, max).min(1.0)
}

/// Compress an unbounded count into [0, 1]; reaches 1.0 at n = 99.
pub fn log_volume(n: u64) -> Score {
    ((n as f64 + 1.0).log10() / 2.0).min(1.0)
}
