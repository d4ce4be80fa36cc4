//! Phase progress

/// Fraction of a phase completed, in `0.0..=1.0`
///
/// Returns exactly `1.0` once `elapsed_ms` reaches `duration_ms`, so the
/// caller can use `>= 1.0` as the end-of-phase test. A zero-length phase
/// is complete immediately.
pub fn progress(elapsed_ms: u64, duration_ms: u32) -> f32 {
    if elapsed_ms >= duration_ms as u64 {
        return 1.0;
    }
    (elapsed_ms as f32 / duration_ms as f32).clamp(0.0, 1.0)
}
