//! Progress to geometry
//!
//! Maps `(progress, phase)` onto a single length, shared by every
//! visualizer: inhale grows from `min` to `max`, hold stays at `max`,
//! exhale shrinks back to `min`, and keep stays at `min`.

use pneuma_core::settings::Phase;

/// Visual size for `progress` through `phase`, in `min..=max`
pub fn visual_extent(progress: f32, phase: Phase, min: u32, max: u32) -> u32 {
    let progress = progress.clamp(0.0, 1.0);
    let extent = match phase {
        Phase::In => (progress * max as f32) as u32,
        Phase::Hold => max,
        Phase::Out => ((1.0 - progress) * max as f32) as u32,
        Phase::Stay => min,
    };
    extent.clamp(min, max.max(min))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_phase_endpoints() {
        assert_eq!(visual_extent(0.0, Phase::In, 5, 120), 5);
        assert_eq!(visual_extent(1.0, Phase::In, 5, 120), 120);
        assert_eq!(visual_extent(0.5, Phase::In, 5, 120), 60);
        assert_eq!(visual_extent(0.3, Phase::Hold, 5, 120), 120);
        assert_eq!(visual_extent(0.0, Phase::Out, 5, 120), 120);
        assert_eq!(visual_extent(1.0, Phase::Out, 5, 120), 5);
        assert_eq!(visual_extent(0.7, Phase::Stay, 5, 120), 5);
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(visual_extent(-1.0, Phase::In, 1, 240), 1);
        assert_eq!(visual_extent(3.0, Phase::In, 1, 240), 240);
    }

    proptest! {
        #[test]
        fn prop_within_bounds(p in 0.0f32..=1.0, min in 0u32..20, max in 20u32..400) {
            for phase in Phase::CYCLE {
                let extent = visual_extent(p, phase, min, max);
                prop_assert!(extent >= min && extent <= max);
            }
        }

        #[test]
        fn prop_inhale_grows_exhale_shrinks(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(visual_extent(lo, Phase::In, 5, 120) <= visual_extent(hi, Phase::In, 5, 120));
            prop_assert!(visual_extent(lo, Phase::Out, 5, 120) >= visual_extent(hi, Phase::Out, 5, 120));
        }
    }
}
