//! Envelope — linear trapezoid gain shaping note attack and release.

/// Gain for sample `i` of a `len`-sample span: linear ramp up over the
/// first `attack` samples, linear ramp down over the final `release`
/// samples, unity in between. The release takes precedence where the
/// two regions overlap.
///
/// `release` may exceed `len` (a truncated final note keeps the full
/// ramp slope and simply starts partway down it).
pub fn trapezoid(i: usize, len: usize, attack: usize, release: usize) -> f64 {
    debug_assert!(i < len);

    if release > 0 && i + release >= len {
        if release == 1 {
            return 1.0;
        }
        let k = i + release - len;
        return 1.0 - k as f64 / (release - 1) as f64;
    }
    if attack > 0 && i < attack {
        if attack == 1 {
            return 0.0;
        }
        return i as f64 / (attack - 1) as f64;
    }
    1.0
}
