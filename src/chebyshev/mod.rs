//! # Chebyshev-interpolated ephemerides
//!
//! Bodies without an analytic theory (Pluto, and any minor body added the same way) are stored
//! as a sorted list of [`ChebSegment`] records. Each record covers `[tt_start, tt_end)` and holds
//! `N` Chebyshev coefficients per Cartesian axis, so that
//!
//! ```text
//! p(tt) = Σⱼ cⱼ · Tⱼ(x),   x = 2·(tt − tt_start)/(tt_end − tt_start) − 1  ∈ [−1, 1]
//! ```
//!
//! Positions are evaluated with the Clenshaw recurrence, velocities with the derivative
//! recurrence of the same polynomials. Requests outside the table fail with
//! [`OrreryError::OutOfRange`].

mod pluto_table;

use nalgebra::Vector3;

use crate::orrery_errors::OrreryError;
use crate::time::AstroTime;
use crate::vector::StateVector;

pub(crate) use self::pluto_table::PLUTO_SEGMENTS;

/// One interpolation record: `N` coefficients for each of x, y, z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChebSegment<const N: usize> {
    pub tt_start: f64,
    pub tt_end: f64,
    pub coeffs: [[f64; N]; 3],
}

impl<const N: usize> ChebSegment<N> {
    /// Normalized abscissa of `tt` in this segment.
    fn abscissa(&self, tt: f64) -> f64 {
        2.0 * (tt - self.tt_start) / (self.tt_end - self.tt_start) - 1.0
    }

    /// Position (Clenshaw recurrence) at `tt`.
    pub fn position(&self, tt: f64) -> Vector3<f64> {
        let x = self.abscissa(tt);
        Vector3::from_fn(|axis, _| clenshaw(&self.coeffs[axis], x))
    }

    /// Position and time derivative (per day) at `tt`.
    pub fn state(&self, tt: f64) -> (Vector3<f64>, Vector3<f64>) {
        let x = self.abscissa(tt);
        let scale = 2.0 / (self.tt_end - self.tt_start);
        let mut pos = Vector3::zeros();
        let mut vel = Vector3::zeros();
        for axis in 0..3 {
            let (value, slope) = value_and_slope(&self.coeffs[axis], x);
            pos[axis] = value;
            vel[axis] = slope * scale;
        }
        (pos, vel)
    }
}

fn clenshaw(coeffs: &[f64], x: f64) -> f64 {
    let Some((&c0, rest)) = coeffs.split_first() else {
        return 0.0;
    };
    let (b1, b2) = rest
        .iter()
        .rev()
        .fold((0.0, 0.0), |(b1, b2), &c| (2.0 * x * b1 - b2 + c, b1));
    c0 + x * b1 - b2
}

/// Series value and derivative with respect to `x`, by forward recurrence on Tⱼ and Tⱼ'.
fn value_and_slope(coeffs: &[f64], x: f64) -> (f64, f64) {
    let (mut t_prev, mut t_cur) = (1.0, x);
    let (mut d_prev, mut d_cur) = (0.0, 1.0);
    let mut value = coeffs.first().copied().unwrap_or(0.0);
    let mut slope = 0.0;
    for &c in coeffs.iter().skip(1) {
        value += c * t_cur;
        slope += c * d_cur;
        let t_next = 2.0 * x * t_cur - t_prev;
        let d_next = 2.0 * t_cur + 2.0 * x * d_cur - d_prev;
        (t_prev, t_cur) = (t_cur, t_next);
        (d_prev, d_cur) = (d_cur, d_next);
    }
    (value, slope)
}

/// Find the segment covering `tt` by binary search.
fn covering_segment<const N: usize>(
    segments: &[ChebSegment<N>],
    tt: f64,
) -> Result<&ChebSegment<N>, OrreryError> {
    let idx = segments.partition_point(|seg| seg.tt_end <= tt);
    match segments.get(idx) {
        Some(seg) if seg.tt_start <= tt => Ok(seg),
        _ => Err(OrreryError::OutOfRange { tt }),
    }
}

/// Evaluate a segment table at `time`.
///
/// Returns
/// --------
/// * The state in the table's frame and units, or [`OrreryError::OutOfRange`] when no segment
///   covers `time.tt()`.
pub fn cheb_state<const N: usize>(
    segments: &[ChebSegment<N>],
    time: &AstroTime,
) -> Result<StateVector, OrreryError> {
    let seg = covering_segment(segments, time.tt())?;
    let (pos, vel) = seg.state(time.tt());
    Ok(StateVector::new(pos, vel, *time))
}

/// Heliocentric EQJ state of Pluto.
pub fn pluto_helio_state(time: &AstroTime) -> Result<StateVector, OrreryError> {
    cheb_state(&PLUTO_SEGMENTS, time)
}

#[cfg(test)]
mod chebyshev_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn line_segment() -> ChebSegment<3> {
        // x(tt) = 1 + 2·s, y = s², z = 0 on [0, 10] with s the normalized abscissa
        ChebSegment {
            tt_start: 0.0,
            tt_end: 10.0,
            coeffs: [[1.0, 2.0, 0.0], [0.5, 0.0, 0.5], [0.0, 0.0, 0.0]],
        }
    }

    #[test]
    fn test_clenshaw_matches_direct_sum() {
        let seg = line_segment();
        let p = seg.position(7.5);
        let s = 0.5;
        assert_abs_diff_eq!(p.x, 1.0 + 2.0 * s, epsilon = 1e-15);
        assert_abs_diff_eq!(p.y, s * s, epsilon = 1e-15);
        let (pos, vel) = seg.state(7.5);
        assert_abs_diff_eq!(pos, p, epsilon = 1e-15);
        // ds/dtt = 0.2
        assert_abs_diff_eq!(vel.x, 2.0 * 0.2, epsilon = 1e-15);
        assert_abs_diff_eq!(vel.y, 2.0 * s * 0.2, epsilon = 1e-15);
    }

    #[test]
    fn test_table_is_contiguous() {
        assert!(PLUTO_SEGMENTS
            .windows(2)
            .all(|w| w[0].tt_end == w[1].tt_start));
    }

    #[test]
    fn test_out_of_range() {
        let time = AstroTime::from_tt(PLUTO_SEGMENTS[0].tt_start - 1.0);
        assert_eq!(
            pluto_helio_state(&time),
            Err(OrreryError::OutOfRange { tt: time.tt() })
        );
        let last = PLUTO_SEGMENTS[PLUTO_SEGMENTS.len() - 1].tt_end;
        assert!(pluto_helio_state(&AstroTime::from_tt(last)).is_err());
    }

    #[test]
    fn test_pluto_position_near_j2000() {
        let state = pluto_helio_state(&AstroTime::from_ut(0.0)).unwrap();
        let expected = Vector3::new(-9.875_367_3, -27.978_927_1, -5.753_712_8);
        assert!((state.pos - expected).norm() < 0.05);
        // Pluto moves a few thousandths of an AU per day
        assert!((0.001..0.01).contains(&state.vel.norm()));
    }

    #[test]
    fn test_pluto_continuous_across_segments() {
        let boundary = PLUTO_SEGMENTS[30].tt_start;
        let left = PLUTO_SEGMENTS[29].position(boundary);
        let right = PLUTO_SEGMENTS[30].position(boundary);
        assert!((left - right).norm() < 1e-9);
    }
}
