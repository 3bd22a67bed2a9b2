//! Analytic two-body phase-space factor ρ.
//!
//! For an S-wave channel with masses m₁, m₂ the factor is
//!
//!   ρ(m) = √(e^{iφ}·(m − (m₁+m₂))) · e^{−iφ/2} · √(m + (m₁+m₂))
//!          · √(m² − (m₁−m₂)²) / m²
//!
//! The three square roots are kept separate on purpose: each principal root
//! contributes its own half-plane cut, and their product places the overall
//! branch cut along the ray selected by φ. With the default φ = −π/2 the
//! factor is purely imaginary for real masses below threshold and real
//! positive above — the convention used throughout the hadron-physics
//! literature to reach unphysical Riemann sheets. Collapsing the roots into
//! one √ of the product would silently pick a different sheet.

use num_complex::Complex64;
use std::f64::consts::FRAC_PI_2;

use crate::channel::Channel;
use crate::error::KmatError;

/// Branch-cut angle used when no explicit φ is requested.
pub const DEFAULT_PHI: f64 = -FRAC_PI_2;

/// Two-body phase-space factor ρ(m) with branch-cut angle `phi`.
///
/// Fails with [`KmatError::UnsupportedAngularMomentum`] for any channel with
/// `l != 0`; there is deliberately no fallback to the S-wave formula.
pub fn rho(channel: &Channel, m: Complex64, phi: f64) -> Result<Complex64, KmatError> {
    if channel.l() != 0 {
        return Err(KmatError::UnsupportedAngularMomentum { l: channel.l() });
    }

    let m_sum = channel.m1() + channel.m2();
    let m_diff = channel.m1() - channel.m2();

    // Evaluation order fixes the Riemann sheet; do not reorder.
    let cut_root = (Complex64::from_polar(1.0, phi) * (m - m_sum)).sqrt();
    let cut_unwind = Complex64::from_polar(1.0, -phi / 2.0);
    let sum_root = (m + m_sum).sqrt();
    let diff_root = (m * m - m_diff * m_diff).sqrt();

    Ok(cut_root * cut_unwind * sum_root * diff_root / (m * m))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_rho_is_purely_imaginary() {
        let ch = Channel::s_wave(1.1, 1.1);
        for m in [0.5, 1.0, 1.7, 2.1] {
            let r = rho(&ch, Complex64::new(m, 0.0), DEFAULT_PHI).unwrap();
            assert!(
                r.re.abs() < 1e-12,
                "Re ρ({}) = {} should vanish below threshold",
                m,
                r.re
            );
            assert!(r.im > 0.0, "Im ρ({}) = {} should be positive", m, r.im);
        }
    }

    #[test]
    fn above_threshold_rho_is_real_positive() {
        let ch = Channel::s_wave(1.1, 1.1);
        for m in [2.3, 3.0, 5.3, 10.0] {
            let r = rho(&ch, Complex64::new(m, 0.0), DEFAULT_PHI).unwrap();
            assert!(r.re > 0.0, "Re ρ({}) = {} should be positive", m, r.re);
            assert!(
                r.im.abs() < 1e-12,
                "Im ρ({}) = {} should vanish above threshold",
                m,
                r.im
            );
        }
    }

    #[test]
    fn rho_vanishes_at_threshold() {
        let ch = Channel::s_wave(0.7, 1.3);
        let r = rho(&ch, ch.threshold(), DEFAULT_PHI).unwrap();
        assert!(r.norm() < 1e-12, "ρ(threshold) = {}", r);
    }

    #[test]
    fn unequal_masses_keep_the_convention() {
        let ch = Channel::s_wave(0.139, 0.547);
        // Between the pseudo-threshold |m1 - m2| and the threshold m1 + m2.
        let r = rho(&ch, Complex64::new(0.6, 0.0), DEFAULT_PHI).unwrap();
        assert!(r.re.abs() < 1e-12);
        // Above threshold.
        let r = rho(&ch, Complex64::new(0.9, 0.0), DEFAULT_PHI).unwrap();
        assert!(r.re > 0.0 && r.im.abs() < 1e-12);
    }

    #[test]
    fn branch_angle_flips_the_sub_threshold_sign() {
        let ch = Channel::s_wave(1.1, 1.1);
        let m = Complex64::new(1.5, 0.0);
        let below = rho(&ch, m, DEFAULT_PHI).unwrap();
        let flipped = rho(&ch, m, FRAC_PI_2).unwrap();
        assert!(below.im > 0.0);
        assert!(flipped.im < 0.0);
        assert!((below.im + flipped.im).abs() < 1e-12);
    }

    #[test]
    fn complex_mass_point_is_finite() {
        let ch = Channel::s_wave(1.1, 1.1);
        let r = rho(&ch, Complex64::new(2.0, 1e-3), DEFAULT_PHI).unwrap();
        assert!(r.is_finite());
        assert!(r.norm() > 0.0);
    }

    #[test]
    fn higher_partial_waves_are_rejected() {
        let ch = Channel::new(Complex64::new(1.0, 0.0), Complex64::new(1.0, 0.0), 2);
        let err = rho(&ch, Complex64::new(3.0, 0.0), DEFAULT_PHI).unwrap_err();
        assert_eq!(err, KmatError::UnsupportedAngularMomentum { l: 2 });
    }
}
