//! Derived observables: widths, lineshape comparisons, cross sections.
//!
//! Thin numerical post-processing on top of the amplitude machinery:
//!
//! - a first-order width estimate from the couplings, valid for weakly
//!   coupled channels, used to compare the K-matrix lineshape against a
//!   plain relativistic Breit-Wigner;
//! - the rank-1 (Flatté) closed form a single-pole K-matrix must collapse
//!   to, which is also the finite route exactly on the bare pole mass where
//!   the general inversion path divides by zero;
//! - the cross-section proxy |T_ij|²·2Reρ_j·m that the plotting layer draws;
//! - the single-channel phase shift δ = arg(S_jj)/2;
//! - mass-grid scan helpers producing plain records for the plotting layer,
//!   skipping sample points that land on a singularity.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::error::KmatError;
use crate::kmatrix::Pole;
use crate::phase_space::rho;
use crate::production::ProductionAmplitude;
use crate::tmatrix::TMatrix;

/// First-order width estimate Γ₀ = Σ_j g_j²·Re ρ_j(M) / M.
///
/// Perturbative: good when every channel is weakly coupled, which is
/// exactly the regime where the K-matrix lineshape approaches a
/// Breit-Wigner of this width.
pub fn width_from_couplings(
    pole: &Pole,
    channels: &[Channel],
    phi: f64,
) -> Result<f64, KmatError> {
    if channels.len() != pole.couplings.len() {
        return Err(KmatError::ChannelCountMismatch {
            channels: channels.len(),
            kmatrix: pole.couplings.len(),
        });
    }
    let m = Complex64::new(pole.mass, 0.0);
    let mut sum = 0.0;
    for (&g, ch) in pole.couplings.iter().zip(channels) {
        sum += g * g * rho(ch, m, phi)?.re;
    }
    Ok(sum / pole.mass)
}

/// Relativistic Breit-Wigner M·Γ / (M² − m² − i·M·Γ) for lineshape comparison.
pub fn breit_wigner(mass: f64, width: f64, m: Complex64) -> Complex64 {
    Complex64::new(mass * width, 0.0)
        / (Complex64::new(mass * mass, 0.0) - m * m - Complex64::i() * mass * width)
}

/// Rank-1 closed form: T_ij = g_i·g_j / (M² − m² − i·Σ_k g_k²·ρ_k(m)).
///
/// The exact value of the general inversion path for a single pole with
/// zero background; unlike that path it stays finite at m = M, where the
/// real part of the denominator vanishes and only −iΣg²ρ survives.
pub fn flatte(
    pole: &Pole,
    channels: &[Channel],
    i: usize,
    j: usize,
    m: Complex64,
    phi: f64,
) -> Result<Complex64, KmatError> {
    let n = channels.len();
    if n != pole.couplings.len() {
        return Err(KmatError::ChannelCountMismatch {
            channels: n,
            kmatrix: pole.couplings.len(),
        });
    }
    for index in [i, j] {
        if index >= n {
            return Err(KmatError::ChannelIndexOutOfRange { index, channels: n });
        }
    }
    let mut denom = Complex64::new(pole.mass * pole.mass, 0.0) - m * m;
    for (&g, ch) in pole.couplings.iter().zip(channels) {
        denom -= Complex64::i() * g * g * rho(ch, m, phi)?;
    }
    Ok(Complex64::new(pole.couplings[i] * pole.couplings[j], 0.0) / denom)
}

/// Cross-section proxy |T_ij(m)|² · 2·Re ρ_j(m) · m.
///
/// The open-channel phase space enters as 2·Re ρ, which the branch
/// convention makes exactly zero below threshold — no clamp is applied, so
/// a branch-cut regression would show up as a spurious sub-threshold signal.
pub fn cross_section(
    tmatrix: &TMatrix,
    i: usize,
    j: usize,
    m: f64,
    phi: f64,
) -> Result<f64, KmatError> {
    let n = tmatrix.n_channels();
    for index in [i, j] {
        if index >= n {
            return Err(KmatError::ChannelIndexOutOfRange { index, channels: n });
        }
    }
    let mc = Complex64::new(m, 0.0);
    let amp = tmatrix.amplitude(mc, phi)?;
    let r = rho(&tmatrix.channels()[j], mc, phi)?;
    Ok(amp[(i, j)].norm_sqr() * 2.0 * r.re * m)
}

/// Production analogue |A_j(m)|² · 2·Re ρ_j(m) · m.
pub fn production_cross_section(
    production: &ProductionAmplitude<'_>,
    j: usize,
    m: f64,
    phi: f64,
) -> Result<f64, KmatError> {
    let tmatrix = production.tmatrix();
    let n = tmatrix.n_channels();
    if j >= n {
        return Err(KmatError::ChannelIndexOutOfRange {
            index: j,
            channels: n,
        });
    }
    let mc = Complex64::new(m, 0.0);
    let amp = production.amplitude(mc, phi)?;
    let r = rho(&tmatrix.channels()[j], mc, phi)?;
    Ok(amp[j].norm_sqr() * 2.0 * r.re * m)
}

/// Elastic phase shift δ_j = arg(S_jj)/2 with S_jj = 1 + 2i·ρ_j·T_jj.
pub fn phase_shift(
    tmatrix: &TMatrix,
    channel: usize,
    m: f64,
    phi: f64,
) -> Result<f64, KmatError> {
    let n = tmatrix.n_channels();
    if channel >= n {
        return Err(KmatError::ChannelIndexOutOfRange {
            index: channel,
            channels: n,
        });
    }
    let mc = Complex64::new(m, 0.0);
    let amp = tmatrix.amplitude(mc, phi)?;
    let r = rho(&tmatrix.channels()[channel], mc, phi)?;
    let s = Complex64::new(1.0, 0.0) + Complex64::i() * 2.0 * r * amp[(channel, channel)];
    Ok(0.5 * s.arg())
}

/// Evenly spaced mass grid over [start, stop], inclusive on both ends.
pub fn mass_grid(start: f64, stop: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start];
    }
    (0..steps)
        .map(|k| start + (stop - start) * k as f64 / (steps - 1) as f64)
        .collect()
}

/// One sample of a real-valued curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossSectionPoint {
    /// Invariant mass of the sample.
    pub mass: f64,
    /// Cross-section proxy at that mass.
    pub value: f64,
}

/// One sample of a complex amplitude (Argand-plot material).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmplitudePoint {
    /// Invariant mass of the sample.
    pub mass: f64,
    /// Complex amplitude at that mass.
    pub value: Complex64,
}

/// Sample |T_ij|²·2Reρ_j·m over a mass grid.
///
/// Grid points whose evaluation fails or lands on a singularity (non-finite
/// value) are dropped — the skip-the-sample policy the point-wise API
/// leaves to its caller.
pub fn scan_cross_section(
    tmatrix: &TMatrix,
    i: usize,
    j: usize,
    grid: &[f64],
    phi: f64,
) -> Vec<CrossSectionPoint> {
    grid.iter()
        .filter_map(|&mass| {
            cross_section(tmatrix, i, j, mass, phi)
                .ok()
                .filter(|v| v.is_finite())
                .map(|value| CrossSectionPoint { mass, value })
        })
        .collect()
}

/// Sample the complex amplitude T_ij over a mass grid.
pub fn scan_amplitude(
    tmatrix: &TMatrix,
    i: usize,
    j: usize,
    grid: &[f64],
    phi: f64,
) -> Vec<AmplitudePoint> {
    grid.iter()
        .filter_map(|&mass| {
            tmatrix
                .amplitude(Complex64::new(mass, 0.0), phi)
                .ok()
                .map(|amp| amp[(i, j)])
                .filter(|v| v.is_finite())
                .map(|value| AmplitudePoint { mass, value })
        })
        .collect()
}

/// Sample the production cross-section proxy for channel `j` over a grid.
pub fn scan_production(
    production: &ProductionAmplitude<'_>,
    j: usize,
    grid: &[f64],
    phi: f64,
) -> Vec<CrossSectionPoint> {
    grid.iter()
        .filter_map(|&mass| {
            production_cross_section(production, j, mass, phi)
                .ok()
                .filter(|v| v.is_finite())
                .map(|value| CrossSectionPoint { mass, value })
        })
        .collect()
}
