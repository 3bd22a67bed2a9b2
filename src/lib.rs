//! # kmatrix-sim
//!
//! Numerical core of an interactive K-matrix teaching notebook: multichannel
//! scattering and production amplitudes evaluated from a handful of
//! closed-form formulas plus one small complex matrix inversion.
//!
//! ## Physics
//!
//! The interaction between N two-body channels is parametrized by a real
//! symmetric K-matrix built from resonance poles and a smooth background,
//!
//!   K(m) = Σ_v g⃗_v·g⃗_vᵀ / (M_v² − m²) + B
//!
//! and unitarized by the phase-space denominator
//!
//!   T(m) = [I − i·K(m)·diag(ρ(m))]⁻¹ · K(m)
//!
//! where ρ is the analytic two-body phase-space factor with an explicit
//! branch-cut angle φ (default −π/2) selecting the Riemann sheet. Production
//! amplitudes reuse the same denominator with a vector numerator, so their
//! per-pole pieces decompose additively for interference plots.
//!
//! Everything is a pure function of (parameters, mass point): the sliders of
//! the original notebook become reconstruction with new parameter values,
//! and each plotted curve is a plain sweep over a mass grid.
//!
//! ## Usage
//!
//! ```
//! use kmatrix_sim::prelude::*;
//!
//! // a0(980)-like single pole coupled to two channels.
//! let channels = vec![Channel::s_wave(0.548, 0.135), Channel::s_wave(0.493, 0.497)];
//! let kmatrix = KMatrix::new(vec![Pole::new(0.98, vec![0.6, 1.2])]).unwrap();
//! let tmatrix = TMatrix::new(kmatrix, channels).unwrap();
//!
//! let t = tmatrix.amplitude(Complex64::new(1.05, 0.0), DEFAULT_PHI).unwrap();
//! assert!(t[(0, 0)].is_finite());
//! ```

pub mod channel;
pub mod cmatrix;
pub mod error;
pub mod kmatrix;
pub mod observables;
pub mod phase_space;
pub mod production;
pub mod tmatrix;

pub mod prelude {
    pub use crate::channel::Channel;
    pub use crate::cmatrix::CMatrix;
    pub use crate::error::KmatError;
    pub use crate::kmatrix::{KMatrix, Pole};
    pub use crate::observables::{
        breit_wigner, cross_section, flatte, mass_grid, phase_shift, production_cross_section,
        scan_amplitude, scan_cross_section, scan_production, width_from_couplings,
        AmplitudePoint, CrossSectionPoint,
    };
    pub use crate::phase_space::{rho, DEFAULT_PHI};
    pub use crate::production::ProductionAmplitude;
    pub use crate::tmatrix::TMatrix;

    pub use num_complex::Complex64;
}
