//! Production amplitudes: same denominator, vector numerator.
//!
//! A resonant system produced by an external process (rather than by
//! two-body scattering) is described by the N-component vector
//!
//!   P(m) = α⃗_nonpole + Σ_v α_v·g⃗_v / (M_v² − m²)
//!   A(m) = D(m)⁻¹·P(m)
//!
//! with complex production couplings α_v (one per pole) and α⃗_nonpole (one
//! per channel), and the same unitarization denominator D as the T-matrix.
//! Because the numerator is linear in the couplings and the denominator is
//! shared, the amplitude decomposes exactly into per-pole and background
//! contributions — the projections below are the pieces an interference
//! plot stacks up.

use num_complex::Complex64;
use smallvec::SmallVec;

use crate::error::KmatError;
use crate::tmatrix::TMatrix;

/// Production couplings attached to a borrowed [`TMatrix`].
#[derive(Debug, Clone)]
pub struct ProductionAmplitude<'a> {
    tmatrix: &'a TMatrix,
    alpha_poles: Vec<Complex64>,
    alpha_nonpoles: Vec<Complex64>,
}

/// Which numerator terms a projection keeps.
enum Projection {
    Full,
    SinglePole(usize),
    BackgroundOnly,
}

impl<'a> ProductionAmplitude<'a> {
    /// Attach production couplings to a T-matrix.
    ///
    /// `alpha_poles` must have one entry per K-matrix pole and
    /// `alpha_nonpoles` one entry per channel.
    pub fn new(
        tmatrix: &'a TMatrix,
        alpha_poles: Vec<Complex64>,
        alpha_nonpoles: Vec<Complex64>,
    ) -> Result<Self, KmatError> {
        let n_poles = tmatrix.kmatrix().n_poles();
        if alpha_poles.len() != n_poles {
            return Err(KmatError::ProductionPoleMismatch {
                expected: n_poles,
                found: alpha_poles.len(),
            });
        }
        let n_channels = tmatrix.n_channels();
        if alpha_nonpoles.len() != n_channels {
            return Err(KmatError::ProductionChannelMismatch {
                expected: n_channels,
                found: alpha_nonpoles.len(),
            });
        }
        Ok(Self {
            tmatrix,
            alpha_poles,
            alpha_nonpoles,
        })
    }

    /// The underlying T-matrix.
    pub fn tmatrix(&self) -> &TMatrix {
        self.tmatrix
    }

    /// Per-pole production couplings α_v.
    pub fn alpha_poles(&self) -> &[Complex64] {
        &self.alpha_poles
    }

    /// Per-channel background production couplings.
    pub fn alpha_nonpoles(&self) -> &[Complex64] {
        &self.alpha_nonpoles
    }

    /// Numerator vector P(m) for the requested projection.
    fn numerator(&self, m: Complex64, projection: &Projection) -> SmallVec<[Complex64; 4]> {
        let n = self.tmatrix.n_channels();
        let mut num: SmallVec<[Complex64; 4]> = match projection {
            Projection::SinglePole(_) => SmallVec::from_elem(Complex64::new(0.0, 0.0), n),
            _ => SmallVec::from_slice(&self.alpha_nonpoles),
        };
        let m_sq = m * m;
        for (v, pole) in self.tmatrix.kmatrix().poles().iter().enumerate() {
            let keep = match projection {
                Projection::Full => true,
                Projection::SinglePole(picked) => *picked == v,
                Projection::BackgroundOnly => false,
            };
            if !keep {
                continue;
            }
            let denom = Complex64::new(pole.mass * pole.mass, 0.0) - m_sq;
            for (i, &g) in pole.couplings.iter().enumerate() {
                num[i] += self.alpha_poles[v] * g / denom;
            }
        }
        num
    }

    fn solve(&self, m: Complex64, phi: f64, projection: Projection) -> Result<Vec<Complex64>, KmatError> {
        let d = self.tmatrix.d_matrix(m, phi)?;
        let num = self.numerator(m, &projection);
        Ok(d.inverse()?.mul_vec(&num))
    }

    /// Full production amplitude A(m) = D(m)⁻¹·P(m).
    pub fn amplitude(&self, m: Complex64, phi: f64) -> Result<Vec<Complex64>, KmatError> {
        self.solve(m, phi, Projection::Full)
    }

    /// Contribution of pole `v` alone: all other α's set to zero.
    ///
    /// Pure projection of the numerator — the denominator is untouched, so
    /// the pieces of all poles plus the background sum to the full amplitude.
    pub fn pole_contribution(
        &self,
        v: usize,
        m: Complex64,
        phi: f64,
    ) -> Result<Vec<Complex64>, KmatError> {
        let n_poles = self.alpha_poles.len();
        if v >= n_poles {
            return Err(KmatError::PoleIndexOutOfRange {
                index: v,
                poles: n_poles,
            });
        }
        self.solve(m, phi, Projection::SinglePole(v))
    }

    /// Contribution of the non-pole background couplings alone.
    pub fn background_contribution(
        &self,
        m: Complex64,
        phi: f64,
    ) -> Result<Vec<Complex64>, KmatError> {
        self.solve(m, phi, Projection::BackgroundOnly)
    }
}
