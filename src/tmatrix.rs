//! Unitarized scattering amplitude: T = [I − iKρ]⁻¹ K.
//!
//! Multiplying the K-matrix by the diagonal of channel phase-space factors
//! and inverting the denominator
//!
//!   D(m) = I − i·K(m)·diag(ρ₁(m), …, ρ_N(m))
//!
//! enforces two-body unitarity channel by channel. The inversion is the one
//! genuinely nontrivial numerical step in the whole crate; a zero of
//! det D(m) is a true resonance pole of the amplitude and surfaces as
//! [`KmatError::SingularDenominator`] instead of being clamped.

use num_complex::Complex64;
use smallvec::SmallVec;

use crate::channel::Channel;
use crate::cmatrix::CMatrix;
use crate::error::KmatError;
use crate::kmatrix::KMatrix;
use crate::phase_space::rho;

/// A K-matrix together with its ordered channel list.
///
/// Stateless evaluator: nothing is cached between mass points, so slider-style
/// re-evaluation is just calling [`TMatrix::amplitude`] again.
#[derive(Debug, Clone)]
pub struct TMatrix {
    kmatrix: KMatrix,
    channels: Vec<Channel>,
}

impl TMatrix {
    /// Pair a K-matrix with its channels; the counts must agree.
    pub fn new(kmatrix: KMatrix, channels: Vec<Channel>) -> Result<Self, KmatError> {
        if channels.len() != kmatrix.n_channels() {
            return Err(KmatError::ChannelCountMismatch {
                channels: channels.len(),
                kmatrix: kmatrix.n_channels(),
            });
        }
        Ok(Self { kmatrix, channels })
    }

    /// Number of channels N.
    pub fn n_channels(&self) -> usize {
        self.channels.len()
    }

    /// The underlying K-matrix.
    pub fn kmatrix(&self) -> &KMatrix {
        &self.kmatrix
    }

    /// The ordered channel list.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Phase-space factors of all channels at `m`.
    fn phase_space_diagonal(
        &self,
        m: Complex64,
        phi: f64,
    ) -> Result<SmallVec<[Complex64; 4]>, KmatError> {
        self.channels.iter().map(|ch| rho(ch, m, phi)).collect()
    }

    /// Denominator matrix D(m) = I − i·K(m)·diag(ρ).
    pub fn d_matrix(&self, m: Complex64, phi: f64) -> Result<CMatrix, KmatError> {
        let n = self.n_channels();
        let k = self.kmatrix.evaluate(m);
        let rhos = self.phase_space_diagonal(m, phi)?;
        let mut d = CMatrix::identity(n);
        for i in 0..n {
            for j in 0..n {
                d[(i, j)] -= Complex64::i() * k[(i, j)] * rhos[j];
            }
        }
        Ok(d)
    }

    /// Full scattering amplitude T(m) = D(m)⁻¹·K(m).
    pub fn amplitude(&self, m: Complex64, phi: f64) -> Result<CMatrix, KmatError> {
        let d = self.d_matrix(m, phi)?;
        let k = self.kmatrix.evaluate(m);
        Ok(d.inverse()?.mul(&k))
    }

    /// det D(m) — zeros mark the resonance poles of the amplitude.
    pub fn det_d(&self, m: Complex64, phi: f64) -> Result<Complex64, KmatError> {
        Ok(self.d_matrix(m, phi)?.determinant())
    }
}
