//! K-matrix parametrization: resonance poles plus a smooth background.
//!
//! The interaction between N channels is encoded as
//!
//!   K(m) = Σ_v g⃗_v·g⃗_vᵀ / (M_v² − m²)  +  B
//!
//! where each pole v has a bare mass M_v and one real coupling per channel,
//! and B is a constant real symmetric non-pole block. Every term is an outer
//! product of a real vector with itself, so K(m) is symmetric at any mass by
//! construction. Evaluation is a pure closed-form sum — the unitarization
//! (matrix inversion) lives in [`crate::tmatrix`].

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::cmatrix::CMatrix;
use crate::error::KmatError;

/// A single resonance term: bare mass and one real coupling per channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pole {
    /// Bare pole mass M (GeV).
    pub mass: f64,
    /// Couplings g⃗, ordered like the channel list.
    pub couplings: Vec<f64>,
}

impl Pole {
    /// Pole at `mass` with the given per-channel couplings.
    pub fn new(mass: f64, couplings: Vec<f64>) -> Self {
        Self { mass, couplings }
    }
}

/// Sum of pole terms plus a constant symmetric background.
///
/// The channel count N is fixed by the first pole; every later pole and the
/// background block must agree with it, checked at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct KMatrix {
    poles: Vec<Pole>,
    /// Flat row-major N×N symmetric block, zero when absent.
    background: Vec<f64>,
    n_channels: usize,
}

impl KMatrix {
    /// K-matrix from pole terms only (zero background).
    pub fn new(poles: Vec<Pole>) -> Result<Self, KmatError> {
        let n = Self::check_poles(&poles)?;
        Ok(Self {
            background: vec![0.0; n * n],
            poles,
            n_channels: n,
        })
    }

    /// K-matrix with an explicit non-pole background block.
    ///
    /// `background` is flat row-major N×N and must be symmetric — the
    /// physical K-matrix is real and symmetric, and an asymmetric block
    /// would silently break two-body unitarity downstream.
    pub fn with_background(poles: Vec<Pole>, background: Vec<f64>) -> Result<Self, KmatError> {
        let n = Self::check_poles(&poles)?;
        if background.len() != n * n {
            return Err(KmatError::BackgroundDimensionMismatch {
                expected: n * n,
                found: background.len(),
            });
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if background[i * n + j] != background[j * n + i] {
                    return Err(KmatError::AsymmetricBackground { row: i, col: j });
                }
            }
        }
        Ok(Self {
            poles,
            background,
            n_channels: n,
        })
    }

    fn check_poles(poles: &[Pole]) -> Result<usize, KmatError> {
        let n = poles
            .first()
            .map(|p| p.couplings.len())
            .ok_or(KmatError::EmptyPoleList)?;
        if n == 0 {
            return Err(KmatError::NoChannels);
        }
        for (v, pole) in poles.iter().enumerate().skip(1) {
            if pole.couplings.len() != n {
                return Err(KmatError::CouplingCountMismatch {
                    pole_index: v,
                    expected: n,
                    found: pole.couplings.len(),
                });
            }
        }
        Ok(n)
    }

    /// Number of channels N.
    pub fn n_channels(&self) -> usize {
        self.n_channels
    }

    /// Number of poles V.
    pub fn n_poles(&self) -> usize {
        self.poles.len()
    }

    /// The stored pole terms.
    pub fn poles(&self) -> &[Pole] {
        &self.poles
    }

    /// The flat row-major background block.
    pub fn background(&self) -> &[f64] {
        &self.background
    }

    /// Evaluate K(m) at a complex mass point.
    ///
    /// Defined everywhere except at an exact bare pole mass m² = M_v²,
    /// where the pole term divides by zero. That is the genuine singularity
    /// of the parametrization and is left to propagate as non-finite
    /// entries rather than being guarded.
    pub fn evaluate(&self, m: Complex64) -> CMatrix {
        let n = self.n_channels;
        let mut k = CMatrix::zeros(n);
        let m_sq = m * m;
        for pole in &self.poles {
            let denom = Complex64::new(pole.mass * pole.mass, 0.0) - m_sq;
            for i in 0..n {
                for j in 0..n {
                    k[(i, j)] += Complex64::new(pole.couplings[i] * pole.couplings[j], 0.0) / denom;
                }
            }
        }
        for i in 0..n {
            for j in 0..n {
                k[(i, j)] += self.background[i * n + j];
            }
        }
        k
    }
}
