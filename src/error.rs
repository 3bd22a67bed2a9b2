//! Error types for K-matrix construction and evaluation.
//!
//! Dimension mismatches are caught when an object is built, never at
//! evaluation time, so a constructed amplitude can only fail for numerical
//! reasons (a singular denominator) or an unsupported partial wave.

use thiserror::Error;

/// Everything that can go wrong while building or evaluating an amplitude.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KmatError {
    /// A K-matrix needs at least one pole to fix the channel count.
    #[error("K-matrix needs at least one pole")]
    EmptyPoleList,

    /// A pole must couple to at least one channel.
    #[error("a pole must couple to at least one channel")]
    NoChannels,

    /// Every pole must carry one coupling per channel.
    #[error("pole {pole_index} carries {found} couplings, expected {expected} (one per channel)")]
    CouplingCountMismatch {
        /// Index of the offending pole.
        pole_index: usize,
        /// Channel count fixed by the first pole.
        expected: usize,
        /// Coupling count actually supplied.
        found: usize,
    },

    /// The non-pole background block must be N×N.
    #[error("background matrix has {found} entries, expected {expected} (N\u{d7}N, row-major)")]
    BackgroundDimensionMismatch {
        /// Expected flat length N².
        expected: usize,
        /// Length actually supplied.
        found: usize,
    },

    /// The non-pole background block must be symmetric.
    #[error("background matrix is not symmetric at ({row}, {col})")]
    AsymmetricBackground {
        /// Row of the first asymmetric pair.
        row: usize,
        /// Column of the first asymmetric pair.
        col: usize,
    },

    /// A T-matrix needs exactly one channel per K-matrix column.
    #[error("{channels} channels supplied, but the K-matrix couples {kmatrix}")]
    ChannelCountMismatch {
        /// Channels handed to the constructor.
        channels: usize,
        /// Channel count of the K-matrix.
        kmatrix: usize,
    },

    /// A production amplitude needs one complex coupling per pole.
    #[error("{found} pole production couplings supplied, expected {expected}")]
    ProductionPoleMismatch {
        /// Pole count of the underlying K-matrix.
        expected: usize,
        /// Couplings actually supplied.
        found: usize,
    },

    /// A production amplitude needs one background coupling per channel.
    #[error("{found} background production couplings supplied, expected {expected}")]
    ProductionChannelMismatch {
        /// Channel count of the underlying T-matrix.
        expected: usize,
        /// Couplings actually supplied.
        found: usize,
    },

    /// A pole index beyond the stored pole list.
    #[error("pole index {index} out of range for {poles} poles")]
    PoleIndexOutOfRange {
        /// Requested pole index.
        index: usize,
        /// Poles available.
        poles: usize,
    },

    /// A channel index beyond the stored channel list.
    #[error("channel index {index} out of range for {channels} channels")]
    ChannelIndexOutOfRange {
        /// Requested channel index.
        index: usize,
        /// Channels available.
        channels: usize,
    },

    /// Only S-wave (L = 0) phase space is implemented.
    #[error("orbital angular momentum L={l} is not supported; only S-wave (L=0) channels")]
    UnsupportedAngularMomentum {
        /// Requested orbital angular momentum.
        l: u32,
    },

    /// The denominator matrix D(m) is exactly singular: a true amplitude pole.
    #[error("denominator matrix is singular at the requested mass (amplitude pole)")]
    SingularDenominator,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_mismatched_dimensions() {
        let err = KmatError::CouplingCountMismatch {
            pole_index: 1,
            expected: 3,
            found: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains('1') && msg.contains('3') && msg.contains('2'), "{}", msg);
    }

    #[test]
    fn errors_compare_by_value() {
        assert_eq!(KmatError::SingularDenominator, KmatError::SingularDenominator);
        assert_ne!(
            KmatError::UnsupportedAngularMomentum { l: 1 },
            KmatError::UnsupportedAngularMomentum { l: 2 }
        );
    }
}
