use thiserror::Error;

/// Errors raised while building or querying the lattice, the wiring and the retina.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EyeError {
    #[error("Invalid ring count {rings}: must be at most {max}")]
    InvalidRingCount { rings: usize, max: usize },

    #[error("Invalid lattice radius {0}: must be finite and positive")]
    InvalidRadius(f64),

    #[error("Invalid acceptance factor {0}: must be finite and non-negative")]
    InvalidAcceptanceFactor(f64),

    #[error("Unsupported optic axis rule '{0}' (expected Plain, SuperpositionTop or SuperpositionBottom)")]
    UnsupportedRule(String),

    #[error("'{0}' is not a valid photoreceptor name (expected R1-R8)")]
    UnknownPhotoreceptor(String),

    #[error("Malformed lattice: element {element} has {neighbor_count} neighbor entries, expected 7")]
    MalformedLattice { element: usize, neighbor_count: usize },

    #[error("Element {element} has no mirror counterpart in the lattice")]
    MirrorNotFound { element: usize },

    #[error("Element id {element} out of range (lattice has {count} elements)")]
    ElementOutOfRange { element: usize, count: usize },

    #[error("Photoreceptor slot index {0} out of range (expected 1-8)")]
    SlotIndexOutOfRange(u8),

    #[error("Invalid direction code {0} (expected 0-18)")]
    InvalidDirectionCode(u8),
}

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, EyeError>;
