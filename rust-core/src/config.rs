// Constants

// Lattice construction
pub const BUFFER_RINGS: usize = 2; // Rings added around the requested ones before cropping
pub const MAX_RINGS: usize = 64; // Upper bound accepted for the ring count

// Tolerances
pub const NEIGHBOR_MATCH_FACTOR: f64 = 0.1; // Neighbor matching radius, in units of element spacing
pub const DISC_TOLERANCE: f64 = 1e-9; // Relative slack on the disc crop radius
pub const EQUATOR_BAND_TOLERANCE: f64 = 0.02; // Relative window around reference rows
pub const EQUATOR_ROW_CEILING: f64 = 0.02; // Absolute upper bound of the "8a" band

// Retina
pub const SINGLE_OMMATIDIUM_ANGLE_DEG: f64 = 90.0; // Interommatidial angle when only one element exists
pub const DEFAULT_RINGS: usize = 14;
pub const DEFAULT_RADIUS: f64 = 1.0;
pub const DEFAULT_ACCEPTANCE_FACTOR: f64 = 1.0;
pub const DEFAULT_NEUROPIL_NAME: &str = "retina";
