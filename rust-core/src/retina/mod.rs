// Retina module: composes the lattice and the optic axis rules into the eye model

// ======================== MODULE DECLARATIONS ========================
pub mod ommatidium;
pub mod photoreceptor;
pub mod retina_config;
pub mod retina_model;

// Test modules
mod _tests_ommatidium;
mod _tests_retina_config;
mod _tests_retina_model;

// ======================== CONFIGURATION ========================
pub use retina_config::{
    ProjectionConfig, // enum - Planar or Albers { euler_angles }
    RetinaConfig,     // struct - serde-backed retina parameters with defaults
    RuleSelection,    // enum - Hemispheric or Fixed(OpticAxisRule)
};

// ======================== MODEL ========================
pub use ommatidium::Ommatidium; // struct - one lattice unit with its photoreceptors
pub use photoreceptor::Photoreceptor; // struct - one photoreceptor and its optic axis
pub use retina_model::Retina; // struct - the assembled eye
// Retina impl methods:
//   new(config) -> Result<Self>                                  - build with configured projection
//   with_transform(config, &dyn PlaneTransform) -> Result<Self>  - build with a custom transform
//   ommatidia(&self) / ommatidium(&self, id)                     - ommatidium access
//   photoreceptor_directions(&self) -> Vec<(dir, dir)>           - home position and optic axis
//   acceptance_angle(&self) -> f64                               - degrees
//   wiring_map(&self) -> Result<WiringMap>                       - conflict-resolved wiring
//   reassign_hemispheres(&mut self) -> Result<usize>             - re-derive rules from position
