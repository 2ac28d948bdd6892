// Optic axis module: photoreceptor slots, directional rules and lattice-wide wiring

// ======================== MODULE DECLARATIONS ========================
pub mod optic_axis_rule;
pub mod photoreceptor_slot;
pub mod wiring_map;

mod _tests_photoreceptor_slot;

// ======================== SLOTS & RULES ========================
pub use photoreceptor_slot::PhotoreceptorSlot; // enum - R1..R8
// PhotoreceptorSlot impl methods:
//   index(self) -> u8                           - 1-based slot index
//   from_index(index: u8) -> Result<Self>       - rejects 0 and > 8
//   is_photoreceptor(name: &str) -> bool        - name check ("R1".."R8")

pub use optic_axis_rule::OpticAxisRule; // enum - Plain, SuperpositionTop, SuperpositionBottom
// OpticAxisRule impl methods:
//   send_path(self, slot) -> &'static [u8]      - path to the neighbor receiving the slot
//   provide_path(self, slot) -> &'static [u8]   - path to the neighbor providing the slot
//   send_path_for_index / provide_path_for_index(self, index: u8) -> Result<&'static [u8]>

// ======================== WIRING ========================
pub use wiring_map::WiringMap; // struct - lattice-wide receiver/provider tables
// WiringMap impl methods:
//   uniform(lattice, rule) -> Result<Self>                           - one rule everywhere
//   resolve(lattice, rule_for: Fn(&LatticeElement) -> OpticAxisRule) - per-element rule
//   receiver(&self, element, slot) -> Result<Option<usize>>          - forward lookup
//   provider(&self, element, slot) -> Result<Option<usize>>          - reverse lookup
