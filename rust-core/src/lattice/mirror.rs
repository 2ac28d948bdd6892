use crate::lattice::hex_coordinates::HexCoordinate;

/// Reflect a coordinate across the vertical axis (bilateral symmetry).
///
/// `section' = 5 - section`, shifted by one (wrapping at 6) for section starts,
/// and `local' = ring - local` (0 for section starts). Applying it twice is the identity.
pub fn mirror_coordinate(coord: &HexCoordinate) -> HexCoordinate {
    let HexCoordinate {
        ring,
        section,
        local,
    } = *coord;

    let mut new_section = 5 - section;
    if local == 0 {
        new_section = (new_section + 1) % 6;
    }
    let new_local = if local == 0 { 0 } else { ring - local };

    HexCoordinate::new(ring, new_section, new_local)
}
