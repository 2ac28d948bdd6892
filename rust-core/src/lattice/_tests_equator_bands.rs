#[cfg(test)]
mod _tests_equator_bands {
    use super::super::equator_bands::*;
    use super::super::hex_lattice::HexLattice;
    use crate::interfaces::Winding;

    #[test]
    fn test_labels() {
        assert_eq!(EquatorBand::Six.to_string(), "6");
        assert_eq!(EquatorBand::Seven.to_string(), "7");
        assert_eq!(EquatorBand::EightA.to_string(), "8a");
        assert_eq!(EquatorBand::EightB.label(), "8b");
    }

    #[test]
    fn test_reference_rows() {
        let spacing = 1.0;
        assert_eq!(classify_equator_band(0.0, spacing), EquatorBand::EightA);
        assert_eq!(classify_equator_band(-0.5, spacing), EquatorBand::EightA);
        assert_eq!(classify_equator_band(0.5, spacing), EquatorBand::EightB);
        assert_eq!(classify_equator_band(-1.0, spacing), EquatorBand::EightB);
        assert_eq!(classify_equator_band(1.0, spacing), EquatorBand::Seven);
        assert_eq!(classify_equator_band(-1.5, spacing), EquatorBand::Seven);
        assert_eq!(classify_equator_band(2.0, spacing), EquatorBand::Six);
        assert_eq!(classify_equator_band(-3.0, spacing), EquatorBand::Six);
    }

    #[test]
    fn test_band_edges() {
        let spacing = 1.0;
        // The 8a window is absolute on its upper side
        assert_eq!(classify_equator_band(0.02, spacing), EquatorBand::EightA);
        assert_eq!(classify_equator_band(0.03, spacing), EquatorBand::Six);
        assert_eq!(classify_equator_band(0.505, spacing), EquatorBand::EightB);
        assert_eq!(classify_equator_band(0.515, spacing), EquatorBand::Six);
    }

    #[test]
    fn test_lattice_bands() {
        let lattice = HexLattice::new(1, 1.0, None, Winding::Clockwise).unwrap();
        let bands: Vec<EquatorBand> = (0..lattice.num_elements())
            .map(|id| lattice.equator_band(id).unwrap())
            .collect();
        assert_eq!(
            bands,
            vec![
                EquatorBand::EightA,
                EquatorBand::Seven,
                EquatorBand::EightB,
                EquatorBand::EightA,
                EquatorBand::EightB,
                EquatorBand::EightA,
                EquatorBand::EightB,
            ]
        );
    }
}
