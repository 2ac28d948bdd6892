#[cfg(test)]
mod _tests_ommatidium {
    use super::super::ommatidium::*;
    use crate::interfaces::SphericalDirection;
    use crate::lattice::EquatorBand;
    use crate::optic_axis::{OpticAxisRule, PhotoreceptorSlot};
    use nalgebra::Vector2;

    fn ommatidium() -> Ommatidium {
        Ommatidium::new(
            4,
            Vector2::new(0.5, -0.25),
            SphericalDirection::new(0.4, -0.5),
            EquatorBand::Six,
            OpticAxisRule::SuperpositionBottom,
        )
    }

    #[test]
    fn test_identity() {
        let omma = ommatidium();
        assert_eq!(omma.id(), 4);
        assert_eq!(omma.uid(), "ommatidium_4");
        assert_eq!(omma.rule(), OpticAxisRule::SuperpositionBottom);
        assert_eq!(omma.num_photoreceptors(), 0);
        assert!(omma.photoreceptors_named(PhotoreceptorSlot::R1).is_empty());
    }

    #[test]
    fn test_add_photoreceptor_inherits_position() {
        let mut omma = ommatidium();
        let direction = SphericalDirection::new(0.1, 0.2);
        let photor = omma.add_photoreceptor(PhotoreceptorSlot::R3, Some(7), direction);
        assert_eq!(photor.ommatidium, 4);
        assert_eq!(photor.sequence_number, 0);
        assert_eq!(photor.position, Vector2::new(0.5, -0.25));
        assert_eq!(photor.sphere_pos, SphericalDirection::new(0.4, -0.5));
        assert_eq!(photor.target, Some(7));
        assert_eq!(photor.direction, direction);
        assert_eq!(photor.uid(), "R3-4");
        assert_eq!(photor.name(), "R3");
    }

    #[test]
    fn test_duplicates_and_round_robin() {
        let mut omma = ommatidium();
        let d = SphericalDirection::default();
        omma.add_photoreceptor(PhotoreceptorSlot::R1, None, d);
        omma.add_photoreceptor(PhotoreceptorSlot::R1, None, d);
        omma.add_photoreceptor(PhotoreceptorSlot::R2, None, d);
        assert_eq!(omma.num_photoreceptors(), 3);
        assert_eq!(omma.photoreceptors_named(PhotoreceptorSlot::R1).len(), 2);
        assert_eq!(
            omma.photoreceptor(PhotoreceptorSlot::R1, 1).unwrap().sequence_number,
            1
        );
        assert!(omma.photoreceptor(PhotoreceptorSlot::R1, 2).is_none());

        let turns: Vec<usize> = (0..3)
            .map(|_| {
                omma.photoreceptor_round_robin(PhotoreceptorSlot::R1)
                    .unwrap()
                    .sequence_number
            })
            .collect();
        assert_eq!(turns, vec![0, 1, 0]);
        assert!(omma.photoreceptor_round_robin(PhotoreceptorSlot::R5).is_none());
    }

    #[test]
    fn test_slot_index_and_order() {
        let mut omma = ommatidium();
        let d = SphericalDirection::default();
        omma.add_photoreceptor(PhotoreceptorSlot::R6, None, d);
        omma.add_photoreceptor(PhotoreceptorSlot::R2, None, d);
        omma.add_photoreceptor(PhotoreceptorSlot::R6, None, d);
        assert_eq!(omma.slot_index(PhotoreceptorSlot::R6), Some(0));
        assert_eq!(omma.slot_index(PhotoreceptorSlot::R2), Some(1));
        assert_eq!(omma.slot_index(PhotoreceptorSlot::R1), None);

        let names: Vec<&str> = omma.photoreceptors().map(|p| p.name()).collect();
        assert_eq!(names, vec!["R6", "R6", "R2"]);
        assert_eq!(omma.photoreceptor(PhotoreceptorSlot::R6, 1).unwrap().sequence_number, 1);
    }

    #[test]
    fn test_retarget() {
        let mut omma = ommatidium();
        let d = SphericalDirection::default();
        omma.add_photoreceptor(PhotoreceptorSlot::R4, Some(1), d);
        omma.add_photoreceptor(PhotoreceptorSlot::R4, Some(1), d);
        let new_direction = SphericalDirection::new(1.0, 1.0);
        omma.retarget(PhotoreceptorSlot::R4, None, new_direction);
        for photor in omma.photoreceptors_named(PhotoreceptorSlot::R4) {
            assert_eq!(photor.target, None);
            assert_eq!(photor.direction, new_direction);
        }
    }
}
