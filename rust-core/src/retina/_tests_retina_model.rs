#[cfg(test)]
mod _tests_retina_model {
    use super::super::retina_config::*;
    use super::super::retina_model::*;
    use crate::config::SINGLE_OMMATIDIUM_ANGLE_DEG;
    use crate::error::EyeError;
    use crate::lattice::HexDirection;
    use crate::optic_axis::{OpticAxisRule, PhotoreceptorSlot};
    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    fn ring_one() -> Retina {
        Retina::new(RetinaConfig::default().with_rings(1)).unwrap()
    }

    #[test]
    fn test_basic_counts() {
        let retina = ring_one();
        assert_eq!(retina.num_ommatidia(), 7);
        assert_eq!(retina.num_photoreceptors(), 56);
        assert_eq!(retina.all_photoreceptors().count(), 56);
        assert_eq!(retina.photoreceptor_directions().len(), 56);
        assert_eq!(retina.ommatidia_positions().len(), 7);
        assert_eq!(retina.neuropil_name(), "retina");
        assert_relative_eq!(retina.radius(), 1.0);
    }

    #[test]
    fn test_hemispheric_rules() {
        let retina = ring_one();
        let rules: Vec<OpticAxisRule> = retina.ommatidia().iter().map(|o| o.rule()).collect();
        use OpticAxisRule::{SuperpositionBottom as B, SuperpositionTop as T};
        assert_eq!(rules, vec![T, T, T, B, B, B, T]);
    }

    #[test]
    fn test_albers_sphere_positions() {
        let retina = ring_one();
        let center = retina.ommatidium(0).unwrap().sphere_pos();
        assert_relative_eq!(center.elevation, 0.0);
        let up = retina.ommatidium(1).unwrap().sphere_pos();
        assert_relative_eq!(up.elevation, (8.0_f64 / 9.0).acos(), epsilon = 1e-12);
        assert_relative_eq!(up.azimuth, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn test_acceptance_angle() {
        let retina = ring_one();
        let expected = (8.0_f64 / 9.0).acos().to_degrees();
        assert_relative_eq!(retina.interommatidial_angle(), expected, epsilon = 1e-9);
        assert_relative_eq!(retina.acceptance_angle(), expected, epsilon = 1e-9);

        let wide = Retina::new(
            RetinaConfig::default()
                .with_rings(1)
                .with_acceptance_factor(2.0),
        )
        .unwrap();
        assert_relative_eq!(wide.acceptance_angle(), 2.0 * expected, epsilon = 1e-9);
    }

    #[test]
    fn test_single_ommatidium() {
        let retina = Retina::new(
            RetinaConfig::default()
                .with_rings(0)
                .with_acceptance_factor(0.5),
        )
        .unwrap();
        assert_eq!(retina.num_ommatidia(), 1);
        assert_relative_eq!(retina.interommatidial_angle(), SINGLE_OMMATIDIUM_ANGLE_DEG);
        assert_relative_eq!(retina.acceptance_angle(), 0.5 * SINGLE_OMMATIDIUM_ANGLE_DEG);
        // Every outer photoreceptor points off the lattice and keeps its own direction
        let omma = retina.ommatidium(0).unwrap();
        for photor in omma.photoreceptors() {
            assert_eq!(photor.direction, omma.sphere_pos());
        }
    }

    #[test]
    fn test_photoreceptor_targets() {
        let retina = ring_one();
        let center = retina.ommatidium(0).unwrap();
        // SuperpositionTop sends R1 of the center to its upper-right neighbor
        let r1 = center.photoreceptor(PhotoreceptorSlot::R1, 0).unwrap();
        assert_eq!(r1.target, Some(2));
        assert_eq!(r1.direction, retina.ommatidium(2).unwrap().sphere_pos());
        // R3 takes two hops and leaves a ring-one lattice
        let r3 = center.photoreceptor(PhotoreceptorSlot::R3, 0).unwrap();
        assert_eq!(r3.target, None);
        assert_eq!(r3.direction, center.sphere_pos());
        let r7 = center.photoreceptor(PhotoreceptorSlot::R7, 0).unwrap();
        assert_eq!(r7.target, Some(0));
    }

    #[test]
    fn test_directions_differ_from_wiring_map() {
        let retina = ring_one();
        let wiring = retina.wiring_map().unwrap();

        let omma = retina.ommatidium(3).unwrap();
        let r5 = omma.photoreceptor(PhotoreceptorSlot::R5, 0).unwrap();
        assert_eq!(r5.target, Some(0));
        assert_eq!(wiring.receiver(3, PhotoreceptorSlot::R5).unwrap(), Some(3));

        let omma = retina.ommatidium(4).unwrap();
        let r4 = omma.photoreceptor(PhotoreceptorSlot::R4, 0).unwrap();
        assert_eq!(r4.target, Some(0));
        assert_eq!(wiring.receiver(4, PhotoreceptorSlot::R4).unwrap(), None);
    }

    #[test]
    fn test_fixed_plain_rule() {
        let retina = Retina::new(
            RetinaConfig::default()
                .with_rings(2)
                .with_rule(RuleSelection::Fixed(OpticAxisRule::Plain)),
        )
        .unwrap();
        for photor in retina.all_photoreceptors() {
            assert_eq!(photor.target, Some(photor.ommatidium));
            assert_eq!(photor.direction, photor.sphere_pos);
        }
    }

    #[test]
    fn test_reassign_hemispheres() {
        let mut retina = ring_one();
        assert_eq!(retina.reassign_hemispheres().unwrap(), 0);

        retina
            .ommatidium_mut(3)
            .unwrap()
            .set_rule(OpticAxisRule::SuperpositionTop);
        assert_eq!(retina.reassign_hemispheres().unwrap(), 1);
        assert_eq!(retina.reassign_hemispheres().unwrap(), 0);

        let omma = retina.ommatidium(3).unwrap();
        assert_eq!(omma.rule(), OpticAxisRule::SuperpositionBottom);
        assert_eq!(
            omma.photoreceptor(PhotoreceptorSlot::R5, 0).unwrap().target,
            Some(0)
        );
    }

    #[test]
    fn test_custom_transform() {
        let config = RetinaConfig::default().with_rings(1);
        let swap = |p: Vector2<f64>| Vector2::new(p.y, p.x);
        let retina = Retina::with_transform(config, &swap).unwrap();
        let up = retina.ommatidium(1).unwrap().sphere_pos();
        assert_relative_eq!(up.elevation, 1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(up.azimuth, 0.0);
    }

    #[test]
    fn test_queries() {
        let retina = ring_one();
        assert_eq!(retina.neighbor_id(0, &[4]).unwrap(), Some(4));
        assert!(retina.is_neighbor_dummy(1, HexDirection::Up).unwrap());
        assert_eq!(retina.slot_index(0, PhotoreceptorSlot::R8).unwrap(), Some(7));
        assert_eq!(retina.photoreceptors(2).unwrap().len(), 8);
        assert!(retina.photoreceptor_direction(0, PhotoreceptorSlot::R1).unwrap().is_some());
        assert_eq!(
            retina.equator_band(7).unwrap_err(),
            EyeError::ElementOutOfRange {
                element: 7,
                count: 7
            }
        );
    }

    #[test]
    fn test_configured_photoreceptor_order() {
        let config = RetinaConfig {
            photoreceptors: vec![PhotoreceptorSlot::R6, PhotoreceptorSlot::R1],
            ..RetinaConfig::default().with_rings(1)
        };
        let retina = Retina::new(config).unwrap();
        assert_eq!(retina.slot_index(0, PhotoreceptorSlot::R6).unwrap(), Some(0));
        assert_eq!(retina.slot_index(0, PhotoreceptorSlot::R1).unwrap(), Some(1));
        assert_eq!(retina.slot_index(0, PhotoreceptorSlot::R8).unwrap(), None);
        let names: Vec<&str> = retina
            .photoreceptors(3)
            .unwrap()
            .iter()
            .map(|p| p.name())
            .collect();
        assert_eq!(names, vec!["R6", "R1"]);
        assert_eq!(retina.num_photoreceptors(), 14);
    }

    #[test]
    fn test_photoreceptor_directions_follow_iteration() {
        let retina = ring_one();
        let pairs = retina.photoreceptor_directions();
        for (pair, photor) in pairs.iter().zip(retina.all_photoreceptors()) {
            assert_eq!(*pair, (photor.sphere_pos, photor.direction));
        }
        assert_eq!(pairs.len(), retina.all_photoreceptors().count());
    }

    #[test]
    fn test_invalid_config() {
        assert!(Retina::new(RetinaConfig::default().with_radius(-1.0)).is_err());
        assert!(Retina::new(RetinaConfig::default().with_acceptance_factor(f64::NAN)).is_err());
    }

    #[test]
    fn test_counter_clockwise_retina() {
        let retina = Retina::new(
            RetinaConfig::default()
                .with_rings(1)
                .with_winding(crate::interfaces::Winding::CounterClockwise),
        )
        .unwrap();
        assert!(retina.ommatidium(2).unwrap().position().x < 0.0);
        assert_eq!(retina.num_photoreceptors(), 56);
    }
}
