#[cfg(test)]
mod _tests_retina_config {
    use super::super::retina_config::*;
    use crate::config::{DEFAULT_RINGS, MAX_RINGS};
    use crate::error::EyeError;
    use crate::interfaces::Winding;
    use crate::optic_axis::{OpticAxisRule, PhotoreceptorSlot};

    #[test]
    fn test_defaults() {
        let config = RetinaConfig::default();
        assert_eq!(config.rings, DEFAULT_RINGS);
        assert_eq!(config.photoreceptors, PhotoreceptorSlot::ALL.to_vec());
        assert_eq!(config.rule, RuleSelection::Hemispheric);
        assert_eq!(config.winding, Winding::Clockwise);
        assert_eq!(config.neuropil_name, "retina");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rule_selection() {
        let hemi = RuleSelection::Hemispheric;
        assert_eq!(hemi.rule_at(0.3), OpticAxisRule::SuperpositionTop);
        assert_eq!(hemi.rule_at(0.0), OpticAxisRule::SuperpositionTop);
        assert_eq!(hemi.rule_at(-0.1), OpticAxisRule::SuperpositionBottom);

        let fixed = RuleSelection::Fixed(OpticAxisRule::Plain);
        assert_eq!(fixed.rule_at(-5.0), OpticAxisRule::Plain);
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            RetinaConfig::default().with_rings(MAX_RINGS + 1).validate(),
            Err(EyeError::InvalidRingCount {
                rings: MAX_RINGS + 1,
                max: MAX_RINGS
            })
        );
        assert_eq!(
            RetinaConfig::default().with_radius(0.0).validate(),
            Err(EyeError::InvalidRadius(0.0))
        );
        assert!(RetinaConfig::default().with_radius(f64::INFINITY).validate().is_err());
        assert_eq!(
            RetinaConfig::default().with_acceptance_factor(-1.0).validate(),
            Err(EyeError::InvalidAcceptanceFactor(-1.0))
        );
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{
            "rings": 2,
            "winding": "CounterClockwise",
            "rule": { "Fixed": "SuperpositionBottom" },
            "photoreceptors": ["R1", "R1", "R7"]
        }"#;
        let config: RetinaConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.rings, 2);
        assert_eq!(config.winding, Winding::CounterClockwise);
        assert_eq!(
            config.rule,
            RuleSelection::Fixed(OpticAxisRule::SuperpositionBottom)
        );
        assert_eq!(
            config.photoreceptors,
            vec![PhotoreceptorSlot::R1, PhotoreceptorSlot::R1, PhotoreceptorSlot::R7]
        );
        // Missing fields fall back to defaults
        assert_eq!(config.radius, 1.0);
        assert_eq!(config.projection, ProjectionConfig::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = RetinaConfig::default()
            .with_rings(5)
            .with_projection(ProjectionConfig::Planar)
            .with_rule(RuleSelection::Fixed(OpticAxisRule::Plain));
        let json = serde_json::to_string(&config).unwrap();
        let back: RetinaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
