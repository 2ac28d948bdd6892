#[cfg(test)]
mod _tests_photoreceptor_slot {
    use super::super::photoreceptor_slot::*;
    use crate::error::EyeError;

    #[test]
    fn test_indices() {
        for (i, slot) in PhotoreceptorSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index() as usize, i + 1);
            assert_eq!(PhotoreceptorSlot::from_index(slot.index()).unwrap(), *slot);
        }
    }

    #[test]
    fn test_invalid_index() {
        assert_eq!(
            PhotoreceptorSlot::from_index(0),
            Err(EyeError::SlotIndexOutOfRange(0))
        );
        assert_eq!(
            PhotoreceptorSlot::from_index(9),
            Err(EyeError::SlotIndexOutOfRange(9))
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(PhotoreceptorSlot::R3.to_string(), "R3");
        assert_eq!("R8".parse::<PhotoreceptorSlot>().unwrap(), PhotoreceptorSlot::R8);
        assert_eq!(
            "R9".parse::<PhotoreceptorSlot>(),
            Err(EyeError::UnknownPhotoreceptor("R9".to_string()))
        );
        assert!(PhotoreceptorSlot::is_photoreceptor("R1"));
        assert!(!PhotoreceptorSlot::is_photoreceptor("r1"));
        assert!(!PhotoreceptorSlot::is_photoreceptor("ommatidium"));
    }

    #[test]
    fn test_canonical_order() {
        let mut sorted = PhotoreceptorSlot::ALL;
        sorted.sort();
        assert_eq!(sorted, PhotoreceptorSlot::ALL);
    }
}
