/// Walkthrough of the lattice, the optic axis rules and the retina model
///
/// Builds a small right-eye lattice, follows a few photoreceptors through the
/// superposition rules and compares the per-photoreceptor view with the
/// conflict-resolved wiring map.
use compound_eye::interfaces::Winding;
use compound_eye::lattice::{HexDirection, HexLattice};
use compound_eye::optic_axis::{OpticAxisRule, PhotoreceptorSlot, WiringMap};
use compound_eye::retina::{Retina, RetinaConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Compound eye wiring walkthrough ===\n");

    // Example 1: the lattice
    println!("1. A two-ring lattice:");
    let lattice = HexLattice::new(2, 1.0, None, Winding::Clockwise)?;
    println!("   Elements: {}", lattice.num_elements());
    println!("   Spacing: {:.4}", lattice.spacing());
    for direction in HexDirection::ALL {
        println!(
            "   Center -> {:?}: {:?}",
            direction,
            lattice.neighbor_id(0, &[direction.code()])?
        );
    }
    println!("   Mirror of element 2: {}\n", lattice.mirror_id(2)?);

    // Example 2: rule paths
    println!("2. Superposition paths of the dorsal rule:");
    let top = OpticAxisRule::SuperpositionTop;
    for slot in PhotoreceptorSlot::ALL {
        println!(
            "   {}: send {:?} -> {:?}, provide {:?}",
            slot,
            top.send_path(slot),
            lattice.neighbor_id(0, top.send_path(slot))?,
            top.provide_path(slot)
        );
    }
    println!();

    // Example 3: wiring map
    println!("3. Hemispheric wiring map:");
    let wiring = WiringMap::resolve(&lattice, |el| {
        if el.position.y >= 0.0 {
            OpticAxisRule::SuperpositionTop
        } else {
            OpticAxisRule::SuperpositionBottom
        }
    })?;
    let unwired = wiring.receivers().filter(|(_, _, t)| t.is_none()).count();
    println!("   Forward entries: {}", wiring.receivers().count());
    println!("   Unwired: {}", unwired);
    println!("   Reverse entries: {}\n", wiring.providers().count());

    // Example 4: retina
    println!("4. Retina on the Albers hemisphere:");
    let retina = Retina::new(RetinaConfig::default().with_rings(2))?;
    println!("   Ommatidia: {}", retina.num_ommatidia());
    println!("   Photoreceptors: {}", retina.num_photoreceptors());
    println!("   Acceptance angle: {:.3}°", retina.acceptance_angle());

    let wiring = retina.wiring_map()?;
    let mut disagreements = 0;
    for photor in retina.all_photoreceptors() {
        if wiring.receiver(photor.ommatidium, photor.slot)? != photor.target {
            disagreements += 1;
        }
    }
    println!(
        "   Photoreceptors whose direct target differs from the wiring map: {}",
        disagreements
    );

    Ok(())
}
