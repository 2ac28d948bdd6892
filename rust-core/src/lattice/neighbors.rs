use log::debug;
use nalgebra::Vector2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::NEIGHBOR_MATCH_FACTOR;
use crate::error::{EyeError, Result};
use crate::interfaces::Winding;
use crate::lattice::hex_directions::HexDirection;
use crate::lattice::hex_lattice::ElementRef;

/// Number of neighbor slots per element: self plus six directions.
pub const NEIGHBOR_SLOTS: usize = 7;

/// Find all `(source, target)` pairs where `target` sits at `offset` from `source`.
///
/// Compares every shifted position against every position; a pair matches when the
/// distance is below `tolerance`. Pairs are ordered by source, then by target.
pub fn find_neighbors_in_direction(
    positions: &[Vector2<f64>],
    offset: Vector2<f64>,
    tolerance: f64,
) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (source, pos) in positions.iter().enumerate() {
        let shifted = pos + offset;
        for (target, candidate) in positions.iter().enumerate() {
            if (shifted - candidate).norm() < tolerance {
                pairs.push((source, target));
            }
        }
    }
    pairs
}

fn match_all_directions(
    positions: &[Vector2<f64>],
    spacing: f64,
    winding: Winding,
) -> Vec<Vec<(usize, usize)>> {
    let tolerance = spacing * NEIGHBOR_MATCH_FACTOR;
    let search = |direction: &HexDirection| {
        find_neighbors_in_direction(positions, direction.unit_axis(spacing, winding), tolerance)
    };

    #[cfg(feature = "parallel")]
    {
        HexDirection::ALL.par_iter().map(search).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        HexDirection::ALL.iter().map(search).collect()
    }
}

/// Build the neighbor table of every element.
///
/// Slot 0 holds the element itself, slots 1-6 the element found in each direction,
/// or [`ElementRef::Dummy`] when there is none. Every element must end up with exactly
/// [`NEIGHBOR_SLOTS`] entries; anything else means the geometry is malformed.
pub fn resolve_neighbors(
    positions: &[Vector2<f64>],
    spacing: f64,
    winding: Winding,
) -> Result<Vec<[ElementRef; NEIGHBOR_SLOTS]>> {
    let num_elements = positions.len();
    let mut lists: Vec<Vec<ElementRef>> = (0..num_elements)
        .map(|i| vec![ElementRef::Element(i)])
        .collect();

    // The count check below must only run once every direction is done.
    let matches = match_all_directions(positions, spacing, winding);

    for (direction, pairs) in HexDirection::ALL.iter().zip(matches) {
        let mut matched = vec![false; num_elements];
        for &(source, target) in &pairs {
            lists[source].push(ElementRef::Element(target));
            matched[source] = true;
        }
        for (list, _) in lists.iter_mut().zip(&matched).filter(|(_, m)| !**m) {
            list.push(ElementRef::Dummy);
        }
        debug!(
            "Direction {:?}: {} of {} elements have a neighbor",
            direction,
            pairs.len(),
            num_elements
        );
    }

    lists
        .into_iter()
        .enumerate()
        .map(|(element, list)| {
            let neighbor_count = list.len();
            <[ElementRef; NEIGHBOR_SLOTS]>::try_from(list).map_err(|_| {
                EyeError::MalformedLattice {
                    element,
                    neighbor_count,
                }
            })
        })
        .collect()
}
