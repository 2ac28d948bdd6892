use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{EyeError, Result};
use crate::lattice::{ElementRef, HexLattice, LatticeElement};
use crate::optic_axis::optic_axis_rule::OpticAxisRule;
use crate::optic_axis::photoreceptor_slot::PhotoreceptorSlot;

const NUM_SLOTS: usize = PhotoreceptorSlot::ALL.len();

/// Per-element table indexed by slot (R1 at 0).
type SlotTable = [Option<usize>; NUM_SLOTS];

/// Photoreceptor projections resolved consistently over a whole lattice.
///
/// `receivers[e][s]` is the element that receives slot `s` of element `e`
/// (`None` when the rule points off the lattice); `providers[t][s]` is the element
/// whose slot `s` ends up at `t`. Both tables are built in one pass and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiringMap {
    receivers: Vec<SlotTable>,
    providers: Vec<SlotTable>,
    /// Pairs whose conflict search stopped on an already claimed target
    ambiguous: Vec<(usize, PhotoreceptorSlot)>,
}

impl WiringMap {
    /// Resolve the wiring with the same rule for every element.
    pub fn uniform(lattice: &HexLattice, rule: OpticAxisRule) -> Result<Self> {
        Self::resolve(lattice, |_| rule)
    }

    /// Resolve the wiring, asking `rule_for` which rule governs each element.
    ///
    /// Elements are processed by ascending id and slots in canonical order. When the
    /// rule's target already receives the same slot from another element, the target is
    /// stepped along the rule's provide path until it is free, leaves the lattice, or the
    /// step returns the same element (the claimed target is then kept).
    pub fn resolve<F>(lattice: &HexLattice, rule_for: F) -> Result<Self>
    where
        F: Fn(&LatticeElement) -> OpticAxisRule,
    {
        let n = lattice.num_elements();
        let mut receivers = vec![[None; NUM_SLOTS]; n];
        let mut providers: Vec<SlotTable> = vec![[None; NUM_SLOTS]; n];
        let mut ambiguous = Vec::new();
        let mut conflicts = 0usize;

        for element in lattice.elements() {
            let Some(id) = element.gid() else { continue };
            let rule = rule_for(element);

            for (s, &slot) in PhotoreceptorSlot::ALL.iter().enumerate() {
                let mut target = lattice.walk(element.id, rule.send_path(slot))?;

                while let ElementRef::Element(claimed) = target {
                    if providers[claimed][s].is_none() {
                        break;
                    }
                    conflicts += 1;
                    let next = lattice.walk(target, rule.provide_path(slot))?;
                    if next == target {
                        debug!(
                            "Wiring of {} in element {} stays on claimed element {}",
                            slot, id, claimed
                        );
                        ambiguous.push((id, slot));
                        break;
                    }
                    target = next;
                }

                receivers[id][s] = target.id();
                if let Some(t) = target.id() {
                    providers[t][s] = Some(id);
                }
            }
        }

        debug!(
            "Resolved wiring for {} elements: {} conflict steps, {} ambiguous",
            n,
            conflicts,
            ambiguous.len()
        );

        Ok(Self {
            receivers,
            providers,
            ambiguous,
        })
    }

    pub fn num_elements(&self) -> usize {
        self.receivers.len()
    }

    fn row(table: &[SlotTable], element: usize) -> Result<&SlotTable> {
        table.get(element).ok_or(EyeError::ElementOutOfRange {
            element,
            count: table.len(),
        })
    }

    /// Element receiving `slot` of `element`, or `None` if it is unwired.
    pub fn receiver(&self, element: usize, slot: PhotoreceptorSlot) -> Result<Option<usize>> {
        Ok(Self::row(&self.receivers, element)?[slot as usize])
    }

    /// Element providing `slot` to `element`, or `None` if nobody does.
    pub fn provider(&self, element: usize, slot: PhotoreceptorSlot) -> Result<Option<usize>> {
        Ok(Self::row(&self.providers, element)?[slot as usize])
    }

    /// Every forward entry as `(element, slot, receiver)`, by element then slot.
    pub fn receivers(&self) -> impl Iterator<Item = (usize, PhotoreceptorSlot, Option<usize>)> + '_ {
        self.receivers.iter().enumerate().flat_map(|(id, row)| {
            PhotoreceptorSlot::ALL
                .iter()
                .zip(row.iter())
                .map(move |(&slot, &target)| (id, slot, target))
        })
    }

    /// Every reverse entry as `(element, slot, provider)`.
    pub fn providers(&self) -> impl Iterator<Item = (usize, PhotoreceptorSlot, usize)> + '_ {
        self.providers.iter().enumerate().flat_map(|(id, row)| {
            PhotoreceptorSlot::ALL
                .iter()
                .zip(row.iter())
                .filter_map(move |(&slot, &source)| source.map(|s| (id, slot, s)))
        })
    }

    /// Pairs accepted on an already claimed target.
    pub fn ambiguous(&self) -> &[(usize, PhotoreceptorSlot)] {
        &self.ambiguous
    }
}
