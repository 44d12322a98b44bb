//! Field extraction for the 19 equipment slots on the character page.
//!
//! Output is always exactly [`EQUIPMENT_SLOTS`] entries so index `i` of the
//! result is equipment position `i` unconditionally. Gem references are
//! collected here as raw hrefs; resolving them to display names costs one
//! HTTP round-trip each and is the gem resolver's job.

use super::{select_in, selectors, text_in};
use crate::document::Document;
use crate::types::EQUIPMENT_SLOTS;
use crate::Result;

/// One extracted equipment slot, gems still unresolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemSlot {
    /// Equipment position, `0..=18`.
    pub slot: u8,
    /// Item name; empty marks an empty slot.
    pub name: String,
    /// Item level text; empty when absent.
    pub item_level: String,
    /// Enchant text; empty when absent.
    pub enchant: String,
    /// Gem reference hrefs, in socket order.
    pub gem_refs: Vec<String>,
}

impl ItemSlot {
    fn empty(slot: u8) -> Self {
        Self {
            slot,
            ..Self::default()
        }
    }

    /// True when nothing is equipped in this slot.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// Extract all 19 slots in position order.
///
/// A slot whose container is missing, or whose name cannot be read, becomes
/// a wholly empty entry (never a partially-populated record), so the
/// index-to-slot mapping stays fixed.
pub fn item_slots(doc: &Document) -> Result<Vec<ItemSlot>> {
    let mut slots = Vec::with_capacity(EQUIPMENT_SLOTS);
    for slot in 0..EQUIPMENT_SLOTS {
        #[allow(clippy::cast_possible_truncation)]
        let slot = slot as u8;
        let containers = doc.select(&selectors::equipment_slot(slot))?;
        let Some(container) = containers.first() else {
            slots.push(ItemSlot::empty(slot));
            continue;
        };

        let name = text_in(container, selectors::ITEM_NAME)?;
        if name.is_empty() {
            slots.push(ItemSlot::empty(slot));
            continue;
        }

        let gem_refs = select_in(container, selectors::ITEM_GEM_LINKS)?
            .iter()
            .filter_map(|a| a.value().attr("href"))
            .map(str::to_string)
            .collect();

        slots.push(ItemSlot {
            slot,
            name,
            item_level: text_in(container, selectors::ITEM_SLOT_LEVEL)?,
            enchant: text_in(container, selectors::ITEM_ENCHANT)?,
            gem_refs,
        });
    }
    Ok(slots)
}
