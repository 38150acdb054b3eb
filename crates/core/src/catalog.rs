use std::collections::BTreeSet;

use eyre::{eyre, Result};

use crate::models::slot::Slot;

/// Times offered every day when no catalog is configured.
pub const DEFAULT_SLOTS: [&str; 8] = [
    "09:00", "10:00", "11:00", "14:00", "15:00", "16:00", "17:00", "18:00",
];

/// The fixed, ordered list of bookable times of a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCatalog {
    slots: Vec<Slot>,
}

impl SlotCatalog {
    /// Builds a catalog; slots are sorted ascending and duplicates dropped.
    pub fn new(slots: impl IntoIterator<Item = Slot>) -> Self {
        let slots: BTreeSet<Slot> = slots.into_iter().collect();
        Self {
            slots: slots.into_iter().collect(),
        }
    }

    /// Parses a comma separated list such as `"09:00,10:00,11:00"`.
    ///
    /// # Errors
    ///
    /// Fails when an entry is not `HH:MM` or when the list is empty.
    pub fn parse(list: &str) -> Result<Self> {
        let slots = list
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| entry.parse::<Slot>().map_err(|e| eyre!(e)))
            .collect::<Result<Vec<_>>>()?;

        if slots.is_empty() {
            return Err(eyre!("slot catalog must contain at least one time"));
        }

        Ok(Self::new(slots))
    }

    pub fn list_slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn contains(&self, slot: &Slot) -> bool {
        self.slots.binary_search(slot).is_ok()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for SlotCatalog {
    fn default() -> Self {
        Self::new(
            DEFAULT_SLOTS
                .iter()
                .filter_map(|entry| entry.parse::<Slot>().ok()),
        )
    }
}
