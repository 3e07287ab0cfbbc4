//! Lookup of levels by their campaign number

use std::collections::BTreeMap;

use bevy::prelude::*;

use super::{list::LevelList, LevelData};

/// Levels of the game in list order, indexed by their number
#[derive(Resource, Debug, Clone, Default)]
pub struct LevelRegistry {
	entries: Vec<RegistryEntry>,
	by_number: BTreeMap<u32, usize>,
}

#[derive(Debug, Clone)]
pub struct RegistryEntry {
	pub number: u32,
	pub name: String,
	pub identifier: String,
	pub data: Handle<LevelData>,
}

impl LevelRegistry {
	/// Builds the registry out of a loaded level list.
	///
	/// Levels whose data is not available are left out.
	/// When two levels share a number, the one listed first wins.
	pub fn from_list(list: &LevelList, levels: &Assets<LevelData>) -> Self {
		let mut registry = Self::default();
		for info in &list.levels {
			let Some(data) = levels.get(&info.data_handle) else {
				warn!("Level {} is not loaded, leaving it out.", info.identifier);
				continue;
			};
			registry.insert(RegistryEntry {
				number: data.number,
				name: data.name.clone(),
				identifier: info.identifier.clone(),
				data: info.data_handle.clone(),
			});
		}
		registry
	}

	/// Adds an entry, returning its index, or `None` if the number is taken
	pub fn insert(&mut self, entry: RegistryEntry) -> Option<usize> {
		if let Some(&existing) = self.by_number.get(&entry.number) {
			warn!(
				"Levels {} and {} share number {}, ignoring the latter.",
				self.entries[existing].identifier, entry.identifier, entry.number
			);
			return None;
		}
		let index = self.entries.len();
		self.by_number.insert(entry.number, index);
		self.entries.push(entry);
		Some(index)
	}

	pub fn get(&self, index: usize) -> Option<&RegistryEntry> {
		self.entries.get(index)
	}

	pub fn find_by_number(&self, number: u32) -> Option<usize> {
		self.by_number.get(&number).copied()
	}

	/// Index of the level that follows the level with the given number
	pub fn next_after(&self, number: u32) -> Option<usize> {
		let next_number = number.checked_add(1)?;
		let next = self.find_by_number(next_number);
		if next.is_none() {
			info!("Next level for level {number} not found.");
		}
		next
	}

	/// Entries in list order
	pub fn iter(&self) -> impl Iterator<Item = (usize, &RegistryEntry)> {
		self.entries.iter().enumerate()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn entry(number: u32, identifier: &str) -> RegistryEntry {
		RegistryEntry {
			number,
			name: identifier.to_uppercase(),
			identifier: identifier.to_owned(),
			data: Handle::default(),
		}
	}

	fn registry(entries: &[(u32, &str)]) -> LevelRegistry {
		let mut registry = LevelRegistry::default();
		for &(number, identifier) in entries {
			registry.insert(entry(number, identifier));
		}
		registry
	}

	#[test]
	fn next_level_is_found_by_number_not_position() {
		let registry = registry(&[(2, "second"), (1, "first"), (3, "third")]);
		assert_eq!(registry.next_after(1), Some(0));
		assert_eq!(registry.next_after(2), Some(2));
		assert_eq!(registry.next_after(3), None, "The last level has no successor");
	}

	#[test]
	fn gaps_in_numbering_end_the_campaign() {
		let registry = registry(&[(1, "first"), (3, "third")]);
		assert_eq!(registry.next_after(1), None);
		assert_eq!(registry.find_by_number(3), Some(1));
	}

	#[test]
	fn duplicate_numbers_keep_first_entry() {
		let mut registry = registry(&[(1, "first")]);
		assert_eq!(registry.insert(entry(1, "impostor")), None);
		assert_eq!(registry.len(), 1);
		assert_eq!(
			registry.get(0).map(|e| e.identifier.as_str()),
			Some("first")
		);
	}

	#[test]
	fn last_possible_number_does_not_overflow() {
		let registry = registry(&[(u32::MAX, "last")]);
		assert_eq!(registry.next_after(u32::MAX), None);
	}
}
