use aventura_store::{
    InventoryEntry, SessionStore, CHARACTERS_KEY, FRIENDS_KEY, INVENTORY_KEY, VISITED_KEY,
};
use serde::Serialize;

/// Mutable progress of one play session.
///
/// The friend and visited lists keep insertion order so the persisted
/// documents replay exactly; the inventory never holds a zero-quantity entry.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    current_location: String,
    characters: Vec<String>,
    friends: Vec<String>,
    inventory: Vec<InventoryEntry>,
    visited: Vec<String>,
    selected_item: Option<String>,
}

impl GameState {
    pub(crate) fn from_store(store: &SessionStore, start: &str) -> Self {
        GameState {
            current_location: start.to_string(),
            characters: store.get(CHARACTERS_KEY),
            friends: store.get(FRIENDS_KEY),
            inventory: store.get(INVENTORY_KEY),
            visited: store.get(VISITED_KEY),
            selected_item: None,
        }
    }

    pub fn current_location(&self) -> &str {
        &self.current_location
    }

    pub(crate) fn set_current_location(&mut self, location_id: &str) {
        self.current_location = location_id.to_string();
    }

    pub fn characters(&self) -> &[String] {
        &self.characters
    }

    pub fn friends(&self) -> &[String] {
        &self.friends
    }

    pub fn inventory(&self) -> &[InventoryEntry] {
        &self.inventory
    }

    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.selected_item.as_deref()
    }

    pub fn quantity(&self, item: &str) -> u32 {
        self.inventory
            .iter()
            .find(|entry| entry.name == item)
            .map(|entry| entry.quantity)
            .unwrap_or(0)
    }

    pub fn is_friend(&self, name: &str) -> bool {
        self.friends.iter().any(|friend| friend == name)
    }

    pub fn has_visited(&self, location_id: &str) -> bool {
        self.visited.iter().any(|visited| visited == location_id)
    }

    /// Adds one unit of `item`, returning the new carried quantity.
    pub(crate) fn add_item(&mut self, item: &str) -> u32 {
        match self.inventory.iter_mut().find(|entry| entry.name == item) {
            Some(entry) => {
                entry.quantity += 1;
                entry.quantity
            }
            None => {
                self.inventory.push(InventoryEntry::new(item, 1));
                1
            }
        }
    }

    /// Removes one unit of `item`, dropping the entry when it reaches zero.
    /// Returns false when nothing is carried.
    pub(crate) fn consume_item(&mut self, item: &str) -> bool {
        let Some(index) = self.inventory.iter().position(|entry| entry.name == item) else {
            return false;
        };
        let entry = &mut self.inventory[index];
        if entry.quantity == 0 {
            return false;
        }
        entry.quantity -= 1;
        if entry.quantity == 0 {
            self.inventory.remove(index);
        }
        true
    }

    /// Returns true when `name` was not already a friend.
    pub(crate) fn add_friend(&mut self, name: &str) -> bool {
        if self.is_friend(name) {
            return false;
        }
        self.friends.push(name.to_string());
        true
    }

    /// Returns true when `location_id` had never been visited before.
    pub(crate) fn mark_visited(&mut self, location_id: &str) -> bool {
        if self.has_visited(location_id) {
            return false;
        }
        self.visited.push(location_id.to_string());
        true
    }

    pub(crate) fn select(&mut self, item: &str) {
        self.selected_item = Some(item.to_string());
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected_item = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_state() -> GameState {
        GameState::from_store(&SessionStore::default(), "inicio")
    }

    #[test]
    fn acquiring_the_same_item_twice_stacks_it() {
        let mut state = fresh_state();
        assert_eq!(state.add_item("zanahoria"), 1);
        assert_eq!(state.add_item("zanahoria"), 2);
        assert_eq!(state.quantity("zanahoria"), 2);
        assert_eq!(state.inventory().len(), 1);
    }

    #[test]
    fn consuming_the_last_unit_drops_the_entry() {
        let mut state = fresh_state();
        state.add_item("pechina");
        state.add_item("pechina");
        assert!(state.consume_item("pechina"));
        assert_eq!(state.quantity("pechina"), 1);
        assert!(state.consume_item("pechina"));
        assert_eq!(state.quantity("pechina"), 0);
        assert!(state.inventory().is_empty());
    }

    #[test]
    fn consuming_an_absent_item_changes_nothing() {
        let mut state = fresh_state();
        state.add_item("botiquin");
        assert!(!state.consume_item("zanahoria"));
        assert_eq!(state.quantity("botiquin"), 1);
    }

    #[test]
    fn friends_are_recorded_once_in_arrival_order() {
        let mut state = fresh_state();
        assert!(state.add_friend("Conejo"));
        assert!(state.add_friend("Foca"));
        assert!(!state.add_friend("Conejo"));
        assert_eq!(state.friends(), ["Conejo".to_string(), "Foca".to_string()]);
    }

    #[test]
    fn repeat_visits_are_not_logged_again() {
        let mut state = fresh_state();
        assert!(state.mark_visited("bosque"));
        assert!(!state.mark_visited("bosque"));
        assert_eq!(state.visited(), ["bosque".to_string()]);
    }
}
