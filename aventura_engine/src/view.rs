use aventura_store::InventoryEntry;
use aventura_world::Action;
use serde::Serialize;

/// What the main stage should show for the current location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneView {
    pub location: String,
    pub background: String,
    pub zone: String,
    /// True when clicking the stage itself may spend the selected item.
    pub item_interactive: bool,
    /// Transitions still open to the player, in declaration order.
    pub actions: Vec<Action>,
}

impl SceneView {
    pub fn has_move_to(&self, target: &str) -> bool {
        self.actions.iter().any(|action| {
            matches!(action, Action::Move { target: declared, .. } if declared == target)
        })
    }
}

/// What the side panels should show: the party, the friends made so far,
/// and the bag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelView {
    pub characters: Vec<String>,
    pub friends: Vec<String>,
    pub inventory: Vec<InventoryEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_item: Option<String>,
}
