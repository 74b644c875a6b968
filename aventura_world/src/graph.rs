use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Player-facing transition offered by a location.
///
/// Every variant carries the button text and icon the presentation layer
/// renders; the runtime only dispatches on the variant itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    Move {
        target: String,
        text: String,
        icon: String,
    },
    AcquireItem {
        item: String,
        text: String,
        icon: String,
    },
    Befriend {
        friend: String,
        text: String,
        icon: String,
    },
}

impl Action {
    pub fn move_to(
        target: impl Into<String>,
        text: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Action::Move {
            target: target.into(),
            text: text.into(),
            icon: icon.into(),
        }
    }

    pub fn acquire(
        item: impl Into<String>,
        text: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Action::AcquireItem {
            item: item.into(),
            text: text.into(),
            icon: icon.into(),
        }
    }

    pub fn befriend(
        friend: impl Into<String>,
        text: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Action::Befriend {
            friend: friend.into(),
            text: text.into(),
            icon: icon.into(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Action::Move { text, .. }
            | Action::AcquireItem { text, .. }
            | Action::Befriend { text, .. } => text,
        }
    }
}

/// One node of the location graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub id: String,
    pub background: String,
    pub zone: String,
    pub actions: Vec<Action>,
}

/// Item-gift rule attached to a single location: handing over the required
/// item befriends the animal there and moves the player on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleRule {
    pub required_item: String,
    pub friend: String,
    pub resolved_location: String,
    pub hint: String,
    pub success: String,
}

impl PuzzleRule {
    pub fn new(
        required_item: impl Into<String>,
        friend: impl Into<String>,
        resolved_location: impl Into<String>,
        hint: impl Into<String>,
        success: impl Into<String>,
    ) -> Self {
        PuzzleRule {
            required_item: required_item.into(),
            friend: friend.into(),
            resolved_location: resolved_location.into(),
            hint: hint.into(),
            success: success.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("unknown location '{location}' referenced by {referenced_by}")]
    UnknownLocation {
        location: String,
        referenced_by: String,
    },
}

impl WorldError {
    fn unknown(location: &str, referenced_by: impl Into<String>) -> Self {
        WorldError::UnknownLocation {
            location: location.to_string(),
            referenced_by: referenced_by.into(),
        }
    }
}

/// Validated, immutable world graph plus the campaign's seed data.
#[derive(Debug, Clone)]
pub struct World {
    locations: BTreeMap<String, Location>,
    puzzles: BTreeMap<String, PuzzleRule>,
    messages: BTreeMap<String, String>,
    fallback_message: String,
    start: String,
    roster: Vec<String>,
    starting_items: Vec<(String, u32)>,
}

impl World {
    pub fn get(&self, location_id: &str) -> Result<&Location, WorldError> {
        self.locations
            .get(location_id)
            .ok_or_else(|| WorldError::unknown(location_id, "session lookup"))
    }

    pub fn contains(&self, location_id: &str) -> bool {
        self.locations.contains_key(location_id)
    }

    /// Returns the gift rule for a location, if it hosts one.
    pub fn puzzle(&self, location_id: &str) -> Option<&PuzzleRule> {
        self.puzzles.get(location_id)
    }

    /// Narration for the first visit to a location. Locations without a
    /// bespoke message share the generic arrival line.
    pub fn arrival_message(&self, location_id: &str) -> &str {
        self.messages
            .get(location_id)
            .map(String::as_str)
            .unwrap_or(&self.fallback_message)
    }

    pub fn start_location(&self) -> &str {
        &self.start
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    /// Items every fresh session begins with, as `(item, quantity)` pairs.
    pub fn starting_items(&self) -> &[(String, u32)] {
        &self.starting_items
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// Accumulates campaign data and checks that the finished graph is closed:
/// every move target, puzzle site, and the start location must be declared.
#[derive(Debug, Default)]
pub struct WorldBuilder {
    locations: BTreeMap<String, Location>,
    puzzles: BTreeMap<String, PuzzleRule>,
    messages: BTreeMap<String, String>,
    fallback_message: String,
    start: String,
    roster: Vec<String>,
    starting_items: Vec<(String, u32)>,
}

impl WorldBuilder {
    pub fn new(start: impl Into<String>) -> Self {
        WorldBuilder {
            start: start.into(),
            ..WorldBuilder::default()
        }
    }

    pub fn character(mut self, name: impl Into<String>) -> Self {
        self.roster.push(name.into());
        self
    }

    pub fn starting_item(mut self, item: impl Into<String>, quantity: u32) -> Self {
        self.starting_items.push((item.into(), quantity));
        self
    }

    pub fn fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    pub fn message(mut self, location_id: impl Into<String>, message: impl Into<String>) -> Self {
        self.messages.insert(location_id.into(), message.into());
        self
    }

    pub fn location(
        mut self,
        id: impl Into<String>,
        background: impl Into<String>,
        zone: impl Into<String>,
        actions: Vec<Action>,
    ) -> Self {
        let id = id.into();
        self.locations.insert(
            id.clone(),
            Location {
                id,
                background: background.into(),
                zone: zone.into(),
                actions,
            },
        );
        self
    }

    pub fn puzzle(mut self, location_id: impl Into<String>, rule: PuzzleRule) -> Self {
        self.puzzles.insert(location_id.into(), rule);
        self
    }

    pub fn build(self) -> Result<World, WorldError> {
        for location in self.locations.values() {
            for action in &location.actions {
                if let Action::Move { target, .. } = action {
                    if !self.locations.contains_key(target) {
                        return Err(WorldError::unknown(
                            target,
                            format!("action '{}' at {}", action.text(), location.id),
                        ));
                    }
                }
            }
        }
        for (location_id, rule) in &self.puzzles {
            if !self.locations.contains_key(location_id) {
                return Err(WorldError::unknown(location_id, "a puzzle rule"));
            }
            if !self.locations.contains_key(&rule.resolved_location) {
                return Err(WorldError::unknown(
                    &rule.resolved_location,
                    format!("the puzzle at {location_id}"),
                ));
            }
        }
        if !self.locations.contains_key(&self.start) {
            return Err(WorldError::unknown(&self.start, "the start location"));
        }
        Ok(World {
            locations: self.locations,
            puzzles: self.puzzles,
            messages: self.messages,
            fallback_message: self.fallback_message,
            start: self.start,
            roster: self.roster,
            starting_items: self.starting_items,
        })
    }
}
