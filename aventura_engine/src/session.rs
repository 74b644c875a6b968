use std::rc::Rc;

use aventura_store::{
    InventoryEntry, SessionStore, CHARACTERS_KEY, FRIENDS_KEY, INVENTORY_KEY, VISITED_KEY,
};
use aventura_world::{Action, Location, World};

use crate::error::EngineError;
use crate::sink::SceneSink;
use crate::state::GameState;
use crate::view::{PanelView, SceneView};

/// How to reconcile saved progress when a session boots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPolicy {
    /// Keep whatever the store already holds; seed only keys never written.
    Resume,
    /// Discard saved progress and reseed every session document.
    Reset,
}

impl SessionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPolicy::Resume => "resume",
            SessionPolicy::Reset => "reset",
        }
    }
}

/// Result of clicking the stage with (or without) a selected item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseOutcome {
    /// The gift matched: a friend was made and the scene moved on.
    Solved { friend: String, location: String },
    /// The location hosts a puzzle but the offer did not satisfy it.
    Hinted,
    /// An ordinary location swallowed the selected item to no effect.
    Wasted,
    /// Nothing was consumed.
    Rejected,
}

/// A live play session: one player walking the world graph.
///
/// Every mutation lands in the session store the moment it happens and is
/// mirrored to the scene sink, so a presentation layer only ever repaints
/// what the session tells it to. The event log keeps a line per change for
/// harness transcripts and regression checks.
#[derive(Debug)]
pub struct Session<'a> {
    world: &'a World,
    store: SessionStore,
    sink: Option<Rc<dyn SceneSink>>,
    state: GameState,
    events: Vec<String>,
}

impl<'a> Session<'a> {
    /// Boots a session against `store`, seeding missing documents (or all of
    /// them under [`SessionPolicy::Reset`]) and entering the start location.
    pub fn start(
        world: &'a World,
        mut store: SessionStore,
        sink: Option<Rc<dyn SceneSink>>,
        policy: SessionPolicy,
    ) -> Result<Self, EngineError> {
        seed_documents(&mut store, world, policy);
        let state = GameState::from_store(&store, world.start_location());
        let mut session = Session {
            world,
            store,
            sink,
            state,
            events: Vec::new(),
        };
        session.log_event(format!("session.start {}", policy.as_str()));
        session.publish_panels();
        let start = session.world.start_location().to_string();
        session.change_location(&start)?;
        Ok(session)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn events(&self) -> &[String] {
        &self.events
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Appends a line to the session event log.
    pub fn log_event(&mut self, line: impl Into<String>) {
        self.events.push(line.into());
    }

    /// Moves the player, narrating and recording a first visit, and
    /// republishes the scene.
    pub fn change_location(&mut self, target: &str) -> Result<(), EngineError> {
        let location = self.world.get(target)?;
        self.state.set_current_location(target);
        self.log_event(format!("location.enter {target}"));
        if self.state.mark_visited(target) {
            self.store.save(VISITED_KEY, &self.state.visited());
            self.log_event(format!("location.first_visit {target}"));
            let message = self.world.arrival_message(target);
            self.popup(message);
        }
        self.publish_scene(location);
        Ok(())
    }

    /// Adds one unit of an item to the bag and persists the new count.
    pub fn acquire_item(&mut self, item: &str) {
        let quantity = self.state.add_item(item);
        self.store.save(INVENTORY_KEY, &self.state.inventory());
        self.log_event(format!("item.acquire {item} x{quantity}"));
        self.publish_panels();
    }

    /// Records a new friend (repeat calls change nothing) and walks back to
    /// `return_to`. An unknown return location aborts before anything is
    /// recorded.
    pub fn befriend(&mut self, friend: &str, return_to: &str) -> Result<(), EngineError> {
        self.world.get(return_to)?;
        if self.state.add_friend(friend) {
            self.store.save(FRIENDS_KEY, &self.state.friends());
            self.log_event(format!("friend.add {friend}"));
            self.publish_panels();
        }
        self.change_location(return_to)
    }

    /// Spends one unit of an item. Returns false when none is carried.
    pub fn use_item(&mut self, item: &str) -> bool {
        if !self.state.consume_item(item) {
            return false;
        }
        self.store.save(INVENTORY_KEY, &self.state.inventory());
        self.log_event(format!("item.use {item}"));
        self.publish_panels();
        true
    }

    /// Selects an item for gifting, or clears the selection when the same
    /// item is toggled again.
    pub fn toggle_selected(&mut self, item: &str) {
        if self.state.selected_item() == Some(item) {
            self.state.clear_selection();
            self.log_event(format!("item.deselect {item}"));
        } else {
            self.state.select(item);
            self.log_event(format!("item.select {item}"));
        }
        self.publish_panels();
    }

    /// Clicks the stage: resolves the local puzzle when the selected item
    /// matches, otherwise hints, wastes the item, or rejects the attempt.
    pub fn try_use_item(&mut self) -> Result<UseOutcome, EngineError> {
        let here = self.state.current_location().to_string();
        if let Some(rule) = self.world.puzzle(&here) {
            let offered = self.state.selected_item() == Some(rule.required_item.as_str());
            if offered && self.use_item(&rule.required_item) {
                self.popup(&rule.success);
                self.log_event(format!("puzzle.solved {here} {}", rule.friend));
                self.state.clear_selection();
                self.publish_panels();
                self.befriend(&rule.friend, &rule.resolved_location)?;
                return Ok(UseOutcome::Solved {
                    friend: rule.friend.clone(),
                    location: rule.resolved_location.clone(),
                });
            }
            self.popup(&rule.hint);
            return Ok(UseOutcome::Hinted);
        }

        let Some(item) = self.state.selected_item().map(str::to_string) else {
            self.popup("No puedes usar eso aquí.");
            return Ok(UseOutcome::Rejected);
        };
        if self.use_item(&item) {
            self.popup(&format!("Has usado {item}, pero no pasa nada aquí."));
            self.state.clear_selection();
            self.publish_panels();
            Ok(UseOutcome::Wasted)
        } else {
            self.popup("No puedes usar eso aquí.");
            Ok(UseOutcome::Rejected)
        }
    }

    /// Dispatches one player-chosen action from the current scene.
    pub fn perform(&mut self, action: &Action) -> Result<(), EngineError> {
        match action {
            Action::Move { target, .. } => self.change_location(target),
            Action::AcquireItem { item, .. } => {
                self.acquire_item(item);
                let here = self.state.current_location().to_string();
                self.change_location(&here)
            }
            Action::Befriend { friend, .. } => {
                let here = self.state.current_location().to_string();
                self.befriend(friend, &here)
            }
        }
    }

    /// The scene for the current location, with resolved entries filtered out.
    pub fn current_scene(&self) -> Result<SceneView, EngineError> {
        let location = self.world.get(self.state.current_location())?;
        Ok(self.scene_for(location))
    }

    /// The party, friend, and inventory panels as they should render now.
    pub fn panels(&self) -> PanelView {
        PanelView {
            characters: self.state.characters().to_vec(),
            friends: self.state.friends().to_vec(),
            inventory: self.state.inventory().to_vec(),
            selected_item: self.state.selected_item().map(str::to_string),
        }
    }

    /// Writes the session documents to the store's backing file.
    pub fn flush(&mut self) -> anyhow::Result<()> {
        self.store.flush()
    }

    fn scene_for(&self, location: &Location) -> SceneView {
        SceneView {
            location: location.id.clone(),
            background: location.background.clone(),
            zone: location.zone.clone(),
            item_interactive: self.world.puzzle(&location.id).is_some(),
            actions: self.visible_actions(location),
        }
    }

    /// Filters out entries the player has already resolved: moves into a
    /// solved puzzle site and befriend offers for an existing friend.
    fn visible_actions(&self, location: &Location) -> Vec<Action> {
        location
            .actions
            .iter()
            .filter(|action| match action {
                Action::Move { target, .. } => !self.puzzle_solved(target),
                Action::Befriend { friend, .. } => !self.state.is_friend(friend),
                Action::AcquireItem { .. } => true,
            })
            .cloned()
            .collect()
    }

    fn puzzle_solved(&self, location_id: &str) -> bool {
        self.world
            .puzzle(location_id)
            .map(|rule| self.state.is_friend(&rule.friend))
            .unwrap_or(false)
    }

    fn publish_scene(&self, location: &Location) {
        if let Some(sink) = &self.sink {
            sink.scene_changed(&self.scene_for(location));
        }
    }

    fn publish_panels(&self) {
        if let Some(sink) = &self.sink {
            sink.panels_changed(&self.panels());
        }
    }

    fn popup(&mut self, message: &str) {
        self.log_event(format!("popup {message}"));
        if let Some(sink) = &self.sink {
            sink.popup(message);
        }
    }
}

fn seed_documents(store: &mut SessionStore, world: &World, policy: SessionPolicy) {
    let reset = policy == SessionPolicy::Reset;
    if reset || !store.contains(CHARACTERS_KEY) {
        store.save(CHARACTERS_KEY, &world.roster());
    }
    if reset || !store.contains(FRIENDS_KEY) {
        store.save(FRIENDS_KEY, &Vec::<String>::new());
    }
    if reset || !store.contains(INVENTORY_KEY) {
        let starter: Vec<InventoryEntry> = world
            .starting_items()
            .iter()
            .map(|(item, quantity)| InventoryEntry::new(item.clone(), *quantity))
            .collect();
        store.save(INVENTORY_KEY, &starter);
    }
    if reset || !store.contains(VISITED_KEY) {
        store.save(VISITED_KEY, &Vec::<String>::new());
    }
}
