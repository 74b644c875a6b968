//! Static world definition for the adventure: the location graph, the
//! friendship puzzles, and the arrival narration. Everything here is immutable
//! campaign data; session state lives with the runtime that walks this graph.

mod content;
mod graph;

pub use content::campaign_world;
pub use graph::{Action, Location, PuzzleRule, World, WorldBuilder, WorldError};
