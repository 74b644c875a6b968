//! Session runtime for the adventure: a synchronous state machine that walks
//! the world graph, persists progress through the session store as it
//! happens, and reports every visible change through a pluggable scene sink.

mod error;
mod session;
mod sink;
mod state;
mod view;

pub use error::EngineError;
pub use session::{Session, SessionPolicy, UseOutcome};
pub use sink::{RecordingSceneSink, SceneSink};
pub use state::GameState;
pub use view::{PanelView, SceneView};
