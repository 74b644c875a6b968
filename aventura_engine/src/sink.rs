use std::{cell::RefCell, fmt, rc::Rc};

use crate::view::{PanelView, SceneView};

/// Minimal adapter for routing presentation updates to interested observers.
///
/// Every hook has an empty default body, so a sink only implements the
/// channels it cares about.
pub trait SceneSink {
    fn scene_changed(&self, _scene: &SceneView) {}
    fn panels_changed(&self, _panels: &PanelView) {}
    fn popup(&self, _message: &str) {}
}

impl fmt::Debug for dyn SceneSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SceneSink")
    }
}

/// Sink that records every update it receives, for harnesses and tests.
#[derive(Clone, Default)]
pub struct RecordingSceneSink {
    scenes: Rc<RefCell<Vec<SceneView>>>,
    panels: Rc<RefCell<Vec<PanelView>>>,
    popups: Rc<RefCell<Vec<String>>>,
}

impl RecordingSceneSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scenes(&self) -> Vec<SceneView> {
        self.scenes.borrow().clone()
    }

    pub fn last_scene(&self) -> Option<SceneView> {
        self.scenes.borrow().last().cloned()
    }

    pub fn panels(&self) -> Vec<PanelView> {
        self.panels.borrow().clone()
    }

    pub fn last_panels(&self) -> Option<PanelView> {
        self.panels.borrow().last().cloned()
    }

    pub fn popups(&self) -> Vec<String> {
        self.popups.borrow().clone()
    }
}

impl SceneSink for RecordingSceneSink {
    fn scene_changed(&self, scene: &SceneView) {
        self.scenes.borrow_mut().push(scene.clone());
    }

    fn panels_changed(&self, panels: &PanelView) {
        self.panels.borrow_mut().push(panels.clone());
    }

    fn popup(&self, message: &str) {
        self.popups.borrow_mut().push(message.to_string());
    }
}
