use aventura_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("unknown location '{0}'")]
    UnknownLocation(String),
}

impl From<WorldError> for EngineError {
    fn from(err: WorldError) -> Self {
        match err {
            WorldError::UnknownLocation { location, .. } => EngineError::UnknownLocation(location),
        }
    }
}
