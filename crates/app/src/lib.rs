// App state (configuration, paths, session)
pub mod state;

pub use state::{AppConfig, AppState, StateError};
