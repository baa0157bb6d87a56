use clap::Args;

use common::prelude::CredentialProvider;
use shelf::state::{AppState, StateError};

#[derive(Args, Debug, Clone)]
pub struct Status;

#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    #[error("State error: {0}")]
    State(#[from] StateError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Status {
    type Error = StatusError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let state = AppState::load_or_default(ctx.config_path.clone())?;
        let status = if state.credentials().has_token() {
            "logged in"
        } else {
            "logged out"
        };
        Ok(format!(
            "Session: {}\n  store: {}",
            status,
            state.session_path.display()
        ))
    }
}
