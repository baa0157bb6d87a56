use clap::Args;

use common::prelude::{StoreError, TOKEN_KEY};
use shelf::state::{AppState, StateError};

#[derive(Args, Debug, Clone)]
pub struct Logout;

#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("State error: {0}")]
    State(#[from] StateError),
    #[error("Session store error: {0}")]
    Store(#[from] StoreError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Logout {
    type Error = LogoutError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let state = AppState::load_or_default(ctx.config_path.clone())?;
        if state.session_store().remove(TOKEN_KEY)? {
            Ok("Logged out".to_string())
        } else {
            Ok("Not logged in".to_string())
        }
    }
}
