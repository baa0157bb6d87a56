use clap::Args;

use common::prelude::{StoreError, TOKEN_KEY};
use shelf::state::{AppState, StateError};

#[derive(Args, Debug, Clone)]
pub struct Login {
    /// Session token issued by the shelf backend
    #[arg(long)]
    pub token: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("State error: {0}")]
    State(#[from] StateError),
    #[error("Session store error: {0}")]
    Store(#[from] StoreError),
    #[error("token must not be empty")]
    EmptyToken,
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Login {
    type Error = LoginError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        // An empty token reads as signed out, so refuse to store one
        if self.token.is_empty() {
            return Err(LoginError::EmptyToken);
        }

        let state = AppState::load_or_default(ctx.config_path.clone())?;
        state.session_store().set(TOKEN_KEY, &self.token)?;
        tracing::info!(path = %state.session_path.display(), "session token stored");

        Ok("Logged in".to_string())
    }
}
