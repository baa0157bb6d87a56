use clap::{Args, Subcommand};

pub mod login;
pub mod logout;
pub mod status;

use crate::cli::op::Op;

crate::command_enum! {
    (Login, login::Login),
    (Logout, logout::Logout),
    (Status, status::Status),
}

// Rename the generated Command to SessionCommand for clarity
pub type SessionCommand = Command;

/// Manage the stored login token that the navigation guard checks
#[derive(Args, Debug, Clone)]
pub struct Session {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[async_trait::async_trait]
impl Op for Session {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}
