use clap::{Args, Subcommand};

pub mod search;
pub mod show;

use crate::cli::op::Op;

crate::command_enum! {
    (Show, show::Show),
    (Search, search::Search),
}

// Rename the generated Command to BookCommand for clarity
pub type BookCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Book {
    #[command(subcommand)]
    pub command: BookCommand,
}

#[async_trait::async_trait]
impl Op for Book {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}
