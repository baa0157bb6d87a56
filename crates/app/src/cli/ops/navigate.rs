use clap::Args;

use common::prelude::{Guard, Navigation, RouteTable};
use shelf::state::{AppState, StateError};

#[derive(Args, Debug, Clone)]
pub struct Navigate {
    /// Path to navigate to, e.g. /library or /search/abc123
    pub path: String,
}

#[derive(Debug, thiserror::Error)]
pub enum NavigateError {
    #[error("State error: {0}")]
    State(#[from] StateError),
}

#[async_trait::async_trait]
impl crate::cli::op::Op for Navigate {
    type Error = NavigateError;
    type Output = String;

    async fn execute(&self, ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let state = AppState::load_or_default(ctx.config_path.clone())?;
        let guard = Guard::new(RouteTable::default(), state.credentials());

        let output = match guard.navigate(&self.path) {
            Navigation::Proceed(matched) => {
                let mut line = format!("proceed: {} ({})", matched.route.name, matched.route.view);
                for (name, value) in &matched.params {
                    line.push_str(&format!("\n  {}: {}", name, value));
                }
                line
            }
            Navigation::Redirect { from, to } => format!("redirect: {} -> {}", from, to),
            Navigation::NotFound { path } => format!("not found: {}", path),
        };
        Ok(output)
    }
}
