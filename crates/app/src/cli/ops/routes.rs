use std::convert::Infallible;

use clap::Args;

use common::prelude::RouteTable;

#[derive(Args, Debug, Clone)]
pub struct Routes;

#[async_trait::async_trait]
impl crate::cli::op::Op for Routes {
    type Error = Infallible;
    type Output = String;

    async fn execute(&self, _ctx: &crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
        let table = RouteTable::default();
        let output = table
            .routes()
            .iter()
            .map(|route| {
                let access = if route.requires_auth { "login" } else { "public" };
                format!(
                    "{:<14} {:<14} {:<18} {}",
                    route.path, route.name, route.view, access
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        Ok(output)
    }
}
