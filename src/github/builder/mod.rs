pub mod list_repositories_builder;

use anyhow::Result;

pub trait BuilderExecutor {
    type Output;

    async fn execute(self) -> Result<Self::Output>;
}
