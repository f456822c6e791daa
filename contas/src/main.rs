use anyhow::Result;

use contas::{config::Settings, App};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load()?;

    // Logging is initialized in App::run() with buffer support
    App::new(settings).run().await?;

    Ok(())
}
