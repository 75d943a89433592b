use crudinator::error::Result;
use crudinator::schema::render_sdl;

/// Run the sdl command: render the GraphQL types and signatures
pub fn run(config_path: String, output: Option<String>) -> Result<()> {
    tracing::info!("📖 Loading configuration from {}", config_path);

    let config = crudinator::config::load_config(&config_path)?;

    tracing::info!("🔧 Rendering SDL for {} service(s)...", config.service.len());
    let sdl = render_sdl(&config)?;
    tracing::info!("✅ SDL parsed successfully");

    crate::cli::emit(&sdl, output.as_deref())
}
