pub mod check;
pub mod example;
pub mod generate;
pub mod init;
pub mod sdl;

use crudinator::error::Result;

/// Write `contents` to `output`, or to stdout when no path is given
pub fn emit(contents: &str, output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, contents)?;
            tracing::info!("📝 Wrote {}", path);
        }
        None => println!("{}", contents),
    }
    Ok(())
}
