//! CLI subcommands.

pub mod banks;
pub mod batch;
pub mod extract;
pub mod samples;

use std::path::Path;

use cardex_core::pdf::TextRenderer;
use cardex_core::{CardexConfig, CardexError, StatementRenderer};

/// Load configuration from the optional `--config` path.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<CardexConfig> {
    Ok(match config_path {
        Some(path) => CardexConfig::from_file(Path::new(path))
            .map_err(|e| CardexError::Config(format!("{}: {}", path, e)))?,
        None => CardexConfig::default(),
    })
}

/// Read a statement file as rendered text.
///
/// PDFs go through the renderer; anything else is treated as
/// already-rendered text (the `samples` command emits such files).
pub fn read_statement_text(path: &Path, config: &CardexConfig) -> anyhow::Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if extension == "pdf" {
        let data = std::fs::read(path)?;
        let mut renderer = StatementRenderer::new().with_max_pages(config.pdf.max_pages);
        renderer.load(&data)?;
        Ok(renderer.render_text()?)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
