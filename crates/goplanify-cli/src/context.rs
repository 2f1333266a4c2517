use crate::args::OutputFormat;
use crate::catalog;
use crate::presentation::ConsoleRenderer;
use anyhow::Result;
use goplanify_runtime::{
    Config, SourceKind, StoreConfig, TripSource, TripStore, UnavailableSource,
};
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

/// Per-invocation state shared by every handler.
///
/// The config file is read on first use, so `config init` still works when
/// an existing file fails to parse.
pub struct ExecutionContext {
    data_dir: PathBuf,
    config: OnceLock<Config>,
    format: OutputFormat,
    screen_width: Option<u32>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, format: OutputFormat, screen_width: Option<u32>) -> Self {
        Self {
            data_dir,
            config: OnceLock::new(),
            format,
            screen_width,
        }
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn config(&self) -> Result<&Config> {
        if let Some(config) = self.config.get() {
            return Ok(config);
        }
        let loaded = Config::load_from(&self.config_path())?;
        Ok(self.config.get_or_init(|| loaded))
    }

    pub fn renderer(&self) -> ConsoleRenderer {
        ConsoleRenderer::new(self.format == OutputFormat::Json)
    }

    /// `--screen-width` when given, otherwise the configured width
    pub fn screen_width(&self) -> Result<u32> {
        match self.screen_width {
            Some(width) => Ok(width),
            None => Ok(self.config()?.display.screen_width_dp),
        }
    }

    /// Trip store backed by the configured source
    pub fn trip_store(&self) -> Result<Arc<TripStore>> {
        let config = self.config()?;
        let source: Arc<dyn TripSource> = match config.store.source {
            SourceKind::Demo => Arc::new(catalog::demo_source()),
            SourceKind::Remote => Arc::new(UnavailableSource),
        };
        tracing::debug!(source = source.name(), "trip source selected");

        Ok(Arc::new(TripStore::with_config(
            source,
            StoreConfig::from(config),
        )))
    }
}
