use std::cell::{
    Ref,
    RefCell
};
use std::fs::File;
use std::io::{
    BufReader,
    Read
};

use serde::Deserialize;
use thiserror::Error;

use crate::integration::Integrator;
use crate::plot::plotconfig::PlotConfig;
use crate::plot::plotrenderer::PlotRenderer;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    IOError(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    JsonParseError(#[from] serde_json::Error)
}

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    plot: PlotConfig
}

/// Process-level settings, loaded from a JSON document of the form
/// `{ "plot": { ... } }`. Nothing here influences the quadrature itself.
pub struct Configuration {
    plot_config_cell: RefCell<PlotConfig>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            plot_config_cell: RefCell::new(PlotConfig::default())
        }
    }

    pub fn plot_config(&self) -> Ref<'_, PlotConfig> {
        self.plot_config_cell.borrow()
    }

    pub fn renderer(&self) -> PlotRenderer {
        PlotRenderer::new(self.plot_config().clone())
    }

    pub fn integrator(&self) -> Integrator {
        Integrator::new(self.renderer())
    }

    pub fn from_reader(&self, file_path: &str) -> Result<(), ConfigurationError> {
        let file = File::open(file_path)?;
        self.read(BufReader::new(file))
    }

    pub fn read<R: Read>(&self, reader: R) -> Result<(), ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.plot_config_cell.replace(json_prop.plot);
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
