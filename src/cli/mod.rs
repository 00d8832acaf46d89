pub mod commands;
pub mod analyze;
pub mod lookup;
pub mod serve;
pub mod validate;

pub use commands::{Cli, Commands};

use std::path::Path;
use crate::config::{load_config, ObserverConfig};
use crate::errors::ObserverError;

pub(crate) async fn config_from_arg(path: Option<&str>) -> Result<ObserverConfig, ObserverError> {
    load_config(path.map(Path::new)).await
}
