pub mod additivity;
pub mod bond;
pub mod config;
pub mod element;
pub mod survey;

use crate::cli::DataOptions;
use crate::error::{CliError, Result};
use elementa::engine::config::{GeneratorConfig, GeneratorConfigBuilder};
use elementa::engine::generator::ElementGenerator;
use tracing::info;

fn generator_config(options: &DataOptions) -> Result<GeneratorConfig> {
    let mut builder = GeneratorConfigBuilder::new()
        .profile(options.profile.as_str())
        .model(options.model.as_str());
    if let Some(path) = &options.profiles {
        builder = builder.profiles_path(path.clone());
    }
    if let Some(path) = &options.database {
        builder = builder.database_path(path.clone());
    }
    builder
        .build()
        .map_err(|e| CliError::Elementa(e.into()))
}

fn build_generator(options: &DataOptions) -> Result<ElementGenerator> {
    let config = generator_config(options)?;
    let generator = ElementGenerator::new(&config)?;
    info!("Using {}", generator);
    Ok(generator)
}

#[cfg(test)]
pub(crate) fn default_options() -> DataOptions {
    DataOptions {
        profile: "default".to_string(),
        profiles: None,
        database: None,
        model: elementa::engine::config::DEFAULT_MODEL.to_string(),
    }
}
