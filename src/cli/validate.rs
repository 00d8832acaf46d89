use std::path::Path;
use crate::cli::commands::ValidateArgs;
use crate::config::{parse_config, LLMSettings};
use crate::errors::ObserverError;
use crate::llm::catalog::describe_model;
use crate::api::load_registry;
use tracing::warn;

pub async fn handle_validate(args: ValidateArgs) -> Result<(), ObserverError> {
    let config = parse_config(Path::new(&args.config)).await?;
    let registry = load_registry(&config)?;

    // A missing credential is only fatal at serve time.
    let model = match LLMSettings::resolve(config.llm.as_ref()) {
        Ok(settings) => describe_model(&settings.provider, &settings.model),
        Err(e) => {
            warn!(error = %e, "Model credential not available");
            "unresolved".to_string()
        }
    };

    println!("Configuration is valid: {}", args.config);
    println!("  model:    {}", model);
    println!("  listen:   {}:{}", config.host(), config.port());
    println!("  database: {}", config.db_path());
    println!("  catalog:  {} vulnerable contracts", registry.records().len());
    Ok(())
}
