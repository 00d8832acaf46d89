use crate::cli::commands::LookupArgs;
use crate::errors::ObserverError;
use crate::api::load_registry;
use crate::registry::is_address;
use crate::utils::formatting::severity_badge;

pub async fn handle_lookup(args: LookupArgs) -> Result<(), ObserverError> {
    let address = args.address.trim();
    if !is_address(address) {
        return Err(ObserverError::Validation(format!(
            "'{}' is not an address (expected 0x followed by 40 hex digits)",
            address
        )));
    }

    let config = super::config_from_arg(args.config.as_deref()).await?;
    let registry = load_registry(&config)?;
    let hit = registry.find(address);

    if args.json {
        let body = match hit {
            Some(contract) => serde_json::json!({ "found": true, "contract": contract }),
            None => serde_json::json!({ "found": false }),
        };
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    match hit {
        Some(c) => {
            println!("{} {} ({})", severity_badge(c.severity), c.name, c.chain);
            println!("  Address:       {}", c.address);
            println!("  Vulnerability: {}", c.vulnerability);
            println!("  Exploitable:   {}", if c.exploitable { "yes" } else { "no" });
            if !c.notes.is_empty() {
                println!("  Notes:         {}", c.notes);
            }
            println!("  Identified:    {}", c.date_identified);
        }
        None => println!("{} is not in the vulnerable contract catalog", address),
    }
    Ok(())
}
