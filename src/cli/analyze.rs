use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use crate::analysis::{local_findings, AnalysisResult, ContractAnalyzer, LocalFindings};
use crate::api::load_registry;
use crate::cli::commands::AnalyzeArgs;
use crate::config::LLMSettings;
use crate::errors::ObserverError;
use crate::knowledge::KnowledgeBase;
use crate::llm::create_provider;
use crate::utils::formatting::{format_duration, format_match, probability_bar, severity_badge};
use tracing::info;

pub async fn handle_analyze(args: AnalyzeArgs) -> Result<(), ObserverError> {
    let path = Path::new(&args.file);
    if !path.exists() {
        return Err(ObserverError::Validation(format!("Contract file not found: {}", args.file)));
    }
    let source = tokio::fs::read_to_string(path).await?;
    if source.trim().is_empty() {
        return Err(ObserverError::Validation("Contract code is required".into()));
    }

    let config = super::config_from_arg(args.config.as_deref()).await?;
    let knowledge = Arc::new(KnowledgeBase::builtin()?);
    let registry = Arc::new(load_registry(&config)?);

    if args.offline {
        let findings = local_findings(&knowledge, &registry, &source);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&findings)?);
        } else {
            print_findings(&findings);
        }
        return Ok(());
    }

    let settings = LLMSettings::resolve(config.llm.as_ref())?;
    let llm = create_provider(&settings)?;
    let analyzer = ContractAnalyzer::new(llm, knowledge, registry, settings.timeout);

    let started = Instant::now();
    let result = analyzer.analyze(&source, args.address.as_deref()).await?;
    info!(elapsed = %format_duration(u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)), "Analysis complete");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }
    Ok(())
}

fn print_findings(findings: &LocalFindings) {
    print_list("Vulnerability patterns", &findings.patterns);
    print_list("Attack vectors", &findings.attack_vectors);
    print_list("Principle violations", &findings.principle_violations);

    println!("Known vulnerable interactions ({}):", findings.known_vulnerable_interactions.len());
    for m in &findings.known_vulnerable_interactions {
        println!("  - {}", format_match(m));
    }
}

fn print_list(title: &str, items: &[String]) {
    println!("{} ({}):", title, items.len());
    for item in items {
        println!("  - {}", item);
    }
}

fn print_result(result: &AnalysisResult) {
    println!("Scam probability: {}", probability_bar(result.scam_probability));
    println!();

    println!("Vulnerabilities ({}):", result.vulnerabilities.len());
    for v in result.vulnerabilities_by_severity() {
        println!("  {} {}: {}", severity_badge(v.severity), v.category, v.description);
        if !v.location.is_empty() {
            println!("      at {}", v.location);
        }
        if !v.implication.is_empty() {
            println!("      {}", v.implication);
        }
    }
    println!();

    let power = &result.power_dynamics;
    print_list("Centralization points", &power.centralization_points);
    print_list("Privileged actors", &power.privileged_actors);
    print_list("Exit mechanisms", &power.exit_mechanisms);
    print_list("Hidden incentives", &power.hidden_incentives);
    println!();

    if !result.known_vulnerable_interactions.is_empty() {
        println!("Known vulnerable interactions:");
        for m in &result.known_vulnerable_interactions {
            println!("  - {}", format_match(m));
        }
        println!();
    }

    println!("Recommendation: {}", result.recommendation);
    println!();
    println!("{}", result.observer_insight);
}
