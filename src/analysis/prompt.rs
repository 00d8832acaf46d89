use crate::registry::{MatchResult, VulnerableAddressRecord};

/// The response shape the model is told to follow.
pub const RESPONSE_SCHEMA: &str = r#"{
  "scamProbability": number,
  "vulnerabilities": [{"severity": string, "category": string, "description": string, "location": string, "implication": string}],
  "powerDynamics": {
    "centralizationPoints": [string],
    "privilegedActors": [string],
    "exitMechanisms": [string],
    "hiddenIncentives": [string]
  },
  "recommendation": string,
  "observerInsight": string
}"#;

/// Serialize the vulnerable-address catalog for inclusion in a prompt.
pub fn address_catalog_context(records: &[VulnerableAddressRecord]) -> String {
    let mut out = String::from("**Known Vulnerable Contracts Database:**\n");
    for r in records {
        out.push_str(&format!(
            "\n- {} ({}) - {}\n  Vulnerability: {}\n  Severity: {}\n  Exploitable: {}\n  Notes: {}\n",
            r.address,
            r.chain,
            r.name,
            r.vulnerability,
            r.severity,
            if r.exploitable { "YES" } else { "NO" },
            r.notes,
        ));
    }
    out.push_str(
        "\nCross-reference any addresses found in the analyzed contract against this database.\n\
         Identify similar vulnerability patterns even if addresses don't match exactly.\n",
    );
    out
}

/// Build the user instruction for a full contract analysis.
pub fn analysis_prompt(
    source: &str,
    address: Option<&str>,
    matches: &[MatchResult],
    knowledge_context: &str,
    records: &[VulnerableAddressRecord],
) -> String {
    let mut out = String::from(
        "Analyze this smart contract. Provide:\n\n\
         1. Technical vulnerabilities (reentrancy, access control, arithmetic issues)\n\
         2. Centralization points (admin keys, upgrade mechanisms, pause functions)\n\
         3. Economic incentives (who profits, who bears risk)\n\
         4. Exit mechanisms (can users leave, what's the cost)\n\
         5. Scam probability assessment (0-100)\n\
         6. Cross-reference against the vulnerable contracts database below\n\n",
    );

    out.push_str(knowledge_context);
    out.push('\n');
    out.push_str(&address_catalog_context(records));
    out.push('\n');

    if let Some(addr) = address.map(str::trim).filter(|a| !a.is_empty()) {
        out.push_str(&format!("Contract Address: {}\n\n", addr));
    }

    out.push_str(&format!("Contract code:\n```solidity\n{}\n```\n\n", source));

    if !matches.is_empty() {
        out.push_str("**ALERT: This contract references known vulnerable addresses:**\n");
        for m in matches {
            out.push_str(&format!("- {}: {}\n", m.address, m.match_reason));
        }
        out.push('\n');
    }

    out.push_str("Format your response as JSON with this structure:\n");
    out.push_str(RESPONSE_SCHEMA);
    out.push_str("\n\nscamProbability is an integer from 0 to 100. ");
    out.push_str("In your observerInsight, comment on any matches with the vulnerable contracts database.");
    out
}

/// Build the user instruction for a conversational question.
pub fn chat_prompt(
    message: &str,
    contract_context: Option<&str>,
    records: &[VulnerableAddressRecord],
) -> String {
    let catalog = address_catalog_context(records);
    match contract_context.filter(|c| !c.trim().is_empty()) {
        Some(code) => format!(
            "{}\n\nContext - analyzing contract:\n```solidity\n{}\n```\n\nUser question: {}",
            catalog, code, message
        ),
        None => format!("{}\n\nUser question: {}", catalog, message),
    }
}
