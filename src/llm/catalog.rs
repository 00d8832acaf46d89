pub struct ProviderInfo {
    pub id: &'static str,
    pub name: &'static str,
    /// Environment variable holding the credential; empty when none is needed.
    pub env_var: &'static str,
    pub default_base_url: &'static str,
    pub models: &'static [ModelInfo],
}

pub struct ModelInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub recommended: bool,
}

pub static PROVIDERS: &[ProviderInfo] = &[
    ProviderInfo {
        id: "anthropic",
        name: "Anthropic",
        env_var: "ANTHROPIC_API_KEY",
        default_base_url: "https://api.anthropic.com",
        models: &[
            ModelInfo { id: "claude-sonnet-4-20250514", label: "Claude Sonnet 4", recommended: true },
            ModelInfo { id: "claude-3-5-haiku-20241022", label: "Claude 3.5 Haiku", recommended: false },
        ],
    },
    ProviderInfo {
        id: "openai",
        name: "OpenAI",
        env_var: "OPENAI_API_KEY",
        default_base_url: "https://api.openai.com/v1",
        models: &[
            ModelInfo { id: "gpt-4o", label: "GPT-4o", recommended: true },
            ModelInfo { id: "gpt-4o-mini", label: "GPT-4o mini", recommended: false },
        ],
    },
    ProviderInfo {
        id: "local",
        name: "Local / Ollama",
        env_var: "",
        default_base_url: "http://localhost:11434/v1",
        models: &[
            ModelInfo { id: "qwen2.5-coder:7b", label: "Qwen 2.5 Coder 7B", recommended: true },
        ],
    },
];

pub fn get_provider(id: &str) -> Option<&'static ProviderInfo> {
    PROVIDERS.iter().find(|p| p.id == id)
}

pub fn get_default_model(provider_id: &str) -> &'static str {
    get_provider(provider_id)
        .and_then(|p| p.models.iter().find(|m| m.recommended).or(p.models.first()))
        .map(|m| m.id)
        .unwrap_or("claude-sonnet-4-20250514")
}

/// Human-readable "Provider / Model" label; unknown models show their id.
pub fn describe_model(provider_id: &str, model_id: &str) -> String {
    match get_provider(provider_id) {
        Some(p) => {
            let model = p.models.iter()
                .find(|m| m.id == model_id)
                .map(|m| m.label)
                .unwrap_or(model_id);
            format!("{} / {}", p.name, model)
        }
        None => format!("{} / {}", provider_id, model_id),
    }
}
