use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "server": {
                "type": "object",
                "properties": {
                    "host": { "type": "string" },
                    "port": { "type": "integer", "minimum": 1, "maximum": 65535 },
                    "public_dir": { "type": "string" }
                }
            },
            "llm": {
                "type": "object",
                "properties": {
                    "provider": { "type": "string", "enum": ["anthropic", "openai", "local"] },
                    "model": { "type": "string" },
                    "api_key": { "type": "string" },
                    "base_url": { "type": "string" },
                    "temperature": { "type": "number", "minimum": 0, "maximum": 2 },
                    "max_tokens": { "type": "integer", "minimum": 1 },
                    "timeout_secs": { "type": "integer", "minimum": 1 }
                }
            },
            "storage": {
                "type": "object",
                "properties": {
                    "db_path": { "type": "string" }
                }
            },
            "registry": {
                "type": "object",
                "properties": {
                    "extra_contracts_path": { "type": "string" }
                }
            }
        }
    })
});
