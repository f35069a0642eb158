// Build script - reads config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const TICK_RATE_MS: u64 = {tick_rate_ms};
pub const MOUSE_ENABLED: bool = {mouse_enabled};
pub const REDUCED_MOTION: bool = {reduced_motion};
pub const THEME: &str = "{theme}";
pub const LOG_FILE: &str = "{log_file}";
pub const LOG_LEVEL: &str = "{log_level}";
"#,
        tick_rate_ms = config.tick_rate_ms,
        mouse_enabled = config.mouse_enabled,
        reduced_motion = config.reduced_motion,
        theme = config.theme.escape_default(),
        log_file = config.log_file.escape_default(),
        log_level = config.log_level.escape_default(),
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    tick_rate_ms: u64,
    mouse_enabled: bool,
    reduced_motion: bool,
    theme: String,
    log_file: String,
    log_level: String,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 16,
            mouse_enabled: true,
            reduced_motion: false,
            theme: "dark".to_string(),
            log_file: "md-gallery.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_ui = false;

    for line in content.lines() {
        let trimmed = line.trim();

        // Any top-level key ends the ui section
        if !line.starts_with(' ') && !line.starts_with('\t') && !trimmed.is_empty() && !trimmed.starts_with('#') {
            in_ui = trimmed.starts_with("ui:");
            continue;
        }

        if !in_ui {
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            match key {
                "tick_rate_ms" => config.tick_rate_ms = value.parse().unwrap_or(16).max(1),
                "mouse_enabled" => config.mouse_enabled = parse_bool(value),
                "reduced_motion" => config.reduced_motion = parse_bool(value),
                "theme" => config.theme = unquote(value).to_string(),
                "log_file" => config.log_file = unquote(value).to_string(),
                "log_level" => config.log_level = unquote(value).to_string(),
                _ => {}
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    // Skip comments and empty lines
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    // Skip if value is empty (section header)
    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn unquote(s: &str) -> &str {
    s.trim().trim_matches('"').trim_matches('\'')
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}
