// Platform preferences
// Stand-in for the media queries a browser would answer (prefers-reduced-motion)

/// Environment variable that forces the reduced-motion preference on ("1", "true", "reduce")
pub const REDUCED_MOTION_ENV: &str = "MD_REDUCED_MOTION";

/// User/platform preferences consulted by components at update time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Platform {
    /// Equivalent of `(prefers-reduced-motion: reduce)`
    pub prefers_reduced_motion: bool,
}

impl Platform {
    pub fn new(prefers_reduced_motion: bool) -> Self {
        Self { prefers_reduced_motion }
    }

    /// Build from a configured default, letting the environment override it
    pub fn detect(configured_reduced_motion: bool) -> Self {
        let from_env = std::env::var(REDUCED_MOTION_ENV)
            .ok()
            .and_then(|value| parse_flag(&value));
        Self {
            prefers_reduced_motion: from_env.unwrap_or(configured_reduced_motion),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "reduce" => Some(true),
        "0" | "false" | "no" | "no-preference" => Some(false),
        _ => None,
    }
}
