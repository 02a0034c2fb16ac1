//! Request body factories.

use serde_json::{json, Value};

/// Short classical poem, scored strictly.
pub const POEM: &str = "慈母手中線，遊子身上衣。\n臨行密密縫，意恐遲遲歸。";

/// Short speech excerpt, scored fuzzily.
pub const SPEECH: &str = "I have a dream that one day this nation will rise up.";

/// Body for POST /api/score.
pub fn score_request(target: &str, attempt: &str, policy: &str) -> Value {
    json!({
        "target": target,
        "attempt": attempt,
        "policy": policy,
    })
}

/// Body for POST /api/render.
pub fn render_request(text: &str, mode: &str, intensity: i64) -> Value {
    json!({
        "text": text,
        "mode": mode,
        "intensity": intensity,
    })
}
