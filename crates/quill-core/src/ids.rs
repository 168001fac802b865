//! ID prefixes and generation.
//!
//! Every entity ID has the shape `{prefix}-{8 lowercase hex}` built from four
//! random bytes, e.g. `art-a3f8b2c1`.

pub const PREFIX_ARTICLE: &str = "art";
pub const PREFIX_REFERENCE: &str = "ref";
pub const PREFIX_TASK: &str = "tsk";
pub const PREFIX_GOAL: &str = "gol";

/// Generate a fresh ID with the given prefix.
///
/// # Panics
///
/// Panics if the operating system random source is unavailable.
#[must_use]
pub fn generate_id(prefix: &str) -> String {
    let mut bytes = [0u8; 4];
    getrandom::fill(&mut bytes).expect("OS random source should be available");
    format_id(prefix, bytes)
}

/// Format an ID from a prefix and four raw bytes.
#[must_use]
pub fn format_id(prefix: &str, bytes: [u8; 4]) -> String {
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    format!("{prefix}-{hex}")
}

/// Extract the prefix portion of an ID (`art-a3f8b2c1` → `art`).
#[must_use]
pub fn prefix_of(id: &str) -> Option<&str> {
    id.split_once('-').map(|(prefix, _)| prefix)
}
