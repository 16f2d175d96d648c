//! Boot-argument classification.
//!
//! A boot-args string is a whitespace-separated token list. Tokens that
//! control kernel debugging (`-v`, `keepsyms=<value>`, `debug=<value>`) are
//! split from everything else so the debug set can be stripped and re-added
//! without touching unrelated arguments.

use regex::Regex;
use std::sync::OnceLock;

/// Debug tokens written when enabling, in this order.
pub const DEBUG_ARGS: [&str; 3] = ["-v", "keepsyms=1", "debug=0x100"];

fn debug_token_regex() -> &'static Regex {
    static DEBUG_TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    DEBUG_TOKEN_RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:-v|keepsyms=\S+|debug=\S+)$").expect("valid debug token regex")
    })
}

/// Boot-args partitioned into debug and other tokens, each in original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootArgs {
    pub debug: Vec<String>,
    pub other: Vec<String>,
}

/// Whether a single token is one of the debug tokens.
pub fn is_debug_token(token: &str) -> bool {
    debug_token_regex().is_match(token)
}

/// Split a boot-args string into debug and non-debug tokens.
pub fn split_boot_args(boot_args: &str) -> BootArgs {
    let mut parsed = BootArgs::default();
    for token in boot_args.split_whitespace() {
        if is_debug_token(token) {
            parsed.debug.push(token.to_string());
        } else {
            parsed.other.push(token.to_string());
        }
    }
    parsed
}

/// Rebuild boot-args for the target mode.
///
/// Existing debug tokens (canonical or not) are always dropped; when
/// `enable` is set the canonical [`DEBUG_ARGS`] are appended after the
/// remaining tokens.
pub fn adjust_boot_args(boot_args: &str, enable: bool) -> String {
    let BootArgs { other, .. } = split_boot_args(boot_args);
    let mut tokens: Vec<&str> = other.iter().map(String::as_str).collect();
    if enable {
        tokens.extend(DEBUG_ARGS);
    }
    tokens.join(" ")
}

/// Collapse runs of whitespace into single spaces.
pub fn normalize(boot_args: &str) -> String {
    boot_args.split_whitespace().collect::<Vec<_>>().join(" ")
}
