//! Property-based tests for boot-args rebuilding

use proptest::prelude::*;
use std::collections::HashSet;
use toggle_debug::boot_args::{adjust_boot_args, is_debug_token, split_boot_args, DEBUG_ARGS};

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("-v".to_string()),
        Just("-V".to_string()),
        Just("-version".to_string()),
        "keepsyms=[0-9a-z]{1,3}",
        "DEBUG=0x[0-9a-f]{1,4}",
        "debug=0x[0-9a-f]{1,4}",
        "[a-z]{1,8}=[0-9]{1,3}",
        "-[a-z]{2,8}",
    ]
}

fn boot_args_string() -> impl Strategy<Value = String> {
    (prop::collection::vec(token(), 0..8), prop::collection::vec(" {1,3}|\t", 0..8)).prop_map(
        |(tokens, separators)| {
            let mut out = String::new();
            for (i, t) in tokens.iter().enumerate() {
                if i > 0 {
                    out.push_str(separators.get(i).map(String::as_str).unwrap_or(" "));
                }
                out.push_str(t);
            }
            out
        },
    )
}

proptest! {
    #[test]
    fn enable_yields_other_tokens_plus_canonical_set(input in boot_args_string()) {
        let enabled = adjust_boot_args(&input, true);
        let other = split_boot_args(&input).other;

        let tokens: Vec<&str> = enabled.split(' ').filter(|t| !t.is_empty()).collect();
        let expected: Vec<&str> = other.iter().map(String::as_str).chain(DEBUG_ARGS).collect();
        prop_assert_eq!(&tokens, &expected);

        let debug: Vec<&str> = tokens.iter().copied().filter(|t| is_debug_token(t)).collect();
        let unique: HashSet<&str> = debug.iter().copied().collect();
        prop_assert_eq!(debug.len(), unique.len());
    }

    #[test]
    fn enable_is_idempotent(input in boot_args_string()) {
        let once = adjust_boot_args(&input, true);
        prop_assert_eq!(adjust_boot_args(&once, true), once);
    }

    #[test]
    fn disable_removes_debug_tokens_and_keeps_order(input in boot_args_string()) {
        let disabled = adjust_boot_args(&input, false);
        let kept: Vec<&str> = input.split_whitespace().filter(|t| !is_debug_token(t)).collect();
        prop_assert_eq!(disabled, kept.join(" "));
        prop_assert!(adjust_boot_args(&input, false).split(' ').all(|t| !is_debug_token(t)));
    }
}
