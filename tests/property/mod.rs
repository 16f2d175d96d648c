//! Property-based tests for boot-args classification and the path-ensuring merger

mod boot_args;
mod merger;
