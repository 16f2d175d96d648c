//! Integration tests for toggle-debug

mod document_toggle;
mod test_utils;
