// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Logging setup and helpers for user-supplied text in log lines.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "hotel_search=info";

/// Longest user-typed text echoed into a log line, in characters
const MAX_LOGGED_CHARS: usize = 32;

/// Install the global fmt subscriber, honouring `RUST_LOG` when set.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Ignore the error when a subscriber is already installed (tests).
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Shorten user-typed text before logging it: "abcdef…" past the limit.
pub fn truncate_for_log(text: &str) -> String {
    match text.char_indices().nth(MAX_LOGGED_CHARS) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_unchanged() {
        assert_eq!(truncate_for_log("rujia"), "rujia");
    }

    #[test]
    fn test_long_text_is_cut() {
        let text = "a".repeat(40);
        let logged = truncate_for_log(&text);
        assert_eq!(logged, format!("{}…", "a".repeat(32)));
    }

    #[test]
    fn test_cut_respects_char_boundaries() {
        let text = "酒".repeat(33);
        assert_eq!(truncate_for_log(&text), format!("{}…", "酒".repeat(32)));
    }

    #[test]
    fn test_exact_limit_is_unchanged() {
        let text = "b".repeat(32);
        assert_eq!(truncate_for_log(&text), text);
    }

    #[test]
    fn test_init_tracing_twice_does_not_panic() {
        init_tracing();
        init_tracing();
    }
}
