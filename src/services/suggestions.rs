// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use crate::models::engine::RawSuggestion;

/// Maximum number of completions returned for one prefix
pub const SUGGESTION_SIZE: usize = 10;

/// Separator joining multi-token suggestion inputs in the index
const TOKEN_SEPARATOR: char = '/';

/// Prepare completion options for display.
///
/// Options arrive already deduplicated by the engine; order is kept and
/// each separator becomes a line break.
pub fn normalize(options: Vec<RawSuggestion>) -> Vec<String> {
    options
        .into_iter()
        .take(SUGGESTION_SIZE)
        .map(|option| {
            if option.text.contains(TOKEN_SEPARATOR) {
                option.text.replace(TOKEN_SEPARATOR, "\n")
            } else {
                option.text
            }
        })
        .collect()
}
