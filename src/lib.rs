// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Hotel search: compiles search requests into Elasticsearch queries and
//! projects engine responses into paged hotels, filter facets, and
//! autocomplete suggestions.

pub mod app;
pub mod error;
pub mod models;
pub mod services;
