// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod aggregation;
pub mod compiler;
pub mod elasticsearch;
pub mod engine;
pub mod facets;
pub mod hotel;
pub mod logging;
pub mod projector;
pub mod suggestions;
