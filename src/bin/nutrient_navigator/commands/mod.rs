// ABOUTME: Re-exports command modules for the nutrient-navigator CLI
// ABOUTME: Groups recipe, lookup, and backend commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod backend;
pub mod lookup;
pub mod recipes;
