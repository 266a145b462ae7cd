// Copyright (c) 2026 Compact Prefix Tree Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Unit and property-based tests for the compact prefix tree.
