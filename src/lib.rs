// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod auth;
pub mod categories;
pub mod cli;
pub mod commands;
pub mod context;
pub mod db;
pub mod error;
pub mod format;
pub mod logging;
pub mod models;
pub mod screens;
pub mod storage;
pub mod utils;
