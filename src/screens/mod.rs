// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod dashboard;
pub mod register;
pub mod resume;
pub mod sign_in;
