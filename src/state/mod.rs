// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Control panel state.
//!
//! [`PanelState`] keeps the settings last read from a clock and applies edits
//! back to it. The form types hold values the way a user enters them and
//! convert to and from the device types.
//!
//! # Examples
//!
//! ```
//! use nixie_lib::state::ColorSliders;
//! use nixie_lib::types::Rgb;
//!
//! let sliders = ColorSliders::new(120.0, 100.0, 100.0);
//! assert_eq!(sliders.to_rgb(), Rgb::new(0, 255, 0));
//! ```

mod forms;
mod panel_state;

pub use forms::{ColorSliders, SleepForm, WifiForm};
pub use panel_state::PanelState;
