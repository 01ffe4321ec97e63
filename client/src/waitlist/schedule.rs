// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use gloo_timers::callback::Timeout;
use std::time::Duration;

/// Schedules the delayed return to the idle state.
///
/// Dropping the returned handle must cancel the callback if it hasn't run yet.
pub trait ResetScheduler {
	type Handle;

	fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Scheduler backed by the browser's setTimeout
pub struct TimeoutScheduler;

impl ResetScheduler for TimeoutScheduler {
	type Handle = Timeout;

	fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Timeout {
		let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
		Timeout::new(millis, callback)
	}
}
