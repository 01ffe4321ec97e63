// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::time::Duration;

/// How long the "Joined!" state stays up before the form resets itself
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(3000);

/// Path of the waitlist endpoint relative to the site origin
pub const WAITLIST_PATH: &str = "/waitlist/";

/// Build-time override for the endpoint (for when the waitlist service is hosted somewhere other than the site)
const ENDPOINT_OVERRIDE: Option<&str> = option_env!("WAITLIST_ENDPOINT");

/// Build-time override for the reset delay, in milliseconds
const RESET_DELAY_OVERRIDE: Option<&str> = option_env!("WAITLIST_RESET_DELAY_MS");

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WaitlistConfig {
	pub endpoint_url: String,
	pub reset_delay: Duration,
}

impl WaitlistConfig {
	pub fn new(endpoint_url: impl Into<String>) -> Self {
		Self {
			endpoint_url: endpoint_url.into(),
			reset_delay: DEFAULT_RESET_DELAY,
		}
	}

	pub fn with_reset_delay(mut self, reset_delay: Duration) -> Self {
		self.reset_delay = reset_delay;
		self
	}

	/// Gets the configuration for the page we're running in. The endpoint set at build time is used if there is one;
	/// otherwise the endpoint lives at the same origin as the page.
	///
	/// # Panics
	///
	/// This function panics when there's no override and the browser context (window, location) is inaccessible.
	pub fn from_browser() -> Self {
		let config = match ENDPOINT_OVERRIDE.filter(|endpoint| !endpoint.is_empty()) {
			Some(endpoint) => Self::new(endpoint),
			None => {
				let origin = web_sys::window()
					.expect("Failed to get browser window context")
					.location()
					.origin()
					.expect("Failed to get current origin");
				Self::new(endpoint_from_origin(&origin))
			}
		};

		match reset_delay_from_millis(RESET_DELAY_OVERRIDE) {
			Some(reset_delay) => config.with_reset_delay(reset_delay),
			None => config,
		}
	}
}

/// Joins the waitlist path onto a site origin, tolerating a trailing slash on the origin.
pub fn endpoint_from_origin(origin: &str) -> String {
	let origin = origin.strip_suffix('/').unwrap_or(origin);
	format!("{}{}", origin, WAITLIST_PATH)
}

/// Reads a delay given as a whole number of milliseconds. Anything unparsable is ignored.
pub fn reset_delay_from_millis(value: Option<&str>) -> Option<Duration> {
	value
		.and_then(|millis| millis.trim().parse::<u64>().ok())
		.map(Duration::from_millis)
}
