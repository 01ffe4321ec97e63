// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use waitlist_landing_shared::messages::waitlist::{WaitlistEntry, WaitlistRejection, WaitlistRequest};

pub mod config;
pub mod error;
pub mod schedule;
pub mod transport;

#[cfg(test)]
mod testing;

use config::WaitlistConfig;
use error::WaitlistError;
use schedule::ResetScheduler;
use transport::{JsonPost, WaitlistTransport};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SubmissionStatus {
	#[default]
	Idle,
	Submitting,
	Submitted,
}

impl fmt::Display for SubmissionStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Idle => write!(f, "idle"),
			Self::Submitting => write!(f, "submitting"),
			Self::Submitted => write!(f, "submitted"),
		}
	}
}

/// The state of the sign-up form for the current visitor
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SignupAttempt {
	pub email: String,
	pub status: SubmissionStatus,
}

type StateObserver = Rc<dyn Fn(&SignupAttempt)>;

/// Handles submitting an email address to the waitlist and tracks the form state around it.
///
/// The state goes idle -> submitting -> submitted -> idle on success, or idle -> submitting -> idle on failure. Once
/// submitted, the state returns to idle on its own after the configured reset delay. The pending reset is owned by
/// this struct, so dropping it cancels the reset.
pub struct WaitlistSubmission<T, S: ResetScheduler> {
	config: WaitlistConfig,
	transport: T,
	scheduler: S,
	attempt: Rc<RefCell<SignupAttempt>>,
	pending_reset: RefCell<Option<S::Handle>>,
	observer: Option<StateObserver>,
}

impl<T: WaitlistTransport, S: ResetScheduler> WaitlistSubmission<T, S> {
	pub fn new(config: WaitlistConfig, transport: T, scheduler: S) -> Self {
		Self {
			config,
			transport,
			scheduler,
			attempt: Rc::new(RefCell::new(SignupAttempt::default())),
			pending_reset: RefCell::new(None),
			observer: None,
		}
	}

	/// Sets a callback that gets a snapshot of the state after every status change. Email edits made through
	/// [update_email](Self::update_email) don't trigger it.
	pub fn with_observer(mut self, observer: impl Fn(&SignupAttempt) + 'static) -> Self {
		self.observer = Some(Rc::new(observer));
		self
	}

	pub fn config(&self) -> &WaitlistConfig {
		&self.config
	}

	pub fn email(&self) -> String {
		self.attempt.borrow().email.clone()
	}

	pub fn status(&self) -> SubmissionStatus {
		self.attempt.borrow().status
	}

	pub fn snapshot(&self) -> SignupAttempt {
		self.attempt.borrow().clone()
	}

	/// Replaces the held email address exactly as given.
	pub fn update_email(&self, value: impl Into<String>) {
		self.attempt.borrow_mut().email = value.into();
	}

	/// Submits the held email address to the waitlist.
	///
	/// # Errors
	///
	/// Returns [WaitlistError::SubmissionBusy] without sending anything if the form isn't idle. Otherwise, errors
	/// occur when the endpoint can't be reached, when it responds with a non-success status, or when a successful
	/// response isn't JSON. In all of those cases the email is kept and the form goes back to idle.
	pub async fn submit(&self) -> Result<(), WaitlistError> {
		let email = {
			let mut attempt = self.attempt.borrow_mut();
			if attempt.status != SubmissionStatus::Idle {
				log::debug!("Ignoring waitlist submission while {}", attempt.status);
				return Err(WaitlistError::SubmissionBusy(attempt.status));
			}
			attempt.status = SubmissionStatus::Submitting;
			attempt.email.clone()
		};
		self.notify();

		match self.send(email).await {
			Ok(()) => {
				{
					let mut attempt = self.attempt.borrow_mut();
					attempt.status = SubmissionStatus::Submitted;
					attempt.email.clear();
				}
				self.schedule_reset();
				self.notify();
				Ok(())
			}
			Err(error) => {
				self.attempt.borrow_mut().status = SubmissionStatus::Idle;
				self.notify();
				Err(error)
			}
		}
	}

	async fn send(&self, email: String) -> Result<(), WaitlistError> {
		let body = serde_json::to_string(&WaitlistRequest { email }).map_err(WaitlistError::Encode)?;
		let request = JsonPost::new(self.config.endpoint_url.as_str(), body);
		log::debug!("Sending waitlist sign-up to {}", request.url);

		let response = match self.transport.post(request).await {
			Ok(response) => response,
			Err(error) => {
				log::error!("Failed to reach waitlist endpoint: {}", error);
				return Err(error.into());
			}
		};

		if !response.is_success() {
			let detail = serde_json::from_str::<WaitlistRejection>(&response.body)
				.ok()
				.map(|rejection| rejection.detail);
			let error = WaitlistError::Rejected {
				status: response.status,
				detail,
			};
			log::warn!("{}", error);
			return Err(error);
		}

		let data: serde_json::Value = match serde_json::from_str(&response.body) {
			Ok(data) => data,
			Err(error) => {
				log::error!("Waitlist endpoint accepted the sign-up but sent an invalid response: {}", error);
				return Err(WaitlistError::ResponseParse(error));
			}
		};
		match serde_json::from_value::<WaitlistEntry>(data) {
			Ok(entry) => log::info!("Joined the waitlist as entry {}", entry.id),
			Err(_) => log::info!("Joined the waitlist"),
		}
		Ok(())
	}

	fn schedule_reset(&self) {
		let attempt = Rc::downgrade(&self.attempt);
		let observer = self.observer.clone();
		let reset = move || {
			let Some(attempt) = attempt.upgrade() else {
				return;
			};
			let snapshot = {
				let mut attempt = attempt.borrow_mut();
				if attempt.status != SubmissionStatus::Submitted {
					return;
				}
				attempt.status = SubmissionStatus::Idle;
				attempt.clone()
			};
			log::debug!("Waitlist form reset to idle");
			if let Some(observer) = observer {
				observer(&snapshot);
			}
		};

		// Replacing a previous handle cancels it
		let handle = self.scheduler.schedule(self.config.reset_delay, Box::new(reset));
		*self.pending_reset.borrow_mut() = Some(handle);
	}

	fn notify(&self) {
		if let Some(observer) = self.observer.as_ref() {
			let snapshot = self.snapshot();
			observer(&snapshot);
		}
	}
}
