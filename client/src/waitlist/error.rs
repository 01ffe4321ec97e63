// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::SubmissionStatus;
use std::fmt;

/// Errors from the layer that actually moves the request over the network
#[derive(Debug)]
pub enum TransportError {
	Http(gloo_net::Error),
	ConnectionFailed(String),
}

impl fmt::Display for TransportError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Http(error) => write!(f, "{}", error),
			Self::ConnectionFailed(reason) => write!(f, "Connection failed: {}", reason),
		}
	}
}

impl From<gloo_net::Error> for TransportError {
	fn from(error: gloo_net::Error) -> Self {
		match error {
			// fetch rejects with a JS error only when the request never got a response
			gloo_net::Error::JsError(error) => Self::ConnectionFailed(error.to_string()),
			error => Self::Http(error),
		}
	}
}

/// The tag of a [WaitlistError], for callers that only care which kind of failure happened
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WaitlistErrorKind {
	SubmissionBusy,
	TransportFailure,
	ServerRejection,
	ResponseParseFailure,
}

/// What a rejection status code most likely means for the person signing up
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RejectionReason {
	AlreadyListed,
	InvalidEmail,
	ServerError,
	Other,
}

impl RejectionReason {
	pub fn from_status(status: u16) -> Self {
		match status {
			400 | 409 => Self::AlreadyListed,
			422 => Self::InvalidEmail,
			500..=599 => Self::ServerError,
			_ => Self::Other,
		}
	}
}

/// Errors that can occur while submitting an email to the waitlist
#[derive(Debug)]
pub enum WaitlistError {
	/// A submission was attempted while the form wasn't idle
	SubmissionBusy(SubmissionStatus),
	/// The request body couldn't be built
	Encode(serde_json::Error),
	/// The request never got a response
	Transport(TransportError),
	/// The endpoint answered with a non-success status
	Rejected { status: u16, detail: Option<String> },
	/// The endpoint accepted the sign-up but its response body wasn't JSON
	ResponseParse(serde_json::Error),
}

impl WaitlistError {
	pub fn kind(&self) -> WaitlistErrorKind {
		match self {
			Self::SubmissionBusy(_) => WaitlistErrorKind::SubmissionBusy,
			Self::Encode(_) | Self::Transport(_) => WaitlistErrorKind::TransportFailure,
			Self::Rejected { .. } => WaitlistErrorKind::ServerRejection,
			Self::ResponseParse(_) => WaitlistErrorKind::ResponseParseFailure,
		}
	}

	pub fn rejection_reason(&self) -> Option<RejectionReason> {
		match self {
			Self::Rejected { status, .. } => Some(RejectionReason::from_status(*status)),
			_ => None,
		}
	}

	/// The message to show the person filling in the form
	pub fn user_message(&self) -> &'static str {
		match self {
			Self::SubmissionBusy(_) => "Your sign-up is already being processed.",
			Self::Encode(_) => "Your email couldn't be sent. Please check it and try again.",
			Self::Transport(_) => "We couldn't reach the waitlist. Check your connection and try again.",
			Self::ResponseParse(_) => "The waitlist sent back a response we couldn't read. Please try again.",
			Self::Rejected { .. } => match self.rejection_reason().unwrap_or(RejectionReason::Other) {
				RejectionReason::AlreadyListed => {
					"This email already exists in our waitlist. Try with a different email."
				}
				RejectionReason::InvalidEmail => {
					"That doesn't look like a valid email address. Please check it and try again."
				}
				RejectionReason::ServerError => "The waitlist is having trouble right now. Please try again later.",
				RejectionReason::Other => "Your sign-up couldn't be completed. Please try again.",
			},
		}
	}
}

impl fmt::Display for WaitlistError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::SubmissionBusy(status) => write!(f, "A submission can't start while the form is {}", status),
			Self::Encode(error) => write!(f, "Failed to serialize the sign-up request: {}", error),
			Self::Transport(error) => write!(f, "Failed to reach the waitlist endpoint: {}", error),
			Self::Rejected {
				status,
				detail: Some(detail),
			} => write!(f, "The waitlist endpoint rejected the sign-up ({}): {}", status, detail),
			Self::Rejected { status, detail: None } => {
				write!(f, "The waitlist endpoint rejected the sign-up ({})", status)
			}
			Self::ResponseParse(error) => write!(f, "An invalid response was received: {}", error),
		}
	}
}

impl From<TransportError> for WaitlistError {
	fn from(error: TransportError) -> Self {
		Self::Transport(error)
	}
}
