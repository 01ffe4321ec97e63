// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Data sent to the waitlist endpoint when someone signs up
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct WaitlistRequest {
	pub email: String,
}

/// The entry the waitlist service reports back after accepting a sign-up
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct WaitlistEntry {
	pub id: String,
	pub email: String,
}

/// Body returned by the waitlist service when it turns a sign-up down
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct WaitlistRejection {
	pub detail: String,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn request_has_only_the_email_field() {
		let request = WaitlistRequest {
			email: String::from("alice@example.com"),
		};
		let value = serde_json::to_value(&request).unwrap();
		assert_eq!(value, json!({ "email": "alice@example.com" }));
	}

	#[test]
	fn request_keeps_email_verbatim() {
		let request = WaitlistRequest {
			email: String::from("  Mixed.Case@Example.COM "),
		};
		let text = serde_json::to_string(&request).unwrap();
		assert_eq!(text, r#"{"email":"  Mixed.Case@Example.COM "}"#);
	}

	#[test]
	fn entry_reads_service_response() {
		let entry: WaitlistEntry =
			serde_json::from_str(r#"{"id":"65f1c0ffee","email":"bob@example.com"}"#).unwrap();
		assert_eq!(entry.id, "65f1c0ffee");
		assert_eq!(entry.email, "bob@example.com");
	}

	#[test]
	fn rejection_reads_string_detail() {
		let rejection: WaitlistRejection = serde_json::from_str(r#"{"detail":"Email already in waitlist"}"#).unwrap();
		assert_eq!(rejection.detail, "Email already in waitlist");
	}

	#[test]
	fn rejection_does_not_accept_validation_detail_list() {
		let result: Result<WaitlistRejection, _> =
			serde_json::from_str(r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address"}]}"#);
		assert!(result.is_err());
	}
}
