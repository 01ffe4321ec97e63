// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::error::TransportError;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A JSON POST request, fully formed before it's handed to a transport
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JsonPost {
	pub url: String,
	pub headers: Vec<(&'static str, &'static str)>,
	pub body: String,
}

impl JsonPost {
	pub fn new(url: impl Into<String>, body: String) -> Self {
		Self {
			url: url.into(),
			headers: vec![("Content-Type", JSON_CONTENT_TYPE)],
			body,
		}
	}

	/// Looks up a header value. Header names are case-insensitive.
	#[cfg(test)]
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(header_name, _)| header_name.eq_ignore_ascii_case(name))
			.map(|(_, value)| *value)
	}
}

/// What came back from the endpoint, before any interpretation
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransportResponse {
	pub status: u16,
	pub body: String,
}

impl TransportResponse {
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Sends requests to the waitlist endpoint.
///
/// Futures are local because everything here runs on the browser's event loop.
pub trait WaitlistTransport {
	fn post(&self, request: JsonPost) -> LocalBoxFuture<'_, Result<TransportResponse, TransportError>>;
}

/// Transport backed by the browser's fetch API
pub struct HttpTransport;

impl WaitlistTransport for HttpTransport {
	fn post(&self, request: JsonPost) -> LocalBoxFuture<'_, Result<TransportResponse, TransportError>> {
		async move {
			let mut builder = Request::post(&request.url);
			for (name, value) in request.headers.iter() {
				builder = builder.header(name, value);
			}
			let response = builder.body(request.body)?.send().await?;
			let status = response.status();
			let body = response.text().await?;
			Ok(TransportResponse { status, body })
		}
		.boxed_local()
	}
}
