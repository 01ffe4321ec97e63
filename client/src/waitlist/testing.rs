// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory stand-ins for the network and the browser timer.

use super::error::TransportError;
use super::schedule::ResetScheduler;
use super::transport::{JsonPost, TransportResponse, WaitlistTransport};
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

enum ScriptedResponse {
	Respond(TransportResponse),
	Fail(String),
	Gated(oneshot::Receiver<TransportResponse>),
}

#[derive(Default)]
struct FakeTransportState {
	requests: Vec<JsonPost>,
	responses: VecDeque<ScriptedResponse>,
}

/// Records every request and answers with scripted responses, in order
#[derive(Clone, Default)]
pub struct FakeTransport {
	state: Rc<RefCell<FakeTransportState>>,
}

impl FakeTransport {
	pub fn respond(&self, status: u16, body: &str) {
		self.state
			.borrow_mut()
			.responses
			.push_back(ScriptedResponse::Respond(TransportResponse {
				status,
				body: String::from(body),
			}));
	}

	pub fn fail(&self, reason: &str) {
		self.state
			.borrow_mut()
			.responses
			.push_back(ScriptedResponse::Fail(String::from(reason)));
	}

	/// Queues a response that doesn't arrive until it's sent through the returned channel
	pub fn gate(&self) -> oneshot::Sender<TransportResponse> {
		let (sender, receiver) = oneshot::channel();
		self.state
			.borrow_mut()
			.responses
			.push_back(ScriptedResponse::Gated(receiver));
		sender
	}

	pub fn requests(&self) -> Vec<JsonPost> {
		self.state.borrow().requests.clone()
	}
}

impl WaitlistTransport for FakeTransport {
	fn post(&self, request: JsonPost) -> LocalBoxFuture<'_, Result<TransportResponse, TransportError>> {
		let scripted = {
			let mut state = self.state.borrow_mut();
			state.requests.push(request);
			state.responses.pop_front()
		};
		async move {
			match scripted {
				Some(ScriptedResponse::Respond(response)) => Ok(response),
				Some(ScriptedResponse::Fail(reason)) => Err(TransportError::ConnectionFailed(reason)),
				Some(ScriptedResponse::Gated(receiver)) => receiver
					.await
					.map_err(|_| TransportError::ConnectionFailed(String::from("gate dropped"))),
				None => Err(TransportError::ConnectionFailed(String::from("no response scripted"))),
			}
		}
		.boxed_local()
	}
}

struct PendingTimer {
	due: Duration,
	callback: Box<dyn FnOnce()>,
	cancelled: Rc<Cell<bool>>,
}

#[derive(Default)]
struct ManualClock {
	now: Duration,
	timers: Vec<PendingTimer>,
}

/// A scheduler whose clock only moves when told to
#[derive(Clone, Default)]
pub struct ManualScheduler {
	clock: Rc<RefCell<ManualClock>>,
}

pub struct ManualTimer {
	cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualTimer {
	fn drop(&mut self) {
		self.cancelled.set(true);
	}
}

impl ManualScheduler {
	/// Moves the clock forward, running every live timer that comes due
	pub fn advance(&self, by: Duration) {
		let due_timers: Vec<PendingTimer> = {
			let mut clock = self.clock.borrow_mut();
			clock.now += by;
			let now = clock.now;
			let (due, waiting): (Vec<PendingTimer>, Vec<PendingTimer>) =
				clock.timers.drain(..).partition(|timer| timer.due <= now);
			clock.timers = waiting;
			due
		};
		for timer in due_timers {
			if !timer.cancelled.get() {
				(timer.callback)();
			}
		}
	}

	/// Number of timers that are still waiting and haven't been cancelled
	pub fn pending(&self) -> usize {
		self.clock
			.borrow()
			.timers
			.iter()
			.filter(|timer| !timer.cancelled.get())
			.count()
	}
}

impl ResetScheduler for ManualScheduler {
	type Handle = ManualTimer;

	fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> ManualTimer {
		let cancelled = Rc::new(Cell::new(false));
		let mut clock = self.clock.borrow_mut();
		let due = clock.now + delay;
		clock.timers.push(PendingTimer {
			due,
			callback,
			cancelled: Rc::clone(&cancelled),
		});
		ManualTimer { cancelled }
	}
}
