// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::waitlist_error::WaitlistErrorDisplay;
use crate::page_utils::{scoped_signal, set_page_title};
use crate::waitlist::config::WaitlistConfig;
use crate::waitlist::error::WaitlistErrorKind;
use crate::waitlist::schedule::TimeoutScheduler;
use crate::waitlist::transport::HttpTransport;
use crate::waitlist::{SignupAttempt, SubmissionStatus, WaitlistSubmission};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn LandingView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating landing page");
	set_page_title("Join the Waitlist");

	let email = create_rc_signal(String::new());
	let status = create_rc_signal(SubmissionStatus::Idle);

	let submission = WaitlistSubmission::new(WaitlistConfig::from_browser(), HttpTransport, TimeoutScheduler)
		.with_observer({
			let email = email.clone();
			let status = status.clone();
			move |attempt: &SignupAttempt| {
				if *email.get_untracked() != attempt.email {
					email.set(attempt.email.clone());
				}
				status.set(attempt.status);
			}
		});
	// Owned by the page scope so a pending reset is cancelled when the page goes away
	let submission = create_ref(ctx, submission);

	log::debug!("Waitlist endpoint is {}", submission.config().endpoint_url);

	let email_signal = scoped_signal(ctx, email);
	let status_signal = scoped_signal(ctx, status);
	let error_signal: &Signal<Option<&'static str>> = create_signal(ctx, None);

	create_effect(ctx, move || {
		let email = (*email_signal.get()).clone();
		if submission.email() != email {
			submission.update_email(email);
		}
	});

	let idle_signal = create_memo(ctx, || *status_signal.get() == SubmissionStatus::Idle);
	let button_label_signal = create_memo(ctx, || match *status_signal.get() {
		SubmissionStatus::Idle => "Join Waitlist",
		SubmissionStatus::Submitting => "Joining...",
		SubmissionStatus::Submitted => "Joined!",
	});

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		if submission.status() != SubmissionStatus::Idle {
			return;
		}

		spawn_local_scoped(ctx, async move {
			match submission.submit().await {
				Ok(()) => error_signal.set(None),
				Err(error) if error.kind() == WaitlistErrorKind::SubmissionBusy => (),
				Err(error) => {
					log::debug!("Showing {:?} to the visitor", error.kind());
					error_signal.set(Some(error.user_message()));
				}
			}
		});
	};

	view! {
		ctx,
		header(id="site_header") {
			a(href="/", id="site_name") { "MentorMatch" }
			nav {
				a(href="#how-it-works") { "How It Works" }
				a(href="#mentors") { "For Mentors" }
				a(href="#learners") { "For Learners" }
			}
		}
		section(id="hero") {
			div(id="launch_notice") { "Launching Soon - Join the Waitlist" }
			h1 { "Learn from the Best Tech Mentors" }
			p {
				"Connect with experienced developers, designers, and tech professionals. "
				"Get personalized guidance, accelerate your learning, and achieve your career goals."
			}
			form(id="waitlist_form", on:submit=form_submission_handler) {
				input(
					id="waitlist_email",
					type="email",
					placeholder="Enter your email address",
					required=true,
					bind:value=email_signal
				)
				button(type="submit", disabled=!*idle_signal.get()) {
					(*button_label_signal.get())
				}
			}
			WaitlistErrorDisplay(error=error_signal)
		}
		section(id="how-it-works") {
			h2 { "How It Works" }
			ol {
				li { "Tell us what you want to learn." }
				li { "Get matched with a mentor who has done it." }
				li { "Book sessions and track your progress." }
			}
		}
		section(id="mentors") {
			h2 { "For Mentors" }
			p { "Share what you know, set your own rate, and grow your reputation." }
		}
		section(id="learners") {
			h2 { "For Learners" }
			p { "Personalized guidance from people working in the field, at your pace." }
		}
	}
}
