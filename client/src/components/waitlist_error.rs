// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Prop)]
pub struct WaitlistErrorDisplayProps<'a> {
	error: &'a Signal<Option<&'static str>>,
}

/// Shows the message for the last failed sign-up until it's dismissed or replaced
#[component]
pub fn WaitlistErrorDisplay<'a, G: Html>(ctx: Scope<'a>, props: WaitlistErrorDisplayProps<'a>) -> View<G> {
	let error = props.error;
	let dismiss_handler = move |_event: WebEvent| error.set(None);

	view! {
		ctx,
		(match *error.get() {
			Some(message) => view! {
				ctx,
				div(id="waitlist_error", class="input_error") {
					span { (message) }
					button(type="button", on:click=dismiss_handler) { "Dismiss" }
				}
			},
			None => view! { ctx, }
		})
	}
}
