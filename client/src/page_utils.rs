// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;
use web_sys::window;

const SITE_NAME: &str = "MentorMatch";

/// Sets the browser tab title, suffixed with the site name
pub fn set_page_title(page_title: &str) {
	if let Some(window) = window() {
		if let Some(document) = window.document() {
			document.set_title(&format!("{} | {}", page_title, SITE_NAME));
		}
	}
}

/// Hands an [RcSignal] to a scope so it can be used wherever a scoped signal is expected (e.g. `bind:value`), while
/// clones of the [RcSignal] can still be updated from outside the scope.
pub fn scoped_signal<'a, T: 'static>(ctx: Scope<'a>, signal: RcSignal<T>) -> &'a Signal<T> {
	let signal: &'a RcSignal<T> = create_ref(ctx, signal);
	signal
}
