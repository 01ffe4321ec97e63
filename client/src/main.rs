// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;
use sycamore_router::{HistoryIntegration, Route, Router};

mod components;
mod page_utils;
mod pages;
mod waitlist;

use pages::landing::LandingView;
use pages::not_found::NotFoundView;

#[derive(Route)]
enum AppRoutes {
	#[to("/")]
	Landing,
	#[not_found]
	NotFound,
}

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

	sycamore::render(|ctx| {
		view! {
			ctx,
			Router(
				integration=HistoryIntegration::new(),
				view=|ctx, route: &ReadSignal<AppRoutes>| {
					view! {
						ctx,
						div(id="app") {
							(match route.get().as_ref() {
								AppRoutes::Landing => view! { ctx, LandingView },
								AppRoutes::NotFound => view! { ctx, NotFoundView }
							})
						}
					}
				}
			)
		}
	});
}
