use leptos::prelude::*;
use web_sys::MouseEvent;

use super::dom;

/// Scroll depth past which the navbar turns opaque.
const SCROLLED_THRESHOLD: f64 = 50.0;

pub fn navbar_background(scroll_y: f64) -> &'static str {
	if scroll_y > SCROLLED_THRESHOLD {
		"rgba(26, 20, 16, 0.98)"
	} else {
		"rgba(26, 20, 16, 0.9)"
	}
}

/// In-page link that scrolls smoothly to its `#anchor` instead of jumping.
#[component]
pub fn AnchorLink(
	href: &'static str,
	#[prop(optional)] class_name: Option<&'static str>,
	#[prop(optional)] on_follow: Option<Callback<()>>,
	children: Children,
) -> impl IntoView {
	let on_click = move |ev: MouseEvent| {
		ev.prevent_default();
		dom::smooth_scroll_to(href);
		if let Some(cb) = on_follow {
			cb.run(());
		}
	};

	view! {
		<a href=href class=class_name on:click=on_click>
			{children()}
		</a>
	}
}

#[component]
pub fn Navbar(links: &'static [(&'static str, &'static str)]) -> impl IntoView {
	let (menu_open, set_menu_open) = signal(false);
	let (scroll, set_scroll) = signal(dom::scroll_y());

	dom::on_window("scroll", move || set_scroll.set(dom::scroll_y()));

	let close_menu = Callback::new(move |_| set_menu_open.set(false));

	view! {
		<nav class="navbar" style:background=move || navbar_background(scroll.get())>
			<AnchorLink href="#home" class_name="logo">
				"Circuit"
				<span>"Works"</span>
			</AnchorLink>
			<ul class="nav-links" class:active=move || menu_open.get()>
				{links
					.iter()
					.map(|&(href, label)| {
						view! {
							<li>
								<AnchorLink href=href on_follow=close_menu>
									{label}
								</AnchorLink>
							</li>
						}
					})
					.collect_view()}
			</ul>
			<button
				class="mobile-menu-btn"
				class:active=move || menu_open.get()
				aria-label="Toggle navigation"
				on:click=move |_| set_menu_open.update(|open| *open = !*open)
			>
				<span></span>
				<span></span>
				<span></span>
			</button>
		</nav>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn navbar_turns_opaque_past_threshold() {
		assert_eq!(navbar_background(0.0), "rgba(26, 20, 16, 0.9)");
		assert_eq!(navbar_background(50.0), "rgba(26, 20, 16, 0.9)");
		assert_eq!(navbar_background(50.5), "rgba(26, 20, 16, 0.98)");
	}
}
