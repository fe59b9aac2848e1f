use leptos::prelude::*;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<section class="not-found">
			<h1>"Page not found"</h1>
			<p>"The page you were looking for doesn't exist."</p>
			<a href="/">"Back to the homepage"</a>
		</section>
	}
}
