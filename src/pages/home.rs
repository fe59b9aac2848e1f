use leptos::prelude::*;

use crate::components::circuit::CircuitCanvas;
use crate::components::contact::{ContactForm, SERVICES};
use crate::components::navbar::{AnchorLink, Navbar};
use crate::components::reveal;

const NAV_LINKS: &[(&str, &str)] = &[
	("#services", "Services"),
	("#process", "Process"),
	("#contact", "Contact"),
];

/// One-line pitch per entry in the contact form's service list.
fn service_blurb(value: &str) -> &'static str {
	match value {
		"automation" => "Replace repetitive busywork with dependable, observable pipelines.",
		"integration" => "Connect the tools you already pay for so data flows without copy-paste.",
		"data" => "Dashboards and reports your team reads, built on numbers you trust.",
		_ => "A clear plan for where technology moves the needle in your business.",
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let services_ref = NodeRef::<leptos::html::Section>::new();

	Effect::new(move |_| {
		if let Some(section) = services_ref.get() {
			reveal::reveal_on_scroll(&section, ".service-card");
		}
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<CircuitCanvas />
			<Navbar links=NAV_LINKS />

			<section id="home" class="hero">
				<h1>"Systems that think ahead"</h1>
				<p class="subtitle">
					"We design the automation, integrations and reporting that let small teams run like large ones."
				</p>
				<AnchorLink href="#contact" class_name="btn btn-primary">
					"Book a free call"
				</AnchorLink>
			</section>

			<section id="services" class="services" node_ref=services_ref>
				<h2>"Services"</h2>
				<div class="services-grid">
					{SERVICES
						.iter()
						.map(|&(value, label)| {
							view! {
								<div class="service-card">
									<h3>{label}</h3>
									<p>{service_blurb(value)}</p>
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section id="process" class="process">
				<h2>"Process"</h2>
				<ol>
					<li>"A 30 minute discovery call."</li>
					<li>"A written proposal with fixed scope and price."</li>
					<li>"Delivery in small, reviewable steps."</li>
				</ol>
			</section>

			<section id="contact" class="contact">
				<h2>"Let's talk"</h2>
				<ContactForm />
			</section>
		</ErrorBoundary>
	}
}
