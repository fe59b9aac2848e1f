use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, info, warn};
use web_sys::{FormData, SubmitEvent};

use super::submission::{self, ContactConfig, ContactDetails, FAILURE_MESSAGE, SUCCESS_MESSAGE};
use crate::components::notification::{NotificationKind, use_notifier};

const SUBMIT_LABEL: &str = "Book Your Free Call";
const SENDING_LABEL: &str = "Sending...";

/// Services offered in the form's select. Values are what the relay receives.
pub const SERVICES: &[(&str, &str)] = &[
	("automation", "Workflow Automation"),
	("integration", "Systems Integration"),
	("data", "Data & Reporting"),
	("consulting", "Strategy Consulting"),
];

#[component]
pub fn ContactForm(#[prop(optional)] config: Option<ContactConfig>) -> impl IntoView {
	let config = StoredValue::new(config.unwrap_or_default());
	let notifier = use_notifier();
	let form_ref = NodeRef::<leptos::html::Form>::new();
	let (sending, set_sending) = signal(false);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let Some(form) = form_ref.get() else {
			return;
		};
		let Ok(data) = FormData::new_with_form(&form) else {
			warn!("Could not read contact form data");
			return;
		};

		let details = ContactDetails::from_form_data(&data);
		if let Err((message, kind)) = submission::submit_gate(&details) {
			notifier.show(message, kind);
			return;
		}

		set_sending.set(true);
		let endpoint = config.with_value(|c| c.endpoint.clone());
		debug!("Submitting contact form to {}", endpoint);
		spawn_local(async move {
			match submission::submit(&endpoint, data).await {
				Ok(()) => {
					info!("Contact form submitted");
					notifier.show(SUCCESS_MESSAGE, NotificationKind::Success);
					form.reset();
				}
				Err(err) => {
					warn!("Contact form submission failed: {}", err);
					notifier.show(FAILURE_MESSAGE, NotificationKind::Error);
				}
			}
			set_sending.set(false);
		});
	};

	view! {
		<form id="contactForm" class="contact-form" node_ref=form_ref on:submit=on_submit novalidate=true>
			<input type="hidden" name="access_key" value=config.with_value(|c| c.access_key.clone()) />
			<input type="hidden" name="subject" value=config.with_value(|c| c.subject.clone()) />
			<div class="form-row">
				<div class="form-group">
					<label for="name">"Name *"</label>
					<input type="text" id="name" name="name" placeholder="Your name" />
				</div>
				<div class="form-group">
					<label for="email">"Email *"</label>
					<input type="email" id="email" name="email" placeholder="you@company.com" />
				</div>
			</div>
			<div class="form-group">
				<label for="company">"Company"</label>
				<input type="text" id="company" name="company" placeholder="Company name" />
			</div>
			<div class="form-group">
				<label for="service">"What can we help with? *"</label>
				<select id="service" name="service">
					<option value="">"Select a service"</option>
					{SERVICES
						.iter()
						.map(|&(value, label)| view! { <option value=value>{label}</option> })
						.collect_view()}
				</select>
			</div>
			<div class="form-group">
				<label for="message">"Message"</label>
				<textarea id="message" name="message" rows="4" placeholder="Tell us about your project"></textarea>
			</div>
			<button type="submit" class="btn btn-primary" disabled=move || sending.get()>
				{move || if sending.get() { SENDING_LABEL } else { SUBMIT_LABEL }}
			</button>
		</form>
	}
}
