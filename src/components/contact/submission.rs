use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;
use web_sys::FormData;

use crate::components::notification::NotificationKind;

/// Public relay that forwards form posts by email.
pub const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";

pub const SUCCESS_MESSAGE: &str = "Thank you! We'll be in touch soon to schedule your call.";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactConfig {
	pub endpoint: String,
	pub access_key: String,
	pub subject: String,
}

impl Default for ContactConfig {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.to_string(),
			access_key: option_env!("WEB3FORMS_ACCESS_KEY").unwrap_or_default().to_string(),
			subject: "New discovery call request".to_string(),
		}
	}
}

/// The required fields of the contact form. Optional fields travel to the
/// relay untouched inside the `FormData`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDetails {
	pub name: String,
	pub email: String,
	pub service: String,
}

impl ContactDetails {
	pub fn from_form_data(data: &FormData) -> Self {
		let field = |name: &str| data.get(name).as_string().unwrap_or_default();
		Self {
			name: field("name"),
			email: field("email"),
			service: field("service"),
		}
	}

	/// Client-side checks run before anything touches the network.
	pub fn validate(&self) -> Result<(), ValidationError> {
		if self.name.is_empty() || self.email.is_empty() || self.service.is_empty() {
			return Err(ValidationError::MissingRequired);
		}
		if !is_valid_email(&self.email) {
			return Err(ValidationError::InvalidEmail);
		}
		Ok(())
	}
}

/// Decide whether a submission may go out. A refusal carries the toast to show
/// instead, so nothing reaches the network.
pub fn submit_gate(details: &ContactDetails) -> Result<(), (String, NotificationKind)> {
	details
		.validate()
		.map_err(|err| (err.to_string(), NotificationKind::Error))
}

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot in the domain
/// with something on both sides of it.
pub fn is_valid_email(email: &str) -> bool {
	if email.chars().any(char::is_whitespace) {
		return false;
	}
	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};
	if local.is_empty() || domain.contains('@') {
		return false;
	}
	domain
		.match_indices('.')
		.any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// Display strings are shown to the visitor as-is.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
	#[error("Please fill in all required fields.")]
	MissingRequired,
	#[error("Please enter a valid email address.")]
	InvalidEmail,
}

#[derive(Debug, Error)]
pub enum SubmitError {
	#[error("network error: {0}")]
	Network(#[from] gloo_net::Error),
	#[error("relay rejected the submission{}", reason(.message))]
	Rejected { message: Option<String> },
}

fn reason(message: &Option<String>) -> String {
	message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

#[derive(Debug, Deserialize)]
struct RelayResponse {
	success: bool,
	#[serde(default)]
	message: Option<String>,
}

impl RelayResponse {
	fn into_result(self) -> Result<(), SubmitError> {
		if self.success {
			Ok(())
		} else {
			Err(SubmitError::Rejected {
				message: self.message,
			})
		}
	}
}

/// POST the form to the relay and interpret its `{ success }` reply.
pub async fn submit(endpoint: &str, body: FormData) -> Result<(), SubmitError> {
	let response = Request::post(endpoint)
		.header("Accept", "application/json")
		.body(body)?
		.send()
		.await?;
	let reply: RelayResponse = response.json().await?;
	reply.into_result()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn details(name: &str, email: &str, service: &str) -> ContactDetails {
		ContactDetails {
			name: name.into(),
			email: email.into(),
			service: service.into(),
		}
	}

	#[test]
	fn empty_email_is_rejected_as_missing() {
		let err = details("Ada", "", "audit").validate().unwrap_err();
		assert_eq!(err, ValidationError::MissingRequired);
		assert_eq!(err.to_string(), "Please fill in all required fields.");
	}

	#[test]
	fn empty_required_fields_are_missing() {
		assert_eq!(
			details("", "a@b.co", "audit").validate(),
			Err(ValidationError::MissingRequired)
		);
		assert_eq!(
			details("Ada", "a@b.co", "").validate(),
			Err(ValidationError::MissingRequired)
		);
	}

	#[test]
	fn whitespace_name_counts_as_filled() {
		assert_eq!(details(" ", "a@b.co", "audit").validate(), Ok(()));
	}

	#[test]
	fn gate_turns_empty_email_into_error_toast() {
		assert_eq!(
			submit_gate(&details("Ada", "", "audit")),
			Err((
				"Please fill in all required fields.".to_string(),
				NotificationKind::Error
			))
		);
		assert_eq!(
			submit_gate(&details("Ada", "nope", "audit")),
			Err((
				"Please enter a valid email address.".to_string(),
				NotificationKind::Error
			))
		);
		assert_eq!(submit_gate(&details("Ada", "ada@example.com", "audit")), Ok(()));
	}

	#[test]
	fn malformed_email_is_rejected() {
		let err = details("Ada", "ada.example.com", "audit").validate().unwrap_err();
		assert_eq!(err, ValidationError::InvalidEmail);
		assert_eq!(err.to_string(), "Please enter a valid email address.");
	}

	#[test]
	fn complete_details_pass() {
		assert_eq!(details("Ada", "ada@example.com", "audit").validate(), Ok(()));
	}

	#[test]
	fn email_shapes() {
		for ok in ["a@b.co", "first.last@mail.example.org", "x+tag@d.io", "a@b.c.d"] {
			assert!(is_valid_email(ok), "{ok}");
		}
		for bad in ["", "a@b", "@b.co", "a@.co", "a@b.", "a b@c.de", "a@b@c.de", "plain"] {
			assert!(!is_valid_email(bad), "{bad}");
		}
	}

	#[test]
	fn relay_reply_maps_to_result() {
		let ok: RelayResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
		assert!(ok.into_result().is_ok());

		let rejected: RelayResponse =
			serde_json::from_str(r#"{"success": false, "message": "bad key"}"#).unwrap();
		let err = rejected.into_result().unwrap_err();
		assert_eq!(err.to_string(), "relay rejected the submission: bad key");
	}
}
