//! Toast notifications. At most one is shown; a new one replaces the old.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_meta::Style;

/// How long a toast stays up before sliding out on its own.
pub const AUTO_DISMISS_MS: u32 = 5_000;
/// Length of the slide-out animation, after which the toast is removed.
pub const SLIDE_OUT_MS: u32 = 300;

const KEYFRAMES: &str = r#"
@keyframes slideIn {
	from { opacity: 0; transform: translateX(100px); }
	to { opacity: 1; transform: translateX(0); }
}
@keyframes slideOut {
	from { opacity: 1; transform: translateX(0); }
	to { opacity: 0; transform: translateX(100px); }
}
"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
	Success,
	Error,
}

impl NotificationKind {
	pub fn class(self) -> &'static str {
		match self {
			Self::Success => "notification notification-success",
			Self::Error => "notification notification-error",
		}
	}

	pub fn style(self, leaving: bool) -> String {
		let (background, color) = match self {
			Self::Success => ("linear-gradient(135deg, #d4a574 0%, #b8860b 100%)", "#0a0a0f"),
			Self::Error => ("#ff4444", "#fff"),
		};
		let animation = if leaving {
			"slideOut 0.3s ease forwards"
		} else {
			"slideIn 0.3s ease"
		};
		format!(
			"position: fixed; bottom: 24px; right: 24px; padding: 16px 24px; \
			 background: {background}; color: {color}; border-radius: 12px; font-weight: 600; \
			 display: flex; align-items: center; gap: 16px; z-index: 10000; \
			 animation: {animation}; box-shadow: 0 10px 40px rgba(0, 0, 0, 0.3);"
		)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
	pub id: u64,
	pub kind: NotificationKind,
	pub message: String,
	pub leaving: bool,
}

/// Handle for raising toasts, provided once at the app root.
#[derive(Clone, Copy)]
pub struct Notifier {
	current: RwSignal<Option<Notification>>,
	next_id: StoredValue<u64>,
}

impl Notifier {
	pub fn new() -> Self {
		Self {
			current: RwSignal::new(None),
			next_id: StoredValue::new(0),
		}
	}

	pub fn current(&self) -> Option<Notification> {
		self.current.get()
	}

	/// Replace any visible toast and start its auto-dismiss countdown.
	pub fn show(&self, message: impl Into<String>, kind: NotificationKind) {
		let id = self.push(message.into(), kind);
		let notifier = *self;
		Timeout::new(AUTO_DISMISS_MS, move || notifier.dismiss(id)).forget();
	}

	fn push(&self, message: String, kind: NotificationKind) -> u64 {
		let id = self.next_id.get_value();
		self.next_id.set_value(id + 1);
		self.current.set(Some(Notification {
			id,
			kind,
			message,
			leaving: false,
		}));
		id
	}

	/// Slide the toast out, then remove it. Stale ids are ignored.
	pub fn dismiss(&self, id: u64) {
		if !self.begin_leaving(id) {
			return;
		}
		let notifier = *self;
		Timeout::new(SLIDE_OUT_MS, move || notifier.remove(id)).forget();
	}

	fn begin_leaving(&self, id: u64) -> bool {
		let mut started = false;
		self.current.update(|current| {
			if let Some(n) = current.as_mut().filter(|n| n.id == id && !n.leaving) {
				n.leaving = true;
				started = true;
			}
		});
		started
	}

	fn remove(&self, id: u64) {
		self.current.update(|current| {
			if current.as_ref().is_some_and(|n| n.id == id) {
				*current = None;
			}
		});
	}
}

impl Default for Notifier {
	fn default() -> Self {
		Self::new()
	}
}

pub fn provide_notifier() -> Notifier {
	let notifier = Notifier::new();
	provide_context(notifier);
	notifier
}

pub fn use_notifier() -> Notifier {
	use_context::<Notifier>().unwrap_or_else(provide_notifier)
}

#[component]
pub fn NotificationHost() -> impl IntoView {
	let notifier = use_notifier();

	view! {
		<Style id="notification-styles">{KEYFRAMES}</Style>
		{move || {
			notifier
				.current()
				.map(|n| {
					let id = n.id;
					view! {
						<div class=n.kind.class() style=n.kind.style(n.leaving)>
							<span>{n.message}</span>
							<button class="notification-close" on:click=move |_| notifier.dismiss(id)>
								"\u{00d7}"
							</button>
						</div>
					}
				})
		}}
	}
}
