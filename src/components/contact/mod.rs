mod form;
mod submission;

pub use form::{ContactForm, SERVICES};
