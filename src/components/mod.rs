pub mod circuit;
pub mod contact;
pub mod dom;
pub mod navbar;
pub mod notification;
pub mod reveal;
