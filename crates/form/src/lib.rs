//! `listing-form` library crate.
//!
//! The add-property form: [`controller::FormController`] owns the draft,
//! [`event_loop::run`] feeds it user input, and
//! [`navigation::Navigator`] receives the redirect. The binary
//! entrypoint lives in `main.rs`.

pub mod args;
pub mod controller;
pub mod event_loop;
pub mod navigation;
