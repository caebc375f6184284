// src/specs/mod.rs
//! # Page “specs”
//!
//! Each spec knows how to read one source page and nothing else: where the
//! ground truth lives in the markup and how to pull it out tolerantly.
//!
//! ## What lives here
//! - **Static pages** (`calendar`, `ohsaa`): pure parsing over fetched HTML with
//!   the `core::html` block helpers, plus a soft-failing `events_on` that turns
//!   fetch errors into an empty result so the conversation stays up.
//! - **The dynamic athletics page** (`athletics`): the XPath selectors for one
//!   event card and the load → locate → extract → align → filter pipeline,
//!   generic over any `browser::Page`.
//!
//! ## What does **not** live here
//! - Browser session lifetime (`browser::webdriver`), CSV export (`file`),
//!   and anything conversational (`chat`).
//!
//! ## Conventions
//! - Class matching is token-based and order-insensitive.
//! - Output order is document order; nothing here sorts.
//! - Specs are testable offline against captured HTML snippets.
pub mod athletics;
pub mod calendar;
pub mod ohsaa;
