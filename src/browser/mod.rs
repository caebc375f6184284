// src/browser/mod.rs
//! Driving a dynamically rendered page.

pub mod convergence;
pub mod page;
pub mod webdriver;

pub use convergence::{Convergence, LoadReport, wait_for_full_load};
pub use page::{Locator, Page};
pub use webdriver::WebDriverSession;
