pub mod crawler;
pub mod web;

#[cfg(test)]
pub(crate) mod fake;

pub use crawler::{CandidateElement, PageSource};
pub use web::WebDriverPage;
