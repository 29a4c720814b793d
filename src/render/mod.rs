//! HTML pages served by the search flow.

pub mod form;

pub use form::{FormPage, escape_html};
