//! Pure functions from records to a UI tree, plus the tree renderer.

pub mod card;
pub mod node;
pub mod pages;

pub use node::render_document;
pub use pages::{dashboard_page, intake_page};
