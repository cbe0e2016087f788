//! Static site reference data
//!
//! Navigation, service charter, downloads, tenders and governance rosters are
//! fixed configuration. They are loaded once at startup (JSON file) or taken
//! from the built-in published set, and never mutated afterwards.

mod data;
pub mod loader;

pub use data::{CharterEntry, ContactDetails, NavGroup, NavItem, Person, Resource, SiteContent, Tender};
pub use loader::{load_content, load_content_from_reader, ContentError};
