/// HTTP handlers
///
/// - `pages`: the HTML flow — post listing, login/logout, post creation and
///   deletion, title search
/// - `notes`: the unauthenticated JSON REST API for notes
pub mod notes;
pub mod pages;

pub use notes::{create_note, delete_note, get_note, list_notes, update_note};
pub use pages::{add_entry, delete_entry, index, login, login_form, logout, search};
