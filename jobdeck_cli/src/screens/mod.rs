/// Screen module exports

pub mod categories;
pub mod profile_dialog;

pub use categories::CategoriesScreen;
pub use profile_dialog::{DialogPhase, Focus, ProfileDialogScreen, ProfileDialogState};
