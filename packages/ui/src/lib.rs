//! This crate contains the shared UI for the user directory app.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod directory;
pub use directory::{use_directory, DirectoryProvider, DirectoryState};

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod search_bar;
pub use search_bar::SearchBar;

mod user_card;
pub use user_card::UserCard;

mod edit_user_dialog;
pub use edit_user_dialog::EditUserDialog;
