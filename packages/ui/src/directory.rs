//! Directory state context and hooks for the UI.

use dioxus::prelude::*;
use store::Directory;

/// Directory state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryState {
    pub directory: Directory,
    /// True until the startup fetch settles.
    pub loading: bool,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self {
            directory: Directory::default(),
            loading: true,
        }
    }
}

/// Get the current directory state.
/// Returns a signal that updates as records are edited, liked or removed.
pub fn use_directory() -> Signal<DirectoryState> {
    use_context::<Signal<DirectoryState>>()
}

/// Provider component that owns the directory state.
/// Wrap the app with this component; views subscribe via [`use_directory`].
///
/// The user list is fetched once on mount. A failed fetch is logged and
/// leaves the directory empty; the loading flag clears either way and the
/// fetch is never retried.
#[component]
pub fn DirectoryProvider(children: Element) -> Element {
    let mut state = use_signal(DirectoryState::default);

    // Fetch the user list on mount
    let _ = use_resource(move || async move {
        match api::fetch_users().await {
            Ok(users) => {
                tracing::info!("loaded {} users", users.len());
                state.set(DirectoryState {
                    directory: Directory::from_users(users),
                    loading: false,
                });
            }
            Err(e) => {
                tracing::warn!("user fetch failed: {e}");
                state.set(DirectoryState {
                    directory: Directory::default(),
                    loading: false,
                });
            }
        }
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}
