use dioxus::prelude::*;

use store::{EditSession, User, UserForm};
use ui::{use_directory, EditUserDialog, ModalOverlay, SearchBar, UserCard};

const USERS_CSS: Asset = asset!("/assets/users.css");

/// The single directory page: search, card grid and the modal edit flow.
#[component]
pub fn Users() -> Element {
    let mut state = use_directory();
    let mut query = use_signal(String::new);
    let mut session = use_signal(EditSession::default);

    // Recomputed whenever the query or the collection changes
    let visible = use_memo(move || state().directory.filter(&query()));

    let handle_toggle_like = move |id: u64| {
        state.with_mut(|s| s.directory.toggle_like(id));
    };

    let handle_delete = move |id: u64| {
        state.with_mut(|s| s.directory.remove(id));
    };

    let handle_edit = move |user: User| {
        session.with_mut(|es| es.begin(&user));
    };

    let handle_save = move |form: UserForm| {
        state.with_mut(|s| session.with_mut(|es| es.commit(form, &mut s.directory)));
    };

    let handle_cancel = move |_| {
        session.with_mut(|es| es.cancel());
    };

    rsx! {
        document::Stylesheet { href: USERS_CSS }

        div {
            class: "users-page",

            h1 { class: "users-title", "User Directory" }

            SearchBar {
                value: query(),
                on_change: move |q| query.set(q),
            }

            if state().loading {
                div {
                    class: "users-loading",
                    div { class: "spinner" }
                }
            } else if visible().is_empty() {
                div {
                    class: "users-empty",
                    p { "No users match your search." }
                }
            } else {
                div {
                    class: "users-grid",
                    for user in visible() {
                        UserCard {
                            key: "{user.id}",
                            liked: state().directory.is_liked(user.id),
                            user: user.clone(),
                            on_toggle_like: handle_toggle_like,
                            on_delete: handle_delete,
                            on_edit: handle_edit,
                        }
                    }
                }
            }

            if let Some(form) = session().form().cloned() {
                ModalOverlay {
                    title: "Edit User",
                    on_close: handle_cancel,
                    EditUserDialog {
                        form: form,
                        on_save: handle_save,
                        on_cancel: handle_cancel,
                    }
                }
            }
        }
    }
}
