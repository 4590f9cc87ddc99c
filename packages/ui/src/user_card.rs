use dioxus::prelude::*;
use store::User;

use crate::icons::{FaHeart, FaPenToSquare, FaTrashCan};
use crate::Icon;

/// One user in the directory grid: avatar, identity lines and the
/// like / delete / edit actions.
#[component]
pub fn UserCard(
    user: User,
    liked: bool,
    on_toggle_like: EventHandler<u64>,
    on_delete: EventHandler<u64>,
    on_edit: EventHandler<User>,
) -> Element {
    let id = user.id;
    let edit_user = user.clone();

    rsx! {
        div {
            class: "user-card",
            div {
                class: "user-card-body",
                img {
                    class: "user-avatar",
                    src: api::avatar_url(&user.username),
                    alt: "{user.name}",
                    width: 80,
                    height: 80,
                }
                div {
                    class: "user-identity",
                    div { class: "user-name", "{user.name}" }
                    div { class: "user-meta", "{user.email}" }
                    div { class: "user-meta", "{user.company.name}" }
                }
            }
            div {
                class: "user-card-actions",
                button {
                    class: if liked { "card-action liked" } else { "card-action" },
                    onclick: move |_| on_toggle_like.call(id),
                    Icon { width: 14, height: 14, icon: FaHeart }
                    if liked { "Unlike" } else { "Like" }
                }
                button {
                    class: "card-action danger",
                    onclick: move |_| on_delete.call(id),
                    Icon { width: 14, height: 14, icon: FaTrashCan }
                    "Delete"
                }
                button {
                    class: "card-action",
                    onclick: move |_| on_edit.call(edit_user.clone()),
                    Icon { width: 14, height: 14, icon: FaPenToSquare }
                    "Edit"
                }
            }
        }
    }
}
