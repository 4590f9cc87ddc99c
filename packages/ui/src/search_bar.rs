use dioxus::prelude::*;

/// Controlled free-text search input over the directory.
#[component]
pub fn SearchBar(value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "search-bar",
            input {
                r#type: "search",
                placeholder: "Search by name or email",
                value: "{value}",
                oninput: move |evt| on_change.call(evt.value()),
            }
        }
    }
}
