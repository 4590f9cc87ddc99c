use dioxus::prelude::*;

use ui::DirectoryProvider;
use views::Users;

mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        DirectoryProvider {
            Users {}
        }
    }
}
