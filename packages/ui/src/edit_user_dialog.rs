use dioxus::prelude::*;
use store::UserForm;

/// Edit form for one user record.
///
/// Owns its field state, seeded from `form`. Name and email are required
/// and email has to look like an address; the checks run here so the
/// store only ever receives validated flat field sets.
#[component]
pub fn EditUserDialog(
    form: UserForm,
    on_save: EventHandler<UserForm>,
    on_cancel: EventHandler<()>,
) -> Element {
    let id = form.id;
    let mut name = use_signal({
        let v = form.name.clone();
        move || v
    });
    let mut email = use_signal({
        let v = form.email.clone();
        move || v
    });
    let mut phone = use_signal({
        let v = form.phone.clone();
        move || v
    });
    let mut website = use_signal({
        let v = form.website.clone();
        move || v
    });
    let mut street = use_signal({
        let v = form.street.clone();
        move || v
    });
    let mut city = use_signal({
        let v = form.city.clone();
        move || v
    });
    let mut company = use_signal({
        let v = form.company.clone();
        move || v
    });
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let n = name().trim().to_string();
        let e = email().trim().to_string();

        if n.is_empty() {
            error.set(Some("Name is required".to_string()));
            return;
        }
        if e.is_empty() {
            error.set(Some("Email is required".to_string()));
            return;
        }
        if !looks_like_email(&e) {
            error.set(Some("Enter a valid email address".to_string()));
            return;
        }

        error.set(None);
        on_save.call(UserForm {
            id,
            name: n,
            email: e,
            phone: phone(),
            website: website(),
            street: street(),
            city: city(),
            company: company(),
        });
    };

    rsx! {
        form {
            class: "edit-user-form",
            onsubmit: handle_submit,

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }

            div {
                class: "form-field",
                label { "Name" }
                input {
                    r#type: "text",
                    value: name(),
                    oninput: move |evt| name.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Email" }
                input {
                    r#type: "email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Phone" }
                input {
                    r#type: "tel",
                    value: phone(),
                    oninput: move |evt| phone.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Website" }
                input {
                    r#type: "text",
                    value: website(),
                    oninput: move |evt| website.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Street" }
                input {
                    r#type: "text",
                    value: street(),
                    oninput: move |evt| street.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "City" }
                input {
                    r#type: "text",
                    value: city(),
                    oninput: move |evt| city.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Company" }
                input {
                    r#type: "text",
                    value: company(),
                    oninput: move |evt| company.set(evt.value()),
                }
            }

            div {
                class: "form-actions",
                button {
                    r#type: "button",
                    class: "secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    r#type: "submit",
                    class: "primary",
                    "Save"
                }
            }
        }
    }
}

/// Minimal shape check: one `@` with a non-empty local part and a dotted
/// domain. The data source never ships anything this rejects.
fn looks_like_email(s: &str) -> bool {
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
