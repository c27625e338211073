use dioxus::prelude::*;

#[component]
pub fn Label(
    #[props(default)] html_for: String,
    /// Shows a `*` marker. Purely visual: nothing enforces it.
    #[props(default)] required: bool,
    children: Element,
) -> Element {
    rsx! {
        label {
            class: "label",
            r#for: "{html_for}",
            {children}
            if required {
                span { class: "label-required", " *" }
            }
        }
    }
}

/// Label plus control, stacked.
#[component]
pub fn Field(
    label: String,
    #[props(default)] html_for: String,
    #[props(default)] required: bool,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "field",
            Label { html_for: html_for, required: required, "{label}" }
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] kind: String,
    value: String,
    #[props(default)] placeholder: String,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: "{kind}",
            value: "{value}",
            placeholder: "{placeholder}",
            disabled: disabled,
            oninput: move |evt: FormEvent| oninput.call(evt.value()),
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default)] id: String,
    value: String,
    #[props(default)] placeholder: String,
    #[props(default = 4)] rows: u32,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "input textarea",
            rows: "{rows}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt: FormEvent| oninput.call(evt.value()),
        }
    }
}

#[component]
pub fn Checkbox(
    id: String,
    checked: bool,
    label: String,
    onchange: EventHandler<bool>,
) -> Element {
    rsx! {
        div {
            class: "checkbox",
            input {
                id: "{id}",
                r#type: "checkbox",
                checked: checked,
                onchange: move |evt: FormEvent| onchange.call(evt.checked()),
            }
            label { r#for: "{id}", "{label}" }
        }
    }
}

/// A `<select>` over `(value, label)` pairs.
#[component]
pub fn Select(
    #[props(default)] id: String,
    value: String,
    options: Vec<(String, String)>,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "input select",
            value: "{value}",
            onchange: move |evt: FormEvent| onchange.call(evt.value()),
            for (option_value, label) in options.iter() {
                option {
                    key: "{option_value}",
                    value: "{option_value}",
                    selected: *option_value == value,
                    "{label}"
                }
            }
        }
    }
}
