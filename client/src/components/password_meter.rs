//! Strength bar shown under password inputs.

use leptos::prelude::*;

use crate::util::password::strength;

#[component]
pub fn PasswordMeter(#[prop(into)] password: Signal<String>) -> impl IntoView {
    let scored = move || strength(&password.get());

    view! {
        <Show when=move || !password.get().is_empty()>
            <div class=move || scored().1.class()>
                <div class="strength__track">
                    <div class="strength__fill" style=move || format!("width: {}%;", scored().0)></div>
                </div>
                <span class="strength__label">{move || format!("Strength: {}", scored().1.label())}</span>
            </div>
        </Show>
    }
}
