use super::view_model::UserEntryViewModel;
use crate::shared::config::AppConfig;
use contracts::domain::a001_user_entry::{Field, Gender};
use leptos::prelude::*;

#[component]
pub fn UserEntryForm() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_else(AppConfig::from_env);
    let vm = UserEntryViewModel::new(config.api_base, config.skill_catalog);

    let gender_options = Gender::ALL
        .into_iter()
        .map(move |g| {
            let id = format!("gender-{}", g);
            view! {
                <div class="form-check form-check-inline">
                    <input
                        class="form-check-input"
                        type="radio"
                        name="gender"
                        id=id.clone()
                        value=g.as_str()
                        prop:checked=move || vm.value(Field::Gender) == g.as_str()
                        on:change=move |_| vm.set_field(Field::Gender, g.as_str().to_string())
                    />
                    <label class="form-check-label" for=id>{g.as_str()}</label>
                </div>
            }
        })
        .collect_view();

    let skill_options = vm
        .catalog()
        .iter()
        .map(move |skill| {
            let id = format!("skill-{}", skill);
            view! {
                <div class="form-check form-check-inline">
                    <input
                        class="form-check-input"
                        type="checkbox"
                        id=id.clone()
                        value=skill
                        prop:checked=move || vm.has_skill(skill)
                        on:change=move |_| vm.toggle_skill(skill)
                    />
                    <label class="form-check-label" for=id>{skill}</label>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="card mx-auto" style="max-width: 500px">
            <div class="card-body">
                <h4 class="card-title mb-3">{"User Entry Form"}</h4>

                {move || vm.message().map(|m| view! {
                    <div class=format!("alert alert-{}", m.kind.as_str())>{m.text}</div>
                })}

                <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    vm.submit_command();
                }>
                    <div class="mb-3">
                        <input
                            type="text"
                            class="form-control"
                            placeholder="Name"
                            prop:value=move || vm.value(Field::Name)
                            on:input=move |ev| vm.set_field(Field::Name, event_target_value(&ev))
                        />
                    </div>

                    <div class="mb-3">
                        <input
                            type="text"
                            class="form-control"
                            placeholder="Roll Number"
                            prop:value=move || vm.value(Field::RollNo)
                            on:input=move |ev| vm.set_field(Field::RollNo, event_target_value(&ev))
                        />
                    </div>

                    <div class="mb-3">
                        <label class="form-label">{"Gender"}</label>
                        <div>{gender_options}</div>
                    </div>

                    <div class="mb-3">
                        <label class="form-label">{"Skills"}</label>
                        <div>{skill_options}</div>
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || vm.is_submitting()
                    >
                        {move || if vm.is_submitting() { "Saving..." } else { "Save" }}
                    </button>
                </form>

                <div class="mt-3 text-muted text-center">
                    {"All rights reserved \u{00A9} 2025 CBIT-IT @kgr."}
                </div>
            </div>
        </div>
    }
}
