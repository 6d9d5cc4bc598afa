use crate::domain::a001_user_entry::ui::details::UserEntryForm;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the application configuration to the whole app via context.
    let config = AppConfig::from_env();
    log::debug!("API base: {}", config.api_base);
    provide_context(config);

    view! {
        <div class="container py-4">
            <UserEntryForm />
        </div>
    }
}
