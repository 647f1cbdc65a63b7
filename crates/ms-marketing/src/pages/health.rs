//! Backend health-check page

use leptos::*;
use ms_core::SiteConfig;

use crate::app::use_theme;
use crate::components::PageSection;

#[component]
pub fn HealthPage() -> impl IntoView {
    let theme = use_theme();
    let (result, set_result) = create_signal(String::new());

    let check = create_action(move |_: &()| async move {
        let config = SiteConfig::from_env();
        set_result.set(format!("Checking {}…", config.health_url()));
        match reqwest::get(config.health_url()).await {
            Ok(response) if response.status().is_success() => {
                set_result.set(format!("Backend reachable ({})", response.status().as_u16()));
            }
            Ok(response) => {
                set_result.set(format!("Backend returned {}", response.status().as_u16()));
            }
            Err(error) => {
                set_result.set(format!("Backend unreachable: {error}"));
            }
        }
    });

    let button_class = move || {
        format!(
            "inline-block rounded-md px-4 py-2 text-white {}",
            theme.get().tokens().button
        )
    };

    view! {
        <PageSection title="Backend Check" subtitle="Verify the inquiry backend is reachable">
            <div class="space-y-4">
                <p class="text-sm text-slate-600">
                    "Backend base: " <code>{SiteConfig::from_env().backend_base}</code>
                </p>
                <button class=button_class on:click=move |_| check.dispatch(())>
                    "Check now"
                </button>
                <Show when=move || !result.get().is_empty()>
                    <p class="text-sm text-slate-700">{result}</p>
                </Show>
            </div>
        </PageSection>
    }
}
