//! Contact page

use leptos::*;

use crate::app::use_theme;
use crate::components::PageSection;

#[component]
pub fn ContactPage() -> impl IntoView {
    let theme = use_theme();
    let button_class = move || {
        format!(
            "inline-block rounded-md px-4 py-2 text-white {}",
            theme.get().tokens().button
        )
    };

    view! {
        <PageSection title="Contact Us" subtitle="We'll respond within one business day">
            <a href="/#contact" class=button_class>"Open contact form"</a>
        </PageSection>
    }
}
