//! About page

use leptos::*;

use crate::components::PageSection;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageSection title="About Us" subtitle="Who we are and what we believe">
            <p class="text-slate-700">
                "We design and deliver reliable software for Manufacturing and Healthcare. "
                "Our team integrates systems, builds project management apps, ships AI "
                "workflows, and crafts custom chatbots that respect compliance and "
                "security requirements."
            </p>
        </PageSection>
    }
}
