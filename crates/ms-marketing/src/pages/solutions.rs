//! Solutions page

use leptos::*;

use crate::components::PageSection;

#[component]
pub fn SolutionsPage() -> impl IntoView {
    view! {
        <PageSection title="Solutions" subtitle="Tailored outcomes for your use case">
            <ul class="list-disc space-y-2 pl-5 text-slate-700">
                <li>"Predictive maintenance and quality automation for factories."</li>
                <li>"Care team coordination, prior auth automation, and patient triage."</li>
                <li>"Secure chatbots for internal knowledge and customer support."</li>
            </ul>
        </PageSection>
    }
}
