//! Products page

use leptos::*;

use crate::components::PageSection;

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <PageSection title="Products" subtitle="Platforms and accelerators">
            <ul class="list-disc space-y-2 pl-5 text-slate-700">
                <li>"Manufacturing Ops Hub — ERP/MES connectors, dashboards, and SOP automation."</li>
                <li>"Healthcare Workflow Studio — EHR/EMR bridges, clinical pathways, and audit trails."</li>
                <li>"AI Automation Kit — RAG pipelines, agent orchestration, and monitoring."</li>
            </ul>
        </PageSection>
    }
}
