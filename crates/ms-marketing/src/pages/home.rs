//! Home page

use leptos::*;
use ms_core::catalog;

use crate::app::use_theme;
use crate::components::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let theme = use_theme();

    let cta_class = move || {
        format!(
            "inline-flex items-center gap-2 rounded-md px-4 py-2 text-white focus:outline-none {} {}",
            theme.get().tokens().button,
            theme.get().tokens().ring,
        )
    };
    let accent_class = move || format!("text-sm {}", theme.get().tokens().accent);
    let glow_class = move || {
        format!(
            "absolute -top-24 -left-24 h-72 w-72 rounded-full blur-3xl {}",
            theme.get().tokens().hero_glow
        )
    };

    view! {
        <div class="relative">
            // Soft background glow
            <div class="pointer-events-none fixed inset-0 overflow-hidden">
                <div class=glow_class></div>
            </div>

            // Hero
            <section class="relative z-10">
                <div class="mx-auto max-w-6xl px-6 py-12 sm:py-16">
                    <div class="grid items-center gap-10 md:grid-cols-2">
                        <div>
                            <h1 class="text-4xl font-black tracking-tight sm:text-5xl">
                                "Build reliable software for Manufacturing and Healthcare"
                            </h1>
                            <p class="mt-4 text-lg text-slate-600">
                                "Integrations, project management apps, AI workflows, and custom "
                                "chatbots, delivered with compliance and reliability."
                            </p>
                            <div class="mt-6 flex flex-wrap items-center gap-3">
                                <a href="#contact" class=cta_class>"Start a conversation"</a>
                                <a
                                    href="#ai"
                                    class="inline-flex items-center gap-2 rounded-md border border-black/5 bg-white/70 px-4 py-2 text-slate-800 shadow-sm backdrop-blur hover:bg-white/90"
                                >
                                    "Explore AI workflows"
                                </a>
                            </div>
                            <div class=move || format!("mt-6 {}", accent_class())>
                                "Trusted by builders across regulated industries"
                            </div>
                        </div>

                        <div class="relative rounded-3xl border border-black/5 bg-white/80 p-6 shadow-xl backdrop-blur">
                            <div class="grid grid-cols-2 gap-4">
                                {catalog::SERVICES
                                    .into_iter()
                                    .map(|service| view! {
                                        <ServiceCard
                                            icon=service_icon(service.title)
                                            title=service.title
                                            description=service.blurb
                                        />
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            // AI Workflows Gallery
            <section id="ai" class="relative z-10">
                <div class="mx-auto max-w-6xl px-6 py-8">
                    <div class="flex items-end justify-between">
                        <h2 class="text-2xl font-bold">"AI Workflows that feel promising"</h2>
                        <p class=accent_class>"From discovery to deployment"</p>
                    </div>

                    <div class="mt-6 grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                        <IllustrationCard
                            title="LLM + RAG Pipeline"
                            description="Search, retrieve, and ground answers with your data."
                        >
                            <RagPipelineSvg/>
                        </IllustrationCard>
                        <IllustrationCard
                            title="Predictive Maintenance"
                            description="Sensor streams → feature store → anomaly alerts."
                        >
                            <PredictiveSvg/>
                        </IllustrationCard>
                        <IllustrationCard
                            title="Chat Automation"
                            description="Multi-step agent orchestrates tasks and approvals."
                        >
                            <ChatAgentSvg/>
                        </IllustrationCard>
                    </div>
                </div>
            </section>

            // Services
            <section id="services" class="relative z-10">
                <div class="mx-auto max-w-6xl px-6 py-8">
                    <h2 class="text-2xl font-bold">"Services"</h2>
                    <div class="mt-6 grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                        {catalog::SERVICES
                            .into_iter()
                            .map(|service| view! {
                                <ServiceCard
                                    icon=service_icon(service.title)
                                    title=service.title
                                    description=service.blurb
                                />
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Industries
            <section class="relative z-10">
                <div class="mx-auto max-w-6xl px-6 py-8">
                    <h2 class="text-2xl font-bold">"Industries"</h2>
                    <div class="mt-6 grid gap-4 md:grid-cols-2">
                        {catalog::INDUSTRIES
                            .into_iter()
                            .map(|industry| view! {
                                <IndustryCard
                                    icon=industry_icon(industry.title)
                                    title=industry.title
                                    bullets=industry.bullets.to_vec()
                                />
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            // Contact
            <section id="contact" class="relative z-10">
                <InquiryForm/>
            </section>
        </div>
    }
}

fn industry_icon(title: &str) -> &'static str {
    match title {
        "Manufacturing" => "🏭",
        "Healthcare" => "🩺",
        _ => "🏢",
    }
}

#[component]
fn RagPipelineSvg() -> impl IntoView {
    view! {
        <svg viewBox="0 0 400 300" class="h-full w-full">
            <rect x="0" y="0" width="400" height="300" fill="#0ea5e9" opacity="0.08"/>
            <g stroke="#0ea5e9" stroke-width="2" fill="none">
                <rect x="30" y="120" width="90" height="60" rx="10" fill="#e6f9ff"/>
                <rect x="155" y="120" width="90" height="60" rx="10" fill="#e6f9ff"/>
                <rect x="280" y="120" width="90" height="60" rx="10" fill="#e6f9ff"/>
                <path d="M120 150 H155"/>
                <path d="M245 150 H280"/>
                <text x="75" y="155" text-anchor="middle" font-size="12" fill="#0369a1">"Query"</text>
                <text x="200" y="155" text-anchor="middle" font-size="12" fill="#0369a1">"Retrieve"</text>
                <text x="325" y="155" text-anchor="middle" font-size="12" fill="#0369a1">"Answer"</text>
            </g>
        </svg>
    }
}

#[component]
fn PredictiveSvg() -> impl IntoView {
    view! {
        <svg viewBox="0 0 400 300" class="h-full w-full">
            <rect x="0" y="0" width="400" height="300" fill="#0ea5e9" opacity="0.06"/>
            <g stroke="#06b6d4" stroke-width="2" fill="none">
                <polyline points="30,220 80,180 130,200 180,140 230,160 280,110 330,130 370,90"/>
                <line x1="30" y1="240" x2="370" y2="240" stroke="#94a3b8" stroke-dasharray="4 4"/>
            </g>
            <g fill="#22d3ee">
                <circle cx="80" cy="180" r="5"/>
                <circle cx="180" cy="140" r="5"/>
                <circle cx="280" cy="110" r="5"/>
                <circle cx="370" cy="90" r="5"/>
            </g>
        </svg>
    }
}

#[component]
fn ChatAgentSvg() -> impl IntoView {
    view! {
        <svg viewBox="0 0 400 300" class="h-full w-full">
            <rect x="0" y="0" width="400" height="300" fill="#06b6d4" opacity="0.06"/>
            <g>
                <rect x="40" y="60" width="130" height="70" rx="12" fill="#e0f7ff" stroke="#06b6d4"/>
                <rect x="230" y="60" width="130" height="70" rx="12" fill="#e0f7ff" stroke="#06b6d4"/>
                <rect x="135" y="170" width="130" height="70" rx="12" fill="#e0f7ff" stroke="#06b6d4"/>
                <path d="M170 130 L230 130" stroke="#0ea5e9" stroke-width="2"/>
                <text x="105" y="100" text-anchor="middle" font-size="12" fill="#0369a1">"User"</text>
                <text x="295" y="100" text-anchor="middle" font-size="12" fill="#0369a1">"Tools"</text>
                <text x="200" y="210" text-anchor="middle" font-size="12" fill="#0369a1">"Agent"</text>
            </g>
        </svg>
    }
}
