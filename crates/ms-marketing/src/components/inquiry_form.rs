//! Contact inquiry section: service toggles plus the submission form.
//!
//! The form state lives in a single [`InquiryController`] behind a signal;
//! every handler applies its transition synchronously, and the POST is the
//! one async suspension point, driven through an action.

use leptos::*;
use ms_core::{
    catalog, InquiryController, InquiryField, InquiryTransport, SiteConfig, SubmissionStatus,
};

use crate::app::use_theme;
use crate::transport::HttpTransport;

pub(crate) fn service_icon(title: &str) -> &'static str {
    match title {
        "Systems Integrations" => "🔧",
        "Project Management Apps" => "📋",
        "AI Workflows & Automations" => "🔁",
        "Custom Chatbots" => "🤖",
        _ => "✨",
    }
}

#[component]
pub fn InquiryForm() -> impl IntoView {
    let theme = use_theme();
    let controller = create_rw_signal(InquiryController::new());

    let submit = create_action(move |_: &()| async move {
        // The guard in begin_submit keeps this a no-op while a request is
        // already in flight.
        let Some(payload) = controller.try_update(|c| c.begin_submit()).flatten() else {
            return;
        };
        let config = SiteConfig::from_env();
        let transport = HttpTransport::new();
        let outcome = transport
            .post_inquiry(&config.inquiries_url(), &payload)
            .await;
        controller.update(|c| c.complete_submit(outcome));
    });

    let status = move || controller.with(|c| c.status().clone());
    let is_loading = move || controller.with(|c| c.status().is_loading());
    let error_message = move || controller.with(|c| c.status().error_message().map(str::to_string));

    let input_class = move || {
        format!(
            "mt-1 w-full rounded-md border border-black/10 bg-white/70 px-3 py-2 text-sm shadow-sm outline-none transition {}",
            theme.get().tokens().ring
        )
    };
    let form_class = move || {
        format!(
            "rounded-2xl border border-black/5 bg-white/80 p-6 shadow-xl backdrop-blur {}",
            theme.get().tokens().card
        )
    };
    let submit_class = move || {
        format!(
            "inline-flex items-center gap-2 rounded-md px-4 py-2 text-white disabled:opacity-60 {}",
            theme.get().tokens().button
        )
    };
    let accent_class = move || format!("mt-4 text-sm {}", theme.get().tokens().accent);

    view! {
        <div class="mx-auto max-w-6xl px-6 py-12">
            <div class="grid gap-8 md:grid-cols-2">
                // Pitch and service toggles
                <div>
                    <h2 class="text-2xl font-bold">"Start a conversation"</h2>
                    <p class="mt-2 text-slate-600">
                        "Tell us a bit about your goals. We'll reply within one business day."
                    </p>
                    <div class=accent_class>"We never share your data."</div>

                    <div class="mt-8 grid grid-cols-2 gap-4">
                        {catalog::SERVICES
                            .into_iter()
                            .map(|service| {
                                let title = service.title;
                                let selected = move || {
                                    controller
                                        .with(|c| c.draft().services.iter().any(|s| s == title))
                                };
                                let toggle_class = move || {
                                    format!(
                                        "rounded-lg border border-black/5 bg-white/70 px-3 py-2 text-left text-sm shadow-sm backdrop-blur transition-all {} {}",
                                        theme.get().tokens().card,
                                        if selected() { "ring-2 ring-black/10" } else { "" },
                                    )
                                };
                                view! {
                                    <button
                                        type="button"
                                        class=toggle_class
                                        on:click=move |_| {
                                            controller.update(|c| c.toggle_service(title))
                                        }
                                    >
                                        <div class="flex items-center gap-2">
                                            <span>{service_icon(title)}</span>
                                            <span>{title}</span>
                                        </div>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                // Form
                <form
                    class=form_class
                    on:submit=move |ev| {
                        ev.prevent_default();
                        submit.dispatch(());
                    }
                >
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                        <div>
                            <label class="text-sm font-medium">"Name"</label>
                            <input
                                required
                                class=input_class
                                prop:value=move || controller.with(|c| c.draft().name.clone())
                                on:input=move |ev| {
                                    controller.update(|c| {
                                        c.update_field(InquiryField::Name, event_target_value(&ev))
                                    })
                                }
                            />
                        </div>
                        <div>
                            <label class="text-sm font-medium">"Email"</label>
                            <input
                                required
                                type="email"
                                class=input_class
                                prop:value=move || controller.with(|c| c.draft().email.clone())
                                on:input=move |ev| {
                                    controller.update(|c| {
                                        c.update_field(InquiryField::Email, event_target_value(&ev))
                                    })
                                }
                            />
                        </div>
                        <div>
                            <label class="text-sm font-medium">"Company"</label>
                            <input
                                class=input_class
                                prop:value=move || controller.with(|c| c.draft().company.clone())
                                on:input=move |ev| {
                                    controller.update(|c| {
                                        c.update_field(InquiryField::Company, event_target_value(&ev))
                                    })
                                }
                            />
                        </div>
                        <div>
                            <label class="text-sm font-medium">"Industry"</label>
                            <select
                                class=input_class
                                prop:value=move || controller.with(|c| c.draft().industry.clone())
                                on:change=move |ev| {
                                    controller.update(|c| {
                                        c.update_field(InquiryField::Industry, event_target_value(&ev))
                                    })
                                }
                            >
                                {catalog::INDUSTRIES
                                    .into_iter()
                                    .map(|industry| view! {
                                        <option value=industry.title>{industry.title}</option>
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <div>
                            <label class="text-sm font-medium">"Budget"</label>
                            <select
                                class=input_class
                                prop:value=move || controller.with(|c| c.draft().budget.clone())
                                on:change=move |ev| {
                                    controller.update(|c| {
                                        c.update_field(InquiryField::Budget, event_target_value(&ev))
                                    })
                                }
                            >
                                <option value="">"Select…"</option>
                                {catalog::BUDGET_OPTIONS
                                    .into_iter()
                                    .map(|(value, label)| view! {
                                        <option value=value>{label}</option>
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <div>
                            <label class="text-sm font-medium">"Timeline"</label>
                            <select
                                class=input_class
                                prop:value=move || controller.with(|c| c.draft().timeline.clone())
                                on:change=move |ev| {
                                    controller.update(|c| {
                                        c.update_field(InquiryField::Timeline, event_target_value(&ev))
                                    })
                                }
                            >
                                <option value="">"Select…"</option>
                                {catalog::TIMELINE_OPTIONS
                                    .into_iter()
                                    .map(|value| view! {
                                        <option value=value>{value}</option>
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="sm:col-span-2">
                            <label class="text-sm font-medium">"Message"</label>
                            <textarea
                                rows="4"
                                class=input_class
                                placeholder="What would you like to build?"
                                prop:value=move || controller.with(|c| c.draft().message.clone())
                                on:input=move |ev| {
                                    controller.update(|c| {
                                        c.update_field(InquiryField::Message, event_target_value(&ev))
                                    })
                                }
                            ></textarea>
                        </div>
                    </div>

                    <div class="mt-5 flex items-center justify-between gap-3">
                        <button type="submit" disabled=is_loading class=submit_class>
                            {move || match status() {
                                SubmissionStatus::Loading => "Sending…",
                                SubmissionStatus::Success => "✓ Sent",
                                _ => "Send",
                            }}
                        </button>
                        <Show when=move || error_message().is_some()>
                            <div class="text-sm text-rose-600">
                                {move || error_message().unwrap_or_default()}
                            </div>
                        </Show>
                    </div>
                </form>
            </div>
        </div>
    }
}
