//! Card components for marketing pages

use leptos::*;

use crate::app::use_theme;

#[component]
pub fn ServiceCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    let theme = use_theme();
    let card_class = move || {
        format!(
            "rounded-xl border border-black/5 bg-white/70 p-5 shadow-sm backdrop-blur transition-all {}",
            theme.get().tokens().card
        )
    };

    view! {
        <div class=card_class>
            <div class="text-2xl">{icon}</div>
            <div class="mt-2 font-semibold">{title}</div>
            <div class="text-sm text-slate-600">{description}</div>
        </div>
    }
}

#[component]
pub fn IndustryCard(
    icon: &'static str,
    title: &'static str,
    bullets: Vec<&'static str>,
) -> impl IntoView {
    let theme = use_theme();
    let card_class = move || {
        format!(
            "rounded-2xl border border-black/5 bg-white/70 p-6 shadow-sm backdrop-blur {}",
            theme.get().tokens().card
        )
    };

    view! {
        <div class=card_class>
            <div class="flex items-center gap-3">
                <span class="text-2xl">{icon}</span>
                <div class="font-semibold">{title}</div>
            </div>
            <ul class="mt-3 space-y-1 text-sm text-slate-600">
                {bullets.into_iter().map(|bullet| view! {
                    <li>"• " {bullet}</li>
                }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn IllustrationCard(
    title: &'static str,
    description: &'static str,
    children: Children,
) -> impl IntoView {
    let theme = use_theme();
    let card_class = move || {
        format!(
            "rounded-2xl border border-black/5 bg-white/80 p-5 shadow-sm backdrop-blur {}",
            theme.get().tokens().card
        )
    };

    view! {
        <div class=card_class>
            <div class="aspect-[4/3] overflow-hidden rounded-xl bg-gradient-to-br from-white to-white/60">
                {children()}
            </div>
            <div class="mt-3 font-semibold">{title}</div>
            <div class="text-sm text-slate-600">{description}</div>
        </div>
    }
}

/// Shared layout for the static informational pages.
#[component]
pub fn PageSection(
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="relative z-10 mx-auto max-w-6xl px-6 py-12">
            <h1 class="text-3xl font-bold">{title}</h1>
            <p class="mt-2 text-slate-600">{subtitle}</p>
            <div class="mt-6">{children()}</div>
        </div>
    }
}
