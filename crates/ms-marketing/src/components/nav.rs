//! Site navigation component

use leptos::*;

use crate::app::use_theme;
use crate::components::ThemePicker;

#[component]
pub fn SiteNav() -> impl IntoView {
    let theme = use_theme();
    let (mobile_open, set_mobile_open) = create_signal(false);

    let brand_class = move || {
        format!(
            "inline-flex items-center gap-2 rounded-lg bg-white/80 px-2 py-1 shadow {}",
            theme.get().tokens().card
        )
    };

    view! {
        <header class="relative z-10">
            <div class="mx-auto flex max-w-6xl items-center justify-between px-6 py-5">
                // Logo
                <a href="/" class="flex items-center gap-2 font-semibold tracking-tight">
                    <span class=brand_class>
                        <span class="text-2xl">"☁️"</span>
                        <span class="hidden sm:inline">"MeghamSys"</span>
                    </span>
                </a>

                // Desktop Nav
                <nav class="hidden md:flex items-center gap-4 text-sm">
                    <a href="/" class="text-slate-700 hover:text-slate-900 transition">"Home"</a>
                    <a href="/about" class="text-slate-700 hover:text-slate-900 transition">"About Us"</a>
                    <a href="/products" class="text-slate-700 hover:text-slate-900 transition">"Products"</a>
                    <a href="/solutions" class="text-slate-700 hover:text-slate-900 transition">"Solutions"</a>
                    <a href="/contact" class="text-slate-700 hover:text-slate-900 transition">"Contact Us"</a>
                </nav>

                <div class="hidden md:flex items-center gap-2">
                    <ThemePicker/>
                    <a
                        href="/health"
                        class="rounded-md border border-black/5 bg-white/70 px-3 py-2 text-sm font-medium shadow-sm backdrop-blur hover:bg-white/90"
                    >
                        "Check backend"
                    </a>
                </div>

                // Mobile menu button
                <div class="md:hidden flex items-center">
                    <button
                        class="p-2 rounded-md text-slate-700 hover:text-slate-900 hover:bg-white/70"
                        on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                    >
                        <Show
                            when=move || mobile_open.get()
                            fallback=|| view! {
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                </svg>
                            }
                        >
                            <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                            </svg>
                        </Show>
                    </button>
                </div>
            </div>

            // Mobile menu
            <Show when=move || mobile_open.get()>
                <div class="md:hidden border-t border-black/5 bg-white/80 backdrop-blur">
                    <div class="px-6 py-4 space-y-3">
                        <a href="/" class="block text-slate-700 hover:text-slate-900">"Home"</a>
                        <a href="/about" class="block text-slate-700 hover:text-slate-900">"About Us"</a>
                        <a href="/products" class="block text-slate-700 hover:text-slate-900">"Products"</a>
                        <a href="/solutions" class="block text-slate-700 hover:text-slate-900">"Solutions"</a>
                        <a href="/contact" class="block text-slate-700 hover:text-slate-900">"Contact Us"</a>
                        <div class="pt-4 border-t border-black/5 space-y-3">
                            <ThemePicker/>
                            <a href="/health" class="block text-slate-700 hover:text-slate-900">"Check backend"</a>
                        </div>
                    </div>
                </div>
            </Show>
        </header>
    }
}
