//! Site footer

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative z-10 border-t border-black/5 bg-white/60 py-6 backdrop-blur">
            <div class="mx-auto flex max-w-6xl flex-col items-center justify-between gap-3 px-6 sm:flex-row">
                <div class="flex items-center gap-2 text-sm text-slate-600">
                    <span>"☁️"</span>
                    <span>"MeghamSys • Cloud Systems"</span>
                </div>
                <div class="text-sm text-slate-600">"Built with Rust, Leptos, and Tailwind"</div>
            </div>
        </footer>
    }
}
