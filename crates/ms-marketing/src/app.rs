//! Main application component

use leptos::*;
use leptos_router::*;
use ms_core::Theme;

use crate::components::*;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    let theme = create_rw_signal(Theme::default());
    provide_context(theme);

    let shell_class = move || {
        format!(
            "min-h-screen bg-gradient-to-br {} text-slate-800",
            theme.get().tokens().bg
        )
    };

    view! {
        <Router>
            <div class=shell_class>
                <SiteNav/>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/about" view=AboutPage/>
                        <Route path="/products" view=ProductsPage/>
                        <Route path="/solutions" view=SolutionsPage/>
                        <Route path="/contact" view=ContactPage/>
                        <Route path="/health" view=HealthPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}

/// Theme signal provided by [`App`].
pub fn use_theme() -> RwSignal<Theme> {
    expect_context::<RwSignal<Theme>>()
}
