//! Main application component

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use procure_core::SiteContent;
use crate::components::*;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let content = SiteContent::shared();

    view! {
        <Stylesheet id="leptos" href="/pkg/procure-marketing.css"/>
        <Title text="Procure AI | The Future of MRO Procurement"/>
        <Router>
            <div class="min-h-screen bg-[#020617] text-slate-100 selection:bg-blue-500/30 selection:text-blue-100">
                <Navbar/>
                <main>
                    <Routes>
                        <Route path="/" view=LandingPage/>
                    </Routes>
                </main>
                <Footer footer=&content.footer/>
            </div>
        </Router>
    }
}
