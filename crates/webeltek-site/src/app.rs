//! Main application component

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::*;
use crate::content::COMPANY;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/webeltek-site.css"/>
        <Title text=format!("{COMPANY} | IT Talent, Payroll & Consulting")/>
        <Meta
            name="description"
            content="IT talent acquisition, payroll management, and enterprise consulting across telecom, healthcare, data center, data science, cybersecurity, cloud, and SAP."
        />

        <Router fallback=|| view! { <NotFound/> }.into_view()>
            <div class="min-h-screen bg-white text-blue-900">
                <SiteNav/>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
