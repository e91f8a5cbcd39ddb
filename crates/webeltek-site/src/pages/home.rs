//! Home page
//!
//! The whole site is this one page; the navigation scrolls between its
//! sections by anchor.

use leptos::*;

use crate::components::*;
use crate::content::{
    COMPANY, FAQ, HERO_VIDEO_SRC, HIGHLIGHTS, INDUSTRIES, INDUSTRY_TAGLINE, PAYROLL, SERVICES,
};

const SECTION_CLASS: &str = "mx-auto max-w-7xl px-4 py-16 sm:px-6 lg:px-8";
const HEADING_CLASS: &str = "text-3xl font-semibold tracking-tight sm:text-4xl";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            <HeroSection/>
            <AboutSection/>
            <WhyChooseUs/>
            <ServicesSection/>
            <IndustriesSection/>
            <FaqSection/>
            <ContactSection/>
            <ScrollRevealScript/>
        </div>
    }
}

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section id="home" class="relative overflow-hidden h-screen flex items-center justify-center bg-black">
            // Background video
            <video
                autoplay
                loop
                muted
                playsinline
                preload="auto"
                class="absolute inset-0 w-full h-full object-cover z-0"
            >
                <source src=HERO_VIDEO_SRC type="video/mp4"/>
                "Your browser does not support the video tag."
            </video>
            <div class="absolute inset-0 bg-blue-950/40 -z-10"></div>

            <div class="relative z-10 mx-auto max-w-4xl px-4 text-center text-white">
                <Reveal step=0>
                    <h1 class="text-5xl font-semibold leading-tight text-[#f8cb19]">
                        "Empowering Digital Growth With "
                        <span class="text-blue-300">{COMPANY}</span>
                    </h1>
                </Reveal>
                <Reveal step=1>
                    <p class="mt-4 text-lg text-blue-100">
                        "IT talent acquisition, payroll management, and enterprise consulting—built for the future."
                    </p>
                </Reveal>
                <Reveal class="mt-8 flex items-center justify-center gap-4" step=2>
                    <a
                        href="#services"
                        class="rounded-xl bg-[#0a1d56] px-5 py-3 text-sm font-medium text-[#f8cb19] shadow-glow hover:bg-[#142b70] transition"
                    >
                        "Explore Services"
                    </a>
                    <a
                        href="#contact"
                        class="rounded-xl border border-white/60 bg-white/10 hover:bg-white/20 px-6 py-3 text-white font-medium backdrop-blur"
                    >
                        "Talk to Us"
                    </a>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class=SECTION_CLASS>
            <Reveal class="max-w-3xl">
                <h2 class=HEADING_CLASS>"About Webeltek"</h2>
                <p class="mt-4 text-blue-900/80">
                    "Since 2021, Webeltek has helped fast-growing organizations scale their engineering and IT operations. "
                    "We blend rigorous recruiting with domain-specific screening to place the right talent—then back it with "
                    "compliant, on-time payroll and white-glove support. Our consultants deliver across telecom, healthcare, "
                    "data center, data science/ML, cybersecurity, cloud, and SAP."
                </p>
                <p class="mt-3 text-blue-900/80">
                    "Whether you’re building a new product team, migrating to cloud, or tightening security, we align to your "
                    "roadmap and deliver results without the noise."
                </p>
            </Reveal>
        </section>
    }
}

#[component]
pub fn WhyChooseUs() -> impl IntoView {
    view! {
        <section class="mx-auto max-w-7xl px-4 pb-8 sm:px-6 lg:px-8">
            <h3 class="text-2xl font-semibold">"Why Choose Us"</h3>
            <div class="mt-6 grid gap-6 sm:grid-cols-2 lg:grid-cols-4">
                {HIGHLIGHTS.iter().enumerate().map(|(index, highlight)| view! {
                    <HighlightCard highlight=*highlight index=index/>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
pub fn ServicesSection() -> impl IntoView {
    view! {
        <section id="services" class=SECTION_CLASS>
            <Reveal class="mx-auto max-w-2xl text-center">
                <h2 class=HEADING_CLASS>"Services"</h2>
                <p class="mt-3 text-blue-900/80">
                    "From sourcing exceptional IT talent to effortless payroll and enterprise delivery."
                </p>
            </Reveal>

            // Talent & Consulting
            <div class="mt-10 grid gap-6 md:grid-cols-3">
                {SERVICES.iter().map(|service| view! {
                    <ServiceCard service=*service/>
                }).collect::<Vec<_>>()}
            </div>

            // Payroll
            <Reveal class="mx-auto max-w-2xl text-center mt-16">
                <h3 class="text-2xl font-semibold">"Payroll Management"</h3>
                <p class="mt-2 text-blue-900/80">"Tailored, efficient, and compliant payroll that scales with you."</p>
            </Reveal>
            <div class="mt-8 grid gap-6 md:grid-cols-3">
                {PAYROLL.iter().map(|offering| view! {
                    <PayrollCard offering=*offering/>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
pub fn IndustriesSection() -> impl IntoView {
    view! {
        <section id="industries" class="relative border-y border-blue-100 bg-blue-50/40">
            <div class=SECTION_CLASS>
                <Reveal class="mx-auto max-w-2xl text-center">
                    <h2 class=HEADING_CLASS>"Industries We Serve"</h2>
                    <p class="mt-3 text-blue-900/80">{INDUSTRY_TAGLINE.join(" • ")}</p>
                </Reveal>
                <div class="mt-8 grid gap-6 sm:grid-cols-2 md:grid-cols-3">
                    {INDUSTRIES.iter().map(|industry| view! {
                        <IndustryCard industry=*industry/>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class=SECTION_CLASS>
            <Reveal class="mx-auto max-w-3xl">
                <h2 class=format!("{HEADING_CLASS} text-center")>"Frequently Asked Questions"</h2>
                <div class="mt-8 space-y-4">
                    {FAQ.iter().map(|entry| view! {
                        <FaqItem entry=*entry/>
                    }).collect::<Vec<_>>()}
                </div>
            </Reveal>
        </section>
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="relative border-y border-blue-100 bg-blue-50/40">
            <div class=SECTION_CLASS>
                <Reveal class="mx-auto max-w-2xl text-center">
                    <h2 class=HEADING_CLASS>"Let’s Talk"</h2>
                    <p class="mt-3 text-blue-900/80">
                        "Share your requirements—our team replies within one business day."
                    </p>
                </Reveal>
                <ContactForm/>
            </div>
        </section>
    }
}
