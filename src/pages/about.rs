use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animations::{HeadingAlign, Reveal, RevealDirection, SectionHeading};
use crate::content;
use crate::Route;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="page-hero about-hero">
                <div class="container">
                    <span class="section-badge">{"About Us"}</span>
                    <h1>{"Pioneering the Future of "}<span class="accent">{"Commerce"}</span></h1>
                    <p>
                        {"Learn about our journey, mission, and commitment to transforming \
                          e-commerce and logistics in Nigeria."}
                    </p>
                </div>
            </section>

            <section class="company-overview">
                <div class="container split-grid">
                    <Reveal direction={RevealDirection::Left}>
                        <SectionHeading
                            badge="Who We Are"
                            title="A Company Built on Excellence"
                            align={HeadingAlign::Left}
                        />
                        <p class="lead">
                            {"MMM Worldwide Wish-Fulfilment Limited is an innovative e-commerce and \
                              logistics company duly incorporated under the Companies and Allied \
                              Matters Act (CAMA), 2020 of the Federal Republic of Nigeria."}
                        </p>
                        <p>
                            {"We operate across the full spectrum of modern commerce, including \
                              e-commerce, online retail services, logistics and delivery, importation \
                              and exportation, agency and distribution services, and ancillary support \
                              services."}
                        </p>
                        <p>
                            {"Our company is built on a foundation of legal compliance, transparency, \
                              and adherence to global best practices. We believe that sustainable \
                              business growth comes from operating within the framework of Nigerian \
                              laws while meeting international standards."}
                        </p>
                        <div class="badge-grid">
                            { for [
                                ("🏢", "Registered under CAMA 2020"),
                                ("⚖️", "Nigerian Law Compliant"),
                                ("🌍", "Global Best Practices"),
                                ("🏆", "Quality Certified"),
                            ].iter().map(|(icon, label)| html! {
                                <div class="compliance-badge">
                                    <span>{ icon }</span>
                                    <span>{ label }</span>
                                </div>
                            }) }
                        </div>
                    </Reveal>
                    <Reveal direction={RevealDirection::Right}>
                        <div class="brand-panel">
                            <div class="brand-mark">{"M"}</div>
                            <h3>{"MMM Worldwide"}</h3>
                            <p>{"Wish-Fulfilment Limited"}</p>
                            <small>{"Est. 2020 | Lagos, Nigeria"}</small>
                        </div>
                    </Reveal>
                </div>
            </section>

            <section id="mission" class="mission-vision">
                <div class="container">
                    <SectionHeading
                        badge="Our Purpose"
                        title="Mission & Vision"
                        description="Guiding principles that drive our commitment to excellence"
                    />
                    <div class="mv-grid">
                        <Reveal>
                            <div class="mv-card">
                                <div class="mv-icon">{"🎯"}</div>
                                <h3>{"Our Mission"}</h3>
                                <p>
                                    {"To provide reliable, efficient, and technology-driven solutions \
                                      that empower businesses and satisfy customers. We aim to bridge \
                                      the gap between commerce and logistics, creating seamless \
                                      experiences for businesses and consumers across Nigeria and \
                                      beyond."}
                                </p>
                                <ul>
                                    { for [
                                        "Deliver exceptional service quality",
                                        "Leverage technology for efficiency",
                                        "Build lasting customer relationships",
                                        "Support business growth nationwide",
                                    ].iter().map(|item| html! { <li>{"✔ "}{ item }</li> }) }
                                </ul>
                            </div>
                        </Reveal>
                        <Reveal delay_ms={100}>
                            <div class="mv-card dark">
                                <div class="mv-icon">{"👁️"}</div>
                                <h3>{"Our Vision"}</h3>
                                <p>
                                    {"To be the leading e-commerce and fulfilment company in Nigeria, \
                                      setting the standard for excellence in commerce and logistics. \
                                      We envision a future where every business, regardless of size, \
                                      has access to world-class logistics and e-commerce solutions."}
                                </p>
                                <ul>
                                    { for [
                                        "Lead the industry in innovation",
                                        "Expand across Africa and globally",
                                        "Set new standards for service excellence",
                                        "Empower millions of businesses",
                                    ].iter().map(|item| html! { <li>{"✔ "}{ item }</li> }) }
                                </ul>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </section>

            <section class="leadership">
                <div class="container split-grid">
                    <Reveal direction={RevealDirection::Left}>
                        <div class="ceo-portrait">
                            <img src="/assets/ceo_mmm.jpg" alt="CEO of MMM Worldwide" />
                        </div>
                    </Reveal>
                    <Reveal direction={RevealDirection::Right}>
                        <span class="section-badge">{"Leadership"}</span>
                        <h2>{"Meet Our "}<span class="accent">{"CEO"}</span></h2>
                        <blockquote class="ceo-quote">
                            {"\"At MMM Worldwide, we believe that everyone deserves access to \
                              financial freedom. Our mission is to bridge the gap between aspirations \
                              and achievements through innovative credit solutions and exceptional \
                              service.\""}
                        </blockquote>
                        <p>
                            {"Under visionary leadership, MMM Worldwide has grown from a startup to a \
                              trusted name in e-commerce, logistics, and financial services across \
                              Nigeria. Our commitment to excellence, transparency, and customer \
                              satisfaction drives everything we do."}
                        </p>
                        <div class="tag-row">
                            { for ["Visionary Leadership", "Customer-First Approach", "Innovation Driven"]
                                .iter()
                                .map(|tag| html! { <span class="pill">{"✔ "}{ tag }</span> }) }
                        </div>
                    </Reveal>
                </div>
            </section>

            <section class="core-values">
                <div class="container">
                    <SectionHeading
                        badge="What We Believe"
                        title="Our Core Values"
                        description="The principles that guide our actions and decisions every day"
                    />
                    <div class="card-grid">
                        { for content::CORE_VALUES.iter().enumerate().map(|(index, value)| html! {
                            <Reveal delay_ms={(index as u32) * 100}>
                                <div class="value-card">
                                    <div class="value-icon">{ value.icon }</div>
                                    <h4>{ value.title }</h4>
                                    <p>{ value.description }</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="timeline-section">
                <div class="container">
                    <SectionHeading
                        badge="Our Journey"
                        title="Milestones & Achievements"
                        description="Key moments in our growth and development"
                    />
                    <div class="timeline">
                        { for content::MILESTONES.iter().enumerate().map(|(index, milestone)| {
                            let last = index == content::MILESTONES.len() - 1;
                            html! {
                                <Reveal delay_ms={(index as u32) * 150}>
                                    <div class="timeline-entry">
                                        <div class="timeline-rail">
                                            <div class="timeline-year">
                                                { milestone.year.get(2..).unwrap_or(milestone.year) }
                                            </div>
                                            if !last {
                                                <div class="timeline-line"></div>
                                            }
                                        </div>
                                        <div class="timeline-body">
                                            <span class="timeline-label">{ milestone.year }</span>
                                            <h4>{ milestone.title }</h4>
                                            <p>{ milestone.description }</p>
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        }) }
                    </div>
                </div>
            </section>

            <section class="cta-section">
                <div class="container">
                    <Reveal>
                        <h2>{"Ready to Work With Us?"}</h2>
                        <p>
                            {"Join the growing number of businesses that trust MMM Worldwide for \
                              their e-commerce and logistics needs."}
                        </p>
                        <div class="hero-cta-group centered">
                            <Link<Route> to={Route::Contact} classes="cta-button primary">
                                {"Contact Us Today ➜"}
                            </Link<Route>>
                            <Link<Route> to={Route::Services} classes="cta-button outline">
                                {"View Our Services"}
                            </Link<Route>>
                        </div>
                    </Reveal>
                </div>
            </section>

            <style>
                {r#"
                .about-hero {
                    background: linear-gradient(135deg, #101826 0%, #1b263b 100%);
                }
                .company-overview, .leadership, .core-values {
                    padding: 5rem 0;
                }
                .badge-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    margin-top: 2rem;
                }
                .compliance-badge {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    background: #f3f4f6;
                    border-radius: 12px;
                    padding: 0.9rem 1rem;
                    font-size: 0.9rem;
                    font-weight: 500;
                }
                .brand-panel small {
                    display: block;
                    margin-top: 1rem;
                    color: rgba(255, 255, 255, 0.5);
                }
                .mission-vision {
                    background: #f3f4f6;
                    padding: 5rem 0;
                }
                .mv-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
                .mv-card {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 24px;
                    padding: 2.5rem;
                    height: 100%;
                }
                .mv-card.dark {
                    background: #0d1b2a;
                    border: none;
                    color: #fff;
                }
                .mv-card.dark p, .mv-card.dark li {
                    color: rgba(255, 255, 255, 0.75);
                }
                .mv-icon {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }
                .mv-card h3 {
                    margin-bottom: 1rem;
                }
                .mv-card p {
                    color: #4b5563;
                    line-height: 1.7;
                }
                .mv-card ul {
                    list-style: none;
                    margin-top: 1.5rem;
                    padding: 0;
                }
                .mv-card li {
                    color: #4b5563;
                    padding: 0.35rem 0;
                }
                .ceo-portrait img {
                    width: 100%;
                    border-radius: 24px;
                    object-fit: cover;
                }
                .ceo-quote {
                    background: #f3f4f6;
                    border-radius: 16px;
                    padding: 1.5rem;
                    font-style: italic;
                    color: #4b5563;
                    margin: 1.5rem 0;
                    line-height: 1.7;
                }
                .value-card {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 16px;
                    padding: 1.5rem;
                    height: 100%;
                    transition: border-color 0.2s ease;
                }
                .value-card:hover {
                    border-color: rgba(212, 160, 23, 0.4);
                }
                .value-icon {
                    font-size: 1.8rem;
                    margin-bottom: 0.75rem;
                }
                .value-card h4 {
                    margin-bottom: 0.5rem;
                }
                .value-card p {
                    color: #6b7280;
                    font-size: 0.9rem;
                }
                .timeline-section {
                    background: #f3f4f6;
                    padding: 5rem 0;
                }
                .timeline {
                    max-width: 760px;
                    margin: 0 auto;
                }
                .timeline-entry {
                    display: flex;
                    gap: 1.5rem;
                    padding-bottom: 2.5rem;
                }
                .timeline-rail {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .timeline-year {
                    width: 56px;
                    height: 56px;
                    border-radius: 16px;
                    background: #d4a017;
                    color: #0d1b2a;
                    font-weight: 800;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                }
                .timeline-line {
                    width: 2px;
                    flex: 1;
                    background: #d1d5db;
                    margin-top: 0.75rem;
                }
                .timeline-label {
                    color: #b8860b;
                    font-size: 0.85rem;
                    font-weight: 600;
                }
                .timeline-body h4 {
                    margin: 0.25rem 0 0.5rem;
                }
                .timeline-body p {
                    color: #6b7280;
                }
                @media (max-width: 768px) {
                    .mv-grid, .badge-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
