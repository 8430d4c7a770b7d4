use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animations::{Reveal, RevealDirection, SectionHeading};
use crate::content;
use crate::Route;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <section class="page-hero services-hero">
                <div class="container">
                    <span class="section-badge">{"Our Services"}</span>
                    <h1>{"Comprehensive "}<span class="accent">{"Business Solutions"}</span></h1>
                    <p>
                        {"From e-commerce platforms to international logistics, we provide \
                          end-to-end services designed to help your business succeed."}
                    </p>
                </div>
            </section>

            <section class="service-details">
                <div class="container">
                    { for content::SERVICE_DETAILS.iter().enumerate().map(|(index, service)| {
                        let reversed = index % 2 == 1;
                        let text_direction = if reversed { RevealDirection::Right } else { RevealDirection::Left };
                        let panel_direction = if reversed { RevealDirection::Left } else { RevealDirection::Right };
                        html! {
                            <div
                                id={service.id}
                                class={classes!("service-detail", reversed.then_some("reversed"))}
                            >
                                <Reveal direction={text_direction}>
                                    <div class="service-detail-text">
                                        <span class="section-badge">
                                            { service.icon }
                                            { format!(" Service {} of {}", index + 1, content::SERVICE_DETAILS.len()) }
                                        </span>
                                        <h2>{ service.title }</h2>
                                        <p class="lead">{ service.description }</p>
                                        <div class="feature-grid">
                                            { for service.features.iter().map(|(icon, text)| html! {
                                                <div class="feature-chip">
                                                    <span>{ icon }</span>
                                                    <span>{ text }</span>
                                                </div>
                                            }) }
                                        </div>
                                        <Link<Route> to={Route::Contact} classes="cta-button secondary">
                                            {"Get Started ➜"}
                                        </Link<Route>>
                                    </div>
                                </Reveal>
                                <Reveal direction={panel_direction}>
                                    <div class="highlight-panel">
                                        <div class="highlight-icon">{ service.icon }</div>
                                        <h3>{"Key Highlights"}</h3>
                                        <ul>
                                            { for service.highlights.iter().map(|highlight| html! {
                                                <li>{"✔ "}{ highlight }</li>
                                            }) }
                                        </ul>
                                    </div>
                                </Reveal>
                            </div>
                        }
                    }) }
                </div>
            </section>

            <section class="process-section">
                <div class="container">
                    <SectionHeading
                        badge="How We Work"
                        title="Our Process"
                        description="A streamlined approach to delivering exceptional results"
                    />
                    <div class="card-grid">
                        { for content::PROCESS_STEPS.iter().enumerate().map(|(index, item)| html! {
                            <Reveal delay_ms={(index as u32) * 100}>
                                <div class="process-card">
                                    <span class="process-step">{ item.step }</span>
                                    <h4>{ item.title }</h4>
                                    <p>{ item.description }</p>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section class="cta-section">
                <div class="container">
                    <Reveal>
                        <h2>{"Ready to Get Started?"}</h2>
                        <p>
                            {"Contact us today to discuss how our services can help transform \
                              your business operations."}
                        </p>
                        <div class="hero-cta-group centered">
                            <Link<Route> to={Route::Contact} classes="cta-button primary">
                                {"Contact Us Now ➜"}
                            </Link<Route>>
                            <Link<Route> to={Route::About} classes="cta-button outline">
                                {"Learn About Us"}
                            </Link<Route>>
                        </div>
                    </Reveal>
                </div>
            </section>

            <style>
                {r#"
                .services-hero {
                    background: linear-gradient(135deg, #1b263b 0%, #0d1b2a 100%);
                }
                .service-details {
                    padding: 5rem 0;
                }
                .service-detail {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                    padding-bottom: 5rem;
                }
                .service-detail.reversed .service-detail-text {
                    order: 2;
                }
                .service-detail h2 {
                    margin: 0.75rem 0 1rem;
                }
                .feature-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                    margin: 1.5rem 0 2rem;
                }
                .feature-chip {
                    display: flex;
                    gap: 0.6rem;
                    align-items: flex-start;
                    background: #f3f4f6;
                    border-radius: 12px;
                    padding: 1rem;
                    font-size: 0.9rem;
                }
                .highlight-panel {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 24px;
                    padding: 2rem;
                }
                .highlight-icon {
                    width: 72px;
                    height: 72px;
                    border-radius: 16px;
                    background: rgba(212, 160, 23, 0.12);
                    font-size: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1.25rem;
                }
                .highlight-panel h3 {
                    margin-bottom: 1rem;
                }
                .highlight-panel ul {
                    list-style: none;
                    padding: 0;
                }
                .highlight-panel li {
                    color: #4b5563;
                    padding: 0.45rem 0;
                }
                .process-section {
                    background: #f3f4f6;
                    padding: 5rem 0;
                }
                .process-card {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 16px;
                    padding: 1.5rem;
                    height: 100%;
                    position: relative;
                    overflow: hidden;
                }
                .process-step {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 40px;
                    height: 40px;
                    border-radius: 12px;
                    background: #d4a017;
                    color: #0d1b2a;
                    font-weight: 700;
                    font-size: 0.85rem;
                    margin-bottom: 1rem;
                }
                .process-card h4 {
                    margin-bottom: 0.5rem;
                }
                .process-card p {
                    color: #6b7280;
                    font-size: 0.9rem;
                }
                @media (max-width: 900px) {
                    .service-detail {
                        grid-template-columns: 1fr;
                    }
                    .service-detail.reversed .service-detail-text {
                        order: 0;
                    }
                    .feature-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
