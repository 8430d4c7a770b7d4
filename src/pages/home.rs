use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animations::{
    AnimatedCounter, HeadingAlign, Reveal, RevealDirection, SectionHeading,
};
use crate::components::service_card::ServiceCard;
use crate::content;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <a
                href={content::whatsapp_url()}
                target="_blank"
                rel="noopener noreferrer"
                class="whatsapp-fab"
                aria-label="Contact us on WhatsApp"
            >
                {"💬"}
            </a>

            <section class="home-hero">
                <div class="container">
                    <span class="section-badge">{"Welcome to MMM Worldwide"}</span>
                    <h1>
                        {"Connecting Commerce"}<br />
                        <span class="accent">{"& Logistics"}</span>{" Through"}<br />
                        {"Technology"}
                    </h1>
                    <p>
                        {"Your trusted partner for innovative e-commerce and fulfilment solutions. \
                          We bridge the gap between businesses and customers with reliable, \
                          technology-driven services across Nigeria and beyond."}
                    </p>
                    <div class="hero-cta-group">
                        <Link<Route> to={Route::Services} classes="cta-button primary">
                            {"Our Services ➜"}
                        </Link<Route>>
                        <Link<Route> to={Route::Contact} classes="cta-button outline">
                            {"Partner With Us"}
                        </Link<Route>>
                        <a
                            href={content::whatsapp_url()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="cta-button whatsapp"
                        >
                            {"💬 WhatsApp Us"}
                        </a>
                    </div>
                </div>
            </section>

            <section class="stats-band">
                <div class="container stats-grid">
                    { for content::STATS.iter().enumerate().map(|(index, stat)| html! {
                        <Reveal delay_ms={(index as u32) * 100}>
                            <div class="stat">
                                <AnimatedCounter value={stat.value} suffix={stat.suffix} />
                                <p>{ stat.label }</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="about-preview">
                <div class="container split-grid">
                    <Reveal direction={RevealDirection::Left}>
                        <div class="brand-panel">
                            <div class="brand-mark">{"M"}</div>
                            <h3>{"MMM Worldwide"}</h3>
                            <p>{"Wish-Fulfilment Limited"}</p>
                        </div>
                    </Reveal>
                    <Reveal direction={RevealDirection::Right}>
                        <span class="section-badge">{"About Us"}</span>
                        <h2>
                            {"Building the Future of "}
                            <span class="accent">{"Commerce in Africa"}</span>
                        </h2>
                        <p class="lead">
                            {"MMM Worldwide Wish-Fulfilment Limited is an innovative e-commerce and \
                              logistics company incorporated under the Companies and Allied Matters \
                              Act (CAMA), 2020 of the Federal Republic of Nigeria."}
                        </p>
                        <p>
                            {"We operate across the full spectrum of modern commerce, from e-commerce \
                              and online retail to logistics, importation, exportation, and \
                              distribution services. Our commitment to legal compliance and global \
                              best practices sets us apart in the Nigerian market."}
                        </p>
                        <div class="tag-row">
                            { for ["Legally Compliant", "Technology-First", "Customer-Centric"]
                                .iter()
                                .map(|tag| html! { <span class="pill">{"✔ "}{ tag }</span> }) }
                        </div>
                        <Link<Route> to={Route::About} classes="cta-button secondary">
                            {"Learn More About Us ➜"}
                        </Link<Route>>
                    </Reveal>
                </div>
            </section>

            <section class="services-preview">
                <div class="container">
                    <SectionHeading
                        badge="Our Services"
                        title="Comprehensive Solutions for Your Business"
                        description="From e-commerce platforms to last-mile delivery, we provide end-to-end services designed to help your business thrive."
                    />
                    <div class="card-grid">
                        { for content::SERVICES.iter().enumerate().map(|(index, service)| html! {
                            <ServiceCard
                                icon={service.icon}
                                title={service.title}
                                description={service.description}
                                delay_ms={(index as u32) * 100}
                            />
                        }) }
                    </div>
                    <Reveal class="centered-cta">
                        <Link<Route> to={Route::Services} classes="cta-button secondary">
                            {"View All Services ➜"}
                        </Link<Route>>
                    </Reveal>
                </div>
            </section>

            <section class="why-us">
                <div class="container split-grid">
                    <div>
                        <SectionHeading
                            badge="Why Choose Us"
                            title="Your Trusted Partner for Growth"
                            description="We combine technology, expertise, and dedication to deliver exceptional results for our clients."
                            align={HeadingAlign::Left}
                        />
                        <div class="why-grid">
                            { for content::WHY_CHOOSE_US.iter().enumerate().map(|(index, item)| html! {
                                <Reveal delay_ms={(index as u32) * 100}>
                                    <div class="why-item">
                                        <div class="why-icon">{ item.icon }</div>
                                        <div>
                                            <h4>{ item.title }</h4>
                                            <p>{ item.description }</p>
                                        </div>
                                    </div>
                                </Reveal>
                            }) }
                        </div>
                    </div>
                    <Reveal direction={RevealDirection::Right}>
                        <div class="mission-panel">
                            <h3>{"Our Mission"}</h3>
                            <p>
                                {"To provide reliable, efficient, and technology-driven solutions that \
                                  empower businesses and satisfy customers across Nigeria and beyond."}
                            </p>
                            <div class="mission-divider"></div>
                            <h4>{"Our Vision"}</h4>
                            <p>
                                {"To be the leading e-commerce and fulfilment company in Nigeria, \
                                  setting the standard for excellence in commerce and logistics."}
                            </p>
                        </div>
                    </Reveal>
                </div>
            </section>

            <section class="cta-section">
                <div class="container">
                    <Reveal>
                        <h2>{"Ready to Transform Your Business?"}</h2>
                        <p>
                            {"Partner with MMM Worldwide and experience the future of e-commerce and \
                              logistics. Let's build something great together."}
                        </p>
                        <div class="hero-cta-group centered">
                            <Link<Route> to={Route::Contact} classes="cta-button primary">
                                {"Get Started Today ➜"}
                            </Link<Route>>
                            <Link<Route> to={Route::Services} classes="cta-button outline">
                                {"Explore Our Services"}
                            </Link<Route>>
                        </div>
                    </Reveal>
                </div>
            </section>

            <style>
                {r#"
                .home-hero {
                    min-height: 92vh;
                    display: flex;
                    align-items: center;
                    background: linear-gradient(135deg, #0d1b2a 0%, #1b263b 60%, #24344d 100%);
                    color: #fff;
                    padding: 8rem 0 4rem;
                }
                .home-hero h1 {
                    font-size: clamp(2.4rem, 6vw, 4.2rem);
                    line-height: 1.15;
                    margin: 1.25rem 0;
                }
                .home-hero p {
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 1.15rem;
                    max-width: 640px;
                    margin-bottom: 2rem;
                }
                .whatsapp-fab {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 60;
                    width: 56px;
                    height: 56px;
                    border-radius: 50%;
                    background: #25D366;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.6rem;
                    text-decoration: none;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);
                    transition: transform 0.2s ease;
                }
                .whatsapp-fab:hover {
                    transform: scale(1.1);
                }
                .stats-band {
                    background: #0d1b2a;
                    padding: 3.5rem 0;
                }
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
                    gap: 2rem;
                    text-align: center;
                }
                .stat .stat-number {
                    font-size: 2.6rem;
                    font-weight: 800;
                    color: #d4a017;
                }
                .stat p {
                    color: rgba(255, 255, 255, 0.7);
                    margin-top: 0.5rem;
                }
                .about-preview, .services-preview, .why-us {
                    padding: 5rem 0;
                }
                .services-preview {
                    background: #f3f4f6;
                }
                .brand-panel {
                    background: linear-gradient(135deg, #0d1b2a 0%, #24344d 100%);
                    border-radius: 24px;
                    color: #fff;
                    text-align: center;
                    padding: 5rem 2rem;
                }
                .brand-mark {
                    width: 90px;
                    height: 90px;
                    margin: 0 auto 1.5rem;
                    border-radius: 20px;
                    background: rgba(212, 160, 23, 0.2);
                    color: #d4a017;
                    font-size: 3rem;
                    font-weight: 800;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .lead {
                    font-size: 1.1rem;
                }
                .tag-row {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin: 1.5rem 0 2rem;
                }
                .why-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .why-item {
                    display: flex;
                    gap: 1rem;
                }
                .why-icon {
                    font-size: 1.5rem;
                }
                .why-item h4 {
                    margin-bottom: 0.25rem;
                }
                .why-item p {
                    color: #6b7280;
                    font-size: 0.9rem;
                }
                .mission-panel {
                    background: #0d1b2a;
                    color: #fff;
                    border-radius: 24px;
                    padding: 2.5rem;
                }
                .mission-panel p {
                    color: rgba(255, 255, 255, 0.75);
                    margin-top: 0.75rem;
                }
                .mission-divider {
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                    margin: 2rem 0 1.5rem;
                }
                .centered-cta {
                    text-align: center;
                    margin-top: 3rem;
                }
                @media (max-width: 768px) {
                    .why-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
