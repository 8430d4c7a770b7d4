use chrono::Datelike;
use yew::prelude::*;

use crate::content;

fn link_column(title: &str, links: &'static [content::FooterLink]) -> Html {
    html! {
        <div class="footer-column">
            <h4>{ title }</h4>
            <ul>
                { for links.iter().map(|link| html! {
                    <li><a href={link.href}>{ link.name }</a></li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-main">
                <div class="footer-brand">
                    <a href="/" class="footer-logo">
                        <span class="logo-mark">{"M"}</span>
                        <span class="logo-text">
                            <span>{"MMM Worldwide"}</span>
                            <small>{"Wish-Fulfilment Limited"}</small>
                        </span>
                    </a>
                    <p>
                        {"Connecting commerce and logistics through technology. Your trusted \
                          partner for e-commerce and fulfilment solutions in Nigeria and beyond."}
                    </p>
                    <div class="footer-social">
                        { for content::SOCIAL_LINKS.iter().map(|social| html! {
                            <a href={social.href} aria-label={social.name}>
                                { social.name.chars().next().map(String::from).unwrap_or_default() }
                            </a>
                        }) }
                    </div>
                </div>
                { link_column("Company", content::FOOTER_COMPANY_LINKS) }
                { link_column("Services", content::FOOTER_SERVICE_LINKS) }
                <div class="footer-column">
                    <h4>{"Contact Us"}</h4>
                    <ul class="footer-contact">
                        <li>{"📍 Lagos, Nigeria"}</li>
                        <li><a href="tel:+2348038592620">{"📞 +234 803 859 2620"}</a></li>
                        <li><a href="mailto:info@mmmworldwide.com">{"✉️ info@mmmworldwide.com"}</a></li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{ format!("© {year} MMM Worldwide Wish-Fulfilment Limited. All rights reserved.") }</p>
                <div class="footer-legal">
                    { for content::FOOTER_LEGAL_LINKS.iter().map(|link| html! {
                        <a href={link.href}>{ link.name }</a>
                    }) }
                </div>
            </div>
        </footer>
    }
}
