use yew::prelude::*;

use crate::components::animations::Reveal;

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub description: AttrValue,
    #[prop_or_default]
    pub features: Vec<AttrValue>,
    #[prop_or(0)]
    pub delay_ms: u32,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    html! {
        <Reveal delay_ms={props.delay_ms}>
            <div class="service-card">
                <div class="service-card-icon">{ &props.icon }</div>
                <h3>{ &props.title }</h3>
                <p>{ &props.description }</p>
                if !props.features.is_empty() {
                    <ul class="service-card-features">
                        { for props.features.iter().map(|feature| html! {
                            <li>{ feature }</li>
                        }) }
                    </ul>
                }
            </div>
        </Reveal>
    }
}
