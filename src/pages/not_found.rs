use log::error;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let location = use_location();

    {
        let path = location.map(|l| l.path().to_string()).unwrap_or_default();
        use_effect_with_deps(
            move |path| {
                error!("404: attempted to access non-existent route: {path}");
                || ()
            },
            path,
        );
    }

    html! {
        <section class="not-found">
            <div class="container">
                <span class="not-found-code">{"404"}</span>
                <h1>{"Page Not Found"}</h1>
                <p>{"Sorry, the page you're looking for doesn't exist or has been moved."}</p>
                <div class="hero-cta-group centered">
                    <Link<Route> to={Route::Home} classes="cta-button primary">
                        {"🏠 Back to Home"}
                    </Link<Route>>
                    <Link<Route> to={Route::Contact} classes="cta-button outline">
                        {"Contact Support"}
                    </Link<Route>>
                </div>
            </div>

            <style>
                {r#"
                .not-found {
                    min-height: 80vh;
                    display: flex;
                    align-items: center;
                    text-align: center;
                    background: linear-gradient(135deg, #0d1b2a 0%, #1b263b 100%);
                    color: #fff;
                }
                .not-found-code {
                    font-size: clamp(6rem, 20vw, 11rem);
                    font-weight: 800;
                    color: #d4a017;
                    line-height: 1;
                }
                .not-found h1 {
                    margin: 0.5rem 0 1rem;
                }
                .not-found p {
                    color: rgba(255, 255, 255, 0.7);
                    margin-bottom: 2rem;
                }
                "#}
            </style>
        </section>
    }
}
