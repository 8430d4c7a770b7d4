use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

/// Flips a state handle to `true` the first time the element scrolls into
/// view, then stops watching. The wrapped element only ever goes from hidden
/// to shown.
fn observe_visibility(
    node: &NodeRef,
    visible: UseStateHandle<bool>,
) -> impl FnOnce() {
    let mut watcher: Option<(
        IntersectionObserver,
        Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    )> = None;
    if let Some(element) = node.cast::<Element>() {
        let on_intersect = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if intersecting {
                    visible.set(true);
                    observer.disconnect();
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
        let observer = IntersectionObserver::new(on_intersect.as_ref().unchecked_ref())
            .expect("IntersectionObserver should be constructible");
        observer.observe(&element);
        watcher = Some((observer, on_intersect));
    }
    move || {
        if let Some((observer, _on_intersect)) = watcher {
            observer.disconnect();
        }
    }
}

#[derive(Clone, PartialEq)]
pub enum RevealDirection {
    Up,
    Down,
    Left,
    Right,
}

impl RevealDirection {
    fn class(&self) -> &'static str {
        match self {
            RevealDirection::Up => "reveal-up",
            RevealDirection::Down => "reveal-down",
            RevealDirection::Left => "reveal-left",
            RevealDirection::Right => "reveal-right",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    #[prop_or(RevealDirection::Up)]
    pub direction: RevealDirection,
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Fade-and-slide wrapper. The animation itself lives in CSS; this component
/// only derives the shown/not-shown flag from element visibility.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(move |_| observe_visibility(&node, visible), ());
    }

    let class = classes!(
        "reveal",
        props.direction.class(),
        (*visible).then_some("visible"),
        props.class.clone(),
    );
    html! {
        <div ref={node} {class} style={format!("transition-delay: {}ms", props.delay_ms)}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub value: u32,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(2000)]
    pub duration_ms: u32,
}

/// Counts up from zero once scrolled into view, roughly 60 increments over
/// the configured duration.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);
    let shown = use_state(|| 0u32);
    let done = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(move |_| observe_visibility(&node, visible), ());
    }

    {
        let shown = shown.clone();
        let deps = (*visible, *done);
        let done = done.clone();
        let value = props.value;
        let duration_ms = props.duration_ms;
        use_effect_with_deps(
            move |(visible, done_flag)| {
                let interval = (*visible && !*done_flag && value > 0).then(|| {
                    let step = (value / 60).max(1);
                    let ticks = (value + step - 1) / step;
                    let period = (duration_ms / ticks.max(1)).max(16);
                    let mut current = 0u32;
                    Interval::new(period, move || {
                        if current < value {
                            current = (current + step).min(value);
                            shown.set(current);
                            if current == value {
                                // Re-runs the effect, whose cleanup drops this
                                // interval outside of its own tick.
                                done.set(true);
                            }
                        }
                    })
                });
                move || drop(interval)
            },
            deps,
        );
    }

    html! {
        <span ref={node} class="stat-number">
            { &props.prefix }{ shown.to_string() }{ &props.suffix }
        </span>
    }
}

#[derive(Clone, PartialEq)]
pub enum HeadingAlign {
    Left,
    Center,
}

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    #[prop_or_default]
    pub badge: Option<AttrValue>,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or(HeadingAlign::Center)]
    pub align: HeadingAlign,
    #[prop_or(false)]
    pub light: bool,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    let class = classes!(
        "section-heading",
        matches!(props.align, HeadingAlign::Center).then_some("centered"),
        props.light.then_some("light"),
    );
    html! {
        <div {class}>
            if let Some(badge) = &props.badge {
                <span class="section-badge">{ badge }</span>
            }
            <h2>{ &props.title }</h2>
            if let Some(description) = &props.description {
                <p>{ description }</p>
            }
        </div>
    }
}
