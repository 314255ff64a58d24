use yew::prelude::*;

use crate::config::{RevealOptions, DEFAULT_VISIBILITY_THRESHOLD};
use crate::hooks::use_reveal;

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub children: Children,
    /// Presentation delay, used to stagger siblings.
    #[prop_or_default]
    pub delay: u32,
    #[prop_or(DEFAULT_VISIBILITY_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Fades and slides its children in once they scroll into view.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let options = RevealOptions::or_default_threshold(props.threshold, props.delay);
    let presented = use_reveal(node.clone(), options);

    html! {
        <div
            ref={node}
            class={classes!("fade-in", presented.then(|| "revealed"), props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}
