use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionLabelProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SectionLabel)]
pub fn section_label(props: &SectionLabelProps) -> Html {
    html! {
        <div class="section-label">{ for props.children.iter() }</div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GlassCardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub hover_effect: bool,
}

#[function_component(GlassCard)]
pub fn glass_card(props: &GlassCardProps) -> Html {
    html! {
        <div class={classes!("glass-card", props.hover_effect.then(|| "hoverable"), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
