use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub index: usize,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="feature-card reveal" style={format!("animation-delay: {:.1}s;", props.index as f32 * 0.1)}>
            <div class="feature-icon-wrapper">
                <span class="feature-icon">{props.icon}</span>
            </div>
            <h3>{props.title}</h3>
            <p>{props.description}</p>
            <div class="feature-highlight"></div>
        </div>
    }
}
