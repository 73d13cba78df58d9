use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GuardianProps {
    #[prop_or_default]
    pub active: bool,
}

/// The robot mascot. Bobs while it is "protecting".
#[function_component(Guardian)]
pub fn guardian(props: &GuardianProps) -> Html {
    let class = classes!("guardian-container", props.active.then_some("guardian-active"));
    html! {
        <div class={class}>
            <div class="guardian">{"🤖"}</div>
            <p class="guardian-label">
                { if props.active { "Protecting Child" } else { "Monitoring" } }
            </p>
        </div>
    }
}
