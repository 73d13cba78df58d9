use yew::prelude::*;

use crate::components::feature_card::FeatureCard;
use crate::components::guardian::Guardian;
use crate::components::navbar::scroll_to_section;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: "🛡️",
        title: "Real-Time Protection",
        description: "Instantly blocks harmful content like nudity, violence, and hate speech with AI-powered detection.",
    },
    Feature {
        icon: "📊",
        title: "Parental Dashboard",
        description: "Monitor activity, set time limits, and receive alerts about suspicious content in real-time.",
    },
    Feature {
        icon: "🔒",
        title: "Privacy First",
        description: "Your child's data is encrypted and never sold. Complete privacy protection guaranteed.",
    },
    Feature {
        icon: "⚡",
        title: "Fast & Lightweight",
        description: "Minimal impact on device performance with advanced optimization technology.",
    },
    Feature {
        icon: "🌍",
        title: "Multi-Platform",
        description: "Works seamlessly across iOS, Android, Mac, and Windows devices.",
    },
    Feature {
        icon: "🤖",
        title: "AI-Powered",
        description: "Machine learning continuously improves detection accuracy.",
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    let watch_demo = Callback::from(|_: MouseEvent| scroll_to_section("demo"));

    html! {
        <>
            <section id="home" class="hero">
                <div class="rise">
                    <Guardian active={false} />
                </div>
                <h2 class="rise" style="animation-delay: 0.2s;">
                    {"AI Protection for "}<span>{"Kids Online"}</span>
                </h2>
                <p class="rise" style="animation-delay: 0.3s;">
                    {"KidSafe protects children below 13 from harmful online content like nudity, violence, and abuse using advanced AI-powered monitoring. Parents get real-time alerts and complete control."}
                </p>
                <div class="hero-btn rise" style="animation-delay: 0.4s;">
                    <button class="btn-primary">{"Start Free Trial"}</button>
                    <button class="btn-outline" onclick={watch_demo}>{"Watch Demo"}</button>
                </div>
            </section>

            <section id="features" class="features">
                <h2 class="reveal">{"Why Parents Trust "}<span>{"KidSafe"}</span></h2>
                <p class="features-subtitle reveal">{"Comprehensive protection with peace of mind"}</p>
                <div class="feature-grid">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <FeatureCard
                            key={index}
                            icon={feature.icon}
                            title={feature.title}
                            description={feature.description}
                            index={index}
                        />
                    }) }
                </div>
            </section>
        </>
    }
}
