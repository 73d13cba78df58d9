use yew::prelude::*;

const QUICK_LINKS: [(&str, &str); 4] = [
    ("#home", "Home"),
    ("#features", "Features"),
    ("#demo", "Demo"),
    ("#dashboard", "Dashboard"),
];

const LEGAL_LINKS: [(&str, &str); 3] = [
    ("#privacy", "Privacy Policy"),
    ("#terms", "Terms of Service"),
    ("#contact", "Contact"),
];

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("#twitter", "Twitter"),
    ("#facebook", "Facebook"),
    ("#linkedin", "LinkedIn"),
];

fn link_list(links: &[(&'static str, &'static str)]) -> Html {
    html! {
        <ul>
            { for links.iter().map(|(href, label)| html! {
                <li><a href={*href}>{*label}</a></li>
            }) }
        </ul>
    }
}

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <section class="cta-section">
            <div class="cta-content reveal">
                <h2>{"Ready to Protect Your Child?"}</h2>
                <p>{"Start your free trial today. No credit card required."}</p>
                <button class="btn-primary cta-btn">{"Get Started Now"}</button>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer>
            <div class="footer-content">
                <div class="footer-section">
                    <h4>{"KidSafe"}</h4>
                    <p>{"Protecting children online with advanced AI technology."}</p>
                </div>
                <div class="footer-section">
                    <h4>{"Quick Links"}</h4>
                    { link_list(&QUICK_LINKS) }
                </div>
                <div class="footer-section">
                    <h4>{"Legal"}</h4>
                    { link_list(&LEGAL_LINKS) }
                </div>
                <div class="footer-section">
                    <h4>{"Follow Us"}</h4>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|(href, label)| html! {
                            <a href={*href}>{*label}</a>
                        }) }
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{"© 2024 KidSafe. All rights reserved. Protecting kids, one click at a time."}</p>
            </div>
        </footer>
    }
}
