use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub struct TestimonialEntry {
    pub text: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub image: &'static str,
}

pub const TESTIMONIALS: [TestimonialEntry; 3] = [
    TestimonialEntry {
        text: "KidSafe has given me peace of mind. I know my children are safe online without being too restrictive.",
        author: "Sarah Johnson",
        role: "Parent of 2",
        image: "https://i.pravatar.cc/150?img=1",
    },
    TestimonialEntry {
        text: "The real-time alerts are fantastic! I caught something harmful before it could affect my 11-year-old.",
        author: "Michael Chen",
        role: "Parent of 1",
        image: "https://i.pravatar.cc/150?img=2",
    },
    TestimonialEntry {
        text: "Finally, a parental control app that actually works well and is easy to use. Highly recommended!",
        author: "Emma Williams",
        role: "Parent of 3",
        image: "https://i.pravatar.cc/150?img=3",
    },
];

#[derive(Properties, PartialEq)]
pub struct TestimonialProps {
    pub entry: TestimonialEntry,
    pub index: usize,
}

#[function_component(Testimonial)]
pub fn testimonial(props: &TestimonialProps) -> Html {
    let entry = &props.entry;
    html! {
        <div class="testimonial-card reveal" style={format!("animation-delay: {:.1}s;", props.index as f32 * 0.1)}>
            <div class="testimonial-stars">{"⭐ ⭐ ⭐ ⭐ ⭐"}</div>
            <p class="testimonial-text">{format!("\"{}\"", entry.text)}</p>
            <div class="testimonial-author">
                <img src={entry.image} alt={entry.author} class="author-avatar" loading="lazy" />
                <div>
                    <h4>{entry.author}</h4>
                    <span class="author-role">{entry.role}</span>
                </div>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="testimonials">
            <h2 class="reveal">{"What "}<span>{"Parents Say"}</span></h2>
            <div class="testimonials-grid">
                { for TESTIMONIALS.iter().enumerate().map(|(index, entry)| html! {
                    <Testimonial key={index} entry={*entry} index={index} />
                }) }
            </div>
        </section>
    }
}
