use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::utils::animation::animated_value;

const COUNT_UP_MS: f64 = 2000.0;
const FRAME_MS: u32 = 30;

const BLOCKED_CONTENT: u32 = 42;
const SITES_VISITED: u32 = 156;
const ALERTS_TODAY: u32 = 3;

struct Activity {
    time: &'static str,
    text: &'static str,
    blocked: bool,
}

const RECENT_ACTIVITY: [Activity; 4] = [
    Activity { time: "10:45 AM", text: "Blocked access to harmful website", blocked: true },
    Activity { time: "09:30 AM", text: "YouTube access - Educational video", blocked: false },
    Activity { time: "08:15 AM", text: "Inappropriate image detected and removed", blocked: true },
    Activity { time: "07:20 AM", text: "Khan Academy - Math lesson", blocked: false },
];

const USAGE_BARS: [u8; 5] = [60, 75, 45, 80, 50];

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let elapsed = use_state(|| 0.0f64);

    // Drive the counters from 0 to their targets
    {
        let elapsed = elapsed.clone();
        use_effect_with_deps(
            move |_| {
                let cancelled = Rc::new(Cell::new(false));
                let flag = cancelled.clone();
                spawn_local(async move {
                    let started = js_sys::Date::now();
                    loop {
                        TimeoutFuture::new(FRAME_MS).await;
                        if flag.get() {
                            break;
                        }
                        let ms = js_sys::Date::now() - started;
                        elapsed.set(ms);
                        if ms >= COUNT_UP_MS {
                            break;
                        }
                    }
                });
                move || cancelled.set(true)
            },
            (),
        );
    }

    let count = |target: u32| animated_value(target, *elapsed, COUNT_UP_MS).to_string();
    let cards = [
        ("Blocked Content", count(BLOCKED_CONTENT), "🚫", "danger"),
        ("Screen Time", "2h 35m".to_string(), "⏱️", "warning"),
        ("Safe Status", "Active".to_string(), "✅", "success"),
        ("Sites Visited", count(SITES_VISITED), "🌐", "primary"),
        ("Alerts Today", ALERTS_TODAY.to_string(), "🔔", "accent"),
    ];

    html! {
        <section id="dashboard" class="dashboard">
            <h2 class="reveal">{"Parent "}<span>{"Dashboard"}</span></h2>
            <p class="dashboard-subtitle reveal">
                {"Real-time monitoring and complete control over your child's online activities"}
            </p>

            <div class="dashboard-grid">
                { for cards.into_iter().enumerate().map(|(index, (title, value, icon, color))| html! {
                    <div
                        key={index}
                        class={classes!("dashboard-card", "reveal", format!("card-{}", color))}
                        style={format!("animation-delay: {:.1}s;", index as f32 * 0.1)}
                    >
                        <div class="card-icon">{icon}</div>
                        <h3>{title}</h3>
                        <p class="card-value">{value}</p>
                    </div>
                }) }
            </div>

            <div class="dashboard-activity reveal">
                <h3>{"Recent Activity"}</h3>
                <div class="activity-list">
                    { for RECENT_ACTIVITY.iter().map(|activity| {
                        let (class, badge) = if activity.blocked { ("blocked", "Blocked") } else { ("allowed", "Allowed") };
                        html! {
                            <div class={classes!("activity-item", class)}>
                                <span class="activity-time">{activity.time}</span>
                                <span class="activity-text">{activity.text}</span>
                                <span class="activity-badge">{badge}</span>
                            </div>
                        }
                    }) }
                </div>
            </div>

            <div class="dashboard-quick-stats reveal">
                <div class="stat-box">
                    <h4>{"Protection Level"}</h4>
                    <div class="progress-bar">
                        <div class="progress-fill"></div>
                    </div>
                    <span>{"98% Protected"}</span>
                </div>
                <div class="stat-box">
                    <h4>{"Daily Usage"}</h4>
                    <div class="usage-chart">
                        { for USAGE_BARS.iter().map(|height| html! {
                            <div class="chart-bar" style={format!("height: {}%;", height)}></div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
