use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::components::guardian::Guardian;
use crate::config;
use crate::demo::camera;
use crate::demo::catalog::SafeContentOption;
use crate::demo::driver::SequencerDriver;
use crate::demo::sequencer::SequencerState;
use crate::demo::session::{CameraStatus, DemoSession};

/// Camera answers carry the id of the request that produced them.
pub enum SessionAction {
    Open(u64),
    CameraGranted(u64),
    CameraDenied(u64),
    End,
}

impl Reducible for DemoSession {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            SessionAction::Open(request) => self.open(request),
            SessionAction::CameraGranted(request) => self.camera_granted(request),
            SessionAction::CameraDenied(request) => self.camera_denied(request),
            SessionAction::End => self.end(),
        };
        Rc::new(next)
    }
}

const DEMO_CSS: &str = r#"
    .youtube-container {
        position: relative;
        aspect-ratio: 16/9;
        border-radius: 16px;
        overflow: hidden;
        border: 3px solid transparent;
        transition: border-color 0.3s ease, box-shadow 0.3s ease;
    }
    .youtube-container iframe {
        width: 100%;
        height: 100%;
        border: none;
    }
    .youtube-container.danger-mode {
        border-color: var(--danger);
        box-shadow: 0 0 30px rgba(239, 68, 68, 0.6);
    }
    .demo-danger-overlay {
        position: absolute;
        inset: 0;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(127, 29, 29, 0.85);
        color: #fff;
        animation: fade-in 0.3s ease both;
    }
    .danger-pulse {
        text-align: center;
        animation: pulse 1s ease-in-out infinite;
    }
    .safe-content-badge {
        position: absolute;
        bottom: 12px;
        left: 12px;
        display: flex;
        gap: 0.5rem;
        padding: 0.5rem 1rem;
        border-radius: 999px;
        background: rgba(16, 185, 129, 0.92);
        color: #fff;
        animation: pop-in 0.3s ease both;
    }
    .camera-feed-container {
        position: relative;
        width: 280px;
        height: 210px;
        border-radius: 12px;
        overflow: hidden;
        background: #111;
    }
    .camera-feed {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }
    .camera-label {
        position: absolute;
        bottom: 8px;
        left: 8px;
        color: #fff;
        font-size: 0.85rem;
    }
    .camera-active-indicator {
        position: absolute;
        top: 8px;
        right: 8px;
        color: #fff;
        font-weight: 700;
        animation: pulse 1.5s ease-in-out infinite;
    }
    .camera-denied {
        color: var(--danger);
        text-align: center;
    }
    .detection-message {
        margin: 1.5rem auto 0;
        max-width: 480px;
        padding: 0.75rem 1.5rem;
        border-radius: 12px;
        text-align: center;
        font-weight: 700;
        animation: drop-in 0.3s ease both;
    }
    .detection-message.danger {
        background: rgba(239, 68, 68, 0.15);
        color: var(--danger);
    }
    .detection-message.safe {
        background: rgba(16, 185, 129, 0.15);
        color: var(--success);
    }
    .history-item {
        display: grid;
        grid-template-columns: 110px 1fr auto;
        gap: 1rem;
        padding: 0.6rem 0;
        border-bottom: 1px solid var(--border);
    }
    @media (max-width: 768px) {
        .history-item {
            grid-template-columns: 1fr;
            gap: 0.25rem;
        }
    }
"#;

fn history_view(state: &SequencerState) -> Html {
    if state.history.is_empty() {
        return html! {
            <div class="history-empty">{"No detections yet. Watching for harmful content..."}</div>
        };
    }
    html! {
        { for state.history.iter().map(|item| html! {
            <div key={item.id} class="history-item">
                <span class="history-time">{item.time.clone()}</span>
                <span class="history-message">{item.message.clone()}</span>
                <span class="history-content">{item.content.clone()}</span>
            </div>
        }) }
    }
}

fn stats_view(state: &SequencerState, camera_live: bool) -> Html {
    let status_class = if state.is_danger_active { "danger" } else { "safe" };
    html! {
        <div class="demo-stats">
            <div class="stat-item">
                <span class="stat-label">{"Detection Status"}</span>
                <span class={classes!("stat-value", status_class)}>
                    { if state.is_danger_active { "🚨 THREAT DETECTED" } else { "✅ SAFE" } }
                </span>
            </div>
            <div class="stat-item">
                <span class="stat-label">{"Camera"}</span>
                <span class="stat-value">{ if camera_live { "🔴 ACTIVE" } else { "⚫ INACTIVE" } }</span>
            </div>
            <div class="stat-item">
                <span class="stat-label">{"Detections"}</span>
                <span class="stat-value">{state.history.len()}</span>
            </div>
        </div>
    }
}

#[function_component(Demo)]
pub fn demo() -> Html {
    let video_ref = use_node_ref();
    let session = use_reducer(DemoSession::default);
    let snapshot = use_state(SequencerState::default);
    let video_id = use_state(|| config::DEMO_VIDEO_ID);

    let driver = {
        let snapshot = snapshot.clone();
        let video_id = video_id.clone();
        use_memo(
            move |_| {
                SequencerDriver::new(
                    Callback::from(move |state: SequencerState| snapshot.set(state)),
                    Callback::from(move |option: &'static SafeContentOption| {
                        video_id.set(option.video_id)
                    }),
                )
            },
            (),
        )
    };

    // The sequencer only runs while the demo is open and the camera is live
    {
        let driver = driver.clone();
        use_effect_with_deps(
            move |monitoring| {
                if *monitoring {
                    driver.start();
                }
                move || driver.stop()
            },
            session.monitoring(),
        );
    }

    // Id of the newest camera request; bumped on open and on end
    let camera_request = use_mut_ref(|| 0u64);

    let open_demo = {
        let session = session.clone();
        let video_ref = video_ref.clone();
        let camera_request = camera_request.clone();
        Callback::from(move |_: MouseEvent| {
            let request = {
                let mut current = camera_request.borrow_mut();
                *current += 1;
                *current
            };
            session.dispatch(SessionAction::Open(request));
            let session = session.clone();
            let video_ref = video_ref.clone();
            let camera_request = camera_request.clone();
            spawn_local(async move {
                let result = camera::request_camera().await;
                let current = *camera_request.borrow() == request;
                match result {
                    Ok(stream) => match video_ref.cast::<HtmlVideoElement>() {
                        Some(video) if current => {
                            camera::attach(&video, &stream);
                            session.dispatch(SessionAction::CameraGranted(request));
                        }
                        _ => {
                            // The demo was ended or reopened while the prompt was up
                            log::debug!("Camera request {} is stale, stopping stream", request);
                            camera::stop_stream(&stream);
                        }
                    },
                    Err(e) if current => {
                        camera::notify_denied(&e);
                        session.dispatch(SessionAction::CameraDenied(request));
                    }
                    Err(e) => log::debug!("Ignoring stale camera error: {}", e),
                }
            });
        })
    };

    let end_demo = {
        let session = session.clone();
        let video_ref = video_ref.clone();
        let video_id = video_id.clone();
        let camera_request = camera_request.clone();
        Callback::from(move |_: MouseEvent| {
            *camera_request.borrow_mut() += 1;
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                camera::release(&video);
            }
            session.dispatch(SessionAction::End);
            video_id.set(config::DEMO_VIDEO_ID);
        })
    };

    let simulate = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| driver.simulate())
    };

    let reset = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| driver.dismiss())
    };

    let state = &*snapshot;
    let camera_live = session.camera == CameraStatus::Live;

    html! {
        <section id="demo" class="demo">
            <style>{DEMO_CSS}</style>
            <h2 class="reveal">{"AI Content "}<span>{"Detection Demo"}</span></h2>
            <p class="demo-subtitle reveal">
                {"See how KidSafe detects harmful content and automatically switches to safe alternatives"}
            </p>

            if !session.demo_open {
                <div class="demo-inactive rise">
                    <div class="demo-preview">
                        <Guardian active={false} />
                        <p>{"Click below to start the live demo"}</p>
                    </div>
                    <button class="btn-primary demo-start-btn" onclick={open_demo}>
                        {"🎥 Start Live Demo"}
                    </button>
                </div>
            } else {
                <div class="demo-active">
                    <div class="demo-container-active">
                        <div class={classes!("youtube-container", state.is_danger_active.then_some("danger-mode"))}>
                            <iframe
                                src={config::embed_url(*video_id)}
                                title="YouTube Demo"
                                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                                allowfullscreen=true
                            ></iframe>

                            if state.is_danger_active {
                                <div class="demo-danger-overlay">
                                    <div class="danger-pulse">
                                        <h3>{"🚫 Harmful Content Detected!"}</h3>
                                        <p>{"Automatically blocking and switching to safe content..."}</p>
                                    </div>
                                </div>
                            }

                            if let Some(safe) = state.active_safe_content {
                                <div class="safe-content-badge">
                                    <span class="badge-emoji">{safe.emoji}</span>
                                    <span class="badge-text">{format!("Switched to: {}", safe.title)}</span>
                                </div>
                            }
                        </div>

                        <div class="camera-feed-container">
                            <video ref={video_ref} autoplay=true muted=true class="camera-feed" />
                            <div class="camera-label">{"📷 Your Camera"}</div>
                            if camera_live {
                                <div class="camera-active-indicator">{"🔴 LIVE"}</div>
                            }
                        </div>
                    </div>

                    if session.camera == CameraStatus::Denied {
                        <p class="camera-denied">{camera::DENIED_NOTICE}</p>
                    }

                    if !state.current_message.is_empty() {
                        <div class={classes!("detection-message", if state.is_danger_active { "danger" } else { "safe" })}>
                            {state.current_message.clone()}
                        </div>
                    }

                    <div class="demo-controls">
                        <button class="btn-danger" onclick={simulate}>{"🚫 Simulate Harmful Content"}</button>
                        <button class="btn-success" onclick={reset}>{"✅ Reset to Normal"}</button>
                        <button class="btn-outline" onclick={end_demo}>{"❌ End Demo"}</button>
                    </div>

                    <div class="detection-history">
                        <h3>{"📋 Detection History"}</h3>
                        <div class="history-list">
                            { history_view(state) }
                        </div>
                    </div>

                    { stats_view(state, camera_live) }
                </div>
            }
        </section>
    }
}
