use js_sys::{Object, Reflect};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};

pub const CAMERA_WIDTH: u32 = 280;
pub const CAMERA_HEIGHT: u32 = 210;

pub const DENIED_NOTICE: &str = "Camera permission denied. Please enable camera access.";

#[derive(Error, Debug)]
pub enum CameraError {
    #[error("No browser window available")]
    NoWindow,
    #[error("Media devices are not supported: {0}")]
    Unsupported(String),
    #[error("Camera access denied: {0}")]
    Denied(String),
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| e.message().into()))
        .unwrap_or_else(|| format!("{:?}", value))
}

fn video_constraints() -> Result<JsValue, CameraError> {
    let video = Object::new();
    for (key, value) in [("width", CAMERA_WIDTH), ("height", CAMERA_HEIGHT)] {
        Reflect::set(&video, &key.into(), &value.into())
            .map_err(|e| CameraError::Unsupported(describe(&e)))?;
    }
    Ok(video.into())
}

/// Asks the browser for the webcam at the demo's fixed resolution.
pub async fn request_camera() -> Result<MediaStream, CameraError> {
    let window = web_sys::window().ok_or(CameraError::NoWindow)?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| CameraError::Unsupported(describe(&e)))?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&video_constraints()?);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| CameraError::Unsupported(describe(&e)))?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|e| CameraError::Denied(describe(&e)))?;

    stream
        .dyn_into::<MediaStream>()
        .map_err(|e| CameraError::Denied(describe(&e)))
}

/// Shows `stream` in the feed box, stopping whatever stream it replaces.
pub fn attach(video: &HtmlVideoElement, stream: &MediaStream) {
    if let Some(previous) = video.src_object() {
        if previous.id() != stream.id() {
            stop_stream(&previous);
        }
    }
    video.set_src_object(Some(stream));
}

pub fn stop_stream(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// Stops the attached stream, if any, and detaches it.
pub fn release(video: &HtmlVideoElement) {
    if let Some(stream) = video.src_object() {
        stop_stream(&stream);
    }
    video.set_src_object(None);
}

pub fn notify_denied(error: &CameraError) {
    log::warn!("Camera access failed: {}", error);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(DENIED_NOTICE);
    }
}
