const DEFAULT_EMBED_BASE: &str = "https://www.youtube.com/embed";

/// Video the demo opens with before any switch happens.
pub const DEMO_VIDEO_ID: &str = "dQw4w9WgXcQ";

pub fn get_embed_base() -> &'static str {
    option_env!("KIDSAFE_EMBED_BASE").unwrap_or(DEFAULT_EMBED_BASE)
}

pub fn embed_url(video_id: &str) -> String {
    format!("{}/{}?autoplay=1", get_embed_base().trim_end_matches('/'), video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_url_autoplays_the_video() {
        let url = embed_url("jNQXAC9IVRw");
        assert!(url.starts_with(get_embed_base().trim_end_matches('/')));
        assert!(url.ends_with("/jNQXAC9IVRw?autoplay=1"), "{url}");
    }
}
