/// A substitute video the demo switches to after blocking something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeContentOption {
    pub title: &'static str,
    pub emoji: &'static str,
    pub video_id: &'static str,
}

pub static SAFE_CONTENT: [SafeContentOption; 6] = [
    SafeContentOption { title: "Educational - Math Basics", emoji: "📐", video_id: "dQw4w9WgXcQ" },
    SafeContentOption { title: "Kids Cartoon - Adventure", emoji: "🎬", video_id: "jNQXAC9IVRw" },
    SafeContentOption { title: "DIY Crafts Tutorial", emoji: "🎨", video_id: "dQw4w9WgXcQ" },
    SafeContentOption { title: "Funny Kids Comedy", emoji: "😂", video_id: "jNQXAC9IVRw" },
    SafeContentOption { title: "Science Experiment", emoji: "🔬", video_id: "dQw4w9WgXcQ" },
    SafeContentOption { title: "Nature Documentary", emoji: "🌿", video_id: "jNQXAC9IVRw" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_distinct_titles() {
        assert_eq!(SAFE_CONTENT.len(), 6);
        let mut titles: Vec<_> = SAFE_CONTENT.iter().map(|o| o.title).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), 6);
    }

    #[test]
    fn video_ids_look_like_youtube_ids() {
        for option in &SAFE_CONTENT {
            assert_eq!(option.video_id.len(), 11, "{}", option.title);
        }
    }
}
