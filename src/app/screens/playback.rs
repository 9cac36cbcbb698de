use crate::model::PlaybackPayload;

pub(crate) const FALLBACK_TITLE: &str = "Custom Generated Content";
pub(crate) const FALLBACK_CONTENT_TYPE: &str = "custom";

const PREVIEW_LINES: usize = 3;
const PREVIEW_CHARS: usize = 280;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlaybackDetails {
    pub(crate) source_title: String,
    pub(crate) content_type: String,
    pub(crate) preview: String,
}

#[derive(Debug)]
pub(crate) struct PlaybackScreen {
    payload: Option<PlaybackPayload>,
}

impl PlaybackScreen {
    pub(crate) fn new(payload: Option<PlaybackPayload>) -> Self {
        Self { payload }
    }

    pub(crate) fn payload(&self) -> Option<&PlaybackPayload> {
        self.payload.as_ref()
    }

    pub(crate) fn details(&self) -> Option<PlaybackDetails> {
        let payload = self.payload.as_ref()?;
        let source_title = if payload.title.trim().is_empty() {
            FALLBACK_TITLE.to_string()
        } else {
            payload.title.clone()
        };
        let content_type = payload
            .source
            .as_deref()
            .filter(|source| !source.trim().is_empty())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();
        Some(PlaybackDetails {
            source_title,
            content_type,
            preview: content_preview(&payload.content),
        })
    }
}

fn content_preview(content: &str) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let mut preview = lines
        .iter()
        .take(PREVIEW_LINES)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");
    let mut cut = lines.len() > PREVIEW_LINES;
    if preview.chars().count() > PREVIEW_CHARS {
        preview = preview.chars().take(PREVIEW_CHARS).collect();
        cut = true;
    }
    if cut {
        preview.push_str("...");
    }
    preview
}
