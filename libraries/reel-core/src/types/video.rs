/// Video domain types
use crate::types::VideoId;
use serde::{Deserialize, Serialize};

/// Placeholder shown when a flag was set without a reason
const REASON_NOT_SUPPLIED: &str = "Not supplied";

/// Display form of a flag reason
///
/// Empty reasons display as `Not supplied`.
pub fn reason_label(reason: &str) -> &str {
    if reason.is_empty() {
        REASON_NOT_SUPPLIED
    } else {
        reason
    }
}

/// A catalogue video
///
/// Records are created once when the catalogue loads. Only the flag state
/// changes afterwards, through [`VideoRecord::set_flag`] and
/// [`VideoRecord::clear_flag`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    id: VideoId,
    title: String,
    /// Tags in source order
    tags: Vec<String>,
    #[serde(default)]
    flagged: bool,
    #[serde(default)]
    flag_reason: String,
}

impl VideoRecord {
    /// Create an unflagged video
    pub fn new(id: VideoId, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id,
            title: title.into(),
            tags,
            flagged: false,
            flag_reason: String::new(),
        }
    }

    /// Catalogue key
    pub fn id(&self) -> &VideoId {
        &self.id
    }

    /// Video title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Tags in source order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Whether the video is flagged
    pub fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// Raw flag reason (empty when unflagged or when no reason was given)
    pub fn flag_reason(&self) -> &str {
        &self.flag_reason
    }

    /// Whether `tag` appears verbatim in the tag list
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether the title contains `term`, ignoring case
    pub fn title_contains(&self, term: &str) -> bool {
        self.title.to_uppercase().contains(&term.to_uppercase())
    }

    /// `<title> (<id>) [<tags>]`, without flag state
    pub fn summary_line(&self) -> String {
        format!("{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }

    /// Summary line plus ` - FLAGGED (reason: ...)` when flagged
    pub fn display_line(&self) -> String {
        let mut line = self.summary_line();
        if self.flagged {
            line.push_str(" - FLAGGED (reason: ");
            line.push_str(reason_label(&self.flag_reason));
            line.push(')');
        }
        line
    }

    /// Mark as flagged with `reason` (may be empty)
    pub fn set_flag(&mut self, reason: impl Into<String>) {
        self.flagged = true;
        self.flag_reason = reason.into();
    }

    /// Remove the flag and its reason
    pub fn clear_flag(&mut self) {
        self.flagged = false;
        self.flag_reason.clear();
    }
}
