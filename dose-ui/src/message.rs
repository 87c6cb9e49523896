use std::fmt;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Error,
}

/// One user-facing notice: a short title plus a sentence of detail.
///
/// Every calculator operation reports its outcome through one of these;
/// they are the only feedback channel besides the results panel itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: MessageType,
    pub title: String,
    pub detail: String,
}

impl Notice {
    pub fn info(
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind: MessageType::Info,
            title: title.into(),
            detail: detail.into(),
        }
    }

    pub fn success(
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind: MessageType::Success,
            title: title.into(),
            detail: detail.into(),
        }
    }

    pub fn error(
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            kind: MessageType::Error,
            title: title.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let tag = match self.kind {
            MessageType::Info => "info",
            MessageType::Success => "ok",
            MessageType::Error => "error",
        };
        write!(f, "[{tag}] {}: {}", self.title, self.detail)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_includes_kind_title_and_detail() {
        let notice = Notice::error("Missing Information", "Please fill in all fields.");

        assert_eq!(
            notice.to_string(),
            "[error] Missing Information: Please fill in all fields."
        );
    }
}
