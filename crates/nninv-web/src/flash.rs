//! One-shot notices carried on the redirect target's query string.

use axum::response::Redirect;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Error,
}

/// Query parameters read back by every page that shows notices.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Flash {
    #[serde(default)]
    pub notice: Option<String>,
    #[serde(default)]
    pub level: Option<Level>,
}

impl Flash {
    pub fn success(notice: impl Into<String>) -> Self {
        Self { notice: Some(notice.into()), level: Some(Level::Success) }
    }

    pub fn error(notice: impl Into<String>) -> Self {
        Self { notice: Some(notice.into()), level: Some(Level::Error) }
    }

    /// `path` with this notice appended as a query string.
    pub fn target(&self, path: &str) -> String {
        let Some(notice) = &self.notice else {
            return path.to_string();
        };
        let level = match self.level.unwrap_or(Level::Success) {
            Level::Success => "success",
            Level::Error => "error",
        };
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("notice", notice)
            .append_pair("level", level)
            .finish();
        format!("{path}?{query}")
    }

    /// 303 redirect to `path` carrying this notice.
    pub fn redirect(&self, path: &str) -> Redirect {
        Redirect::to(&self.target(path))
    }
}
