//! Notice Banner Component
//!
//! Success/error line shown above forms and lists.

use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Option<Self> {
        Some(Notice::Success(text.into()))
    }

    pub fn error(text: impl Into<String>) -> Option<Self> {
        Some(Notice::Error(text.into()))
    }

    fn class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "message success",
            Notice::Error(_) => "message error",
        }
    }

    fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }
}

/// Renders nothing while the signal holds `None`
#[component]
pub fn NoticeBanner(#[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            view! { <div class=n.class()>{n.text().to_string()}</div> }
        })
    }
}

/// Inline error under a form field
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || message.get().map(|m| view! { <span class="error-text">{m}</span> })
}
