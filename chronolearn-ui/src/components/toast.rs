//! Messages and Modals
//!
//! Inline success/error messages and the success modal shown after
//! scheduling.

use leptos::*;

use chronolearn::api::ApiError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tone {
    Success,
    Error,
}

/// A page message above or below a form
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub tone: Tone,
    pub lines: Vec<String>,
    /// Render as a bullet list even with a single line
    pub list: bool,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            lines: vec![text.into()],
            list: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Error,
            lines: vec![text.into()],
            list: false,
        }
    }

    /// Backend error with one line per field error; a list-typed `detail`
    /// stays a list even when it has one entry
    pub fn from_api(error: &ApiError, fallback: &str) -> Self {
        let lines = error.items(fallback);
        Self {
            tone: Tone::Error,
            list: error.is_list() || lines.len() > 1,
            lines,
        }
    }
}

/// Renders the current notice, if any
#[component]
pub fn NoticeView(#[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            let (icon, class) = match notice.tone {
                Tone::Success => ("✓", "bg-green-600/20 border-green-500/40 text-green-200"),
                Tone::Error => ("✕", "bg-red-600/20 border-red-500/40 text-red-200"),
            };
            let single = !notice.list;
            view! {
                <div class=format!("flex items-start space-x-3 border rounded-lg px-4 py-3 text-sm {}", class)>
                    <span class="font-bold">{icon}</span>
                    {if single {
                        view! { <span>{notice.lines.concat()}</span> }.into_view()
                    } else {
                        view! {
                            <ul class="list-disc list-inside space-y-1">
                                {notice.lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                            </ul>
                        }.into_view()
                    }}
                </div>
            }
        })
    }
}

/// Modal confirming a finished action
#[component]
pub fn SuccessModal(
    #[prop(into)]
    open: Signal<bool>,
    #[prop(into)]
    message: String,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 bg-black/60 flex items-center justify-center px-4">
                <div class="bg-gray-800 border border-white/10 rounded-2xl shadow-2xl p-8 max-w-sm w-full text-center">
                    <div class="text-5xl mb-4">"🎉"</div>
                    <p class="text-lg font-semibold mb-6">{message.clone()}</p>
                    <button
                        class="px-6 py-2 bg-violet-600 hover:bg-violet-700 rounded-lg font-medium transition-colors"
                        on:click=move |_| on_close.call(())
                    >
                        "OK"
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_field_error_stays_a_list() {
        let err = ApiError::http(422, r#"{"detail": [{"msg": "field required"}]}"#);
        let notice = Notice::from_api(&err, "Failed to import playlist.");
        assert_eq!(notice.tone, Tone::Error);
        assert_eq!(notice.lines, vec!["field required".to_string()]);
        assert!(notice.list);
    }

    #[test]
    fn test_message_detail_is_plain() {
        let err = ApiError::http(400, r#"{"detail": "Email already registered"}"#);
        let notice = Notice::from_api(&err, "Registration failed.");
        assert_eq!(notice.lines, vec!["Email already registered".to_string()]);
        assert!(!notice.list);

        let notice = Notice::from_api(&ApiError::Network("offline".into()), "Registration failed.");
        assert!(!notice.list);
        assert!(!Notice::success("Logged in successfully!").list);
    }
}
