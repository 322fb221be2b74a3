//! Chat interface components
//!
//! Contains the main chat view, message display, input and export toolbar.

pub mod export;
pub mod input;
pub mod message;

use crate::app::AppState;
use dioxus::prelude::*;
use export::ExportToolbar;
use input::ChatInput;
use message::MessageBubble;
use std::rc::Rc;

#[component]
pub fn ChatView() -> Element {
    let app_state = use_context::<AppState>();
    let session = app_state.session;
    let mut bottom_ref = use_signal(|| None::<Rc<MountedData>>);

    let (messages, is_pending, error) = {
        let s = session.read();
        (s.messages(), s.is_pending(), s.error())
    };

    // Keep the newest message in view
    use_effect(move || {
        let _count = session.read().messages().len();
        if let Some(el) = bottom_ref.peek().clone() {
            spawn(async move {
                let _ = el.scroll_to(ScrollBehavior::Smooth).await;
            });
        }
    });

    rsx! {
        div { class: "flex flex-col flex-1 min-h-0 relative",

            header { class: "chat-header",
                div {
                    h1 { class: "chat-title", "Gopher Archive" }
                    p { class: "chat-subtitle", "Your learning assistant" }
                }
                ExportToolbar {}
            }

            // Messages Area
            div { class: "flex-1 min-h-0 overflow-y-auto px-4 py-4 custom-scrollbar scroll-smooth",
                div { class: "max-w-3xl mx-auto w-full flex flex-col gap-1 pb-4",
                    for msg in messages.iter() {
                        MessageBubble { key: "{msg.id}", message: msg.clone() }
                    }

                    // Searching indicator
                    if is_pending {
                        div { class: "message-layout",
                            div { class: "flex items-center gap-3 py-2 animate-fade-in",
                                div { class: "avatar", "G" }
                                div { class: "typing-dots",
                                    span {}
                                    span {}
                                    span {}
                                }
                                span { class: "message-meta", "Searching the archive..." }
                            }
                        }
                    }

                    if let Some(error) = error {
                        div { class: "error-banner", "{error}" }
                    }

                    div {
                        class: "h-4",
                        onmounted: move |evt| bottom_ref.set(Some(evt.data())),
                    }
                }
            }

            ChatInput {}
        }
    }
}
