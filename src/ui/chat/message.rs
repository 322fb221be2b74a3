//! Message display component

use crate::export::text::format_time;
use crate::types::{Message, Role};
use chrono::Local;
use dioxus::prelude::*;

#[component]
pub fn MessageBubble(message: Message) -> Element {
    let time = format_time(&message.timestamp, &Local);

    match message.role {
        // User message, right-aligned accent bubble
        Role::User => rsx! {
            div { class: "message-layout animate-fade-in-up",
                div { class: "flex justify-end mb-4",
                    div { class: "message-user px-4 py-3",
                        div { class: "message-meta", "You · {time}" }
                        div { class: "message-text", "{message.content}" }
                    }
                }
            }
        },
        // Archive reply with the gopher avatar
        Role::Assistant => rsx! {
            div { class: "message-layout animate-fade-in-up",
                div { class: "flex items-start gap-3 mb-4",
                    div { class: "avatar", "G" }
                    div { class: "message-assistant",
                        div { class: "message-meta", "Archive · {time}" }
                        for (idx, paragraph) in message.content.split("\n\n").enumerate() {
                            p { key: "{idx}", class: "message-text", "{paragraph}" }
                        }
                    }
                }
            }
        },
    }
}
