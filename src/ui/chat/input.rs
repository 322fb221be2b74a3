//! Chat input bar with send button and dictation toggle

use crate::app::AppState;
use crate::archive::ArchiveClient;
use crate::capabilities::SpeechRecognizer;
use crate::session::{submits_on_enter, ChatSession, DictationCommand, DictationState};
use dioxus::prelude::*;
use std::rc::Rc;
use std::sync::Arc;

/// Submit the draft and resolve it once the archive answers.
fn send_draft(mut session: Signal<ChatSession>, archive: Arc<dyn ArchiveClient>) {
    let Some(query) = session.write().submit() else {
        return;
    };
    spawn(async move {
        let result = archive.ask(&query).await;
        session.write().resolve(result);
    });
}

/// Run one dictation session: feed recognizer events into the draft and
/// stop it when the silence window passes.
fn start_dictation(
    mut session: Signal<ChatSession>,
    recognizer: Arc<dyn SpeechRecognizer>,
    input_ref: Signal<Option<Rc<MountedData>>>,
    id: u64,
    silence_timeout: std::time::Duration,
) {
    let mut events = match recognizer.start() {
        Ok(events) => events,
        Err(e) => {
            tracing::warn!("{}", e);
            session.write().abort_dictation();
            return;
        }
    };

    let stopper = recognizer.clone();
    spawn(async move {
        while let Some(event) = events.recv().await {
            if session.write().apply_speech_event(id, event) {
                stopper.stop();
                break;
            }
            // Stopped by hand or superseded; don't wait for the sender to drop
            if !session.read().is_dictating(id) {
                break;
            }
        }
        // Session over, put the cursor back in the text field
        if let Some(el) = input_ref() {
            let _ = el.set_focus(true).await;
        }
    });

    spawn(async move {
        tokio::time::sleep(silence_timeout).await;
        if session.write().dictation_silence_elapsed(id) {
            recognizer.stop();
        }
    });
}

#[component]
pub fn ChatInput() -> Element {
    let app_state = use_context::<AppState>();
    let mut session = app_state.session;
    let mut input_ref = use_signal(|| None::<Rc<MountedData>>);

    let (draft, is_pending, can_send, listening) = {
        let s = session.read();
        (
            s.draft().to_string(),
            s.is_pending(),
            s.can_submit(),
            s.dictation_state() == DictationState::Listening,
        )
    };
    let dictation_available = app_state.speech.is_available();

    let handle_keydown = {
        let archive = app_state.archive.clone();
        move |evt: KeyboardEvent| {
            if evt.key() == Key::Enter && submits_on_enter(evt.modifiers().contains(Modifiers::SHIFT)) {
                evt.prevent_default();
                send_draft(session, archive.clone());
            }
        }
    };

    let handle_send = {
        let archive = app_state.archive.clone();
        move |_| send_draft(session, archive.clone())
    };

    let handle_mic = {
        let speech = app_state.speech.clone();
        move |_| {
            let recognizer = match speech.recognizer() {
                Ok(recognizer) => recognizer.clone(),
                Err(e) => {
                    tracing::warn!("{}", e);
                    return;
                }
            };
            let command = session.write().toggle_dictation();
            match command {
                DictationCommand::Start { session: id, silence_timeout } => {
                    start_dictation(session, recognizer, input_ref, id, silence_timeout)
                }
                DictationCommand::Stop => recognizer.stop(),
                DictationCommand::Ignored => {}
            }
        }
    };

    let placeholder = if listening {
        "Listening..."
    } else {
        "Ask the archive anything..."
    };
    let mic_class = if listening { "mic-button listening" } else { "mic-button" };
    let mic_title = if !dictation_available {
        "Voice input is not supported here"
    } else if listening {
        "Stop dictation"
    } else {
        "Dictate your question"
    };
    let send_class = if can_send { "send-button" } else { "send-button disabled" };

    rsx! {
        div { class: "w-full px-4 pb-5 pt-2",
            div { class: "relative max-w-3xl mx-auto",
                div { class: "glass-input flex items-center gap-2 pr-2",
                    input {
                        r#type: "text",
                        class: "flex-1 chat-input",
                        placeholder: "{placeholder}",
                        value: "{draft}",
                        disabled: is_pending,
                        oninput: move |evt| session.write().set_draft(evt.value()),
                        onkeydown: handle_keydown,
                        onmounted: move |evt| input_ref.set(Some(evt.data())),
                    }

                    button {
                        class: "{mic_class}",
                        title: "{mic_title}",
                        disabled: !dictation_available || is_pending,
                        onclick: handle_mic,
                        if listening { "■" } else { "🎤" }
                    }

                    button {
                        class: "{send_class}",
                        title: "Send (Enter)",
                        disabled: !can_send,
                        onclick: handle_send,
                        "➤"
                    }
                }

                p { class: "input-hint", "Enter to send" }
            }
        }
    }
}
