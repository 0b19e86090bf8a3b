use common::chat_message::{CHAT_GREETING, ChatMessage, ChatRole};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_communication_icons::MdChat, md_content_icons::MdSend, md_navigation_icons::MdClose}};

use crate::api::chat_api::ask_question;

fn greeting() -> ChatMessage {
    ChatMessage {
        id: 0,
        role: ChatRole::Bot,
        content: CHAT_GREETING.to_string(),
        sources: vec![],
        confidence: None,
    }
}

#[component]
pub fn ChatPanel() -> Element {
    let mut is_open = use_signal(|| false);
    let mut is_typing = use_signal(|| false);
    let mut input = use_signal(String::new);
    let mut messages: Signal<Vec<ChatMessage>> = use_signal(|| vec![greeting()]);

    let mut send = move || {
        let question = input.read().trim().to_string();
        if question.is_empty() || is_typing() {
            return;
        }
        let next_id = messages.read().len() as u64;
        messages.write().push(ChatMessage {
            id: next_id,
            role: ChatRole::User,
            content: question.clone(),
            sources: vec![],
            confidence: None,
        });
        input.set(String::new());
        is_typing.set(true);
        spawn(async move {
            let answer = ask_question(question).await;
            let next_id = messages.read().len() as u64;
            match answer {
                Ok(Some(answer)) => messages.write().push(ChatMessage {
                    id: next_id,
                    role: ChatRole::Bot,
                    content: answer.content,
                    sources: answer.sources,
                    confidence: Some(answer.confidence),
                }),
                Ok(None) => {}
                Err(e) => {
                    dioxus::logger::tracing::error!("Chat request failed: {e}");
                    messages.write().push(ChatMessage {
                        id: next_id,
                        role: ChatRole::Bot,
                        content: "Sorry, I couldn't answer that right now. Please try again.".to_string(),
                        sources: vec![],
                        confidence: None,
                    });
                }
            }
            is_typing.set(false);
        });
    };

    rsx! {
        if is_open() {
            div {
                class: "x-chat-panel",
                div {
                    class: "x-chat-header",
                    b { "Ask about your document" }
                    button {
                        class: "x-icon-button",
                        title: "Close",
                        onclick: move |_| is_open.set(false),
                        Icon { icon: MdClose, style: "width: 18px; height: 18px;" }
                    }
                }
                div {
                    class: "x-chat-messages",
                    for message in messages.read().iter().cloned() {
                        ChatBubble { key: "{message.id}", message }
                    }
                    if is_typing() {
                        div { class: "x-chat-bubble x-chat-bubble-bot x-chat-typing", "..." }
                    }
                }
                div {
                    class: "x-chat-input-row",
                    input {
                        r#type: "text",
                        placeholder: "Ask about your medical document...",
                        disabled: is_typing(),
                        value: "{input}",
                        oninput: move |e| input.set(e.value()),
                        onkeydown: move |e| {
                            if e.key() == Key::Enter {
                                send();
                            }
                        },
                    }
                    button {
                        class: "x-icon-button",
                        title: "Send",
                        disabled: is_typing() || input.read().trim().is_empty(),
                        onclick: move |_| send(),
                        Icon { icon: MdSend, style: "width: 18px; height: 18px;" }
                    }
                }
            }
        }
        button {
            class: "x-chat-toggle",
            title: "Ask a question",
            onclick: move |_| is_open.toggle(),
            if is_open() {
                Icon { icon: MdClose, style: "width: 24px; height: 24px;" }
            } else {
                Icon { icon: MdChat, style: "width: 24px; height: 24px;" }
            }
        }
    }
}

#[component]
fn ChatBubble(message: ChatMessage) -> Element {
    let class = match message.role {
        ChatRole::User => "x-chat-bubble x-chat-bubble-user",
        ChatRole::Bot => "x-chat-bubble x-chat-bubble-bot",
    };
    let confidence = message.confidence.map(|c| format!("{}% confident", (c * 100.0).round() as u32));

    rsx! {
        div {
            class: "{class}",
            div { "{message.content}" }
            if !message.sources.is_empty() {
                div {
                    class: "x-chat-sources",
                    for source in message.sources.iter() {
                        a {
                            key: "{source.url}",
                            href: "{source.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{source.label}"
                        }
                    }
                }
            }
            if let Some(confidence) = confidence {
                div { class: "x-chat-confidence", "{confidence}" }
            }
        }
    }
}
