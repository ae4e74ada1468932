//! RAG chat panel - View Component

use super::model::send_query;
use super::view_model::RagChatVm;
use crate::shared::date_utils::format_time;
use crate::shared::icons::icon;
use crate::shared::markdown::render_markdown;
use contracts::domain::a001_rag_chat::aggregate::SUGGESTED_QUESTIONS;
use contracts::domain::a001_rag_chat::ChatMessage;
use leptos::prelude::*;
use thaw::*;

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.is_user();
    let row_class = format!("message {}", message.role.as_str());
    let bubble_class = if message.is_error {
        "message-bubble message-bubble--error"
    } else {
        "message-bubble"
    };
    let avatar = if is_user { icon("user") } else { icon("bot") };
    let time = format_time(&message.created_at);
    let sources = message.sources.clone();
    // answers arrive as Markdown; user text and error notes stay plain
    let body = if is_user || message.is_error {
        view! { <div class="message-text">{message.content.clone()}</div> }.into_any()
    } else {
        let html = render_markdown(&message.content);
        view! { <div class="message-text message-text--markdown" inner_html=html></div> }.into_any()
    };

    view! {
        <div class=row_class>
            <div class="message-avatar">{avatar}</div>
            <div class="message-content">
                <div class=bubble_class>{body}</div>
                {message.has_sources().then(|| view! {
                    <div class="message-sources">
                        <span class="message-sources__label">"Sources:"</span>
                        {sources
                            .into_iter()
                            .map(|source| view! { <span class="source-tag">{source}</span> })
                            .collect_view()}
                    </div>
                })}
                <div class="message-time">{time}</div>
            </div>
        </div>
    }
}

#[component]
pub fn RagChatPanel() -> impl IntoView {
    let vm = RagChatVm::new();
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = ComponentRef::<TextareaRef>::new();

    let scroll_to_bottom = move || {
        if let Some(container) = messages_ref.get_untracked() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    // follow new messages and the loading bubble
    Effect::new(move |_| {
        vm.transcript.with(|t| t.messages().len());
        vm.is_loading.track();
        scroll_to_bottom();
    });

    let handle_send = Callback::new(move |_: ()| {
        let Some(query) = vm.begin_send() else {
            return;
        };
        log::debug!("chat query: {} chars", query.len());

        wasm_bindgen_futures::spawn_local(async move {
            match send_query(query).await {
                Ok(response) => {
                    log::info!("chat answer with {} source(s)", response.sources.len());
                    vm.transcript.update(|t| {
                        t.push_assistant(response);
                    });
                }
                Err(e) => {
                    log::error!("Error sending message: {}", e);
                    vm.transcript.update(|t| {
                        t.push_error(&e.to_string());
                    });
                }
            }
            vm.is_loading.set(false);
        });
    });

    let pick_question = move |question: &'static str| {
        vm.input.set(question.to_string());
        if let Some(textarea) = input_ref.get_untracked() {
            textarea.focus();
        }
    };

    view! {
        <div class="chat-container">
            <div class="chat-header">
                <h2>"Chat with your documents"</h2>
                <Button
                    appearance=ButtonAppearance::Secondary
                    class="clear-chat-btn"
                    disabled=vm.is_loading
                    on_click=move |_| vm.clear()
                >
                    {icon("trash")}
                    " Clear Chat"
                </Button>
            </div>

            <div class="messages-container" node_ref=messages_ref>
                <For
                    each=move || vm.transcript.with(|t| t.messages().to_vec())
                    key=|msg| msg.id
                    let:msg
                >
                    <MessageBubble message=msg />
                </For>

                <Show when=move || vm.is_loading.get()>
                    <div class="message assistant">
                        <div class="message-avatar">{icon("bot")}</div>
                        <div class="message-content">
                            <div class="message-bubble loading">
                                <Spinner size=SpinnerSize::Tiny />
                                <span>"Analyzing documents and generating response..."</span>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>

            <Show when=move || vm.is_fresh()>
                <div class="suggested-questions">
                    <h4>"Suggested questions:"</h4>
                    <div class="question-chips">
                        {SUGGESTED_QUESTIONS
                            .iter()
                            .copied()
                            .map(|question| {
                                view! {
                                    <button
                                        class="question-chip"
                                        on:click=move |_| pick_question(question)
                                    >
                                        {question}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>

            <div class="input-container">
                <div class="chat-input">
                    <Textarea
                        value=vm.input
                        comp_ref=input_ref
                        placeholder="Ask a question about your documents... (Shift+Enter for new line)"
                        disabled=vm.is_loading
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                handle_send.run(());
                            }
                        }
                    />
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    class="send-button"
                    disabled=Signal::derive(move || !vm.can_send())
                    on_click=move |_| handle_send.run(())
                >
                    {icon("send")}
                </Button>
            </div>
        </div>
    }
}
