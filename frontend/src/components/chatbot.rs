use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::config;
use crate::models::FaqItem;

pub const TYPING_DELAY_MS: u32 = 800;
pub const GREETING: &str =
    "Hello! I'm your AI Wedding Assistant. How can I help you plan your dream day?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: usize,
    pub sender: Sender,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatTranscript {
    pub messages: Vec<ChatMessage>,
    pub typing: bool,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            typing: false,
        };
        transcript.push(Sender::Bot, GREETING);
        transcript
    }
}

impl ChatTranscript {
    fn push(&mut self, sender: Sender, text: &str) {
        let id = self.messages.len();
        self.messages.push(ChatMessage {
            id,
            sender,
            text: text.to_string(),
        });
    }

    pub fn ask(&mut self, question: &str) {
        self.push(Sender::User, question);
        self.typing = true;
    }

    pub fn answer(&mut self, answer: &str) {
        self.typing = false;
        self.push(Sender::Bot, answer);
    }
}

pub enum ChatAction {
    Ask(String),
    Answer(String),
}

impl Reducible for ChatTranscript {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ChatAction::Ask(question) => next.ask(&question),
            ChatAction::Answer(answer) => next.answer(&answer),
        }
        Rc::new(next)
    }
}

/// Free-text questions are handed off to WhatsApp; blank input goes nowhere.
pub fn handoff_link(input: &str) -> Option<String> {
    let text = input.trim();
    if text.is_empty() {
        None
    } else {
        Some(config::whatsapp_link(input))
    }
}

/// Reply timers still owed to the transcript. A handle is released only
/// after its timer has fired, since dropping a `Timeout` cancels it.
pub struct PendingReplies<H> {
    entries: Vec<(Rc<Cell<bool>>, H)>,
}

impl<H> Default for PendingReplies<H> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<H> PendingReplies<H> {
    pub fn track(&mut self, fired: Rc<Cell<bool>>, handle: H) {
        self.entries.retain(|(done, _)| !done.get());
        self.entries.push((fired, handle));
    }
}

#[derive(Properties, PartialEq)]
pub struct ChatbotProps {
    pub faqs: Vec<FaqItem>,
}

#[function_component(Chatbot)]
pub fn chatbot(props: &ChatbotProps) -> Html {
    let is_open = use_state(|| false);
    let transcript = use_reducer(ChatTranscript::default);
    let input = use_state(String::new);
    let pending_replies = use_mut_ref(PendingReplies::<Timeout>::default);
    let end_ref = use_node_ref();

    {
        let end_ref = end_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(end) = end_ref.cast::<web_sys::Element>() {
                    let mut options = ScrollIntoViewOptions::new();
                    options.behavior(ScrollBehavior::Smooth);
                    end.scroll_into_view_with_scroll_into_view_options(&options);
                }
                || ()
            },
            (transcript.messages.len(), transcript.typing, *is_open),
        );
    }

    let open = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(true))
    };
    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(false))
    };

    let send_free_text = {
        let input = input.clone();
        Callback::from(move |_: ()| {
            if let Some(link) = handoff_link(&input) {
                input.set(String::new());
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.open_with_url_and_target(&link, "_blank") {
                        log::error!("Failed to open WhatsApp: {:?}", e);
                    }
                }
            }
        })
    };

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            input.set(target.value());
        })
    };
    let on_keypress = {
        let send_free_text = send_free_text.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                send_free_text.emit(());
            }
        })
    };

    let options = props.faqs.iter().map(|faq| {
        let onclick = {
            let transcript = transcript.clone();
            let pending_replies = pending_replies.clone();
            let faq = faq.clone();
            Callback::from(move |_: MouseEvent| {
                transcript.dispatch(ChatAction::Ask(faq.question.clone()));

                let transcript = transcript.clone();
                let answer = faq.answer.clone();
                let fired = Rc::new(Cell::new(false));
                let flag = fired.clone();
                let timer = Timeout::new(TYPING_DELAY_MS, move || {
                    flag.set(true);
                    transcript.dispatch(ChatAction::Answer(answer));
                });
                pending_replies.borrow_mut().track(fired, timer);
            })
        };
        html! {
            <button key={faq.id.to_string()} class="chat-option" {onclick}>{ &faq.question }</button>
        }
    });

    html! {
        <>
            <button
                class={classes!("chat-launcher", is_open.then(|| "hidden"))}
                onclick={open}
                aria-label="Open chat"
            >
                {"💬"}
                <span class="chat-online-dot"></span>
            </button>
            if *is_open {
                <div class="chat-panel">
                    <div class="chat-header">
                        <div class="chat-identity">
                            <div class="chat-avatar">{"🤖"}</div>
                            <div>
                                <h3>{"DC AI ✨"}</h3>
                                <span class="chat-status">{"Online"}</span>
                            </div>
                        </div>
                        <button class="chat-close" onclick={close}>{"✕"}</button>
                    </div>
                    <div class="chat-messages">
                        { for transcript.messages.iter().map(|msg| html! {
                            <div
                                key={msg.id}
                                class={classes!("chat-row", (msg.sender == Sender::User).then(|| "from-user"))}
                            >
                                <div class="chat-bubble">{ &msg.text }</div>
                            </div>
                        }) }
                        if transcript.typing {
                            <div class="chat-row">
                                <div class="chat-bubble typing">
                                    <span></span><span></span><span></span>
                                </div>
                            </div>
                        }
                        <div ref={end_ref}></div>
                    </div>
                    <div class="chat-suggestions">
                        <p>{"✨ AI Suggestions"}</p>
                        <div class="chat-options">{ for options }</div>
                    </div>
                    <div class="chat-input-row">
                        <input
                            type="text"
                            value={(*input).clone()}
                            oninput={on_input}
                            onkeypress={on_keypress}
                            placeholder="Ask anything or chat on WhatsApp..."
                        />
                        <button
                            class="chat-send"
                            disabled={input.trim().is_empty()}
                            onclick={Callback::from(move |_: MouseEvent| send_free_text.emit(()))}
                        >
                            {"➤"}
                        </button>
                    </div>
                </div>
            }
            <style>
                {r#"
                .chat-launcher {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    z-index: 50;
                    width: 4rem;
                    height: 4rem;
                    border: none;
                    border-radius: 50%;
                    background: linear-gradient(to right, var(--gold-400), var(--gold-600));
                    color: #fff;
                    font-size: 1.75rem;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
                    cursor: pointer;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .chat-launcher:hover {
                    transform: scale(1.1);
                }
                .chat-launcher.hidden {
                    opacity: 0;
                    pointer-events: none;
                }
                .chat-online-dot {
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 50%;
                    background: #22c55e;
                    animation: pulse 2s infinite;
                }
                .chat-panel {
                    position: fixed;
                    z-index: 60;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    width: 380px;
                    height: 600px;
                    max-height: calc(100vh - 3rem);
                    background: #fff;
                    border: 1px solid #f3f4f6;
                    border-radius: 1rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    display: flex;
                    flex-direction: column;
                    overflow: hidden;
                }
                @media (max-width: 768px) {
                    .chat-panel {
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        max-height: none;
                        border-radius: 0;
                    }
                }
                .chat-header {
                    background: var(--charcoal);
                    padding: 1rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .chat-identity {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .chat-identity h3 {
                    color: #fff;
                    font-family: var(--font-serif);
                    margin: 0;
                    font-size: 1rem;
                }
                .chat-avatar {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: linear-gradient(135deg, var(--gold-400), var(--gold-600));
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .chat-status {
                    font-size: 0.65rem;
                    color: #4ade80;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .chat-close {
                    background: rgba(255, 255, 255, 0.1);
                    border: none;
                    color: #9ca3af;
                    border-radius: 50%;
                    padding: 0.5rem 0.7rem;
                    cursor: pointer;
                }
                .chat-messages {
                    flex: 1;
                    overflow-y: auto;
                    padding: 1rem;
                    background: #f9fafb;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .chat-row {
                    display: flex;
                    justify-content: flex-start;
                }
                .chat-row.from-user {
                    justify-content: flex-end;
                }
                .chat-bubble {
                    max-width: 85%;
                    padding: 0.75rem;
                    border-radius: 1rem 1rem 1rem 0;
                    font-size: 0.875rem;
                    line-height: 1.5;
                    background: #fff;
                    color: #1f2937;
                    border: 1px solid #f3f4f6;
                }
                .chat-row.from-user .chat-bubble {
                    background: var(--charcoal);
                    color: #fff;
                    border-radius: 1rem 1rem 0 1rem;
                }
                .chat-bubble.typing {
                    display: flex;
                    gap: 0.25rem;
                }
                .chat-bubble.typing span {
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: #9ca3af;
                    animation: bounce 1s infinite;
                }
                .chat-bubble.typing span:nth-child(2) { animation-delay: 150ms; }
                .chat-bubble.typing span:nth-child(3) { animation-delay: 300ms; }
                .chat-suggestions {
                    padding: 0.75rem;
                    border-top: 1px solid #f3f4f6;
                    max-height: 150px;
                    overflow-y: auto;
                }
                .chat-suggestions p {
                    font-size: 0.65rem;
                    text-transform: uppercase;
                    color: #9ca3af;
                    letter-spacing: 0.15em;
                    font-weight: 700;
                    margin: 0 0 0.5rem;
                }
                .chat-options {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .chat-option {
                    padding: 0.4rem 0.75rem;
                    background: #f9fafb;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    font-size: 0.75rem;
                    text-align: left;
                    cursor: pointer;
                }
                .chat-option:hover {
                    background: var(--gold-400);
                    border-color: var(--gold-400);
                    color: #fff;
                }
                .chat-input-row {
                    display: flex;
                    gap: 0.5rem;
                    padding: 1rem;
                    border-top: 1px solid #f3f4f6;
                }
                .chat-input-row input {
                    flex: 1;
                    background: #f3f4f6;
                    border: none;
                    border-radius: 999px;
                    padding: 0.75rem 1rem;
                    font-size: 0.875rem;
                }
                .chat-send {
                    background: #22c55e;
                    color: #fff;
                    border: none;
                    border-radius: 50%;
                    width: 2.75rem;
                    cursor: pointer;
                }
                .chat-send:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfired_replies_are_never_released() {
        let mut pending = PendingReplies::default();
        let flags: Vec<Rc<Cell<bool>>> = (0..12).map(|_| Rc::new(Cell::new(false))).collect();
        for (i, flag) in flags.iter().enumerate() {
            pending.track(flag.clone(), i);
        }
        // a dozen quick clicks, none answered yet
        assert_eq!(pending.entries.len(), 12);

        for flag in &flags[..10] {
            flag.set(true);
        }
        pending.track(Rc::new(Cell::new(false)), 12);
        assert_eq!(pending.entries.len(), 3);
        let kept: Vec<usize> = pending.entries.iter().map(|(_, h)| *h).collect();
        assert_eq!(kept, [10, 11, 12]);
    }

    #[test]
    fn starts_with_the_greeting() {
        let transcript = ChatTranscript::default();
        assert_eq!(transcript.messages.len(), 1);
        assert_eq!(transcript.messages[0].sender, Sender::Bot);
        assert_eq!(transcript.messages[0].text, GREETING);
        assert!(!transcript.typing);
    }

    #[test]
    fn question_then_answer_after_typing() {
        let mut transcript = ChatTranscript::default();
        transcript.ask("Do you offer drone services?");
        assert!(transcript.typing);
        assert_eq!(transcript.messages.last().map(|m| m.sender), Some(Sender::User));

        transcript.answer("Yes, drone coverage is available as an add-on.");
        assert!(!transcript.typing);
        let senders: Vec<Sender> = transcript.messages.iter().map(|m| m.sender).collect();
        assert_eq!(senders, [Sender::Bot, Sender::User, Sender::Bot]);
        let ids: Vec<usize> = transcript.messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, [0, 1, 2]);
    }

    #[test]
    fn reducer_appends_in_order() {
        let state = Rc::new(ChatTranscript::default())
            .reduce(ChatAction::Ask("What is your payment policy?".to_string()))
            .reduce(ChatAction::Answer("We take a 25% advance to block the dates.".to_string()));
        assert_eq!(state.messages.len(), 3);
        assert_eq!(state.messages[2].text, "We take a 25% advance to block the dates.");
    }

    #[test]
    fn free_text_goes_to_whatsapp_encoded() {
        assert_eq!(handoff_link("   "), None);
        assert_eq!(handoff_link(""), None);
        assert_eq!(
            handoff_link("Are you free on 12/12?").as_deref(),
            Some("https://wa.me/919818868753?text=Are%20you%20free%20on%2012%2F12%3F")
        );
    }
}
