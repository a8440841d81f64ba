use std::rc::Rc;

use ::common::{Assistant, ExplainTarget, MessageKind, PendingReply, ReportChat};
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::settings::get_settings;

pub enum ChatAction {
    Send(String),
    Explain(ExplainTarget),
    Deliver(PendingReply, Rc<Assistant>),
    AddTab,
    CloseTab(u32),
    Select(u32),
}

/// Reducer state of the report side chat.
#[derive(Default, PartialEq)]
pub struct ChatState(pub ReportChat);

impl Reducible for ChatState {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut chat = self.0.clone();
        match action {
            ChatAction::Send(text) => {
                chat.send(&text);
            }
            ChatAction::Explain(target) => {
                chat.explain(&target);
            }
            ChatAction::Deliver(reply, assistant) => {
                chat.deliver(&reply, &assistant);
            }
            ChatAction::AddTab => {
                let id = chat.add_tab();
                log::debug!("Opened chat tab {}", id);
            }
            ChatAction::CloseTab(id) => {
                if !chat.close_tab(id) {
                    log::debug!("Chat tab {} kept open", id);
                }
            }
            ChatAction::Select(id) => chat.select(id),
        }
        Rc::new(Self(chat))
    }
}

/// Posts the prompt for a clicked value and schedules the answer.
pub fn explain(chat: &UseReducerHandle<ChatState>, assistant: Rc<Assistant>, target: ExplainTarget) {
    log::info!("Explaining {} ({:?})", target.value, target.context);
    let reply = PendingReply { tab: chat.0.active(), query: target.value.clone() };
    chat.dispatch(ChatAction::Explain(target));
    schedule_reply(chat.dispatcher(), reply, assistant);
}

fn schedule_reply(dispatcher: UseReducerDispatcher<ChatState>, reply: PendingReply, assistant: Rc<Assistant>) {
    let delay = get_settings().reply_delay_ms;
    log::trace!("Assistant replies to tab {} in {} ms", reply.tab, delay);
    Timeout::new(delay, move || dispatcher.dispatch(ChatAction::Deliver(reply, assistant))).forget();
}

#[derive(Properties, PartialEq)]
pub struct ChatPanelProps {
    pub chat: UseReducerHandle<ChatState>,
    pub assistant: Rc<Assistant>,
}

#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    let input = use_state(String::new);
    let chat = &props.chat;

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let element: HtmlInputElement = e.target_unchecked_into();
            input.set(element.value());
        })
    };

    let send = {
        let input = input.clone();
        let chat = chat.clone();
        let assistant = props.assistant.clone();
        Callback::from(move |_: ()| {
            let text = input.trim().to_string();
            if text.is_empty() {
                return;
            }
            let reply = PendingReply { tab: chat.0.active(), query: text.clone() };
            chat.dispatch(ChatAction::Send(text));
            schedule_reply(chat.dispatcher(), reply, assistant.clone());
            input.set(String::new());
        })
    };

    let on_keydown = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                send.emit(());
            }
        })
    };

    let on_add = {
        let chat = chat.clone();
        Callback::from(move |_| chat.dispatch(ChatAction::AddTab))
    };

    let messages = chat.0.active_tab().map(|tab| tab.messages.clone()).unwrap_or_default();

    html! {
        <aside class="card bg-base-100 shadow-sm h-full">
            <div class="card-body gap-3 p-4">
                <div class="flex items-center justify-between">
                    <h2 class="font-semibold">{"AI Assistant"}</h2>
                    <button class="btn btn-ghost btn-sm btn-circle" onclick={on_add}>
                        <i class="fas fa-plus"></i>
                    </button>
                </div>

                <div class="tabs tabs-boxed tabs-sm">
                    { for chat.0.tabs().iter().map(|tab| {
                        let id = tab.id;
                        let on_select = {
                            let chat = chat.clone();
                            Callback::from(move |_| chat.dispatch(ChatAction::Select(id)))
                        };
                        let on_close = {
                            let chat = chat.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.stop_propagation();
                                chat.dispatch(ChatAction::CloseTab(id));
                            })
                        };
                        html! {
                            <a key={id} class={classes!("tab", "gap-2", (chat.0.active() == id).then_some("tab-active"))} onclick={on_select}>
                                <span>{&tab.title}</span>
                                <button class="btn btn-ghost btn-xs btn-circle" onclick={on_close}>
                                    <i class="fas fa-times"></i>
                                </button>
                            </a>
                        }
                    }) }
                </div>

                <div class="flex-1 flex flex-col gap-3 overflow-y-auto min-h-64">
                    { for messages.iter().map(|message| match message.kind {
                        MessageKind::Ai => html! {
                            <div key={message.id.clone()} class="flex gap-2">
                                <div class="avatar placeholder">
                                    <div class="w-6 h-6 rounded-full bg-primary text-primary-content text-xs">
                                        <i class="fas fa-magic"></i>
                                    </div>
                                </div>
                                <div class="bg-base-200 rounded-box p-3 text-sm flex flex-col gap-1">
                                    { for message.content.split('\n').map(|line| html! { <p>{line}</p> }) }
                                </div>
                            </div>
                        },
                        _ => html! {
                            <div key={message.id.clone()} class="chat chat-end">
                                <div class="chat-bubble chat-bubble-primary text-sm">{&message.content}</div>
                            </div>
                        },
                    }) }
                </div>

                <div class="join w-full">
                    <input type="text" class="input input-bordered input-sm join-item flex-1"
                        placeholder="What do you want the agent to do?"
                        value={(*input).clone()} oninput={on_input} onkeydown={on_keydown} />
                    <button class="btn btn-neutral btn-sm join-item" disabled={input.trim().is_empty()}
                        onclick={send.reform(|_: MouseEvent| ())}>
                        <i class="fas fa-arrow-up"></i>
                    </button>
                </div>
            </div>
        </aside>
    }
}
