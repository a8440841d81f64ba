use std::rc::Rc;

use ::common::chat::avatar_for;
use ::common::{ChatMessage, DashboardCatalog, MessageKind};
use yew::prelude::*;
use yew_router::prelude::*;

use super::chart::ChartCard;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ChatPageProps {
    pub id: String,
}

/// Conversation behind a feed card, with the chart it produced.
#[function_component(ChatPage)]
pub fn chat_page(props: &ChatPageProps) -> Html {
    let catalog = use_context::<Rc<DashboardCatalog>>();
    let navigator = use_navigator();

    let Some(catalog) = catalog else {
        log::error!("Chat page rendered without a catalog");
        return html! {};
    };

    let on_back = Callback::from(move |_| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Feed);
        }
    });

    let content = catalog.chats.content_for(&props.id);
    let title = catalog
        .feed
        .item(&props.id)
        .map(|item| item.title.clone())
        .unwrap_or_else(|| "New chat".to_string());
    let avatars = &catalog.team_avatars;

    let mut user_index = 0;
    let messages: Vec<Html> = content
        .messages
        .iter()
        .map(|message| {
            let avatar = if message.is_from_user() {
                let avatar = avatar_for(avatars, user_index);
                user_index += 1;
                avatar
            } else {
                None
            };
            message_view(message, avatar)
        })
        .collect();

    html! {
        <div class="flex flex-col gap-4">
            <button class="btn btn-ghost btn-sm self-start gap-2" onclick={on_back}>
                <i class="fas fa-arrow-left"></i>
                {"Back to Feed"}
            </button>
            <div class="flex flex-col xl:flex-row gap-6">
                <div class="flex-1 flex flex-col gap-4 min-w-0">
                    <div class="flex items-center justify-between">
                        <h1 class="text-2xl font-bold">{title}</h1>
                        <div class="avatar-group -space-x-3">
                            { for avatars.iter().map(|url| html! {
                                <div class="avatar"><div class="w-8"><img src={url.clone()} alt="team member" /></div></div>
                            }) }
                        </div>
                    </div>
                    <div class="card bg-base-100 shadow-sm">
                        <div class="card-body gap-4">
                            { for messages }
                        </div>
                    </div>
                    <ChartCard descriptor={content.chart.clone()} />
                    <div class="join w-full">
                        <button class="btn join-item"><i class="fas fa-plus"></i></button>
                        <input type="text" class="input input-bordered join-item flex-1" placeholder="Ask a follow-up..." />
                        <button class="btn btn-neutral join-item"><i class="fas fa-arrow-up"></i></button>
                    </div>
                </div>
                <div class="w-full xl:w-72 flex-none flex flex-col gap-4">
                    { for ["Summary", "Artifacts", "Data"].iter().map(|panel| html! {
                        <section class="card bg-base-100 shadow-sm">
                            <div class="card-body">
                                <h2 class="card-title text-base">{*panel}</h2>
                            </div>
                        </section>
                    }) }
                </div>
            </div>
        </div>
    }
}

fn message_view(message: &ChatMessage, avatar: Option<&str>) -> Html {
    match message.kind {
        MessageKind::Ai => html! {
            <div class="chat chat-start" key={message.id.clone()}>
                <div class="chat-image avatar placeholder">
                    <div class="w-8 rounded-full bg-neutral text-neutral-content"><i class="fas fa-robot"></i></div>
                </div>
                <div class="chat-bubble chat-bubble-neutral">{&message.content}</div>
            </div>
        },
        MessageKind::User | MessageKind::UserMention => html! {
            <div class="chat chat-end" key={message.id.clone()}>
                if let Some(url) = avatar {
                    <div class="chat-image avatar"><div class="w-8 rounded-full"><img src={url.to_string()} alt="user" /></div></div>
                }
                <div class="chat-bubble">
                    {&message.content}
                    if let Some(mention) = &message.mention {
                        {" "}
                        <span class="badge badge-primary badge-sm">{mention}</span>
                    }
                </div>
            </div>
        },
    }
}
