use std::rc::Rc;

use ::common::{DashboardCatalog, FeedItem, FilterSet, LikeSet};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::sidebar::Sidebar;
use crate::common::toast::ToastContext;
use crate::Route;

/// Feed and sidebar side by side.
#[function_component(FeedPage)]
pub fn feed_page() -> Html {
    let Some(catalog) = use_context::<Rc<DashboardCatalog>>() else {
        log::error!("Feed page rendered without a catalog");
        return html! {};
    };

    html! {
        <div class="flex flex-col lg:flex-row gap-6">
            <div class="flex-1 min-w-0">
                <Feed catalog={catalog.clone()} />
            </div>
            <div class="w-full lg:w-80 flex-none">
                <Sidebar {catalog} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeedProps {
    pub catalog: Rc<DashboardCatalog>,
}

#[function_component(Feed)]
pub fn feed(props: &FeedProps) -> Html {
    let filters = use_state(FilterSet::default);
    let likes = use_state(LikeSet::default);
    let new_chat = use_state(String::new);
    let toast = use_context::<ToastContext>();
    let feed = &props.catalog.feed;

    let on_input = {
        let new_chat = new_chat.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_chat.set(input.value());
        })
    };

    let on_submit = {
        let new_chat = new_chat.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let text = new_chat.trim().to_string();
            if text.is_empty() {
                return;
            }
            log::info!("Starting new chat: {}", text);
            if let Some(toast) = &toast {
                toast.show_info(format!("New chat started: {}", text));
            }
            new_chat.set(String::new());
        })
    };

    let visible: Vec<&FeedItem> = feed.visible(&filters).collect();
    log::trace!("Feed shows {} of {} items", visible.len(), feed.items.len());

    html! {
        <div class="flex flex-col gap-4">
            <div class="flex flex-wrap gap-2">
                { for feed.filters.iter().map(|filter| {
                    let active = filters.is_active(&filter.id);
                    let onclick = {
                        let filters = filters.clone();
                        let id = filter.id.clone();
                        Callback::from(move |_| {
                            log::debug!("Filter clicked: {}", id);
                            filters.set(filters.toggle(&id));
                        })
                    };
                    html! {
                        <button key={filter.id.clone()}
                            class={classes!("btn", "btn-sm", if active { "btn-neutral" } else { "btn-ghost" })}
                            onclick={onclick}>
                            {&filter.label}
                        </button>
                    }
                }) }
            </div>

            <form class="card bg-base-100 shadow-sm" onsubmit={on_submit}>
                <div class="card-body flex-row items-center gap-2 py-3">
                    <input type="text" class="input input-ghost flex-1" placeholder="Start new chat..."
                        value={(*new_chat).clone()} oninput={on_input} />
                    <button type="submit" class="btn btn-circle btn-sm btn-neutral" disabled={new_chat.trim().is_empty()}>
                        <i class="fas fa-arrow-up"></i>
                    </button>
                </div>
            </form>

            { for visible.into_iter().map(|item| {
                let on_like = {
                    let likes = likes.clone();
                    let id = item.id.clone();
                    Callback::from(move |_| likes.set(likes.toggle(&id)))
                };
                html! {
                    <FeedCard key={item.id.clone()} item={item.clone()}
                        liked={likes.is_liked(&item.id)} likes={likes.likes_for(item)} {on_like} />
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeedCardProps {
    pub item: FeedItem,
    pub liked: bool,
    pub likes: u32,
    pub on_like: Callback<()>,
}

#[function_component(FeedCard)]
pub fn feed_card(props: &FeedCardProps) -> Html {
    let navigator = use_navigator();
    let item = &props.item;

    let open_report = {
        let navigator = navigator.clone();
        let id = item.id.clone();
        Callback::from(move |_| {
            log::debug!("Opening report for feed item {}", id);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Report { id: id.clone() });
            }
        })
    };

    let open_chat = {
        let id = item.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            log::debug!("Opening chat for feed item {}", id);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Chat { id: id.clone() });
            }
        })
    };

    let on_like = {
        let on_like = props.on_like.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_like.emit(());
        })
    };

    html! {
        <div class="card bg-base-100 shadow-sm cursor-pointer hover:shadow-md transition-shadow" onclick={open_report}>
            <div class="card-body flex-row gap-4">
                <div class="avatar placeholder">
                    <div class={classes!("w-10", "h-10", "rounded-full", "bg-neutral", "text-neutral-content", format!("feed-{}", item.kind))}>
                        <span>{item.initial()}</span>
                    </div>
                </div>
                <div class="flex-1 flex flex-col gap-2">
                    <div class="flex items-center gap-2">
                        <h3 class="font-semibold">{&item.title}</h3>
                        <span class="text-xs text-base-content/50">{&item.timestamp}</span>
                    </div>
                    <p class="text-sm text-base-content/70">{&item.description}</p>
                    <div class="flex gap-2">
                        <button class="btn btn-ghost btn-xs gap-1" onclick={open_chat}>
                            <i class="far fa-comment"></i>
                            <span>{item.comments}</span>
                        </button>
                        <button class={classes!("btn", "btn-ghost", "btn-xs", "gap-1", props.liked.then_some("text-error"))} onclick={on_like}>
                            <i class={if props.liked { "fas fa-heart" } else { "far fa-heart" }}></i>
                            <span>{props.likes}</span>
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
