use std::rc::Rc;

use ::common::{Carousel, DashboardCatalog, Timeframe};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub catalog: Rc<DashboardCatalog>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let sidebar = &props.catalog.sidebar;
    let timeframe = use_state(|| Timeframe::Day);
    let highlight = use_state(|| Carousel::new(sidebar.highlights_for(Timeframe::Day).len()));
    let request = use_state(|| Carousel::new(sidebar.requests.len()));

    let next_highlight = {
        let highlight = highlight.clone();
        Callback::from(move |_: MouseEvent| highlight.set(highlight.next()))
    };

    let arrow_highlight = {
        let next_highlight = next_highlight.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            next_highlight.emit(e);
        })
    };

    let next_request = {
        let request = request.clone();
        Callback::from(move |_| request.set(request.next()))
    };

    let highlights = sidebar.highlights_for(*timeframe);
    let completed = sidebar.completed_count();

    html! {
        <aside class="flex flex-col gap-6">
            <section class="flex flex-col gap-3">
                <div class="flex items-center justify-between">
                    <h2 class="font-semibold">{"Highlights"}</h2>
                    <div class="join">
                        { for Timeframe::ALL.iter().map(|tf| {
                            let tf = *tf;
                            let onclick = {
                                let timeframe = timeframe.clone();
                                let highlight = highlight.clone();
                                let len = sidebar.highlights_for(tf).len();
                                Callback::from(move |_| {
                                    log::debug!("Highlight timeframe switched to {}", tf);
                                    timeframe.set(tf);
                                    highlight.set(highlight.reset(len));
                                })
                            };
                            html! {
                                <button class={classes!("btn", "btn-xs", "join-item", (*timeframe == tf).then_some("btn-active"))}
                                    onclick={onclick}>
                                    {tf.short()}
                                </button>
                            }
                        }) }
                    </div>
                </div>
                if let Some(current) = highlight.current(highlights) {
                    <div class="card bg-base-100 shadow-sm cursor-pointer" onclick={next_highlight}>
                        <div class="card-body gap-2">
                            <div class="flex items-center justify-between">
                                <span class="text-xl font-bold">{&current.value}</span>
                                <span class="badge badge-success badge-outline">{&current.badge}</span>
                            </div>
                            <div class="flex items-center justify-between">
                                <p class="text-sm text-base-content/70">{&current.description}</p>
                                <button class="btn btn-ghost btn-xs btn-circle" onclick={arrow_highlight}>
                                    <i class="fas fa-arrow-right"></i>
                                </button>
                            </div>
                        </div>
                    </div>
                }
            </section>

            <section class="flex flex-col gap-3">
                <h2 class="font-semibold">{"Tags"}</h2>
                <div class="flex flex-wrap gap-2">
                    { for sidebar.tags.iter().map(|tag| html! {
                        <span class="badge badge-ghost">{tag}</span>
                    }) }
                </div>
            </section>

            <section class="flex flex-col gap-3">
                <div class="flex items-center justify-between">
                    <h2 class="font-semibold">{"Requests"}</h2>
                    <span class="text-sm text-base-content/60">
                        {format!("{}/{}", completed, sidebar.requests.len())}
                    </span>
                </div>
                <progress class="progress progress-success w-full" value={format!("{:.0}", sidebar.completion_percent())} max="100"></progress>
                if let Some(current) = request.current(&sidebar.requests) {
                    <div class="card bg-base-100 shadow-sm cursor-pointer" onclick={next_request}>
                        <div class="card-body gap-1">
                            <div class="flex items-center justify-between">
                                <h3 class="font-medium">{&current.title}</h3>
                                <span class={classes!("badge", "badge-sm", format!("status-{}", current.status.css_class()))}>
                                    {current.status.label()}
                                </span>
                            </div>
                            <p class="text-sm text-base-content/70">{&current.description}</p>
                        </div>
                    </div>
                }
            </section>
        </aside>
    }
}
