use std::rc::Rc;

use ::common::report::{Engagement, TableRow, TrendChart};
use ::common::{DashboardCatalog, ExplainTarget, Report, ReportComment};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use super::chart::SceneView;
use super::report_chat::{ChatPanel, ChatState, explain};
use crate::common::toast::ToastContext;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ReportPageProps {
    pub id: String,
}

#[function_component(ReportPage)]
pub fn report_page(props: &ReportPageProps) -> Html {
    let catalog = use_context::<Rc<DashboardCatalog>>();
    let navigator = use_navigator();
    let chat = use_reducer(ChatState::default);
    let assistant = use_memo(catalog.clone(), |catalog| {
        catalog.as_ref().map(|c| c.report.assistant.clone()).unwrap_or_default()
    });
    // one copy per catalog, shared by every chat update
    let report = use_memo(catalog, |catalog| {
        catalog.as_ref().map(|c| Rc::new(c.report.clone()))
    });

    let Some(report) = (*report).clone() else {
        log::error!("Report page rendered without a catalog");
        return html! {};
    };
    log::debug!("Showing report for feed item {}", props.id);

    let on_back = Callback::from(move |_| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Feed);
        }
    });

    let on_explain = {
        let chat = chat.clone();
        let assistant = assistant.clone();
        Callback::from(move |target: ExplainTarget| explain(&chat, assistant.clone(), target))
    };

    html! {
        <div class="flex flex-col xl:flex-row gap-6">
            <div class="flex-1 min-w-0 flex flex-col gap-4">
                <button class="btn btn-ghost btn-sm self-start gap-2" onclick={on_back}>
                    <i class="fas fa-arrow-left"></i>
                    {"Back to Feed"}
                </button>
                <ReportBody {report} on_explain={on_explain} />
            </div>
            <div class="w-full xl:w-96 flex-none xl:sticky xl:top-20 self-start">
                <ChatPanel {chat} {assistant} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ClickableValueProps {
    target: ExplainTarget,
    on_explain: Callback<ExplainTarget>,
    #[prop_or_default]
    class: Classes,
}

#[function_component(ClickableValue)]
fn clickable_value(props: &ClickableValueProps) -> Html {
    let onclick = {
        let target = props.target.clone();
        let on_explain = props.on_explain.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_explain.emit(target.clone());
        })
    };
    html! {
        <span class={classes!("link", "link-hover", "decoration-dotted", props.class.clone())}
            title="Click to get explanation" onclick={onclick}>
            {&props.target.value}
        </span>
    }
}

#[derive(Properties, PartialEq)]
struct ReportBodyProps {
    report: Rc<Report>,
    on_explain: Callback<ExplainTarget>,
}

#[function_component(ReportBody)]
fn report_body(props: &ReportBodyProps) -> Html {
    let report = &props.report;
    let on_explain = &props.on_explain;
    let revenue_tab = use_state(|| report.revenue_tabs.first().cloned().unwrap_or_default());

    html! {
        <article class="card bg-base-100 shadow-sm">
            <div class="card-body gap-8">
                <header class="flex flex-col gap-3">
                    <h1 class="text-3xl font-bold">{&report.title}</h1>
                    <div class="flex flex-wrap items-center gap-4 text-sm text-base-content/70">
                        <div class="flex items-center gap-2">
                            <span>{"Authors:"}</span>
                            <div class="avatar-group -space-x-2">
                                { for report.authors.iter().map(|author| html! {
                                    <div class="avatar placeholder">
                                        <div class="w-6 rounded-full text-white text-xs" style={format!("background-color: {}", author.color)}>
                                            <span>{&author.initial}</span>
                                        </div>
                                    </div>
                                }) }
                            </div>
                        </div>
                        <span>{format!("Published: {}", report.published_label())}</span>
                        <span>{format!("Period: {}", report.period)}</span>
                    </div>
                </header>

                <section class="flex flex-col gap-4">
                    <div role="tablist" class="tabs tabs-bordered">
                        { for report.revenue_tabs.iter().map(|tab| {
                            let onclick = {
                                let revenue_tab = revenue_tab.clone();
                                let tab = tab.clone();
                                Callback::from(move |_| revenue_tab.set(tab.clone()))
                            };
                            html! {
                                <a role="tab" class={classes!("tab", (*revenue_tab == *tab).then_some("tab-active"))} onclick={onclick}>{tab}</a>
                            }
                        }) }
                    </div>
                    <div class="flex items-end gap-4">
                        <ClickableValue target={report.headline.clone()} on_explain={on_explain.clone()} class="text-4xl font-bold" />
                        <span class="text-success font-semibold flex items-center gap-1">
                            <i class="fas fa-arrow-trend-up"></i>
                            <ClickableValue target={report.growth.clone()} on_explain={on_explain.clone()} />
                        </span>
                    </div>
                    <RevenueMix report={report.clone()} />
                </section>

                <section class="flex flex-col gap-4">
                    <h2 class="text-xl font-semibold">{"Key Metrics"}</h2>
                    { for report.key_metrics.iter().map(|row| html! {
                        <div class="stats stats-vertical md:stats-horizontal shadow-sm">
                            { for row.iter().map(|metric| html! {
                                <div class="stat">
                                    <div class="stat-title">{&metric.label}</div>
                                    <div class={classes!("stat-value", if metric.large { "text-3xl" } else { "text-2xl" })}>
                                        <ClickableValue target={metric.target()} on_explain={on_explain.clone()} />
                                        if metric.trending {
                                            <i class="fas fa-arrow-trend-up text-success text-base ml-2"></i>
                                        }
                                    </div>
                                    <div class="stat-desc">{&metric.sublabel}</div>
                                </div>
                            }) }
                        </div>
                    }) }
                </section>

                <section class="flex flex-col gap-3">
                    <h2 class="text-xl font-semibold">{"Executive Summary"}</h2>
                    <p>{&report.summary.opening}</p>
                    <div class="alert">
                        <i class="fas fa-lightbulb"></i>
                        <span><strong>{"Key takeaway: "}</strong>{&report.summary.takeaway}</span>
                    </div>
                    <p>{&report.summary.closing}</p>
                </section>

                <section class="flex flex-col gap-4">
                    <h2 class="text-xl font-semibold">{"Performance Trends"}</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        { for report.trends.iter().map(|trend| html! {
                            <TrendCard key={trend.slug.clone()} trend={trend.clone()}
                                quarters={report.quarters.clone()} on_explain={on_explain.clone()} />
                        }) }
                    </div>
                </section>

                <section class="flex flex-col gap-3">
                    <h2 class="text-xl font-semibold">{"Financial Highlights"}</h2>
                    <MetricsTable rows={report.financial_highlights.clone()} on_explain={on_explain.clone()} />
                </section>

                <section class="flex flex-col gap-3">
                    <h2 class="text-xl font-semibold">{"Customer Metrics"}</h2>
                    <p>{&report.customer_metrics_note}</p>
                    <MetricsTable rows={report.customer_metrics.clone()} on_explain={on_explain.clone()} />
                </section>

                <section class="flex flex-col gap-3">
                    <h2 class="text-xl font-semibold">{"Outlook"}</h2>
                    <p>{&report.guidance_intro}</p>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        { for report.guidance.iter().map(|block| html! {
                            <div class="card bg-base-200">
                                <div class="card-body">
                                    <h3 class="card-title text-base">{&block.title}</h3>
                                    <ul class="list-disc list-inside text-sm">
                                        { for block.items.iter().map(|item| html! { <li>{item}</li> }) }
                                    </ul>
                                </div>
                            </div>
                        }) }
                    </div>
                    <p class="text-sm">{&report.capital_allocation}</p>
                </section>

                <EngagementSection report={report.clone()} />

                <section class="flex flex-col gap-3">
                    <h2 class="text-xl font-semibold">{"Related Reports"}</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        { for report.related.iter().map(|related| html! {
                            <div class="card bg-base-200">
                                <div class="card-body p-4 gap-1">
                                    <span class="text-xs uppercase text-base-content/60">{&related.kind}</span>
                                    <span class="font-semibold">{&related.title}</span>
                                    <span class="text-xs text-base-content/60">{&related.pages}</span>
                                </div>
                            </div>
                        }) }
                    </div>
                </section>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct RevenueMixProps {
    report: Rc<Report>,
}

#[function_component(RevenueMix)]
fn revenue_mix(props: &RevenueMixProps) -> Html {
    let shares = &props.report.revenue_breakdown;
    let total = props.report.revenue_share_total().max(f64::EPSILON);

    html! {
        <div class="flex flex-col gap-2">
            <div class="flex h-3 w-full rounded-full overflow-hidden">
                { for shares.iter().map(|share| html! {
                    <div style={format!("width: {:.1}%; background-color: {}", share.share / total * 100.0, share.color)}></div>
                }) }
            </div>
            <div class="flex flex-wrap gap-4 text-sm">
                { for shares.iter().map(|share| html! {
                    <div class="flex items-center gap-2">
                        <span class="w-3 h-3 rounded-sm" style={format!("background-color: {}", share.color)}></span>
                        <span>{&share.label}</span>
                        <span class="font-semibold">{format!("{}%", share.share)}</span>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TrendCardProps {
    trend: TrendChart,
    quarters: Vec<String>,
    on_explain: Callback<ExplainTarget>,
}

#[function_component(TrendCard)]
fn trend_card(props: &TrendCardProps) -> Html {
    let trend = &props.trend;
    let scene = use_memo(trend.clone(), |trend| trend.render());

    html! {
        <div class="card bg-base-200">
            <div class="card-body p-4 gap-2">
                <div class="flex items-start justify-between">
                    <div>
                        <h3 class="font-semibold">{&trend.title}</h3>
                        <p class="text-xs text-base-content/60">{&trend.subtitle}</p>
                    </div>
                    <div class="text-right">
                        <ClickableValue target={trend.value.clone()} on_explain={props.on_explain.clone()} class="text-xl font-bold" />
                        <div class="text-xs text-success">
                            <ClickableValue target={trend.change_target()} on_explain={props.on_explain.clone()} />
                        </div>
                    </div>
                </div>
                <SceneView scene={(*scene).clone()} class="w-full h-28" />
                <div class="flex justify-between text-[10px] text-base-content/50">
                    { for props.quarters.iter().map(|q| html! { <span>{q}</span> }) }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MetricsTableProps {
    rows: Vec<TableRow>,
    on_explain: Callback<ExplainTarget>,
}

#[function_component(MetricsTable)]
fn metrics_table(props: &MetricsTableProps) -> Html {
    html! {
        <div class="overflow-x-auto">
            <table class="table table-sm">
                <thead>
                    <tr>
                        <th>{"Metric"}</th>
                        <th>{"Q4 2024"}</th>
                        <th>{"Q4 2023"}</th>
                        <th>{"Change"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.rows.iter().map(|row| html! {
                        <tr>
                            <td>{&row.metric}</td>
                            <td><ClickableValue target={row.current_target()} on_explain={props.on_explain.clone()} class="font-semibold" /></td>
                            <td>{&row.previous}</td>
                            <td class={if row.positive { "text-success" } else { "text-error" }}>{&row.change}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct EngagementProps {
    report: Rc<Report>,
}

/// Like button and comment thread.
#[function_component(EngagementSection)]
fn engagement_section(props: &EngagementProps) -> Html {
    let report = &props.report;
    let likes = use_state(|| Engagement::new(report.likes));
    let comments = use_state(|| report.comments.clone());
    let input = use_state(String::new);
    let toast = use_context::<ToastContext>();

    let on_like = {
        let likes = likes.clone();
        Callback::from(move |_| likes.set(likes.toggle()))
    };

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let element: HtmlInputElement = e.target_unchecked_into();
            input.set(element.value());
        })
    };

    let on_submit = {
        let input = input.clone();
        let comments = comments.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let id = (comments.len() + 1).to_string();
            match ReportComment::from_reader(id, &input) {
                Some(comment) => {
                    log::info!("Comment posted");
                    let mut next = (*comments).clone();
                    next.push(comment);
                    comments.set(next);
                    input.set(String::new());
                    if let Some(toast) = &toast {
                        toast.show_success("Comment posted".to_string());
                    }
                }
                None => {
                    if let Some(toast) = &toast {
                        toast.show_warning("Comments cannot be empty".to_string());
                    }
                }
            }
        })
    };

    html! {
        <section class="flex flex-col gap-4">
            <div class="flex items-center gap-4">
                <button class={classes!("btn", "btn-sm", "gap-2", likes.liked.then_some("btn-error"))} onclick={on_like}>
                    <i class={if likes.liked { "fas fa-heart" } else { "far fa-heart" }}></i>
                    <span>{likes.likes}</span>
                </button>
                <span class="text-sm text-base-content/60">{format!("{} comments", comments.len())}</span>
            </div>
            <div class="flex flex-col gap-3">
                { for comments.iter().map(|comment| html! {
                    <div key={comment.id.clone()} class="flex gap-3">
                        <div class="avatar placeholder">
                            <div class="w-8 h-8 rounded-full text-white" style={format!("background-color: {}", comment.color)}>
                                <span>{&comment.avatar}</span>
                            </div>
                        </div>
                        <div class="flex flex-col">
                            <div class="flex items-center gap-2">
                                <span class="font-semibold text-sm">{&comment.author}</span>
                                <span class="text-xs text-base-content/50">{&comment.time}</span>
                            </div>
                            <p class="text-sm">{&comment.text}</p>
                        </div>
                    </div>
                }) }
            </div>
            <form class="join w-full" onsubmit={on_submit}>
                <input type="text" class="input input-bordered input-sm join-item flex-1" placeholder="Add a comment..."
                    value={(*input).clone()} oninput={on_input} />
                <button type="submit" class="btn btn-sm btn-neutral join-item">{"Post"}</button>
            </form>
        </section>
    }
}
