use std::rc::Rc;

use ::common::DashboardCatalog;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Header />
            <main class="flex-1 p-6 overflow-y-auto">
                { for props.children.iter() }
            </main>
        </div>
    }
}

#[function_component(Header)]
fn header() -> Html {
    let catalog = use_context::<Rc<DashboardCatalog>>();
    let (name, kind) = catalog
        .as_ref()
        .map(|c| (c.company.name.clone(), c.company.kind.clone()))
        .unwrap_or_default();

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0 px-4 gap-4">
            <div class="flex-1 gap-4">
                <Link<Route> to={Route::Feed} classes="flex items-center gap-3">
                    <div class="btn btn-square btn-sm btn-neutral">
                        <i class="fas fa-newspaper"></i>
                    </div>
                    <div class="flex flex-col leading-tight">
                        <span class="font-semibold">{name}</span>
                        <span class="text-xs text-base-content/60">{kind}</span>
                    </div>
                </Link<Route>>
                <label class="input input-sm input-bordered hidden md:flex items-center gap-2 w-72">
                    <i class="fas fa-search text-base-content/50"></i>
                    <input type="text" class="grow" placeholder="Search..." />
                </label>
            </div>
            <div class="flex-none">
                <div class="avatar placeholder">
                    <div class="bg-neutral text-neutral-content w-8 rounded-full">
                        <span>{"A"}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
