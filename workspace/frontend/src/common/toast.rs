//! Short-lived notices stacked in the top-right corner.
//!
//! The feed confirms a started chat with an info toast; the report page
//! warns about blank comments and confirms posted ones. Every toast closes
//! itself after `AppSettings::toast_duration_ms`.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::settings::get_settings;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastType {
    Info,
    Success,
    Warning,
}

impl ToastType {
    fn alert_class(self) -> &'static str {
        match self {
            ToastType::Info => "alert-info",
            ToastType::Success => "alert-success",
            ToastType::Warning => "alert-warning",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastType::Info => "fas fa-info-circle",
            ToastType::Success => "fas fa-check-circle",
            ToastType::Warning => "fas fa-exclamation-triangle",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub toast_type: ToastType,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(usize),
}

/// Toasts on screen, oldest first.
#[derive(Debug, Default, PartialEq)]
pub struct ToastStack {
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            // a toast closed by hand is gone before its timer fires
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { toasts })
    }
}

/// Provided by [`ToastProvider`]; pages reach it with `use_context`.
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    stack: UseReducerDispatcher<ToastStack>,
    next_id: Rc<Cell<usize>>,
}

impl ToastContext {
    fn show(&self, message: String, toast_type: ToastType) {
        log::debug!("Toast {:?}: {}", toast_type, message);
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.stack.dispatch(ToastAction::Push(Toast { id, message, toast_type }));

        let stack = self.stack.clone();
        Timeout::new(get_settings().toast_duration_ms, move || stack.dispatch(ToastAction::Dismiss(id))).forget();
    }

    pub fn show_info(&self, message: String) {
        self.show(message, ToastType::Info);
    }

    pub fn show_success(&self, message: String) {
        self.show(message, ToastType::Success);
    }

    /// Used for input the page refuses, such as an empty comment.
    pub fn show_warning(&self, message: String) {
        self.show(message, ToastType::Warning);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let stack = use_reducer(ToastStack::default);
    let next_id = use_memo((), |_| Cell::new(0usize));
    let context = ToastContext { stack: stack.dispatcher(), next_id };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                { for stack.toasts().iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let dispatcher = stack.dispatcher();
                        Callback::from(move |_| dispatcher.dispatch(ToastAction::Dismiss(id)))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.toast_type.alert_class(), "shadow-lg")}>
                            <i class={toast.toast_type.icon()}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(stack: ToastStack, action: ToastAction) -> ToastStack {
        Rc::try_unwrap(Rc::new(stack).reduce(action)).unwrap()
    }

    fn push(stack: ToastStack, id: usize, message: &str, toast_type: ToastType) -> ToastStack {
        reduce(stack, ToastAction::Push(Toast { id, message: message.to_string(), toast_type }))
    }

    #[test]
    fn test_push_keeps_order() {
        let stack = push(ToastStack::default(), 0, "New chat started", ToastType::Info);
        let stack = push(stack, 1, "Comment posted", ToastType::Success);

        let ids: Vec<usize> = stack.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(stack.toasts()[1].toast_type, ToastType::Success);
    }

    #[test]
    fn test_dismiss_keeps_other_toasts() {
        let stack = push(ToastStack::default(), 0, "a", ToastType::Info);
        let stack = push(stack, 1, "b", ToastType::Warning);
        let stack = reduce(stack, ToastAction::Dismiss(0));
        assert_eq!(stack.toasts().len(), 1);
        assert_eq!(stack.toasts()[0].message, "b");

        // the timer of an already closed toast changes nothing
        let stack = reduce(stack, ToastAction::Dismiss(0));
        assert_eq!(stack.toasts().len(), 1);
    }
}
