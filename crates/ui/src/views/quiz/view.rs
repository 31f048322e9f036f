use dioxus::document::eval;
use dioxus::prelude::*;
use tracing::warn;

use super::components::QuizPage;
use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuizEffect, QuizIntent, QuizVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_service = ctx.quiz_service();
    let search_engine = ctx.search_engine();

    let vm = use_signal(|| None::<QuizVm>);

    let resource = use_resource(move || {
        let quiz_service = quiz_service.clone();
        let mut vm = vm;

        async move {
            let session = quiz_service
                .load_session()
                .await
                .map_err(|err| ViewError::from_service(&err))?;
            vm.set(Some(QuizVm::new(session, search_engine)));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let dispatch_intent = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let result = {
            let mut guard = vm.write();
            let Some(quiz) = guard.as_mut() else {
                return;
            };
            quiz.dispatch(intent)
        };

        match result {
            Ok(QuizEffect::None) => {}
            Ok(QuizEffect::OpenUrl(url)) => {
                let js = format!("window.open({:?}, '_blank');", url.as_str());
                let _ = eval(&js);
            }
            Err(err) => {
                warn!(error = %err, "quiz intent rejected");
            }
        }
    });

    let retry = use_callback(move |()| {
        let mut resource = resource;
        resource.restart();
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, retry, vm);
            }
        }
    }

    let page = vm.read().as_ref().map(QuizVm::page);

    rsx! {
        div { class: "page quiz-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "quiz-loading", "Loading quiz..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "quiz-error",
                        p { "{err.message()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| retry.call(()),
                            "Retry"
                        }
                    }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(page) = page {
                        QuizPage { page, on_intent: dispatch_intent }
                    } else {
                        p { class: "quiz-empty", "No quiz loaded." }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    retry: Rc<RefCell<Option<Callback<()>>>>,
    vm: Rc<RefCell<Option<Signal<Option<QuizVm>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        retry: Callback<()>,
        vm: Signal<Option<QuizVm>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.retry.borrow_mut() = Some(retry);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn retry(&self) -> Callback<()> {
        (*self.retry.borrow()).expect("quiz retry registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<QuizVm>> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
