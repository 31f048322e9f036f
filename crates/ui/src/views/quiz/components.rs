use dioxus::prelude::*;

use crate::vm::{
    AnswerModalVm, FeedbackVm, ModuleOptionVm, NavItemVm, OptionVm, ProgressVm, QuestionVm,
    QuizIntent, QuizPageVm,
};

#[component]
pub(super) fn QuizPage(page: QuizPageVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let QuizPageVm {
        modules,
        question,
        navigator,
        progress,
        feedback,
        answer_modal,
        can_previous,
        can_next,
    } = page;

    rsx! {
        div { class: "quiz-toolbar",
            ModuleSelector { modules, on_intent }
            ProgressBar { progress }
        }
        match question {
            None => rsx! {
                p { class: "quiz-empty", "No modules available." }
            },
            Some(question) => rsx! {
                div { class: "quiz-layout",
                    div { class: "quiz-main",
                        QuestionCard { question, on_intent }
                        if let Some(feedback) = feedback {
                            FeedbackPanel { feedback }
                        }
                        QuizControls { can_previous, can_next, on_intent }
                    }
                    NavigatorGrid { items: navigator, on_intent }
                }
            },
        }
        if let Some(modal) = answer_modal {
            AnswerModal { modal, on_intent }
        }
    }
}

#[component]
fn ModuleSelector(modules: Vec<ModuleOptionVm>, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        label { class: "module-selector",
            span { class: "module-selector__label", "Module" }
            select {
                id: "module-selector",
                onchange: move |evt: FormEvent| {
                    on_intent.call(QuizIntent::SelectModule(evt.value()));
                },
                for module in modules.iter() {
                    option {
                        key: "{module.id}",
                        value: "{module.id}",
                        selected: module.selected,
                        "{module.id}"
                    }
                }
            }
        }
    }
}

#[component]
fn ProgressBar(progress: ProgressVm) -> Element {
    rsx! {
        div { class: "progress",
            div { class: "progress__track",
                div { class: "progress__bar", id: "progress-bar", style: "{progress.width_style}" }
            }
            span { class: "progress__label", id: "progress-percentage", "{progress.label}" }
            span { class: "progress__answered", "{progress.answered_label}" }
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        section { class: "question-card",
            header { class: "question-card__header",
                span { class: "question-card__number", "{question.number_label}" }
                span { class: "question-card__total", "{question.total_label}" }
            }
            p { class: "question-card__text", "{question.text}" }
            div { class: "question-card__options",
                for option in question.options.iter().cloned() {
                    OptionButton { key: "{option.index}", option, on_intent }
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let index = option.index;
    let class = option.state.class();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            "aria-disabled": option.locked,
            onclick: move |_| on_intent.call(QuizIntent::Answer(index)),
            span { class: "option-letter", "{option.letter}" }
            span { class: "option-text", "{option.text}" }
        }
    }
}

#[component]
fn FeedbackPanel(feedback: FeedbackVm) -> Element {
    let class = if feedback.correct {
        "feedback feedback--correct"
    } else {
        "feedback feedback--incorrect"
    };

    rsx! {
        div { class: "{class}", id: "feedback",
            h3 { class: "feedback__title", "{feedback.title}" }
            p { class: "feedback__message", "{feedback.message}" }
        }
    }
}

#[component]
fn QuizControls(
    can_previous: bool,
    can_next: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    rsx! {
        div { class: "quiz-controls",
            button {
                class: "btn btn-secondary",
                id: "prev-btn",
                r#type: "button",
                disabled: !can_previous,
                onclick: move |_| on_intent.call(QuizIntent::Previous),
                "Previous"
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::ShowAnswer),
                "Show Answer"
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::SearchOnline),
                "Search Online"
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "Restart"
            }
            button {
                class: "btn btn-primary",
                id: "next-btn",
                r#type: "button",
                disabled: !can_next,
                onclick: move |_| on_intent.call(QuizIntent::Next),
                "Next"
            }
        }
    }
}

#[component]
fn NavigatorGrid(items: Vec<NavItemVm>, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        nav { class: "question-nav", id: "question-nav",
            for item in items.iter().cloned() {
                NavButton { key: "{item.index}", item, on_intent }
            }
        }
    }
}

#[component]
fn NavButton(item: NavItemVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let index = item.index;

    rsx! {
        button {
            class: "{item.class}",
            r#type: "button",
            "aria-current": item.is_current,
            onclick: move |_| on_intent.call(QuizIntent::GoTo(index)),
            "{item.label}"
        }
    }
}

#[component]
fn AnswerModal(modal: AnswerModalVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_intent.call(QuizIntent::HideAnswer),
            div {
                class: "modal",
                id: "answer-modal",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                h3 { class: "modal__title", "Answer" }
                p { class: "modal__question", "{modal.question}" }
                p { class: "modal__answer", "{modal.answer_label}" }
                if let Some(explanation) = modal.explanation.as_deref() {
                    p { class: "modal__explanation", "{explanation}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::HideAnswer),
                    "Close"
                }
            }
        }
    }
}
