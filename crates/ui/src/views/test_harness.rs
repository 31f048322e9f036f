use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{QuizService, SearchEngine};
use storage::InMemorySource;

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::view::QuizTestHandles;

pub const SAMPLE_DOC: &str = r#"{
    "Module 1": [
        {"question": "What is 2 + 2?", "options": ["3", "4", "5"], "correctAnswer": 1,
         "explanation": "Two plus two is four."},
        {"question": "Capital of France?", "options": ["Berlin", "Paris"], "correctAnswer": 1}
    ],
    "Module 2": [
        {"question": "Largest planet?", "options": ["Mars", "Jupiter", "Venus"], "correctAnswer": 1}
    ]
}"#;

#[derive(Clone)]
struct TestApp {
    quiz_service: Arc<QuizService>,
}

impl UiApp for TestApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    fn search_engine(&self) -> SearchEngine {
        SearchEngine::Google
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub source: InMemorySource,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let the initial load resolve.
    pub async fn load(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn dispatch(&mut self, intent: crate::vm::QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    /// Press Retry and let the reload resolve.
    pub async fn retry(&mut self) {
        let retry = self.handles.retry();
        self.dom.in_runtime(|| retry.call(()));
        drive_dom(&mut self.dom);
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(source: InMemorySource) -> ViewHarness {
    let quiz_service = Arc::new(QuizService::new(Arc::new(source.clone())));
    let handles = QuizTestHandles::default();
    let app = Arc::new(TestApp { quiz_service });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        source,
        handles,
    }
}
