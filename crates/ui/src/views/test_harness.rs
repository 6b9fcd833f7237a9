use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{HighScore, QuestionBank, QuizSettings};
use services::{HighScoreService, QuizIntent};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;

#[derive(Clone)]
struct TestApp {
    bank: QuestionBank,
    settings: QuizSettings,
    high_scores: Arc<HighScoreService>,
    stored_high_score: HighScore,
}

impl UiApp for TestApp {
    fn question_bank(&self) -> QuestionBank {
        self.bank.clone()
    }

    fn settings(&self) -> QuizSettings {
        self.settings
    }

    fn high_scores(&self) -> Arc<HighScoreService> {
        Arc::clone(&self.high_scores)
    }

    fn stored_high_score(&self) -> HighScore {
        self.stored_high_score
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

impl Eq for ViewHarnessProps {}

#[component]
fn QuizHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub high_scores: Arc<HighScoreService>,
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

    /// Send an intent through the view's dispatcher and let the spawned task finish.
    pub async fn send(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        self.drive_async().await;
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

pub async fn setup_view_harness(bank: QuestionBank) -> ViewHarness {
    setup_view_harness_with_settings(bank, QuizSettings::default()).await
}

pub async fn setup_view_harness_with_settings(
    bank: QuestionBank,
    settings: QuizSettings,
) -> ViewHarness {
    let storage = Storage::in_memory();
    let high_scores = Arc::new(HighScoreService::new(Arc::clone(&storage.kv)));
    let stored_high_score = high_scores.load().await.expect("load high score");
    let handles = QuizTestHandles::default();

    let app = Arc::new(TestApp {
        bank,
        settings,
        high_scores: Arc::clone(&high_scores),
        stored_high_score,
    });

    let dom = VirtualDom::new_with_props(
        QuizHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        high_scores,
        handles,
    }
}
