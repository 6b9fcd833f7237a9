use std::sync::Arc;
use std::time::Duration;

use dioxus::document::eval;
use dioxus::prelude::*;
use services::{
    Celebration, CelebrationBurst, Meter, QuizController, QuizIntent, Section, TextSlot,
};
use tracing::debug;

use super::results::QuizResults;
use super::scripts::{confetti_script, focus_script};
use crate::context::AppContext;
use crate::vm::{QuizVm, option_key_intent};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const TICK: Duration = Duration::from_secs(1);

/// Confetti through the webview's `confetti` global.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomCelebration;

impl Celebration for DomCelebration {
    fn celebrate(&self, burst: CelebrationBurst) {
        let _ = eval(&confetti_script(burst));
    }
}

/// The countdown run the ticker is pacing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CountdownKey {
    run: u64,
    running: bool,
}

impl CountdownKey {
    fn of(controller: &QuizController) -> Self {
        let countdown = controller.session().countdown();
        Self {
            run: countdown.run_id(),
            running: countdown.is_running(),
        }
    }
}

/// The controller is `None` while an intent is being applied.
struct QuizScreen {
    controller: Option<QuizController>,
    vm: QuizVm,
    countdown: CountdownKey,
}

#[derive(Clone, Copy)]
struct QuizSignals {
    screen: Signal<QuizScreen>,
    ticker: Signal<Option<Task>>,
}

/// Apply one intent. Returns the countdown key before and after, or `None`
/// if another intent was in flight and this one was dropped.
async fn apply_intent(
    signals: QuizSignals,
    intent: QuizIntent,
) -> Option<(CountdownKey, CountdownKey)> {
    let mut screen = signals.screen;
    let (controller, mut vm, before) = {
        let mut guard = screen.write();
        (guard.controller.take(), guard.vm.clone(), guard.countdown)
    };
    let Some(mut controller) = controller else {
        debug!(?intent, "intent dropped while another is in flight");
        return None;
    };

    controller.dispatch(intent, &mut vm).await;
    let after = CountdownKey::of(&controller);

    let mut guard = screen.write();
    guard.controller = Some(controller);
    guard.vm = vm;
    guard.countdown = after;
    Some((before, after))
}

/// Replace the ticker so its first tick lands a full second after `key`'s run started.
fn retime_ticker(signals: QuizSignals, key: CountdownKey) {
    let mut ticker = signals.ticker;
    let previous = ticker.write().take();
    if let Some(task) = previous {
        task.cancel();
    }
    if key.running {
        ticker.set(Some(spawn(tick_loop(signals))));
    }
}

async fn tick_loop(signals: QuizSignals) {
    loop {
        tokio::time::sleep(TICK).await;
        // Expiry loads the next question and starts its run right now, so the
        // next sleep is already aligned with it.
        if let Some((_, after)) = apply_intent(signals, QuizIntent::Tick).await {
            if !after.running {
                let mut ticker = signals.ticker;
                ticker.set(None);
                return;
            }
        }
    }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let screen = use_signal(|| {
        let mut controller = ctx.quiz_controller(Arc::new(DomCelebration));
        let mut vm = QuizVm::default();
        controller.start(&mut vm);
        let countdown = CountdownKey::of(&controller);
        QuizScreen {
            controller: Some(controller),
            vm,
            countdown,
        }
    });
    let ticker = use_signal(|| None::<Task>);
    let signals = QuizSignals { screen, ticker };

    use_hook(move || retime_ticker(signals, screen.peek().countdown));

    let dispatch = use_callback(move |intent: QuizIntent| {
        spawn(async move {
            if let Some((before, after)) = apply_intent(signals, intent).await {
                if before != after {
                    retime_ticker(signals, after);
                }
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let vm = screen.read().vm.clone();

    let continue_visible = vm.is_visible(Section::Continue);
    use_effect(use_reactive!(|continue_visible| {
        if continue_visible {
            let _ = eval(&focus_script("next-btn"));
        }
    }));

    let prompt = vm.text(TextSlot::Prompt).to_string();
    let current = vm.text(TextSlot::CurrentNumber).to_string();
    let total = vm.text(TextSlot::TotalNumber).to_string();
    let seconds = vm.text(TextSlot::CountdownSeconds).to_string();
    let progress_style = vm.meter_style(Meter::QuizProgress);
    let countdown_style = vm.meter_style(Meter::Countdown);
    let error = vm.error().map(str::to_owned);

    rsx! {
        div { class: "page quiz-page", id: "quiz-root",
            if vm.is_visible(Section::Question) {
                section { class: "quiz-card", id: "quiz-container",
                    div { class: "progress",
                        div { class: "progress__bar", id: "progress-bar", style: "{progress_style}" }
                    }
                    p { class: "progress__label",
                        "Question "
                        span { id: "current-question", "{current}" }
                        " of "
                        span { id: "total-questions", "{total}" }
                    }
                    if vm.is_visible(Section::Countdown) {
                        div { class: "countdown", id: "countdown",
                            span { class: "countdown__seconds", id: "countdown-seconds", "{seconds}s" }
                            div { class: "countdown__track",
                                div { class: "countdown__bar", id: "countdown-bar", style: "{countdown_style}" }
                            }
                        }
                    }
                    h2 { class: "question", id: "question", "{prompt}" }
                    {error.map(|message| rsx! {
                        p { class: "question-error", id: "question-error", "{message}" }
                    })}
                    div { class: "options", id: "options",
                        for (index, option) in vm.options().iter().enumerate() {
                            button {
                                key: "{index}",
                                class: option.class(),
                                disabled: option.disabled(),
                                tabindex: "0",
                                aria_label: "Option: {option.label()}",
                                onclick: move |_| dispatch.call(QuizIntent::Select(index)),
                                onkeydown: move |evt: KeyboardEvent| {
                                    if let Some(intent) =
                                        option_key_intent(index, &evt.data.key(), evt.data.code())
                                    {
                                        evt.prevent_default();
                                        dispatch.call(intent);
                                    }
                                },
                                "{option.label()}"
                            }
                        }
                    }
                    if continue_visible {
                        button {
                            class: "next",
                            id: "next-btn",
                            onclick: move |_| dispatch.call(QuizIntent::Continue),
                            "Next"
                        }
                    }
                }
            }
            if vm.is_visible(Section::Results) {
                QuizResults {
                    vm: vm.clone(),
                    on_restart: move |()| dispatch.call(QuizIntent::Restart),
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
