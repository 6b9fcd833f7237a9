use dioxus::prelude::*;
use services::{Section, TextSlot};

use crate::vm::QuizVm;

#[component]
pub(super) fn QuizResults(vm: QuizVm, on_restart: EventHandler<()>) -> Element {
    let score = vm.text(TextSlot::Score).to_string();
    let total = vm.text(TextSlot::Total).to_string();
    let percentage = vm.text(TextSlot::Percentage).to_string();
    let feedback = vm.text(TextSlot::Feedback).to_string();
    let high_score = vm.text(TextSlot::HighScore).to_string();

    rsx! {
        section { class: "quiz-card results", id: "results",
            h2 { "Quiz Complete!" }
            p { class: "results__score",
                "You scored "
                span { id: "score", "{score}" }
                " out of "
                span { id: "total", "{total}" }
                " ("
                span { id: "percentage", "{percentage}" }
                "%)"
            }
            p { class: "results__feedback", id: "feedback", "{feedback}" }
            if vm.is_visible(Section::HighScoreBanner) {
                p { class: "results__high-score", id: "high-score-banner",
                    "New high score: "
                    span { id: "high-score", "{high_score}" }
                }
            }
            button {
                class: "restart",
                id: "restart-btn",
                onclick: move |_| on_restart.call(()),
                "Restart Quiz"
            }
        }
    }
}
