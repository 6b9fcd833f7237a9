use dioxus::prelude::{Code, Key};
use services::{Meter, OptionMark, QuizIntent, QuizSurface, Section, TextSlot};

/// One answer button as the view renders it.
#[derive(Clone, Debug, PartialEq)]
pub struct OptionVm {
    label: String,
    disabled: bool,
    mark: Option<OptionMark>,
}

impl OptionVm {
    fn new(label: String) -> Self {
        Self {
            label,
            disabled: false,
            mark: None,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// CSS class list for the option button.
    #[must_use]
    pub fn class(&self) -> String {
        match self.mark {
            Some(mark) => format!("option {}", mark.class_name()),
            None => "option".to_string(),
        }
    }
}

/// Everything the quiz screen shows, written by `QuizController` through `QuizSurface`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuizVm {
    prompt: String,
    current_number: String,
    total_number: String,
    countdown_seconds: String,
    score: String,
    total: String,
    percentage: String,
    feedback: String,
    high_score: String,

    quiz_progress: f64,
    countdown_progress: f64,

    options: Vec<OptionVm>,
    error: Option<String>,

    question_visible: bool,
    results_visible: bool,
    countdown_visible: bool,
    banner_visible: bool,
    continue_visible: bool,
}

impl QuizVm {
    #[must_use]
    pub fn text(&self, slot: TextSlot) -> &str {
        match slot {
            TextSlot::Prompt => &self.prompt,
            TextSlot::CurrentNumber => &self.current_number,
            TextSlot::TotalNumber => &self.total_number,
            TextSlot::CountdownSeconds => &self.countdown_seconds,
            TextSlot::Score => &self.score,
            TextSlot::Total => &self.total,
            TextSlot::Percentage => &self.percentage,
            TextSlot::Feedback => &self.feedback,
            TextSlot::HighScore => &self.high_score,
        }
    }

    #[must_use]
    pub fn meter(&self, meter: Meter) -> f64 {
        match meter {
            Meter::QuizProgress => self.quiz_progress,
            Meter::Countdown => self.countdown_progress,
        }
    }

    #[must_use]
    pub fn is_visible(&self, section: Section) -> bool {
        match section {
            Section::Question => self.question_visible,
            Section::Results => self.results_visible,
            Section::Countdown => self.countdown_visible,
            Section::HighScoreBanner => self.banner_visible,
            Section::Continue => self.continue_visible,
        }
    }

    #[must_use]
    pub fn options(&self) -> &[OptionVm] {
        &self.options
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Inline `width` style for a meter bar.
    #[must_use]
    pub fn meter_style(&self, meter: Meter) -> String {
        format!("width: {:.2}%;", self.meter(meter).clamp(0.0, 100.0))
    }
}

impl QuizSurface for QuizVm {
    fn set_text(&mut self, slot: TextSlot, text: &str) {
        let target = match slot {
            TextSlot::Prompt => &mut self.prompt,
            TextSlot::CurrentNumber => &mut self.current_number,
            TextSlot::TotalNumber => &mut self.total_number,
            TextSlot::CountdownSeconds => &mut self.countdown_seconds,
            TextSlot::Score => &mut self.score,
            TextSlot::Total => &mut self.total,
            TextSlot::Percentage => &mut self.percentage,
            TextSlot::Feedback => &mut self.feedback,
            TextSlot::HighScore => &mut self.high_score,
        };
        text.clone_into(target);
    }

    fn set_meter(&mut self, meter: Meter, percent: f64) {
        match meter {
            Meter::QuizProgress => self.quiz_progress = percent,
            Meter::Countdown => self.countdown_progress = percent,
        }
    }

    fn replace_options(&mut self, labels: &[String]) {
        self.error = None;
        self.options = labels.iter().cloned().map(OptionVm::new).collect();
    }

    fn set_option_state(&mut self, index: usize, disabled: bool, mark: Option<OptionMark>) {
        if let Some(option) = self.options.get_mut(index) {
            option.disabled = disabled;
            option.mark = mark;
        }
    }

    fn set_visible(&mut self, section: Section, visible: bool) {
        let flag = match section {
            Section::Question => &mut self.question_visible,
            Section::Results => &mut self.results_visible,
            Section::Countdown => &mut self.countdown_visible,
            Section::HighScoreBanner => &mut self.banner_visible,
            Section::Continue => &mut self.continue_visible,
        };
        *flag = visible;
    }

    fn show_error(&mut self, message: &str) {
        self.options.clear();
        self.error = Some(message.to_owned());
    }
}

fn is_activation_key(key: &Key, code: Code) -> bool {
    *key == Key::Enter || code == Code::Space
}

/// Intent for a key pressed on the option button at `index`, if the key activates it.
#[must_use]
pub fn option_key_intent(index: usize, key: &Key, code: Code) -> Option<QuizIntent> {
    is_activation_key(key, code).then_some(QuizIntent::Select(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_state_updates_class() {
        let mut vm = QuizVm::default();
        vm.replace_options(&["a".to_string(), "b".to_string()]);
        vm.set_option_state(0, true, Some(OptionMark::Correct));
        vm.set_option_state(1, true, Some(OptionMark::Incorrect));
        vm.set_option_state(5, true, None);

        assert_eq!(vm.options()[0].class(), "option correct");
        assert_eq!(vm.options()[1].class(), "option incorrect");
        assert!(vm.options().iter().all(OptionVm::disabled));
    }

    #[test]
    fn replacing_options_clears_error() {
        let mut vm = QuizVm::default();
        vm.show_error("broken");
        assert_eq!(vm.error(), Some("broken"));

        vm.replace_options(&["x".to_string()]);
        assert_eq!(vm.error(), None);
        assert_eq!(vm.options()[0].label(), "x");
        assert_eq!(vm.options()[0].class(), "option");
    }

    #[test]
    fn meter_style_is_clamped() {
        let mut vm = QuizVm::default();
        vm.set_meter(Meter::Countdown, 140.0);
        assert_eq!(vm.meter_style(Meter::Countdown), "width: 100.00%;");
        vm.set_meter(Meter::QuizProgress, 50.0);
        assert_eq!(vm.meter_style(Meter::QuizProgress), "width: 50.00%;");
    }

    #[test]
    fn enter_and_space_activate() {
        assert!(is_activation_key(&Key::Enter, Code::Enter));
        assert!(is_activation_key(&Key::Character(" ".to_string()), Code::Space));
        assert!(!is_activation_key(&Key::Tab, Code::Tab));
        assert!(!is_activation_key(&Key::Character("a".to_string()), Code::KeyA));
    }

    #[test]
    fn option_keys_select_their_own_index() {
        assert_eq!(
            option_key_intent(2, &Key::Enter, Code::Enter),
            Some(QuizIntent::Select(2))
        );
        assert_eq!(
            option_key_intent(0, &Key::Character(" ".to_string()), Code::Space),
            Some(QuizIntent::Select(0))
        );
        assert_eq!(option_key_intent(1, &Key::Escape, Code::Escape), None);
    }
}
