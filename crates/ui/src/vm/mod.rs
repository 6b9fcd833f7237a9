mod quiz_vm;

pub use quiz_vm::{OptionVm, QuizVm, option_key_intent};
