mod goodbye;
mod learn;
mod state;
mod welcome;

#[cfg(test)]
mod intent_smoke;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use goodbye::GoodbyeView;
pub use learn::LearnView;
pub use state::{ViewError, ViewState};
pub use welcome::WelcomeView;
