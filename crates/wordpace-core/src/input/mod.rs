//! Input abstraction layer.

pub mod mock;

pub use mock::MockInput;

/// Logical actions consumed by the pacer app.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    Start,
    TogglePause,
    Stop,
    NextSetting,
    PreviousSetting,
    Increase,
    Decrease,
    TogglePolicy,
    Quit,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
