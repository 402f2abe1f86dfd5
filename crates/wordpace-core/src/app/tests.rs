use super::*;
use crate::input::MockInput;

use std::{cell::RefCell, collections::VecDeque, format, rc::Rc, string::ToString, vec::Vec};

/// Input queue the test keeps a handle to after moving it into the app.
#[derive(Clone, Default)]
struct ScriptedInput {
    events: Rc<RefCell<VecDeque<Result<InputEvent, ()>>>>,
}

impl ScriptedInput {
    fn push(&self, event: InputEvent) {
        self.events.borrow_mut().push_back(Ok(event));
    }

    fn push_error(&self) {
        self.events.borrow_mut().push_back(Err(()));
    }
}

impl InputProvider for ScriptedInput {
    type Error = ();

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        match self.events.borrow_mut().pop_front() {
            Some(Ok(event)) => Ok(Some(event)),
            Some(Err(())) => Err(()),
            None => Ok(None),
        }
    }
}

fn make_app(text: &str) -> (PacerApp<ScriptedInput>, ScriptedInput) {
    let input = ScriptedInput::default();
    let app = PacerApp::new(text, input.clone(), PacerConfig::default(), "Test");
    (app, input)
}

#[derive(Debug, PartialEq)]
enum Seen {
    Idle { preview: String, word_total: usize },
    Reading { word: String, progress: String, delay: String, state: PlaybackState },
    Status { line1: String },
}

fn seen<IN: InputProvider>(app: &PacerApp<IN>) -> Seen {
    let mut out = None;
    app.with_screen(|screen| {
        out = Some(match screen {
            Screen::Idle {
                preview,
                word_total,
                ..
            } => Seen::Idle {
                preview: preview.to_string(),
                word_total,
            },
            Screen::Reading {
                word,
                progress,
                delay,
                state,
                ..
            } => Seen::Reading {
                word: word.to_string(),
                progress: progress.to_string(),
                delay: delay.to_string(),
                state,
            },
            Screen::Status { line1, .. } => Seen::Status {
                line1: line1.to_string(),
            },
        })
    });
    out.expect("with_screen always renders")
}

fn current_word<IN: InputProvider>(app: &PacerApp<IN>) -> String {
    app.engine().current_word().to_string()
}

#[test]
fn start_event_shows_first_word() {
    let (mut app, input) = make_app("Hello world");
    assert_eq!(app.tick(0), TickResult::RenderRequested);
    assert_eq!(app.tick(1), TickResult::NoRender);

    input.push(InputEvent::Start);
    assert_eq!(app.tick(10), TickResult::RenderRequested);
    assert_eq!(
        seen(&app),
        Seen::Reading {
            word: "Hello".to_string(),
            progress: "1/2".to_string(),
            delay: "120 ms".to_string(),
            state: PlaybackState::Running,
        }
    );
    assert_eq!(app.next_wake_ms(), Some(130));
}

#[test]
fn words_advance_on_ticks_and_last_word_stays_after_finish() {
    let (mut app, input) = make_app("Hello world");
    input.push(InputEvent::Start);
    app.tick(0);

    assert_eq!(app.tick(119), TickResult::NoRender);
    assert_eq!(app.tick(120), TickResult::RenderRequested);
    assert_eq!(current_word(&app), "world");

    assert_eq!(app.tick(200), TickResult::NoRender);
    assert_eq!(app.tick(240), TickResult::RenderRequested);
    assert_eq!(app.state(), PlaybackState::Finished);
    assert_eq!(current_word(&app), "world");
    assert_eq!(app.next_wake_ms(), None);
}

#[test]
fn blank_text_does_not_start() {
    let (mut app, input) = make_app("  \n\t ");
    app.tick(0);
    input.push(InputEvent::Start);
    assert_eq!(app.tick(5), TickResult::NoRender);
    assert_eq!(app.state(), PlaybackState::Idle);
    assert_eq!(
        seen(&app),
        Seen::Idle {
            preview: String::new(),
            word_total: 0,
        }
    );
}

#[test]
fn pause_event_freezes_word_until_resumed() {
    let (mut app, input) = make_app("one two three");
    input.push(InputEvent::Start);
    app.tick(0);

    input.push(InputEvent::TogglePause);
    assert_eq!(app.tick(60), TickResult::RenderRequested);
    assert_eq!(app.state(), PlaybackState::Paused);
    assert_eq!(app.tick(5_000), TickResult::NoRender);
    assert_eq!(current_word(&app), "one");

    input.push(InputEvent::TogglePause);
    app.tick(5_000);
    assert_eq!(app.state(), PlaybackState::Running);
    assert_eq!(app.next_wake_ms(), Some(5_120));
    app.tick(5_120);
    assert_eq!(current_word(&app), "two");
}

#[test]
fn stop_event_returns_to_idle_with_preview() {
    let (mut app, input) = make_app("one two three");
    input.push(InputEvent::Start);
    app.tick(0);

    input.push(InputEvent::Stop);
    assert_eq!(app.tick(10), TickResult::RenderRequested);
    assert_eq!(app.state(), PlaybackState::Idle);
    assert_eq!(current_word(&app), "");
    assert_eq!(app.tick(1_000), TickResult::NoRender);
    assert_eq!(
        seen(&app),
        Seen::Idle {
            preview: "one two three".to_string(),
            word_total: 3,
        }
    );

    input.push(InputEvent::Stop);
    assert_eq!(app.tick(1_010), TickResult::NoRender);
}

#[test]
fn editing_base_delay_mid_run_rearms_current_word() {
    let (mut app, input) = make_app("one two");
    input.push(InputEvent::Start);
    app.tick(0);

    input.push(InputEvent::Increase);
    assert_eq!(app.tick(50), TickResult::RenderRequested);
    assert_eq!(app.timing().base_delay_ms, 130);
    assert_eq!(app.engine().config().base_delay_ms, 130);
    assert_eq!(app.next_wake_ms(), Some(180));

    assert_eq!(app.tick(120), TickResult::NoRender);
    app.tick(180);
    assert_eq!(current_word(&app), "two");
}

#[test]
fn chars_per_unit_stays_at_least_one() {
    let (mut app, input) = make_app("text");
    input.push(InputEvent::NextSetting);
    for _ in 0..20 {
        input.push(InputEvent::Decrease);
    }
    app.tick(0);
    assert_eq!(app.timing().chars_per_unit, 1);
}

#[test]
fn delays_saturate_at_zero() {
    let (mut app, input) = make_app("text");
    input.push(InputEvent::PreviousSetting);
    input.push(InputEvent::PreviousSetting);
    for _ in 0..30 {
        input.push(InputEvent::Decrease);
    }
    app.tick(0);
    assert_eq!(app.timing().punctuation_offset_ms, 0);
    assert_eq!(app.timing().base_delay_ms, 120);
}

#[test]
fn policy_can_be_toggled_from_row_or_shortcut() {
    let (mut app, input) = make_app("end.");
    input.push(InputEvent::PreviousSetting);
    input.push(InputEvent::Increase);
    app.tick(0);
    assert_eq!(app.policy(), PunctuationPolicy::SentenceEnd);

    input.push(InputEvent::TogglePolicy);
    app.tick(1);
    assert_eq!(app.policy(), PunctuationPolicy::NonAlphaDensity);
    assert_eq!(app.engine().policy(), PunctuationPolicy::NonAlphaDensity);
}

#[test]
fn settings_panel_reflects_values_and_cursor() {
    let (mut app, input) = make_app("text");
    input.push(InputEvent::NextSetting);
    input.push(InputEvent::NextSetting);
    app.tick(0);

    let mut rows = Vec::new();
    let mut cursor = None;
    app.with_screen(|screen| {
        if let Screen::Idle { settings, .. } = screen {
            rows = settings
                .rows
                .iter()
                .map(|row| format!("{}: {:?}", row.key, row.value))
                .collect();
            cursor = Some(settings.cursor);
        }
    });

    assert_eq!(cursor, Some(2));
    assert_eq!(
        rows,
        [
            "Base delay: Millis(120)",
            "Chars per unit: Count(7)",
            "Unit offset: Millis(150)",
            "Punctuation offset: Millis(150)",
            "Punctuation rule: Label(\"density\")",
        ]
    );
}

#[test]
fn input_error_shows_status_until_next_event() {
    let (mut app, input) = make_app("one two");
    input.push_error();
    assert_eq!(app.tick(0), TickResult::RenderRequested);
    assert_eq!(
        seen(&app),
        Seen::Status {
            line1: "INPUT ERROR".to_string(),
        }
    );

    // First event only dismisses the status.
    input.push(InputEvent::Start);
    app.tick(10);
    assert_eq!(app.state(), PlaybackState::Idle);

    input.push(InputEvent::Start);
    app.tick(20);
    assert_eq!(app.state(), PlaybackState::Running);
}

#[test]
fn quit_and_shutdown_cancel_playback() {
    let (mut app, input) = make_app("one two");
    input.push(InputEvent::Start);
    input.push(InputEvent::Quit);
    app.tick(0);
    assert!(app.exit_requested());

    app.shutdown();
    assert_eq!(app.state(), PlaybackState::Idle);
    assert_eq!(app.next_wake_ms(), None);
    app.shutdown();
    assert_eq!(app.state(), PlaybackState::Idle);
}

#[test]
fn headless_app_runs_without_input() {
    let config = PacerConfig {
        timing: TimingConfig::new(10, 100, 0, 0),
        policy: PunctuationPolicy::SentenceEnd,
    };
    let mut app = PacerApp::new("a b c", MockInput::new(), config, "Headless");
    assert!(app.start(0));
    assert!(!app.start(1));

    let mut now = 0;
    let mut seen_words = Vec::new();
    while app.state() == PlaybackState::Running {
        if let Some(wake) = app.next_wake_ms() {
            now = wake;
        }
        app.tick(now);
        seen_words.push(current_word(&app));
    }

    assert_eq!(seen_words, ["b", "c", "c"]);
    assert_eq!(now, 30);
}

#[test]
fn new_text_is_used_by_next_start() {
    let (mut app, input) = make_app("old");
    app.set_text("fresh words");
    input.push(InputEvent::Start);
    app.tick(0);
    assert_eq!(current_word(&app), "fresh");
    assert_eq!(app.text(), "fresh words");
}
