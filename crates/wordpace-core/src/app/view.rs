impl<IN> PacerApp<IN>
where
    IN: InputProvider,
{
    pub fn new(
        text: impl Into<String>,
        input: IN,
        config: PacerConfig,
        app_title: &'static str,
    ) -> Self {
        Self {
            input,
            text: text.into(),
            timing: config.timing,
            policy: config.policy,
            engine: PlaybackEngine::new(config.timing, config.policy),
            app_title,
            settings_cursor: 0,
            pending_redraw: true,
            status: None,
            exit_requested: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the raw text. Takes effect on the next start.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.pending_redraw = true;
    }

    pub fn timing(&self) -> TimingConfig {
        self.timing
    }

    pub fn policy(&self) -> PunctuationPolicy {
        self.policy
    }

    pub fn engine(&self) -> &PlaybackEngine {
        &self.engine
    }

    pub fn state(&self) -> PlaybackState {
        self.engine.state()
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Earliest time the app has scheduled work for, if any.
    pub fn next_wake_ms(&self) -> Option<u64> {
        self.engine.next_deadline_ms()
    }

    pub fn with_screen<F>(&self, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        if let Some(status) = self.status {
            f(Screen::Status {
                title: self.app_title,
                line1: status.line1,
                line2: status.line2,
            });
            return;
        }

        let policy_label = self.policy.label();
        let rows = self.setting_rows(policy_label);
        let settings = SettingsPanel {
            rows: &rows,
            cursor: self.settings_cursor as usize,
        };

        match self.engine.state() {
            PlaybackState::Idle => {
                let mut preview_buf = [0u8; PREVIEW_BYTES];
                let source = first_words_excerpt(&self.text, PREVIEW_SOURCE_WORDS);
                let preview = preview_compact(source, &mut preview_buf);
                let word_total = self.text.split_whitespace().count();

                f(Screen::Idle {
                    title: self.app_title,
                    preview,
                    word_total,
                    settings,
                });
            }
            state => {
                let word = self.engine.current_word();
                let (index, total) = self.engine.progress();
                let progress = progress_label(index, total);
                let delay = millis_label(self.engine.current_delay_ms().unwrap_or(0));

                f(Screen::Reading {
                    title: self.app_title,
                    word,
                    orp_index: orp_char_index(word),
                    progress: progress.as_str(),
                    delay: delay.as_str(),
                    state,
                    settings,
                });
            }
        }
    }

    fn setting_rows<'a>(
        &self,
        policy_label: &'a str,
    ) -> [SettingRowView<'a>; SettingsRow::COUNT as usize] {
        [
            SettingRowView {
                key: "Base delay",
                value: SettingValue::Millis(self.timing.base_delay_ms),
            },
            SettingRowView {
                key: "Chars per unit",
                value: SettingValue::Count(self.timing.chars_per_unit),
            },
            SettingRowView {
                key: "Unit offset",
                value: SettingValue::Millis(self.timing.unit_offset_ms),
            },
            SettingRowView {
                key: "Punctuation offset",
                value: SettingValue::Millis(self.timing.punctuation_offset_ms),
            },
            SettingRowView {
                key: "Punctuation rule",
                value: SettingValue::Label(policy_label),
            },
        ]
    }
}
