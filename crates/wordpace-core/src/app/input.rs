impl<IN> PacerApp<IN>
where
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => self.apply_input_event(event, now_ms),
                Ok(None) => break,
                Err(_) => {
                    self.set_status("INPUT ERROR", "CHECK TERMINAL");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        if self.status.take().is_some() {
            self.pending_redraw = true;
            if !matches!(event, InputEvent::Quit) {
                return;
            }
        }

        match event {
            InputEvent::Start => {
                self.start(now_ms);
            }
            InputEvent::TogglePause => {
                if self.engine.toggle_pause(now_ms) {
                    self.pending_redraw = true;
                }
            }
            InputEvent::Stop => {
                if self.engine.stop() {
                    self.pending_redraw = true;
                }
            }
            InputEvent::NextSetting => {
                self.settings_cursor = rotate_cw(self.settings_cursor, SettingsRow::COUNT);
                self.pending_redraw = true;
            }
            InputEvent::PreviousSetting => {
                self.settings_cursor = rotate_ccw(self.settings_cursor, SettingsRow::COUNT);
                self.pending_redraw = true;
            }
            InputEvent::Increase => self.adjust_setting(true, now_ms),
            InputEvent::Decrease => self.adjust_setting(false, now_ms),
            InputEvent::TogglePolicy => self.set_policy(self.policy.toggled(), now_ms),
            InputEvent::Quit => {
                info!("quit requested");
                self.exit_requested = true;
            }
        }
    }

    fn adjust_setting(&mut self, increase: bool, now_ms: u64) {
        let timing = self.timing;
        let next = match SettingsRow::from_index(self.settings_cursor) {
            SettingsRow::BaseDelay => {
                timing.with_base_delay_ms(step_delay(timing.base_delay_ms, increase))
            }
            SettingsRow::CharsPerUnit => {
                let next = if increase {
                    timing.chars_per_unit.saturating_add(1).min(MAX_CHARS_PER_UNIT)
                } else {
                    timing.chars_per_unit.saturating_sub(1)
                };
                timing.with_chars_per_unit(next.max(1))
            }
            SettingsRow::UnitOffset => {
                timing.with_unit_offset_ms(step_delay(timing.unit_offset_ms, increase))
            }
            SettingsRow::PunctuationOffset => timing
                .with_punctuation_offset_ms(step_delay(timing.punctuation_offset_ms, increase)),
            SettingsRow::Policy => {
                self.set_policy(self.policy.toggled(), now_ms);
                return;
            }
        };

        self.set_timing(next, now_ms);
    }

    /// Apply new timing values, re-arming the in-flight word when running.
    pub fn set_timing(&mut self, timing: TimingConfig, now_ms: u64) {
        if timing == self.timing {
            return;
        }

        debug!(
            "timing base={} chars_per_unit={} unit={} punctuation={}",
            timing.base_delay_ms,
            timing.chars_per_unit,
            timing.unit_offset_ms,
            timing.punctuation_offset_ms
        );
        self.timing = timing;
        self.engine.set_config(timing, now_ms);
        self.pending_redraw = true;
    }

    pub fn set_policy(&mut self, policy: PunctuationPolicy, now_ms: u64) {
        if policy == self.policy {
            return;
        }

        debug!("punctuation policy={}", policy.label());
        self.policy = policy;
        self.engine.set_policy(policy, now_ms);
        self.pending_redraw = true;
    }

    fn set_status(&mut self, line1: &'static str, line2: &'static str) {
        self.status = Some(StatusLine { line1, line2 });
        self.pending_redraw = true;
    }
}

fn step_delay(current: u32, increase: bool) -> u32 {
    if increase {
        current.saturating_add(DELAY_STEP_MS).min(MAX_DELAY_MS)
    } else {
        current.saturating_sub(DELAY_STEP_MS)
    }
}
