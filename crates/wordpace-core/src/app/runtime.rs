impl<IN> PacerApp<IN>
where
    IN: InputProvider,
{
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);

        let stepped = match self.engine.tick(now_ms) {
            StepResult::Waiting => false,
            StepResult::Advanced => true,
            StepResult::Finished => {
                info!("reached end of text");
                true
            }
        };

        if stepped || self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// Tokenize the current text and start a fresh run.
    ///
    /// Blank text or an already active run leaves everything unchanged.
    pub fn start(&mut self, now_ms: u64) -> bool {
        let words = tokenize(&self.text);
        if words.is_empty() {
            debug!("start ignored: text is blank");
            return false;
        }

        let total = words.len();
        let started = self.engine.start(words, self.timing, now_ms);
        if started {
            info!("reading {} words policy={}", total, self.policy.label());
            self.pending_redraw = true;
        }
        started
    }

    /// Stop playback, cancelling any pending advance. Safe to call twice.
    pub fn shutdown(&mut self) {
        if self.engine.stop() {
            info!("playback stopped on shutdown");
        }
        self.pending_redraw = true;
    }
}
