pub struct State {
    // Cleared by the exit builtin; nothing else ends the session early.
    running: bool,
}

impl State {
    pub fn new() -> Self {
        State { running: true }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }
}
