use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug)]
pub struct Entry {
    pub speaker: Speaker,
    pub text: String,
}

pub struct AppState {
    pub transcript: Vec<Entry>,
    pub list_state: ListState,
    pub input_buffer: String,
}

impl AppState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            transcript: vec![],
            list_state,
            input_buffer: String::new(),
        }
    }

    pub fn push_user(&mut self, text: String) {
        self.transcript.push(Entry {
            speaker: Speaker::User,
            text,
        });
        self.follow_tail();
    }

    pub fn push_assistant(&mut self, text: String) {
        self.transcript.push(Entry {
            speaker: Speaker::Assistant,
            text,
        });
        self.follow_tail();
    }

    /// Keeps the newest entry in view after a submit.
    fn follow_tail(&mut self) {
        if !self.transcript.is_empty() {
            self.list_state.select(Some(self.transcript.len() - 1));
        }
    }

    pub fn scroll_up(&mut self) {
        self.jump_backward(1);
    }

    pub fn scroll_down(&mut self) {
        self.jump_forward(1);
    }

    pub fn jump_forward(&mut self, step: usize) {
        if self.transcript.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        // Clamp to the last entry (don't wrap around)
        let new_index = (current + step).min(self.transcript.len() - 1);
        self.list_state.select(Some(new_index));
    }

    pub fn jump_backward(&mut self, step: usize) {
        if self.transcript.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let new_index = current.saturating_sub(step);
        self.list_state.select(Some(new_index));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
