use crate::grading::GradedAnswer;

/// State of the review screen.
pub struct App {
    graded: Vec<GradedAnswer>,
    scroll: usize,
}

impl App {
    pub fn with_graded(graded: Vec<GradedAnswer>) -> Self {
        Self { graded, scroll: 0 }
    }

    pub fn graded(&self) -> &[GradedAnswer] {
        &self.graded
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.graded.len() {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}
