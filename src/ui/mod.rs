mod review;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);
    review::render(frame, area, app);
}
