//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod form;
mod layout;

use crate::app::App;
use cafe_onboard::form::SubmissionSink;
use ratatui::Frame;

/// Main draw function
pub fn draw<S: SubmissionSink>(frame: &mut Frame, app: &App<S>) {
    let (form_area, action_area, status_area) = layout::create_layout(frame.area());

    form::draw(frame, form_area, app);
    layout::draw_actions(frame, action_area, app);
    layout::draw_status_bar(frame, status_area, app);
}
