//! Main render/view function (View in TEA pattern)


use pinsights_app::AppState;
use pinsights_core::{result_cards, RequestState};
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::layout::{self, LayoutPlan};
use crate::theme::{palette, styles};
use crate::widgets;

pub const EMPTY_HINT: &str = "Enter a website URL above and press Enter to analyze it.";

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let error = state.request.error_message();
    let cards = state.request.result().map(result_cards);

    let content_height = match &state.request {
        RequestState::Loading => layout::card_grid_height(false),
        RequestState::Success(_) => layout::card_grid_height(state.show_tips),
        _ => 3,
    };

    let areas = layout::create(
        area,
        LayoutPlan {
            alert_height: error
                .as_deref()
                .map(|m| widgets::ErrorAlert::height(m, area.width))
                .unwrap_or(0),
            content_height,
            show_about: state.settings.ui.show_about,
        },
    );

    frame.render_widget(
        widgets::MainHeader::new(&state.request).frame(state.animation_frame),
        areas.header,
    );

    let input = widgets::UrlInput::new(state);
    if let Some(position) = input.cursor_position(areas.input) {
        frame.set_cursor_position(position);
    }
    frame.render_widget(input, areas.input);

    if let (Some(alert_area), Some(message)) = (areas.alert, error.as_deref()) {
        frame.render_widget(widgets::ErrorAlert::new(message), alert_area);
    }

    match (&state.request, &cards) {
        (RequestState::Loading, _) => {
            frame.render_widget(
                widgets::SkeletonGrid::new(state.animation_frame),
                areas.content,
            );
        }
        (_, Some(cards)) => {
            frame.render_widget(
                widgets::CardGrid::new(cards, state.show_tips),
                areas.content,
            );
        }
        _ => {
            let hint = Paragraph::new(Line::from(Span::styled(EMPTY_HINT, styles::text_muted())))
                .alignment(Alignment::Center);
            let mut hint_area = areas.content;
            hint_area.y += hint_area.height / 2;
            hint_area.height = hint_area.height.min(1);
            frame.render_widget(hint, hint_area);
        }
    }

    if let Some(about_area) = areas.about {
        frame.render_widget(
            widgets::AboutPanel::new(state.show_about_details),
            about_area,
        );
    }

    frame.render_widget(widgets::Footer, areas.footer);
    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
