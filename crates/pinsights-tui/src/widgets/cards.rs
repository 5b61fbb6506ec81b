//! Result cards and their loading placeholders

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use pinsights_core::{CardKind, ResultCard};

use crate::layout;
use crate::theme::styles;

/// One metric card: title in the border, value, description and an
/// optional tooltip
pub struct CardWidget<'a> {
    card: &'a ResultCard,
    show_tip: bool,
}

impl<'a> CardWidget<'a> {
    pub fn new(card: &'a ResultCard) -> Self {
        Self {
            card,
            show_tip: false,
        }
    }

    pub fn show_tip(mut self, show: bool) -> Self {
        self.show_tip = show;
        self
    }
}

impl Widget for CardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(Line::from(vec![
            Span::raw(" "),
            Span::styled(self.card.title, styles::card_title()),
            Span::raw(" "),
        ]));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 2 || inner.height == 0 {
            return;
        }
        let inner = Rect::new(inner.x + 1, inner.y, inner.width - 1, inner.height);

        let mut lines = vec![
            Line::from(Span::styled(self.card.value.as_str(), styles::card_value())),
            Line::from(Span::styled(
                self.card.description.as_str(),
                styles::text_muted(),
            )),
        ];
        if self.show_tip {
            lines.push(Line::from(Span::styled(
                self.card.tooltip,
                styles::text_secondary(),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

/// Placeholder card shown while an analysis is loading
pub struct SkeletonCard {
    frame: u64,
    index: usize,
}

impl SkeletonCard {
    pub fn new(index: usize, frame: u64) -> Self {
        Self { frame, index }
    }
}

impl Widget for SkeletonCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height == 0 {
            return;
        }

        // A pulse moves across the cards so the placeholder looks alive
        let shine = (self.frame / 3) as usize % CardKind::ALL.len() == self.index;
        let style = styles::skeleton(shine);

        let bar = |len: u16| "░".repeat(len.min(inner.width - 2) as usize);
        let lines = vec![
            Line::from(Span::styled(bar(6), style)),
            Line::from(Span::styled(bar(inner.width * 2 / 3), style)),
        ];
        Paragraph::new(lines).render(Rect::new(inner.x + 1, inner.y, inner.width - 1, inner.height), buf);
    }
}

/// All five cards laid out in the grid
pub struct CardGrid<'a> {
    cards: &'a [ResultCard],
    show_tips: bool,
}

impl<'a> CardGrid<'a> {
    pub fn new(cards: &'a [ResultCard], show_tips: bool) -> Self {
        Self { cards, show_tips }
    }
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let slots = layout::card_grid(area, self.show_tips);
        for (card, slot) in self.cards.iter().zip(slots) {
            CardWidget::new(card).show_tip(self.show_tips).render(slot, buf);
        }
    }
}

/// Skeleton version of [`CardGrid`]
pub struct SkeletonGrid {
    frame: u64,
}

impl SkeletonGrid {
    pub fn new(frame: u64) -> Self {
        Self { frame }
    }
}

impl Widget for SkeletonGrid {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let slots = layout::card_grid(area, false);
        for (index, slot) in slots.into_iter().enumerate() {
            SkeletonCard::new(index, self.frame).render(slot, buf);
        }
    }
}
