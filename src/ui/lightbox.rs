// SPDX-License-Identifier: MPL-2.0
//! Lightbox rendering: backdrop, direct image with caption and controls,
//! and the thumbnail grid.
//!
//! The view only reads the gallery state. Every interaction is reported as a
//! [`Message`] carrying the same marked element a page click would, so the
//! update loop routes lightbox clicks through the regular click arbitration.

use crate::app::Message;
use crate::gallery::markers::{attr, class};
use crate::gallery::{KeyCommand, Lightbox, MarkedElement, Mode, Thumbnail};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::widget::image::{Handle, Image};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{button, mouse_area, Column, Container, Id, Row, Scrollable, Stack, Text};
use iced::{ContentFit, Element, Length};

/// Scrollable id of the thumbnail grid.
pub const THUMBS_ID: &str = "lightbox-thumbs";

/// Thumbnails per grid row.
pub const GRID_COLUMNS: usize = 4;

/// Scroll offset that brings the row holding `position` into view.
///
/// The grid scrolls vertically only, so the offset is the row's share of the
/// scrollable range: the first row maps to the top, the last row to the bottom.
#[must_use]
pub fn reveal_offset(position: usize, count: usize, columns: usize) -> RelativeOffset {
    let columns = columns.max(1);
    let rows = count.div_ceil(columns);
    if rows <= 1 {
        return RelativeOffset { x: 0.0, y: 0.0 };
    }
    let row = (position / columns).min(rows - 1);
    RelativeOffset {
        x: 0.0,
        y: row as f32 / (rows - 1) as f32,
    }
}

/// Renders the lightbox, or `None` while it is closed.
pub fn view<'a>(lightbox: &'a Lightbox, i18n: &'a I18n) -> Option<Element<'a, Message>> {
    let viewer = lightbox.viewer();
    let content = match viewer.mode() {
        Mode::Closed => return None,
        Mode::Direct => direct(lightbox, i18n),
        Mode::Grid => grid(viewer.thumbnails()),
    };

    let backdrop = mouse_area(
        Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    // Keeps the page underneath from reacting to the pointer.
    .interaction(mouse::Interaction::Idle)
    .on_press(Message::Clicked(
        MarkedElement::new().with_class(class::BACKDROP),
    ));

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(content);

    if lightbox.layout().controls {
        let close = button(Text::new("✕").size(typography::TITLE_MD))
            .padding(spacing::XS)
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_STRONG,
                opacity::OVERLAY_HOVER,
            ))
            .on_press(Message::Key(KeyCommand::Close));
        let close = Column::new()
            .align_x(Horizontal::Center)
            .push(close)
            .push(Text::new(i18n.tr("lightbox-close")).size(typography::CAPTION));
        stack = stack.push(
            Container::new(close)
                .width(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Right),
        );
    }

    Some(stack.into())
}

fn direct<'a>(lightbox: &'a Lightbox, i18n: &'a I18n) -> Element<'a, Message> {
    let viewer = lightbox.viewer();
    let layout = lightbox.layout();

    let mut column = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .height(Length::Fill);

    if let Some(src) = viewer.current_image() {
        let picture = Image::new(Handle::from_path(src))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill);
        // Clicks on the picture itself must not reach the backdrop.
        let picture = mouse_area(picture)
            .interaction(mouse::Interaction::Idle)
            .on_press(Message::Clicked(
                MarkedElement::new().with_attribute(attr::ALT, viewer.alt_text()),
            ));
        column = column.push(picture);
    }

    let caption = viewer.caption();
    if layout.caption && !caption.is_empty() {
        column = column.push(
            Container::new(Text::new(caption).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::overlay::indicator(radius::FULL)),
        );
    }

    let body = Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    if !layout.controls {
        return body.into();
    }

    let previous = nav_button("◀", class::PREVIOUS, i18n.tr("lightbox-previous"));
    let next = nav_button("▶", class::NEXT, i18n.tr("lightbox-next"));

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(body)
        .push(
            Container::new(previous)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Left)
                .align_y(Vertical::Center),
        )
        .push(
            Container::new(next)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Center),
        )
        .into()
}

fn nav_button<'a>(glyph: &'a str, marker: &str, label: String) -> Element<'a, Message> {
    let content = Column::new()
        .align_x(Horizontal::Center)
        .push(Text::new(glyph).size(typography::TITLE_LG))
        .push(Text::new(label).size(typography::CAPTION));

    button(content)
        .width(Length::Fixed(sizing::NAV_BUTTON * 1.5))
        .padding(spacing::SM)
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_STRONG,
            opacity::OVERLAY_HOVER,
        ))
        .on_press(Message::Clicked(MarkedElement::new().with_class(marker)))
        .into()
}

fn grid<'a>(thumbnails: impl Iterator<Item = Thumbnail<'a>>) -> Element<'a, Message> {
    let mut rows = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center);
    let mut row = Row::new().spacing(spacing::MD);
    let mut in_row = 0;

    for thumbnail in thumbnails {
        row = row.push(thumbnail_button(thumbnail));
        in_row += 1;
        if in_row == GRID_COLUMNS {
            rows = rows.push(row);
            row = Row::new().spacing(spacing::MD);
            in_row = 0;
        }
    }
    if in_row > 0 {
        rows = rows.push(row);
    }

    let scrollable = Scrollable::new(
        Container::new(rows)
            .width(Length::Fill)
            .padding(spacing::XL)
            .align_x(Horizontal::Center),
    )
    .id(Id::new(THUMBS_ID))
    .width(Length::Fill)
    .height(Length::Fill);

    Container::new(scrollable)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .into()
}

fn thumbnail_button(thumbnail: Thumbnail<'_>) -> Element<'_, Message> {
    let picture = Image::new(Handle::from_path(thumbnail.src))
        .content_fit(ContentFit::Cover)
        .width(Length::Fixed(sizing::THUMBNAIL))
        .height(Length::Fixed(sizing::THUMBNAIL));

    let content = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(picture)
        .push(Text::new(thumbnail.label).size(typography::CAPTION));

    button(content)
        .padding(spacing::XXS)
        .style(styles::button::thumbnail)
        .on_press(Message::ThumbnailChosen(thumbnail.position))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_row_grid_never_scrolls() {
        assert_eq!(reveal_offset(0, 3, GRID_COLUMNS).y, 0.0);
        assert_eq!(reveal_offset(3, 4, GRID_COLUMNS).y, 0.0);
    }

    #[test]
    fn last_row_scrolls_to_bottom() {
        let offset = reveal_offset(9, 10, GRID_COLUMNS);
        assert!((offset.y - 1.0).abs() < f32::EPSILON);
        assert_eq!(offset.x, 0.0);
    }

    #[test]
    fn middle_row_scrolls_proportionally() {
        // 12 images in 3 rows: row 1 is halfway.
        let offset = reveal_offset(5, 12, GRID_COLUMNS);
        assert!((offset.y - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn zero_columns_is_treated_as_one() {
        let offset = reveal_offset(1, 3, 0);
        assert!((offset.y - 0.5).abs() < f32::EPSILON);
    }
}
