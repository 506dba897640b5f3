// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is always drawn; the lightbox, when open, is stacked on top.

use super::Message;
use crate::gallery::Lightbox;
use crate::i18n::fluent::I18n;
use crate::site::Site;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{lightbox, page, styles};
use iced::widget::{Column, Container, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub site: &'a Site,
    pub lightbox: Option<&'a Lightbox>,
    /// i18n key of a startup warning.
    pub warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new();
    if let Some(key) = ctx.warning {
        column = column.push(
            Container::new(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::container::notice),
        );
    }
    let page = Container::new(column.push(page::view(ctx.site, ctx.i18n)))
        .width(Length::Fill)
        .height(Length::Fill);

    let overlay = ctx
        .lightbox
        .and_then(|installed| lightbox::view(installed, ctx.i18n));

    match overlay {
        Some(overlay) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(page)
            .push(overlay)
            .into(),
        None => page.into(),
    }
}
