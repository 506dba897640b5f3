// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface for players, owners and news slides.
///
/// Derived from the active theme background so cards stay readable in both
/// light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Card variant with a gold outline for the captain.
pub fn captain_card(theme: &Theme) -> container::Style {
    let base = card(theme);
    container::Style {
        border: Border {
            color: palette::ACCENT_500,
            width: 2.0,
            ..base.border
        },
        ..base
    }
}

/// Grey box shown where a photo or image is missing.
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: Some(palette::GRAY_700),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pill badge (captain, photo count) in the given color.
pub fn badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Region placeholder text for load failures and empty documents.
pub fn notice(theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(theme.extended_palette().danger.base.color),
        ..Default::default()
    }
}
