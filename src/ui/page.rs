// SPDX-License-Identifier: MPL-2.0
//! Club page: squad, owners, news carousel, fixtures, tournament and links.
//!
//! Every gallery-capable image is wrapped in a mouse area that reports its
//! marked element, so the lightbox decides what a click means.

use crate::app::{Message, NewsMessage};
use crate::gallery::ImageMarkers;
use crate::i18n::fluent::I18n;
use crate::site::document::Region;
use crate::site::embed::Tournament;
use crate::site::fixtures::{Fixture, Schedule};
use crate::site::links::ExternalLink;
use crate::site::news::NewsItem;
use crate::site::owners::Owner;
use crate::site::squad::{Badge, Player, Squad};
use crate::site::{NewsCarousel, Site};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use chrono::Local;
use iced::alignment::{Horizontal, Vertical};
use iced::mouse;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, mouse_area, Column, Container, Row, Scrollable, Space, Text};
use iced::{ContentFit, Element, Length};

/// Cards per row in the squad and owners grids.
const CARDS_PER_ROW: usize = 4;

/// The whole scrollable page.
pub fn view<'a>(site: &'a Site, i18n: &'a I18n) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .max_width(sizing::PAGE_MAX_WIDTH)
        .push(Text::new(i18n.tr("window-title")).size(typography::TITLE_LG))
        .push(fixtures_section(&site.fixtures, i18n))
        .push(news_section(&site.news, &site.carousel, i18n))
        .push(squad_section(&site.squad, i18n))
        .push(owners_section(&site.owners, i18n));
    if let Some(tournament) = &site.tournament {
        content = content.push(tournament_section(tournament, i18n));
    }
    if !site.links.is_empty() {
        content = content.push(links_section(&site.links, i18n));
    }

    Scrollable::new(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn section<'a>(title: String, body: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::MD)
        .push(Text::new(title).size(typography::TITLE_MD))
        .push(body)
        .into()
}

/// Localized placeholder for a region that has nothing to show.
fn notice<'a, T>(region: &Region<T>, i18n: &I18n) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XXS);
    if let Some(key) = region.placeholder() {
        column = column.push(Text::new(i18n.tr(key)).size(typography::BODY));
    }
    if let Region::Failed { cause, .. } = region {
        column = column.push(Text::new(i18n.tr(cause.i18n_key())).size(typography::CAPTION));
    }
    Container::new(column)
        .padding(spacing::MD)
        .style(styles::container::notice)
        .into()
}

/// An image that reports its markers when clicked.
fn marked_image<'a>(
    src: &'a str,
    markers: ImageMarkers,
    width: f32,
    height: f32,
    fit: ContentFit,
) -> Element<'a, Message> {
    let picture = Image::new(Handle::from_path(src))
        .content_fit(fit)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height));
    mouse_area(picture)
        .interaction(mouse::Interaction::Pointer)
        .on_press(Message::Clicked(markers.to_element()))
        .into()
}

fn missing_image<'a>(label: String, width: f32, height: f32) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}

/// A clickable link that asks the app to open `href` outside the window.
fn link_button<'a>(label: String, href: &str, size: f32) -> Element<'a, Message> {
    button(Text::new(label).size(size))
        .padding(0)
        .style(styles::button::link)
        .on_press(Message::OpenLink(href.to_string()))
        .into()
}

fn badge<'a>(label: String, color: iced::Color) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .padding([2.0, spacing::XS])
        .style(styles::container::badge(color))
        .into()
}

fn card_grid<'a>(cards: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::MD);
    let mut row = Row::new().spacing(spacing::MD);
    let mut in_row = 0;
    for card in cards {
        row = row.push(card);
        in_row += 1;
        if in_row == CARDS_PER_ROW {
            rows = rows.push(row);
            row = Row::new().spacing(spacing::MD);
            in_row = 0;
        }
    }
    if in_row > 0 {
        rows = rows.push(row);
    }
    rows.into()
}

// Squad

fn squad_section<'a>(region: &'a Region<Squad>, i18n: &'a I18n) -> Element<'a, Message> {
    let Some(squad) = region.ready() else {
        return section(i18n.tr("section-squad"), notice(region, i18n));
    };
    let title = match &squad.season {
        Some(season) => i18n.tr_with_args("section-squad-season", &[("season", season.as_str())]),
        None => i18n.tr("section-squad"),
    };
    let cards = squad
        .players
        .iter()
        .map(|player| player_card(player, i18n))
        .collect();
    section(title, card_grid(cards))
}

fn player_card<'a>(player: &'a Player, i18n: &'a I18n) -> Element<'a, Message> {
    let portrait = match (&player.photo, player.markers()) {
        (Some(photo), Some(markers)) => marked_image(
            photo,
            markers,
            sizing::PORTRAIT,
            sizing::PORTRAIT,
            ContentFit::Cover,
        ),
        _ => missing_image(i18n.tr("photo-missing"), sizing::PORTRAIT, sizing::PORTRAIT),
    };

    let badges = player.badges.iter().fold(
        Row::new().spacing(spacing::XXS),
        |row, badge_kind| {
            let color = match badge_kind {
                Badge::Captain => palette::ACCENT_500,
                _ => palette::PRIMARY_500,
            };
            row.push(badge(i18n.tr(badge_kind.i18n_key()), color))
        },
    );

    let mut content = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(portrait)
        .push(Text::new(player.name.as_str()).size(typography::TITLE_SM));
    if let Some(role) = &player.role {
        content = content.push(Text::new(role.as_str()).size(typography::BODY));
    }
    let content = content.push(badges);

    let card = Container::new(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::SM);
    if player.is_captain() {
        card.style(styles::container::captain_card).into()
    } else {
        card.style(styles::container::card).into()
    }
}

// Owners

fn owners_section<'a>(region: &'a Region<Vec<Owner>>, i18n: &'a I18n) -> Element<'a, Message> {
    let body = match region.ready() {
        Some(owners) => card_grid(owners.iter().map(|owner| owner_card(owner, i18n)).collect()),
        None => notice(region, i18n),
    };
    section(i18n.tr("section-owners"), body)
}

fn owner_card<'a>(owner: &'a Owner, i18n: &'a I18n) -> Element<'a, Message> {
    let portrait = match (&owner.photo, owner.markers()) {
        (Some(photo), Some(markers)) => marked_image(
            photo,
            markers,
            sizing::PORTRAIT,
            sizing::PORTRAIT,
            ContentFit::Cover,
        ),
        _ => missing_image(i18n.tr("photo-missing"), sizing::PORTRAIT, sizing::PORTRAIT),
    };

    let mut content = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(portrait)
        .push(Text::new(owner.name.as_str()).size(typography::TITLE_SM));
    if let Some(title) = &owner.title {
        content = content.push(Text::new(title.as_str()).size(typography::BODY));
    }
    if let Some(about) = &owner.about {
        content = content.push(Text::new(about.as_str()).size(typography::CAPTION));
    }

    Container::new(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::card)
        .into()
}

// News

fn news_section<'a>(
    region: &'a Region<Vec<NewsItem>>,
    carousel: &'a NewsCarousel,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let title = i18n.tr("section-news");
    let Some(items) = region.ready() else {
        return section(title, notice(region, i18n));
    };
    let Some(item) = items.get(carousel.current()) else {
        return section(title, notice(region, i18n));
    };

    let slide = news_slide(item, carousel.image_index(carousel.current()), i18n);

    let mut controls = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center);
    if items.len() > 1 {
        controls = controls.push(
            button(Text::new(i18n.tr("news-previous")))
                .style(styles::button::primary)
                .on_press(Message::News(NewsMessage::Previous)),
        );
        for slide_index in 0..items.len() {
            controls = controls.push(
                button(Space::new().width(spacing::XS).height(spacing::XS))
                    .padding(spacing::XXS)
                    .style(styles::button::dot(slide_index == carousel.current()))
                    .on_press(Message::News(NewsMessage::Select(slide_index))),
            );
        }
        controls = controls.push(
            button(Text::new(i18n.tr("news-next")))
                .style(styles::button::primary)
                .on_press(Message::News(NewsMessage::Next)),
        );
    }

    let body = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(slide)
        .push(controls);
    section(title, body.into())
}

fn news_slide<'a>(item: &'a NewsItem, displayed: usize, i18n: &'a I18n) -> Element<'a, Message> {
    let picture = match (item.images.get(displayed), item.markers(displayed)) {
        (Some(src), Some(markers)) => {
            let image = marked_image(
                src,
                markers,
                sizing::CARD_WIDTH * 3.0,
                sizing::SLIDE_IMAGE_HEIGHT,
                ContentFit::Contain,
            );
            let mut column = Column::new()
                .spacing(spacing::XXS)
                .align_x(Horizontal::Right);
            if let Some(count) = item.photo_count() {
                let count = count.to_string();
                column = column.push(badge(
                    i18n.tr_with_args("news-photo-count", &[("count", count.as_str())]),
                    palette::GRAY_900,
                ));
            }
            column.push(image).into()
        }
        _ => missing_image(
            i18n.tr("news-no-images"),
            sizing::CARD_WIDTH * 3.0,
            sizing::SLIDE_IMAGE_HEIGHT,
        ),
    };

    let mut content = Column::new()
        .spacing(spacing::XS)
        .push(picture)
        .push(Text::new(item.title.as_str()).size(typography::TITLE_SM));
    if let Some(date) = &item.date {
        content = content.push(Text::new(date.as_str()).size(typography::CAPTION));
    }
    if let Some(summary) = &item.summary {
        content = content.push(Text::new(summary.as_str()).size(typography::BODY));
    }
    if let Some(link) = &item.link {
        content = content.push(link_button(
            i18n.tr("news-open-details"),
            link,
            typography::CAPTION,
        ));
    }

    Container::new(content)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

// Fixtures

fn fixtures_section<'a>(region: &'a Region<Schedule>, i18n: &'a I18n) -> Element<'a, Message> {
    let next = match region.ready() {
        Some(schedule) => match schedule.next_match(Local::now()) {
            Some(fixture) => fixture_card(fixture, i18n),
            None => next_match_placeholder(i18n.tr("fixtures-next-placeholder"), i18n),
        },
        // An empty schedule still shows the card, dated TBC.
        None if matches!(region, Region::Empty { .. }) => {
            next_match_placeholder(i18n.tr("fixtures-empty"), i18n)
        }
        None => notice(region, i18n),
    };

    let mut body = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(i18n.tr("section-next-match")).size(typography::TITLE_SM))
        .push(next);

    if let Some(schedule) = region.ready() {
        let list = schedule
            .fixtures
            .iter()
            .fold(Column::new().spacing(spacing::XXS), |list, fixture| {
                list.push(fixture_row(fixture, i18n))
            });
        body = body.push(list);
    }

    section(i18n.tr("section-fixtures"), body.into())
}

fn fixture_card<'a>(fixture: &Fixture, i18n: &I18n) -> Element<'a, Message> {
    let date = fixture
        .date_label()
        .unwrap_or_else(|| i18n.tr("fixtures-tbc"));
    let note = fixture
        .note()
        .unwrap_or_else(|| i18n.tr("fixtures-details-tbc"));
    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(date).size(typography::TITLE_MD))
            .push(Text::new(note).size(typography::BODY)),
    )
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}

fn next_match_placeholder<'a>(note: String, i18n: &I18n) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(i18n.tr("fixtures-tbc")).size(typography::TITLE_MD))
            .push(Text::new(note).size(typography::BODY)),
    )
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}

fn fixture_row<'a>(fixture: &Fixture, i18n: &I18n) -> Element<'a, Message> {
    let date = fixture
        .date_label()
        .unwrap_or_else(|| i18n.tr("fixtures-tbc"));
    let note = fixture
        .note()
        .unwrap_or_else(|| i18n.tr("fixtures-details-tbc"));
    Row::new()
        .spacing(spacing::MD)
        .push(
            Text::new(date)
                .size(typography::BODY)
                .width(Length::Fixed(sizing::CARD_WIDTH * 0.75)),
        )
        .push(Text::new(note).size(typography::BODY))
        .into()
}

// Tournament and links

fn tournament_section<'a>(tournament: &'a Tournament, i18n: &'a I18n) -> Element<'a, Message> {
    let title = tournament
        .name
        .clone()
        .unwrap_or_else(|| i18n.tr("section-tournament"));
    let mut body = Column::new().spacing(spacing::XXS);
    if let Some(url) = &tournament.url {
        body = body.push(link_button(i18n.tr("tournament-view"), url, typography::BODY));
    }
    if let Some(url) = &tournament.team_url {
        body = body.push(link_button(
            i18n.tr("tournament-team-profile"),
            url,
            typography::BODY,
        ));
    }
    section(title, body.into())
}

fn links_section<'a>(links: &'a [ExternalLink], i18n: &'a I18n) -> Element<'a, Message> {
    let list = links.iter().fold(
        Column::new().spacing(spacing::XXS),
        |list, link| {
            list.push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(
                        Text::new(i18n.tr(link.kind.i18n_key()))
                            .size(typography::BODY)
                            .width(Length::Fixed(sizing::CARD_WIDTH * 0.5)),
                    )
                    .push(link_button(
                        link.href.clone(),
                        &link.href,
                        typography::BODY,
                    )),
            )
        },
    );
    section(i18n.tr("section-links"), list.into())
}
