/// Widget composition for the catalog screen: filter toolbar, sort buttons
/// and the responsive card grid.
use std::fmt;
use std::path::Path;

use iced::widget::{button, column, container, image, pick_list, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length, Theme};
use iced_aw::Wrap;

use crate::state::sort::SortCriterion;
use crate::Message;

use super::controller::Session;
use super::render::ProductCard;

const CARD_WIDTH: f32 = 260.0;
const CARD_IMAGE_HEIGHT: f32 = 180.0;

/// Entry of the category selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryChoice {
    All,
    Named(String),
}

impl CategoryChoice {
    pub fn into_category(self) -> Option<String> {
        match self {
            CategoryChoice::All => None,
            CategoryChoice::Named(name) => Some(name),
        }
    }
}

impl fmt::Display for CategoryChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryChoice::All => f.write_str("Все категории"),
            CategoryChoice::Named(name) => f.write_str(name),
        }
    }
}

/// Shown while the catalog is still loading
pub fn loading<'a>() -> Element<'a, Message> {
    centered(text("Загрузка каталога…").size(20))
}

/// Shown when the catalog could not be loaded
pub fn load_failed<'a>() -> Element<'a, Message> {
    centered(text("Не удалось загрузить каталог").size(20))
}

/// The full catalog screen for a loaded session
pub fn catalog_screen(session: &Session) -> Element<'_, Message> {
    let shown = session.cards().len();
    let total = session.catalog().products.len();

    let grid: Element<'_, Message> = if shown == 0 {
        text("Нет товаров, подходящих под фильтры").into()
    } else {
        let base_dir = &session.catalog().base_dir;
        Wrap::with_elements(
            session
                .cards()
                .iter()
                .map(|card| product_card(card, base_dir))
                .collect(),
        )
        .spacing(16.0)
        .line_spacing(16.0)
        .into()
    };

    column![
        filter_bar(session),
        sort_bar(session),
        text(format!("Показано {} из {}", shown, total)).size(14),
        scrollable(grid).width(Length::Fill).height(Length::Fill),
    ]
    .spacing(16)
    .padding(24)
    .into()
}

fn filter_bar(session: &Session) -> Element<'_, Message> {
    let mut choices = vec![CategoryChoice::All];
    choices.extend(
        session
            .catalog()
            .categories
            .iter()
            .cloned()
            .map(CategoryChoice::Named),
    );
    let selected = session
        .category()
        .map_or(CategoryChoice::All, |name| CategoryChoice::Named(name.to_string()));

    row![
        pick_list(choices, Some(selected), Message::CategorySelected),
        text_input("0", session.min_input())
            .on_input(Message::MinPriceChanged)
            .on_submit(Message::ApplyPriceFilter)
            .width(140),
        text_input(&session.max_price_placeholder(), session.max_input())
            .on_input(Message::MaxPriceChanged)
            .on_submit(Message::ApplyPriceFilter)
            .width(140),
        button("Применить")
            .on_press(Message::ApplyPriceFilter)
            .padding(8),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}

fn sort_bar(session: &Session) -> Element<'_, Message> {
    let mut bar = row![].spacing(8).align_y(Alignment::Center);

    for criterion in SortCriterion::ALL {
        let style: fn(&Theme, button::Status) -> button::Style =
            if session.active_sort() == Some(criterion) {
                button::primary
            } else {
                button::secondary
            };
        bar = bar.push(
            button(criterion.label())
                .on_press(Message::SortPressed(criterion))
                .style(style)
                .padding(8),
        );
    }

    bar.push(
        button("Сбросить")
            .on_press(Message::ResetFilters)
            .style(button::danger)
            .padding(8),
    )
    .into()
}

fn product_card<'a>(card: &'a ProductCard, base_dir: &Path) -> Element<'a, Message> {
    let picture = image(image::Handle::from_path(base_dir.join(&card.image)))
        .width(Length::Fill)
        .height(Length::Fixed(CARD_IMAGE_HEIGHT));

    container(
        column![
            picture,
            text(&card.name).size(18),
            text(&card.description).size(14),
            text(format!("Цена: {}", card.price)),
            text(format!("Рейтинг: {}", card.rating)),
            text(format!("Категория: {}", card.category)),
        ]
        .spacing(6),
    )
    .padding(12)
    .width(Length::Fixed(CARD_WIDTH))
    .style(container::rounded_box)
    .into()
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
