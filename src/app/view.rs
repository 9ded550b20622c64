use super::messages::Message;
use super::state::{
    App, BACKDROP_ALPHA, CARD_META_FONT_SIZE_PX, CARD_PADDING_PX, GALLERY_SCROLL_ID,
    GRID_SPACING_PX, LIGHTBOX_MARGIN_PX,
};
use crate::gallery::{Card, SurfaceModel};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    Column, Row, button, column, container, horizontal_space, image, mouse_area, opaque, row,
    scrollable, stack, text, tooltip,
};
use iced::{Background, Color, ContentFit, Element, Length, Theme};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let surface = self.gallery.surface();

        let reload =
            button("Reload").on_press_maybe((!self.loading).then_some(Message::ReloadRequested));
        let header = row![
            text("Gallery").size(24),
            horizontal_space(),
            text(self.status_label()),
            reload
        ]
        .spacing(12)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        let body: Element<'_, Message> = if self.loading {
            container(text("Loading…")).center(Length::Fill).into()
        } else if let Some(placeholder) = &surface.placeholder {
            container(text(placeholder).size(16))
                .padding(32)
                .center_x(Length::Fill)
                .into()
        } else {
            self.card_grid(surface)
        };

        let page = column![header, body].spacing(12).padding(16);

        if surface.lightbox_visible {
            stack![page, self.lightbox(surface)].into()
        } else {
            page.into()
        }
    }

    fn card_grid<'a>(&'a self, surface: &'a SurfaceModel) -> Element<'a, Message> {
        let columns = self.config.columns.max(1);
        let mut grid = Column::new().spacing(GRID_SPACING_PX);
        for chunk in surface.cards.chunks(columns) {
            let mut line = Row::new().spacing(GRID_SPACING_PX);
            for card in chunk {
                line = line.push(self.card_view(card));
            }
            for _ in chunk.len()..columns {
                line = line.push(horizontal_space().width(Length::FillPortion(1)));
            }
            grid = grid.push(line);
        }

        scrollable(grid)
            .id(GALLERY_SCROLL_ID.clone())
            .height(Length::Fill)
            .width(Length::Fill)
            .into()
    }

    fn card_view<'a>(&'a self, card: &'a Card) -> Element<'a, Message> {
        let height = Length::Fixed(self.config.thumbnail_height);
        let thumbnail: Element<'a, Message> = match self.image_handle(&card.src) {
            Some(handle) => image(handle)
                .width(Length::Fill)
                .height(height)
                .content_fit(ContentFit::Cover)
                .into(),
            None => container(text(&card.alt).size(CARD_META_FONT_SIZE_PX))
                .center_x(Length::Fill)
                .center_y(height)
                .into(),
        };

        let meta = row![
            text(&card.name).size(CARD_META_FONT_SIZE_PX),
            horizontal_space(),
            text(&card.position).size(CARD_META_FONT_SIZE_PX)
        ]
        .spacing(6)
        .align_y(Vertical::Center);

        let body = button(column![thumbnail, meta].spacing(6))
            .on_press(Message::CardPressed(card.index))
            .padding(CARD_PADDING_PX)
            .width(Length::Fill)
            .style(button::secondary);

        container(tooltip(
            body,
            container(text(&card.label).size(CARD_META_FONT_SIZE_PX))
                .padding(4)
                .style(container::rounded_box),
            tooltip::Position::Bottom,
        ))
        .width(Length::FillPortion(1))
        .into()
    }

    fn lightbox<'a>(&'a self, surface: &'a SurfaceModel) -> Element<'a, Message> {
        let picture: Element<'a, Message> = match self.image_handle(&surface.image_src) {
            Some(handle) => image(handle)
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain)
                .into(),
            None => container(text(&surface.image_alt))
                .center(Length::Fill)
                .into(),
        };

        let controls = row![
            button("Previous").on_press(Message::PreviousPressed),
            text(&surface.caption)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
            button("Next").on_press(Message::NextPressed),
            button("Close")
                .on_press(Message::ClosePressed)
                .style(button::danger),
        ]
        .spacing(12)
        .align_y(Vertical::Center);

        let content = container(column![picture, controls].spacing(12))
            .padding(16)
            .style(container::rounded_box);

        let backdrop = container(opaque(content))
            .padding(LIGHTBOX_MARGIN_PX)
            .center(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(Color {
                    a: BACKDROP_ALPHA,
                    ..Color::BLACK
                })),
                ..container::Style::default()
            });

        mouse_area(backdrop)
            .on_press(Message::BackdropPressed)
            .on_scroll(|_| Message::BackdropScrolled)
            .into()
    }
}
