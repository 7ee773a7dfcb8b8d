/// Views for the intro screen and the slideshow area
///
/// Every function here only reads the controller's presentation records;
/// nothing in the view layer decides which slide is active.
use iced::widget::{
    button, canvas, column, container, mouse_area, row, scrollable, text, text_input, Column,
    Space,
};
use iced::{Alignment, Background, Border, Color, Element, Length, Theme};

use super::dots::IndicatorStrip;
use crate::state::controller::Controller;
use crate::state::data::{Focus, Intro, Slide};
use crate::state::deck::Deck;
use crate::Message;

/// Height of the slide stage
const STAGE_HEIGHT: f32 = 360.0;

/// Scrollable wrapping the slideshow, scrolled back to the top on dismiss
pub fn site_scroll_id() -> scrollable::Id {
    scrollable::Id::new("site")
}

/// Focus target standing for the slide stage. No text field carries this
/// id, so focusing it takes keyboard focus away from every field.
pub fn stage_focus_id() -> text_input::Id {
    text_input::Id::new("stage")
}

/// The intro splash screen, drawn over the slideshow while `displayed`.
/// Once `hidden` it keeps its space but draws nothing.
pub fn intro<'a>(deck: &'a Deck, intro: Intro) -> Element<'a, Message> {
    if !intro.displayed {
        return Space::new(Length::Shrink, Length::Shrink).into();
    }

    if intro.hidden || intro.aria_hidden {
        return container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    }

    let content = column![
        text(&deck.title).size(48),
        text(&deck.tagline).size(18),
        button(text(&deck.start_label).size(20))
            .on_press(Message::Start)
            .padding([10, 24]),
    ]
    .spacing(20)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(Background::Color(theme.palette().background)),
            ..container::Style::default()
        })
        .into()
}

/// The slideshow: the active slide, the controls and the indicator strip.
/// Empty until the site is ready. The scrollable stays mounted either way
/// so a scroll request issued on dismiss still finds it.
pub fn site<'a>(
    deck: &'a Deck,
    controller: &'a Controller,
    jump_value: &'a str,
    hovered_dot: Option<usize>,
) -> Element<'a, Message> {
    let site = controller.site();
    if !site.ready || site.aria_hidden {
        return scrollable(Space::new(Length::Fill, Length::Shrink))
            .id(site_scroll_id())
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    }

    let stage = mouse_area(
        Column::with_children(
            controller
                .slides()
                .iter()
                .filter(|slide| !slide.aria_hidden)
                .map(|slide| slide_view(deck, slide, controller.focus())),
        )
        .width(Length::Fill),
    )
    .on_enter(Message::StageHovered(true))
    .on_exit(Message::StageHovered(false));

    let controls = row![
        button(text("‹ Prev")).on_press(Message::Prev).padding(10),
        text(format!("{} / {}", controller.current() + 1, controller.len())).size(16),
        button(text("Next ›")).on_press(Message::Next).padding(10),
        text_input("Go to…", jump_value)
            .on_input(Message::JumpInput)
            .on_submit(Message::JumpSubmit)
            .width(Length::Fixed(90.0))
            .padding(8),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let strip_size = IndicatorStrip::size(controller.indicators().len());
    let dots = canvas(IndicatorStrip {
        indicators: controller.indicators(),
    })
    .width(Length::Fixed(strip_size.width))
    .height(Length::Fixed(strip_size.height));

    // Label of the hovered dot, else the active one
    let label_index = hovered_dot.unwrap_or(controller.current());
    let dot_label = controller
        .indicators()
        .get(label_index)
        .map(|indicator| indicator.label())
        .unwrap_or_default();

    let content = column![
        stage,
        controls,
        dots,
        text(dot_label).size(12),
    ]
    .spacing(20)
    .padding(40)
    .align_x(Alignment::Center);

    scrollable(content)
        .id(site_scroll_id())
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// One slide container; the focused one gets a ring
fn slide_view<'a>(deck: &'a Deck, slide: &Slide, focus: Focus) -> Element<'a, Message> {
    let Some(content) = deck.slide(slide.index) else {
        return Space::new(Length::Shrink, Length::Shrink).into();
    };

    let focused = focus == Focus::Slide(slide.index);

    container(
        column![text(&content.title).size(36), text(&content.body).size(18)].spacing(16),
    )
    .width(Length::Fill)
    .height(Length::Fixed(STAGE_HEIGHT))
    .padding(32)
    .style(move |theme: &Theme| {
        let palette = theme.extended_palette();
        let border_color = if focused {
            palette.primary.strong.color
        } else {
            Color::TRANSPARENT
        };

        container::Style {
            background: Some(Background::Color(palette.background.weak.color)),
            border: Border {
                color: border_color,
                width: 2.0,
                radius: 12.0.into(),
            },
            ..container::Style::default()
        }
    })
    .into()
}
