/// Indicator strip
/// One clickable dot per slide, drawn on a canvas
use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Path, Program};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

use crate::state::data::Indicator;
use crate::Message;

/// Horizontal distance between dot centers
pub const DOT_SPACING: f32 = 22.0;
/// Radius of a dot
const DOT_RADIUS: f32 = 6.0;
/// Clicks within this distance of a center count as hitting the dot
const HIT_RADIUS: f32 = 10.0;

/// Canvas program drawing the indicator set
pub struct IndicatorStrip<'a> {
    pub indicators: &'a [Indicator],
}

impl IndicatorStrip<'_> {
    /// Size the canvas needs to show every dot
    pub fn size(count: usize) -> Size {
        Size::new(count as f32 * DOT_SPACING, DOT_SPACING)
    }
}

/// Center of dot `index`, relative to the strip's top-left corner
fn dot_center(index: usize) -> Point {
    Point::new(
        index as f32 * DOT_SPACING + DOT_SPACING / 2.0,
        DOT_SPACING / 2.0,
    )
}

/// Which dot, if any, lies under `position` (strip-relative)
pub fn dot_at(count: usize, position: Point) -> Option<usize> {
    let index = (position.x / DOT_SPACING).floor();
    if index < 0.0 || index as usize >= count {
        return None;
    }

    let index = index as usize;
    (position.distance(dot_center(index)) <= HIT_RADIUS).then_some(index)
}

/// Hover tracking for the strip
#[derive(Debug, Clone, Default)]
pub struct HoverState {
    pub hovered: Option<usize>,
}

impl Program<Message> for IndicatorStrip<'_> {
    type State = HoverState;

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let palette = theme.palette();

        for indicator in self.indicators {
            let color = if indicator.active {
                palette.primary
            } else if state.hovered == Some(indicator.index) {
                Color { a: 0.7, ..palette.text }
            } else {
                Color { a: 0.3, ..palette.text }
            };

            let radius = if indicator.active { DOT_RADIUS + 1.0 } else { DOT_RADIUS };
            frame.fill(&Path::circle(dot_center(indicator.index), radius), color);
        }

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        let count = self.indicators.len();
        let under_cursor = cursor
            .position_in(bounds)
            .and_then(|position| dot_at(count, position));

        match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(index) = under_cursor {
                    return (
                        canvas::event::Status::Captured,
                        Some(Message::GoTo(index as isize)),
                    );
                }
            }

            canvas::Event::Mouse(mouse::Event::CursorMoved { .. })
            | canvas::Event::Mouse(mouse::Event::CursorLeft) => {
                if state.hovered != under_cursor {
                    state.hovered = under_cursor;
                    return (
                        canvas::event::Status::Captured,
                        Some(Message::DotHovered(under_cursor)),
                    );
                }
            }

            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        let over_dot = cursor
            .position_in(bounds)
            .and_then(|position| dot_at(self.indicators.len(), position))
            .is_some();

        if over_dot {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_centers_hit() {
        for i in 0..5 {
            assert_eq!(dot_at(5, dot_center(i)), Some(i));
        }
    }

    #[test]
    fn test_gaps_and_outside_miss() {
        // Between two dots, on the cell boundary
        assert_eq!(dot_at(5, Point::new(DOT_SPACING, DOT_SPACING / 2.0)), None);
        // Past the last dot
        assert_eq!(dot_at(3, dot_center(3)), None);
        // Left of the strip
        assert_eq!(dot_at(3, Point::new(-4.0, DOT_SPACING / 2.0)), None);
    }

    #[test]
    fn test_strip_size() {
        let size = IndicatorStrip::size(4);
        assert_eq!(size.width, 4.0 * DOT_SPACING);
        assert_eq!(size.height, DOT_SPACING);
    }
}
