//! Decorative starfield painted behind the central panel.

use eframe::egui::{Color32, Painter, Rect, Vec2};
use rand::Rng;

use crate::ui::config::UI_CONFIG;

/// One star, positioned as a fraction of the panel rect so the field
/// stretches with the window.
struct Star {
    offset: Vec2,
    radius: f32,
    color: Color32,
}

/// A fixed scatter of stars, generated once per app start.
pub struct Starfield {
    stars: Vec<Star>,
}

impl Default for Starfield {
    fn default() -> Self {
        Self::scatter(UI_CONFIG.star_count)
    }
}

impl Starfield {
    pub fn scatter(count: usize) -> Self {
        let mut rng = rand::thread_rng();
        let stars = (0..count)
            .map(|_| Star {
                offset: Vec2::new(rng.r#gen::<f32>(), rng.r#gen::<f32>()),
                radius: rng.gen_range(0.5..=1.5),
                color: UI_CONFIG.colors.star_colors
                    [rng.gen_range(0..UI_CONFIG.colors.star_colors.len())],
            })
            .collect();
        Self { stars }
    }

    pub fn paint(&self, painter: &Painter, rect: Rect) {
        for star in &self.stars {
            let pos = rect.min
                + Vec2::new(star.offset.x * rect.width(), star.offset.y * rect.height());
            painter.circle_filled(pos, star.radius, star.color);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.stars.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_produces_the_requested_count() {
        assert_eq!(Starfield::scatter(25).len(), 25);
        assert_eq!(Starfield::default().len(), UI_CONFIG.star_count);
    }

    #[test]
    fn offsets_stay_in_the_unit_square() {
        let field = Starfield::scatter(100);
        for star in &field.stars {
            assert!((0.0..=1.0).contains(&star.offset.x));
            assert!((0.0..=1.0).contains(&star.offset.y));
        }
    }
}
