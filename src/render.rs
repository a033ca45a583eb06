//! Software rasterisation of the demo.
//! Logical coordinates have their origin at the bottom left corner with the
//! y axis going up; one logical unit is one pixel.
use crate::constants::*;
use crate::demo::PointDemo;
use crate::structure::{Bitmap, Color};
use cgmath::*;

/// Convert a logical position into a pixel, `None` if off canvas
fn to_pixel(img: &Bitmap, p: Point2<f32>) -> Option<Point2<u32>> {
    if !(p.x >= 0.0 && p.y >= 0.0) {
        return None;
    }
    let (x, y) = (p.x.floor() as u32, p.y.floor() as u32);
    if x >= img.size.x || y >= img.size.y {
        return None;
    }
    Some(Point2::new(x, img.size.y - y - 1))
}

pub fn plot(img: &mut Bitmap, p: Point2<f32>, color: Color) {
    if let Some(px) = to_pixel(img, p) {
        img.set(px, color);
    }
}

pub fn draw_line(img: &mut Bitmap, a: Point2<f32>, b: Point2<f32>, color: Color) {
    let d = b - a;
    let steps = d.x.abs().max(d.y.abs()).ceil().max(1.0) as u32;
    for i in 0..=steps {
        plot(img, a + d * (i as f32 / steps as f32), color);
    }
}

/// Closed outline of a regular polygon inscribed in the circle
pub fn stroke_polygon(
    img: &mut Bitmap,
    center: Point2<f32>,
    radius: f32,
    sides: u32,
    color: Color,
) {
    let vertex = |i: u32| {
        let theta = i as f32 * TWICE_PI / sides as f32;
        center + Vector2::new(theta.cos(), theta.sin()) * radius
    };
    for i in 0..sides {
        draw_line(img, vertex(i), vertex(i + 1), color);
    }
}

pub fn draw_points(img: &mut Bitmap, points: &[Point2<f32>], color: Color) {
    for p in points {
        plot(img, *p, color);
    }
}

/// Draw a fresh frame: white background, black circle outlines
/// and red points on top of each circle.
pub fn render(demo: &PointDemo) -> Bitmap {
    let mut img = Bitmap::new(Vector2::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    img.clear(Color::one());
    for set in demo.sets().iter() {
        let circle = set.circle();
        stroke_polygon(&mut img, circle.center, circle.radius, CIRCLE_SIDES, Color::zero());
        draw_points(&mut img, set.points(), Color::red());
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samplers::independent::IndependentSampler;

    #[test]
    fn y_axis_points_up() {
        let mut img = Bitmap::new(Vector2::new(10, 5));
        plot(&mut img, Point2::new(2.5, 0.2), Color::red());
        assert_eq!(img.get(Point2::new(2, 4)), Color::red());
        plot(&mut img, Point2::new(9.9, 4.9), Color::one());
        assert_eq!(img.get(Point2::new(9, 0)), Color::one());
    }

    #[test]
    fn clipping() {
        let mut img = Bitmap::new(Vector2::new(10, 5));
        plot(&mut img, Point2::new(-0.5, 1.0), Color::red());
        plot(&mut img, Point2::new(10.0, 1.0), Color::red());
        plot(&mut img, Point2::new(1.0, 5.0), Color::red());
        plot(&mut img, Point2::new(std::f32::NAN, 1.0), Color::red());
        assert!(img.colors.iter().all(|c| *c == Color::zero()));
        draw_line(&mut img, Point2::new(-5.0, 2.0), Point2::new(15.0, 2.0), Color::red());
        assert!((0..10).all(|x| img.get(Point2::new(x, 2)) == Color::red()));
    }

    #[test]
    fn line_is_connected() {
        let mut img = Bitmap::new(Vector2::new(20, 20));
        draw_line(&mut img, Point2::new(1.0, 1.0), Point2::new(18.0, 7.0), Color::red());
        for x in 1..=18 {
            assert!(
                (0..20).any(|y| img.get(Point2::new(x, y)) == Color::red()),
                "gap at column {}",
                x
            );
        }
    }

    #[test]
    fn polygon_vertices_drawn() {
        let mut img = Bitmap::new(Vector2::new(50, 50));
        stroke_polygon(&mut img, Point2::new(25.0, 25.0), 10.0, 4, Color::red());
        for p in &[(35.0, 25.0), (25.0, 35.0), (15.0, 25.0), (25.0, 15.0)] {
            let px = to_pixel(&img, Point2::new(p.0 - 0.001, p.1 - 0.001)).unwrap();
            let around = (px.x - 1..=px.x + 1)
                .flat_map(|x| (px.y - 1..=px.y + 1).map(move |y| Point2::new(x, y)))
                .any(|q| img.get(q) == Color::red());
            assert!(around, "vertex {:?} not drawn", p);
        }
        // center untouched
        assert_eq!(img.get(Point2::new(25, 24)), Color::zero());
    }

    #[test]
    fn render_empty_demo() {
        let demo = PointDemo::new();
        let img = render(&demo);
        assert_eq!(img.size, Vector2::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        assert!(img.colors.iter().all(|c| *c != Color::red()));
        // circle centers and canvas corners are background
        assert_eq!(img.get(Point2::new(150, 199)), Color::one());
        assert_eq!(img.get(Point2::new(500, 199)), Color::one());
        assert_eq!(img.get(Point2::new(0, 0)), Color::one());
        assert_eq!(img.get(Point2::new(699, 349)), Color::one());
        let outline = img.colors.iter().filter(|c| **c == Color::zero()).count();
        assert!(outline > 2 * 400, "only {} outline pixels", outline);
    }

    #[test]
    fn render_points() {
        let mut demo = PointDemo::new();
        demo.regenerate(&mut IndependentSampler::from_seed(5));
        let before = demo.uniform.points().to_vec();
        let img = render(&demo);
        assert_eq!(demo.uniform.points(), &before[..]);
        for set in demo.sets().iter() {
            for p in set.points() {
                let px = to_pixel(&img, *p).unwrap();
                assert_eq!(img.get(px), Color::red());
            }
        }
    }
}
