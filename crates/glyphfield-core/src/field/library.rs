use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::GlyphError;
use crate::field::params::PatternParams;

/// Golden ratio, used by the golden_* family for spiral and petal spacing.
#[inline]
fn phi() -> f64 {
    (1.0 + 5.0_f64.sqrt()) / 2.0
}

/// Fixed Fibonacci table indexed by fibonacci_grid. The length is a constant
/// of the field, not configurable.
const FIB: [f64; 11] = [1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0, 89.0];

/// The registered fields. Dispatch is one exhaustive match in [`Pattern::eval`];
/// adding a variant without a formula is a compile error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    Waves,
    Ripples,
    Spiral,
    Maze,
    Diamond,
    Plasma,
    Tunnel,
    Mandala,
    MavignierDots,
    MavignierLines,
    MavignierKinetic,
    MavignierGeometric,
    GoldenSpiral,
    FibonacciGrid,
    GoldenRectangles,
    GoldenPetals,
}

impl Pattern {
    pub const ALL: [Pattern; 16] = [
        Pattern::Waves,
        Pattern::Ripples,
        Pattern::Spiral,
        Pattern::Maze,
        Pattern::Diamond,
        Pattern::Plasma,
        Pattern::Tunnel,
        Pattern::Mandala,
        Pattern::MavignierDots,
        Pattern::MavignierLines,
        Pattern::MavignierKinetic,
        Pattern::MavignierGeometric,
        Pattern::GoldenSpiral,
        Pattern::FibonacciGrid,
        Pattern::GoldenRectangles,
        Pattern::GoldenPetals,
    ];

    /// Stable registry key for this field.
    pub fn name(self) -> &'static str {
        match self {
            Pattern::Waves => "waves",
            Pattern::Ripples => "ripples",
            Pattern::Spiral => "spiral",
            Pattern::Maze => "maze",
            Pattern::Diamond => "diamond",
            Pattern::Plasma => "plasma",
            Pattern::Tunnel => "tunnel",
            Pattern::Mandala => "mandala",
            Pattern::MavignierDots => "mavignier_dots",
            Pattern::MavignierLines => "mavignier_lines",
            Pattern::MavignierKinetic => "mavignier_kinetic",
            Pattern::MavignierGeometric => "mavignier_geometric",
            Pattern::GoldenSpiral => "golden_spiral",
            Pattern::FibonacciGrid => "fibonacci_grid",
            Pattern::GoldenRectangles => "golden_rectangles",
            Pattern::GoldenPetals => "golden_petals",
        }
    }

    /// Sample the field at grid cell (x, y) and time t.
    ///
    /// Pure and total over finite input: every formula is a closed-form
    /// trig/geometric composition returning a finite value nominally in
    /// about [-1.5, 1.5]. Clamping is the quantizer's job, not ours.
    pub fn eval(self, x: f64, y: f64, t: f64, p: &PatternParams) -> f64 {
        match self {
            Pattern::Waves => waves(x, y, t, p),
            Pattern::Ripples => ripples(x, y, t, p),
            Pattern::Spiral => spiral(x, y, t, p),
            Pattern::Maze => maze(x, y, t, p),
            Pattern::Diamond => diamond(x, y, t, p),
            Pattern::Plasma => plasma(x, y, t, p),
            Pattern::Tunnel => tunnel(x, y, t, p),
            Pattern::Mandala => mandala(x, y, t, p),
            Pattern::MavignierDots => mavignier_dots(x, y, t, p),
            Pattern::MavignierLines => mavignier_lines(x, y, t, p),
            Pattern::MavignierKinetic => mavignier_kinetic(x, y, t, p),
            Pattern::MavignierGeometric => mavignier_geometric(x, y, t, p),
            Pattern::GoldenSpiral => golden_spiral(x, y, t, p),
            Pattern::FibonacciGrid => fibonacci_grid(x, y, t, p),
            Pattern::GoldenRectangles => golden_rectangles(x, y, t, p),
            Pattern::GoldenPetals => golden_petals(x, y, t, p),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = GlyphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| GlyphError::UnknownPattern(s.to_string()))
    }
}

/// Offset from grid center plus polar coordinates, shared by the radial
/// fields.
#[inline]
fn polar(x: f64, y: f64, p: &PatternParams) -> (f64, f64, f64, f64) {
    let (cx, cy) = p.center();
    let dx = x - cx;
    let dy = y - cy;
    let dist = (dx * dx + dy * dy).sqrt();
    let angle = dy.atan2(dx);
    (dx, dy, dist, angle)
}

fn waves(x: f64, y: f64, t: f64, p: &PatternParams) -> f64 {
    (x * p.scale + t * p.speed * 0.1).sin() * (y * p.scale * 0.8 + t * p.speed * 0.05).cos()
}

fn ripples(x: f64, y: f64, t: f64, p: &PatternParams) -> f64 {
    let (_, _, dist, _) = polar(x, y, p);
    (dist * p.scale - t * p.speed * 0.1).sin()
}

fn spiral(x: f64, y: f64, t: f64, p: &PatternParams) -> f64 {
    let (_, _, dist, angle) = polar(x, y, p);
    (angle * 3.0 + dist * p.scale + t * p.speed * 0.1).sin()
}

fn maze(x: f64, y: f64, t: f64, p: &PatternParams) -> f64 {
    // Two independent 1D sinusoids; no radial component.
    let noise1 = (x * p.scale + t * p.speed * 0.05).sin();
    let noise2 = (y * p.scale + t * p.speed * 0.03).cos();
    noise1 * noise2
}

fn diamond(x: f64, y: f64, t: f64, p: &PatternParams) -> f64 {
    let (cx, cy) = p.center();
    let diamond = (x - cx).abs() + (y - cy).abs();
    (diamond * p.scale + t * p.speed * 0.1).sin()
}

fn plasma(x: f64, y: f64, t: f64, p: &PatternParams) -> f64 {
    let v1 = (x * p.scale + t * p.speed * 0.1).sin();
    let v2 = (y * p.scale + t * p.speed * 0.08).sin();
    let v3 = ((x + y) * p.scale * 0.5 + t * p.speed * 0.06).sin();
    // Radial term measured from the grid origin, not the center.
    let v4 = ((x * x + y * y).sqrt() * p.scale + t * p.speed * 0.12).sin();
    (v1 + v2 + v3 + v4) / 4.0
}

fn tunnel(x: f64, y: f64, t: f64, p: &PatternParams) -> f64 {
    let (_, _, dist, angle) = polar(x, y, p);
    // The +0.1 keeps the reciprocal finite at the exact center cell.
    (angle * 8.0).sin() * (1.0 / (dist * p.scale + 0.1) + t * p.speed * 0.1).cos()
}

fn mandala(x: f64, y: f64, t: f64, p: &PatternParams) -> f64 {
    let (_, _, dist, angle) = polar(x, y, p);
    (angle * 6.0 + t * p.speed * 0.05).sin() * (dist * p.scale + t * p.speed * 0.08).cos()
}

fn mavignier_dots(x: f64, y: f64, t: f64, p: &PatternParams) -> f64 {
    let (cx, cy) = p.center();
    let (_, _, _, angle) = polar(x, y, p);

    // Snap the sample onto a 3-cell grid and measure that point's distance;
    // the angular term still tracks the true sample position.
    let grid_x = (x / 3.0).floor() * 3.0;
    let grid_y = (y / 3.0).floor() * 3.0;
    let gdx = grid_x - cx;
    let gdy = grid_y - cy;
    let grid_dist = (gdx * gdx + gdy * gdy).sqrt();

    let wave = (grid_dist * p.scale + t * p.speed * 0.1).sin();
    let optical = (angle * 8.0 + t * p.speed * 0.05).cos();
    wave * optical
}

fn mavignier_lines(x: f64, y: f64, t: f64, p: &PatternParams) -> f64 {
    let (_, _, dist, angle) = polar(x, y, p);
    let radial_lines = (angle * 12.0 + dist * p.scale * 0.2 + t * p.speed * 0.08).sin();
    let circular_wave = (dist * p.scale + t * p.speed * 0.06).cos();
    radial_lines * 0.7 + circular_wave * 0.3
}

fn mavignier_kinetic(x: f64, y: f64, t: f64, p: &PatternParams) -> f64 {
    let (dx, dy, dist, angle) = polar(x, y, p);
    let layer1 = (dist * p.scale * 0.3 + t * p.speed * 0.12).sin();
    let layer2 = (angle * 6.0 + t * p.speed * 0.08).cos();
    let layer3 = ((dx + dy) * p.scale * 0.2 + t * p.speed * 0.15).sin();
    layer1 * 0.4 + layer2 * 0.35 + layer3 * 0.25
}

fn mavignier_geometric(x: f64, y: f64, t: f64, p: &PatternParams) -> f64 {
    let (cx, cy) = p.center();
    let rot = t * p.speed * 0.02;
    let rotated_x = (x - cx) * rot.cos() - (y - cy) * rot.sin();
    let rotated_y = (x - cx) * rot.sin() + (y - cy) * rot.cos();

    // Manhattan and Chebyshev extents of the rotated sample.
    let diamond = rotated_x.abs() + rotated_y.abs();
    let square = rotated_x.abs().max(rotated_y.abs());

    let pattern1 = (diamond * p.scale + t * p.speed * 0.1).sin();
    let pattern2 = (square * p.scale * 0.8 + t * p.speed * 0.07).cos();
    pattern1 * 0.6 + pattern2 * 0.4
}

fn golden_spiral(x: f64, y: f64, t: f64, p: &PatternParams) -> f64 {
    let (_, _, dist, angle) = polar(x, y, p);

    // Logarithmic spiral radius at this angle, and how far the sample sits
    // off the spiral arm.
    let phi = phi();
    let spiral_radius = (angle / phi).exp() * p.scale * 2.0;
    let spiral_diff = (dist - spiral_radius).abs();

    let spiral_wave = (spiral_diff * p.scale * 10.0 + t * p.speed * 0.1).sin();
    let rotated_angle = angle + t * p.speed * 0.05;
    let spiral_pattern = (rotated_angle * phi).cos();

    spiral_wave * 0.7 + spiral_pattern * 0.3
}

fn fibonacci_grid(x: f64, y: f64, t: f64, p: &PatternParams) -> f64 {
    let fib_x = FIB[(x / 5.0).floor() as usize % FIB.len()];
    let fib_y = FIB[(y / 5.0).floor() as usize % FIB.len()];

    let phi = phi();
    let golden_x = (x * p.scale / phi + t * p.speed * 0.08).sin();
    let golden_y = (y * p.scale * phi + t * p.speed * 0.06).cos();

    let fib_pattern =
        (fib_x * p.scale + t * p.speed * 0.1).sin() * (fib_y * p.scale + t * p.speed * 0.07).cos();

    golden_x * 0.4 + golden_y * 0.4 + fib_pattern * 0.2
}

fn golden_rectangles(x: f64, y: f64, t: f64, p: &PatternParams) -> f64 {
    let (cx, cy) = p.center();

    // Five concentric golden rectangles, phi-scaled, each rotating on its
    // own phase; a sample only contributes while inside a rectangle.
    const LAYERS: usize = 5;
    let phi = phi();
    let mut pattern = 0.0;

    for i in 0..LAYERS {
        let scale = phi.powi(i as i32) * p.scale * 3.0;
        let rect_width = scale;
        let rect_height = scale / phi;

        let rotation = t * p.speed * 0.03 + i as f64 * PI / 8.0;
        let cos = rotation.cos();
        let sin = rotation.sin();

        let rot_x = (x - cx) * cos - (y - cy) * sin;
        let rot_y = (x - cx) * sin + (y - cy) * cos;

        let in_rect = rot_x.abs() < rect_width && rot_y.abs() < rect_height;
        let edge_dist = (rect_width - rot_x.abs()).min(rect_height - rot_y.abs());

        if in_rect {
            pattern +=
                (edge_dist * p.scale * 2.0 + t * p.speed * 0.1).sin() * (1.0 / (i as f64 + 1.0));
        }
    }

    pattern
}

fn golden_petals(x: f64, y: f64, t: f64, p: &PatternParams) -> f64 {
    let (dx, dy, dist, _) = polar(x, y, p);

    // 13 petals spaced at the golden angle (~137.5 deg), the Fibonacci
    // petal count seen in phyllotaxis.
    const PETALS: usize = 13;
    let phi = phi();
    let golden_angle = 2.0 * PI * (1.0 - 1.0 / phi);

    let mut petal_pattern = 0.0;
    for i in 0..PETALS {
        let petal_angle = i as f64 * golden_angle + t * p.speed * 0.02;
        let petal_x = petal_angle.cos();
        let petal_y = petal_angle.sin();

        // Project the sample onto the petal axis; only the side the petal
        // points toward contributes.
        let dot_product = dx * petal_x + dy * petal_y;
        let petal_dist = (dx * petal_y - dy * petal_x).abs();

        if dot_product > 0.0 {
            let petal_intensity = (-petal_dist * p.scale * 0.5).exp()
                * (dot_product * p.scale * 0.3 + t * p.speed * 0.1).sin();
            petal_pattern += petal_intensity;
        }
    }

    let center_pattern = (dist * p.scale * 0.5 + t * p.speed * 0.08).sin();
    petal_pattern * 0.8 + center_pattern * 0.2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_round_trips_for_every_pattern() {
        for pat in Pattern::ALL {
            assert_eq!(pat.name().parse::<Pattern>().unwrap(), pat);
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "voronoi".parse::<Pattern>().unwrap_err();
        assert!(matches!(err, GlyphError::UnknownPattern(_)));
    }

    #[test]
    fn waves_matches_closed_form_at_t0() {
        let p = PatternParams {
            scale: 0.2,
            ..PatternParams::default()
        };
        for (x, y) in [(0.0f64, 0.0f64), (3.0, 7.0), (59.0, 29.0)] {
            let want = (x * 0.2).sin() * (y * 0.2 * 0.8).cos();
            assert_eq!(Pattern::Waves.eval(x, y, 0.0, &p), want);
        }
    }

    #[test]
    fn every_field_is_finite_across_the_grid() {
        let p = PatternParams::default();
        for pat in Pattern::ALL {
            for y in 0..p.height {
                for x in 0..p.width {
                    for t in [0.0, 0.05, 12.3] {
                        let v = pat.eval(x as f64, y as f64, t, &p);
                        assert!(v.is_finite(), "{pat} not finite at ({x},{y},{t})");
                    }
                }
            }
        }
    }

    #[test]
    fn tunnel_is_finite_at_the_exact_center() {
        // dist == 0 there; the +0.1 reciprocal guard must hold.
        let p = PatternParams {
            width: 10,
            height: 10,
            ..PatternParams::default()
        };
        let v = Pattern::Tunnel.eval(5.0, 5.0, 0.0, &p);
        assert!(v.is_finite());
    }

    #[test]
    fn maze_has_no_radial_component() {
        // Translating both center coordinates must not change maze output.
        let small = PatternParams {
            width: 20,
            height: 10,
            ..PatternParams::default()
        };
        let big = PatternParams {
            width: 120,
            height: 60,
            ..PatternParams::default()
        };
        let a = Pattern::Maze.eval(4.0, 6.0, 1.0, &small);
        let b = Pattern::Maze.eval(4.0, 6.0, 1.0, &big);
        assert_eq!(a, b);
    }
}
