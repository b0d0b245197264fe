// Midpoint curve generators: ellipse (two regions, 4-way symmetry) and circle (8-way symmetry).
// Visual: the orange dotted outline you see is exactly the point list these functions return.
//
// The inner loops only add and compare. No trig, no sqrt, no division per point.

use crate::types::{lattice_radius, Curve, Viewport};

/// First-quadrant offset `(x, y)` from the center; mirrored by the caller.
pub type Step = (f32, f32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Slope magnitude <= 1: x advances every step.
    One,
    /// Steep part: y drops every step.
    Two,
    Done,
}

/// Two-region midpoint ellipse interpolator.
///
/// Starts at the top of the ellipse `(0, ry)` and walks clockwise through the
/// first quadrant. Region 1 runs while `px < py`, region 2 while `y > 0`.
/// The decision variable is re-seeded once at the switch.
pub struct MidpointEllipse {
    x: f32,
    y: f32,
    rx2: f32,
    ry2: f32,
    two_rx2: f32,
    two_ry2: f32,
    p: f32,
    px: f32,
    py: f32,
    region: Region,
}

impl MidpointEllipse {
    /// Radii are clamped to `[1, MAX_RADIUS]` and floored to whole pixels.
    pub fn new(rx: f32, ry: f32) -> Self {
        let rx = lattice_radius(rx);
        let ry = lattice_radius(ry);
        let rx2 = rx * rx;
        let ry2 = ry * ry;
        let two_rx2 = 2.0 * rx2;
        Self {
            x: 0.0,
            y: ry,
            rx2,
            ry2,
            two_rx2,
            two_ry2: 2.0 * ry2,
            p: ry2 - rx2 * ry + 0.25 * rx2,
            px: 0.0,
            py: two_rx2 * ry,
            region: Region::One,
        }
    }

    /// Current decision variable.
    pub fn decision(&self) -> f32 {
        self.p
    }

    /// Running `2*ry^2*x`.
    pub fn px(&self) -> f32 {
        self.px
    }

    /// Running `2*rx^2*y`.
    pub fn py(&self) -> f32 {
        self.py
    }

    pub fn region(&self) -> Region {
        self.region
    }

    fn step_region_one(&mut self) {
        self.x += 1.0;
        self.px += self.two_ry2;
        if self.p < 0.0 {
            self.p += self.ry2 + self.px;
        } else {
            self.y -= 1.0;
            self.py -= self.two_rx2;
            self.p += self.ry2 + self.px - self.py;
        }
    }

    fn enter_region_two(&mut self) {
        let (x, y) = (self.x, self.y);
        self.p = self.ry2 * (x + 0.5) * (x + 0.5) + self.rx2 * (y - 1.0) * (y - 1.0)
            - self.rx2 * self.ry2;
        self.region = Region::Two;
    }

    fn step_region_two(&mut self) {
        self.y -= 1.0;
        self.py -= self.two_rx2;
        if self.p > 0.0 {
            self.p += self.rx2 - self.py;
        } else {
            self.x += 1.0;
            self.px += self.two_ry2;
            self.p += self.rx2 - self.py + self.px;
        }
    }
}

impl Iterator for MidpointEllipse {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            match self.region {
                Region::One => {
                    if self.px < self.py {
                        let step = (self.x, self.y);
                        self.step_region_one();
                        return Some(step);
                    }
                    self.enter_region_two();
                }
                Region::Two => {
                    if self.y > 0.0 {
                        let step = (self.x, self.y);
                        self.step_region_two();
                        return Some(step);
                    }
                    self.region = Region::Done;
                }
                Region::Done => return None,
            }
        }
    }
}

/// Midpoint circle interpolator over the first octant (x <= y at the start of each step).
///
/// Yields `(0, r)` first, then one step per loop iteration until `x >= y`.
pub struct MidpointCircle {
    x: f32,
    y: f32,
    p: f32,
    started: bool,
}

impl MidpointCircle {
    /// Same radius handling as `MidpointEllipse::new`.
    pub fn new(r: f32) -> Self {
        let r = lattice_radius(r);
        Self { x: 0.0, y: r, p: 1.0 - r, started: false }
    }

    pub fn decision(&self) -> f32 {
        self.p
    }
}

impl Iterator for MidpointCircle {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if !self.started {
            self.started = true;
            return Some((self.x, self.y));
        }
        if self.x >= self.y {
            return None;
        }
        self.x += 1.0;
        if self.p < 0.0 {
            self.p += 2.0 * self.x + 1.0;
        } else {
            self.y -= 1.0;
            self.p += 2.0 * (self.x - self.y) + 1.0;
        }
        Some((self.x, self.y))
    }
}

/// Ellipse boundary in NDC, 4 mirrored points per step:
/// `(+x,+y), (-x,+y), (+x,-y), (-x,-y)` around `center`.
pub fn generate_ellipse(center: (f32, f32), rx: f32, ry: f32, viewport: Viewport) -> Curve {
    let (xc, yc) = center;
    let steps = MidpointEllipse::new(rx, ry);
    // at most rx + ry steps; both are capped, so this can't overflow
    let mut curve = Curve::with_capacity(4 * (lattice_radius(rx) + lattice_radius(ry)) as usize);
    for (x, y) in steps {
        push_quadrants(&mut curve, xc, yc, x, y, viewport);
    }
    curve
}

/// Circle boundary in NDC, 8 mirrored points per step: the quadrant
/// reflections of `(x, y)` followed by those of the swapped pair `(y, x)`.
pub fn generate_circle(center: (f32, f32), r: f32, viewport: Viewport) -> Curve {
    let (xc, yc) = center;
    let mut curve = Curve::with_capacity(8 * (lattice_radius(r) as usize + 1));
    for (x, y) in MidpointCircle::new(r) {
        push_quadrants(&mut curve, xc, yc, x, y, viewport);
        push_quadrants(&mut curve, xc, yc, y, x, viewport);
    }
    curve
}

#[inline]
fn push_quadrants(curve: &mut Curve, xc: f32, yc: f32, x: f32, y: f32, vp: Viewport) {
    curve.points.push(vp.to_ndc(xc + x, yc + y));
    curve.points.push(vp.to_ndc(xc - x, yc + y));
    curve.points.push(vp.to_ndc(xc + x, yc - y));
    curve.points.push(vp.to_ndc(xc - x, yc - y));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_RADIUS;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    // With a 2x2 viewport and center (1,1), NDC == offset from center (exact for integers).
    fn offset_view() -> (Viewport, (f32, f32)) {
        (Viewport::new(2.0, 2.0), (1.0, 1.0))
    }

    fn key(p: [f32; 2]) -> (i64, i64) {
        (p[0] as i64, p[1] as i64)
    }

    /// Straight transcription of the ellipse recurrence in f64 with plain loops.
    fn reference_ellipse(rx: f64, ry: f64) -> Vec<(f64, f64)> {
        let (mut x, mut y) = (0.0, ry);
        let (rx2, ry2) = (rx * rx, ry * ry);
        let (tworx2, twory2) = (2.0 * rx2, 2.0 * ry2);
        let mut p = ry2 - rx2 * ry + 0.25 * rx2;
        let (mut px, mut py) = (0.0, tworx2 * y);
        let mut out = Vec::new();
        while px < py {
            out.push((x, y));
            x += 1.0;
            px += twory2;
            if p < 0.0 {
                p += ry2 + px;
            } else {
                y -= 1.0;
                py -= tworx2;
                p += ry2 + px - py;
            }
        }
        p = ry2 * (x + 0.5) * (x + 0.5) + rx2 * (y - 1.0) * (y - 1.0) - rx2 * ry2;
        while y > 0.0 {
            out.push((x, y));
            y -= 1.0;
            py -= tworx2;
            if p > 0.0 {
                p += rx2 - py;
            } else {
                x += 1.0;
                px += twory2;
                p += rx2 - py + px;
            }
        }
        out
    }

    #[test]
    fn ellipse_5x3_first_step_trace() {
        let mut e = MidpointEllipse::new(5.0, 3.0);
        assert_eq!(e.region(), Region::One);
        assert_relative_eq!(e.decision(), -59.75);
        assert_relative_eq!(e.py(), 150.0);

        assert_eq!(e.next(), Some((0.0, 3.0)));
        assert_relative_eq!(e.px(), 18.0);
        // p < 0 so y stays: p += ry2 + px = 9 + 18
        assert_relative_eq!(e.decision(), -32.75);
    }

    #[test]
    fn ellipse_5x3_full_trace() {
        let mut e = MidpointEllipse::new(5.0, 3.0);
        let region_one: Vec<Step> = e.by_ref().take(5).collect();
        assert_eq!(region_one, vec![(0.0, 3.0), (1.0, 3.0), (2.0, 3.0), (3.0, 2.0), (4.0, 2.0)]);
        assert_eq!(e.region(), Region::One);

        assert_eq!(e.next(), Some((5.0, 1.0)));
        assert_eq!(e.region(), Region::Two);
        assert_eq!(e.next(), None);
        assert_eq!(e.region(), Region::Done);
        assert_eq!(e.next(), None);
    }

    #[test]
    fn tall_ellipse_trace() {
        let steps: Vec<Step> = MidpointEllipse::new(3.0, 7.0).collect();
        assert_eq!(
            steps,
            vec![
                (0.0, 7.0),
                (1.0, 7.0),
                (2.0, 6.0),
                (2.0, 5.0),
                (2.0, 4.0),
                (3.0, 3.0),
                (3.0, 2.0),
                (3.0, 1.0)
            ]
        );
    }

    #[test]
    fn unit_ellipse_is_one_step() {
        let steps: Vec<Step> = MidpointEllipse::new(1.0, 1.0).collect();
        assert_eq!(steps, vec![(0.0, 1.0)]);
    }

    #[test]
    fn non_positive_radii_are_clamped_before_stepping() {
        let clamped: Vec<Step> = MidpointEllipse::new(0.0, -3.0).collect();
        assert_eq!(clamped, vec![(0.0, 1.0)]);

        let curve = generate_circle((10.0, 10.0), -2.0, Viewport::new(20.0, 20.0));
        assert_eq!(curve, generate_circle((10.0, 10.0), 1.0, Viewport::new(20.0, 20.0)));
    }

    #[test]
    fn unit_circle_trace() {
        let mut c = MidpointCircle::new(1.0);
        assert_relative_eq!(c.decision(), 0.0);
        assert_eq!(c.next(), Some((0.0, 1.0)));
        // x=0 < y=1 once: p = 0 is not negative, so y drops and p += 2*(1-0)+1
        assert_eq!(c.next(), Some((1.0, 0.0)));
        assert_relative_eq!(c.decision(), 3.0);
        assert_eq!(c.next(), None);
    }

    #[test]
    fn unit_circle_points() {
        let (vp, center) = offset_view();
        let curve = generate_circle(center, 1.0, vp);
        assert_eq!(curve.len(), 16);
        let distinct: BTreeSet<_> = curve.points.iter().map(|&p| key(p)).collect();
        let expected: BTreeSet<_> = [(0, 1), (0, -1), (1, 0), (-1, 0)].into_iter().collect();
        assert_eq!(distinct, expected);
    }

    #[test]
    fn circle_radius_5_steps() {
        let steps: Vec<Step> = MidpointCircle::new(5.0).collect();
        assert_eq!(steps, vec![(0.0, 5.0), (1.0, 5.0), (2.0, 5.0), (3.0, 4.0), (4.0, 3.0)]);
    }

    #[test]
    fn ellipse_emission_order_is_fixed() {
        let (vp, center) = offset_view();
        let curve = generate_ellipse(center, 5.0, 3.0, vp);
        assert_eq!(curve.len(), 6 * 4);
        let first: Vec<_> = curve.points[4..8].iter().map(|&p| key(p)).collect();
        assert_eq!(first, vec![(1, 3), (-1, 3), (1, -3), (-1, -3)]);
    }

    #[test]
    fn circle_emission_order_is_fixed() {
        let (vp, center) = offset_view();
        let curve = generate_circle(center, 5.0, vp);
        let batch: Vec<_> = curve.points[8..16].iter().map(|&p| key(p)).collect();
        assert_eq!(
            batch,
            vec![(1, 5), (-1, 5), (1, -5), (-1, -5), (5, 1), (-5, 1), (5, -1), (-5, -1)]
        );
    }

    #[test]
    fn ellipse_normalizes_into_unit_square() {
        let vp = Viewport::new(800.0, 600.0);
        let curve = generate_ellipse((400.0, 300.0), 200.0, 100.0, vp);
        assert!(!curve.is_empty());
        for [x, y] in &curve.points {
            assert!((-1.0..=1.0).contains(x), "x out of range: {x}");
            assert!((-1.0..=1.0).contains(y), "y out of range: {y}");
        }
        // top of the ellipse: (400, 400) -> (0, 1/3)
        assert_relative_eq!(curve.points[0][0], 0.0);
        assert_relative_eq!(curve.points[0][1], 1.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn fractional_circle_radius_steps_on_the_floored_lattice() {
        let steps: Vec<Step> = MidpointCircle::new(1.028).collect();
        assert_eq!(steps, vec![(0.0, 1.0), (1.0, 0.0)]);
        assert_eq!(
            MidpointCircle::new(5.9).collect::<Vec<_>>(),
            MidpointCircle::new(5.0).collect::<Vec<_>>()
        );
    }

    #[test]
    fn huge_and_infinite_radii_are_capped_and_finite() {
        let vp = Viewport::new(800.0, 600.0);
        let capped = generate_ellipse((400.0, 300.0), MAX_RADIUS, 100.0, vp);
        assert_eq!(generate_ellipse((400.0, 300.0), f32::INFINITY, 100.0, vp), capped);
        assert_eq!(generate_ellipse((400.0, 300.0), 1e30, 100.0, vp), capped);
        assert!(capped.len() <= 4 * (MAX_RADIUS as usize + 100));

        let circle = generate_circle((400.0, 300.0), f32::INFINITY, vp);
        assert_eq!(circle, generate_circle((400.0, 300.0), MAX_RADIUS, vp));
        assert!(!circle.is_empty());

        let nan = generate_ellipse((400.0, 300.0), f32::NAN, f32::NAN, vp);
        assert_eq!(nan, generate_ellipse((400.0, 300.0), 1.0, 1.0, vp));
    }

    proptest! {
        #[test]
        fn ellipse_matches_reference(rx in 1u32..=30, ry in 1u32..=30) {
            let ours: Vec<(f64, f64)> = MidpointEllipse::new(rx as f32, ry as f32)
                .map(|(x, y)| (x as f64, y as f64))
                .collect();
            prop_assert_eq!(ours, reference_ellipse(rx as f64, ry as f64));
        }

        #[test]
        fn ellipse_batches_are_quadrant_symmetric(rx in 1u32..=120, ry in 1u32..=120) {
            let (vp, center) = offset_view();
            let curve = generate_ellipse(center, rx as f32, ry as f32, vp);
            prop_assert_eq!(curve.len() % 4, 0);
            for batch in curve.points.chunks(4) {
                let [x, y] = batch[0];
                prop_assert_eq!(batch[1], [-x, y]);
                prop_assert_eq!(batch[2], [x, -y]);
                prop_assert_eq!(batch[3], [-x, -y]);
            }
        }

        #[test]
        fn circle_batches_are_octant_symmetric(r in 1u32..=150) {
            let (vp, center) = offset_view();
            let curve = generate_circle(center, r as f32, vp);
            prop_assert_eq!(curve.len() % 8, 0);
            for batch in curve.points.chunks(8) {
                let [x, y] = batch[0];
                let expected = [[x, y], [-x, y], [x, -y], [-x, -y], [y, x], [-y, x], [y, -x], [-y, -x]];
                prop_assert_eq!(batch, &expected[..]);
            }
        }

        #[test]
        fn ellipse_terminates_within_rx_plus_ry_steps(rx in 1u32..=400, ry in 1u32..=400) {
            let steps = MidpointEllipse::new(rx as f32, ry as f32).count();
            prop_assert!(steps >= 1);
            prop_assert!(steps <= (rx + ry) as usize, "{} steps for {}x{}", steps, rx, ry);
        }

        #[test]
        fn circle_loop_runs_at_most_r_times(r in 1u32..=500) {
            let steps = MidpointCircle::new(r as f32).count();
            // one initial emission + loop iterations
            prop_assert!(steps - 1 <= r as usize);
        }

        #[test]
        fn ellipse_steps_are_monotone(rx in 1u32..=200, ry in 1u32..=200) {
            let steps: Vec<Step> = MidpointEllipse::new(rx as f32, ry as f32).collect();
            for w in steps.windows(2) {
                let ((x0, y0), (x1, y1)) = (w[0], w[1]);
                prop_assert!(x1 >= x0 && y1 <= y0);
                prop_assert!(x1 > x0 || y1 < y0);
            }
        }

        #[test]
        fn circle_as_ellipse(r in 1u32..=128) {
            let (vp, center) = offset_view();
            let ellipse: BTreeSet<_> = generate_ellipse(center, r as f32, r as f32, vp)
                .points.into_iter().map(key).collect();
            let circle: BTreeSet<_> = generate_circle(center, r as f32, vp)
                .points.into_iter().map(key).collect();
            // The ellipse's region 2 stops before y reaches 0, so only the two
            // horizontal extremes are missing from its set.
            let r = r as i64;
            let mut expected = circle;
            expected.remove(&(r, 0));
            expected.remove(&(-r, 0));
            prop_assert_eq!(ellipse, expected);
        }

        #[test]
        fn fractional_radii_keep_step_bounds(rx in 1.0f32..600.0, ry in 1.0f32..600.0) {
            let steps: Vec<Step> = MidpointEllipse::new(rx, ry).collect();
            prop_assert!(!steps.is_empty());
            prop_assert!(steps.len() as f32 <= rx + ry, "{} steps for {}x{}", steps.len(), rx, ry);
            for w in steps.windows(2) {
                let ((x0, y0), (x1, y1)) = (w[0], w[1]);
                prop_assert!(x1 >= x0 && y1 <= y0);
                prop_assert!(x1 > x0 || y1 < y0);
            }

            let circle: Vec<Step> = MidpointCircle::new(rx).collect();
            prop_assert!((circle.len() - 1) as f32 <= rx);
            // never more than half a pixel outside the requested radius
            for (x, y) in circle {
                prop_assert!((x * x + y * y).sqrt() <= rx + 0.5, "({}, {}) for r = {}", x, y, rx);
            }
        }

        #[test]
        fn fractional_radii_stay_symmetric(rx in 1.0f32..200.0, ry in 1.0f32..200.0) {
            let (vp, center) = offset_view();
            for batch in generate_ellipse(center, rx, ry, vp).points.chunks(4) {
                let [x, y] = batch[0];
                let expected = [[x, y], [-x, y], [x, -y], [-x, -y]];
                prop_assert_eq!(batch, &expected[..]);
            }
            for batch in generate_circle(center, ry, vp).points.chunks(8) {
                let [x, y] = batch[0];
                let expected = [[x, y], [-x, y], [x, -y], [-x, -y], [y, x], [-y, x], [y, -x], [-y, -x]];
                prop_assert_eq!(batch, &expected[..]);
            }
        }
    }
}
