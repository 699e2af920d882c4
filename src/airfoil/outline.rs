//! Closed airfoil outlines in normalized chord coordinates

use crate::airfoil::AirfoilCode;
use crate::float_types::{PI, Real};
use geo::{Area, LineString, Polygon as GeoPolygon};
use nalgebra::Point2;

/// A closed 2D airfoil loop with `x ∈ [0, 1]` along the chord.
///
/// Points run from the trailing edge along the upper surface to the leading
/// edge, then back along the lower surface to the trailing edge. The leading
/// edge point appears exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct AirfoilOutline {
    code: AirfoilCode,
    points: Vec<Point2<Real>>,
    leading_edge: usize,
}

impl AirfoilOutline {
    /// The designator this outline was sampled from.
    pub const fn code(&self) -> AirfoilCode {
        self.code
    }

    pub fn points(&self) -> &[Point2<Real>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the single leading-edge point.
    pub const fn leading_edge_index(&self) -> usize {
        self.leading_edge
    }

    /// Upper surface, trailing edge → leading edge (inclusive).
    pub fn upper(&self) -> &[Point2<Real>] {
        &self.points[..=self.leading_edge]
    }

    /// Lower surface, leading edge → trailing edge (inclusive).
    pub fn lower(&self) -> &[Point2<Real>] {
        &self.points[self.leading_edge..]
    }

    /// Iterator over the outline scaled to a physical chord length.
    pub fn scaled(&self, chord: Real) -> impl Iterator<Item = Point2<Real>> + '_ {
        self.points.iter().map(move |p| Point2::new(p.x * chord, p.y * chord))
    }

    /// The outline as a closed `geo` polygon.
    pub fn to_polygon(&self) -> GeoPolygon<Real> {
        let mut coords: Vec<(Real, Real)> = self.points.iter().map(|p| (p.x, p.y)).collect();
        if let Some(&first) = coords.first() {
            coords.push(first);
        }
        GeoPolygon::new(LineString::from(coords), vec![])
    }

    /// Cross-section area in units of chord².
    pub fn area(&self) -> Real {
        self.to_polygon().unsigned_area()
    }

    /// Largest vertical gap between the surfaces, in units of chord.
    ///
    /// Lower-surface heights are linearly interpolated at each upper-surface
    /// station.
    pub fn max_thickness(&self) -> Real {
        let lower = self.lower();
        self.upper()
            .iter()
            .filter_map(|p| {
                let seg = lower.windows(2).find(|w| w[0].x <= p.x && p.x <= w[1].x)?;
                let span = seg[1].x - seg[0].x;
                let t = if span > 0.0 { (p.x - seg[0].x) / span } else { 0.0 };
                Some(p.y - (seg[0].y + t * (seg[1].y - seg[0].y)))
            })
            .fold(0.0, Real::max)
    }
}

/// Half-cosine spaced abscissas `x_i = (1 - cos(iπ/(n-1))) / 2`.
fn cosine_spacing(count: usize) -> impl Iterator<Item = Real> {
    let last = count.saturating_sub(1).max(1) as Real;
    (0..count).map(move |i| {
        let beta = i as Real * PI / last;
        (1.0 - beta.cos()) / 2.0
    })
}

fn upper_point(code: &AirfoilCode, x: Real) -> Point2<Real> {
    let yt = code.half_thickness(x);
    let (yc, dy) = code.camber(x);
    let theta = dy.atan();
    Point2::new(x - yt * theta.sin(), yc + yt * theta.cos())
}

fn lower_point(code: &AirfoilCode, x: Real) -> Point2<Real> {
    let yt = code.half_thickness(x);
    let (yc, dy) = code.camber(x);
    let theta = dy.atan();
    Point2::new(x + yt * theta.sin(), yc - yt * theta.cos())
}

/// Traces upper and lower surfaces with independent sample counts.
/// Both counts include the shared leading edge.
fn trace(code: AirfoilCode, upper_samples: usize, lower_samples: usize) -> AirfoilOutline {
    let mut points = Vec::with_capacity(upper_samples + lower_samples - 1);

    let upper: Vec<Point2<Real>> = cosine_spacing(upper_samples)
        .map(|x| upper_point(&code, x))
        .collect();
    points.extend(upper.into_iter().rev());
    let leading_edge = points.len() - 1;

    points.extend(
        cosine_spacing(lower_samples)
            .skip(1)
            .map(|x| lower_point(&code, x)),
    );

    AirfoilOutline {
        code,
        points,
        leading_edge,
    }
}

/// Samples a NACA 4-digit section with `resolution` cosine-spaced stations
/// per surface.
///
/// The returned loop holds `2 * resolution - 1` points. A `resolution` below
/// 2 is raised to 2.
pub fn sample(code: AirfoilCode, resolution: usize) -> AirfoilOutline {
    let resolution = resolution.max(2);
    trace(code, resolution, resolution)
}

/// Samples a NACA 4-digit section into a loop of exactly `point_count` points.
///
/// The upper surface receives `ceil((point_count + 1) / 2)` stations and the
/// lower surface the remainder, sharing the leading edge. For odd counts this
/// equals [`sample`] with `(point_count + 1) / 2`. A `point_count` below 2 is
/// raised to 2.
pub fn sample_closed(code: AirfoilCode, point_count: usize) -> AirfoilOutline {
    let point_count = point_count.max(2);
    let upper = (point_count + 2) / 2;
    let lower = point_count + 1 - upper;
    trace(code, upper, lower)
}
