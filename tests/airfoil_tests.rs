mod support;

use support::approx_eq;
use wingcraft::{
    airfoil::{AirfoilCode, sample, sample_closed},
    float_types::Real,
};

const CODES: [&str; 6] = ["0012", "2412", "4415", "0006", "6409", "NACA 2318"];

#[test]
fn outline_has_two_surfaces_sharing_the_leading_edge() {
    for designator in CODES {
        for resolution in [2, 10, 50, 100] {
            let outline = sample(AirfoilCode::parse(designator), resolution);
            assert_eq!(outline.len(), 2 * resolution - 1, "{designator} @ {resolution}");
        }
    }
}

#[test]
fn outline_starts_and_ends_at_the_trailing_edge() {
    for designator in CODES {
        let outline = sample(AirfoilCode::parse(designator), 50);
        let first = outline.points()[0];
        let last = outline.points()[outline.len() - 1];
        assert!(approx_eq(first.x, 1.0, 1e-2), "{designator}: {first:?}");
        assert!(approx_eq(last.x, 1.0, 1e-2), "{designator}: {last:?}");
    }
}

#[test]
fn upper_surface_runs_forward_and_lower_runs_aft() {
    let outline = sample(AirfoilCode::parse("0012"), 40);
    let upper = outline.upper();
    let lower = outline.lower();
    assert!(upper.windows(2).all(|w| w[1].x < w[0].x));
    assert!(lower.windows(2).all(|w| w[1].x > w[0].x));
    assert!(upper.iter().all(|p| p.y >= 0.0));
    assert!(lower.iter().all(|p| p.y <= 0.0));
}

#[test]
fn symmetric_sections_mirror_across_the_chord() {
    for designator in ["0006", "0012", "0021"] {
        let outline = sample(AirfoilCode::parse(designator), 60);
        for p in outline.upper() {
            let mirrored = outline
                .lower()
                .iter()
                .any(|q| approx_eq(q.x, p.x, 1e-12) && approx_eq(q.y, -p.y, 1e-12));
            assert!(mirrored, "{designator}: no lower partner for {p:?}");
        }
    }
}

#[test]
fn cambered_sections_sit_above_the_chord() {
    let symmetric = sample(AirfoilCode::parse("0012"), 60);
    let cambered = sample(AirfoilCode::parse("4412"), 60);
    let mean_y = |pts: &[nalgebra::Point2<Real>]| pts.iter().map(|p| p.y).sum::<Real>() / pts.len() as Real;
    assert!(mean_y(cambered.points()) > mean_y(symmetric.points()) + 0.01);
}

#[test]
fn thickness_peaks_near_thirty_percent_chord() {
    let code = AirfoilCode::parse("0012");
    let (x_peak, yt_peak) = (0..=1000)
        .map(|i| {
            let x = i as Real / 1000.0;
            (x, code.half_thickness(x))
        })
        .fold((0.0, 0.0), |best, cur| if cur.1 > best.1 { cur } else { best });
    assert!(approx_eq(x_peak, 0.30, 0.02));
    assert!(approx_eq(2.0 * yt_peak, 0.12, 1e-3));
}

#[test]
fn malformed_codes_fall_back_to_naca_0012() {
    let fallback = sample(AirfoilCode::parse("NACA 0012"), 50);
    for designator in ["delta", "", "NACA", "NACA 64A410", "12"] {
        assert_eq!(sample(AirfoilCode::parse(designator), 50), fallback, "{designator}");
    }
}

#[test]
fn sampling_is_deterministic() {
    let code = AirfoilCode::parse("2412");
    assert_eq!(sample(code, 75), sample(code, 75));
    assert_eq!(sample_closed(code, 50), sample_closed(code, 50));
}
