//! NACA 4-digit designators

use crate::float_types::Real;
use std::fmt;

/// A NACA 4-digit designator `MPTT`.
///
/// - `M`: maximum camber in percent of chord
/// - `P`: chordwise position of maximum camber in tenths of chord
/// - `TT`: maximum thickness in percent of chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AirfoilCode {
    max_camber: u8,
    camber_position: u8,
    thickness: u8,
}

impl AirfoilCode {
    /// The symmetric 12%-thick section used whenever a designator can't be read.
    pub const FALLBACK: AirfoilCode = AirfoilCode {
        max_camber: 0,
        camber_position: 0,
        thickness: 12,
    };

    /// Builds a code from its digits. Returns `None` if any digit group is out of range.
    pub const fn new(max_camber: u8, camber_position: u8, thickness: u8) -> Option<Self> {
        if max_camber > 9 || camber_position > 9 || thickness > 99 {
            return None;
        }
        Some(Self {
            max_camber,
            camber_position,
            thickness,
        })
    }

    /// Reads a designator such as `"2412"`, `"NACA 2412"` or `"naca0015"`.
    ///
    /// Returns `None` unless exactly four decimal digits follow the optional
    /// `NACA` prefix.
    pub fn parse_strict(designator: &str) -> Option<Self> {
        let trimmed = designator.trim();
        let digits = match trimmed.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("naca") => trimmed[4..].trim_start(),
            _ => trimmed,
        };

        let bytes = digits.as_bytes();
        if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
            return None;
        }

        let digit = |i: usize| bytes[i] - b'0';
        Self::new(digit(0), digit(1), digit(2) * 10 + digit(3))
    }

    /// Reads a designator, falling back to [`AirfoilCode::FALLBACK`] (NACA 0012)
    /// when the text is not a 4-digit code.
    ///
    /// Free-text airfoil names coming from users or a language model are
    /// unreliable, so this never fails.
    pub fn parse(designator: &str) -> Self {
        match Self::parse_strict(designator) {
            Some(code) => code,
            None => {
                tracing::warn!(
                    designator,
                    fallback = %Self::FALLBACK,
                    "unrecognised airfoil designator, using fallback section"
                );
                Self::FALLBACK
            },
        }
    }

    /// Maximum camber as a fraction of chord (`M / 100`).
    pub fn max_camber(&self) -> Real {
        Real::from(self.max_camber) / 100.0
    }

    /// Position of maximum camber as a fraction of chord (`P / 10`).
    pub fn camber_position(&self) -> Real {
        Real::from(self.camber_position) / 10.0
    }

    /// Maximum thickness as a fraction of chord (`TT / 100`).
    pub fn thickness(&self) -> Real {
        Real::from(self.thickness) / 100.0
    }

    /// `true` when the section has no camber line.
    pub const fn is_symmetric(&self) -> bool {
        self.max_camber == 0 || self.camber_position == 0
    }

    /// Thickness half-profile `yt(x)` for a chord fraction `x ∈ [0, 1]`.
    pub fn half_thickness(&self, x: Real) -> Real {
        5.0 * self.thickness()
            * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x * x + 0.2843 * x * x * x
                - 0.1015 * x * x * x * x)
    }

    /// Mean camber line `yc(x)` and its slope `dyc/dx`.
    ///
    /// Two parabolic segments meet at `x = P/10`. Symmetric sections have a flat camber line.
    pub fn camber(&self, x: Real) -> (Real, Real) {
        if self.is_symmetric() {
            return (0.0, 0.0);
        }

        let m = self.max_camber();
        let p = self.camber_position();
        if x < p {
            let yc = m / (p * p) * (2.0 * p * x - x * x);
            let dy = 2.0 * m / (p * p) * (p - x);
            (yc, dy)
        } else {
            let yc = m / ((1.0 - p).powi(2)) * ((1.0 - 2.0 * p) + 2.0 * p * x - x * x);
            let dy = 2.0 * m / ((1.0 - p).powi(2)) * (p - x);
            (yc, dy)
        }
    }
}

impl Default for AirfoilCode {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl fmt::Display for AirfoilCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NACA {}{}{:02}",
            self.max_camber, self.camber_position, self.thickness
        )
    }
}
