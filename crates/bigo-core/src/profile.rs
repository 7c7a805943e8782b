// Rendering data for complexity classes: badge colors, growth curves and the
// comparison table. Pure functions, no rendering.

use crate::ComplexityClass;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplexityProfile {
    pub value: u8,
    pub color: &'static str,
    pub description: &'static str,
}

impl ComplexityClass {
    pub fn profile(&self) -> ComplexityProfile {
        let (color, description) = match self {
            ComplexityClass::Constant => ("#22c55e", "Constant time - Best case"),
            ComplexityClass::Logarithmic => ("#84cc16", "Logarithmic time - Very efficient"),
            ComplexityClass::Linear => ("#eab308", "Linear time - Good performance"),
            ComplexityClass::Linearithmic => ("#f97316", "Linearithmic time - Acceptable"),
            ComplexityClass::Quadratic => ("#ef4444", "Quadratic time - Poor for large inputs"),
            ComplexityClass::Cubic | ComplexityClass::Polynomial(_) => {
                ("#dc2626", "Cubic time - Very poor performance")
            }
            ComplexityClass::Exponential => ("#991b1b", "Exponential time - Extremely poor"),
        };
        ComplexityProfile {
            value: self.weight(),
            color,
            description,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub x: u32,
    pub y: f64,
}

pub const CURVE_POINTS: u32 = 10;

/// Sample the canonical growth function of `class` at x = 1..=10.
pub fn growth_curve(class: ComplexityClass) -> Vec<CurvePoint> {
    (1..=CURVE_POINTS)
        .map(|x| {
            let n = x as f64;
            let y = match class {
                ComplexityClass::Constant => 1.0,
                ComplexityClass::Logarithmic => n.log2(),
                ComplexityClass::Linear => n,
                ComplexityClass::Linearithmic => n * n.log2(),
                ComplexityClass::Quadratic => n * n,
                ComplexityClass::Cubic => n * n * n,
                // capped so the curve stays on the same chart as the others
                ComplexityClass::Exponential => 2f64.powi(x.min(8) as i32),
                ComplexityClass::Polynomial(k) => n.powi(k.min(i32::MAX as u32) as i32),
            };
            CurvePoint {
                x,
                y: (y * 100.0).round() / 100.0,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub complexity: ComplexityClass,
    pub weight: u8,
    pub color: &'static str,
    pub description: &'static str,
}

/// Every enumerated class with its fixed weight, cheapest first.
pub fn comparison_table() -> Vec<ComparisonRow> {
    ComplexityClass::ALL
        .iter()
        .map(|class| {
            let profile = class.profile();
            ComparisonRow {
                complexity: *class,
                weight: profile.value,
                color: profile.color,
                description: profile.description,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ys(class: ComplexityClass) -> Vec<f64> {
        growth_curve(class).into_iter().map(|p| p.y).collect()
    }

    #[test]
    fn test_curve_has_ten_points() {
        for class in ComplexityClass::ALL {
            let curve = growth_curve(class);
            assert_eq!(curve.len(), 10);
            assert_eq!(curve[0].x, 1);
            assert_eq!(curve[9].x, 10);
        }
    }

    #[test]
    fn test_curve_formulas() {
        assert!(ys(ComplexityClass::Constant).iter().all(|y| *y == 1.0));
        assert_eq!(ys(ComplexityClass::Logarithmic)[0], 0.0);
        assert_eq!(ys(ComplexityClass::Logarithmic)[2], 1.58);
        assert_eq!(ys(ComplexityClass::Linear)[4], 5.0);
        assert_eq!(ys(ComplexityClass::Linearithmic)[3], 8.0);
        assert_eq!(ys(ComplexityClass::Quadratic)[9], 100.0);
        assert_eq!(ys(ComplexityClass::Cubic)[2], 27.0);
        assert_eq!(ys(ComplexityClass::Polynomial(4))[1], 16.0);
    }

    #[test]
    fn test_exponential_curve_is_capped() {
        let curve = ys(ComplexityClass::Exponential);
        assert_eq!(curve[0], 2.0);
        assert_eq!(curve[7], 256.0);
        assert_eq!(curve[8], 256.0);
        assert_eq!(curve[9], 256.0);
    }

    #[test]
    fn test_comparison_table_in_weight_order() {
        let table = comparison_table();
        assert_eq!(table.len(), 7);
        assert!(table.windows(2).all(|w| w[0].weight < w[1].weight));
        assert_eq!(table[6].complexity, ComplexityClass::Exponential);
        assert_eq!(table[0].color, "#22c55e");
    }
}
