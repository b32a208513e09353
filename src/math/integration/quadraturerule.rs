use log::trace;
use nalgebra::DVector;
use serde::Deserialize;

use crate::math::function::scalarfunction::ScalarFunction;
use crate::math::integration::quadratureruleerror::QuadratureRuleError;

// ─────────────────────────────────────────────────────────────────────────────
// QuadratureScheme
// ─────────────────────────────────────────────────────────────────────────────
//
// 均勻網格上的複合積分法則，h = (b - a) / n：
//
//   ∫_a^b f(x) dx ≈ h · Σ c_i·f(x_i)
//
//   LeftRectangle     : x_i = a + i·h (i = 0..=n)，c = [1, 1, ..., 1, 0]
//   RightRectangle    : x_i = a + i·h (i = 0..=n)，c = [0, 1, ..., 1, 1]
//   MidpointRectangle : x_i = a + h/2 + i·h (i = 0..n)，c = [1, ..., 1]
//   Trapezoid         : x_i = a + i·h (i = 0..=n)，c = [1/2, 1, ..., 1, 1/2]
//   Simpson           : x_i = a + i·h (i = 0..=n)，c = [1/3, 4/3, 2/3, ..., 4/3, 1/3]
//
// Simpson 的係數即 h/3·[1, 4, 2, ..., 4, 1]，n 必須為偶數。

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum QuadratureScheme {
    LeftRectangle,
    RightRectangle,
    MidpointRectangle,
    Trapezoid,
    Simpson
}

impl QuadratureScheme {
    pub const ALL: [QuadratureScheme; 5] = [
        QuadratureScheme::LeftRectangle,
        QuadratureScheme::RightRectangle,
        QuadratureScheme::MidpointRectangle,
        QuadratureScheme::Trapezoid,
        QuadratureScheme::Simpson
    ];

    /// 可精確積分的多項式最高次數
    pub fn degree_of_exactness(&self) -> u32 {
        match self {
            QuadratureScheme::LeftRectangle => 0,
            QuadratureScheme::RightRectangle => 0,
            QuadratureScheme::MidpointRectangle => 1,
            QuadratureScheme::Trapezoid => 1,
            QuadratureScheme::Simpson => 3
        }
    }

    /// 複合法則的理論收斂階數：誤差 ~ O(h^p)
    pub fn order(&self) -> u32 {
        self.degree_of_exactness() + 1
    }

    pub fn name(&self) -> &'static str {
        match self {
            QuadratureScheme::LeftRectangle => "LeftRectangle",
            QuadratureScheme::RightRectangle => "RightRectangle",
            QuadratureScheme::MidpointRectangle => "MidpointRectangle",
            QuadratureScheme::Trapezoid => "Trapezoid",
            QuadratureScheme::Simpson => "Simpson"
        }
    }

    pub fn verify_points_count(&self, points_count: usize) -> Result<(), QuadratureRuleError> {
        if points_count == 0 {
            return Err(QuadratureRuleError::ZeroPointsCount);
        }
        if *self == QuadratureScheme::Simpson && points_count % 2 != 0 {
            return Err(QuadratureRuleError::OddPointsCount(points_count));
        }
        Ok(())
    }

    fn generate_grid(&self, left_bound: f64, h: f64, points_count: usize) -> DVector<f64> {
        match self {
            QuadratureScheme::MidpointRectangle => {
                let first = left_bound + h / 2.0;
                DVector::from_iterator(
                    points_count,
                    (0..points_count).map(|i| first + i as f64 * h)
                )
            },
            _ => {
                DVector::from_iterator(
                    points_count + 1,
                    (0..=points_count).map(|i| left_bound + i as f64 * h)
                )
            }
        }
    }

    fn generate_coefs(&self, points_count: usize) -> DVector<f64> {
        let n = points_count;
        match self {
            QuadratureScheme::LeftRectangle => {
                DVector::from_fn(n + 1, |i, _| if i == n { 0.0 } else { 1.0 })
            },
            QuadratureScheme::RightRectangle => {
                DVector::from_fn(n + 1, |i, _| if i == 0 { 0.0 } else { 1.0 })
            },
            QuadratureScheme::MidpointRectangle => {
                DVector::from_element(n, 1.0)
            },
            QuadratureScheme::Trapezoid => {
                DVector::from_fn(n + 1, |i, _| if i == 0 || i == n { 0.5 } else { 1.0 })
            },
            QuadratureScheme::Simpson => {
                DVector::from_fn(n + 1, |i, _| {
                    if i == 0 || i == n {
                        1.0 / 3.0
                    } else if i % 2 == 0 {
                        2.0 / 3.0
                    } else {
                        4.0 / 3.0
                    }
                })
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// QuadratureRule
// ─────────────────────────────────────────────────────────────────────────────

/// 網格與係數於建構時計算一次，之後不可變
pub struct QuadratureRule<'a, F> where
    F: ScalarFunction + ?Sized {
    scheme: QuadratureScheme,
    function: &'a F,
    left_bound: f64,
    right_bound: f64,
    points_count: usize,
    h: f64,
    grid: DVector<f64>,
    coefs: DVector<f64>
}

impl <'a, F> QuadratureRule<'a, F> where
    F: ScalarFunction + ?Sized {
    /// 不檢查 a < b；a == b 時 h = 0，結果為 0
    pub fn new(scheme: QuadratureScheme,
               function: &'a F,
               left_bound: f64,
               right_bound: f64,
               points_count: usize) -> Result<QuadratureRule<'a, F>, QuadratureRuleError> {
        scheme.verify_points_count(points_count)?;
        let h = (right_bound - left_bound) / points_count as f64;
        let grid = scheme.generate_grid(left_bound, h, points_count);
        let coefs = scheme.generate_coefs(points_count);
        trace!("{} rule on [{}, {}] with {} subdivisions, h = {}",
               scheme.name(), left_bound, right_bound, points_count, h);
        Ok(QuadratureRule {
            scheme,
            function,
            left_bound,
            right_bound,
            points_count,
            h,
            grid,
            coefs
        })
    }

    pub fn scheme(&self) -> QuadratureScheme {
        self.scheme
    }

    pub fn left_bound(&self) -> f64 {
        self.left_bound
    }

    pub fn right_bound(&self) -> f64 {
        self.right_bound
    }

    pub fn points_count(&self) -> usize {
        self.points_count
    }

    pub fn step(&self) -> f64 {
        self.h
    }

    pub fn grid(&self) -> &DVector<f64> {
        &self.grid
    }

    pub fn coefs(&self) -> &DVector<f64> {
        &self.coefs
    }

    pub fn evaluate(&self) -> f64 {
        let values = self.grid.map(|x| self.function.value(x));
        self.h * self.coefs.dot(&values)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// QuadratureRuleGenerator
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct QuadratureRuleGenerator {
    scheme: QuadratureScheme
}

impl QuadratureRuleGenerator {
    pub fn new(scheme: QuadratureScheme) -> QuadratureRuleGenerator {
        QuadratureRuleGenerator { scheme }
    }

    pub fn scheme(&self) -> QuadratureScheme {
        self.scheme
    }

    pub fn generate<'a, F>(&self,
                           function: &'a F,
                           left_bound: f64,
                           right_bound: f64,
                           points_count: usize) -> Result<QuadratureRule<'a, F>, QuadratureRuleError> where
        F: ScalarFunction + ?Sized {
        QuadratureRule::new(self.scheme, function, left_bound, right_bound, points_count)
    }
}
