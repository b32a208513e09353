use serde::Deserialize;

use crate::math::function::scalarfunction::ScalarFunction;

// ─────────────────────────────────────────────────────────────────────────────
// DifferenceScheme
// ─────────────────────────────────────────────────────────────────────────────
//
// 一階導數的有限差分公式（以 Δk = f(x+kh) - f(x-kh) 表示）：
//
//   Forward    : (f(x+h) - f(x)) / h                          O(h)
//   Backward   : (f(x) - f(x-h)) / h                          O(h)
//   Central    : Δ1 / (2h)                                    O(h²)
//   FivePoint  : 2/(3h)·Δ1 - 1/(12h)·Δ2                       O(h⁴)
//   SevenPoint : 3/(4h)·Δ1 - 3/(20h)·Δ2 + 1/(60h)·Δ3          O(h⁶)
//
// 不檢查 h > 0：h = 0 時得到 NaN/inf，由呼叫端自行處理。

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DifferenceScheme {
    Forward,
    Backward,
    Central,
    FivePoint,
    SevenPoint
}

impl DifferenceScheme {
    pub const ALL: [DifferenceScheme; 5] = [
        DifferenceScheme::Forward,
        DifferenceScheme::Backward,
        DifferenceScheme::Central,
        DifferenceScheme::FivePoint,
        DifferenceScheme::SevenPoint
    ];

    /// 理論精度階數 p：誤差 ~ O(h^p)
    pub fn order(&self) -> u32 {
        match self {
            DifferenceScheme::Forward => 1,
            DifferenceScheme::Backward => 1,
            DifferenceScheme::Central => 2,
            DifferenceScheme::FivePoint => 4,
            DifferenceScheme::SevenPoint => 6
        }
    }

    /// 取樣點相對於 x 的位移（以 h 為單位），由小到大
    pub fn stencil(&self) -> &'static [i32] {
        match self {
            DifferenceScheme::Forward => &[0, 1],
            DifferenceScheme::Backward => &[-1, 0],
            DifferenceScheme::Central => &[-1, 1],
            DifferenceScheme::FivePoint => &[-2, -1, 1, 2],
            DifferenceScheme::SevenPoint => &[-3, -2, -1, 1, 2, 3]
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DifferenceScheme::Forward => "Forward",
            DifferenceScheme::Backward => "Backward",
            DifferenceScheme::Central => "Central",
            DifferenceScheme::FivePoint => "FivePoint",
            DifferenceScheme::SevenPoint => "SevenPoint"
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DifferenceFormula
// ─────────────────────────────────────────────────────────────────────────────

pub struct DifferenceFormula<'a, F> where
    F: ScalarFunction + ?Sized {
    scheme: DifferenceScheme,
    function: &'a F,
    step: f64
}

impl <'a, F> DifferenceFormula<'a, F> where
    F: ScalarFunction + ?Sized {
    pub fn new(scheme: DifferenceScheme, function: &'a F, step: f64) -> DifferenceFormula<'a, F> {
        DifferenceFormula { scheme, function, step }
    }

    pub fn scheme(&self) -> DifferenceScheme {
        self.scheme
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// f(x + h) - f(x - h) 於 k·h 的中心差
    #[inline]
    fn central_delta(&self, x: f64, k: f64) -> f64 {
        let h = k * self.step;
        self.function.value(x + h) - self.function.value(x - h)
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let h = self.step;
        match self.scheme {
            DifferenceScheme::Forward => {
                (self.function.value(x + h) - self.function.value(x)) / h
            },
            DifferenceScheme::Backward => {
                (self.function.value(x) - self.function.value(x - h)) / h
            },
            DifferenceScheme::Central => {
                self.central_delta(x, 1.0) / (2.0 * h)
            },
            DifferenceScheme::FivePoint => {
                4.0 / (6.0 * h) * self.central_delta(x, 1.0)
                    - 1.0 / (12.0 * h) * self.central_delta(x, 2.0)
            },
            DifferenceScheme::SevenPoint => {
                3.0 / (4.0 * h) * self.central_delta(x, 1.0)
                    - 3.0 / (20.0 * h) * self.central_delta(x, 2.0)
                    + 1.0 / (60.0 * h) * self.central_delta(x, 3.0)
            }
        }
    }
}

impl <'a, F> Clone for DifferenceFormula<'a, F> where
    F: ScalarFunction + ?Sized {
    fn clone(&self) -> Self {
        DifferenceFormula { scheme: self.scheme, function: self.function, step: self.step }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DifferenceFormulaGenerator
// ─────────────────────────────────────────────────────────────────────────────

/// 由設定檔描述的差分公式；給定函數與步長後產生 `DifferenceFormula`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DifferenceFormulaGenerator {
    scheme: DifferenceScheme
}

impl DifferenceFormulaGenerator {
    pub fn new(scheme: DifferenceScheme) -> DifferenceFormulaGenerator {
        DifferenceFormulaGenerator { scheme }
    }

    pub fn scheme(&self) -> DifferenceScheme {
        self.scheme
    }

    pub fn generate<'a, F>(&self, function: &'a F, step: f64) -> DifferenceFormula<'a, F> where
        F: ScalarFunction + ?Sized {
        DifferenceFormula::new(self.scheme, function, step)
    }
}


#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use approx::{
        assert_abs_diff_eq,
        assert_relative_eq
    };

    use super::*;

    #[test]
    fn constant_function_has_zero_derivative() {
        let constant = |_x: f64| 7.25;
        for scheme in DifferenceScheme::ALL {
            for h in [1.0, 0.1, 1e-3] {
                let formula = DifferenceFormula::new(scheme, &constant, h);
                assert_abs_diff_eq!(formula.evaluate(0.3), 0.0, epsilon = 1e-12);
                assert_abs_diff_eq!(formula.evaluate(-12.0), 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn identity_has_unit_derivative() {
        let identity = |x: f64| x;
        for scheme in DifferenceScheme::ALL {
            let formula = DifferenceFormula::new(scheme, &identity, 0.25);
            assert_relative_eq!(formula.evaluate(1.0), 1.0, epsilon = 1e-14);
            let formula = DifferenceFormula::new(scheme, &identity, 0.01);
            assert_relative_eq!(formula.evaluate(0.5), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn central_difference_of_square() {
        let square = |x: f64| x * x;
        let formula = DifferenceFormula::new(DifferenceScheme::Central, &square, 0.01);
        assert_abs_diff_eq!(formula.evaluate(0.5), 1.0, epsilon = 1e-2);
    }

    #[test]
    fn one_sided_formulas_match_hand_computation() {
        let square = |x: f64| x * x;
        let forward = DifferenceFormula::new(DifferenceScheme::Forward, &square, 0.5);
        let backward = DifferenceFormula::new(DifferenceScheme::Backward, &square, 0.5);
        // ((1.5)² - 1) / 0.5 = 2.5, (1 - (0.5)²) / 0.5 = 1.5
        assert_relative_eq!(forward.evaluate(1.0), 2.5, epsilon = 1e-15);
        assert_relative_eq!(backward.evaluate(1.0), 1.5, epsilon = 1e-15);
    }

    #[test]
    fn polynomial_degree_matches_order() {
        // 中心差對二次式精確，5 點對四次式精確，7 點對六次式精確
        let cubic = |x: f64| x * x * x;
        let quartic = |x: f64| x.powi(4);
        let sextic = |x: f64| x.powi(6);
        let x = 0.75;
        let h = 0.125;

        let central = DifferenceFormula::new(DifferenceScheme::Central, &cubic, h);
        assert_relative_eq!(central.evaluate(x), 3.0 * x * x + h * h, epsilon = 1e-12);

        let five = DifferenceFormula::new(DifferenceScheme::FivePoint, &quartic, h);
        assert_relative_eq!(five.evaluate(x), 4.0 * x.powi(3), epsilon = 1e-12);

        let seven = DifferenceFormula::new(DifferenceScheme::SevenPoint, &sextic, h);
        assert_relative_eq!(seven.evaluate(x), 6.0 * x.powi(5), epsilon = 1e-12);
    }

    #[test]
    fn stencil_matches_sampled_offsets() {
        for scheme in DifferenceScheme::ALL {
            let offsets = Cell::new(Vec::<f64>::new());
            let recorder = |x: f64| {
                let mut seen = offsets.take();
                seen.push(x);
                offsets.set(seen);
                x.sin()
            };
            let formula = DifferenceFormula::new(scheme, &recorder, 0.5);
            formula.evaluate(0.0);

            let mut seen: Vec<i32> = offsets
                .take()
                .iter()
                .map(|x| (x / 0.5).round() as i32)
                .collect();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.as_slice(), scheme.stencil());
        }
    }

    #[test]
    fn degenerate_step_propagates_as_non_finite() {
        let sine = |x: f64| x.sin();
        for scheme in DifferenceScheme::ALL {
            let formula = DifferenceFormula::new(scheme, &sine, 0.0);
            assert!(formula.evaluate(1.0).is_nan());
        }
        let forward = DifferenceFormula::new(DifferenceScheme::Forward, &sine, 0.0);
        assert!(!forward.evaluate(0.5).is_finite());
    }

    #[test]
    fn evaluation_outside_domain_yields_function_result() {
        let log = |x: f64| x.ln();
        let formula = DifferenceFormula::new(DifferenceScheme::Central, &log, 1.0);
        assert!(formula.evaluate(0.5).is_nan());
    }

    #[test]
    fn generator_builds_formula_with_scheme_and_step() {
        let generator = DifferenceFormulaGenerator::new(DifferenceScheme::FivePoint);
        let sine = |x: f64| x.sin();
        let formula = generator.generate(&sine, 1e-2);
        assert_eq!(formula.scheme(), DifferenceScheme::FivePoint);
        assert_eq!(formula.step(), 1e-2);
        assert_relative_eq!(formula.evaluate(0.5), 0.5_f64.cos(), epsilon = 1e-9);
    }

    #[test]
    fn generator_deserializes_from_json() {
        let generator: DifferenceFormulaGenerator =
            serde_json::from_str(r#"{"scheme": "SevenPoint"}"#).unwrap();
        assert_eq!(generator.scheme(), DifferenceScheme::SevenPoint);
        assert!(serde_json::from_str::<DifferenceFormulaGenerator>(r#"{"scheme": "Spline"}"#).is_err());
    }
}
