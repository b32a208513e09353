/// 具有已知解析導數（及部分解析反導數）的測試函數，
/// 用於量測差分公式與積分法則的誤差
#[derive(Clone, Copy)]
pub struct BenchmarkFunction {
    name: &'static str,
    value: fn(f64) -> f64,
    derivative: fn(f64) -> f64,
    antiderivative: Option<fn(f64) -> f64>
}

impl BenchmarkFunction {
    pub fn new(name: &'static str,
               value: fn(f64) -> f64,
               derivative: fn(f64) -> f64,
               antiderivative: Option<fn(f64) -> f64>) -> BenchmarkFunction {
        BenchmarkFunction { name, value, derivative, antiderivative }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self, x: f64) -> f64 {
        (self.value)(x)
    }

    pub fn function(&self) -> fn(f64) -> f64 {
        self.value
    }

    pub fn derivative(&self, x: f64) -> f64 {
        (self.derivative)(x)
    }

    pub fn has_antiderivative(&self) -> bool {
        self.antiderivative.is_some()
    }

    /// F(b) - F(a)；沒有初等反導數時回傳 None
    pub fn exact_integral(&self, left_bound: f64, right_bound: f64) -> Option<f64> {
        self.antiderivative
            .map(|antiderivative| antiderivative(right_bound) - antiderivative(left_bound))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// 測試函數集
// ─────────────────────────────────────────────────────────────────────────────
//
// ln(x+3) 與 sqrt(x+3) 僅定義於 x > -3（sqrt 含 -3），
// 在定義域外取樣時結果為 NaN。

fn sin_of_square(x: f64) -> f64 {
    (x * x).sin()
}

fn sin_of_square_derivative(x: f64) -> f64 {
    2.0 * x * (x * x).cos()
}

fn cos_of_sin(x: f64) -> f64 {
    x.sin().cos()
}

fn cos_of_sin_derivative(x: f64) -> f64 {
    -x.sin().sin() * x.cos()
}

fn exp_of_sin_of_cos(x: f64) -> f64 {
    x.cos().sin().exp()
}

fn exp_of_sin_of_cos_derivative(x: f64) -> f64 {
    -x.sin() * x.cos().cos() * x.cos().sin().exp()
}

fn log_shifted(x: f64) -> f64 {
    (x + 3.0).ln()
}

fn log_shifted_derivative(x: f64) -> f64 {
    1.0 / (x + 3.0)
}

fn log_shifted_antiderivative(x: f64) -> f64 {
    let u = x + 3.0;
    u * u.ln() - u
}

fn sqrt_shifted(x: f64) -> f64 {
    (x + 3.0).sqrt()
}

fn sqrt_shifted_derivative(x: f64) -> f64 {
    0.5 / (x + 3.0).sqrt()
}

fn sqrt_shifted_antiderivative(x: f64) -> f64 {
    2.0 / 3.0 * (x + 3.0).powf(1.5)
}

fn cosine(x: f64) -> f64 {
    x.cos()
}

fn cosine_derivative(x: f64) -> f64 {
    -x.sin()
}

fn cosine_antiderivative(x: f64) -> f64 {
    x.sin()
}

pub fn benchmark_functions() -> Vec<BenchmarkFunction> {
    vec![
        BenchmarkFunction::new("sin(x^2)", sin_of_square, sin_of_square_derivative, None),
        BenchmarkFunction::new("cos(sin(x))", cos_of_sin, cos_of_sin_derivative, None),
        BenchmarkFunction::new("exp(sin(cos(x)))", exp_of_sin_of_cos, exp_of_sin_of_cos_derivative, None),
        BenchmarkFunction::new("log(x+3)", log_shifted, log_shifted_derivative, Some(log_shifted_antiderivative)),
        BenchmarkFunction::new("sqrt(x+3)", sqrt_shifted, sqrt_shifted_derivative, Some(sqrt_shifted_antiderivative)),
        BenchmarkFunction::new("cos(x)", cosine, cosine_derivative, Some(cosine_antiderivative))
    ]
}


#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::math::differentiation::differenceformula::{
        DifferenceFormula,
        DifferenceScheme
    };
    use crate::math::integration::quadraturerule::{
        QuadratureRule,
        QuadratureScheme
    };

    use super::*;

    #[test]
    fn analytic_derivatives_agree_with_seven_point_formula() {
        for benchmark in benchmark_functions() {
            let f = benchmark.function();
            let formula = DifferenceFormula::new(DifferenceScheme::SevenPoint, &f, 1e-2);
            for x in [-1.0, 0.0, 0.5, 2.0] {
                assert_relative_eq!(
                    formula.evaluate(x),
                    benchmark.derivative(x),
                    epsilon = 1e-9,
                    max_relative = 1e-9
                );
            }
        }
    }

    #[test]
    fn antiderivatives_agree_with_simpson() {
        for benchmark in benchmark_functions().iter().filter(|b| b.has_antiderivative()) {
            let f = benchmark.function();
            let rule = QuadratureRule::new(QuadratureScheme::Simpson, &f, 0.0, 1.0, 64).unwrap();
            let exact = benchmark.exact_integral(0.0, 1.0).unwrap();
            assert_relative_eq!(rule.evaluate(), exact, epsilon = 1e-9, max_relative = 1e-9);
        }
    }

    #[test]
    fn cosine_integral_over_unit_interval() {
        let cosine = benchmark_functions()
            .into_iter()
            .find(|b| b.name() == "cos(x)")
            .unwrap();
        assert_relative_eq!(cosine.exact_integral(0.0, 1.0).unwrap(), 0.8414709848078965, epsilon = 1e-15);
        assert_eq!(cosine.value(0.0), 1.0);
    }

    #[test]
    fn no_closed_form_integral_for_composite_functions() {
        let sin_square = benchmark_functions()[0];
        assert!(!sin_square.has_antiderivative());
        assert_eq!(sin_square.exact_integral(0.0, 1.0), None);
    }

    #[test]
    fn sampling_outside_domain_is_nan() {
        let log = benchmark_functions()[3];
        assert!(log.value(-4.0).is_nan());
    }
}
