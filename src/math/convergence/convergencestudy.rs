use log::debug;
use serde::Deserialize;

use crate::math::convergence::convergenceerror::ConvergenceError;
use crate::math::convergence::convergenceseries::{
    ConvergencePoint,
    ConvergenceSeries
};
use crate::math::differentiation::differenceformula::DifferenceFormulaGenerator;
use crate::math::function::scalarfunction::ScalarFunction;
use crate::math::integration::quadraturerule::QuadratureRuleGenerator;

/// h_k = 2^(1-k)，k = 1..=count
pub fn halving_steps(count: usize) -> Vec<f64> {
    (1..=count)
        .map(|k| 2.0_f64.powi(1 - k as i32))
        .collect()
}

/// 對每個具名差分公式、每個步長各建一個新的公式，於 x 求值並與精確導數比較
pub fn differentiation_convergence<F>(generators: &[(String, DifferenceFormulaGenerator)],
                                      function: &F,
                                      x: f64,
                                      exact_derivative: f64,
                                      steps: &[f64]) -> Vec<ConvergenceSeries> where
    F: ScalarFunction + ?Sized {
    generators
        .iter()
        .map(|(name, generator)| {
            let mut series = ConvergenceSeries::new(name.to_owned());
            for &h in steps {
                let approximation = generator.generate(function, h).evaluate(x);
                series.push(ConvergencePoint::new(h, approximation, exact_derivative));
            }
            debug!("{}: {} steps evaluated at x = {}", name, steps.len(), x);
            series
        })
        .collect()
}

/// 積分版本：參數為分割數 n，紀錄的步長為 h = (b - a) / n
pub fn integration_convergence<F>(generators: &[(String, QuadratureRuleGenerator)],
                                  function: &F,
                                  left_bound: f64,
                                  right_bound: f64,
                                  exact_integral: f64,
                                  points_counts: &[usize]) -> Result<Vec<ConvergenceSeries>, ConvergenceError> where
    F: ScalarFunction + ?Sized {
    let mut result = Vec::with_capacity(generators.len());
    for (name, generator) in generators {
        let mut series = ConvergenceSeries::new(name.to_owned());
        for &n in points_counts {
            let rule = generator.generate(function, left_bound, right_bound, n)?;
            series.push(ConvergencePoint::new(rule.step().abs(), rule.evaluate(), exact_integral));
        }
        debug!("{}: {} subdivision counts on [{}, {}]", name, points_counts.len(), left_bound, right_bound);
        result.push(series);
    }
    Ok(result)
}

// ─────────────────────────────────────────────────────────────────────────────
// ConvergenceSettings
// ─────────────────────────────────────────────────────────────────────────────

fn default_evaluation_point() -> f64 {
    0.5
}

fn default_step_count() -> usize {
    20
}

fn default_points_counts() -> Vec<usize> {
    (1..=10).map(|k| 1usize << k).collect()
}

fn default_right_bound() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConvergenceSettings {
    #[serde(default = "default_evaluation_point")]
    evaluation_point: f64,
    #[serde(default = "default_step_count")]
    step_count: usize,
    #[serde(default = "default_points_counts")]
    points_counts: Vec<usize>,
    #[serde(default)]
    left_bound: f64,
    #[serde(default = "default_right_bound")]
    right_bound: f64
}

impl Default for ConvergenceSettings {
    fn default() -> Self {
        ConvergenceSettings {
            evaluation_point: default_evaluation_point(),
            step_count: default_step_count(),
            points_counts: default_points_counts(),
            left_bound: 0.0,
            right_bound: default_right_bound()
        }
    }
}

impl ConvergenceSettings {
    pub fn evaluation_point(&self) -> f64 {
        self.evaluation_point
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn steps(&self) -> Vec<f64> {
        halving_steps(self.step_count)
    }

    pub fn points_counts(&self) -> &Vec<usize> {
        &self.points_counts
    }

    pub fn left_bound(&self) -> f64 {
        self.left_bound
    }

    pub fn right_bound(&self) -> f64 {
        self.right_bound
    }

    pub fn differentiate<F>(&self,
                            generators: &[(String, DifferenceFormulaGenerator)],
                            function: &F,
                            exact_derivative: f64) -> Vec<ConvergenceSeries> where
        F: ScalarFunction + ?Sized {
        differentiation_convergence(
            generators,
            function,
            self.evaluation_point,
            exact_derivative,
            &self.steps()
        )
    }

    pub fn integrate<F>(&self,
                        generators: &[(String, QuadratureRuleGenerator)],
                        function: &F,
                        exact_integral: f64) -> Result<Vec<ConvergenceSeries>, ConvergenceError> where
        F: ScalarFunction + ?Sized {
        integration_convergence(
            generators,
            function,
            self.left_bound,
            self.right_bound,
            exact_integral,
            &self.points_counts
        )
    }
}
