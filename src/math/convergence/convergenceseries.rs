use nalgebra::{
    DMatrix,
    DVector
};

use crate::math::convergence::convergenceerror::ConvergenceError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergencePoint {
    step: f64,
    approximation: f64,
    error: f64
}

impl ConvergencePoint {
    pub fn new(step: f64, approximation: f64, exact: f64) -> ConvergencePoint {
        ConvergencePoint { step, approximation, error: (approximation - exact).abs() }
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn approximation(&self) -> f64 {
        self.approximation
    }

    pub fn error(&self) -> f64 {
        self.error
    }

    fn is_usable(&self) -> bool {
        self.step > 0.0 && self.step.is_finite() && self.error > 0.0 && self.error.is_finite()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ConvergenceSeries
// ─────────────────────────────────────────────────────────────────────────────
//
// 同一個公式在不同步長下的誤差序列。經驗階數 p 由最小平方法擬合
//
//   ln(error) = c + p·ln(h)
//
// 誤差為 0（捨入下剛好精確）或非有限值的點不納入擬合。

#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceSeries {
    name: String,
    points: Vec<ConvergencePoint>
}

impl ConvergenceSeries {
    pub fn new(name: String) -> ConvergenceSeries {
        ConvergenceSeries { name, points: Vec::new() }
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn points(&self) -> &Vec<ConvergencePoint> {
        &self.points
    }

    pub fn push(&mut self, point: ConvergencePoint) {
        self.points.push(point);
    }

    pub fn empirical_order(&self) -> Result<f64, ConvergenceError> {
        Self::fit_order(self.points.iter().filter(|p| p.is_usable()))
    }

    /// 只用 min_step <= h <= max_step 的點擬合，用來避開捨入誤差主導的區段
    pub fn empirical_order_within(&self, min_step: f64, max_step: f64) -> Result<f64, ConvergenceError> {
        Self::fit_order(
            self.points
                .iter()
                .filter(|p| p.is_usable() && p.step >= min_step && p.step <= max_step)
        )
    }

    fn fit_order<'a, I>(points: I) -> Result<f64, ConvergenceError> where
        I: Iterator<Item = &'a ConvergencePoint> {
        let (log_steps, log_errors): (Vec<f64>, Vec<f64>) = points
            .map(|p| (p.step.ln(), p.error.ln()))
            .unzip();
        let m = log_steps.len();
        if m < 2 {
            return Err(ConvergenceError::InsufficientData(m));
        }

        let design = DMatrix::from_fn(m, 2, |i, j| if j == 0 { 1.0 } else { log_steps[i] });
        let rhs = DVector::from_vec(log_errors);
        let beta = design
            .svd(true, true)
            .solve(&rhs, 1e-12)
            .map_err(ConvergenceError::FitFailed)?;
        Ok(beta[1])
    }
}
