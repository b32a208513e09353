/// 單變數實函數 f: ℝ → ℝ
///
/// 差分公式與積分法則只借用此函數並在指定點求值，
/// 不做任何定義域檢查；函數本身回傳的 NaN/inf 或 panic 原樣傳出。
pub trait ScalarFunction {
    fn value(&self, x: f64) -> f64;
}

impl <F> ScalarFunction for F where
    F: Fn(f64) -> f64 + ?Sized {
    #[inline]
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}
