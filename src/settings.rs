use crate::error::{Error, Result};

/// パス追跡の数値パラメータ
///
/// `Default` は例題で使う値 (N = 16, β = 0.5, ρ₀ = 10, ε = 1e-3, 3桁丸め)。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// 反復点の最大数 (初期点を含む)
    pub max_iter: usize,
    /// バリアパラメータの縮小率 β
    pub beta: f64,
    /// バリアパラメータの初期値 ρ₀
    pub rho: f64,
    /// 許容誤差 ε
    pub eps: f64,
    /// ステップ幅を丸める小数点以下の桁数
    pub round_digits: Option<i32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_iter: 16,
            beta: 0.5,
            rho: 10.0,
            eps: 1e-3,
            round_digits: Some(3),
        }
    }
}

impl Settings {
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    pub fn with_rounding(mut self, digits: Option<i32>) -> Self {
        self.round_digits = digits;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_iter < 1 {
            return Err(Error::InvalidSettings("max_iter must be at least 1".into()));
        }
        if !(self.beta > 0.0 && self.beta < 1.0) {
            return Err(Error::InvalidSettings(format!(
                "beta must lie in (0, 1), got {}",
                self.beta
            )));
        }
        if !(self.rho.is_finite() && self.rho > 0.0) {
            return Err(Error::InvalidSettings(format!(
                "rho must be positive, got {}",
                self.rho
            )));
        }
        // 1 - ε がステップ幅の上限なので ε < 1
        if !(self.eps > 0.0 && self.eps < 1.0) {
            return Err(Error::InvalidSettings(format!(
                "eps must lie in (0, 1), got {}",
                self.eps
            )));
        }
        if matches!(self.round_digits, Some(d) if d < 0) {
            return Err(Error::InvalidSettings("round_digits must be non-negative".into()));
        }
        Ok(())
    }
}
