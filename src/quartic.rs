//! 例題の微分式 (問題ごとに差し替える部分)
//!
//! ```text
//! min  (x1 - 2)^4 + (x1 - 2 x2)^2
//! s.t. x1^2 - x2 + x3 = 0
//!      x1, x2, x3 >= 0
//! ```
//!
//! x3 は元の不等式制約 x1^2 - x2 <= 0 を等式に直すためのスラック変数。

use crate::model::{Dual, EqualityConstraint, Hess, Jac, Objective, Primal};

/// 主変数の数
pub const NP: usize = 3;
/// 等式制約の数
pub const ND: usize = 1;

/// (x1 - 2)^4 + (x1 - 2 x2)^2
#[derive(Debug, Clone, Copy, Default)]
pub struct Quartic;

/// x1^2 - x2 + x3 = 0
#[derive(Debug, Clone, Copy, Default)]
pub struct Parabola;

impl Objective<NP> for Quartic {
    fn value(&self, x: &Primal<NP>) -> f64 {
        (x[0] - 2.0).powi(4) + (x[0] - 2.0 * x[1]).powi(2)
    }

    fn gradient(&self, x: &Primal<NP>) -> Primal<NP> {
        let r = x[0] - 2.0 * x[1];
        // スラック変数は目的関数に現れない
        na::vector![4.0 * (x[0] - 2.0).powi(3) + 2.0 * r, -4.0 * r, 0.0]
    }

    fn hessian(&self, x: &Primal<NP>) -> Hess<NP> {
        na::matrix![
            12.0 * (x[0] - 2.0).powi(2) + 2.0, -4.0, 0.0;
            -4.0, 8.0, 0.0;
            0.0, 0.0, 0.0
        ]
    }
}

impl EqualityConstraint<NP, ND> for Parabola {
    fn value(&self, x: &Primal<NP>) -> Dual<ND> {
        na::vector![x[0] * x[0] - x[1] + x[2]]
    }

    fn jacobian(&self, x: &Primal<NP>) -> Jac<ND, NP> {
        na::matrix![2.0 * x[0], -1.0, 1.0]
    }
}
