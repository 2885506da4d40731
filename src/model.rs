// 主変数 N 個、等式制約 M 本の問題を表すトレイト

pub type Primal<const N: usize> = na::SVector<f64, N>;
pub type Dual<const M: usize> = na::SVector<f64, M>;
pub type Hess<const N: usize> = na::SMatrix<f64, N, N>;
pub type Jac<const M: usize, const N: usize> = na::SMatrix<f64, M, N>;

/// 目的関数 f(x) とその1階・2階微分
pub trait Objective<const N: usize> {
    fn value(&self, x: &Primal<N>) -> f64;
    fn gradient(&self, x: &Primal<N>) -> Primal<N>;
    fn hessian(&self, x: &Primal<N>) -> Hess<N>;
}

/// 等式制約 g(x) = 0 とそのヤコビアン
pub trait EqualityConstraint<const N: usize, const M: usize> {
    fn value(&self, x: &Primal<N>) -> Dual<M>;
    fn jacobian(&self, x: &Primal<N>) -> Jac<M, N>;
}

/// 主双対の反復点 (x, μ, z)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iterate<const N: usize, const M: usize> {
    pub x: Primal<N>,
    pub mu: Dual<M>,
    pub z: Primal<N>,
}

impl<const N: usize, const M: usize> Iterate<N, M> {
    pub fn new(x: Primal<N>, mu: Dual<M>, z: Primal<N>) -> Self {
        Self { x, mu, z }
    }

    /// x と z が全成分で正かどうか
    pub fn is_interior(&self) -> bool {
        self.x.iter().chain(self.z.iter()).all(|v| v.is_finite() && *v > 0.0)
    }

    /// max_j x_j z_j
    pub fn complementarity(&self) -> f64 {
        self.x
            .component_mul(&self.z)
            .iter()
            .fold(f64::NEG_INFINITY, |acc, v| acc.max(*v))
    }
}

/// ニュートン方向 (Δx, Δμ, Δz)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction<const N: usize, const M: usize> {
    pub dx: Primal<N>,
    pub dmu: Dual<M>,
    pub dz: Primal<N>,
}
