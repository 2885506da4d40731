//! 対数バリア付き KKT 条件の線形化 (ニュートン系)
//!
//! ```text
//! [ -H  Jᵀ  I ] [Δx]     [ Jᵀμ + z - ∇f ]
//! [  J  0   0 ] [Δμ] = - [ g(x)         ]
//! [  Z  0   X ] [Δz]     [ X z - ρ 1    ]
//! ```

use crate::error::{Error, Result};
use crate::model::{Direction, EqualityConstraint, Hess, Iterate, Objective, Primal};

/// 係数行列と右辺を組み立てる
///
/// 行列は (2N + M) 次の正方行列。反復ごとに作り直す。
pub fn newton_system<O, C, const N: usize, const M: usize>(
    objective: &O,
    constraint: &C,
    it: &Iterate<N, M>,
    rho: f64,
) -> (na::DMatrix<f64>, na::DVector<f64>)
where
    O: Objective<N>,
    C: EqualityConstraint<N, M>,
{
    let x = &it.x;
    let grad = objective.gradient(x);
    let hess = objective.hessian(x);
    let g = constraint.value(x);
    let jac = constraint.jacobian(x);

    let dim = 2 * N + M;
    let mut a = na::DMatrix::<f64>::zeros(dim, dim);
    a.fixed_view_mut::<N, N>(0, 0).copy_from(&(-hess));
    a.fixed_view_mut::<N, M>(0, N).copy_from(&jac.transpose());
    a.fixed_view_mut::<N, N>(0, N + M)
        .copy_from(&Hess::<N>::identity());
    a.fixed_view_mut::<M, N>(N, 0).copy_from(&jac);
    a.fixed_view_mut::<N, N>(N + M, 0)
        .copy_from(&Hess::<N>::from_diagonal(&it.z));
    a.fixed_view_mut::<N, N>(N + M, N + M)
        .copy_from(&Hess::<N>::from_diagonal(x));

    let mut b = na::DVector::<f64>::zeros(dim);
    // 双対実行可能性
    b.fixed_rows_mut::<N>(0)
        .copy_from(&(jac.transpose() * it.mu + it.z - grad));
    // 主実行可能性
    b.fixed_rows_mut::<M>(N).copy_from(&g);
    // 摂動された相補性
    b.fixed_rows_mut::<N>(N + M)
        .copy_from(&(x.component_mul(&it.z) - Primal::<N>::repeat(rho)));

    (a, -b)
}

/// ニュートン方向 (Δx, Δμ, Δz) を求める
///
/// X, Z に正でない成分があると相補性ブロックが退化するので、
/// 行列が数値的に解けても `Error::SingularSystem` を返す。
pub fn newton_direction<O, C, const N: usize, const M: usize>(
    objective: &O,
    constraint: &C,
    it: &Iterate<N, M>,
    rho: f64,
) -> Result<Direction<N, M>>
where
    O: Objective<N>,
    C: EqualityConstraint<N, M>,
{
    if let Some(i) = (0..N).find(|&i| !(positive(it.x[i]) && positive(it.z[i]))) {
        return Err(Error::SingularSystem(format!(
            "degenerate complementarity row {}: x = {}, z = {}",
            N + M + i,
            it.x[i],
            it.z[i]
        )));
    }

    let (a, b) = newton_system(objective, constraint, it, rho);
    log::trace!("newton matrix: {a}rhs: {b}");

    let d = a
        .lu()
        .solve(&b)
        .ok_or_else(|| Error::SingularSystem("LU factorization hit a zero pivot".into()))?;
    if d.iter().any(|v| !v.is_finite()) {
        return Err(Error::SingularSystem("solution is not finite".into()));
    }

    Ok(Direction {
        dx: d.fixed_rows::<N>(0).into_owned(),
        dmu: d.fixed_rows::<M>(N).into_owned(),
        dz: d.fixed_rows::<N>(N + M).into_owned(),
    })
}

fn positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
