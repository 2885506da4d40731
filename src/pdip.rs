use crate::boundary::step_size;
use crate::error::{Error, Result};
use crate::kkt::newton_direction;
use crate::model::{Dual, EqualityConstraint, Iterate, Objective, Primal};
use crate::settings::Settings;
use crate::trajectory::{StepSizes, Trajectory};

// 主双対内点法 (パス追跡)
pub struct PrimalDual<O, C> {
    objective: O,
    constraint: C,
    settings: Settings,
}

impl<O, C> PrimalDual<O, C> {
    pub fn new(objective: O, constraint: C, settings: Settings) -> Self {
        Self {
            objective,
            constraint,
            settings,
        }
    }

    /// μ⁰ = 0 から解く
    pub fn solve<const N: usize, const M: usize>(&self, x0: &Primal<N>) -> Result<Trajectory<N, M>>
    where
        O: Objective<N>,
        C: EqualityConstraint<N, M>,
    {
        self.solve_with_multiplier(x0, &Dual::<M>::zeros())
    }

    pub fn solve_with_multiplier<const N: usize, const M: usize>(
        &self,
        x0: &Primal<N>,
        mu0: &Dual<M>,
    ) -> Result<Trajectory<N, M>>
    where
        O: Objective<N>,
        C: EqualityConstraint<N, M>,
    {
        let Settings {
            max_iter,
            beta,
            mut rho,
            eps,
            round_digits,
        } = self.settings;
        self.settings.validate()?;
        if let Some((index, &value)) = x0
            .iter()
            .enumerate()
            .find(|(_, v)| !(v.is_finite() && **v > 0.0))
        {
            return Err(Error::InvalidStart { index, value });
        }

        // 初期の相補性残差 Xz - ρ1 が 0 になるように z を選ぶ
        let mut it = Iterate::new(*x0, *mu0, x0.map(|v| rho / v));
        let mut traj = Trajectory::new(it, rho);

        for i in 0..max_iter - 1 {
            // 双対ギャップの代わりに nρ で打ち切る
            if N as f64 * rho < eps {
                log::info!("stopped at iteration {i}: n*rho = {:.3e} < eps", N as f64 * rho);
                break;
            }

            let d = newton_direction(&self.objective, &self.constraint, &it, rho)
                .inspect_err(|e| log::error!("iteration {i}: {e}"))?;

            let alpha_p = step_size(&it.x, &d.dx, eps, round_digits);
            let alpha_d = step_size(&it.z, &d.dz, eps, round_digits);

            it = Iterate::new(
                it.x + alpha_p * d.dx,
                it.mu + alpha_d * d.dmu,
                it.z + alpha_d * d.dz,
            );
            if !it.is_interior() {
                log::error!("iteration {i}: x = {:?}, z = {:?}", it.x.as_slice(), it.z.as_slice());
                return Err(Error::InfeasibleIterate { iteration: i + 1 });
            }

            rho *= beta;
            traj.push(
                it,
                StepSizes {
                    primal: alpha_p,
                    dual: alpha_d,
                },
                rho,
            );
            log::debug!(
                "iter {:2}: rho = {:.3e}, alpha_p = {:.3}, alpha_d = {:.3}, x = {:?}",
                i + 1,
                rho,
                alpha_p,
                alpha_d,
                it.x.as_slice()
            );
        }

        Ok(traj)
    }
}

impl<O: Default, C: Default> Default for PrimalDual<O, C> {
    fn default() -> Self {
        Self::new(O::default(), C::default(), Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Hess, Jac};
    use crate::quartic::{Parabola, Quartic, ND, NP};

    fn x0() -> Primal<NP> {
        na::vector![0.5, 1.0, 0.75]
    }

    #[test]
    fn starting_point_is_kept() {
        let pd = PrimalDual::<Quartic, Parabola>::default();
        let traj = pd.solve::<NP, ND>(&x0()).unwrap();
        let first = traj.iterates()[0];
        assert_eq!(first.x, x0());
        assert_eq!(first.mu, na::vector![0.0]);
        assert_eq!(first.z, na::vector![20.0, 10.0, 10.0 / 0.75]);
    }

    #[test]
    fn rejects_non_positive_start() {
        let pd = PrimalDual::<Quartic, Parabola>::default();
        let r = pd.solve::<NP, ND>(&na::vector![0.5, -1.0, 0.75]);
        assert_eq!(r, Err(Error::InvalidStart { index: 1, value: -1.0 }));
        let r = pd.solve::<NP, ND>(&na::vector![0.0, 1.0, 0.75]);
        assert_eq!(r, Err(Error::InvalidStart { index: 0, value: 0.0 }));
    }

    #[test]
    fn rejects_bad_settings() {
        let pd = PrimalDual::new(Quartic, Parabola, Settings::default().with_beta(1.5));
        let r = pd.solve::<NP, ND>(&x0());
        assert!(matches!(r, Err(Error::InvalidSettings(_))));
    }

    #[test]
    fn single_iterate_budget() {
        let pd = PrimalDual::new(Quartic, Parabola, Settings::default().with_max_iter(1));
        let traj = pd.solve::<NP, ND>(&x0()).unwrap();
        assert_eq!(traj.len(), 1);
        assert!(traj.steps().is_empty());
    }

    #[test]
    fn early_stop_on_small_rho() {
        // 3ρ < 0.1 になるのは ρ = 10 / 2^9 のとき
        let pd = PrimalDual::new(Quartic, Parabola, Settings::default().with_eps(0.1));
        let traj = pd.solve::<NP, ND>(&x0()).unwrap();
        assert_eq!(traj.len(), 10);
        assert!(3.0 * traj.rho().last().unwrap() < 0.1);
    }

    #[test]
    fn caller_supplied_multiplier() {
        let pd = PrimalDual::<Quartic, Parabola>::default();
        let traj = pd
            .solve_with_multiplier::<NP, ND>(&x0(), &na::vector![2.0])
            .unwrap();
        assert_eq!(traj.iterates()[0].mu, na::vector![2.0]);
        assert!(traj.iterates().iter().all(|it| it.is_interior()));
    }

    // g(x) = -1.7e308, J = [1] だと Δx ≈ 1.7e308 となり x の更新が溢れる
    struct Overflow;
    impl Objective<1> for Overflow {
        fn value(&self, _: &Primal<1>) -> f64 {
            0.0
        }
        fn gradient(&self, _: &Primal<1>) -> Primal<1> {
            Primal::<1>::zeros()
        }
        fn hessian(&self, _: &Primal<1>) -> Hess<1> {
            Hess::<1>::zeros()
        }
    }
    impl EqualityConstraint<1, 1> for Overflow {
        fn value(&self, _: &Primal<1>) -> Dual<1> {
            na::vector![-1.7e308]
        }
        fn jacobian(&self, _: &Primal<1>) -> Jac<1, 1> {
            na::matrix![1.0]
        }
    }

    #[test]
    fn overflowing_step_is_not_stored() {
        let pd = PrimalDual::new(Overflow, Overflow, Settings::default());
        let r = pd.solve::<1, 1>(&na::vector![1e308]);
        // Err なので反復点は返らない
        assert_eq!(r, Err(Error::InfeasibleIterate { iteration: 1 }));
    }
}
