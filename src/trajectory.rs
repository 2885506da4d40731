use crate::model::{Iterate, Primal};

/// 1反復で採用したステップ幅
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSizes {
    pub primal: f64,
    pub dual: f64,
}

/// 反復点の列 (追記のみ)
///
/// `rho[i]` は反復点 i で使うバリアパラメータ、`steps[i]` は i から i+1 への
/// ステップ幅。
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<const N: usize, const M: usize> {
    iterates: Vec<Iterate<N, M>>,
    rho: Vec<f64>,
    steps: Vec<StepSizes>,
}

impl<const N: usize, const M: usize> Trajectory<N, M> {
    pub fn new(start: Iterate<N, M>, rho: f64) -> Self {
        Self {
            iterates: vec![start],
            rho: vec![rho],
            steps: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, it: Iterate<N, M>, step: StepSizes, rho: f64) {
        self.iterates.push(it);
        self.steps.push(step);
        self.rho.push(rho);
    }

    pub fn len(&self) -> usize {
        self.iterates.len()
    }

    /// 初期点を必ず含むので常に false
    pub fn is_empty(&self) -> bool {
        self.iterates.is_empty()
    }

    pub fn iterates(&self) -> &[Iterate<N, M>] {
        &self.iterates
    }

    pub fn rho(&self) -> &[f64] {
        &self.rho
    }

    pub fn steps(&self) -> &[StepSizes] {
        &self.steps
    }

    pub fn last(&self) -> &Iterate<N, M> {
        // 初期点は必ず入っている
        &self.iterates[self.iterates.len() - 1]
    }

    /// 主変数の列
    pub fn primal(&self) -> Vec<Primal<N>> {
        self.iterates.iter().map(|it| it.x).collect()
    }

    /// 最後の主変数 (解の推定値)
    pub fn solution(&self) -> Primal<N> {
        self.last().x
    }

    /// iter,rho,alpha_p,alpha_d,x..,mu..,z.. の形で書き出す
    pub fn write_csv<W: std::io::Write>(&self, wtr: W) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(wtr);

        let mut header = vec!["iter".to_string(), "rho".into(), "alpha_p".into(), "alpha_d".into()];
        header.extend((1..=N).map(|i| format!("x{i}")));
        header.extend((1..=M).map(|i| format!("mu{i}")));
        header.extend((1..=N).map(|i| format!("z{i}")));
        wtr.write_record(&header)?;

        for (i, it) in self.iterates.iter().enumerate() {
            let (ap, ad) = match i.checked_sub(1).map(|k| self.steps[k]) {
                Some(s) => (s.primal.to_string(), s.dual.to_string()),
                None => (String::new(), String::new()),
            };
            let mut record = vec![i.to_string(), self.rho[i].to_string(), ap, ad];
            record.extend(it.x.iter().map(|v| v.to_string()));
            record.extend(it.mu.iter().map(|v| v.to_string()));
            record.extend(it.z.iter().map(|v| v.to_string()));
            wtr.write_record(&record)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
