use thiserror::Error;

/// 内点法の実行中に起こりうるエラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// ニュートン系が解けない (特異、または退化した相補性ブロック)
    #[error("Newton system is singular: {0}")]
    SingularSystem(String),

    /// 初期点に正でない成分がある
    #[error("Invalid start: x0[{index}] = {value} must be strictly positive")]
    InvalidStart { index: usize, value: f64 },

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// ステップ後に x > 0, z > 0 が崩れた
    #[error("Iterate {iteration} left the strictly positive orthant")]
    InfeasibleIterate { iteration: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
