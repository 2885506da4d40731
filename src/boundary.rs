// fraction-to-the-boundary によるステップ幅の決定

/// v + α dv が正のまま残るステップ幅 α ∈ (0, 1 - eps] を返す
///
/// α = min(1 - eps, min_{dv_i < 0} -v_i / dv_i)
///
/// `digits` が与えられた場合は小数点以下 `digits` 桁に偶数丸めする
/// (丸めで大きくなる場合は切り捨て)。
/// α が境界までの比に達してしまう場合は (1 - eps) 倍した比を使う。
pub fn step_size<const N: usize>(
    v: &na::SVector<f64, N>,
    dv: &na::SVector<f64, N>,
    eps: f64,
    digits: Option<i32>,
) -> f64 {
    let limit = v
        .iter()
        .zip(dv.iter())
        .filter(|(_, d)| **d < 0.0)
        .fold(f64::INFINITY, |a, (v, d)| a.min(-v / d));
    let raw = (1.0 - eps).min(limit);

    let alpha = digits.map_or(raw, |d| round_down_if_up(raw, d));
    if alpha > 0.0 && alpha < limit {
        return alpha;
    }
    if !limit.is_finite() {
        return raw;
    }

    // このままだと境界上に乗るので手前で止める
    let safe = (1.0 - eps) * limit;
    match digits.map(|d| floor(safe, d)) {
        Some(a) if a > 0.0 => a,
        _ => safe,
    }
}

fn round_down_if_up(a: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    let r = (a * scale).round_ties_even() / scale;
    if r > a {
        floor(a, digits)
    } else {
        r
    }
}

fn floor(a: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (a * scale).floor() / scale
}
