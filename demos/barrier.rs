extern crate nalgebra as na;
use anyhow::Result;
use pdip::quartic::{Parabola, Quartic, ND, NP};
use pdip::{Objective, PrimalDual, Settings};

// cargo run --example barrier --release
// RUST_LOG=debug で各反復のログを表示

// 反復回数 (この問題とパラメータなら十分)
const N: usize = 16;
// 縮小率
const BETA: f64 = 0.5;
// 効率を考えるなら 5 程度
const RHO: f64 = 10.0;
// 許容誤差
const EPS: f64 = 1e-3;

fn main() -> Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()?;

    let settings = Settings::default()
        .with_max_iter(N)
        .with_beta(BETA)
        .with_rho(RHO)
        .with_eps(EPS);
    let solver = PrimalDual::new(Quartic, Parabola, settings);

    let x0 = na::vector![0.5, 1.0, 0.75];
    let now = std::time::Instant::now();
    let traj = solver.solve::<NP, ND>(&x0)?;
    let elapsed = now.elapsed();

    for (i, it) in traj.iterates().iter().enumerate() {
        print!("{i:2}, rho: {:9.6}, ", traj.rho()[i]);
        print!("x: ({:6.3},{:6.3},{:6.3}) ", it.x[0], it.x[1], it.x[2]);
        print!("f: {:8.5} ", Quartic.value(&it.x));
        print!("xz: {:9.6}", it.complementarity());
        println!();
    }

    let x = traj.solution();
    println!("solution: ({:.4}, {:.4})", x[0], x[1]);
    println!("elapsed: {:.2} ms", elapsed.as_secs_f64() * 1e3);

    let file_path = "logs/barrier.csv";
    std::fs::create_dir_all("logs")?;
    let file = std::fs::File::create(file_path)?;
    traj.write_csv(file)?;
    println!("wrote {file_path}");

    Ok(())
}
