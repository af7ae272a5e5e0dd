use matsubara_fft::config::I;
use matsubara_fft::{measure_time, print_and_log};
use matsubara_fft::{HubbardParams, MatsubaraTransform, C, F};
use ndarray::prelude::*;
use ndarray_npy::WriteNpyExt;
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Проверка на свободном фермионном уровне с энергией eps:
/// G(tau) = -exp(-eps tau) / (1 + exp(-beta eps)),  G(i w) = 1 / (i w - eps).
///
/// Аргументы (необязательные): n_tau beta eps out_dir
fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    let n_tau: usize = args.get(1).map(|s| s.parse()).transpose()?.unwrap_or(1024);
    let beta: F = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(10.0);
    let eps: F = args.get(3).map(|s| s.parse()).transpose()?.unwrap_or(0.3);
    let out_dir = args.get(4).map(String::as_str).unwrap_or("out/free_fermion");

    let param = HubbardParams::new(n_tau, beta)?;
    if !param.is_fermionic() {
        print_and_log!("n_tau = {n_tau} is odd: the frequency grid is bosonic, G(i w) check is meaningless");
    }
    print_and_log!("n_tau = {}, beta = {}, eps = {}", n_tau, beta, eps);

    let g_tau: Array1<F> = param
        .tau_grid()
        .mapv(|tau| -(-eps * tau).exp() / (1.0 + (-beta * eps).exp()));

    let mut transform = MatsubaraTransform::new(param);
    let g_iw = measure_time!("t2w", { transform.t2w(&g_tau) })?;

    let g_iw_exact: Array1<C> = param.matsubara_grid().mapv(|w| 1.0 / (I * w - eps));
    let max_err_iw = g_iw
        .iter()
        .zip(g_iw_exact.iter())
        .map(|(a, b)| (a - b).norm())
        .fold(0.0, F::max);
    print_and_log!("max |G(iw) - 1/(iw - eps)| = {:e}", max_err_iw);

    let g_tau_back = measure_time!("w2t", { transform.w2t(&g_iw) })?;
    // концы G(tau) не антипериодичны, сравниваем только внутренние точки
    let max_err_tau = g_tau
        .slice(s![1..n_tau])
        .iter()
        .zip(g_tau_back.slice(s![1..n_tau]).iter())
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, F::max);
    print_and_log!("max |G(tau) - w2t(t2w(G))(tau)|, interior = {:e}", max_err_tau);
    print_and_log!(
        "G(0) + G(beta) = {:.6}, after round trip = {:.6}",
        g_tau[[0]] + g_tau[[n_tau]],
        g_tau_back[[0]] + g_tau_back[[n_tau]]
    );

    param.save_grids(out_dir)?;
    let dir = Path::new(out_dir);
    g_tau.write_npy(BufWriter::new(File::create(dir.join("g_tau.npy"))?))?;
    g_iw.write_npy(BufWriter::new(File::create(dir.join("g_iw.npy"))?))?;
    g_tau_back.write_npy(BufWriter::new(File::create(dir.join("g_tau_back.npy"))?))?;
    print_and_log!("saved to {}", out_dir);
    Ok(())
}
