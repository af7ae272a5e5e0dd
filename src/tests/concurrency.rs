use super::admissible_signal;
use crate::common::hubbard::HubbardParams;
use crate::config::{C, F};
use crate::transform::MatsubaraTransform;
use ndarray::prelude::*;
use rayon::prelude::*;

#[test]
fn one_transform_per_thread() {
    let params: Vec<HubbardParams> = (1..=16)
        .map(|n| HubbardParams::new(2 * n, 0.5 * n as F).unwrap())
        .collect();

    let sequential: Vec<Array1<C>> = params
        .iter()
        .map(|param| {
            MatsubaraTransform::new(*param)
                .t2w(&admissible_signal(param))
                .unwrap()
        })
        .collect();

    let parallel: Vec<Array1<C>> = params
        .par_iter()
        .map(|param| {
            let mut transform = MatsubaraTransform::new(*param);
            let z = transform.t2w(&admissible_signal(param)).unwrap();
            // инверсия на том же экземпляре в том же потоке
            let y = transform.w2t(&z).unwrap();
            assert_eq!(y.len(), param.n_tau() + 1);
            z
        })
        .collect();

    assert_eq!(sequential, parallel);
}

#[test]
fn transform_moves_between_threads() {
    let param = HubbardParams::new(32, 10.0).unwrap();
    let mut transform = MatsubaraTransform::new(param);
    let y = admissible_signal(&param);
    let expected = transform.t2w(&y).unwrap();

    let handle = std::thread::spawn(move || transform.t2w(&y).unwrap());
    let z = handle.join().unwrap();
    assert_eq!(z, expected);
}
