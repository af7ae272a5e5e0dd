mod concurrency;

use crate::common::hubbard::HubbardParams;
use crate::config::{C, F};
use ndarray::prelude::*;

/// Вещественный сигнал на сетке tau, удовлетворяющий y[n] = boundary_sign() * y[0]
pub(crate) fn admissible_signal(param: &HubbardParams) -> Array1<F> {
    let n = param.n_tau();
    let mut y: Array1<F> = Array::from_iter((0..=n).map(|j| {
        let x = j as F;
        (1.3 * x).sin() + 0.25 * (0.4 * x * x).cos() - 0.1 * x
    }));
    y[[n]] = param.boundary_sign() * y[[0]];
    y
}

/// Произвольный сигнал без условия на границах
pub(crate) fn generic_signal(n: usize) -> Array1<F> {
    Array::from_iter((0..=n).map(|j| (0.7 * j as F).cos() + 0.05 * j as F))
}

pub(crate) fn generic_spectrum(n: usize) -> Array1<C> {
    Array::from_iter((0..n).map(|k| {
        let x = k as F;
        C::new((0.9 * x).sin() - 0.3, 0.5 * (1.1 * x).cos())
    }))
}
