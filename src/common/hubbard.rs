use crate::config::{F, PI};
use crate::error::TransformError;
use crate::macros::check_path;
use ndarray::prelude::*;
use ndarray_npy::{WriteNpyError, WriteNpyExt};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Параметры сетки модели Хаббарда, нужные преобразованиям Фурье.
///
/// Сетка по мнимому времени: `tau_j = j * beta / n_tau`, `j = 0..=n_tau`.
/// Мацубаровские частоты: `w_k = (2k - n_tau + 1) * pi / beta`, `k = 0..n_tau`.
///
/// Поля закрыты: значение можно получить только через [`HubbardParams::new`],
/// поэтому n_tau >= 1 и конечная beta > 0 гарантированы.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HubbardParams {
    n_tau: usize,
    beta: F,
}

impl HubbardParams {
    pub fn new(n_tau: usize, beta: F) -> Result<Self, TransformError> {
        if n_tau == 0 {
            return Err(TransformError::ZeroGridSize);
        }
        if !beta.is_finite() || beta <= 0.0 {
            return Err(TransformError::InvalidBeta(beta));
        }
        Ok(Self { n_tau, beta })
    }

    /// число мацубаровских частот (интервалов по tau)
    pub fn n_tau(&self) -> usize {
        self.n_tau
    }

    /// обратная температура
    pub fn beta(&self) -> F {
        self.beta
    }

    /// шаг по мнимому времени
    pub fn dtau(&self) -> F {
        self.beta / self.n_tau as F
    }

    pub fn tau(&self, j: usize) -> F {
        j as F * self.dtau()
    }

    /// k-я мацубаровская частота
    pub fn matsubara_freq(&self, k: usize) -> F {
        (2.0 * k as F - self.n_tau as F + 1.0) * PI / self.beta
    }

    /// сетка по мнимому времени, n_tau + 1 точек от 0 до beta
    pub fn tau_grid(&self) -> Array1<F> {
        Array::linspace(0.0, self.beta, self.n_tau + 1)
    }

    pub fn matsubara_grid(&self) -> Array1<F> {
        Array::from_iter((0..self.n_tau).map(|k| self.matsubara_freq(k)))
    }

    /// При четном n_tau все частоты нечетные кратные pi/beta (фермионы)
    pub fn is_fermionic(&self) -> bool {
        self.n_tau % 2 == 0
    }

    /// Множитель exp(i (n_tau - 1) pi) = (-1)^(n_tau - 1).
    /// Допустимые сигналы удовлетворяют y[n_tau] = boundary_sign() * y[0].
    pub fn boundary_sign(&self) -> F {
        if self.is_fermionic() {
            -1.0
        } else {
            1.0
        }
    }

    /// Сохраняет сетки в `dir/tau.npy` и `dir/iw.npy`
    pub fn save_grids(&self, dir: &str) -> Result<(), WriteNpyError> {
        check_path!(dir);
        let dir = Path::new(dir);
        let writer = BufWriter::new(File::create(dir.join("tau.npy"))?);
        self.tau_grid().write_npy(writer)?;
        let writer = BufWriter::new(File::create(dir.join("iw.npy"))?);
        self.matsubara_grid().write_npy(writer)?;
        Ok(())
    }
}
