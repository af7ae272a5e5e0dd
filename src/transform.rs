//! Преобразования Фурье между мнимым временем и мацубаровскими частотами.
//!
//! Сетки (см. [`HubbardParams`]):
//!
//! * `tau_j = j * dtau`, `dtau = beta / n`, `j = 0..=n` (n + 1 точек);
//! * `w_k = (2k - n + 1) * pi / beta`, `k = 0..n` (n частот).
//!
//! Прямое преобразование вычисляет интеграл по формуле трапеций
//!
//! ```text
//! z(k) = sum_{j=0}^{n} c_j * y(j) * exp(i w_k tau_j) * dtau,   c_0 = c_n = 1/2, иначе c_j = 1
//! ```
//!
//! обратное
//!
//! ```text
//! y(j) = 1/beta * sum_{k=0}^{n-1} z(k) * exp(-i w_k tau_j)
//! ```
//!
//! Так как `w_k tau_j = 2 pi k j / n - (n - 1) j pi / n`, обе суммы сводятся к DFT длины n
//! с предварительным (или последующим) поворотом фазы. Точка `j = n` в DFT не попадает
//! и учитывается отдельно: `exp(-i w_k beta) = exp(i (n - 1) pi)` не зависит от k.

use crate::common::hubbard::HubbardParams;
use crate::config::{C, F, I, PI};
use crate::error::{check_len, TransformError};
use crate::fft_maker::FftMaker1D;
use crate::traits::fft_maker::FftMaker;
use itertools::multizip;
use ndarray::prelude::*;

/// Преобразование с заранее построенным планом и рабочими буферами.
///
/// Один экземпляр можно использовать для любого числа вызовов с той же сеткой.
/// Циклы по сетке последовательные: ядро вызывается из внутренних циклов решателя,
/// параллелить стоит снаружи, по экземпляру на поток.
pub struct MatsubaraTransform<M: FftMaker = FftMaker1D> {
    param: HubbardParams,
    fft_maker: M,
    buf_in: Array1<C>,
    buf_out: Array1<C>,
}

impl MatsubaraTransform<FftMaker1D> {
    pub fn new(param: HubbardParams) -> Self {
        let fft_maker = FftMaker1D::new(param.n_tau());
        Self {
            param,
            fft_maker,
            buf_in: Array::zeros(param.n_tau()),
            buf_out: Array::zeros(param.n_tau()),
        }
    }
}

impl<M: FftMaker> MatsubaraTransform<M> {
    /// Преобразование с произвольной реализацией DFT
    pub fn with_fft_maker(param: HubbardParams, fft_maker: M) -> Result<Self, TransformError> {
        check_len("fft_maker", param.n_tau(), fft_maker.n())?;
        Ok(Self {
            param,
            fft_maker,
            buf_in: Array::zeros(param.n_tau()),
            buf_out: Array::zeros(param.n_tau()),
        })
    }

    pub fn param(&self) -> &HubbardParams {
        &self.param
    }

    /// Из мнимого времени в частоты: `y` длины n + 1, результат пишется в `z` длины n.
    /// При несогласованных длинах `z` не изменяется.
    pub fn t2w_into(&mut self, y: &Array1<F>, z: &mut Array1<C>) -> Result<(), TransformError> {
        let n = self.param.n_tau();
        check_len("y", n + 1, y.len())?;
        check_len("z", n, z.len())?;
        let nf = n as F;

        for (in_elem, y_elem, j) in multizip((self.buf_in.iter_mut(), y.iter(), 0..n)) {
            // вес трапеций 1/2 на левой границе
            let weight = if j == 0 { 0.5 } else { 1.0 };
            *in_elem = weight * *y_elem * (-I * (nf - 1.0) * j as F * PI / nf).exp();
        }

        self.fft_maker.ifft(&self.buf_in, &mut self.buf_out);

        // правая граница tau = beta с весом 1/2
        let tail = 0.5 * y[[n]] * (-I * (nf - 1.0) * PI).exp();
        let scale = self.param.beta() / nf;
        for (z_elem, out_elem) in multizip((z.iter_mut(), self.buf_out.iter())) {
            *z_elem = (out_elem + tail) * scale;
        }
        Ok(())
    }

    /// Из частот в мнимое время: `z` длины n, результат пишется в `y` длины n + 1.
    /// При несогласованных длинах `y` не изменяется.
    pub fn w2t_into(&mut self, z: &Array1<C>, y: &mut Array1<F>) -> Result<(), TransformError> {
        let n = self.param.n_tau();
        check_len("z", n, z.len())?;
        check_len("y", n + 1, y.len())?;
        let nf = n as F;
        let beta = self.param.beta();

        self.buf_in.assign(z);
        self.fft_maker.fft(&self.buf_in, &mut self.buf_out);

        for (y_elem, out_elem, j) in multizip((y.iter_mut(), self.buf_out.iter(), 0..n)) {
            *y_elem = (out_elem * (I * (nf - 1.0) * j as F * PI / nf).exp()).re / beta;
        }

        // tau = beta не входит в DFT: суммируем напрямую
        let phase = (I * (nf - 1.0) * PI).exp();
        y[[n]] = z.iter().map(|z_elem| (z_elem * phase).re / beta).sum();
        Ok(())
    }

    /// Как [`Self::t2w_into`], но возвращает новый массив длины n
    pub fn t2w(&mut self, y: &Array1<F>) -> Result<Array1<C>, TransformError> {
        let mut z = Array::zeros(self.param.n_tau());
        self.t2w_into(y, &mut z)?;
        Ok(z)
    }

    /// Как [`Self::w2t_into`], но возвращает новый массив длины n + 1
    pub fn w2t(&mut self, z: &Array1<C>) -> Result<Array1<F>, TransformError> {
        let mut y = Array::zeros(self.param.n_tau() + 1);
        self.w2t_into(z, &mut y)?;
        Ok(y)
    }
}

/// Однократное преобразование из мнимого времени в частоты.
/// План и буферы создаются на время вызова.
pub fn fft_t2w(
    param: &HubbardParams,
    y: &Array1<F>,
    z: &mut Array1<C>,
) -> Result<(), TransformError> {
    MatsubaraTransform::new(*param).t2w_into(y, z)
}

/// Однократное преобразование из частот в мнимое время.
pub fn fft_w2t(
    param: &HubbardParams,
    z: &Array1<C>,
    y: &mut Array1<F>,
) -> Result<(), TransformError> {
    MatsubaraTransform::new(*param).w2t_into(z, y)
}
