//! # Преобразования Фурье для мнимого времени
//!
//! Переход между функцией на равномерной сетке по мнимому времени
//! `tau_j = j * beta / n`, `j = 0..=n`, и ее коэффициентами на мацубаровских частотах
//! `w_k = (2k - n + 1) * pi / beta`, `k = 0..n`:
//!
//! \\[ z_k = \sum_{j=0}^{n} c_j \, y_j \, e^{i w_k \tau_j} \Delta\tau, \qquad
//!     y_j = \frac{1}{\beta} \sum_{k=0}^{n-1} z_k \, e^{-i w_k \tau_j} \\]
//!
//! где \\( c_0 = c_n = 1/2 \\), остальные веса равны 1 (формула трапеций).
pub mod common;
pub mod config;
pub mod direct_dft;
pub mod error;
pub mod fft_maker;
pub mod macros;
pub mod traits;
pub mod transform;

pub use common::hubbard::HubbardParams;
pub use config::{C, F};
pub use error::TransformError;
pub use transform::{fft_t2w, fft_w2t, MatsubaraTransform};

#[cfg(test)]
mod tests;
