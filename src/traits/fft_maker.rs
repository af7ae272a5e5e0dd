use crate::config::C;
use ndarray::Array1;

/// Трейт для дискретного преобразования Фурье длины `n()` без нормировки.
///
/// Реализация не должна знать ничего о мнимом времени: все фазовые
/// множители и веса накладываются в `transform`.
pub trait FftMaker {
    /// длина преобразования
    fn n(&self) -> usize;

    /// прямое преобразование: out[k] = sum_j in[j] * exp(-i 2 pi k j / n)
    fn fft(&mut self, input: &Array1<C>, output: &mut Array1<C>);

    /// обратное преобразование: out[k] = sum_j in[j] * exp(+i 2 pi k j / n)
    fn ifft(&mut self, input: &Array1<C>, output: &mut Array1<C>);
}
