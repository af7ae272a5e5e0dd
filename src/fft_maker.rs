use crate::config::{C, F};
use crate::traits::fft_maker::FftMaker;
use ndarray::prelude::*;
use ndrustfft::{ndfft, ndifft, FftHandler, Normalization};

/// DFT на основе ndrustfft. План строится один раз в `new`.
pub struct FftMaker1D {
    n: usize,
    handler: FftHandler<F>,
}

impl FftMaker1D {
    pub fn new(n: usize) -> Self {
        // ndifft по умолчанию делит на n, здесь нормировка делается вручную
        let handler = FftHandler::new(n).normalization(Normalization::None);
        Self { n, handler }
    }
}

impl FftMaker for FftMaker1D {
    fn n(&self) -> usize {
        self.n
    }

    fn fft(&mut self, input: &Array1<C>, output: &mut Array1<C>) {
        ndfft(input, output, &mut self.handler, 0);
    }

    fn ifft(&mut self, input: &Array1<C>, output: &mut Array1<C>) {
        ndifft(input, output, &mut self.handler, 0);
    }
}
