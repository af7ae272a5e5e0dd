use crate::config::{C, F, I, PI};
use crate::traits::fft_maker::FftMaker;
use ndarray::prelude::*;
use rayon::prelude::*;

/// DFT прямым суммированием за O(n^2).
/// Медленно, но не зависит от сторонней библиотеки; годится как эталон.
#[derive(Debug, Clone, Copy)]
pub struct DirectDft {
    n: usize,
}

impl DirectDft {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    fn dft(&self, input: &Array1<C>, output: &mut Array1<C>, sign: F) {
        let n = self.n;
        output
            .iter_mut()
            .enumerate()
            .par_bridge()
            .for_each(|(k, out_elem)| {
                *out_elem = input
                    .iter()
                    .enumerate()
                    .map(|(j, in_elem)| {
                        // k*j mod n, чтобы аргумент экспоненты оставался малым
                        let kj = ((k * j) % n) as F;
                        in_elem * (sign * I * 2.0 * PI * kj / n as F).exp()
                    })
                    .sum();
            });
    }
}

impl FftMaker for DirectDft {
    fn n(&self) -> usize {
        self.n
    }

    fn fft(&mut self, input: &Array1<C>, output: &mut Array1<C>) {
        self.dft(input, output, -1.0);
    }

    fn ifft(&mut self, input: &Array1<C>, output: &mut Array1<C>) {
        self.dft(input, output, 1.0);
    }
}
