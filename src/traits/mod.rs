pub mod fft_maker;
