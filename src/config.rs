use num_complex::Complex;

// тип данных: для фаз при больших N нужна двойная точность
pub type F = f64;

// комплексный тип данных, согласованный с F
pub type C = Complex<F>;

// константы
pub const PI: F = std::f64::consts::PI;
pub const I: C = Complex::I;

// файл, в который дублируется диагностический вывод
pub const LOG_PATH: &str = "output.log";
