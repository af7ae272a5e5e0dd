use crate::config::F;
use std::{error, fmt};

/// Ошибки, возникающие при подготовке и выполнении преобразований
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// Число мацубаровских частот равно нулю
    ZeroGridSize,
    /// Обратная температура не положительна или не конечна
    InvalidBeta(F),
    /// Длина буфера не согласована с размером сетки
    LengthMismatch {
        /// Какой буфер не подошел
        buffer: &'static str,
        /// Ожидаемая длина
        expected: usize,
        /// Фактическая длина
        found: usize,
    },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::ZeroGridSize => write!(f, "Grid size must be positive."),
            TransformError::InvalidBeta(beta) => {
                write!(
                    f,
                    "Inverse temperature must be positive and finite, got {beta}."
                )
            }
            TransformError::LengthMismatch {
                buffer,
                expected,
                found,
            } => write!(
                f,
                "Buffer `{buffer}` has length {found}, expected {expected}."
            ),
        }
    }
}

impl error::Error for TransformError {}

/// Проверяет длину буфера
pub(crate) fn check_len(
    buffer: &'static str,
    expected: usize,
    found: usize,
) -> Result<(), TransformError> {
    if expected == found {
        Ok(())
    } else {
        Err(TransformError::LengthMismatch {
            buffer,
            expected,
            found,
        })
    }
}
