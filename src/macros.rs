/// Макрос для вывода в терминал и дозаписи той же строки в `config::LOG_PATH`
#[macro_export]
macro_rules! print_and_log {
    ($($arg:tt)*) => {{
        println!($($arg)*);

        use std::fs::OpenOptions;
        use std::io::Write;
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open($crate::config::LOG_PATH)
        {
            Ok(mut file) => {
                if let Err(e) = writeln!(file, $($arg)*) {
                    eprintln!("Failed to write to log file: {}", e);
                }
            }
            Err(e) => eprintln!("Failed to open log file: {}", e),
        }
    }};
}

/// Макрос для замера времени выполнения блока
#[macro_export]
macro_rules! measure_time {
    ($label:expr, $code:block) => {{
        let start = std::time::Instant::now();
        let result = $code;
        $crate::print_and_log!("{}: {:.6} s", $label, start.elapsed().as_secs_f64());
        result
    }};
}

/// Макрос для проверки существования директории и создания ее
macro_rules! check_path {
    ($dir:expr) => {
        let dir = std::path::Path::new($dir);
        if !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }
    };
}
pub(crate) use check_path;
