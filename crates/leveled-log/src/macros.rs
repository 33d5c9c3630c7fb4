// Each macro writes through `Stream::write_fmt`, which is #[track_caller],
// so the file flags report the macro call site.

/// Writes to the Debug stream, process-wide or `to:` a [`Loggers`](crate::Loggers).
#[macro_export]
macro_rules! debug {
    (to: $loggers:expr, $($arg:tt)+) => {
        $loggers.debug().write_fmt(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::debug().write_fmt(::std::format_args!($($arg)+))
    };
}

/// Writes to the Info stream, process-wide or `to:` a [`Loggers`](crate::Loggers).
#[macro_export]
macro_rules! info {
    (to: $loggers:expr, $($arg:tt)+) => {
        $loggers.info().write_fmt(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::info().write_fmt(::std::format_args!($($arg)+))
    };
}

/// Writes to the Warning stream, process-wide or `to:` a [`Loggers`](crate::Loggers).
#[macro_export]
macro_rules! warning {
    (to: $loggers:expr, $($arg:tt)+) => {
        $loggers.warning().write_fmt(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::warning().write_fmt(::std::format_args!($($arg)+))
    };
}

/// Writes to the Error stream, process-wide or `to:` a [`Loggers`](crate::Loggers).
#[macro_export]
macro_rules! error {
    (to: $loggers:expr, $($arg:tt)+) => {
        $loggers.error().write_fmt(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::error().write_fmt(::std::format_args!($($arg)+))
    };
}
