//! Debug UART console, for text output
//!
//! Only an aarch64 RK35xx build has a UART behind the board address;
//! everywhere else text is dropped.
use core::fmt;

#[cfg(all(feature = "aarch64", target_arch = "aarch64"))]
mod uart_console {
    use core::fmt::{self, Write};
    use lazy_static::*;
    use spin::Mutex;

    use crate::board::Board;
    use crate::driver::uart::Uart;

    lazy_static! {
        static ref CONSOLE: Mutex<Uart> = unsafe {
            Mutex::new(Uart::new(Board::current().layout().debug_uart))
        };
    }

    pub fn print(args: fmt::Arguments) {
        // a console that cannot take the text has nowhere to report it
        let _ = CONSOLE.lock().write_fmt(args);
    }
}

pub fn print(args: fmt::Arguments) {
    #[cfg(all(feature = "aarch64", target_arch = "aarch64"))]
    uart_console::print(args);

    #[cfg(not(all(feature = "aarch64", target_arch = "aarch64")))]
    let _ = args;
}

/// print string macro
#[macro_export]
macro_rules! print {
    ($fmt: literal $(, $($arg: tt)+)?) => {
        $crate::utils::console::print(format_args!($fmt $(, $($arg)+)?));
    }
}

/// println string macro
#[macro_export]
macro_rules! println {
    ($fmt: literal $(, $($arg: tt)+)?) => {
        $crate::utils::console::print(format_args!(concat!($fmt, "\n") $(, $($arg)+)?));
    }
}
