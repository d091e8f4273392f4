use tping_core::api::ColorMode;

/// Decides once, before any output, whether color escapes are emitted on stdout.
pub fn color_capability(mode: ColorMode) -> bool {
    resolve_color(
        mode,
        no_color_requested(),
        atty::is(atty::Stream::Stdout),
        enable_virtual_terminal,
    )
}

pub fn resolve_color<F>(mode: ColorMode, no_color: bool, is_tty: bool, enable_vt: F) -> bool
where
    F: FnOnce() -> bool,
{
    match mode {
        ColorMode::Never => false,
        ColorMode::Always => {
            if !enable_vt() {
                tracing::debug!("virtual terminal processing unavailable, forcing color anyway");
            }
            true
        }
        ColorMode::Auto => !no_color && is_tty && enable_vt(),
    }
}

fn no_color_requested() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Windows consoles only interpret ANSI sequences once VT processing is switched on.
#[cfg(windows)]
fn enable_virtual_terminal() -> bool {
    use windows::Win32::System::Console::{
        GetConsoleMode, GetStdHandle, SetConsoleMode, CONSOLE_MODE,
        ENABLE_VIRTUAL_TERMINAL_PROCESSING, STD_OUTPUT_HANDLE,
    };

    // SAFETY: plain console API calls on the process's own stdout handle.
    unsafe {
        let Ok(handle) = GetStdHandle(STD_OUTPUT_HANDLE) else {
            return false;
        };
        let mut mode = CONSOLE_MODE(0);
        if GetConsoleMode(handle, &mut mode).is_err() {
            return false;
        }
        match SetConsoleMode(handle, mode | ENABLE_VIRTUAL_TERMINAL_PROCESSING) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("SetConsoleMode failed: {}", e);
                false
            }
        }
    }
}

#[cfg(not(windows))]
fn enable_virtual_terminal() -> bool {
    true
}
