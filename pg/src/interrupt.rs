//! Process-wide Ctrl+C handling
//!
//! While rustyline owns a terminal it reads Ctrl+C as a key and the session
//! handles it. Everywhere else (piped input, effects, clipboard copy, output)
//! SIGINT reaches the process and this handler ends it with status 0.

use eyre::Result;

#[cfg(unix)]
const EXIT_MESSAGE: &[u8] = b"\nExiting...\n";

#[cfg(unix)]
extern "C" fn on_interrupt(_signal: nix::libc::c_int) {
    // Only async-signal-safe calls in here
    unsafe {
        nix::libc::write(
            nix::libc::STDOUT_FILENO,
            EXIT_MESSAGE.as_ptr().cast(),
            EXIT_MESSAGE.len(),
        );
        nix::libc::_exit(0);
    }
}

/// Install the SIGINT handler
#[cfg(unix)]
pub fn install() -> Result<()> {
    use eyre::Context;
    use nix::sys::signal::{SaFlags, SigAction, SigHandler, SigSet, Signal, sigaction};

    let action = SigAction::new(SigHandler::Handler(on_interrupt), SaFlags::SA_RESTART, SigSet::empty());
    unsafe { sigaction(Signal::SIGINT, &action) }.context("Failed to install SIGINT handler")?;
    tracing::debug!("interrupt::install: SIGINT handler installed");
    Ok(())
}

#[cfg(not(unix))]
pub fn install() -> Result<()> {
    tracing::debug!("interrupt::install: default Ctrl+C handling on this platform");
    Ok(())
}
