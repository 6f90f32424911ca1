use nix::errno::Errno;
use nix::sys::signal::{signal, SigHandler, Signal};

// Ignores SIGINT for as long as it lives, then puts back whatever
// disposition was in place before. An interrupt meant for the
// foreground child must not take the shell down with it.
pub struct InterruptGuard {
    previous: SigHandler,
}

impl InterruptGuard {
    pub fn ignore() -> Result<InterruptGuard, Errno> {
        let previous = unsafe { signal(Signal::SIGINT, SigHandler::SigIgn) }?;

        Ok(InterruptGuard { previous })
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        // Nothing sensible to do with a failure here
        let _ = unsafe { signal(Signal::SIGINT, self.previous) };
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    // Dispositions are process-global; every test that touches them
    // holds the lock.
    use crate::exec::SIGINT_LOCK;

    #[test]
    fn restore_disposition_1() {
        let _lock = SIGINT_LOCK.lock().unwrap();

        let guard = InterruptGuard::ignore().unwrap();

        let observed = unsafe { signal(Signal::SIGINT, SigHandler::SigIgn) }.unwrap();
        assert_eq!(SigHandler::SigIgn, observed);

        drop(guard);

        let observed = unsafe { signal(Signal::SIGINT, SigHandler::SigDfl) }.unwrap();
        assert_eq!(SigHandler::SigDfl, observed);
    }

    #[test]
    fn restore_disposition_2() {
        let _lock = SIGINT_LOCK.lock().unwrap();

        // A disposition that was already SigIgn comes back as SigIgn
        unsafe { signal(Signal::SIGINT, SigHandler::SigIgn) }.unwrap();

        let guard = InterruptGuard::ignore().unwrap();
        drop(guard);

        let observed = unsafe { signal(Signal::SIGINT, SigHandler::SigDfl) }.unwrap();
        assert_eq!(SigHandler::SigIgn, observed);
    }
}
