// Shared stop flag for the animation frame chain.
//
// Every scheduled frame checks the token before doing any work, so a frame
// that was already queued when the background is torn down does nothing and
// never asks for another one.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    // Runs `frame` unless cancelled. Returns whether the next frame should be requested.
    pub fn run_frame<F: FnOnce()>(&self, frame: F) -> bool {
        if self.is_cancelled() {
            return false;
        }
        frame();
        !self.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_after_cancel() {
        let token = CancelToken::new();
        let frames = Cell::new(0);
        let mut scheduled = true;
        while scheduled {
            scheduled = token.run_frame(|| {
                frames.set(frames.get() + 1);
                if frames.get() == 3 {
                    token.cancel();
                }
            });
        }
        assert_eq!(frames.get(), 3);
        assert!(!token.run_frame(|| frames.set(99)));
        assert_eq!(frames.get(), 3);
    }

    #[test]
    fn clones_share_state() {
        let token = CancelToken::new();
        let handle = token.clone();
        assert!(!token.is_cancelled());
        handle.cancel();
        assert!(token.is_cancelled());
    }
}
