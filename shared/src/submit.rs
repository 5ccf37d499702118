//! Submit Guards
//!
//! Each form tracks an in-flight submission with a [`SubmitGuard`]. Arming
//! the guard swaps the button label for a spinner frame and refuses a second
//! submission until the first one finishes, so double-clicking a submit
//! button cannot fire the operation twice.

/// Frames for the inline text spinner, advanced on every UI tick.
pub const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Double-submit protection for a single form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitGuard {
    in_flight: bool,
    frame: usize,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the guard. Returns `false` if a submission is already in flight,
    /// in which case the caller must ignore the submit.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.frame = 0;
        true
    }

    /// Release the guard once the submission resolves.
    pub fn finish(&mut self) {
        self.in_flight = false;
        self.frame = 0;
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Advance the spinner by one frame. No-op while idle.
    pub fn advance(&mut self) {
        if self.in_flight {
            self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
        }
    }

    /// The spinner character for the current frame.
    pub fn frame(&self) -> char {
        SPINNER_FRAMES[self.frame]
    }
}
