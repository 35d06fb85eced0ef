/// How far the dish has come in the current episode
///
/// Flags only ever go from `false` to `true` until the next reset.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskProgress {
    pub has_veg: bool,
    pub has_chopped: bool,
    pub has_cooked: bool,
}

impl TaskProgress {
    /// Ready to be delivered
    pub fn is_complete(&self) -> bool {
        self.has_veg && self.has_chopped && self.has_cooked
    }

    /// The flags as observation features, in chain order
    pub fn features(&self) -> [f32; 3] {
        [self.has_veg, self.has_chopped, self.has_cooked].map(|f| if f { 1.0 } else { 0.0 })
    }
}

/// Countdown for the delayed cooking path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FryingTimer {
    remaining: u32,
    required: u32,
}

impl FryingTimer {
    pub(crate) fn new(required: u32) -> Self {
        assert!(required > 0, "Frying must take at least one step");
        Self {
            remaining: 0,
            required,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn required(&self) -> u32 {
        self.required
    }

    /// Whether a countdown is in progress
    pub fn is_running(&self) -> bool {
        self.remaining > 0
    }

    /// Advance by one qualifying step, arming the timer first if idle
    ///
    /// **Returns** `true` when this tick finished the countdown
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            self.remaining = self.required;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    pub fn clear(&mut self) {
        self.remaining = 0;
    }
}
