//! Character-by-character text reveal, as a timer-free state machine.
//!
//! The component in `components::typewriter_text` owns the timers; this type
//! only decides what is visible and how long to wait before the next step.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    /// Number of characters currently shown.
    Revealing(usize),
    Complete,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reveal {
    text: String,
    len: usize,
    phase: Phase,
}

impl Reveal {
    /// With `reduced_motion` set, the whole text is shown from the start.
    pub fn new(text: &str, reduced_motion: bool) -> Self {
        let len = text.chars().count();
        let phase = if reduced_motion || len == 0 {
            Phase::Complete
        } else {
            Phase::NotStarted
        };
        Self {
            text: text.to_string(),
            len,
            phase,
        }
    }

    /// Starts over on `text` when it differs from the current one.
    /// Returns whether anything changed.
    pub fn retarget(&mut self, text: &str, reduced_motion: bool) -> bool {
        if self.text == text {
            return false;
        }
        *self = Self::new(text, reduced_motion);
        true
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Delay before the next `advance`, or `None` once complete.
    pub fn next_delay(&self, start_delay_ms: u32, speed_ms: u32) -> Option<u32> {
        match self.phase {
            Phase::NotStarted => Some(start_delay_ms),
            Phase::Revealing(_) => Some(speed_ms),
            Phase::Complete => None,
        }
    }

    /// Moves one step forward. Returns `false` when already complete.
    pub fn advance(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::NotStarted => Phase::Revealing(0),
            Phase::Revealing(shown) if shown + 1 >= self.len => Phase::Complete,
            Phase::Revealing(shown) => Phase::Revealing(shown + 1),
            Phase::Complete => return false,
        };
        true
    }

    /// The state after one `advance`.
    pub fn advanced(&self) -> Self {
        let mut next = self.clone();
        next.advance();
        next
    }

    /// Prefix currently on screen, cut on a character boundary.
    pub fn visible(&self) -> &str {
        let shown = match self.phase {
            Phase::NotStarted => 0,
            Phase::Revealing(shown) => shown,
            Phase::Complete => return &self.text,
        };
        match self.text.char_indices().nth(shown) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(reveal: &mut Reveal) -> Vec<String> {
        let mut frames = vec![reveal.visible().to_string()];
        while reveal.advance() {
            frames.push(reveal.visible().to_string());
        }
        frames
    }

    #[test]
    fn reveals_one_character_per_tick() {
        let mut reveal = Reveal::new("abc", false);
        assert_eq!(reveal.phase, Phase::NotStarted);
        assert_eq!(reveal.next_delay(200, 28), Some(200));

        let frames = run_to_end(&mut reveal);
        assert_eq!(frames, vec!["", "", "a", "ab", "abc"]);
        assert!(reveal.is_complete());
    }

    #[test]
    fn complete_is_terminal() {
        let mut reveal = Reveal::new("Valor em produção", false);
        run_to_end(&mut reveal);
        let done = reveal.clone();
        for _ in 0..5 {
            assert!(!reveal.advance());
        }
        assert_eq!(reveal, done);
        assert_eq!(reveal.visible(), "Valor em produção");
        assert_eq!(reveal.next_delay(200, 28), None);
    }

    #[test]
    fn reduced_motion_shows_everything_immediately() {
        let reveal = Reveal::new("Value in production", true);
        assert!(reveal.is_complete());
        assert_eq!(reveal.visible(), "Value in production");
        assert_eq!(reveal.next_delay(200, 28), None);
    }

    #[test]
    fn empty_text_needs_no_ticks() {
        let mut reveal = Reveal::new("", false);
        assert!(reveal.is_complete());
        assert!(!reveal.advance());
        assert_eq!(reveal.visible(), "");
    }

    #[test]
    fn prefixes_respect_multibyte_characters() {
        let mut reveal = Reveal::new("ção", false);
        let frames = run_to_end(&mut reveal);
        assert_eq!(frames, vec!["", "", "c", "cç", "ção"]);
    }

    #[test]
    fn tick_delays_follow_phase() {
        let mut reveal = Reveal::new("xy", false);
        assert_eq!(reveal.next_delay(150, 30), Some(150));
        reveal.advance();
        assert_eq!(reveal.next_delay(150, 30), Some(30));
        assert_eq!(reveal.advanced().phase, Phase::Revealing(1));
    }

    #[test]
    fn new_text_restarts_from_empty() {
        let mut reveal = Reveal::new("abc", false);
        reveal.advance();
        reveal.advance();
        assert_eq!(reveal.phase, Phase::Revealing(1));

        assert!(reveal.retarget("xyz", false));
        assert_eq!(reveal.phase, Phase::NotStarted);
        assert_eq!(reveal.visible(), "");
        assert_eq!(reveal.next_delay(200, 28), Some(200));
        assert_eq!(run_to_end(&mut reveal).last().map(String::as_str), Some("xyz"));
    }

    #[test]
    fn same_text_keeps_progress() {
        let mut reveal = Reveal::new("abc", false);
        reveal.advance();
        reveal.advance();
        let before = reveal.clone();

        assert!(!reveal.retarget("abc", false));
        assert_eq!(reveal, before);
        assert_eq!(reveal.visible(), "a");
    }

    #[test]
    fn new_text_under_reduced_motion_is_shown_whole() {
        let mut reveal = Reveal::new("Valor em produção", false);
        reveal.advance();

        assert!(reveal.retarget("Value in production", true));
        assert!(reveal.is_complete());
        assert_eq!(reveal.visible(), "Value in production");
        assert_eq!(reveal.next_delay(200, 28), None);
    }
}
