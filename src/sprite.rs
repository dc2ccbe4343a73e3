//! Hangman sprite sheet layout
//!
//! The sheet is a single row of 120x180 cells: the gallows at each mistake
//! count (0 through [`MAX_MISTAKES`]), then the dead figure, then the figure
//! that was saved.

use sdl2::rect::Rect;

pub const FRAME_WIDTH: u32 = 120;
pub const FRAME_HEIGHT: u32 = 180;

/// Wrong guesses that end a round; the sheet has one stage per count
pub const MAX_MISTAKES: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HangmanFrame {
    /// Gallows after this many mistakes (clamped to [`MAX_MISTAKES`])
    Stage(u32),
    Dead,
    Alive,
}

impl HangmanFrame {
    /// Cell index on the sheet
    pub fn index(self) -> u32 {
        match self {
            HangmanFrame::Stage(mistakes) => mistakes.min(MAX_MISTAKES),
            HangmanFrame::Dead => MAX_MISTAKES + 1,
            HangmanFrame::Alive => MAX_MISTAKES + 2,
        }
    }

    /// Source rectangle on the sheet
    pub fn source_rect(self) -> Rect {
        Rect::new(
            (self.index() * FRAME_WIDTH) as i32,
            0,
            FRAME_WIDTH,
            FRAME_HEIGHT,
        )
    }

    /// Destination rectangle with the frame's top-left at `(x, y)`
    pub fn dest_rect(x: i32, y: i32) -> Rect {
        Rect::new(x, y, FRAME_WIDTH, FRAME_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_frames() {
        assert_eq!(HangmanFrame::Stage(0).source_rect(), Rect::new(0, 0, 120, 180));
        assert_eq!(HangmanFrame::Stage(3).source_rect().x(), 360);
        assert_eq!(HangmanFrame::Stage(MAX_MISTAKES).source_rect().x(), 720);
    }

    #[test]
    fn test_stage_is_clamped() {
        assert_eq!(HangmanFrame::Stage(99).index(), MAX_MISTAKES);
    }

    #[test]
    fn test_result_frames_follow_stages() {
        assert_eq!(HangmanFrame::Dead.source_rect().x(), 840);
        assert_eq!(HangmanFrame::Alive.source_rect().x(), 960);
    }
}
