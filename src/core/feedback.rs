//! Per-letter feedback for a submitted guess
//!
//! Each position of a guess is classified as:
//! - `Correct` (letter in the correct position)
//! - `Present` (letter in the target, wrong position)
//! - `Absent` (letter not in the target)

use super::{WORD_LENGTH, Word};

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterFeedback {
    Absent,
    Present,
    Correct,
}

impl LetterFeedback {
    /// Emoji square for this feedback kind
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, positionally aligned with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// All letters correct
    pub const PERFECT: Self = Self([LetterFeedback::Correct; WORD_LENGTH]);

    /// Evaluate `guess` against `target`
    ///
    /// For each position: `Correct` if the letters match, otherwise `Present` if
    /// the target contains the letter anywhere, otherwise `Absent`. Letter counts
    /// are not tracked, so a letter guessed twice can be marked `Present` twice
    /// even when the target holds it once.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterFeedback::*, Word};
    ///
    /// let guess = Word::new("angle").unwrap();
    /// let target = Word::new("apple").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// assert_eq!(feedback.letters(), &[Correct, Absent, Absent, Correct, Correct]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterFeedback::Absent; WORD_LENGTH];

        for (i, (&letter, slot)) in guess.chars().iter().zip(result.iter_mut()).enumerate() {
            *slot = if target.char_at(i) == letter {
                LetterFeedback::Correct
            } else if target.has_letter(letter) {
                LetterFeedback::Present
            } else {
                LetterFeedback::Absent
            };
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is `Correct`
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&f| f == LetterFeedback::Correct)
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::LetterFeedback::{Absent, Correct, Present};
    use super::*;

    fn eval(guess: &str, target: &str) -> Feedback {
        Feedback::evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn feedback_perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.letters(), &[Correct; WORD_LENGTH]);
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = eval("bound", "apple");
        assert_eq!(feedback.letters(), &[Absent; WORD_LENGTH]);
        assert!(!feedback.is_perfect());
    }

    #[test]
    fn feedback_exact_match_is_perfect() {
        for word in ["apple", "crane", "speed", "aaaaa"] {
            assert_eq!(eval(word, word), Feedback::PERFECT);
        }
    }

    #[test]
    fn feedback_angle_against_apple() {
        assert_eq!(
            eval("angle", "apple").letters(),
            &[Correct, Absent, Absent, Correct, Correct]
        );
    }

    #[test]
    fn feedback_duplicates_not_deduplicated() {
        // 'a' appears once in the target but is marked present twice
        assert_eq!(
            eval("eppaa", "apple").letters(),
            &[Present, Correct, Correct, Present, Present]
        );
    }

    #[test]
    fn feedback_repeated_letter_with_single_occurrence() {
        // SPEED vs ERASE: both E's present, S present
        assert_eq!(
            eval("speed", "erase").letters(),
            &[Present, Absent, Present, Present, Absent]
        );
        // ROBOT vs FLOOR: first O present, second O correct
        assert_eq!(
            eval("robot", "floor").letters(),
            &[Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn feedback_to_emoji() {
        assert_eq!(eval("angle", "apple").to_emoji(), "🟩⬜⬜🟩🟩");
    }

    #[test]
    fn letter_feedback_ordering_matches_precedence() {
        assert!(Correct > Present);
        assert!(Present > Absent);
    }
}
