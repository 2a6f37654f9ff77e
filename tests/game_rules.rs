//! Whole-game behaviour through the public engine API

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_game::core::LetterFeedback::{Absent, Correct, Present};
use wordle_game::core::{Feedback, LetterFeedback, MAX_ATTEMPTS, WORD_LENGTH, Word};
use wordle_game::game::{Dictionary, Game, GameOutcome, GameState, GuessError, InputPhase};

fn embedded() -> Dictionary {
    Dictionary::embedded().unwrap()
}

fn type_word(game: &mut Game, word: &str) {
    for letter in word.chars() {
        game.on_letter_key(letter);
    }
}

#[test]
fn guessing_the_target_wins_with_all_correct() {
    let dict = embedded();
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..10 {
        let mut game = Game::new(&dict, MAX_ATTEMPTS, &mut rng);
        let target = game.target().text().to_string();

        type_word(&mut game, &target);
        let evaluation = game.on_submit().unwrap();

        assert_eq!(evaluation.outcome, GameOutcome::Won);
        assert_eq!(evaluation.feedback, Feedback::PERFECT);
        assert!(
            evaluation
                .feedback
                .letters()
                .iter()
                .all(|&f| f == LetterFeedback::Correct)
        );
        assert_eq!(game.reveal_complete(), GameOutcome::Won);
        assert_eq!(game.phase(), InputPhase::Terminal);
    }
}

#[test]
fn short_rows_are_incomplete_and_change_nothing() {
    let dict = embedded();
    let mut game = Game::with_target(&dict, "apple", MAX_ATTEMPTS).unwrap();

    for len in 0..WORD_LENGTH {
        while game.on_delete() {}
        type_word(&mut game, &"angle"[..len]);

        assert_eq!(game.on_submit(), Err(GuessError::IncompleteGuess { len }));
        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.current_letters().len(), len);
    }
    assert!(game.history().is_empty());
}

#[test]
fn unknown_words_keep_the_buffer() {
    let dict = embedded();
    let mut game = Game::with_target(&dict, "apple", MAX_ATTEMPTS).unwrap();

    type_word(&mut game, "xyzzy");
    assert_eq!(
        game.on_submit(),
        Err(GuessError::NotInDictionary("xyzzy".into()))
    );
    assert_eq!(game.current_letters(), &['x', 'y', 'z', 'z', 'y']);

    // Player edits the last letter instead of retyping
    game.on_delete();
    game.on_delete();
    type_word(&mut game, "ze");
    assert_eq!(game.current_letters(), &['x', 'y', 'z', 'z', 'e']);
}

#[test]
fn six_misses_lose_and_reveal_the_target() {
    let dict = embedded();
    let mut game = Game::with_target(&dict, "apple", MAX_ATTEMPTS).unwrap();
    let misses = ["angle", "crane", "slate", "bound", "eagle", "erase"];

    let mut lost_transitions = 0;
    for word in misses {
        let before = game.state();
        let evaluation = game.guess(word).unwrap();
        if before == GameState::InProgress && game.state() == GameState::Lost {
            lost_transitions += 1;
        }
        if word == "erase" {
            assert_eq!(
                evaluation.outcome,
                GameOutcome::Lost(Word::new("apple").unwrap())
            );
        }
        game.reveal_complete();
    }

    assert_eq!(lost_transitions, 1);
    assert_eq!(game.state(), GameState::Lost);

    // A seventh attempt is refused
    type_word(&mut game, "floor");
    assert!(game.current_letters().is_empty());
    assert_eq!(game.guess("floor"), Err(GuessError::InputSuppressed));
    assert_eq!(game.history().len(), MAX_ATTEMPTS);
}

#[test]
fn append_is_idempotent_at_capacity_and_delete_on_empty_is_noop() {
    let dict = embedded();
    let mut game = Game::with_target(&dict, "apple", MAX_ATTEMPTS).unwrap();

    assert!(!game.on_delete());
    type_word(&mut game, "crane");
    let full = game.current_letters().to_vec();
    for letter in ['a', 'b', 'c'] {
        assert!(!game.on_letter_key(letter));
        assert_eq!(game.current_letters(), full.as_slice());
    }
}

#[test]
fn reference_feedback_examples() {
    let dict = embedded();
    let mut game = Game::with_target(&dict, "apple", MAX_ATTEMPTS).unwrap();

    let evaluation = game.guess("angle").unwrap();
    assert_eq!(
        evaluation.feedback.letters(),
        &[Correct, Absent, Absent, Correct, Correct]
    );

    let apple = Word::new("apple").unwrap();
    let eppaa = Word::new("eppaa").unwrap();
    assert_eq!(
        Feedback::evaluate(&eppaa, &apple).letters(),
        &[Present, Correct, Correct, Present, Present]
    );
}

#[test]
fn no_guess_lands_mid_reveal() {
    let dict = embedded();
    let mut game = Game::with_target(&dict, "apple", MAX_ATTEMPTS).unwrap();

    game.guess("angle").unwrap();
    assert_eq!(game.guess("crane"), Err(GuessError::InputSuppressed));
    assert_eq!(game.on_submit(), Err(GuessError::InputSuppressed));
    assert_eq!(game.history().len(), 1);

    game.reveal_complete();
    assert!(game.guess("crane").is_ok());
}
