use wordle_assistant::{Feedback, InputError, Mark, Word};

fn score(guess: &str, answer: &str) -> String {
    Feedback::score(&Word::parse(guess).unwrap(), &Word::parse(answer).unwrap()).to_symbols()
}

#[test]
fn test_all_correct() {
    let feedback = Feedback::score(&Word::parse("crane").unwrap(), &Word::parse("crane").unwrap());
    assert!(feedback.is_win());
    assert_eq!(feedback, Feedback::ALL_GREEN);
}

#[test]
fn test_all_absent() {
    assert_eq!(score("quick", "dream"), "mmmmm");
}

#[test]
fn test_mixed_feedback() {
    assert_eq!(score("crane", "charm"), "gygmm");
}

#[test]
fn test_duplicate_letters_in_guess() {
    assert_eq!(score("speed", "creep"), "myggm");
    assert_eq!(score("geese", "creep"), "mygmm");
}

#[test]
fn test_duplicate_letters_in_target() {
    assert_eq!(score("arose", "creep"), "mgmmy");
    assert_eq!(score("sores", "those"), "yymym");
}

#[test]
fn test_miss_before_green_of_same_letter() {
    assert_eq!(score("allot", "bulky"), "mmgmm");
}

#[test]
fn test_parse() {
    let feedback = Feedback::parse("gymmg").unwrap();
    assert_eq!(
        feedback.marks(),
        &[Mark::Green, Mark::Yellow, Mark::Miss, Mark::Miss, Mark::Green]
    );
    assert_eq!("gymmg".parse::<Feedback>().unwrap(), feedback);
}

#[test]
fn test_parse_upper_case_symbols_are_misses() {
    let feedback = Feedback::parse("GYMMG").unwrap();
    assert_eq!(feedback.marks(), &[Mark::Miss; 5]);
    assert_eq!(Mark::from_char('G'), Mark::Miss);
    assert_eq!(Mark::from_char('Y'), Mark::Miss);
}

#[test]
fn test_parse_unknown_symbols_are_misses() {
    let feedback = Feedback::parse("g.x?y").unwrap();
    assert_eq!(
        feedback.marks(),
        &[Mark::Green, Mark::Miss, Mark::Miss, Mark::Miss, Mark::Yellow]
    );
    assert_eq!(Mark::from_char('b'), Mark::Miss);
}

#[test]
fn test_parse_wrong_length() {
    assert_eq!(
        Feedback::parse("gyg"),
        Err(InputError::WrongLength {
            expected: 5,
            found: 3
        })
    );
    assert_eq!(
        Feedback::parse("gygggg"),
        Err(InputError::WrongLength {
            expected: 5,
            found: 6
        })
    );
    assert!(Feedback::parse("").is_err());
}

#[test]
fn test_emoji_display() {
    let feedback = Feedback::new([
        Mark::Green,
        Mark::Yellow,
        Mark::Miss,
        Mark::Miss,
        Mark::Green,
    ]);
    assert_eq!(feedback.to_string(), "🟩🟨⬛⬛🟩");
    assert_eq!(feedback.to_symbols(), "gymmg");
}
