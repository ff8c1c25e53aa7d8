use alloc::vec::Vec;

use quickcheck_macros::quickcheck;

use crate::Cursor;

fn clamp_start(source: &[u8], start: usize) -> usize {
    if source.is_empty() { 0 } else { start % (source.len() + 1) }
}

#[quickcheck]
fn peek_n_matches_next_n(source: Vec<u8>, start: usize, amount: usize) -> bool {
    let mut cursor = Cursor::new(&source);
    cursor.next_n(clamp_start(&source, start));
    let before = cursor.position();

    let peeked = cursor.peek_n(amount);
    let taken = cursor.next_n(amount);
    peeked == taken
        && taken.len() == amount.min(source.len() - before)
        && cursor.position() == before + taken.len()
        && taken == &source[before..cursor.position()]
}

#[quickcheck]
fn next_n_then_previous_n_returns_home(source: Vec<u8>, start: usize, amount: usize) -> bool {
    let mut cursor = Cursor::new(&source);
    cursor.next_n(clamp_start(&source, start));
    let home = cursor.position();

    let forward = cursor.next_n(amount);
    let backward = cursor.previous_n(forward.len());
    forward == backward && cursor.position() == home
}

#[quickcheck]
fn moves_never_leave_bounds(source: Vec<u8>, moves: Vec<isize>) -> bool {
    let mut cursor = Cursor::new(&source);
    moves.into_iter().all(|amount| {
        let before = cursor.position();
        cursor.advance_by(amount);
        let expected = before
            .saturating_add_signed(amount)
            .min(source.len());
        cursor.position() == expected && cursor.position() <= source.len()
    })
}

#[quickcheck]
fn reverse_by_mirrors_advance_by(source: Vec<u8>, start: usize, amount: isize) -> bool {
    let mut a = Cursor::new(&source);
    a.next_n(clamp_start(&source, start));
    let mut b = a;

    a.reverse_by(amount);
    b.advance_by(amount.saturating_neg());
    a.position() == b.position()
}

#[quickcheck]
fn snapshot_survives_speculative_reads(source: Vec<u8>, reads: Vec<usize>) -> bool {
    let mut cursor = Cursor::new(&source);
    let saved = cursor;
    for amount in reads {
        cursor.next_n(amount);
    }
    let consumed = cursor.position();
    cursor = saved;
    cursor.at_start() && cursor.remaining_items() == source.as_slice() && consumed <= source.len()
}

#[quickcheck]
fn iteration_yields_the_remaining_items(source: Vec<u8>, start: usize) -> bool {
    let mut cursor = Cursor::new(&source);
    cursor.next_n(clamp_start(&source, start));
    let remaining = cursor.remaining_items();
    let len = cursor.len();
    let collected: Vec<u8> = cursor.copied().collect();
    collected == remaining && len == remaining.len()
}

#[test]
fn lookahead_over_chars_decides_without_consuming() {
    let chars: Vec<char> = "  false,".chars().collect();
    let mut cursor = Cursor::new(&chars);
    cursor.skip_whitespace();

    let ahead = cursor.peek_n(5);
    assert!(ahead.iter().copied().eq("false".chars()));
    assert_eq!(cursor.position(), 2);
    assert!(!cursor.peek_n(4).iter().copied().eq("true".chars()));

    cursor.next_n(5);
    assert_eq!(cursor.peek(), Some(&','));
    assert_eq!(cursor.peek_previous_n(5), &['f', 'a', 'l', 's', 'e']);
}
