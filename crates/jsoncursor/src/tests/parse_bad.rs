use alloc::string::String;

use rstest::rstest;

use crate::{DecodeError, decode};

fn assert_invalid(text: &str) {
    assert_eq!(
        decode(text),
        Err(DecodeError::InvalidInput),
        "expected {text:?} to be rejected"
    );
}

#[rstest]
#[case::empty("")]
#[case::only_whitespace(" \n\t ")]
#[case::bare_word("abc")]
#[case::single_quotes("'a'")]
#[case::plus_sign("+1")]
#[case::unicode_space_before_value("\u{00A0}1")]
fn no_value(#[case] text: &str) {
    assert_invalid(text);
}

#[rstest]
#[case::object_then_word("{} x")]
#[case::two_numbers("1 2")]
#[case::two_objects("{}{}")]
#[case::closing_bracket("[]]")]
#[case::literal_suffix("truex")]
#[case::null_suffix("nulll")]
fn trailing_content(#[case] text: &str) {
    assert_invalid(text);
}

#[rstest]
#[case::unterminated("\"abc")]
#[case::unterminated_after_escape("\"abc\\")]
#[case::unknown_escape(r#""\x41""#)]
#[case::escaped_digit(r#""\1""#)]
#[case::short_unicode(r#""\u12""#)]
#[case::non_hex_unicode(r#""\u12g4""#)]
#[case::lone_high_surrogate(r#""\ud800""#)]
#[case::lone_low_surrogate(r#""\udfff""#)]
fn bad_strings(#[case] text: &str) {
    assert_invalid(text);
}

#[rstest]
#[case::leading_zero("01")]
#[case::negative_leading_zero("-01")]
#[case::lone_minus("-")]
#[case::minus_then_letter("-a")]
#[case::trailing_dot("1.")]
#[case::leading_dot(".5")]
#[case::dot_exponent("1.e5")]
#[case::empty_exponent("1e")]
#[case::signed_empty_exponent("1e+")]
#[case::double_sign("1e+-1")]
#[case::hex("0x10")]
#[case::leading_zero_in_array("[01]")]
#[case::infinity("Infinity")]
#[case::nan("NaN")]
fn bad_numbers(#[case] text: &str) {
    assert_invalid(text);
}

#[rstest]
#[case::truncated_true("tru")]
#[case::truncated_false("fals")]
#[case::truncated_null("nul")]
#[case::wrong_case_true("True")]
#[case::misspelled_false("flase")]
#[case::misspelled_null("nil")]
fn bad_literals(#[case] text: &str) {
    assert_invalid(text);
}

#[rstest]
#[case::unmatched_object("{")]
#[case::unmatched_array("[")]
#[case::open_member(r#"{"a":1"#)]
#[case::open_element("[1,2")]
#[case::trailing_comma_array("[1,]")]
#[case::trailing_comma_object(r#"{"a":1,}"#)]
#[case::leading_comma("[,1]")]
#[case::missing_comma("[1 2]")]
#[case::missing_colon(r#"{"a" 1}"#)]
#[case::missing_value(r#"{"a":}"#)]
#[case::unquoted_key("{a:1}")]
#[case::number_key("{1:1}")]
#[case::mismatched_close("[1}")]
#[case::object_closed_by_bracket(r#"{"a":1]"#)]
#[case::semicolon(r#"{"a":1;"b":2}"#)]
fn bad_structure(#[case] text: &str) {
    assert_invalid(text);
}

#[test]
fn error_display_is_stable() {
    let err = decode("[").unwrap_err();
    assert_eq!(alloc::format!("{err}"), "invalid input");
    let _: &dyn core::error::Error = &err;
}

#[test]
fn rejection_holds_at_every_truncation() {
    let text = r#"{"k":[1,-2.5e3,"s\u0041",true,false,null,{}]}"#;
    assert!(decode(text).is_ok());
    let chars: alloc::vec::Vec<char> = text.chars().collect();
    for end in 0..chars.len() {
        let prefix: String = chars[..end].iter().collect();
        assert_invalid(&prefix);
    }
}
