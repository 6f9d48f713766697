#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::ast::Value;
#[cfg(test)]
use crate::ErrorKind;

const SAMPLE: &str = "[Section 1]
; comment
Option 1 = value 1; option 'Option 1' has value 'value 1'
oPtion 1 = \\ value 2\\ \\ \\; option 'oPtion 1' has value ' value 2   '

[$Section::subsection]; no subsection, only valid identifier of section
Option 2 = value 1:value 2 : value 3; list of three
Option 3 = value 1, ${ Section 1#Option 1 }; list of 'value 1' and 'value 1'
Option 4 = v1, ${ $Section::subsection#Option 3 }, v2; four values
Option 5 = v1, v2:v3; 'v1' and 'v2:v3'

[Numbers]
num = -1285
num_bin = 0b01101001
num_hex = 0x12ae, 0xAc2B
num_oct = 01754

float1 = -124.45667356
float2 = +4.1234565E+45
float3 = 412.34565e45
float4 = -1.1245864E-6

[Other]
bool1 = 1
bool2 = on
bool3 = f";

fn parse(input: &str) -> Result<Document, ConfigError> {
    Parser::new(input)?.parse_document()
}

fn strings(values: &[Value]) -> Vec<&str> {
    values.iter().map(|v| v.as_str().expect("Expected a string value")).collect()
}

#[test]
fn test_parser_sample_document() {
    let doc = parse(SAMPLE).expect("Failed to parse document");

    println!("--- Parsed Document ---");
    println!("{:#?}", doc);

    let names: Vec<&str> = doc.sections().iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["Section 1", "$Section::subsection", "Numbers", "Other"]);

    let first = doc.section("Section 1").unwrap();
    assert_eq!(strings(first.option("Option 1").unwrap().values()), vec!["value 1"]);
    assert_eq!(strings(first.option("oPtion 1").unwrap().values()), vec![" value 2   "]);
}

#[test]
fn test_colon_vector() {
    let doc = parse(SAMPLE).unwrap();
    let option = doc.section("$Section::subsection").unwrap().option("Option 2").unwrap();

    assert!(option.is_vector());
    assert_eq!(strings(option.values()), vec!["value 1", "value 2", "value 3"]);
}

#[test]
fn test_link_expansion() {
    let doc = parse(SAMPLE).unwrap();
    let sub = doc.section("$Section::subsection").unwrap();

    assert_eq!(strings(sub.option("Option 3").unwrap().values()), vec!["value 1", "value 1"]);
}

#[test]
fn test_nested_link_is_flattened() {
    let doc = parse(SAMPLE).unwrap();
    let option = doc.section("$Section::subsection").unwrap().option("Option 4").unwrap();

    assert_eq!(strings(option.values()), vec!["v1", "value 1", "value 1", "v2"]);
}

#[test]
fn test_comma_separator_priority() {
    let doc = parse(SAMPLE).unwrap();
    let option = doc.section("$Section::subsection").unwrap().option("Option 5").unwrap();

    assert_eq!(strings(option.values()), vec!["v1", "v2:v3"]);
}

#[test]
fn test_numbers_section() {
    let doc = parse(SAMPLE).unwrap();
    let numbers = doc.section("Numbers").unwrap();
    let value = |name: &str| numbers.option(name).unwrap().values().to_vec();

    assert_eq!(value("num"), vec![Value::Integer(-1285)]);
    assert_eq!(value("num_bin"), vec![Value::Integer(105)]);
    assert_eq!(value("num_hex"), vec![Value::Integer(4782), Value::Integer(44075)]);
    assert_eq!(value("num_oct"), vec![Value::Integer(1004)]);
    assert_eq!(value("float1"), vec![Value::Double(-124.45667356)]);
    assert_eq!(value("float2"), vec![Value::Double(4.1234565E+45)]);
    assert_eq!(value("float3"), vec![Value::Double(412.34565e45)]);
    assert_eq!(value("float4"), vec![Value::Double(-1.1245864E-6)]);
}

#[test]
fn test_unpaired_leading_backslashes_are_dropped() {
    let doc = parse("[S]\nshare = \\\\server\\share\nroot = \\x\n").unwrap();
    let section = doc.section("S").unwrap();

    assert_eq!(strings(section.option("share").unwrap().values()), vec!["server\\share"]);
    assert_eq!(strings(section.option("root").unwrap().values()), vec!["x"]);
}

#[test]
fn test_fraction_needs_digits_on_both_sides() {
    let doc = parse("[S]\nlead = .5\ntrail = 5.\nfull = 0.5\n").unwrap();
    let section = doc.section("S").unwrap();

    assert_eq!(strings(section.option("lead").unwrap().values()), vec![".5"]);
    assert_eq!(strings(section.option("trail").unwrap().values()), vec!["5."]);
    assert_eq!(section.option("full").unwrap().values(), &[Value::Double(0.5)]);
}

#[test]
fn test_booleans_and_integer_one() {
    let doc = parse(SAMPLE).unwrap();
    let other = doc.section("Other").unwrap();

    assert_eq!(other.option("bool1").unwrap().values(), &[Value::Integer(1)]);
    assert_eq!(other.option("bool2").unwrap().values(), &[Value::Boolean(true)]);
    assert_eq!(other.option("bool3").unwrap().values(), &[Value::Boolean(false)]);
}

#[test]
fn test_parsing_is_deterministic() {
    let first = parse(SAMPLE).unwrap();
    let second = parse(SAMPLE).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_forward_link_stays_text() {
    let input = "[A]\nx = ${B#y}\n[B]\ny = 1\n";
    let doc = parse(input).unwrap();

    assert_eq!(
        doc.section("A").unwrap().option("x").unwrap().values(),
        &[Value::String("${B#y}".into())]
    );
}

#[test]
fn test_self_link_is_not_visible() {
    let input = "[S]\na = ${S#a}\n";
    let doc = parse(input).unwrap();

    assert_eq!(
        doc.section("S").unwrap().option("a").unwrap().values(),
        &[Value::String("${S#a}".into())]
    );
}

#[test]
fn test_link_sees_earlier_duplicate() {
    let input = "[S]\na = 1\na = ${S#a}, 2\n";
    let doc = parse(input).unwrap();
    let section = doc.section("S").unwrap();

    assert_eq!(section.options().len(), 2);
    assert_eq!(section.option("a").unwrap().values(), &[Value::Integer(1), Value::Integer(2)]);
}

#[test]
fn test_link_into_same_section() {
    let input = "[S]\nports = 80, 443\nall = ${S#ports}, 8080\n";
    let doc = parse(input).unwrap();

    assert_eq!(
        doc.section("S").unwrap().option("all").unwrap().values(),
        &[Value::Integer(80), Value::Integer(443), Value::Integer(8080)]
    );
}

#[test]
fn test_link_keeps_typed_values() {
    let input = "[A]\nflag = yes\n[B]\ncopy = ${A#flag}\n";
    let doc = parse(input).unwrap();

    assert_eq!(doc.section("B").unwrap().option("copy").unwrap().values(), &[Value::Boolean(true)]);
}

#[test]
fn test_duplicate_sections_keep_order_and_last_wins() {
    let input = "[S]\na = 1\n[T]\nb = 2\n[S]\nc = 3\n";
    let doc = parse(input).unwrap();

    assert_eq!(doc.sections().len(), 3);
    let found = doc.section("S").unwrap();
    assert!(found.has_option("c"));
    assert!(!found.has_option("a"));
}

#[test]
fn test_empty_input_gives_empty_document() {
    let doc = parse("; nothing but a comment\n").unwrap();
    assert!(doc.is_empty());
}

#[test]
fn test_expected_section_first() {
    let err = parse("key = val\n").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ExpectedSectionFirst);
    assert_eq!((err.line(), err.column()), (1, 1));
}

#[test]
fn test_expecting_value_after_identifier() {
    let err = parse("[S]\nfirst = 1\n  second\nthird = 3\n").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ExpectingValueAfterIdentifier);
    assert_eq!((err.line(), err.column()), (3, 3));
}

#[test]
fn test_identifier_at_end_of_stream() {
    let err = parse("[S]\nlonely").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ExpectingValueAfterIdentifier);
    assert_eq!((err.line(), err.column()), (2, 1));
}

#[test]
fn test_identifier_followed_by_section() {
    let err = parse("[S]\nkey\n[T]\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ExpectingValueAfterIdentifier);
}

#[test]
fn test_unexpected_value() {
    let err = parse("[S]\nkey = a\n= b\n").unwrap_err();

    match err {
        ConfigError::UnexpectedValue { value, line, column, .. } => {
            assert_eq!(value, "b");
            assert_eq!((line, column), (3, 3));
        }
        other => panic!("Expected UnexpectedValue, got {:?}", other),
    }
}

#[test]
fn test_value_right_after_section() {
    let err = parse("[S]\n= orphan\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedValue);
}

#[test]
fn test_lexical_error_propagates() {
    let err = parse("[Sec").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ExpectedClosingBracket);
    assert_eq!((err.line(), err.column()), (1, 1));
}
