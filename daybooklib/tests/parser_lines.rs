use daybooklib::{
    model::Direction,
    parser::{parse_line, parse_message},
};
use rust_decimal::Decimal;

#[test]
fn comma_dialect_spending() {
    let recs = parse_message("food, store, 350");
    assert_eq!(recs.len(), 1);
    let r = &recs[0];
    assert_eq!(r.product, "food");
    assert_eq!(r.source, "store");
    assert_eq!(r.amount, Decimal::new(350, 0));
    assert_eq!(r.direction, Direction::Spending);
    assert!(!r.attributed);
}

#[test]
fn semicolon_dialect_income_with_marker() {
    let recs = parse_message("salary; job; +1000; +");
    assert_eq!(recs.len(), 1);
    let r = &recs[0];
    assert_eq!(r.product, "salary");
    assert_eq!(r.source, "job");
    assert_eq!(r.direction, Direction::Income);
    assert_eq!(r.amount, Decimal::new(1000, 0));
    assert!(r.attributed);
}

#[test]
fn fourth_field_other_than_marker_is_not_attributed() {
    let r = parse_line("taxi; card; 420; x").expect("parse");
    assert!(!r.attributed);
    assert_eq!(r.direction, Direction::Spending);
}

#[test]
fn decimal_comma_and_inner_spaces() {
    let r = parse_line("milk, shop, 10,5").expect("comma dialect");
    assert_eq!(r.amount, Decimal::new(105, 1));

    let r = parse_line("rent; bank; 12 000,50").expect("semicolon dialect");
    assert_eq!(r.amount, Decimal::new(1200050, 2));

    let r = parse_line("bonus, work, + 1 500").expect("spaced sign");
    assert_eq!(r.direction, Direction::Income);
    assert_eq!(r.amount, Decimal::new(1500, 0));
}

#[test]
fn malformed_lines_do_not_block_good_ones() {
    let text = "\n  food, store, 350\nnot a record\nbread, bakery, abc\n\ncoffee; cafe; +7,5\n, shop, 10\n";
    let recs = parse_message(text);
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].product, "food");
    assert_eq!(recs[1].product, "coffee");
    assert_eq!(recs[1].direction, Direction::Income);
    assert_eq!(recs[1].amount, Decimal::new(75, 1));
}

#[test]
fn nothing_valid_gives_empty_batch() {
    assert!(parse_message("").is_empty());
    assert!(parse_message("hello there\nfood, store").is_empty());
}

#[test]
fn amount_is_stored_as_magnitude() {
    let r = parse_line("refund, shop, -20").expect("parse");
    assert_eq!(r.amount, Decimal::new(20, 0));
    assert_eq!(r.direction, Direction::Spending);
}

#[test]
fn fields_are_trimmed_and_non_ascii_kept() {
    let r = parse_line("  Кофе  ;  Кофейня «Утро» ; 250 ").expect("parse");
    assert_eq!(r.product, "Кофе");
    assert_eq!(r.source, "Кофейня «Утро»");
}

#[test]
fn comma_dialect_trailing_marker() {
    let r = parse_line("gift, card, 500, +").expect("marked comma line");
    assert_eq!(r.amount, Decimal::new(500, 0));
    assert_eq!(r.direction, Direction::Spending);
    assert!(r.attributed);
}

#[test]
fn comma_dialect_extra_field_is_rejected() {
    assert!(parse_line("rent, bank, 10, 5").is_err());
    assert!(parse_line("rent, bank, 10, +, x").is_err());
    assert_eq!(parse_message("rent, bank, 10, 5\nfood, store, 350").len(), 1);
}

#[test]
fn comma_dialect_without_spaces() {
    let r = parse_line("milk,shop,10,5").expect("tight decimal comma");
    assert_eq!(r.product, "milk");
    assert_eq!(r.source, "shop");
    assert_eq!(r.amount, Decimal::new(105, 1));
}
