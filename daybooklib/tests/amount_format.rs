use daybooklib::amount::{format_amount, parse_amount_cell};
use rust_decimal::Decimal;

fn d(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap()
}

#[test]
fn contract_examples() {
    assert_eq!(format_amount(&d("1000")), "1000");
    assert_eq!(format_amount(&d("12345")), "12 345");
    assert_eq!(format_amount(&d("10.5")), "10,5");
    assert_eq!(format_amount(&d("1234567.25")), "1 234 567,25");
}

#[test]
fn integral_values_drop_fraction() {
    assert_eq!(format_amount(&d("350.00")), "350");
    assert_eq!(format_amount(&d("0")), "0");
    assert_eq!(format_amount(&d("1000.50")), "1000,5");
    assert_eq!(format_amount(&d("100000")), "100 000");
}

#[test]
fn no_sign_in_output() {
    assert_eq!(format_amount(&d("-12345.5")), "12 345,5");
}

#[test]
fn cell_text_parses_back() {
    assert_eq!(parse_amount_cell("1 234 567,25"), Some(d("1234567.25")));
    assert_eq!(parse_amount_cell(" 10,5 "), Some(d("10.5")));
    assert_eq!(parse_amount_cell("350.0"), Some(d("350.0")));
    assert_eq!(parse_amount_cell(""), None);
    assert_eq!(parse_amount_cell("about 5"), None);
}
