//! Отображение сумм: пробел между тысячами, запятая перед дробной частью.

use rust_decimal::Decimal;

/// `12345.5` → `"12 345,5"`. Знак отбрасывается, хвостовые нули дроби тоже.
pub fn format_amount(a: &Decimal) -> String {
    let s = a.abs().normalize().to_string();
    let (int, frac) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s.as_str(), None),
    };

    let mut out = group_thousands(int);
    if let Some(f) = frac {
        out.push(',');
        out.push_str(f);
    }
    out
}

/// Обратное к `format_amount`: `"1 234,5"` → `1234.5`.
pub fn parse_amount_cell(cell: &str) -> Option<Decimal> {
    let plain: String = cell
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if plain.is_empty() {
        return None;
    }
    plain.parse().ok()
}

// четырёхзначные числа не разбиваем: 1000, а не 1 000
fn group_thousands(digits: &str) -> String {
    if digits.len() <= 4 {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
