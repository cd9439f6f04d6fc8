//! Cardinal English number words.

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Short-scale names for each group of three digits. Enough for `u128::MAX`.
const SCALES: [&str; 13] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
    "undecillion",
];

/// Spell out a run of ASCII digits.
///
/// Runs with a leading zero ("007") are read digit by digit. Returns `None`
/// for anything that is not all digits or does not fit in a `u128`.
pub fn digits_to_words(digits: &str) -> Option<String> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        let words: Vec<&str> = digits
            .bytes()
            .map(|b| ONES[usize::from(b - b'0')])
            .collect();
        return Some(words.join(" "));
    }
    let value: u128 = digits.parse().ok()?;
    Some(cardinal(value))
}

/// "one hundred and twenty", "one thousand and five", "two million".
pub fn cardinal(value: u128) -> String {
    if value == 0 {
        return ONES[0].to_string();
    }

    let mut groups = Vec::new();
    let mut rest = value;
    while rest > 0 {
        groups.push((rest % 1000) as usize);
        rest /= 1000;
    }

    let mut words = Vec::new();
    for (scale, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        if scale == 0 && groups.len() > 1 && group < 100 {
            words.push("and".to_string());
        }
        words.push(below_thousand(group));
        if scale > 0 {
            words.push(SCALES[scale].to_string());
        }
    }
    words.join(" ")
}

fn below_thousand(n: usize) -> String {
    let hundreds = n / 100;
    let rest = n % 100;
    let mut parts = Vec::new();
    if hundreds > 0 {
        parts.push(format!("{} hundred", ONES[hundreds]));
        if rest > 0 {
            parts.push("and".to_string());
        }
    }
    if rest > 0 {
        parts.push(below_hundred(rest));
    }
    parts.join(" ")
}

fn below_hundred(n: usize) -> String {
    if n < 20 {
        return ONES[n].to_string();
    }
    match n % 10 {
        0 => TENS[n / 10].to_string(),
        ones => format!("{} {}", TENS[n / 10], ONES[ones]),
    }
}
