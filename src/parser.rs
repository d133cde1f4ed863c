//! Parser parses decimal numbers represented in scientific format.

use crate::defs::Sign;
use std::str::Chars;

// Exponent magnitude above which any value saturates to zero or infinity.
const EXPONENT_LIMIT: i64 = 1 << 30;

pub struct ParserState<'a> {
    chars: Chars<'a>,
    cur_ch: Option<char>,
    sign: Sign,
    digits: Vec<u8>,
    point: i64,
    e: i64,
    inf: bool,
    nan: bool,
    valid: bool,
}

impl<'a> ParserState<'a> {
    fn new(s: &'a str) -> Self {
        ParserState {
            chars: s.chars(),
            cur_ch: None,
            sign: Sign::Pos,
            digits: Vec::new(),
            point: 0,
            e: 0,
            inf: false,
            nan: false,
            valid: false,
        }
    }

    /// Returns next character of a string in lower case,
    /// or None if string end reached.
    fn next_char(&mut self) -> Option<char> {
        self.cur_ch = self.chars.next().map(|c| c.to_ascii_lowercase());
        self.cur_ch
    }

    fn cur_char(&self) -> Option<char> {
        self.cur_ch
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_inf(&self) -> bool {
        self.inf
    }

    pub fn is_nan(&self) -> bool {
        self.nan
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns significant digits and the decimal exponent, so that
    /// the value is `0.d1d2d3... * 10^exponent`.
    /// Digits have no leading or trailing zeroes; zero has no digits.
    pub fn into_parts(self) -> (Sign, Vec<u8>, i32) {
        let e = if self.digits.is_empty() {
            0
        } else {
            (self.point + self.e).clamp(-EXPONENT_LIMIT, EXPONENT_LIMIT) as i32
        };
        (self.sign, self.digits, e)
    }
}

/// Parse a decimal number.
pub fn parse(s: &str) -> ParserState {
    let mut parser_state = ParserState::new(s.trim());
    let mut ch = parser_state.next_char();

    // sign
    if let Some(c) = ch {
        match c {
            '+' => ch = parser_state.next_char(),
            '-' => {
                parser_state.sign = Sign::Neg;
                ch = parser_state.next_char()
            }
            _ => {}
        };
    }

    if let Some(c) = ch {
        match c {
            'i' => parse_word(&mut parser_state, &["inf", "infinity"], true),
            'n' => parse_word(&mut parser_state, &["nan"], false),
            '.' | '0'..='9' => parse_num(&mut parser_state),
            _ => {}
        };
    }

    if parser_state.cur_char().is_some() {
        // trailing garbage
        parser_state.valid = false;
    }

    parser_state
}

fn parse_word(parser_state: &mut ParserState, words: &[&str], inf: bool) {
    let mut w = String::new();
    while let Some(c) = parser_state.cur_char() {
        w.push(c);
        parser_state.next_char();
    }
    if words.contains(&w.as_str()) {
        parser_state.inf = inf;
        parser_state.nan = !inf;
        parser_state.valid = true;
    }
}

fn parse_num(parser_state: &mut ParserState) {
    let (int_len, int_zeroes) = parse_digits(parser_state);
    let (mut frac_len, mut frac_zeroes) = (0, 0);
    if Some('.') == parser_state.cur_char() {
        parser_state.next_char();
        (frac_len, frac_zeroes) = parse_digits(parser_state);
    }

    if int_len + frac_len == 0 {
        return;
    }

    // position of the decimal point relative to the first significant digit
    if !parser_state.digits.is_empty() {
        parser_state.point = int_len as i64 - int_zeroes as i64 - frac_zeroes as i64;
    }

    parser_state.valid = true;

    if Some('e') == parser_state.cur_char() {
        parser_state.next_char();
        parser_state.valid = parse_exp(parser_state);
    }

    while parser_state.digits.last() == Some(&0) {
        parser_state.digits.pop();
    }
}

/// Collects digits, skipping zeroes that precede the first significant digit.
/// Returns the number of digits consumed and the number of skipped zeroes.
fn parse_digits(parser_state: &mut ParserState) -> (usize, usize) {
    let mut ch = parser_state.cur_char();
    let mut len = 0;
    let mut skip_cnt = 0;

    while let Some(c) = ch {
        if let Some(d) = c.to_digit(10) {
            if d == 0 && parser_state.digits.is_empty() {
                skip_cnt += 1;
            } else {
                parser_state.digits.push(d as u8);
            }
            len += 1;
        } else {
            break;
        }
        ch = parser_state.next_char();
    }

    (len, skip_cnt)
}

fn parse_exp(parser_state: &mut ParserState) -> bool {
    let mut neg = false;
    let mut ch = parser_state.cur_char();
    if let Some(c) = ch {
        match c {
            '+' => {
                ch = parser_state.next_char();
            }
            '-' => {
                neg = true;
                ch = parser_state.next_char();
            }
            _ => {}
        };
    }

    let mut len = 0;
    while let Some(c) = ch {
        if let Some(d) = c.to_digit(10) {
            if parser_state.e < EXPONENT_LIMIT {
                parser_state.e = parser_state.e * 10 + d as i64;
            }
            len += 1;
        } else {
            break;
        }
        ch = parser_state.next_char();
    }

    if neg {
        parser_state.e = -parser_state.e;
    }

    len > 0
}
