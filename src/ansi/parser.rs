//! Single-sequence escape parser.
//!
//! A `SequenceParser` is created fresh for each ESC introducer and
//! consumes the characters that follow it. Only CSI (`ESC [`) sequences
//! are recognized; the byte-class state machine follows ECMA-48's CSI
//! grammar: parameter bytes, then optional intermediate bytes, then one
//! final byte.

use crate::color::NamedColor;

use super::token::{LineClearMode, ScreenClearMode, Token};

/// Outcome of feeding one character to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// The sequence is still incomplete; feed more characters.
    Continue,
    /// The character is illegal here; the sequence must be replayed as
    /// literal text.
    Fail,
    /// The final byte arrived; ask [`SequenceParser::tokens`] for the
    /// decoded operations.
    Complete,
}

/// Parser for the characters following a single ESC introducer.
#[derive(Debug, Default)]
pub struct SequenceParser {
    /// Every character consumed, for literal replay on failure.
    raw: Vec<char>,
    /// Inner CSI machine, present once `[` has been seen.
    csi: Option<CsiParser>,
}

impl SequenceParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next character.
    ///
    /// The first character selects the sequence kind; only the CSI
    /// introducer `[` is supported, anything else fails immediately.
    pub fn process(&mut self, c: char) -> Progress {
        self.raw.push(c);

        match &mut self.csi {
            None => {
                if c == '[' {
                    self.csi = Some(CsiParser::default());
                    Progress::Continue
                } else {
                    Progress::Fail
                }
            }
            Some(csi) => csi.process(c),
        }
    }

    /// Decode the completed sequence.
    ///
    /// Only meaningful after [`Progress::Complete`]. `None` means the
    /// terminator or its parameters are unsupported; the caller treats
    /// that exactly like a failure and replays the raw characters.
    pub fn tokens(&self) -> Option<Vec<Token>> {
        self.csi.as_ref()?.tokens()
    }

    /// Every character consumed so far, excluding the introducing ESC.
    pub fn raw_chars(&self) -> &[char] {
        &self.raw
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CsiState {
    ParsingParams,
    ParsingIntermediate,
}

/// State machine for the body of a CSI sequence.
#[derive(Debug)]
struct CsiParser {
    params: String,
    intermediates: String,
    final_byte: char,
    state: CsiState,
}

impl Default for CsiParser {
    fn default() -> Self {
        Self {
            params: String::new(),
            intermediates: String::new(),
            final_byte: '\0',
            state: CsiState::ParsingParams,
        }
    }
}

impl CsiParser {
    fn process(&mut self, c: char) -> Progress {
        match u32::from(c) {
            // Parameter byte: legal only before any intermediate byte.
            0x30..=0x3f => {
                if self.state == CsiState::ParsingParams {
                    self.params.push(c);
                    Progress::Continue
                } else {
                    Progress::Fail
                }
            }
            // Intermediate byte: moves (or keeps) the machine in the
            // intermediate state.
            0x20..=0x2f => {
                self.state = CsiState::ParsingIntermediate;
                self.intermediates.push(c);
                Progress::Continue
            }
            // Final byte: the sequence is complete.
            0x40..=0x7e => {
                self.final_byte = c;
                Progress::Complete
            }
            _ => Progress::Fail,
        }
    }

    /// Map `(final_byte, params)` to tokens.
    ///
    /// Intermediate bytes are accepted by the state machine but carry no
    /// meaning in the command table.
    fn tokens(&self) -> Option<Vec<Token>> {
        match self.final_byte {
            'K' => line_clear_tokens(&self.params),
            'J' => screen_clear_tokens(&self.params),
            'm' => sgr_tokens(&self.params),
            'H' | 'f' => cursor_tokens(&self.params),
            _ => None,
        }
    }
}

/// EL: a single bare selector character, nothing else.
fn line_clear_tokens(params: &str) -> Option<Vec<Token>> {
    let mode = match params {
        "" | "0" => LineClearMode::Right,
        "1" => LineClearMode::Left,
        "2" => LineClearMode::All,
        _ => return None,
    };
    Some(vec![Token::ClearLine(mode)])
}

/// ED: same single-character selector discipline as EL.
fn screen_clear_tokens(params: &str) -> Option<Vec<Token>> {
    let mode = match params {
        "" | "0" => ScreenClearMode::Below,
        "1" => ScreenClearMode::Above,
        "2" => ScreenClearMode::All,
        "3" => ScreenClearMode::AllAndScrollback,
        _ => return None,
    };
    Some(vec![Token::ClearScreen(mode)])
}

/// SGR: `;`-separated fields, leading zeros stripped. A single
/// unsupported field invalidates the entire sequence — no partial
/// emission.
fn sgr_tokens(params: &str) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    for field in params.split(';') {
        match field.trim_start_matches('0') {
            "" => tokens.push(Token::ResetAttrs),
            "1" => tokens.push(Token::SetBold(true)),
            code => {
                let n: usize = code.parse().ok()?;
                let name = NamedColor::from_index(n.checked_sub(30)?)?;
                tokens.push(Token::SetColor { name, foreground: true });
            }
        }
    }
    Some(tokens)
}

/// CUP/HVP: up to two `;`-separated decimal fields, empty fields
/// defaulting to 1.
fn cursor_tokens(params: &str) -> Option<Vec<Token>> {
    let mut fields = params.split(';');
    let line = cursor_field(fields.next())?;
    let col = cursor_field(fields.next())?;
    if fields.next().is_some() {
        return None;
    }
    Some(vec![Token::SetCursor { line, col }])
}

fn cursor_field(field: Option<&str>) -> Option<u16> {
    match field {
        None | Some("") => Some(1),
        Some(digits) => digits.parse().ok(),
    }
}
