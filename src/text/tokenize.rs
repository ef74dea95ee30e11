//! Text tokenization for word wrapping
//!
//! Splits text into the atomic units the line-fill algorithm may break
//! between: maximal runs of ASCII alphanumerics stay whole (Latin words and
//! digits never split mid-word), while every whitespace character and every
//! other character stands alone. Single-character tokens give scripts
//! without word spacing, such as CJK, a wrap opportunity between any two
//! characters.
//!
//! Tokens borrow from the input and concatenate back to it exactly; the
//! tokenizer never drops or reorders characters.

/// Classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
  /// Maximal run of ASCII alphanumeric characters
  Word,
  /// A single whitespace character
  Space,
  /// Any other single character
  Glyph,
}

/// An atomic unit of text for wrapping decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
  /// The token's slice of the original text
  pub text: &'a str,
  /// What kind of token this is
  pub kind: TokenKind,
}

/// Tokenizes `text` into wrap-atomic units.
///
/// # Examples
///
/// ```
/// use storecard::text::{tokenize, TokenKind};
///
/// let tokens = tokenize("Cafe 99号");
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
/// assert_eq!(texts, ["Cafe", " ", "99", "号"]);
/// assert_eq!(tokens[3].kind, TokenKind::Glyph);
/// ```
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
  let mut tokens = Vec::new();
  let mut chars = text.char_indices().peekable();

  while let Some((start, ch)) = chars.next() {
    if ch.is_ascii_alphanumeric() {
      let mut end = start + ch.len_utf8();
      while let Some(&(next, c)) = chars.peek() {
        if !c.is_ascii_alphanumeric() {
          break;
        }
        end = next + c.len_utf8();
        chars.next();
      }
      tokens.push(Token {
        text: &text[start..end],
        kind: TokenKind::Word,
      });
    } else {
      let kind = if ch.is_whitespace() {
        TokenKind::Space
      } else {
        TokenKind::Glyph
      };
      tokens.push(Token {
        text: &text[start..start + ch.len_utf8()],
        kind,
      });
    }
  }

  tokens
}

#[cfg(test)]
mod tests {
  use super::*;

  fn rejoin(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|t| t.text).collect()
  }

  #[test]
  fn ascii_words_stay_whole() {
    let tokens = tokenize("Burger King 24h");
    let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
    assert_eq!(texts, ["Burger", " ", "King", " ", "24h"]);
  }

  #[test]
  fn cjk_splits_per_character() {
    let tokens = tokenize("火锅城");
    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Glyph));
  }

  #[test]
  fn mixed_scripts_break_out_of_ascii_runs() {
    let tokens = tokenize("Café9");
    let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
    // 'é' is not ASCII alphanumeric, so it terminates the run.
    assert_eq!(texts, ["Caf", "é", "9"]);
  }

  #[test]
  fn concatenation_reconstructs_input() {
    for text in [
      "",
      "   ",
      "老王烧烤 BBQ 2024",
      "寿司・刺身\tSushi\n",
      "a一b二c三",
      "🍜拉面",
    ] {
      assert_eq!(rejoin(&tokenize(text)), text);
    }
  }

  #[test]
  fn empty_input_yields_no_tokens() {
    assert!(tokenize("").is_empty());
  }
}
