// boolexpr_logic
// Copyright (C) 2021  Univ. Artois & CNRS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use crate::{BoolExpr, BoolExprKind};
use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex =
        Regex::new(r#"^[a-zA-Z0-9$_]+['"ʹʺ′″‴⁗]*"#).unwrap();
}

const SEPARATORS: [char; 5] = [' ', '\t', '\n', '\r', '\x0C'];

/// The grammar symbols handled by the shift-reduce engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Symbol {
    /// `(`
    Lp,
    /// `)`
    Rp,
    /// `!`
    Not,
    /// `&`
    And,
    /// `|`
    Or,
    /// `=>`
    Imp,
    /// `<=>`
    Iff,
    /// A constant or an identifier
    Val,
    /// A reduced expression
    Exp,
    /// End of input
    End,
}

/// A grammar symbol, together with the node it carries (if any).
#[derive(Debug)]
pub(crate) struct Token {
    pub(crate) symbol: Symbol,
    pub(crate) node: Option<BoolExpr>,
}

impl Token {
    pub(crate) fn new(symbol: Symbol, node: Option<BoolExpr>) -> Self {
        Token { symbol, node }
    }
}

/// Splits a formula into tokens.
///
/// Each call to [`next_token`](Self::next_token) skips the separators (spaces, tabs, line feeds, carriage returns and form feeds)
/// and consumes exactly one token.
pub(crate) struct Tokenizer<'a> {
    source: &'a str,
    offset: usize,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Tokenizer { source, offset: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.source[self.offset..]
    }

    fn skip_separators(&mut self) {
        let remaining = self.remaining();
        let trimmed = remaining.trim_start_matches(&SEPARATORS[..]);
        self.offset += remaining.len() - trimmed.len();
    }

    /// Consumes the next token.
    ///
    /// Once the end of the formula is reached, each call returns an [`Symbol::End`] token.
    pub(crate) fn next_token(&mut self) -> Result<Token> {
        self.skip_separators();
        let remaining = self.remaining();
        let first = match remaining.chars().next() {
            None => return Ok(Token::new(Symbol::End, None)),
            Some(c) => c,
        };
        let single_char = |symbol, kind| (1, Token::new(symbol, Some(BoolExpr::new(kind))));
        let (n_read, token) = match first {
            '(' => (1, Token::new(Symbol::Lp, None)),
            ')' => (1, Token::new(Symbol::Rp, None)),
            '1' => single_char(Symbol::Val, BoolExprKind::True),
            '0' => single_char(Symbol::Val, BoolExprKind::False),
            '!' => single_char(Symbol::Not, BoolExprKind::Not),
            '&' => single_char(Symbol::And, BoolExprKind::And),
            '|' => single_char(Symbol::Or, BoolExprKind::Or),
            '=' if remaining.starts_with("=>") => (
                2,
                Token::new(Symbol::Imp, Some(BoolExpr::new(BoolExprKind::Imp))),
            ),
            '<' if remaining.starts_with("<=>") => (
                3,
                Token::new(Symbol::Iff, Some(BoolExpr::new(BoolExprKind::Iff))),
            ),
            _ => match IDENTIFIER_PATTERN.find(remaining) {
                Some(m) => (
                    m.end(),
                    Token::new(Symbol::Val, Some(BoolExpr::new_var(m.as_str()))),
                ),
                None => {
                    return Err(anyhow!(
                        "syntax error: unexpected character '{}' at offset {}",
                        first,
                        self.offset
                    ))
                }
            },
        };
        self.offset += n_read;
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(source: &str) -> Result<Vec<Token>> {
        let mut tokenizer = Tokenizer::new(source);
        let mut tokens = vec![];
        loop {
            let token = tokenizer.next_token()?;
            if token.symbol == Symbol::End {
                return Ok(tokens);
            }
            tokens.push(token);
        }
    }

    fn symbols(source: &str) -> Vec<Symbol> {
        tokenize(source)
            .unwrap()
            .iter()
            .map(|t| t.symbol)
            .collect()
    }

    #[test]
    fn test_empty() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" \t\n\r\x0C").unwrap().is_empty());
    }

    #[test]
    fn test_end_is_repeated() {
        let mut tokenizer = Tokenizer::new("x");
        assert_eq!(Symbol::Val, tokenizer.next_token().unwrap().symbol);
        assert_eq!(Symbol::End, tokenizer.next_token().unwrap().symbol);
        assert_eq!(Symbol::End, tokenizer.next_token().unwrap().symbol);
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            vec![
                Symbol::Lp,
                Symbol::Rp,
                Symbol::Not,
                Symbol::And,
                Symbol::Or,
                Symbol::Imp,
                Symbol::Iff
            ],
            symbols("()!&|=><=>")
        );
    }

    #[test]
    fn test_operator_nodes() {
        let kinds = tokenize("! & | => <=>")
            .unwrap()
            .into_iter()
            .map(|t| t.node.unwrap().kind())
            .collect::<Vec<BoolExprKind>>();
        assert_eq!(
            vec![
                BoolExprKind::Not,
                BoolExprKind::And,
                BoolExprKind::Or,
                BoolExprKind::Imp,
                BoolExprKind::Iff
            ],
            kinds
        );
    }

    #[test]
    fn test_parentheses_carry_no_node() {
        assert!(tokenize("()").unwrap().iter().all(|t| t.node.is_none()));
    }

    #[test]
    fn test_constants() {
        let tokens = tokenize("1 0").unwrap();
        assert_eq!(2, tokens.len());
        assert_eq!(Symbol::Val, tokens[0].symbol);
        assert_eq!(BoolExprKind::True, tokens[0].node.as_ref().unwrap().kind());
        assert_eq!(Symbol::Val, tokens[1].symbol);
        assert_eq!(BoolExprKind::False, tokens[1].node.as_ref().unwrap().kind());
    }

    #[test]
    fn test_constants_take_precedence_over_identifiers() {
        let tokens = tokenize("10x").unwrap();
        assert_eq!(3, tokens.len());
        assert_eq!(BoolExprKind::True, tokens[0].node.as_ref().unwrap().kind());
        assert_eq!(BoolExprKind::False, tokens[1].node.as_ref().unwrap().kind());
        assert_eq!("x", tokens[2].node.as_ref().unwrap().name());
    }

    #[test]
    fn test_identifiers() {
        let names = tokenize("x y1 $tmp _a Zz_9 a' b'' c\" d′″ e‴⁗ fʹʺ 2x")
            .unwrap()
            .into_iter()
            .map(|t| {
                assert_eq!(Symbol::Val, t.symbol);
                let node = t.node.unwrap();
                assert_eq!(BoolExprKind::Var, node.kind());
                node.name().to_string()
            })
            .collect::<Vec<String>>();
        assert_eq!(
            vec!["x", "y1", "$tmp", "_a", "Zz_9", "a'", "b''", "c\"", "d′″", "e‴⁗", "fʹʺ", "2x"],
            names
        );
    }

    #[test]
    fn test_identifier_stops_at_operator() {
        assert_eq!(
            vec![Symbol::Val, Symbol::And, Symbol::Val, Symbol::Imp, Symbol::Val],
            symbols("x&y=>z")
        );
    }

    #[test]
    fn test_prime_must_follow_identifier() {
        let err = tokenize("'x").unwrap_err();
        assert_eq!(
            "syntax error: unexpected character ''' at offset 0",
            format!("{}", err)
        );
    }

    #[test]
    fn test_unknown_character() {
        let err = tokenize("x & ~y").unwrap_err();
        assert_eq!(
            "syntax error: unexpected character '~' at offset 4",
            format!("{}", err)
        );
    }

    #[test]
    fn test_incomplete_imp() {
        assert!(tokenize("x = y").is_err());
        assert!(tokenize("x =").is_err());
    }

    #[test]
    fn test_incomplete_iff() {
        assert!(tokenize("x <= y").is_err());
        assert!(tokenize("x < y").is_err());
        assert!(tokenize("x <=").is_err());
    }

    #[test]
    fn test_escaped_separators_are_not_separators() {
        assert!(tokenize("\\t x").is_err());
    }
}
