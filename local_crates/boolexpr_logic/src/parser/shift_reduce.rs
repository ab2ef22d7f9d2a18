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

use super::tokenizer::{Symbol, Token, Tokenizer};
use crate::BoolExpr;
use anyhow::{anyhow, Result};

/// The lookahead symbols that end any complete expression.
const ANY_END: &[Symbol] = &[
    Symbol::Rp,
    Symbol::And,
    Symbol::Or,
    Symbol::Imp,
    Symbol::Iff,
    Symbol::End,
];

#[derive(Clone, Copy, Debug)]
enum ReductionAction {
    Binary,
    Parenthesized,
    Negation,
    Value,
}

/// A reduction rule: when the top of the stack matches `pattern` (oldest first)
/// and the lookahead symbol belongs to `lookahead`, the matched symbols are replaced by an expression.
///
/// Precedence and associativity are encoded by the lookahead sets:
/// a binary operation is reduced before any operator of lower or equal precedence,
/// but not before an operator that binds tighter.
struct Reduction {
    pattern: &'static [Symbol],
    lookahead: &'static [Symbol],
    action: ReductionAction,
}

impl Reduction {
    fn matches(&self, stack: &[Token], next: Symbol) -> bool {
        stack.len() >= self.pattern.len()
            && stack[stack.len() - self.pattern.len()..]
                .iter()
                .map(|t| t.symbol)
                .eq(self.pattern.iter().copied())
            && self.lookahead.contains(&next)
    }
}

// Longer patterns are tried first.
static REDUCTIONS: [Reduction; 7] = [
    Reduction {
        pattern: &[Symbol::Exp, Symbol::And, Symbol::Exp],
        lookahead: ANY_END,
        action: ReductionAction::Binary,
    },
    Reduction {
        pattern: &[Symbol::Exp, Symbol::Or, Symbol::Exp],
        lookahead: &[Symbol::Rp, Symbol::Or, Symbol::Imp, Symbol::Iff, Symbol::End],
        action: ReductionAction::Binary,
    },
    Reduction {
        pattern: &[Symbol::Exp, Symbol::Imp, Symbol::Exp],
        lookahead: &[Symbol::Rp, Symbol::Imp, Symbol::Iff, Symbol::End],
        action: ReductionAction::Binary,
    },
    Reduction {
        pattern: &[Symbol::Exp, Symbol::Iff, Symbol::Exp],
        lookahead: &[Symbol::Rp, Symbol::Iff, Symbol::End],
        action: ReductionAction::Binary,
    },
    Reduction {
        pattern: &[Symbol::Lp, Symbol::Exp, Symbol::Rp],
        lookahead: ANY_END,
        action: ReductionAction::Parenthesized,
    },
    Reduction {
        pattern: &[Symbol::Not, Symbol::Exp],
        lookahead: ANY_END,
        action: ReductionAction::Negation,
    },
    Reduction {
        pattern: &[Symbol::Val],
        lookahead: ANY_END,
        action: ReductionAction::Value,
    },
];

/// A parser for propositional formulas written in infix notation.
///
/// The accepted language is made of:
/// * the constants `1` (true) and `0` (false);
/// * identifiers, made of letters, digits, `$` and `_`, optionally followed by prime marks (`'`, `"`, `ʹ`, `ʺ`, `′`, `″`, `‴`, `⁗`);
/// * the negation `!`, the conjunction `&`, the disjunction `|`, the implication `=>` and the equivalence `<=>`;
/// * parentheses.
///
/// Operators are listed above by decreasing precedence.
/// All binary operators are left-associative, including `=>` and `<=>`.
/// Spaces, tabs, line feeds, carriage returns and form feeds may be used as separators.
///
/// # Example
///
/// ```
/// use boolexpr_logic::Parser;
///
/// let parser = Parser::new();
/// let formula = parser.parse("a => b => c").unwrap();
/// assert_eq!("((a => b) => c)", format!("{}", formula));
/// assert!(parser.parse("a b").is_err());
/// ```
#[derive(Default)]
pub struct Parser;

impl Parser {
    /// Builds a new parser.
    pub fn new() -> Self {
        Parser
    }

    /// Parses a formula, returning the root of its abstract syntax tree.
    ///
    /// An error is returned if the formula contains an unexpected character,
    /// if it is empty, or if it cannot be reduced to a single expression
    /// (unbalanced parentheses, missing operand or missing operator).
    pub fn parse(&self, formula: &str) -> Result<BoolExpr> {
        let mut tokenizer = Tokenizer::new(formula);
        let mut stack: Vec<Token> = Vec::new();
        loop {
            let token = tokenizer.next_token()?;
            while reduce(&mut stack, token.symbol)? {}
            if token.symbol == Symbol::End {
                break;
            }
            stack.push(token);
        }
        match stack.pop() {
            None => Err(anyhow!("syntax error: empty formula")),
            Some(Token {
                symbol: Symbol::Exp,
                node: Some(root),
            }) if stack.is_empty() => Ok(root),
            Some(_) => Err(anyhow!("syntax error: incomplete or ambiguous formula")),
        }
    }
}

fn reduce(stack: &mut Vec<Token>, next: Symbol) -> Result<bool> {
    let reduction = match REDUCTIONS.iter().find(|r| r.matches(stack.as_slice(), next)) {
        Some(r) => r,
        None => return Ok(false),
    };
    let first_matched = stack.len() - reduction.pattern.len();
    let mut nodes = stack.split_off(first_matched).into_iter().filter_map(|t| t.node);
    let mut next_node = || {
        nodes.next().ok_or_else(|| {
            anyhow!(
                "missing node while reducing symbols {:?}",
                reduction.pattern
            )
        })
    };
    let reduced = match reduction.action {
        ReductionAction::Binary => {
            let left = next_node()?;
            let mut operator = next_node()?;
            operator.add_operand(left);
            operator.add_operand(next_node()?);
            operator
        }
        ReductionAction::Negation => {
            let mut operator = next_node()?;
            operator.add_operand(next_node()?);
            operator
        }
        ReductionAction::Parenthesized | ReductionAction::Value => next_node()?,
    };
    stack.push(Token::new(Symbol::Exp, Some(reduced)));
    Ok(true)
}
