// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Extended query syntax.
//!
//! | Token       | Operator           | Matches values that...        |
//! |-------------|--------------------|-------------------------------|
//! | `jscript`   | `Fuzzy`            | approximately contain it      |
//! | `=scheme`   | `Exact`            | are exactly it                |
//! | `'python`   | `Include`          | contain it                    |
//! | `!ruby`     | `InverseInclude`   | do not contain it             |
//! | `^java`     | `Prefix`           | start with it                 |
//! | `!^earlang` | `InversePrefix`    | do not start with it          |
//! | `.js$`      | `Suffix`           | end with it                   |
//! | `!.go$`     | `InverseSuffix`    | do not end with it            |
//!
//! Whitespace separates AND-ed tokens, a spaced `|` separates OR-groups, and
//! double quotes keep spaces inside one token (`="hello world"`).

use crate::util::normalize::fold;

/// How a token is compared to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Fuzzy,
    Exact,
    Include,
    InverseInclude,
    Prefix,
    InversePrefix,
    Suffix,
    InverseSuffix,
}

impl Operator {
    /// Inverse operators match by absence.
    pub fn is_inverse(&self) -> bool {
        matches!(
            self,
            Operator::InverseInclude | Operator::InversePrefix | Operator::InverseSuffix
        )
    }
}

/// One folded query token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub op: Operator,
    pub pattern: Vec<char>,
}

/// OR-groups of AND-ed tokens. Empty when the query has no usable token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedQuery {
    pub groups: Vec<Vec<Token>>,
}

impl ParsedQuery {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// True when every token is a bare fuzzy word.
    pub fn is_plain(&self) -> bool {
        self.groups.iter().flatten().all(|t| t.op == Operator::Fuzzy)
    }

    /// The whole trimmed query as one fuzzy token.
    pub fn fuzzy(query: &str, ignore_diacritics: bool) -> Self {
        let pattern = fold(query.trim(), ignore_diacritics);
        if pattern.is_empty() {
            return ParsedQuery::default();
        }
        ParsedQuery {
            groups: vec![vec![Token {
                op: Operator::Fuzzy,
                pattern,
            }]],
        }
    }

    /// Parse the extended syntax.
    pub fn extended(query: &str, ignore_diacritics: bool) -> Self {
        let groups = split_groups(query)
            .into_iter()
            .map(|group| {
                let mut tokens: Vec<Token> = Vec::new();
                for raw in split_tokens(group) {
                    if let Some(token) = parse_token(raw, ignore_diacritics) {
                        // Repeated tokens would only skew the mean score
                        if !tokens.contains(&token) {
                            tokens.push(token);
                        }
                    }
                }
                tokens
            })
            .filter(|tokens| !tokens.is_empty())
            .collect();
        ParsedQuery { groups }
    }
}

/// Split on a `|` with whitespace on both sides. A bare `a|b` is one token.
fn split_groups(query: &str) -> Vec<&str> {
    let mut groups = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = query.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);
        if c == '|' && prev.is_some_and(char::is_whitespace) && next.is_some_and(char::is_whitespace) {
            groups.push(&query[start..i]);
            start = i + 1;
        }
        prev = Some(c);
    }
    groups.push(&query[start..]);

    groups.into_iter().map(str::trim).filter(|g| !g.is_empty()).collect()
}

/// Split on spaces that are not inside double quotes.
fn split_tokens(group: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut in_quotes = false;
    let mut start: Option<usize> = None;

    for (i, c) in group.char_indices() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                start.get_or_insert(i);
            }
            ' ' if !in_quotes => {
                if let Some(s) = start.take() {
                    tokens.push(&group[s..i]);
                }
            }
            _ => {
                start.get_or_insert(i);
            }
        }
    }
    if let Some(s) = start {
        tokens.push(&group[s..]);
    }
    tokens
}

/// Classify a raw token. Order matters: `!^x` must win over `!x`.
fn parse_token(raw: &str, ignore_diacritics: bool) -> Option<Token> {
    let (op, body) = if let Some(rest) = raw.strip_prefix('=') {
        (Operator::Exact, rest)
    } else if let Some(rest) = raw.strip_prefix('\'') {
        (Operator::Include, rest)
    } else if let Some(rest) = raw.strip_prefix('^') {
        (Operator::Prefix, rest)
    } else if let Some(rest) = raw.strip_prefix("!^") {
        (Operator::InversePrefix, rest)
    } else if let Some(rest) = raw.strip_prefix('!').and_then(|r| strip_suffix_marker(r)) {
        (Operator::InverseSuffix, rest)
    } else if let Some(rest) = strip_suffix_marker(raw) {
        (Operator::Suffix, rest)
    } else if let Some(rest) = raw.strip_prefix('!') {
        (Operator::InverseInclude, rest)
    } else {
        (Operator::Fuzzy, raw)
    };

    let body = unquote(body).trim();
    if body.is_empty() {
        return None;
    }
    Some(Token {
        op,
        pattern: fold(body, ignore_diacritics),
    })
}

/// `x$` → `x`, leaving a lone `$` alone.
fn strip_suffix_marker(raw: &str) -> Option<&str> {
    raw.strip_suffix('$').filter(|rest| !rest.is_empty())
}

fn unquote(body: &str) -> &str {
    body.strip_prefix('"')
        .and_then(|b| b.strip_suffix('"'))
        .unwrap_or(body)
}
