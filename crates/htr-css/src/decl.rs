//! Declaration extraction.
//!
//! Parses a `style` attribute blob as a CSS declaration list. Only
//! declarations survive: comments, at-rules, and qualified rules (selector +
//! block) are discarded. A declaration value with a top-level `:` token is
//! rejected — that is the "missed semicolon" class of malformed input — as is
//! anything the tokenizer itself rejects.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, ParseErrorKind, Parser, ParserInput,
    ParserState, QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
};

use crate::CssParseError;

/// A single `property: value` pair, property as authored (kebab-case).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Extract the ordered declarations from a CSS blob.
pub fn extract_declarations(css: &str) -> Result<Vec<Declaration>, CssParseError> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut extractor = DeclarationExtractor;
    let mut declarations = Vec::new();

    for item in RuleBodyParser::new(&mut parser, &mut extractor) {
        match item {
            Ok(Some(declaration)) => declarations.push(declaration),
            // A discarded rule or at-rule.
            Ok(None) => {}
            Err((error, _slice)) => return Err(to_css_error(error)),
        }
    }

    Ok(declarations)
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ExtractError {
    UnexpectedColon,
}

fn to_css_error(error: ParseError<'_, ExtractError>) -> CssParseError {
    let message = match &error.kind {
        ParseErrorKind::Custom(ExtractError::UnexpectedColon) => {
            "unexpected ':' in declaration value (missed semicolon?)".to_string()
        }
        ParseErrorKind::Basic(kind) => format!("{kind:?}"),
    };
    CssParseError {
        message,
        line: error.location.line as usize + 1,
        column: error.location.column as usize,
    }
}

/// `RuleBodyParser` callbacks. Declarations produce `Some`, everything else
/// `None`; a declaration that fails falls back to qualified-rule parsing, so
/// `a { color: red }` is discarded while `not: valid: css:::` is an error
/// (no block follows the failed declaration).
struct DeclarationExtractor;

impl<'i> DeclarationParser<'i> for DeclarationExtractor {
    type Declaration = Option<Declaration>;
    type Error = ExtractError;

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, ExtractError>> {
        let start = input.position();
        loop {
            let is_colon = match input.next() {
                Ok(token) => matches!(token, cssparser::Token::Colon),
                Err(_) => break,
            };
            if is_colon {
                return Err(input.new_custom_error(ExtractError::UnexpectedColon));
            }
        }
        let value = input.slice_from(start).trim().to_string();
        Ok(Some(Declaration {
            property: name.to_string(),
            value,
        }))
    }
}

impl<'i> AtRuleParser<'i> for DeclarationExtractor {
    type Prelude = ();
    type AtRule = Option<Declaration>;
    type Error = ExtractError;

    fn parse_prelude<'t>(
        &mut self,
        _name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<(), ParseError<'i, ExtractError>> {
        consume_remaining(input);
        Ok(())
    }

    fn rule_without_block(&mut self, _prelude: (), _start: &ParserState) -> Result<Self::AtRule, ()> {
        Ok(None)
    }

    fn parse_block<'t>(
        &mut self,
        _prelude: (),
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, ExtractError>> {
        consume_remaining(input);
        Ok(None)
    }
}

impl<'i> QualifiedRuleParser<'i> for DeclarationExtractor {
    type Prelude = ();
    type QualifiedRule = Option<Declaration>;
    type Error = ExtractError;

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<(), ParseError<'i, ExtractError>> {
        consume_remaining(input);
        Ok(())
    }

    fn parse_block<'t>(
        &mut self,
        _prelude: (),
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, ExtractError>> {
        consume_remaining(input);
        Ok(None)
    }
}

impl<'i> RuleBodyItemParser<'i, Option<Declaration>, ExtractError> for DeclarationExtractor {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        true
    }
}

fn consume_remaining(input: &mut Parser<'_, '_>) {
    while input.next().is_ok() {}
}
