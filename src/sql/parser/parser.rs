use super::ast::{Condition, Literal, Projection, Statement};
use super::lexer::{Keyword, Lexer, Token};
use crate::common::{Error, Result};
use crate::storage::TABLE_NAME;
use crate::{errinput, errmalformed};
use std::iter::Peekable;

/// Parses raw statement text into a typed statement.
///
/// Dispatch is by the leading keyword, checked in a fixed order: SELECT,
/// INSERT, UPDATE, DELETE, CREATE TABLE. Statements with no recognized
/// leading keyword fail as Unrecognized. UPDATE, DELETE, and CREATE TABLE
/// bodies are consumed without interpretation, since those statements are
/// acknowledged but never applied.
pub struct Parser<'a> {
    lexer: Peekable<Lexer<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new(statement: &'a str) -> Parser<'a> {
        Parser {
            lexer: Lexer::new(statement).peekable(),
        }
    }

    /// Parses the input as a single statement, with one optional trailing
    /// semicolon.
    pub fn parse(&mut self) -> Result<Statement> {
        let statement = self.parse_statement()?;
        self.next_if_token(Token::Semicolon);
        if let Some(token) = self.peek()? {
            return errinput!("unexpected token {token} after statement");
        }
        Ok(statement)
    }

    fn parse_statement(&mut self) -> Result<Statement> {
        match self.peek()? {
            Some(Token::Keyword(Keyword::Select)) => self.parse_select(),
            Some(Token::Keyword(Keyword::Insert)) => self.parse_insert(),
            Some(Token::Keyword(Keyword::Update)) => self.parse_update(),
            Some(Token::Keyword(Keyword::Delete)) => self.parse_delete(),
            Some(Token::Keyword(Keyword::Create)) => self.parse_create_table(),
            Some(token) => Err(Error::Unrecognized(token.to_string())),
            None => errinput!("empty statement"),
        }
    }

    fn parse_select(&mut self) -> Result<Statement> {
        self.expect(Token::Keyword(Keyword::Select))?;
        let columns = self.parse_projection()?;
        if self.next_if_token(Token::Keyword(Keyword::From)).is_none() {
            return errmalformed!("Invalid syntax. Expected 'FROM {TABLE_NAME}'.");
        }
        let table = self
            .parse_ident()
            .map_err(|_| Error::Malformed(format!("Invalid syntax. Expected 'FROM {TABLE_NAME}'.")))?;
        let filter = self.parse_where()?;
        Ok(Statement::Select {
            columns,
            table,
            filter,
        })
    }

    /// Parses `*` or a comma-separated column list.
    fn parse_projection(&mut self) -> Result<Projection> {
        if self.next_if_token(Token::Asterisk).is_some() {
            return Ok(Projection::All);
        }
        let column = |parser: &mut Self| {
            parser.parse_ident().map_err(|_| {
                Error::Malformed("Invalid syntax. Expected '*' or a column list.".to_string())
            })
        };
        let mut columns = vec![column(self)?];
        while self.next_if_token(Token::Comma).is_some() {
            columns.push(column(self)?);
        }
        Ok(Projection::Columns(columns))
    }

    /// Parses an optional WHERE clause. The restricted grammar accepts a
    /// single `column = value` or `column > integer` comparison; any other
    /// clause downgrades to Condition::Unsupported instead of erroring.
    fn parse_where(&mut self) -> Result<Option<Condition>> {
        if self.next_if_token(Token::Keyword(Keyword::Where)).is_none() {
            return Ok(None);
        }
        match self.parse_condition() {
            Ok(condition) => Ok(Some(condition)),
            Err(err) => {
                log::debug!("unsupported WHERE condition: {err}");
                self.skip_rest();
                Ok(Some(Condition::Unsupported))
            }
        }
    }

    fn parse_condition(&mut self) -> Result<Condition> {
        let column = self.parse_ident()?;
        let condition = match self.next()? {
            Token::Equal => Condition::Equal {
                column,
                value: self.parse_comparand()?,
            },
            Token::GreaterThan => match self.next()? {
                Token::Integer(value) => Condition::GreaterThan { column, value },
                token => return errinput!("unsupported comparison value {token}"),
            },
            token => return errinput!("unsupported operator {token}"),
        };
        // A supported condition is a single comparison; trailing tokens
        // (AND, a chained operator) make the whole condition unsupported.
        match self.peek()? {
            None | Some(Token::Semicolon) => Ok(condition),
            Some(token) => errinput!("unsupported condition after {token}"),
        }
    }

    /// Parses a single identifier (table or column name).
    fn parse_ident(&mut self) -> Result<String> {
        match self.next()? {
            Token::Ident(ident) => Ok(ident),
            token => errinput!("expected identifier, found {token}"),
        }
    }

    /// Parses the right-hand side of an equality comparison, as text.
    fn parse_comparand(&mut self) -> Result<String> {
        match self.next()? {
            Token::Ident(ident) => Ok(ident),
            Token::String(string) => Ok(string),
            Token::Integer(integer) => Ok(integer.to_string()),
            Token::Keyword(Keyword::Null) => Ok("null".to_string()),
            token => errinput!("unsupported comparison value {token}"),
        }
    }

    fn parse_insert(&mut self) -> Result<Statement> {
        let malformed = |_| Error::Malformed("Invalid INSERT syntax.".to_string());

        self.expect(Token::Keyword(Keyword::Insert))?;
        self.expect(Token::Keyword(Keyword::Into)).map_err(malformed)?;
        let table = self.parse_ident().map_err(malformed)?;

        self.expect(Token::OpenParen).map_err(malformed)?;
        let mut columns = vec![self.parse_ident().map_err(malformed)?];
        while self.next_if_token(Token::Comma).is_some() {
            columns.push(self.parse_ident().map_err(malformed)?);
        }
        self.expect(Token::CloseParen).map_err(malformed)?;

        self.expect(Token::Keyword(Keyword::Values)).map_err(malformed)?;
        self.expect(Token::OpenParen).map_err(malformed)?;
        let mut values = vec![self.parse_literal()?];
        while self.next_if_token(Token::Comma).is_some() {
            values.push(self.parse_literal()?);
        }
        self.expect(Token::CloseParen).map_err(malformed)?;

        Ok(Statement::Insert {
            table,
            columns,
            values,
        })
    }

    fn parse_literal(&mut self) -> Result<Literal> {
        match self.next().map_err(|_| Error::Malformed("Invalid INSERT syntax.".to_string()))? {
            Token::Integer(integer) => Ok(Literal::Integer(integer)),
            Token::String(string) => Ok(Literal::String(string)),
            Token::Keyword(Keyword::Null) => Ok(Literal::Null),
            // A bare unquoted word is taken as text.
            Token::Ident(ident) => Ok(Literal::String(ident)),
            _ => errmalformed!("Invalid INSERT syntax."),
        }
    }

    fn parse_update(&mut self) -> Result<Statement> {
        self.expect(Token::Keyword(Keyword::Update))?;
        self.skip_rest();
        Ok(Statement::Update)
    }

    fn parse_delete(&mut self) -> Result<Statement> {
        self.expect(Token::Keyword(Keyword::Delete))?;
        self.skip_rest();
        Ok(Statement::Delete)
    }

    /// The dispatch prefix is the two words `create table`; a lone CREATE
    /// is not a recognized command.
    fn parse_create_table(&mut self) -> Result<Statement> {
        self.expect(Token::Keyword(Keyword::Create))?;
        if self.next_if_token(Token::Keyword(Keyword::Table)).is_none() {
            return Err(Error::Unrecognized("create".to_string()));
        }
        self.skip_rest();
        Ok(Statement::CreateTable)
    }

    /// Consumes and discards the remaining tokens, including lex errors.
    fn skip_rest(&mut self) {
        while self.lexer.next().is_some() {}
    }

    fn next(&mut self) -> Result<Token> {
        self.lexer
            .next()
            .transpose()?
            .ok_or_else(|| Error::InvalidInput("unexpected end of statement".to_string()))
    }

    fn peek(&mut self) -> Result<Option<&Token>> {
        match self.lexer.peek() {
            Some(Ok(token)) => Ok(Some(token)),
            Some(Err(err)) => Err(err.clone()),
            None => Ok(None),
        }
    }

    /// Returns the next token if it equals the given token.
    fn next_if_token(&mut self, token: Token) -> Option<Token> {
        match self
            .lexer
            .next_if(|item| matches!(item, Ok(t) if *t == token))?
        {
            Ok(token) => Some(token),
            Err(_) => None,
        }
    }

    fn expect(&mut self, expected: Token) -> Result<()> {
        let token = self.next()?;
        if token != expected {
            return errinput!("expected {expected}, found {token}");
        }
        Ok(())
    }
}
