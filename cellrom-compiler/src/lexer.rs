//! # Lexer for transition-table lines

use logos::Logos;

/// Tokens of one transition-table line
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip whitespace
#[logos(skip r"#[^\n]*")] // Skip comments
pub enum Token {
    /// Cell state value
    #[regex(r"[0-9]+", |lex| lex.slice().parse().ok())]
    Number(u64),

    /// Separator between the input group and the output
    #[token(":")]
    Colon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_rule_line() {
        let tokens: Vec<_> = Token::lexer("0 1 0 1 0 : 1").collect();
        assert_eq!(tokens.len(), 7);
        assert_eq!(tokens[0], Ok(Token::Number(0)));
        assert_eq!(tokens[5], Ok(Token::Colon));
        assert_eq!(tokens[6], Ok(Token::Number(1)));
    }

    #[test]
    fn test_lex_skips_comment_tail() {
        let tokens: Vec<_> = Token::lexer("1 1 : 0 # stays alive").collect();
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_lex_comment_only_line() {
        let tokens: Vec<_> = Token::lexer("# nothing here").collect();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_lex_rejects_garbage() {
        let tokens: Vec<_> = Token::lexer("0 x 0 : 1").collect();
        assert!(tokens.iter().any(|t| t.is_err()));
    }
}
