use pretty_assertions::assert_eq;
use vilang::{
    ast::{BinaryOperator, Expr, Identifier, Position, Program, Statement},
    error::SyntaxError,
    interpreter::{lexer::tokenize, parser::parse},
};

fn parse_source(source: &str) -> Result<Program, SyntaxError> {
    parse(&tokenize(source)?)
}

fn print_value(source: &str) -> Expr {
    match &parse_source(source).unwrap().statements[0] {
        Statement::Print { value, .. } => value.clone(),
        other => panic!("expected a print statement, found {other:?}"),
    }
}

fn number(value: f64, line: usize, column: usize) -> Expr {
    Expr::NumberLiteral { value,
                          position: Position::new(line, column) }
}

fn binary(left: Expr, op: BinaryOperator, right: Expr, column: usize) -> Expr {
    Expr::Binary { left: Box::new(left),
                   op,
                   right: Box::new(right),
                   position: Position::new(1, column) }
}

#[test]
fn assignment_statement() {
    let program = parse_source("gán tên = \"Lan\"").unwrap();

    assert_eq!(program.statements,
               vec![Statement::Assignment { target:   Identifier { name:     "tên".to_string(),
                                                                   position: Position::new(1, 5), },
                                            value:    Expr::StringLiteral { value:    "Lan".to_string(),
                                                                            position: Position::new(1, 11), },
                                            position: Position::new(1, 1), }]);
}

#[test]
fn term_is_left_associative() {
    // in (1 - 2 - 3)
    // 123456789012345
    assert_eq!(print_value("in (1 - 2 - 3)"),
               binary(binary(number(1.0, 1, 5), BinaryOperator::Sub, number(2.0, 1, 9), 7),
                      BinaryOperator::Sub,
                      number(3.0, 1, 13),
                      11));
}

#[test]
fn factor_binds_tighter_than_term() {
    // in (1 + 2 * 3)
    assert_eq!(print_value("in (1 + 2 * 3)"),
               binary(number(1.0, 1, 5),
                      BinaryOperator::Add,
                      binary(number(2.0, 1, 9), BinaryOperator::Mul, number(3.0, 1, 13), 11),
                      7));
}

#[test]
fn equality_binds_loosest() {
    let expr = print_value("in (1 + 1 == 2)");

    assert!(matches!(expr,
                     Expr::Binary { op: BinaryOperator::Equal,
                                    .. }));
}

#[test]
fn parentheses_override_precedence() {
    let expr = print_value("in ((1 + 2) * 3)");

    match &expr {
        Expr::Binary { left,
                       op: BinaryOperator::Mul,
                       .. } => {
            assert!(matches!(**left,
                             Expr::Binary { op: BinaryOperator::Add,
                                            .. }))
        },
        other => panic!("expected multiplication, found {other:?}"),
    }
}

#[test]
fn unary_minus_desugars_to_subtraction_from_zero() {
    assert_eq!(print_value("in (-5)"),
               binary(number(0.0, 1, 5), BinaryOperator::Sub, number(5.0, 1, 6), 5));
}

#[test]
fn unary_minus_nests() {
    assert_eq!(print_value("in (--5)"),
               binary(number(0.0, 1, 5),
                      BinaryOperator::Sub,
                      binary(number(0.0, 1, 6), BinaryOperator::Sub, number(5.0, 1, 7), 6),
                      5));
}

#[test]
fn if_with_else_on_one_line() {
    let program = parse_source("nếu (a) { in (1) } khác { in (2)\n in (3) }").unwrap();

    match &program.statements[..] {
        [Statement::If { then_branch,
                         else_branch: Some(else_branch),
                         .. }] => {
            assert_eq!(then_branch.len(), 1);
            assert_eq!(else_branch.len(), 2);
        },
        other => panic!("expected one if statement, found {other:?}"),
    }
}

#[test]
fn else_may_follow_on_a_later_line() {
    let program = parse_source("nếu (a) {\n}\n\nkhác {\n}\nin (1)").unwrap();

    assert_eq!(program.statements.len(), 2);
    assert!(matches!(program.statements[0],
                     Statement::If { else_branch: Some(_),
                                     .. }));
}

#[test]
fn else_body_may_open_on_a_later_line() {
    let program = parse_source("nếu (sai) { in (1) }\nkhác\n\n{ in (2) }").unwrap();

    match &program.statements[..] {
        [Statement::If { else_branch: Some(else_branch),
                         .. }] => assert_eq!(else_branch.len(), 1),
        other => panic!("expected one if statement with else, found {other:?}"),
    }
}

#[test]
fn if_without_else_leaves_following_statements() {
    let program = parse_source("nếu (a) { }\n\nin (1)").unwrap();

    assert_eq!(program.statements.len(), 2);
    assert!(matches!(program.statements[0],
                     Statement::If { else_branch: None,
                                     .. }));
}

#[test]
fn statements_may_share_a_line() {
    let program = parse_source("gán a = 1 in (a)").unwrap();

    assert_eq!(program.statements.len(), 2);
}

#[test]
fn blank_lines_and_comments_are_ignored() {
    let program = parse_source("\n\n// chú thích\ngán a = 1\n\n").unwrap();

    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.statements[0].position(), Position::new(4, 1));
}

#[test]
fn missing_closing_paren() {
    assert_eq!(parse_source("in (1\ngán a = 2"),
               Err(SyntaxError::UnexpectedToken { expected: "expected ')' after expression".to_string(),
                                                  found:    "newline".to_string(),
                                                  line:     1,
                                                  column:   6, }));
}

#[test]
fn missing_equals_in_assignment() {
    assert_eq!(parse_source("gán a 1"),
               Err(SyntaxError::UnexpectedToken { expected: "expected '=' after variable name".to_string(),
                                                  found:    "1".to_string(),
                                                  line:     1,
                                                  column:   7, }));
}

#[test]
fn end_of_input_inside_expression() {
    assert_eq!(parse_source("gán a = "),
               Err(SyntaxError::UnexpectedEndOfInput { expected: "expected expression".to_string(),
                                                       line:     1,
                                                       column:   9, }));
}

#[test]
fn unterminated_block_points_at_open_brace() {
    assert_eq!(parse_source("nếu (đúng) {\n  in (1)\n"),
               Err(SyntaxError::UnterminatedBlock { line: 1, column: 12 }));
}

#[test]
fn keyword_cannot_be_a_variable_name() {
    assert!(matches!(parse_source("gán in = 1"),
                     Err(SyntaxError::UnexpectedToken { .. })));
}

#[test]
fn reserved_keywords_are_rejected() {
    assert_eq!(parse_source("hàm f"),
               Err(SyntaxError::UnsupportedKeyword { keyword: "hàm".to_string(),
                                                     line:    1,
                                                     column:  1, }));
}

#[test]
fn expression_statements_are_not_allowed() {
    assert_eq!(parse_source("1 + 2"),
               Err(SyntaxError::UnexpectedToken { expected: "expected a statement".to_string(),
                                                  found:    "1".to_string(),
                                                  line:     1,
                                                  column:   1, }));
}
