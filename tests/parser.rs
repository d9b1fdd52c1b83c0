use foldcalc::{
    error::ParseError,
    interpreter::{
        cursor::Cursor,
        parser::{
            argument::{MAX_DECIMAL_DIGITS, parse_argument},
            keyword::{KeywordMatch, SQRT, match_keyword},
            operation::parse_operation,
        },
    },
    operation::{Arity, Operation},
};

#[test]
fn every_operation_is_unary_or_binary() {
    for op in Operation::ALL {
        let count = op.arity().count();
        assert!(count == 1 || count == 2, "{op} has arity {count}");
    }

    let unary: Vec<_> = Operation::ALL.into_iter()
                                      .filter(|op| op.arity() == Arity::Unary)
                                      .collect();
    assert_eq!(unary, vec![Operation::Negate, Operation::SquareRoot]);
}

#[test]
fn symbols_map_back_to_their_operation() {
    for op in Operation::ALL {
        if let [symbol] = op.keyword().as_bytes() {
            assert_eq!(Operation::from_symbol(*symbol), Some(op));
        }
    }
    assert_eq!(Operation::from_symbol(b'S'), None);
    assert_eq!(Operation::from_symbol(b'('), None);
}

#[test]
fn keyword_rollback_distance() {
    let cases = [("S", 1), ("SQ", 2), ("SQR", 3), ("SX", 2), ("SQX", 3), ("SQRX", 4), ("Q", 1)];

    for (text, rollback) in cases {
        let mut cursor = Cursor::new(text);
        assert_eq!(match_keyword(&mut cursor, SQRT),
                   KeywordMatch::Mismatch { rollback },
                   "{text:?}");
        assert_eq!(cursor.position(), rollback);
    }
}

#[test]
fn keyword_match_stops_after_keyword() {
    let mut cursor = Cursor::new("SQRT 4");
    assert_eq!(match_keyword(&mut cursor, SQRT), KeywordMatch::Matched);
    assert_eq!(cursor.rest(), " 4");
}

#[test]
fn recognizer_rolls_back_to_line_start() {
    for text in ["SQX", "(SQX", "(SQRX)", "S", "(", "?"] {
        let mut cursor = Cursor::new(text);
        assert_eq!(parse_operation(&mut cursor),
                   Err(ParseError::UnknownOperation { text: text.to_string() }));
        assert_eq!(cursor.position(), 0, "{text:?}");
    }
}

#[test]
fn recognizer_keeps_fold_flag_on_failure() {
    let mut cursor = Cursor::new("(SQ");
    assert!(parse_operation(&mut cursor).is_err());
    assert!(cursor.is_fold());
}

#[test]
fn recognizer_symbols() {
    let cases = [("+1", Operation::Add),
                 ("-1", Operation::Subtract),
                 ("*1", Operation::Multiply),
                 ("/1", Operation::Divide),
                 ("%1", Operation::Remainder),
                 ("_", Operation::Negate),
                 ("^1", Operation::Power),
                 ("SQRT", Operation::SquareRoot)];

    for (text, expected) in cases {
        let mut cursor = Cursor::new(text);
        assert_eq!(parse_operation(&mut cursor), Ok(expected));
        assert!(!cursor.is_fold());
        assert_eq!(cursor.position(), expected.keyword().len());
    }
}

#[test]
fn recognizer_leaves_leading_digit_for_argument() {
    let mut cursor = Cursor::new("7.5");
    assert_eq!(parse_operation(&mut cursor), Ok(Operation::Set));
    assert_eq!(cursor.position(), 0);
    assert_eq!(parse_argument(&mut cursor), Ok(7.5));
}

#[test]
fn recognizer_folded_operations() {
    let mut cursor = Cursor::new("(SQRT)");
    assert_eq!(parse_operation(&mut cursor), Ok(Operation::SquareRoot));
    assert!(cursor.is_fold());
    assert!(cursor.is_at_end());

    let mut cursor = Cursor::new("(^)2");
    assert_eq!(parse_operation(&mut cursor), Ok(Operation::Power));
    assert_eq!(cursor.rest(), "2");

    let mut cursor = Cursor::new("(^ 2");
    assert_eq!(parse_operation(&mut cursor),
               Err(ParseError::IncorrectFold { line: "(^ 2".to_string() }));
}

#[test]
fn argument_integer_and_fraction() {
    let mut cursor = Cursor::new("1024");
    assert_eq!(parse_argument(&mut cursor), Ok(1024.0));

    let mut cursor = Cursor::new("3.5");
    assert_eq!(parse_argument(&mut cursor), Ok(3.5));

    let mut cursor = Cursor::new("8.");
    assert_eq!(parse_argument(&mut cursor), Ok(8.0));
    assert!(cursor.is_at_end());

    let mut cursor = Cursor::new("0.001");
    let value = parse_argument(&mut cursor).unwrap();
    assert!((value - 0.001).abs() < 1e-15);
}

#[test]
fn argument_empty_token_consumes_nothing() {
    let mut cursor = Cursor::new("");
    assert_eq!(parse_argument(&mut cursor), Ok(0.0));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn argument_space_handling_depends_on_fold() {
    let mut cursor = Cursor::new("12 3");
    assert_eq!(parse_argument(&mut cursor),
               Err(ParseError::InvalidArgument { position: 2,
                                                 suffix:   " 3".to_string(), }));

    let mut cursor = Cursor::new("(+)12 3");
    parse_operation(&mut cursor).unwrap();
    assert_eq!(parse_argument(&mut cursor), Ok(12.0));
    assert_eq!(cursor.rest(), " 3");
}

#[test]
fn argument_digit_limit() {
    let digits = "9".repeat(MAX_DECIMAL_DIGITS);

    let mut cursor = Cursor::new(&digits);
    assert_eq!(parse_argument(&mut cursor), Ok(9_999_999_999.0));

    let longer = format!("{digits}9");
    let mut cursor = Cursor::new(&longer);
    assert_eq!(parse_argument(&mut cursor),
               Err(ParseError::ArgumentNotFullyParsed { suffix: "9".to_string() }));

    // Leading zeros count towards the limit, the decimal point does not.
    let mut cursor = Cursor::new("00000000001");
    assert!(parse_argument(&mut cursor).is_err());
    let mut cursor = Cursor::new("12345.67890");
    assert!(parse_argument(&mut cursor).is_ok());
    let mut cursor = Cursor::new("123456789.01");
    assert_eq!(parse_argument(&mut cursor),
               Err(ParseError::ArgumentNotFullyParsed { suffix: "1".to_string() }));
}

#[test]
fn argument_rejects_second_decimal_point() {
    let mut cursor = Cursor::new("1.2.3");
    assert_eq!(parse_argument(&mut cursor),
               Err(ParseError::InvalidArgument { position: 3,
                                                 suffix:   ".3".to_string(), }));
}
