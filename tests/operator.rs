#[macro_use]
mod common;

#[cfg(test)]
mod operator {
    #[test]
    fn add_numbers_and_concatenate_strings() {
        assert_runs!(
            r#"
            print 0 + 0;
            print 123 + 456;
            print "str" + "ing";
            print "" + "str";
            "#,
            "0", "579", "string", "str",
        );
    }

    #[test]
    fn add_rejects_mismatched_operand_types() {
        assert_errors!("print 1 + \"1\";", "Operands must be two numbers or two strings.");
        assert_errors!("print \"1\" + 1;", "Operands must be two numbers or two strings.");
        assert_errors!("print true + 1;", "Operands must be two numbers or two strings.");
        assert_errors!("print nil + 1;", "Operands must be two numbers or two strings.");
    }

    #[test]
    fn subtract_numbers() {
        assert_runs!(
            r#"
            print 1 - 0;
            print 5 - 5;
            print 1 - 5;
            print 10 - 3;
            "#,
            "1", "0", "-4", "7",
        );
    }

    #[test]
    fn subtract_requires_numbers() {
        assert_errors!("print \"1\" - 1;", "Operand must be a number.");
        assert_errors!("print 1 - \"1\";", "Operand must be a number.");
    }

    #[test]
    fn multiply_numbers() {
        assert_runs!(
            r#"
            print 5 * 3;
            print 1.851 * 2;
            print 0 * 5;
            "#,
            "15", "3.702", "0",
        );
    }

    #[test]
    fn divide_numbers() {
        assert_runs!(
            r#"
            print 8 / 2;
            print 5 / 5;
            print 1 / 4;
            "#,
            "4", "1", "0.25",
        );
    }

    #[test]
    fn divide_by_exact_zero_is_a_runtime_error() {
        assert_errors!("print 1 / 0;", "Can't divide by zero.");
        assert_errors!("print 0 / 0;", "Can't divide by zero.");
    }

    #[test]
    fn modulo_computes_the_floating_remainder() {
        assert_runs!(
            r#"
            print 5 % 2;
            print 7.5 % 2;
            print 4 % 2;
            "#,
            "1", "1.5", "0",
        );
    }

    #[test]
    fn modulo_by_exact_zero_is_a_runtime_error() {
        assert_errors!("print 1 % 0;", "Can't divide by zero.");
    }

    #[test]
    fn comparisons_require_two_numbers() {
        assert_runs!(
            r#"
            print 1 < 2;
            print 2 < 1;
            print 1 <= 1;
            print 1 > 2;
            print 2 > 1;
            print 1 >= 1;
            "#,
            "true", "false", "true", "false", "true", "true",
        );
        assert_errors!("print 1 < \"1\";", "Operand must be a number.");
        assert_errors!("print true > false;", "Operand must be a number.");
    }

    #[test]
    fn equals_uses_structural_equality_without_coercion() {
        assert_runs!(
            r#"
            print 1 == 1;
            print 1 == 2;
            print "a" == "a";
            print "a" == "b";
            print true == true;
            print nil == nil;
            print 1 == "1";
            print nil == false;
            "#,
            "true", "false", "true", "false", "true", "true", "false", "false",
        );
    }

    #[test]
    fn not_equals_is_the_negation_of_equals() {
        assert_runs!(
            r#"
            print 1 != 2;
            print 1 != 1;
            print nil != false;
            "#,
            "true", "false", "true",
        );
    }

    #[test]
    fn unary_minus_negates_and_requires_a_number() {
        assert_runs!(
            r#"
            print -3;
            print -(-3);
            "#,
            "-3", "3",
        );
        assert_errors!("print -\"s\";", "Operand must be a number.");
        assert_errors!("print -nil;", "Operand must be a number.");
        assert_errors!("print -true;", "Operand must be a number.");
    }

    #[test]
    fn unary_bang_negates_truthiness() {
        assert_runs!(
            r#"
            print !true;
            print !false;
            print !nil;
            print !0;
            print !"";
            "#,
            "false", "true", "true", "false", "false",
        );
    }

    #[test]
    fn binary_minus_and_slash_are_left_associative() {
        assert_runs!(
            r#"
            print 10 - 3 - 2;
            print 100 / 10 / 2;
            "#,
            "5", "5",
        );
    }
}
