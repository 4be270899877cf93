#[macro_use]
mod common;

#[cfg(test)]
mod variable {
    #[test]
    fn redeclaring_in_the_same_scope_is_allowed_and_shadows() {
        assert_runs!("var a = 1; var a = 2; print a;", "2");
    }

    #[test]
    fn uninitialized_variable_defaults_to_nil() {
        assert_runs!("var a; print a;", "none");
    }

    #[test]
    fn shadowing_in_a_nested_block_does_not_affect_the_outer_binding() {
        assert_runs!(
            "var a = \"global\"; { var a = \"shadow\"; print a; } print a;",
            "shadow", "global",
        );
    }

    #[test]
    fn assignment_mutates_the_nearest_enclosing_binding() {
        assert_runs!(
            "var a = \"global\"; { a = \"shadow\"; print a; } print a;",
            "shadow", "shadow",
        );
    }

    #[test]
    fn sibling_blocks_each_get_a_fresh_scope() {
        assert_runs!(
            "{ var a = \"first\"; print a; } { var a = \"second\"; print a; }",
            "first", "second",
        );
    }

    #[test]
    fn global_declared_after_use_is_still_visible_by_the_time_it_runs() {
        assert_runs!(
            "var value = \"value\"; print value;",
            "value",
        );
    }

    #[test]
    fn a_variable_can_reference_another_global_in_its_initializer() {
        assert_runs!("var a = 1; var b = a + 1; print b;", "2");
    }

    #[test]
    fn referencing_itself_in_its_own_initializer_is_a_runtime_error() {
        // Bindings only become visible after their initializer finishes
        // evaluating, so `var a = a;` looks up `a` before it exists.
        assert_errors!("var a = a;", "Undefined variable 'a'.");
    }

    #[test]
    fn undefined_global_read_is_a_runtime_error() {
        assert_errors!("print notDefined;", "Undefined variable 'notDefined'.");
    }

    #[test]
    fn undefined_local_read_is_a_runtime_error() {
        assert_errors!("{ print notDefined; }", "Undefined variable 'notDefined'.");
    }

    #[test]
    fn statements_before_an_undefined_reference_still_run() {
        assert_runs!(
            r#"print "ok"; if (false) { print notDefined; }"#,
            "ok",
        );
    }

    #[test]
    fn assigning_to_an_undefined_name_is_a_runtime_error_and_does_not_define_it() {
        assert_errors!("a = 1;", "Undefined variable 'a'.");
    }
}
