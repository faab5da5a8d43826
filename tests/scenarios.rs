//! Black-box end-to-end scenarios against the public `Interpreter` API.

use wisp_scheme::{ErrorKind, Interpreter};

#[test]
fn quoting_returns_the_literal_form_unevaluated() {
    let mut interp = Interpreter::new();
    assert_eq!(interp.run("(quote (a b c))").unwrap(), "(a b c)");
    assert_eq!(interp.run("'(1 2 3)").unwrap(), "(1 2 3)");
    assert_eq!(interp.run("'foo").unwrap(), "foo");
}

#[test]
fn arithmetic_and_comparison_chain_correctly() {
    let mut interp = Interpreter::new();
    assert_eq!(interp.run("(+ 1 2 (* 3 4))").unwrap(), "15");
    assert_eq!(interp.run("(< 1 2 3 4)").unwrap(), "#t");
    assert_eq!(interp.run("(< 1 3 2)").unwrap(), "#f");
    assert_eq!(interp.run("(max 3 1 4 1 5)").unwrap(), "5");
    assert_eq!(interp.run("(abs -7)").unwrap(), "7");
}

#[test]
fn define_and_set_persist_across_separate_run_calls() {
    let mut interp = Interpreter::new();
    interp.run("(define counter 0)").unwrap();
    interp.run("(set! counter (+ counter 1))").unwrap();
    interp.run("(set! counter (+ counter 1))").unwrap();
    assert_eq!(interp.run("counter").unwrap(), "2");
}

#[test]
fn lambda_and_closures_capture_their_defining_scope() {
    let mut interp = Interpreter::new();
    interp
        .run("(define make-counter (lambda () (define n 0) (lambda () (set! n (+ n 1)) n)))")
        .unwrap();
    interp.run("(define next (make-counter))").unwrap();
    assert_eq!(interp.run("(next)").unwrap(), "1");
    assert_eq!(interp.run("(next)").unwrap(), "2");
    assert_eq!(interp.run("(next)").unwrap(), "3");
}

#[test]
fn recursive_procedure_via_self_reference_in_global_scope() {
    let mut interp = Interpreter::new();
    interp
        .run("(define fact (lambda (n) (if (= n 0) 1 (* n (fact (- n 1))))))")
        .unwrap();
    assert_eq!(interp.run("(fact 5)").unwrap(), "120");
}

#[test]
fn define_procedure_header_shorthand_supports_recursion() {
    let mut interp = Interpreter::new();
    interp
        .run("(define (fact n) (if (<= n 1) 1 (* n (fact (- n 1)))))")
        .unwrap();
    assert_eq!(interp.run("(fact 5)").unwrap(), "120");
}

#[test]
fn conditionals_short_circuit_the_untaken_branch() {
    let mut interp = Interpreter::new();
    assert_eq!(interp.run("(if #t 1 2)").unwrap(), "1");
    assert_eq!(interp.run("(if #f 1 2)").unwrap(), "2");
    assert_eq!(interp.run("(if #f 1)").unwrap(), "()");
    assert_eq!(interp.run("(and 1 2 #f 3)").unwrap(), "#f");
    assert_eq!(interp.run("(or #f #f 7)").unwrap(), "7");
}

#[test]
fn if_with_only_a_condition_evaluates_neither_branch() {
    let mut interp = Interpreter::new();
    assert_eq!(interp.run("(if #t)").unwrap(), "(())");
}

#[test]
fn applying_a_lambda_immediately() {
    let mut interp = Interpreter::new();
    assert_eq!(interp.run("((lambda (x) (* x x)) 7)").unwrap(), "49");
}

#[test]
fn pair_and_list_procedures_build_and_inspect_structure() {
    let mut interp = Interpreter::new();
    assert_eq!(interp.run("(cons 1 2)").unwrap(), "(1 . 2)");
    assert_eq!(interp.run("(car (list 1 2 3))").unwrap(), "1");
    assert_eq!(interp.run("(list-ref (list 10 20 30) 2)").unwrap(), "30");
    assert_eq!(interp.run("(list-tail (list 1 2 3 4) 2)").unwrap(), "(3 4)");
    assert_eq!(interp.run("(pair? (cons 1 2))").unwrap(), "#t");
    // `pair?` is element-count based, not shape based: a three-element list
    // and a one-element list both fail it even though both are Cells.
    assert_eq!(interp.run("(pair? (list 1 2 3))").unwrap(), "#f");
    assert_eq!(interp.run("(pair? (list 1))").unwrap(), "#f");
    assert_eq!(interp.run("(null? '())").unwrap(), "#t");
}

#[test]
fn mutation_is_visible_to_every_alias_of_the_same_pair() {
    let mut interp = Interpreter::new();
    interp.run("(define a (cons 1 2))").unwrap();
    interp.run("(define b a)").unwrap();
    interp.run("(set-car! a 99)").unwrap();
    assert_eq!(interp.run("(car b)").unwrap(), "99");
}

#[test]
fn each_error_category_surfaces_with_the_right_kind() {
    let mut interp = Interpreter::new();

    let syntax_err = interp.run("(quote a b)").unwrap_err();
    assert_eq!(syntax_err.kind(), ErrorKind::SyntaxError);

    let name_err = interp.run("totally-unbound").unwrap_err();
    assert_eq!(name_err.kind(), ErrorKind::NameError);

    let runtime_err = interp.run("(car 5)").unwrap_err();
    assert_eq!(runtime_err.kind(), ErrorKind::RuntimeError);

    let div_zero_err = interp.run("(/ 1 0)").unwrap_err();
    assert_eq!(div_zero_err.kind(), ErrorKind::RuntimeError);
}

#[test]
fn unbalanced_parentheses_is_a_syntax_error() {
    let mut interp = Interpreter::new();
    assert!(interp.run("(+ 1 2").is_err());
}

#[test]
fn garbage_collection_does_not_disturb_live_state() {
    let mut interp = Interpreter::new();
    interp.run("(define keep (list 1 2 3))").unwrap();
    for i in 0..50 {
        interp.run(&format!("(list {i} {i} {i})")).unwrap();
    }
    assert_eq!(interp.run("keep").unwrap(), "(1 2 3)");
}
