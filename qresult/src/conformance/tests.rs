//! Unit tests for shape-directed conformance checking.

use rstest::{fixture, rstest};
use rust_decimal::Decimal;

use super::{ConformanceError, check};
use crate::shape::{Shape, TypeTag};
use crate::value::Value;

#[fixture]
fn address_shape() -> Shape {
    Shape::tuple([
        Shape::of(TypeTag::Text),
        Shape::of(TypeTag::Int),
        Shape::list(Shape::of(TypeTag::Decimal)),
    ])
}

fn decimals(cents: &[i64]) -> Value {
    Value::list(cents.iter().map(|c| Value::Decimal(Decimal::new(*c, 2))))
}

#[rstest]
fn accepts_a_matching_address(address_shape: Shape) {
    let value = Value::tuple([
        Value::from("123 Main St"),
        Value::Int(2),
        decimals(&[34_500, 56_700]),
    ]);
    assert_eq!(check(&value, &address_shape), Ok(()));
}

#[rstest]
fn flags_a_wrongly_typed_element(address_shape: Shape) {
    let value = Value::tuple([
        Value::from("123 Main St"),
        Value::from("2"),
        decimals(&[34_500]),
    ]);
    assert_eq!(
        check(&value, &address_shape),
        Err(ConformanceError::TupleElement {
            index: 1,
            value: Value::from("2"),
            shape: Shape::of(TypeTag::Int),
        })
    );
}

#[rstest]
fn reports_arity_before_elements(address_shape: Shape) {
    let value = Value::tuple([Value::Int(1), Value::Int(2)]);
    assert_eq!(
        check(&value, &address_shape),
        Err(ConformanceError::TupleArity {
            expected: 3,
            found: 2,
        })
    );
}

#[rstest]
fn rejects_the_no_value_marker() {
    assert_eq!(check(&Value::None, &Shape::Any), Err(ConformanceError::NoValue));
}

#[rstest]
fn nested_none_is_checked_like_any_value() {
    let shape = Shape::tuple([Shape::optional(Shape::of(TypeTag::Text))]);
    assert_eq!(check(&Value::tuple([Value::None]), &shape), Ok(()));
}

#[rstest]
#[case::first(Value::from("cool"))]
#[case::second(Value::Int(123))]
#[case::third(decimals(&[34_500, 56_700]))]
fn unions_accept_any_alternative(#[case] value: Value) {
    let shape = Shape::union([
        Shape::of(TypeTag::Text),
        Shape::of(TypeTag::Int),
        Shape::list(Shape::of(TypeTag::Decimal)),
    ]);
    assert_eq!(check(&value, &shape), Ok(()));
}

#[rstest]
fn union_failures_name_every_alternative() {
    let alternatives = vec![Shape::of(TypeTag::Text), Shape::of(TypeTag::Int)];
    let shape = Shape::Union(alternatives.clone());
    let err = check(&Value::Float(1.5), &shape).expect_err("float is not text or int");
    assert_eq!(
        err,
        ConformanceError::NoAlternative {
            value: Value::Float(1.5),
            alternatives,
        }
    );
    assert_eq!(err.to_string(), "value 1.5 must match one of [text, int]");
}

#[rstest]
fn empty_lists_conform() {
    let shape = Shape::list(Shape::of(TypeTag::Decimal));
    assert_eq!(check(&Value::list([]), &shape), Ok(()));
}

#[rstest]
fn lists_report_the_first_bad_element() {
    let shape = Shape::list(Shape::of(TypeTag::Int));
    let value = Value::list([Value::Int(1), Value::Bool(true), Value::from("x")]);
    assert_eq!(
        check(&value, &shape),
        Err(ConformanceError::ListElement {
            index: 2,
            value: Value::from("x"),
            shape: Shape::of(TypeTag::Int),
        })
    );
}

#[rstest]
#[case::tuple_for_list(Shape::list(Shape::Any), Value::tuple([Value::Int(1)]), "must be a list")]
#[case::list_for_tuple(Shape::tuple([Shape::Any]), Value::list([Value::Int(1)]), "must be a tuple")]
#[case::plain(Shape::of(TypeTag::Text), Value::Int(3), "of type int does not match expected text")]
fn structural_mismatches_are_described(
    #[case] shape: Shape,
    #[case] value: Value,
    #[case] fragment: &str,
) {
    let err = check(&value, &shape).expect_err("value should not conform");
    assert!(
        err.to_string().contains(fragment),
        "unexpected message: {err}"
    );
}

#[rstest]
fn any_accepts_everything() {
    assert_eq!(check(&Value::opaque("Parcel", "p"), &Shape::Any), Ok(()));
}
