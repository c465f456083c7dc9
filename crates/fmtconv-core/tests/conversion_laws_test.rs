//! Integration test: conversion laws across the public API.
//!
//! Run: cargo test -p fmtconv-core --test conversion_laws_test

use fmtconv_core::convert::{
    FloatPrecision, IntWidth, number_to_text, text_to_float, text_to_integer, to_fixed_width,
    to_float,
};
use fmtconv_core::{ConversionFailure, Value, render};

const TWO_64: i128 = 1 << 64;

#[test]
fn signed_to_unsigned_64_adds_two_to_the_64() {
    let samples = [
        i64::MIN,
        i64::MIN + 1,
        -4_294_967_296,
        -42,
        -1,
        0,
        1,
        42,
        i64::MAX - 1,
        i64::MAX,
    ];
    for v in samples {
        let expected = if v < 0 {
            i128::from(v) + TWO_64
        } else {
            i128::from(v)
        };
        let got = to_fixed_width(&Value::Int64(v), IntWidth::W64, false);
        assert_eq!(got.integer_bits(), Some(expected), "v = {v}");
        assert_eq!(got, Value::Uint64(expected as u64));
    }
}

#[test]
fn canonical_integer_text_round_trips() {
    for s in [
        "0",
        "7",
        "-7",
        "32",
        "1000000",
        "-9223372036854775808",
        "9223372036854775807",
    ] {
        let parsed = text_to_integer(s);
        assert!(parsed.is_ok(), "{s}");
        assert_eq!(number_to_text(&Value::Int64(parsed.value)), s);
    }
}

#[test]
fn non_integers_fail_with_zero_value() {
    for s in ["", "abc", "3.14"] {
        let res = text_to_integer(s);
        assert_eq!(res.value, 0);
        let err = res.error.expect("must fail");
        assert_eq!(err.failure, ConversionFailure::Syntax);
        assert_eq!(err.input, s);
    }
}

#[test]
fn parsed_float_renders_six_fraction_digits() {
    let res = text_to_float("3.14159", FloatPrecision::Double);
    assert!(res.is_ok());
    assert_eq!(render("%f", &[Value::Float64(res.value)]), "3.141590");
    assert_eq!(
        render(
            "value is %f with type %T",
            &[Value::Float64(res.value), Value::Float64(res.value)]
        ),
        "value is 3.141590 with type float64"
    );
}

#[test]
fn width_boundaries() {
    assert_eq!(to_fixed_width(&Value::int(256), IntWidth::W8, true), Value::Int8(0));
    assert_eq!(to_fixed_width(&Value::int(-1), IntWidth::W8, false), Value::Uint8(255));
}

#[test]
fn int_conversions_render_like_the_demo() {
    let i = Value::int(32);
    let i8v = to_fixed_width(&i, IntWidth::W8, true);
    let i32v = to_fixed_width(&i, IntWidth::W32, true);
    let i64v = to_fixed_width(&i, IntWidth::W64, true);
    assert_eq!(
        render(
            "Type of i: %T , i8: %T, i32: %T, i64: %T",
            &[i.clone(), i8v, i32v, i64v]
        ),
        "Type of i: int , i8: int8, i32: int32, i64: int64"
    );

    let f32v = to_float(&i, FloatPrecision::Single);
    let f64v = to_float(&i, FloatPrecision::Double);
    assert_eq!(
        render("f32 value: %f, f64 value: %g", &[f32v.clone(), f64v.clone()]),
        "f32 value: 32.000000, f64 value: 32"
    );
    assert_eq!(render("%T %T", &[f32v, f64v]), "float32 float64");

    let text = number_to_text(&i);
    assert_eq!(
        render("The value is %s and type is %T", &[text.clone().into(), text.into()]),
        "The value is 32 and type is string"
    );
}
