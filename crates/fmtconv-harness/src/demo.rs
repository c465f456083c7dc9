//! The two interactive demo programs, written against an injected console.

use std::io::{BufRead, Write};

use fmtconv_core::convert::{
    FloatPrecision, IntWidth, number_to_text, reinterpret_word, text_to_float, text_to_integer,
    to_fixed_width, to_float,
};
use fmtconv_core::{Console, Value, render};

use crate::error::HarnessError;

/// Print banner, greeting, then ask for first name, last name and age.
pub fn run_greet<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    name: &str,
) -> Result<(), HarnessError> {
    console.emit("This is emit (no newline) | ")?;
    console.emit_line("This is emit_line (with newline)")?;
    console.printf(
        "This is printf with formatting: %d + %d = %d\n",
        &[Value::int(2), Value::int(3), Value::int(2 + 3)],
    )?;

    let message = render("hello, %s! Welcome to fmtconv.", &[Value::from(name)]);
    console.emit_line(&message)?;

    let mut first_name = Value::from("");
    let mut last_name = Value::from("");
    let mut age = [Value::int(0)];

    console.emit("Enter your first name: ")?;
    console.read_token(&mut first_name)?;

    console.emit("Enter your last name: ")?;
    console.read_line(&mut last_name)?;

    console.emit("Enter your age: ")?;
    console.read_formatted("%d", &mut age)?;

    let [age] = age;
    console.printf(
        "Hi %s %s, you are %d years old!\n",
        &[first_name, last_name, age],
    )?;
    console.flush()?;
    Ok(())
}

/// Inputs of the conversion walkthrough.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub int: i64,
    pub signed: i64,
    pub int_text: String,
    pub float_text: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            int: 32,
            signed: -42,
            int_text: "32".to_string(),
            float_text: "3.14159".to_string(),
        }
    }
}

/// Walk through width, float, text, and sign conversions, printing each.
pub fn run_convert<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    opts: &ConvertOptions,
) -> Result<(), HarnessError> {
    let i = Value::int(opts.int);
    let i8 = to_fixed_width(&i, IntWidth::W8, true);
    let i32 = to_fixed_width(&i, IntWidth::W32, true);
    let i64 = to_fixed_width(&i, IntWidth::W64, true);
    let ints = [i.clone(), i8, i32, i64];
    console.emit_values(&ints)?;
    console.printf("Type of i: %T , i8: %T, i32: %T, i64: %T\n", &ints)?;

    let str_int = Value::from(number_to_text(&i));
    console.printf(
        "The value is %s and type is %T\n",
        &[str_int.clone(), str_int],
    )?;

    let f32 = to_float(&i, FloatPrecision::Single);
    let f64 = to_float(&i, FloatPrecision::Double);
    console.printf(
        "f32 value: %f, f64 value: %g\n",
        &[f32.clone(), f64.clone()],
    )?;
    console.printf("Type f32:%T , f64:%T\n", &[f32, f64.clone()])?;

    let float_to_string = Value::from(render("%f", &[f64]));
    console.printf(
        "Type float_to_string : %T, Value: %s\n",
        &[float_to_string.clone(), float_to_string],
    )?;

    let unsigned = reinterpret_word(&Value::int(opts.signed), false);
    console.emit_values(&[Value::from("Type unsigned: "), unsigned.clone()])?;
    console.printf("Type unsigned:%T\n", &[unsigned])?;

    let text = Value::from(opts.int_text.as_str());
    match text_to_integer(&opts.int_text).into_result() {
        Ok(num) => console.printf(
            "String type:%T %s converted to type:%T integer: %d\n",
            &[text.clone(), text, Value::int(num), Value::int(num)],
        )?,
        Err(err) => console.printf("Error: %v\n", &[Value::from(err.to_string())])?,
    }

    match text_to_float(&opts.float_text, FloatPrecision::Double).into_result() {
        Ok(parsed) => console.printf(
            "new f64 value is %f with type %T\n",
            &[Value::Float64(parsed), Value::Float64(parsed)],
        )?,
        Err(err) => console.printf("Error: %v\n", &[Value::from(err.to_string())])?,
    }
    console.flush()?;
    Ok(())
}
