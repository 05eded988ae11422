/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::escape::escape_string;
use wire_types::instant::Format;
use wire_types::{Instant, Number};

/// Writes a JSON object directly into a `String`.
///
/// Field serializers call one writer method per populated model field;
/// fields that are `None` are never written, so a model with no
/// populated fields serializes as `{}`.
pub struct JsonObjectWriter<'a> {
    json: &'a mut String,
    started: bool,
}

impl<'a> JsonObjectWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        output.push('{');
        Self {
            json: output,
            started: false,
        }
    }

    /// Writes the boolean `value` with the given `key`.
    pub fn boolean(&mut self, key: &str, value: bool) -> &mut Self {
        self.key(key);
        self.json.push_str(if value { "true" } else { "false" });
        self
    }

    /// Writes a string `value` with the given `key`.
    pub fn string(&mut self, key: &str, value: &str) -> &mut Self {
        self.key(key);
        append_string(self.json, value);
        self
    }

    /// Writes a number `value` with the given `key`.
    pub fn number(&mut self, key: &str, value: Number) -> &mut Self {
        self.key(key);
        append_number(self.json, value);
        self
    }

    /// Writes an `Instant` with the given `key` in the given `format`.
    pub fn instant(&mut self, key: &str, instant: &Instant, format: Format) -> &mut Self {
        self.key(key);
        append_instant(self.json, instant, format);
        self
    }

    /// Starts an array under the given `key`.
    pub fn start_array(&mut self, key: &str) -> JsonArrayWriter<'_> {
        self.key(key);
        JsonArrayWriter::new(&mut self.json)
    }

    /// Starts a nested object under the given `key`.
    pub fn start_object(&mut self, key: &str) -> JsonObjectWriter<'_> {
        self.key(key);
        JsonObjectWriter::new(&mut self.json)
    }

    /// Finishes the object.
    pub fn finish(self) {
        self.json.push('}');
    }

    fn key(&mut self, key: &str) {
        if self.started {
            self.json.push(',');
        }
        self.started = true;
        self.json.push('"');
        self.json.push_str(&escape_string(key));
        self.json.push_str("\":");
    }
}

/// Writes a JSON array directly into a `String`.
pub struct JsonArrayWriter<'a> {
    json: &'a mut String,
    started: bool,
}

impl<'a> JsonArrayWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        output.push('[');
        Self {
            json: output,
            started: false,
        }
    }

    pub fn boolean(&mut self, value: bool) -> &mut Self {
        self.comma_delimit();
        self.json.push_str(if value { "true" } else { "false" });
        self
    }

    pub fn string(&mut self, value: &str) -> &mut Self {
        self.comma_delimit();
        append_string(self.json, value);
        self
    }

    pub fn number(&mut self, value: Number) -> &mut Self {
        self.comma_delimit();
        append_number(self.json, value);
        self
    }

    pub fn instant(&mut self, instant: &Instant, format: Format) -> &mut Self {
        self.comma_delimit();
        append_instant(self.json, instant, format);
        self
    }

    pub fn start_array(&mut self) -> JsonArrayWriter<'_> {
        self.comma_delimit();
        JsonArrayWriter::new(&mut self.json)
    }

    pub fn start_object(&mut self) -> JsonObjectWriter<'_> {
        self.comma_delimit();
        JsonObjectWriter::new(&mut self.json)
    }

    /// Finishes the array.
    pub fn finish(self) {
        self.json.push(']');
    }

    fn comma_delimit(&mut self) {
        if self.started {
            self.json.push(',');
        }
        self.started = true;
    }
}

fn append_string(json: &mut String, value: &str) {
    json.push('"');
    json.push_str(&escape_string(value));
    json.push('"');
}

fn append_instant(json: &mut String, value: &Instant, format: Format) {
    let formatted = value.fmt(format);
    match format {
        Format::EpochSeconds => json.push_str(&formatted),
        _ => append_string(json, &formatted),
    }
}

fn append_number(json: &mut String, value: Number) {
    match value {
        Number::PosInt(value) => {
            // itoa::Buffer is a fixed-size stack allocation
            json.push_str(itoa::Buffer::new().format(value));
        }
        Number::NegInt(value) => {
            json.push_str(itoa::Buffer::new().format(value));
        }
        Number::Float(value) => {
            // JSON has no NaN or Infinity; match serde_json and write null
            if value.is_nan() || value.is_infinite() {
                json.push_str("null");
            } else {
                json.push_str(ryu::Buffer::new().format_finite(value));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{append_number, JsonArrayWriter, JsonObjectWriter};
    use proptest::proptest;
    use wire_types::instant::Format;
    use wire_types::{Instant, Number};

    #[test]
    fn empty() {
        let mut output = String::new();
        JsonObjectWriter::new(&mut output).finish();
        assert_eq!("{}", &output);

        let mut output = String::new();
        JsonArrayWriter::new(&mut output).finish();
        assert_eq!("[]", &output);
    }

    #[test]
    fn scalars() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        object.boolean("t", true);
        object.boolean("f", false);
        object.string("s", "some\nstring\nvalue");
        object.number("n", Number::Float(3.5));
        object.finish();
        assert_eq!(
            r#"{"t":true,"f":false,"s":"some\nstring\nvalue","n":3.5}"#,
            &output
        );
    }

    #[test]
    fn nesting() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        {
            let mut nested = object.start_object("Nested");
            nested.string("Key", "value");
            nested.finish();
        }
        {
            let mut list = object.start_array("List");
            list.string("one");
            list.number(Number::NegInt(-2));
            let inner = list.start_object();
            inner.finish();
            list.finish();
        }
        object.finish();
        assert_eq!(
            r#"{"Nested":{"Key":"value"},"List":["one",-2,{}]}"#,
            &output
        );
    }

    #[test]
    fn instants() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        object.instant(
            "epoch",
            &Instant::from_fractional_seconds(5, 0.2),
            Format::EpochSeconds,
        );
        object.instant(
            "datetime",
            &Instant::from_str("2021-05-24T15:34:50.123Z", Format::DateTime).unwrap(),
            Format::DateTime,
        );
        object.finish();
        assert_eq!(
            r#"{"epoch":5.2,"datetime":"2021-05-24T15:34:50.123Z"}"#,
            &output
        );
    }

    #[test]
    fn key_escaping() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        object.start_array("ba\nr").finish();
        object.finish();
        assert_eq!(r#"{"ba\nr":[]}"#, &output);
    }

    fn format_test_number(number: Number) -> String {
        let mut formatted = String::new();
        append_number(&mut formatted, number);
        formatted
    }

    #[test]
    fn non_finite_floats_are_null() {
        // matches the serde_json rendering of these values
        assert_eq!("null", format_test_number(Number::Float(f64::NAN)));
        assert_eq!("null", format_test_number(Number::Float(f64::INFINITY)));
        assert_eq!("null", format_test_number(Number::Float(f64::NEG_INFINITY)));
    }

    proptest! {
        #[test]
        fn matches_serde_json_pos_int_format(value: u64) {
            assert_eq!(
                serde_json::to_string(&value).unwrap(),
                format_test_number(Number::PosInt(value)),
            )
        }

        #[test]
        fn matches_serde_json_neg_int_format(value: i64) {
            assert_eq!(
                serde_json::to_string(&value).unwrap(),
                format_test_number(Number::NegInt(value)),
            )
        }

        #[test]
        fn matches_serde_json_float_format(value in proptest::num::f64::NORMAL) {
            assert_eq!(
                serde_json::to_string(&value).unwrap(),
                format_test_number(Number::Float(value)),
            )
        }
    }
}
