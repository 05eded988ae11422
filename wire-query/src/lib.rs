/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Serialization for the AWS Query protocol: a flat list of
//! form-encoded `key=value` parameters where nesting is spelled with
//! dotted prefixes, lists with `member.N`, and maps with
//! `entry.N.key`/`entry.N.value`.
//!
//! Writers only emit what they're asked to emit, so absent model fields
//! contribute nothing to the output — a request with no populated
//! fields serializes as just `Action=<op>&Version=<ver>`.

use wire_types::instant::Format;
use wire_types::{Instant, Number};

/// Writes the parameter list for one Query operation.
pub struct QueryWriter<'a> {
    output: &'a mut String,
}

impl<'a> QueryWriter<'a> {
    /// Starts the parameter list with the operation's `Action` and API `Version`.
    pub fn new(output: &'a mut String, action: &str, version: &str) -> Self {
        output.push_str("Action=");
        output.push_str(&urlencoding::encode(action));
        output.push_str("&Version=");
        output.push_str(&urlencoding::encode(version));
        QueryWriter { output }
    }

    /// Returns a value writer for the top-level member named `prefix`.
    pub fn prefix(&mut self, prefix: &str) -> QueryValueWriter<'_> {
        QueryValueWriter::new(&mut self.output, prefix.to_string())
    }

    /// Finishes the parameter list.
    pub fn finish(self) {
        // Parameters are written as they are requested; nothing to flush
    }
}

/// Writes a single value, or scopes deeper into nested structure.
pub struct QueryValueWriter<'a> {
    output: &'a mut String,
    prefix: String,
}

impl<'a> QueryValueWriter<'a> {
    pub fn new(output: &'a mut String, prefix: String) -> Self {
        QueryValueWriter { output, prefix }
    }

    /// Returns a value writer for the nested member named `prefix`.
    pub fn prefix(&mut self, prefix: &str) -> QueryValueWriter<'_> {
        let nested = format!("{}.{}", self.prefix, prefix);
        QueryValueWriter::new(&mut self.output, nested)
    }

    /// Writes a string value.
    pub fn string(mut self, value: &str) {
        self.write_param_name();
        self.output.push_str(&urlencoding::encode(value));
    }

    /// Writes a boolean value.
    pub fn boolean(self, value: bool) {
        self.string(if value { "true" } else { "false" });
    }

    /// Writes a number value.
    pub fn number(self, value: Number) {
        match value {
            Number::PosInt(value) => self.string(&value.to_string()),
            Number::NegInt(value) => self.string(&value.to_string()),
            Number::Float(value) => self.string(&value.to_string()),
        }
    }

    /// Writes a timestamp value in the given format.
    pub fn date_time(self, value: &Instant, format: Format) {
        self.string(&value.fmt(format));
    }

    /// Starts a list. Members are written under `<prefix>.member.N`.
    pub fn start_list(self) -> QueryListWriter<'a> {
        QueryListWriter {
            output: self.output,
            prefix: self.prefix,
            next_index: 1,
        }
    }

    /// Starts a map. Entries are written under `<prefix>.entry.N.key`
    /// and `<prefix>.entry.N.value`.
    pub fn start_map(self) -> QueryMapWriter<'a> {
        QueryMapWriter {
            output: self.output,
            prefix: self.prefix,
            next_index: 1,
        }
    }

    fn write_param_name(&mut self) {
        self.output.push('&');
        self.output.push_str(&urlencoding::encode(&self.prefix));
        self.output.push('=');
    }
}

/// Writes list members under 1-based `member.N` keys, in insertion order.
pub struct QueryListWriter<'a> {
    output: &'a mut String,
    prefix: String,
    next_index: usize,
}

impl<'a> QueryListWriter<'a> {
    /// Returns a value writer for the next list member.
    pub fn entry(&mut self) -> QueryValueWriter<'_> {
        let prefix = format!("{}.member.{}", self.prefix, self.next_index);
        self.next_index += 1;
        QueryValueWriter::new(&mut self.output, prefix)
    }

    /// Finishes the list.
    pub fn finish(self) {}
}

/// Writes map entries under 1-based `entry.N.key`/`entry.N.value` keys.
pub struct QueryMapWriter<'a> {
    output: &'a mut String,
    prefix: String,
    next_index: usize,
}

impl<'a> QueryMapWriter<'a> {
    /// Writes the key for the next map entry and returns a value writer
    /// for its value.
    pub fn entry(&mut self, key: &str) -> QueryValueWriter<'_> {
        self.output.push('&');
        self.output.push_str(&urlencoding::encode(&format!(
            "{}.entry.{}.key",
            self.prefix, self.next_index
        )));
        self.output.push('=');
        self.output.push_str(&urlencoding::encode(key));

        let value_prefix = format!("{}.entry.{}.value", self.prefix, self.next_index);
        self.next_index += 1;
        QueryValueWriter::new(&mut self.output, value_prefix)
    }

    /// Finishes the map.
    pub fn finish(self) {}
}

#[cfg(test)]
mod tests {
    use super::QueryWriter;
    use wire_types::instant::Format;
    use wire_types::{Instant, Number};

    #[test]
    fn action_and_version_only() {
        let mut output = String::new();
        let writer = QueryWriter::new(&mut output, "ListIdentities", "2010-12-01");
        writer.finish();
        assert_eq!("Action=ListIdentities&Version=2010-12-01", &output);
    }

    #[test]
    fn scalars_and_encoding() {
        let mut output = String::new();
        let mut writer = QueryWriter::new(&mut output, "SendEmail", "2010-12-01");
        writer.prefix("Source").string("sender@example.com");
        writer.prefix("Flag").boolean(true);
        writer.prefix("Count").number(Number::PosInt(3));
        writer.finish();
        assert_eq!(
            "Action=SendEmail&Version=2010-12-01\
             &Source=sender%40example.com&Flag=true&Count=3",
            &output
        );
    }

    #[test]
    fn nested_prefixes() {
        let mut output = String::new();
        let mut writer = QueryWriter::new(&mut output, "SendEmail", "2010-12-01");
        let mut message = writer.prefix("Message");
        let mut subject = message.prefix("Subject");
        subject.prefix("Data").string("Hello");
        writer.finish();
        assert_eq!(
            "Action=SendEmail&Version=2010-12-01&Message.Subject.Data=Hello",
            &output
        );
    }

    #[test]
    fn lists_are_one_based_and_ordered() {
        let mut output = String::new();
        let mut writer = QueryWriter::new(&mut output, "SendEmail", "2010-12-01");
        let mut destination = writer.prefix("Destination");
        let to_addresses = destination.prefix("ToAddresses");
        let mut list = to_addresses.start_list();
        list.entry().string("a@example.com");
        list.entry().string("b@example.com");
        list.finish();
        writer.finish();
        assert_eq!(
            "Action=SendEmail&Version=2010-12-01\
             &Destination.ToAddresses.member.1=a%40example.com\
             &Destination.ToAddresses.member.2=b%40example.com",
            &output
        );
    }

    #[test]
    fn maps_write_key_value_pairs() {
        let mut output = String::new();
        let mut writer = QueryWriter::new(&mut output, "TestAction", "2020-01-01");
        let mut map = writer.prefix("Attributes").start_map();
        map.entry("Color").string("red");
        map.entry("Size").string("large");
        map.finish();
        writer.finish();
        assert_eq!(
            "Action=TestAction&Version=2020-01-01\
             &Attributes.entry.1.key=Color&Attributes.entry.1.value=red\
             &Attributes.entry.2.key=Size&Attributes.entry.2.value=large",
            &output
        );
    }

    #[test]
    fn list_of_structures() {
        let mut output = String::new();
        let mut writer = QueryWriter::new(&mut output, "TestAction", "2020-01-01");
        let mut list = writer.prefix("Tags").start_list();
        let mut first = list.entry();
        first.prefix("Name").string("env");
        first.prefix("Value").string("prod");
        list.finish();
        writer.finish();
        assert_eq!(
            "Action=TestAction&Version=2020-01-01\
             &Tags.member.1.Name=env&Tags.member.1.Value=prod",
            &output
        );
    }

    #[test]
    fn timestamps() {
        let mut output = String::new();
        let mut writer = QueryWriter::new(&mut output, "TestAction", "2020-01-01");
        writer.prefix("Since").date_time(
            &Instant::from_epoch_seconds(1576540098),
            Format::DateTime,
        );
        writer.finish();
        assert_eq!(
            "Action=TestAction&Version=2020-01-01&Since=2019-12-16T23%3A48%3A18Z",
            &output
        );
    }
}
