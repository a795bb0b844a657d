//! Block-style YAML writer for extra-vars trees.
//!
//! A purpose-built emitter rather than a serde serializer: the value model
//! carries an explicit [`VarValue::QuotedString`] variant that must always
//! render as a double-quoted scalar, a styling decision generic YAML
//! serializers do not expose. Output is block style only (no flow
//! collections), with mapping keys in sorted order.

use super::VarValue;
use std::fmt::Write;
use std::path::Path;

/// Write an extra-vars tree to a file.
pub fn write_file(value: &VarValue, path: &Path) -> std::io::Result<()> {
    std::fs::write(path, write_string(value))
}

/// Render an extra-vars tree as block-style YAML.
pub fn write_string(value: &VarValue) -> String {
    let mut output = String::new();
    match value {
        VarValue::Mapping(_) | VarValue::Sequence(_) => write_block(&mut output, value, 0),
        scalar => {
            writeln!(output, "{}", render_scalar(scalar)).unwrap();
        }
    }
    output
}

/// Write a mapping or sequence at the given indentation depth.
fn write_block(output: &mut String, value: &VarValue, depth: usize) {
    let indent = "  ".repeat(depth);
    match value {
        VarValue::Mapping(map) => {
            for (key, entry) in map {
                match entry {
                    VarValue::Mapping(inner) if !inner.is_empty() => {
                        writeln!(output, "{indent}{}:", render_key(key)).unwrap();
                        write_block(output, entry, depth + 1);
                    }
                    VarValue::Sequence(items) if !items.is_empty() => {
                        writeln!(output, "{indent}{}:", render_key(key)).unwrap();
                        write_block(output, entry, depth + 1);
                    }
                    VarValue::Mapping(_) => {
                        writeln!(output, "{indent}{}: {{}}", render_key(key)).unwrap();
                    }
                    VarValue::Sequence(_) => {
                        writeln!(output, "{indent}{}: []", render_key(key)).unwrap();
                    }
                    scalar => {
                        writeln!(output, "{indent}{}: {}", render_key(key), render_scalar(scalar))
                            .unwrap();
                    }
                }
            }
        }
        VarValue::Sequence(items) => {
            for item in items {
                match item {
                    VarValue::Mapping(_) | VarValue::Sequence(_) => {
                        writeln!(output, "{indent}-").unwrap();
                        write_block(output, item, depth + 1);
                    }
                    scalar => {
                        writeln!(output, "{indent}- {}", render_scalar(scalar)).unwrap();
                    }
                }
            }
        }
        scalar => {
            writeln!(output, "{indent}{}", render_scalar(scalar)).unwrap();
        }
    }
}

/// Render a mapping key, quoting when the content is not plain-safe.
fn render_key(key: &str) -> String {
    if needs_quoting(key) {
        quote(key)
    } else {
        key.to_string()
    }
}

/// Render a scalar value.
fn render_scalar(value: &VarValue) -> String {
    match value {
        VarValue::Null => "null".to_string(),
        VarValue::Bool(b) => b.to_string(),
        VarValue::Int(i) => i.to_string(),
        // `{:?}` keeps a decimal point on integral floats so the value
        // round-trips as a float.
        VarValue::Float(f) => format!("{f:?}"),
        VarValue::String(s) => {
            if needs_quoting(s) {
                quote(s)
            } else {
                s.clone()
            }
        }
        VarValue::QuotedString(s) => quote(s),
        VarValue::Sequence(_) | VarValue::Mapping(_) => unreachable!("collections are block-rendered"),
    }
}

/// Whether a plain (unquoted) scalar would be misread by a YAML parser.
fn needs_quoting(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    if s.starts_with(char::is_whitespace) || s.ends_with(char::is_whitespace) {
        return true;
    }
    // Indicator characters are only unsafe at the start of a plain scalar.
    let first = s.chars().next().unwrap_or(' ');
    if "-?:,[]{}#&*!|>'\"%@`".contains(first) {
        return true;
    }
    if s.contains(": ") || s.ends_with(':') || s.contains(" #") {
        return true;
    }
    if s.chars().any(|c| c.is_control()) {
        return true;
    }
    // Keywords and numbers would change type when read back.
    let lower = s.to_ascii_lowercase();
    if matches!(
        lower.as_str(),
        "null" | "~" | "true" | "false" | "yes" | "no" | "on" | "off"
    ) {
        return true;
    }
    // YAML 1.1 consumers also read base-prefixed integers (0x1F, 0o17,
    // 0b101) and sexagesimals (1:30) as numbers.
    let unsigned = lower.strip_prefix(['+', '-']).unwrap_or(&lower);
    for (prefix, radix) in [("0x", 16u32), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = unsigned.strip_prefix(prefix) {
            if !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix)) {
                return true;
            }
        }
    }
    if s.contains(':')
        && s.split(':')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
    {
        return true;
    }
    s.parse::<i64>().is_ok() || s.parse::<f64>().is_ok()
}

/// Double-quote a scalar, escaping the characters YAML requires.
fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars::default_extra_vars;
    use std::collections::BTreeMap;

    fn mapping(entries: &[(&str, VarValue)]) -> VarValue {
        VarValue::Mapping(
            entries
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_nested_mapping_layout() {
        let value = mapping(&[(
            "kubeadm",
            mapping(&[
                ("binary", VarValue::string("/usr/bin/kubeadm")),
                ("token", VarValue::string("abcdef.0123456789abcdef")),
            ]),
        )]);

        assert_eq!(
            write_string(&value),
            "kubeadm:\n  binary: /usr/bin/kubeadm\n  token: abcdef.0123456789abcdef\n"
        );
    }

    #[test]
    fn test_keys_are_sorted() {
        let value = mapping(&[
            ("zeta", VarValue::Int(1)),
            ("alpha", VarValue::Int(2)),
        ]);
        assert_eq!(write_string(&value), "alpha: 2\nzeta: 1\n");
    }

    #[test]
    fn test_quoted_string_is_always_double_quoted() {
        let value = mapping(&[("url", VarValue::quoted("https://example.com/plain"))]);
        assert_eq!(
            write_string(&value),
            "url: \"https://example.com/plain\"\n"
        );
    }

    #[test]
    fn test_weavenet_url_renders_double_quoted_with_escaped_newline() {
        let output = write_string(&default_extra_vars());
        assert!(output.contains(
            "manifestUrl: \"https://cloud.weave.works/k8s/net?k8s-version=$(kubectl version | base64 | tr -d '\\n')\""
        ));
        // The non-quoted manifest URLs stay plain.
        assert!(output.contains(
            "manifestUrl: https://raw.githubusercontent.com/coreos/flannel/master/Documentation/kube-flannel.yml"
        ));
    }

    #[test]
    fn test_plain_strings_needing_quoting_are_quoted() {
        let value = mapping(&[
            ("colon", VarValue::string("key: value")),
            ("hash", VarValue::string("a # comment")),
            ("number", VarValue::string("42")),
            ("boolean", VarValue::string("yes")),
            ("empty", VarValue::string("")),
            ("leading", VarValue::string("- item")),
        ]);
        let output = write_string(&value);
        assert!(output.contains("colon: \"key: value\""));
        assert!(output.contains("hash: \"a # comment\""));
        assert!(output.contains("number: \"42\""));
        assert!(output.contains("boolean: \"yes\""));
        assert!(output.contains("empty: \"\""));
        assert!(output.contains("leading: \"- item\""));
    }

    #[test]
    fn test_number_look_alikes_in_other_bases_are_quoted() {
        let value = mapping(&[
            ("hex", VarValue::string("0x1F")),
            ("octal", VarValue::string("0o17")),
            ("binary", VarValue::string("0b101")),
            ("signed_hex", VarValue::string("+0x1f")),
            ("sexagesimal", VarValue::string("1:30:22")),
        ]);
        let output = write_string(&value);
        assert!(output.contains("hex: \"0x1F\""));
        assert!(output.contains("octal: \"0o17\""));
        assert!(output.contains("binary: \"0b101\""));
        assert!(output.contains("signed_hex: \"+0x1f\""));
        assert!(output.contains("sexagesimal: \"1:30:22\""));
        // Near-misses keep the plain style.
        assert!(!needs_quoting("0xZZ"));
        assert!(!needs_quoting("host:8080"));
    }

    #[test]
    fn test_sequences_and_scalars() {
        let value = mapping(&[
            ("enabled", VarValue::Bool(true)),
            ("nothing", VarValue::Null),
            ("ratio", VarValue::Float(1.0)),
            (
                "plugins",
                VarValue::Sequence(vec![
                    VarValue::string("flannel"),
                    VarValue::string("calico"),
                ]),
            ),
        ]);
        assert_eq!(
            write_string(&value),
            "enabled: true\nnothing: null\nplugins:\n  - flannel\n  - calico\nratio: 1.0\n"
        );
    }

    #[test]
    fn test_empty_collections_render_flow_markers() {
        let value = mapping(&[
            ("empty_map", VarValue::Mapping(BTreeMap::new())),
            ("empty_seq", VarValue::Sequence(Vec::new())),
        ]);
        assert_eq!(write_string(&value), "empty_map: {}\nempty_seq: []\n");
    }

    #[test]
    fn test_output_round_trips_through_a_yaml_parser() {
        let defaults = default_extra_vars();
        let parsed: VarValue = serde_yaml::from_str(&write_string(&defaults)).unwrap();
        // Quoting style is not preserved, but every value must be.
        assert_eq!(
            parsed
                .at(&["kubernetes", "cni", "weavenet", "manifestUrl"])
                .and_then(VarValue::as_str),
            defaults
                .at(&["kubernetes", "cni", "weavenet", "manifestUrl"])
                .and_then(VarValue::as_str)
        );
    }
}
