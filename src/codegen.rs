//! Usage snippet generation
//!
//! Renders the selected effect and its resolved options into the component
//! snippet a user copies into their own project.

use crate::constants::codegen::{ATTRIBUTE_INDENT, COMPONENT, PACKAGE};
use crate::options::OptionMap;

/// Build the usage snippet for an effect.
///
/// With `options = None` the `particleOptions` attribute is left out entirely,
/// which is not the same as passing an empty mapping.
pub fn generate(effect_name: &str, options: Option<&OptionMap>) -> String {
    let options_attribute = match options {
        Some(options) => format!(
            "\n{ATTRIBUTE_INDENT}particleOptions={{{}}}",
            indent_lines(&format!("{:#}", options.to_json()))
        ),
        None => String::new(),
    };

    let mut code = String::new();
    code.push_str(&format!("import {{ {COMPONENT} }} from '{PACKAGE}';\n\n"));
    code.push_str("const MyComponent = () => {\n");
    code.push_str("  return (\n");
    // trailing space after the tag name is part of the template
    code.push_str(&format!("    <{COMPONENT} \n"));
    code.push_str(&format!("{ATTRIBUTE_INDENT}effect=\"{effect_name}\"{options_attribute}\n"));
    code.push_str("    >\n");
    code.push_str("      <button className=\"outline rounded-lg p-4\">\n");
    code.push_str(&format!("        Click Me for {effect_name} Effect!\n"));
    code.push_str("      </button>\n");
    code.push_str(&format!("    </{COMPONENT}>\n"));
    code.push_str("  );\n");
    code.push_str("};\n\n");
    code.push_str("export default MyComponent;");
    code
}

/// Prefix every line (the first included) with the attribute indent
fn indent_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| format!("{ATTRIBUTE_INDENT}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::PropertyValue;
    use serde_json::{json, Value};

    fn sample_options() -> OptionMap {
        vec![
            ("speed".to_string(), PropertyValue::Number(12.0)),
            ("color".to_string(), PropertyValue::Text("blue".to_string())),
        ]
        .into_iter()
        .collect()
    }

    /// Pull the JSON between `particleOptions={` and the closing `}` back out
    fn extract_options(code: &str) -> Value {
        let start = code.find("particleOptions={").expect("options attribute") + "particleOptions={".len();
        let end = code.rfind("}\n    >").expect("closing brace");
        serde_json::from_str(code[start..end].trim()).expect("options JSON")
    }

    #[test]
    fn test_without_options_exact_text() {
        let code = generate("confettiMode", None);
        let expected = "import { ClickFusion } from 'clickfusion';\n\
                        \n\
                        const MyComponent = () => {\n  \
                        return (\n    \
                        <ClickFusion \n      \
                        effect=\"confettiMode\"\n    \
                        >\n      \
                        <button className=\"outline rounded-lg p-4\">\n        \
                        Click Me for confettiMode Effect!\n      \
                        </button>\n    \
                        </ClickFusion>\n  \
                        );\n\
                        };\n\
                        \n\
                        export default MyComponent;";
        assert_eq!(code, expected);
        assert!(!code.contains("particleOptions"));
    }

    #[test]
    fn test_with_options_layout() {
        let code = generate("dragMode", Some(&sample_options()));
        let lines: Vec<_> = code.split('\n').collect();

        assert_eq!(lines[5], "      effect=\"dragMode\"");
        assert_eq!(lines[6], "      particleOptions={      {");
        assert_eq!(lines[7], "        \"speed\": 12,");
        assert_eq!(lines[8], "        \"color\": \"blue\"");
        assert_eq!(lines[9], "      }}");
        assert_eq!(lines[10], "    >");
    }

    #[test]
    fn test_options_parse_back() {
        let options = sample_options();
        let code = generate("dragMode", Some(&options));
        assert_eq!(extract_options(&code), json!({ "speed": 12, "color": "blue" }));
        assert_eq!(extract_options(&code), options.to_json());
    }

    #[test]
    fn test_options_keep_insertion_order() {
        let options: OptionMap = vec![
            ("zIndex".to_string(), PropertyValue::Number(1.0)),
            ("alpha".to_string(), PropertyValue::Number(0.5)),
        ]
        .into_iter()
        .collect();
        let code = generate("rippleMode", Some(&options));
        let z = code.find("zIndex").unwrap();
        let a = code.find("alpha").unwrap();
        assert!(z < a);
    }

    #[test]
    fn test_empty_options_differ_from_none() {
        let empty = generate("rippleMode", Some(&OptionMap::new()));
        let none = generate("rippleMode", None);
        assert_ne!(empty, none);
        assert!(empty.contains("particleOptions={      {}}"));
    }

    #[test]
    fn test_nan_serialized_as_null() {
        let options: OptionMap = vec![("speed".to_string(), PropertyValue::Number(f64::NAN))]
            .into_iter()
            .collect();
        let code = generate("dragMode", Some(&options));
        assert_eq!(extract_options(&code), json!({ "speed": null }));
    }

    #[test]
    fn test_deterministic() {
        let options = sample_options();
        assert_eq!(
            generate("dragMode", Some(&options)),
            generate("dragMode", Some(&options))
        );
    }
}
