/// Returns the placeholders of an R2RML string template in order of appearance.
///
/// A placeholder is the text between an unescaped `{` and the next `}`. An opening brace
/// without a closing one ends the scan.
///
/// ```
/// use konverter_model::template_references;
///
/// assert_eq!(
///     template_references("http://example.com/{Country}/{ID}"),
///     vec!["Country", "ID"]
/// );
/// ```
pub fn template_references(template: &str) -> Vec<&str> {
    let mut references = Vec::new();
    let mut position = 0;
    while let Some(offset) = template[position..].find('{') {
        let start = position + offset;
        if start > 0 && template.as_bytes()[start - 1] == b'\\' {
            position = start + 1;
            continue;
        }
        let Some(length) = template[start..].find('}') else {
            break;
        };
        references.push(&template[start + 1..start + length]);
        position = start + length + 1;
    }
    references
}

/// Prefixes every placeholder of `template` with `qualifier` and an underscore.
///
/// Escaped braces are left untouched.
pub fn qualify_template(template: &str, qualifier: &str) -> String {
    let mut result = String::with_capacity(template.len());
    let mut position = 0;
    while let Some(offset) = template[position..].find('{') {
        let start = position + offset;
        let escaped = start > 0 && template.as_bytes()[start - 1] == b'\\';
        let closing = template[start..].find('}');
        match closing {
            Some(length) if !escaped => {
                result.push_str(&template[position..=start]);
                result.push_str(qualifier);
                result.push('_');
                result.push_str(&template[start + 1..start + length]);
                position = start + length;
            }
            Some(_) => {
                result.push_str(&template[position..=start]);
                position = start + 1;
            }
            None => break,
        }
    }
    result.push_str(&template[position..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaped_braces_are_not_placeholders() {
        assert_eq!(template_references(r"\{literal}/{id}"), vec!["id"]);
    }

    #[test]
    fn unterminated_placeholder_stops_scan() {
        assert_eq!(template_references("{a}/{b"), vec!["a"]);
        assert!(template_references("no placeholders").is_empty());
    }

    #[test]
    fn qualify_prefixes_each_placeholder() {
        assert_eq!(
            qualify_template("http://ex.com/{a}/{b}", "students.csv"),
            "http://ex.com/{students.csv_a}/{students.csv_b}"
        );
        assert_eq!(qualify_template(r"\{a}/{b}", "s"), r"\{a}/{s_b}");
        assert_eq!(qualify_template("{a}/{b", "s"), "{s_a}/{b");
    }
}
