//! Template placeholder substitution and output naming

use helio_core::error::{Error, ErrorCode, Result};
use std::path::Path;

/// Build the substitution token for a placeholder key.
///
/// A job with placeholder key `code` matches the token `@@code@@` in its
/// template.
pub fn placeholder_token(key: &str) -> String {
    format!("@@{}@@", key)
}

/// Derive the output filename by stripping the template suffix.
///
/// `LuaShim.java.template` becomes `LuaShim.java`. A template filename that
/// does not end in the suffix (or is nothing but the suffix) is rejected as
/// a configuration error rather than passed through unchanged.
pub fn output_file_name(template: &Path, suffix: &str) -> Result<String> {
    let name = template
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            Error::new(
                ErrorCode::InvalidPath,
                format!("Invalid template path: {}", template.display()),
            )
        })?;

    match name.strip_suffix(suffix) {
        Some(stem) if !stem.is_empty() => Ok(stem.to_string()),
        _ => Err(Error::invalid_template_name(template, suffix)),
    }
}

/// Replace every occurrence of the placeholder token in the template text.
///
/// All content outside the token passes through character-for-character.
/// A template without the token is a fatal mismatch; unsubstituted output
/// is never emitted.
pub fn substitute(
    template_text: &str,
    key: &str,
    replacement: &str,
    template_path: &Path,
) -> Result<String> {
    let token = placeholder_token(key);
    if !template_text.contains(&token) {
        return Err(Error::template_mismatch(&token, template_path));
    }
    Ok(template_text.replace(&token, replacement))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_placeholder_token() {
        assert_eq!(placeholder_token("code"), "@@code@@");
        assert_eq!(placeholder_token("init_lua"), "@@init_lua@@");
    }

    #[test]
    fn test_output_file_name_strips_suffix() {
        let path = PathBuf::from("templates/LuaShim.java.template");
        assert_eq!(
            output_file_name(&path, ".template").unwrap(),
            "LuaShim.java"
        );
    }

    #[test]
    fn test_output_file_name_without_suffix_is_error() {
        let path = PathBuf::from("templates/LuaShim.java");
        let err = output_file_name(&path, ".template").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTemplateName);
    }

    #[test]
    fn test_output_file_name_bare_suffix_is_error() {
        let path = PathBuf::from("templates/.template");
        assert!(output_file_name(&path, ".template").is_err());
    }

    #[test]
    fn test_substitute_concrete_scenario() {
        let out = substitute(
            "String CODE = @@code@@;",
            "code",
            r#""print(\"hi\\n\")""#,
            Path::new("Shim.java.template"),
        )
        .unwrap();
        assert_eq!(out, r#"String CODE = "print(\"hi\\n\")";"#);
    }

    #[test]
    fn test_substitute_preserves_surrounding_text() {
        let template = "package com.helio;\n\nclass Shim {\n    static final String S = @@code@@;\n}\n";
        let out = substitute(template, "code", "\"\"", Path::new("Shim.java.template")).unwrap();
        assert_eq!(
            out,
            "package com.helio;\n\nclass Shim {\n    static final String S = \"\";\n}\n"
        );
    }

    #[test]
    fn test_substitute_replaces_all_occurrences() {
        let out = substitute(
            "a=@@code@@; b=@@code@@;",
            "code",
            "\"x\"",
            Path::new("T.java.template"),
        )
        .unwrap();
        assert_eq!(out, "a=\"x\"; b=\"x\";");
    }

    #[test]
    fn test_substitute_missing_token_is_mismatch() {
        let err = substitute(
            "String CODE = @@script@@;",
            "code",
            "\"\"",
            Path::new("Shim.java.template"),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::TemplateMismatch);
    }
}
