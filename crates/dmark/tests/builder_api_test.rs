//! Integration tests for the DocumentBuilder API
//!
//! These tests verify that parsing and translation are usable through the
//! public facade.

use dmark::{
    DmarkError, DocumentBuilder, Dump, ElementNode, Path, TranslateError, Translator,
    config::{AppConfig, ParserConfig, TranslatorConfig},
    parse_error::ErrorCode,
};

struct Tags;

impl Translator for Tags {
    type Context = ();
    type Output = String;
    type Error = DmarkError;

    fn handle_string(&self, text: &str, _context: &()) -> Result<String, DmarkError> {
        Ok(text.to_owned())
    }

    fn handle_element(
        &self,
        element: &ElementNode,
        context: &(),
        path: &Path<'_>,
    ) -> Result<String, DmarkError> {
        let inner = self.translate_children(element, context, path)?;
        Ok(format!("<{0}>{inner}</{0}>", element.name()))
    }
}

#[test]
fn test_parse_simple_document() {
    let builder = DocumentBuilder::default();
    let nodes = builder
        .parse("#p Hello %em{world}!\n#p Bye.")
        .expect("Failed to parse document");

    assert_eq!(
        Dump::forest(&nodes).to_string(),
        r#"[Element(p, ["Hello ", Element(em, ["world"]), "!"]), Element(p, ["Bye."])]"#
    );
}

#[test]
fn test_parse_error_keeps_source() {
    let source = "#p %ref[url=hello";
    let err = DocumentBuilder::default().parse(source).unwrap_err();

    match &err {
        DmarkError::Parse { err, src } => {
            assert_eq!(src, source);
            assert_eq!(err.code(), ErrorCode::D201);
        }
        other => panic!("expected a parse error, got {other:?}"),
    }

    assert_eq!(
        err.to_string(),
        "parse error at line 1, col 18: unexpected file end in attribute value"
    );
    let excerpt = err.excerpt().expect("parse errors render excerpts").to_string();
    assert!(excerpt.ends_with("#p %ref[url=hello\n                 ^"));
}

#[test]
fn test_parse_applies_configured_depth() {
    let config = AppConfig::new(ParserConfig::new(2), TranslatorConfig::default());
    let builder = DocumentBuilder::new(config);

    assert!(builder.parse("#p %em{x}").is_ok());

    let err = builder.parse("#p %em{%strong{x}}").unwrap_err();
    match err {
        DmarkError::Parse { err, .. } => assert_eq!(err.code(), ErrorCode::D301),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_translate_with_builder() {
    let builder = DocumentBuilder::default();
    let nodes = builder.parse("#p Hello %em{world}").unwrap();

    let html = builder.translate(&Tags, &nodes, &()).unwrap();
    assert_eq!(html, "<p>Hello <em>world</em></p>");
}

#[test]
fn test_translate_applies_configured_depth() {
    let config = AppConfig::new(ParserConfig::default(), TranslatorConfig::new(1));
    let builder = DocumentBuilder::new(config);
    let nodes = builder.parse("#p Hello %em{world}").unwrap();

    let err = builder.translate(&Tags, &nodes, &()).unwrap_err();
    assert!(matches!(
        err,
        DmarkError::Translate(TranslateError::DepthExceeded { max_depth: 1, .. })
    ));
    assert!(err.excerpt().is_none());
    assert_eq!(
        err.to_string(),
        "translation error: nesting depth exceeds the maximum of 1 at element `em`"
    );
}

#[test]
fn test_builder_with_toml_config() {
    let config: AppConfig = toml::from_str("[translator]\nmax_depth = 3\n").unwrap();
    let builder = DocumentBuilder::new(config);

    assert_eq!(builder.config().translator().max_depth(), 3);
    assert_eq!(builder.config().parser().max_depth(), dmark::DEFAULT_MAX_DEPTH);
}
