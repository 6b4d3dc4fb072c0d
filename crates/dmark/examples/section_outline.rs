//! Example: Translating a document to HTML
//!
//! This example parses a small DMark document and renders it with a
//! translator whose heading levels follow the nesting of `section` blocks.

use dmark::{DmarkError, DocumentBuilder, ElementNode, Path, Translator};

struct Html;

impl Html {
    fn tag(
        &self,
        name: &str,
        element: &ElementNode,
        level: &usize,
        path: &Path<'_>,
    ) -> Result<String, DmarkError> {
        let inner = self.translate_children(element, level, path)?;
        Ok(format!("<{name}>{inner}</{name}>"))
    }
}

impl Translator for Html {
    /// Number of enclosing sections.
    type Context = usize;
    type Output = String;
    type Error = DmarkError;

    fn handle_string(&self, text: &str, _level: &usize) -> Result<String, DmarkError> {
        Ok(text
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;"))
    }

    fn handle_element(
        &self,
        element: &ElementNode,
        level: &usize,
        path: &Path<'_>,
    ) -> Result<String, DmarkError> {
        match element.name().as_str() {
            "section" => {
                let inner = self.translate_children(element, &(level + 1), path)?;
                Ok(format!("<section>\n{inner}</section>\n"))
            }
            "title" => {
                let heading = format!("h{}", (*level).clamp(1, 6));
                Ok(format!("{}\n", self.tag(&heading, element, level, path)?))
            }
            "p" => Ok(format!("{}\n", self.tag("p", element, level, path)?)),
            "em" => self.tag("em", element, level, path),
            "code" => self.tag("code", element, level, path),
            "link" => {
                let target = element.attribute("target").unwrap_or("#");
                let inner = self.translate_children(element, level, path)?;
                Ok(format!(r#"<a href="{target}">{inner}</a>"#))
            }
            _ => self.translate_children(element, level, path),
        }
    }
}

const SOURCE: &str = "\
#section
  #title Getting started
  #p DMark documents are made of %em{blocks} and %em{inline elements}.
  #section
    #title Escaping
    #p Write %code{%%} for a literal percent sign and %code{%}} for a brace.
    #p See %link[target=https://example.com/dmark]{the reference} for more.
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let builder = DocumentBuilder::default();

    let nodes = match builder.parse(SOURCE) {
        Ok(nodes) => nodes,
        Err(err) => {
            if let Some(excerpt) = err.excerpt() {
                eprintln!("{}", excerpt.colored(true));
            }
            return Err(err.into());
        }
    };

    let html = builder.translate(&Html, &nodes, &0)?;
    print!("{html}");

    Ok(())
}
