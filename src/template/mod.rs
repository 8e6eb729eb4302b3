//! # Label Templates
//!
//! A template pairs a default content record with a render function that
//! turns content into a finished [`LabelCommand`].
//!
//! Content arrives as a JSON object and is deserialized into a typed record
//! per template; unknown or missing fields are rejected with
//! [`ZebrellaError::InvalidContent`].
//!
//! ## Example
//!
//! ```
//! use zebrella::template::{TemplateCatalog, TemplateRef};
//! use zebrella::printer::PrinterModel;
//!
//! let catalog = TemplateCatalog::builtin();
//! let printer = PrinterModel::ZEBRA_GK420T.profile("10.0.0.9");
//!
//! let resolved = catalog.resolve(&TemplateRef::from("basicNameBadge"), None)?;
//! let label = resolved.render(&printer)?;
//! assert!(label.text.contains("^XGE:CAI.GRF,1,1^FS"));
//! # Ok::<(), zebrella::ZebrellaError>(())
//! ```

mod badges;

pub use badges::{BasicNameBadge, NameBadge, NameBadgeContent, TestLabel};

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{Result, ZebrellaError};
use crate::label::LabelCommand;
use crate::printer::PrinterProfile;

/// Free-form content record as received (a JSON object).
pub type Content = Map<String, Value>;

/// Template printed when nothing else is selected.
pub const DEFAULT_TEMPLATE: &str = "basicNameBadge";

/// Template printed in test mode.
pub const TEST_TEMPLATE: &str = "basic";

/// A named label layout.
///
/// `render` must be pure: the same content and printer always produce the
/// same command text.
pub trait LabelTemplate: Send + Sync {
    /// Catalog name
    fn name(&self) -> &str;

    /// One-line description for listings
    fn description(&self) -> &str {
        ""
    }

    /// Content used when a job supplies none
    fn default_content(&self) -> Content;

    /// Build the label for `content` at `printer`'s resolution.
    fn render(&self, content: &Content, printer: &PrinterProfile) -> Result<LabelCommand>;
}

/// Deserialize a content record into a template's typed fields.
pub fn parse_content<T: DeserializeOwned>(template: &str, content: &Content) -> Result<T> {
    serde_json::from_value(Value::Object(content.clone())).map_err(|e| {
        ZebrellaError::InvalidContent {
            template: template.to_string(),
            message: e.to_string(),
        }
    })
}

/// Serialize a typed record back into a content map.
pub(crate) fn to_content<T: serde::Serialize>(record: &T) -> Content {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map,
        _ => Content::new(),
    }
}

// ============================================================================
// FUNCTION TEMPLATES
// ============================================================================

type RenderFn = dyn Fn(&Content, &PrinterProfile) -> Result<LabelCommand> + Send + Sync;

/// A template built from a closure, for one-off layouts that are not in the
/// catalog.
pub struct FnTemplate {
    name: String,
    default_content: Content,
    render: Box<RenderFn>,
}

impl FnTemplate {
    pub fn new<F>(name: impl Into<String>, default_content: Content, render: F) -> Self
    where
        F: Fn(&Content, &PrinterProfile) -> Result<LabelCommand> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            default_content,
            render: Box::new(render),
        }
    }
}

impl LabelTemplate for FnTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn default_content(&self) -> Content {
        self.default_content.clone()
    }

    fn render(&self, content: &Content, printer: &PrinterProfile) -> Result<LabelCommand> {
        (self.render)(content, printer)
    }
}

// ============================================================================
// TEMPLATE REFERENCES
// ============================================================================

/// How a job names its template: by catalog name, or by value.
#[derive(Clone)]
pub enum TemplateRef {
    Named(String),
    Custom(Arc<dyn LabelTemplate>),
}

impl TemplateRef {
    /// Wrap a render closure as a template reference.
    pub fn function<F>(name: impl Into<String>, render: F) -> Self
    where
        F: Fn(&Content, &PrinterProfile) -> Result<LabelCommand> + Send + Sync + 'static,
    {
        TemplateRef::Custom(Arc::new(FnTemplate::new(name, Content::new(), render)))
    }

    /// Name of the referenced template.
    pub fn name(&self) -> &str {
        match self {
            TemplateRef::Named(name) => name,
            TemplateRef::Custom(template) => template.name(),
        }
    }
}

impl fmt::Debug for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateRef::Named(name) => f.debug_tuple("Named").field(name).finish(),
            TemplateRef::Custom(template) => {
                f.debug_tuple("Custom").field(&template.name()).finish()
            }
        }
    }
}

impl From<&str> for TemplateRef {
    fn from(name: &str) -> Self {
        TemplateRef::Named(name.to_string())
    }
}

impl From<String> for TemplateRef {
    fn from(name: String) -> Self {
        TemplateRef::Named(name)
    }
}

/// A template paired with the content it will render.
#[derive(Clone)]
pub struct ResolvedTemplate {
    pub template: Arc<dyn LabelTemplate>,
    pub content: Content,
}

impl ResolvedTemplate {
    /// Render the resolved content.
    pub fn render(&self, printer: &PrinterProfile) -> Result<LabelCommand> {
        self.template.render(&self.content, printer)
    }
}

impl fmt::Debug for ResolvedTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedTemplate")
            .field("template", &self.template.name())
            .field("content", &self.content)
            .finish()
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// Read-only registry of named templates.
///
/// Built once at startup and shared behind an `Arc`.
#[derive(Clone, Default)]
pub struct TemplateCatalog {
    templates: BTreeMap<String, Arc<dyn LabelTemplate>>,
}

impl TemplateCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog of built-in templates.
    pub fn builtin() -> Self {
        Self::new()
            .with(BasicNameBadge)
            .with(NameBadge)
            .with(TestLabel)
    }

    /// Add a template, replacing any template with the same name.
    pub fn with<T: LabelTemplate + 'static>(mut self, template: T) -> Self {
        self.templates
            .insert(template.name().to_string(), Arc::new(template));
        self
    }

    /// Template names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// All templates in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn LabelTemplate>> {
        self.templates.values()
    }

    /// Look up a template by name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn LabelTemplate>> {
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| ZebrellaError::UnknownTemplate(name.to_string()))
    }

    /// Resolve a template reference and pick the content to render.
    ///
    /// `content` wins when given; otherwise the template's default content is
    /// used unchanged.
    pub fn resolve(&self, template: &TemplateRef, content: Option<Content>) -> Result<ResolvedTemplate> {
        let template = match template {
            TemplateRef::Named(name) => self.get(name)?,
            TemplateRef::Custom(template) => Arc::clone(template),
        };
        let content = content.unwrap_or_else(|| template.default_content());
        Ok(ResolvedTemplate { template, content })
    }
}

impl fmt::Debug for TemplateCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::Label;
    use crate::printer::PrinterModel;
    use serde_json::json;

    fn printer() -> PrinterProfile {
        PrinterModel::ZEBRA_GK420T.profile("127.0.0.1")
    }

    fn object(value: Value) -> Content {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_builtin_names() {
        let catalog = TemplateCatalog::builtin();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["basic", "basicNameBadge", "nameBadge"]);
        assert!(catalog.get(DEFAULT_TEMPLATE).is_ok());
        assert!(catalog.get(TEST_TEMPLATE).is_ok());
    }

    #[test]
    fn test_resolve_unknown_name() {
        let catalog = TemplateCatalog::builtin();
        let err = catalog
            .resolve(&TemplateRef::from("unregistered-name"), None)
            .unwrap_err();
        assert!(matches!(err, ZebrellaError::UnknownTemplate(name) if name == "unregistered-name"));
    }

    #[test]
    fn test_resolve_uses_default_content_unchanged() {
        let catalog = TemplateCatalog::builtin();
        let resolved = catalog.resolve(&TemplateRef::from("nameBadge"), None).unwrap();
        let expected = catalog.get("nameBadge").unwrap().default_content();
        assert_eq!(resolved.content, expected);
    }

    #[test]
    fn test_resolve_prefers_supplied_content() {
        let catalog = TemplateCatalog::builtin();
        let content = object(json!({"fullName": "Grace Hopper", "region": "Navy"}));
        let resolved = catalog
            .resolve(&TemplateRef::from("basicNameBadge"), Some(content.clone()))
            .unwrap();
        assert_eq!(resolved.content, content);
    }

    #[test]
    fn test_resolve_custom_function() {
        let catalog = TemplateCatalog::new();
        let template = TemplateRef::function("inline", |content, printer| {
            let text = content
                .get("text")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            Label::new()
                .label_home(printer.dots(0.1), printer.dots(0.1))?
                .field_data(text)?
                .end()
        });
        let content = object(json!({"text": "hi"}));
        let resolved = catalog.resolve(&template, Some(content)).unwrap();
        let label = resolved.render(&printer()).unwrap();
        assert_eq!(label.text, "^XA^LH20,20^FDhi^FS^XZ");
    }

    #[test]
    fn test_render_is_deterministic() {
        let catalog = TemplateCatalog::builtin();
        for name in ["basic", "basicNameBadge", "nameBadge"] {
            let resolved = catalog.resolve(&TemplateRef::from(name), None).unwrap();
            let first = resolved.render(&printer()).unwrap();
            let second = resolved.render(&printer()).unwrap();
            assert_eq!(first.text, second.text, "template {name}");
        }
    }

    #[test]
    fn test_parse_content_reports_template() {
        let content = object(json!({"fullName": "x"}));
        let err = parse_content::<badges::BasicNameBadgeContent>("basicNameBadge", &content)
            .unwrap_err();
        match err {
            ZebrellaError::InvalidContent { template, message } => {
                assert_eq!(template, "basicNameBadge");
                assert!(message.contains("region"), "{message}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
