use super::text_at;
use crate::coerce::expression_from_value;
use crate::draft::Draft;
use crate::engine::{Context, Handler};
use crate::error::{ParseError, WarningKind};
use crate::process::ProcessCatalog;
use serde_json::Value;
use ysld_model::{Expression, FeatureTypeStyle, Parameter, Transformation};

const DEFAULT_INPUT: &str = "data";

/// The rendering transformation of a feature type style.
///
/// Needs a process catalog: without one, or for a process the catalog does
/// not know, the transform is skipped with a warning.
pub struct TransformHandler {
    fts: Draft<FeatureTypeStyle>,
}

impl TransformHandler {
    pub fn new(fts: Draft<FeatureTypeStyle>) -> Self {
        Self { fts }
    }
}

impl Handler for TransformHandler {
    fn handle<'doc>(self: Box<Self>, node: &'doc Value, ctx: &mut Context<'doc, '_>) -> Result<(), ParseError> {
        let Some(catalog) = ctx.hints().processes() else {
            ctx.warn(WarningKind::MissingFeature, "No process catalog available, skipping transform");
            return Ok(());
        };
        if let Some(transformation) = build(node, catalog, ctx)? {
            log::debug!("Transform '{}' with {} parameters", transformation.name, transformation.parameters.len());
            self.fts.with(|f| f.transformation = Some(transformation));
        }
        Ok(())
    }
}

fn build(node: &Value, catalog: &dyn ProcessCatalog, ctx: &mut Context<'_, '_>) -> Result<Option<Transformation>, ParseError> {
    let name = text_at(node, "name").ok_or_else(|| ParseError::missing_key("name", "transform"))?;
    let Some(description) = catalog.describe(&name) else {
        ctx.warn(WarningKind::MissingFeature, format!("Unknown process '{name}', skipping transform"));
        return Ok(None);
    };

    let mut parameters = Vec::new();

    if let Some(params) = node.get("params").filter(|v| !v.is_null()) {
        let Value::Object(params) = params else {
            return Err(ParseError::shape(params, "a mapping of transform parameters"));
        };
        for (key, value) in params {
            let values = match value {
                Value::Array(items) => {
                    let mut values = Vec::with_capacity(items.len());
                    for item in items {
                        values.extend(argument(item, catalog, ctx)?);
                    }
                    values
                }
                other => argument(other, catalog, ctx)?.into_iter().collect(),
            };
            parameters.push(Parameter { name: key.clone(), values });
        }
    }

    // The data input is bound by the renderer unless the document feeds it.
    let input = text_at(node, "input").unwrap_or_else(|| DEFAULT_INPUT.to_string());
    if parameters.iter().all(|p| p.name != input) {
        parameters.insert(0, Parameter { name: input, values: Vec::new() });
    }

    for input in &description.inputs {
        let Some(variable) = input.role.env_default() else {
            continue;
        };
        if parameters.iter().all(|p| p.name != input.name) {
            parameters.push(Parameter {
                name: input.name.clone(),
                values: vec![Expression::function("env", vec![Expression::string(variable)])],
            });
        }
    }

    Ok(Some(Transformation { name, parameters }))
}

/// One argument value: a mapping with a `name` is a nested transform.
fn argument(value: &Value, catalog: &dyn ProcessCatalog, ctx: &mut Context<'_, '_>) -> Result<Option<Expression>, ParseError> {
    match value {
        Value::Object(map) if map.contains_key("name") => Ok(build(value, catalog, ctx)?
            .map(|transformation| Expression::Process { transformation: Box::new(transformation) })),
        Value::Object(_) => Err(ParseError::missing_key("name", "nested transform")),
        other => expression_from_value(other),
    }
}
