//! Template property collection

use crate::catalog::{Template, TemplateProp};
use crate::error::{Result, ScaffoldError};
use crate::prompt::Prompter;
use crate::selection::select_one;

/// Name of the property seeded with the enclosing project's name
pub const PROJECT_PROP: &str = "PROJECT";

/// A resolved template property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

/// Produce one property value; either typed or picked from `options`
fn produce<P: Prompter + ?Sized>(prompter: &mut P, prop: &TemplateProp) -> Result<String> {
    if prop.options.is_empty() {
        return prompter.text(&prop.prompt, prop.default.as_deref());
    }
    let idx = select_one(prompter, &format!("{}:", prop.prompt), &prop.options)?;
    Ok(prop.options[idx].clone())
}

/// Collect the template's custom properties in declaration order
///
/// The list always starts with `PROJECT`. An empty answer aborts the whole
/// collection and nothing is returned.
pub fn collect_props<P: Prompter + ?Sized>(
    prompter: &mut P,
    template: &Template,
    project_name: &str,
) -> Result<Vec<Property>> {
    let mut props = vec![Property {
        name: PROJECT_PROP.to_string(),
        value: project_name.to_string(),
    }];

    for prop in &template.props {
        let value = produce(prompter, prop)?;
        if value.is_empty() {
            return Err(ScaffoldError::EmptyProperty(prop.name.clone()));
        }
        props.push(Property {
            name: prop.name.clone(),
            value,
        });
    }

    Ok(props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::testing::ScriptedPrompter;

    fn template(props: Vec<TemplateProp>) -> Template {
        Template {
            id: "ts-service".to_string(),
            name: "TypeScript service".to_string(),
            props,
            select_clients: false,
            before_create: Vec::new(),
        }
    }

    fn prop(name: &str, options: &[&str]) -> TemplateProp {
        TemplateProp {
            name: name.to_string(),
            prompt: format!("{name}?"),
            default: None,
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    #[test]
    fn test_project_is_first() {
        let mut prompter = ScriptedPrompter::new(["8080"]);
        let props = collect_props(&mut prompter, &template(vec![prop("PORT", &[])]), "shop").unwrap();
        assert_eq!(
            props,
            vec![
                Property {
                    name: "PROJECT".into(),
                    value: "shop".into()
                },
                Property {
                    name: "PORT".into(),
                    value: "8080".into()
                },
            ]
        );
    }

    #[test]
    fn test_empty_value_aborts_without_asking_further() {
        let mut prompter = ScriptedPrompter::new(["", "never-read"]);
        let tpl = template(vec![prop("PORT", &[]), prop("HOST", &[])]);
        let err = collect_props(&mut prompter, &tpl, "shop").unwrap_err();
        assert!(matches!(err, ScaffoldError::EmptyProperty(ref name) if name == "PORT"));
        assert_eq!(prompter.asked, 1);
    }

    #[test]
    fn test_whitespace_answer_is_kept_verbatim() {
        let mut prompter = ScriptedPrompter::new(["  ", " api "]);
        let tpl = template(vec![prop("X", &[]), prop("PREFIX", &[])]);
        let props = collect_props(&mut prompter, &tpl, "shop").unwrap();
        assert_eq!(props[1].value, "  ");
        assert_eq!(props[2].value, " api ");
    }

    #[test]
    fn test_options_use_numbered_menu() {
        let mut prompter = ScriptedPrompter::new(["2"]);
        let tpl = template(vec![prop("RUNTIME", &["node", "bun"])]);
        let props = collect_props(&mut prompter, &tpl, "shop").unwrap();
        assert_eq!(props[1].value, "bun");
    }
}
