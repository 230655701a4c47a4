//! Builds the [`Registry`] model from a parsed registry document.

use indexmap::IndexMap;
use regex::Regex;
use tracing::{debug, warn};

use crate::base::{Keyed, SpecRef, Version};
use crate::decl::{Parameter, parse_signature, parse_typedef};
use crate::error::{RegistryError, Result};
use crate::xml::XmlElement;

use super::Registry;
use super::model::{AddRemoveSet, EnumConstant, Extension, Feature, Function, Typedef};

const ROOT_TAG: &str = "registry";

/// Decode a `<registry>` element into typed collections.
pub(crate) fn build_registry(root: &XmlElement) -> Result<Registry> {
    if root.name != ROOT_TAG {
        return Err(RegistryError::invalid_registry(format!(
            "expected <{ROOT_TAG}> root, found <{}>",
            root.name
        )));
    }

    let mut typedefs = Keyed::new();
    let type_elements = root
        .elements_named("types")
        .flat_map(|types| types.elements_named("type"));
    for (ordinal, element) in type_elements.enumerate() {
        let typedef = build_typedef(element, ordinal)?;
        let key = SpecRef::new(typedef.name.clone(), typedef.api.as_deref());
        insert_entity(&mut typedefs, key, typedef, "typedef");
    }

    let mut constants = Keyed::new();
    for element in root
        .elements_named("enums")
        .flat_map(|group| group.elements_named("enum"))
    {
        let constant = build_constant(element)?;
        let key = SpecRef::new(constant.name.clone(), constant.api.as_deref());
        insert_entity(&mut constants, key, constant, "constant");
    }

    let mut functions = Keyed::new();
    for element in root
        .elements_named("commands")
        .flat_map(|commands| commands.elements_named("command"))
    {
        let function = build_function(element)?;
        let key = SpecRef::new(function.name.clone(), function.api.as_deref());
        insert_entity(&mut functions, key, function, "function");
    }

    let features = root
        .elements_named("feature")
        .map(build_feature)
        .collect::<Result<Vec<_>>>()?;

    let extensions = root
        .elements_named("extensions")
        .flat_map(|extensions| extensions.elements_named("extension"))
        .map(build_extension)
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "Built registry: {} functions, {} constants, {} typedefs, {} features, {} extensions",
        functions.len(),
        constants.len(),
        typedefs.len(),
        features.len(),
        extensions.len()
    );

    Ok(Registry {
        functions,
        constants,
        typedefs,
        features,
        extensions,
    })
}

fn insert_entity<T>(keyed: &mut Keyed<T>, key: SpecRef, value: T, kind: &str) {
    let (name, api) = (key.name.clone(), key.api.clone());
    if keyed.insert(key, value).is_some() {
        warn!("Duplicate {kind} {name} (api '{api}'); keeping the later declaration");
    }
}

fn required_attr<'a>(element: &'a XmlElement, key: &str) -> Result<&'a str> {
    element.attr_non_empty(key).ok_or_else(|| {
        RegistryError::invalid_registry(format!("<{}> without '{key}' attribute", element.name))
    })
}

fn build_typedef(element: &XmlElement, ordinal: usize) -> Result<Typedef> {
    let decl = parse_typedef(&element.children)?;
    // An inner <name> marker overrides the attribute.
    let name = decl
        .name
        .or_else(|| element.attr_non_empty("name").map(str::to_string))
        .ok_or_else(|| {
            RegistryError::invalid_registry(format!(
                "<type> without a name: '{}'",
                element.inner_markup()
            ))
        })?;

    Ok(Typedef {
        name,
        raw_declaration: decl.raw_declaration,
        requires: element.attr_non_empty("requires").map(str::to_string),
        api: element.attr_non_empty("api").map(str::to_string),
        ordinal,
    })
}

fn build_constant(element: &XmlElement) -> Result<EnumConstant> {
    Ok(EnumConstant {
        name: required_attr(element, "name")?.to_string(),
        value: required_attr(element, "value")?.to_string(),
        api: element.attr_non_empty("api").map(str::to_string),
    })
}

fn build_function(element: &XmlElement) -> Result<Function> {
    let proto = element
        .child("proto")
        .ok_or_else(|| RegistryError::invalid_registry("<command> without <proto>"))?;
    let (name, return_type) = parse_signature(&proto.children)?;
    if name.is_empty() {
        return Err(RegistryError::invalid_registry(format!(
            "<proto> without a name: '{}'",
            proto.inner_markup()
        )));
    }

    let parameters = element
        .elements_named("param")
        .map(|param| {
            let (param_name, ty) = parse_signature(&param.children)?;
            Ok(Parameter::new(param_name, ty))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Function {
        name,
        api: element.attr_non_empty("api").map(str::to_string),
        parameters,
        return_type,
        overloads: Vec::new(),
    })
}

fn build_feature(element: &XmlElement) -> Result<Feature> {
    let api = required_attr(element, "api")?.to_string();
    let version = Version::parse(required_attr(element, "number")?)?;
    Ok(Feature {
        name: element.attr("name").unwrap_or_default().to_string(),
        api,
        version,
        sets: build_sets(element),
    })
}

fn build_extension(element: &XmlElement) -> Result<Extension> {
    let name = required_attr(element, "name")?.to_string();
    let sets = build_sets(element);
    if sets.iter().any(AddRemoveSet::has_removals) {
        return Err(RegistryError::invalid_registry(format!(
            "extension {name} declares removals"
        )));
    }

    let supported = element.attr("supported").unwrap_or_default().to_string();
    let applicable_api = Regex::new(&format!("^(?:{supported})$"))
        .map_err(|e| RegistryError::pattern(supported.clone(), e))?;

    Ok(Extension {
        name,
        supported,
        applicable_api,
        sets,
    })
}

/// Gather `<require>`/`<remove>` blocks into one set per `(profile, api)`,
/// in order of first appearance.
fn build_sets(element: &XmlElement) -> Vec<AddRemoveSet> {
    let mut sets: IndexMap<(Option<String>, Option<String>), AddRemoveSet> = IndexMap::new();

    for block in element.elements() {
        let removing = match block.name.as_str() {
            "require" => false,
            "remove" => true,
            _ => continue,
        };
        let profile = block.attr_non_empty("profile").map(str::to_string);
        let api = block.attr_non_empty("api").map(str::to_string);
        let set = sets
            .entry((profile.clone(), api.clone()))
            .or_insert_with(|| AddRemoveSet {
                profile,
                api,
                ..AddRemoveSet::default()
            });

        for item in block.elements() {
            let Some(name) = item.attr_non_empty("name") else {
                continue;
            };
            let target = match (item.name.as_str(), removing) {
                ("command", false) => &mut set.added_functions,
                ("command", true) => &mut set.removed_functions,
                ("enum", false) => &mut set.added_constants,
                ("enum", true) => &mut set.removed_constants,
                // Types are pulled in by the typedef closure.
                _ => continue,
            };
            target.insert(name.to_string());
        }
    }

    sets.into_values().collect()
}
