use crate::loader::DescriptionLoader;
use crate::types::Description;

// Default embedded demo machines
const DEMO_TEXTS: [(&str, &str); 3] = [
    ("write-one", include_str!("../demos/write-one.tm")),
    ("busy-beaver-2", include_str!("../demos/busy-beaver-2.tm")),
    ("binary-to-unary", include_str!("../demos/binary-to-unary.tm")),
];

lazy_static::lazy_static! {
    static ref DEMOS: Vec<(&'static str, Description)> = DEMO_TEXTS
        .iter()
        .filter_map(|(name, text)| {
            match DescriptionLoader::load_description_from_string(text) {
                Ok(description) => Some((*name, description)),
                Err(e) => {
                    eprintln!("failed to parse embedded demo {name}: {e}");
                    None
                }
            }
        })
        .collect();
}

/// The names of the embedded demo machines, in definition order.
pub fn demo_names() -> Vec<&'static str> {
    DEMOS.iter().map(|(name, _)| *name).collect()
}

/// Returns the parsed description of the named demo machine, if it exists.
pub fn demo(name: &str) -> Option<Description> {
    DEMOS
        .iter()
        .find(|(demo_name, _)| *demo_name == name)
        .map(|(_, description)| description.clone())
}
