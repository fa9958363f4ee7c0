use crate::common::{layouts_of, site};
use acf2g_babel::{ConverterRegistry, LayoutKind};

#[test]
fn test_stubbed_kinds_emit_their_names() {
    let store = site();
    let registry = ConverterRegistry::with_defaults();
    let layouts = layouts_of(&store, 4);

    let out: Vec<String> = layouts
        .iter()
        .map(|layout| registry.convert(layout, &store).unwrap())
        .collect();
    assert_eq!(
        out,
        vec!["video block", "box block", "measurement table block"]
    );
}

#[test]
fn test_every_stubbed_kind_is_flagged() {
    let registry = ConverterRegistry::with_defaults();
    let stubbed: Vec<LayoutKind> = registry
        .list_kinds()
        .into_iter()
        .filter(|kind| registry.get(*kind).unwrap().is_placeholder())
        .collect();

    assert_eq!(
        stubbed,
        vec![
            LayoutKind::MeasurementTable,
            LayoutKind::Box,
            LayoutKind::PostList,
            LayoutKind::ImageAndText,
            LayoutKind::Video,
        ]
    );
}
