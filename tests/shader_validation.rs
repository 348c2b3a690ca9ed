//! Validates the WGSL store shader with naga, so a typo in the shader
//! fails in CI instead of at first window open.

const STORE_SHADER: &str = include_str!("../shaders/store.wgsl");

#[test]
fn store_shader_parses_and_validates() {
    let module = naga::front::wgsl::parse_str(STORE_SHADER)
        .unwrap_or_else(|e| panic!("store.wgsl failed to parse:\n{}", e.emit_to_string(STORE_SHADER)));

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::default(),
    );
    validator
        .validate(&module)
        .expect("store.wgsl failed validation");
}

#[test]
fn store_shader_has_expected_entry_points() {
    let module = naga::front::wgsl::parse_str(STORE_SHADER).expect("parse");
    let names: Vec<_> = module.entry_points.iter().map(|ep| ep.name.as_str()).collect();
    assert!(names.contains(&"vs_main"));
    assert!(names.contains(&"fs_main"));
}
